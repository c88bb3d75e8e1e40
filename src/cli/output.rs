//! Terminal output.
//!
//! Results go to stdout, errors and hints to stderr. `NO_COLOR` disables
//! styling.

use console::{style, StyledObject};

fn plain() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Apply `paint` unless colors are off.
fn paint<'a>(text: &'a str, paint: fn(StyledObject<&'a str>) -> StyledObject<&'a str>) -> String {
    if plain() {
        text.to_string()
    } else {
        paint(style(text)).to_string()
    }
}

/// `✓ created secret API_KEY in repository octo/app`
pub fn success(msg: &str) {
    println!("{} {}", paint("✓", |s| s.green()), msg);
}

/// `✗ invalid scope: ...` on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗", |s| s.red().bold()), msg);
}

/// `→ set GITHUB_TOKEN or pass --token` on stderr.
pub fn hint(msg: &str) {
    eprintln!("{} {}", paint("→", |s| s.cyan()), paint(msg, |s| s.cyan()));
}

/// Secondary information, e.g. no-op results.
pub fn dimmed(msg: &str) {
    println!("{}", paint(msg, |s| s.dim()));
}

/// A secret or variable name.
pub fn key(name: &str) -> String {
    paint(name, |s| s.cyan())
}
