//! Terminal rendering of result lists.

use colored::*;

use crate::results::{FieldKind, ResultList};

/// Renders `results` for the terminal, framed by blank lines.
///
/// Labels are bold blue and values bold white; error fields show their value
/// in red. Coloring follows `colored`'s global switch, so callers that
/// disabled it (`--no-color`, non-TTY) get plain text.
pub fn render(results: &ResultList) -> String {
    let mut out = String::from("\n");
    for field in results {
        let line = match field.kind {
            FieldKind::Separator => String::new(),
            FieldKind::Header => field.label.blue().bold().to_string(),
            FieldKind::Entry => format!(
                "{} {}",
                format!("{}:", field.label).blue().bold(),
                field.value.bright_white().bold()
            ),
            FieldKind::Error => format!(
                "{} {}",
                format!("{}:", field.label).blue().bold(),
                field.value.red().bold()
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Prints `results` to stdout.
pub fn print_results(results: &ResultList) {
    print!("{}", render(results));
}
