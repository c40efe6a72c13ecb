//! Blocking error notices

use console::{measure_text_width, pad_str, style, Alignment, Term};

/// Lines of the boxed notice for `message`
pub fn error_box(message: &str) -> Vec<String> {
    let inner = measure_text_width(message).max("Error!".len());
    let pad = |text: &str| pad_str(text, inner, Alignment::Left, None).into_owned();

    vec![
        format!("┌{}┐", "─".repeat(inner + 2)),
        format!("│ {} │", style(pad("Error!")).red().bold()),
        format!("│ {} │", pad(message)),
        format!("└{}┘", "─".repeat(inner + 2)),
        style("Press any key to continue").dim().to_string(),
    ]
}

/// Show `message` and wait for a key. Falls back to stderr without a terminal.
pub fn show_error(term: &Term, message: &str) -> std::io::Result<()> {
    tracing::warn!(target: "board::notify", message, "Showing error notice");

    if !term.is_term() {
        eprintln!("Error! {}", message);
        return Ok(());
    }

    term.clear_screen()?;
    for line in error_box(message) {
        term.write_line(&line)?;
    }
    term.read_key()?;
    Ok(())
}
