use std::error::Error;
use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::parser::ParseError;
use crate::Args;

/// Print the startup line in green (works on Windows CMD via termcolor).
pub fn print_banner(cfg: &Args) {
    let mut stdout = StandardStream::stdout(ColorChoice::Always);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_intense(true));
    let _ = writeln!(
        &mut stdout,
        "Replaying {} -> {}:{}{}",
        cfg.file.display(),
        cfg.send_ip,
        cfg.send_port,
        if cfg.repeat { " (looping)" } else { "" }
    );
    let _ = stdout.reset();
}

/// Per-line skip warning in yellow; the pass continues afterwards.
pub fn warn_skip(err: &ParseError) {
    let mut stderr = StandardStream::stderr(ColorChoice::Always);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_intense(true));
    let _ = writeln!(&mut stderr, "Skipping line: {}", err);
    let _ = stderr.reset();
}

/// Fatal error report in red, printed once before the process exits.
pub fn print_error(err: &dyn Error) {
    let mut stderr = StandardStream::stderr(ColorChoice::Always);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_intense(true));
    let _ = writeln!(&mut stderr, "Error: {}", err);
    let _ = stderr.reset();
}
