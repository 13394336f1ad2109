//! JSON output on stdout.

use std::io::Write;

use serde::Serialize;

/// Write `value` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
