//! Writing rendered lines to the terminal.

use std::io::{self, Stdout, Write};

/// Write each line followed by a newline. The caller flushes.
///
/// Returns the number of lines written.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<usize> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(lines.len())
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}
