//! Message input from a piped standard input.

use log::warn;
use restq::RestqError;
use std::borrow::Cow;
use std::io::{self, BufRead};

/// Reads the whole of stdin when it is a pipe, joining lines without a
/// separator. Returns an empty string without reading otherwise.
pub fn find_stdin() -> Result<String, RestqError> {
    read_piped(stdin_is_pipe(), io::stdin().lock())
}

/// Invalid UTF-8 is replaced rather than cutting the message short; a read
/// failure fails the whole message.
pub fn read_piped<R: BufRead>(is_pipe: bool, reader: R) -> Result<String, RestqError> {
    let mut message = String::new();
    if !is_pipe {
        return Ok(message);
    }

    for line in reader.split(b'\n') {
        let mut line = line.map_err(|e| RestqError::from_io_error(e, "stdin"))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let text = String::from_utf8_lossy(&line);
        if let Cow::Owned(_) = text {
            warn!("Replaced invalid UTF-8 in message read from stdin");
        }
        message.push_str(&text);
    }
    Ok(message)
}

#[cfg(unix)]
fn stdin_is_pipe() -> bool {
    use std::os::unix::fs::FileTypeExt;

    std::fs::metadata("/dev/stdin")
        .map(|metadata| metadata.file_type().is_fifo())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn stdin_is_pipe() -> bool {
    use std::io::IsTerminal;

    !io::stdin().is_terminal()
}
