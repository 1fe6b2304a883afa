use std::io;

use crate::error::Result;
use crate::error::SelectError;

pub const PROMPT: &str = "insert target index: ";

/// Prompt for a branch index and read it from `stdin`.
///
/// The line must be newline-terminated; surrounding `\r`/`\n` are stripped
/// before parsing. Bounds are not checked here.
pub fn read_index(stdin: &mut impl io::BufRead, stdout: &mut impl io::Write) -> Result<i64> {
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = stdin.read_line(&mut line).map_err(SelectError::InputRead)?;
    if read == 0 || !line.ends_with('\n') {
        return Err(SelectError::InputRead(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before end of line",
        )));
    }

    let text = line.trim_matches(|c| c == '\r' || c == '\n');
    text.parse::<i64>()
        .map_err(|source| SelectError::InputParse {
            input: text.to_string(),
            source,
        })
}
