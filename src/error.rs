use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("[{program}] not found: {reason}")]
    ExecutableNotFound { program: String, reason: String },

    #[error("failed to execute `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed ({status}):\n{output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("failed to read target index: {0}")]
    InputRead(#[source] io::Error),

    #[error("invalid target index {input:?}: {source}")]
    InputParse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("index {index} is out of range, expected 0..{len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("invalid filter pattern: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SelectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_includes_captured_output() {
        let err = SelectError::CommandFailed {
            command: "git checkout nope".to_string(),
            status: "exit status: 1".to_string(),
            output: "error: pathspec 'nope' did not match".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("`git checkout nope` failed (exit status: 1)"));
        assert!(message.ends_with("error: pathspec 'nope' did not match"));
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = SelectError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index 5 is out of range, expected 0..2");
    }
}
