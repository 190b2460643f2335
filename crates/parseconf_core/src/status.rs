//! Integer result codes and their human-readable strings.
//!
//! Embedders that surface parseconf results through an integer exit status (or an FFI boundary) use
//! these codes. Negative values are errors; `0` is success; small positive values are the scanner's
//! non-error outcomes.

use std::fmt;

/// Result code taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    AlreadyExists,
    OutOfMemory,
    InvalidArguments,
    Error,
    Ok,
    /// A statement ended with its terminator.
    Last,
    /// The rest of the line is a comment.
    Comment,
    /// Nothing but blanks remained on the line.
    Empty,
}

impl Status {
    pub const fn code(self) -> i32 {
        match self {
            Status::AlreadyExists => -4,
            Status::OutOfMemory => -3,
            Status::InvalidArguments => -2,
            Status::Error => -1,
            Status::Ok => 0,
            Status::Last => 1,
            Status::Comment => 2,
            Status::Empty => 3,
        }
    }

    pub const fn from_code(code: i32) -> Option<Status> {
        match code {
            -4 => Some(Status::AlreadyExists),
            -3 => Some(Status::OutOfMemory),
            -2 => Some(Status::InvalidArguments),
            -1 => Some(Status::Error),
            0 => Some(Status::Ok),
            1 => Some(Status::Last),
            2 => Some(Status::Comment),
            3 => Some(Status::Empty),
            _ => None,
        }
    }

    pub const fn is_error(self) -> bool {
        self.code() < 0
    }

    /// Human-readable string; only error codes have one.
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Status::AlreadyExists => Some("Already exists"),
            Status::OutOfMemory => Some("Out of memory"),
            Status::InvalidArguments => Some("Invalid arguments"),
            Status::Error => Some("Generic error"),
            Status::Ok | Status::Last | Status::Comment | Status::Empty => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(UNKNOWN_ERROR))
    }
}

const UNKNOWN_ERROR: &str = "Unknown error";

/// Describe an integer result code.
///
/// Any code without a dedicated string (success included) is an "Unknown error".
pub fn strerror(code: i32) -> &'static str {
    Status::from_code(code)
        .and_then(Status::as_str)
        .unwrap_or(UNKNOWN_ERROR)
}
