use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the strict validation pass.
///
/// The evaluation engine itself is total and never produces one of these;
/// only the `validate` pre-pass does, for callers that want to reject
/// malformed input up front instead of accepting the lenient best-effort
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression failed strict validation; the message names the
    /// offending character and its position
    ParseError(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::ParseError(ref message) => write!(fmt, "ParseError: {}", message),
        }
    }
}

impl error::Error for Error {}
