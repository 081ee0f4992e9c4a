use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ViewerError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The replay blob parsed but describes something the viewer cannot play.
    InvalidReplay(String),
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Io(err) => write!(f, "i/o error: {err}"),
            ViewerError::Json(err) => write!(f, "malformed JSON: {err}"),
            ViewerError::InvalidReplay(msg) => write!(f, "invalid replay: {msg}"),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ViewerError::Io(err) => Some(err),
            ViewerError::Json(err) => Some(err),
            ViewerError::InvalidReplay(_) => None,
        }
    }
}

impl From<io::Error> for ViewerError {
    fn from(err: io::Error) -> Self {
        ViewerError::Io(err)
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Json(err)
    }
}
