use std::fmt;
use std::io;

#[derive(Debug)]
pub enum HeadError {
    Io(io::Error),
    NotReadable { path: String },
}

impl std::error::Error for HeadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for HeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadError::Io(e) => write!(f, "I/O error: {}", e),
            HeadError::NotReadable { path } => {
                write!(f, "\"{}\" is not a readable file", path)
            }
        }
    }
}

impl From<io::Error> for HeadError {
    fn from(err: io::Error) -> Self {
        HeadError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, HeadError>;
