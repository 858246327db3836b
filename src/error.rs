use std::error;
use std::fmt;
use std::result;

/// Errors produced when constructing or decoding a `Pair<K, V>`.
#[derive(Debug)]
pub enum Error {
    /// A required argument was absent. Holds the name of the argument.
    InvalidArgument(&'static str),
    SerdeError(bincode::Error),
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Error {
        Error::SerdeError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidArgument(_) => None,
            Error::SerdeError(error) => Some(&**error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(name) => {
                write!(f, "invalid argument: {} must not be absent", name)
            },
            Error::SerdeError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
