use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// A caller-supplied argument is outside the accepted range (e.g. a zero phrase width,
    /// or more than one input path while reading from a pipe).
    InvalidArgument(String),
    /// A named input file could not be opened or read. Aborts the whole run; partial
    /// results from other files are never emitted.
    FileAccessError(PathBuf, std::io::Error),
    /// A non-file stream (standard input) failed mid-read.
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            Error::FileAccessError(path, err) => {
                write!(f, "File Access Error: {}: {}", path.display(), err)
            }
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileAccessError(_, err) | Error::IoError(err) => Some(err),
            Error::InvalidArgument(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}
