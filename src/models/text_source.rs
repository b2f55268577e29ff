use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::models::Error;

/// A single resolved text input: either a named file or the standard input stream.
///
/// The orchestrator iterates a list of these uniformly; which variants end up in that list is
/// decided once at startup by [`TextSource::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    FilePath(PathBuf),
    StandardInput,
}

impl TextSource {
    /// Resolves the positional arguments into the list of sources a run will read.
    ///
    /// `piped` is the caller's one-time determination of whether standard input is connected
    /// to a pipe or redirection rather than an interactive terminal.
    ///
    /// - Piped with no path: read standard input.
    /// - Piped with one path: read that file instead (the path overrides the stream).
    /// - Piped with several paths: rejected, since a piped run reads a single stream.
    /// - Interactive: one source per named file, in argument order. No files is valid and
    ///   resolves to no sources at all.
    pub fn resolve(filenames: &[PathBuf], piped: bool) -> Result<Vec<TextSource>, Error> {
        if piped {
            match filenames {
                [] => Ok(vec![TextSource::StandardInput]),
                [path] => Ok(vec![TextSource::FilePath(path.clone())]),
                _ => Err(Error::InvalidArgument(
                    "at most one input path is accepted when reading from a pipe".to_string(),
                )),
            }
        } else {
            Ok(filenames
                .iter()
                .cloned()
                .map(TextSource::FilePath)
                .collect())
        }
    }

    /// Reads the entire source into a string.
    ///
    /// File failures carry the offending path and abort the run; nothing downstream sees a
    /// partially-read source list.
    pub fn read(&self) -> Result<String, Error> {
        match self {
            TextSource::FilePath(path) => {
                debug!("Reading input file: {}", path.display());
                fs::read_to_string(path).map_err(|err| Error::FileAccessError(path.clone(), err))
            }
            TextSource::StandardInput => {
                debug!("Reading standard input");
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }
}
