//! Errors raised at the process boundary: files named on the command line,
//! the working directory and the terminal.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::application::ApplicationError;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A file outside the graph store could not be accessed.
    #[error("cannot {action} {}", path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine working directory")]
    WorkingDir(#[source] io::Error),

    #[error("cannot write to terminal")]
    Terminal(#[source] io::Error),
}

impl InfraError {
    pub fn file(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::File {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type InfraResult<T> = Result<T, InfraError>;
