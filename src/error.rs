use std::io;

use thiserror::Error;

use crate::dom::{ElementId, MountError};
use crate::theme::ThemeError;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to mount screen: {0}")]
    Mount(#[from] MountError),
    #[error("element tree has no parent {0:?}")]
    MissingParent(ElementId),
    #[error("invalid theme: {0}")]
    Theme(#[from] ThemeError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
