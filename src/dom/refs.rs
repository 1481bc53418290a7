//! Set-once element references.
//!
//! A `RefHandle` is populated by a mount callback and read afterwards. It
//! never owns what it points to; the element tree does.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("{name} reference is already mounted to another element")]
    AlreadyMounted { name: &'static str },
}

#[derive(Debug, Clone)]
pub struct RefHandle<T> {
    name: &'static str,
    current: Option<T>,
}

impl<T: Copy + Eq> RefHandle<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            current: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> Option<T> {
        self.current
    }

    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }

    /// Record the mounted value. Mounting the same value again is accepted;
    /// a different value requires an unmount first.
    pub fn mount(&mut self, value: T) -> Result<(), MountError> {
        match self.current {
            Some(current) if current != value => {
                Err(MountError::AlreadyMounted { name: self.name })
            }
            _ => {
                self.current = Some(value);
                Ok(())
            }
        }
    }

    pub fn unmount(&mut self) {
        self.current = None;
    }

    /// Ref-callback entry point: `Some` mounts, `None` unmounts.
    pub fn handle_ref(&mut self, value: Option<T>) -> Result<(), MountError> {
        match value {
            Some(value) => self.mount(value),
            None => {
                self.unmount();
                Ok(())
            }
        }
    }
}
