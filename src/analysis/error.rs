//! Error type for analysis

use crate::arch::tigress::Inconsistency;
use std::{io, result};
use thiserror::Error;

/// Error type for analysis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The opcode byte is not part of the active revision.
    ///
    /// This is the expected outcome for data, or for code of another
    /// revision. It only ever concerns the one address it was raised for.
    #[error("unrecognized opcode {opcode:#04x} at {address:#x}")]
    UnrecognizedOpcode { opcode: u8, address: u64 },

    /// The byte window ends before the instruction does.
    #[error("truncated instruction at {address:#x}: needs {needed} bytes, {available} available")]
    TruncatedInput {
        address: u64,
        needed: usize,
        available: usize,
    },

    /// A revision definition contradicts itself.
    ///
    /// Raised only while a revision is being built or registered, never while
    /// decoding.
    #[error("revision {revision} is inconsistent: {reason}")]
    InvalidRevisionState {
        revision: String,
        reason: Inconsistency,
    },

    #[error("revision {0} is already registered")]
    RevisionAlreadyRegistered(String),

    #[error("revision {0} is not registered")]
    UnknownRevision(String),
}

impl Error {
    /// Yields `true` for errors that only concern a single instruction.
    pub fn is_per_instruction(&self) -> bool {
        matches!(
            self,
            Error::UnrecognizedOpcode { .. } | Error::TruncatedInput { .. }
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        let kind = match err {
            Error::UnrecognizedOpcode { .. } | Error::TruncatedInput { .. } => {
                io::ErrorKind::InvalidData
            }
            Error::UnknownRevision(_) => io::ErrorKind::NotFound,
            _ => io::ErrorKind::InvalidInput,
        };

        io::Error::new(kind, err)
    }
}

pub type Result<T> = result::Result<T, Error>;
