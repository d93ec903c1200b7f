//! Virtual instruction sets that vlift can decode and lift.
//!
//! Each family of virtual ISAs is implemented as a child module to this one.
//! A family provides a runtime description of one concrete ISA (for Tigress,
//! a `Revision`), and that description implements `Architecture`, which is
//! the only interface analysis passes and hosts use.
//!
//! Built-in revisions are named by `RevisionName`; revisions loaded from
//! definition files live alongside them in a `Registry`.

pub mod tigress;

mod registry;
mod traits;

pub use registry::Registry;
pub use traits::Architecture;

use crate::arch::tigress::Revision;
use std::{fmt, str};

/// Enumeration of all revisions that ship with vlift.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RevisionName {
    Tigress1,
    Tigress2,
    Tigress3,
    Tigress4,
}

impl RevisionName {
    pub fn all() -> &'static [RevisionName] {
        &[
            RevisionName::Tigress1,
            RevisionName::Tigress2,
            RevisionName::Tigress3,
            RevisionName::Tigress4,
        ]
    }

    pub fn revision(self) -> &'static Revision {
        match self {
            RevisionName::Tigress1 => &tigress::TIGRESS1,
            RevisionName::Tigress2 => &tigress::TIGRESS2,
            RevisionName::Tigress3 => &tigress::TIGRESS3,
            RevisionName::Tigress4 => &tigress::TIGRESS4,
        }
    }
}

impl fmt::Display for RevisionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionName::Tigress1 => write!(f, "tigress1"),
            RevisionName::Tigress2 => write!(f, "tigress2"),
            RevisionName::Tigress3 => write!(f, "tigress3"),
            RevisionName::Tigress4 => write!(f, "tigress4"),
        }
    }
}

impl str::FromStr for RevisionName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "tigress1" => Ok(RevisionName::Tigress1),
            "tigress2" => Ok(RevisionName::Tigress2),
            "tigress3" => Ok(RevisionName::Tigress3),
            "tigress4" => Ok(RevisionName::Tigress4),
            _ => Err(()),
        }
    }
}

serde_plain::derive_deserialize_from_str!(RevisionName, "valid revision name");
serde_plain::derive_serialize_from_display!(RevisionName);
