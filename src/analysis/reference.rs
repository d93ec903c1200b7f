//! Types needed to analyze references

use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Control transfers unconditionally to the target.
    Branch,

    /// Control leaves the current procedure.
    Return,
}

impl Display for ReferenceKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ReferenceKind::Branch => write!(f, "LOC"),
            ReferenceKind::Return => write!(f, "RET"),
        }
    }
}

/// A control-flow edge leaving an instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Reference {
    from: u64,
    to: Option<u64>,
    kind: ReferenceKind,
}

impl Reference {
    pub fn new_static_ref(from: u64, to: u64, kind: ReferenceKind) -> Self {
        Reference {
            from,
            to: Some(to),
            kind,
        }
    }

    pub fn new_dyn_ref(from: u64, kind: ReferenceKind) -> Self {
        Reference {
            from,
            to: None,
            kind,
        }
    }

    pub fn as_source(&self) -> u64 {
        self.from
    }

    pub fn as_target(&self) -> Option<u64> {
        self.to
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.to {
            Some(to) => write!(f, "{} {:#x} -> {:#x}", self.kind, self.from, to),
            None => write!(f, "{} {:#x}", self.kind, self.from),
        }
    }
}
