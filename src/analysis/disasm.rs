//! Disassembly result type

use crate::analysis::{Flow, Reference};

/// Everything a host needs to extend its control-flow graph past one
/// instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disasm {
    length: usize,
    flow: Flow,
    targets: Vec<Reference>,
}

impl Disasm {
    pub fn new(length: usize, flow: Flow, targets: Vec<Reference>) -> Self {
        Disasm {
            length,
            flow,
            targets,
        }
    }

    /// The encoded size of the instruction.
    ///
    /// Unless `flow` says otherwise, the next instruction starts this many
    /// bytes further along.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn targets(&self) -> &[Reference] {
        &self.targets
    }
}
