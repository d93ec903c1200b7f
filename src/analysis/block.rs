//! Analysis sections (e.g. blocks)

use serde::Serialize;
use std::collections::BTreeSet;

/// Represents a sequence of instructions with the following properties:
///
/// 1. The sequence of instructions are executed in sequence.
/// 2. Control flow does not diverge within the block.
/// 3. At the end of a block, execution diverges to zero or more other
///    locations, one of which may be the next instruction in sequence.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Block {
    /// The start address of the block.
    start: u64,

    /// The offset to the end of the block.
    length: u64,

    /// Offsets known to be the start of instructions within the block.
    instr_offsets: BTreeSet<u64>,
}

impl Block {
    pub fn from_parts(start: u64, length: u64) -> Self {
        Block {
            start,
            length,
            instr_offsets: BTreeSet::new(),
        }
    }

    pub fn as_start(&self) -> u64 {
        self.start
    }

    pub fn as_length(&self) -> u64 {
        self.length
    }

    /// The address just past the last instruction of the block.
    pub fn end(&self) -> u64 {
        self.start.wrapping_add(self.length)
    }

    pub fn is_ptr_within_block(&self, ptr: u64) -> bool {
        self.start <= ptr && ptr.wrapping_sub(self.start) < self.length
    }

    /// Mark an offset as the start of an instruction.
    ///
    /// Offsets at or beyond the block length are ignored.
    pub fn mark_instr_at(&mut self, offset: u64) {
        if offset < self.length {
            self.instr_offsets.insert(offset);
        }
    }

    pub fn iter_instr_addresses(&self) -> impl Iterator<Item = u64> + '_ {
        let start = self.start;
        self.instr_offsets.iter().map(move |o| start.wrapping_add(*o))
    }
}
