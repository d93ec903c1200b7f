//! Instruction decoding

use crate::analysis::{Error, Result};
use crate::arch::tigress::{BranchMode, Category, Opcode, Revision};

/// A single decoded instruction.
///
/// Borrows its descriptor from the revision it was decoded with; nothing
/// about it outlives the call that consumes it.
#[derive(Copy, Clone, Debug)]
pub struct Instruction<'a> {
    revision: &'a Revision,
    opcode: &'a Opcode,
    byte: u8,
    address: u64,
    operand: Option<u64>,
}

impl<'a> Instruction<'a> {
    /// Decode the instruction at the start of `bytes`, which lives at
    /// `address`.
    ///
    /// The window may run past the end of the instruction; only the bytes
    /// the instruction occupies are read.
    pub fn decode(revision: &'a Revision, bytes: &[u8], address: u64) -> Result<Self> {
        let byte = *bytes.first().ok_or(Error::TruncatedInput {
            address,
            needed: 1,
            available: 0,
        })?;

        let opcode = revision
            .lookup(byte)
            .ok_or(Error::UnrecognizedOpcode {
                opcode: byte,
                address,
            })?;

        let length = opcode.length();
        if bytes.len() < length {
            return Err(Error::TruncatedInput {
                address,
                needed: length,
                available: bytes.len(),
            });
        }

        let operand = if length > 1 {
            Some(
                bytes[1..length]
                    .iter()
                    .rev()
                    .fold(0u64, |acc, b| (acc << 8) | u64::from(*b)),
            )
        } else {
            None
        };

        Ok(Instruction {
            revision,
            opcode,
            byte,
            address,
            operand,
        })
    }

    pub fn revision(&self) -> &'a Revision {
        self.revision
    }

    pub fn opcode(&self) -> &'a Opcode {
        self.opcode
    }

    /// The opcode byte actually present in the stream.
    pub fn byte(&self) -> u8 {
        self.byte
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn operand(&self) -> Option<u64> {
        self.operand
    }

    pub fn category(&self) -> Category {
        self.opcode.category()
    }

    pub fn length(&self) -> usize {
        self.opcode.length()
    }

    /// Address of the instruction that follows this one in the stream.
    pub fn next_address(&self) -> u64 {
        self.address.wrapping_add(self.length() as u64)
    }

    /// Where this instruction transfers control to, if it is a branch.
    pub fn branch_target(&self) -> Option<u64> {
        if self.category() != Category::UnconditionalBranch {
            return None;
        }

        let operand = self.operand?;

        Some(match self.revision.branch_mode() {
            BranchMode::Absolute => operand.wrapping_add(1),
            BranchMode::RelativeToNextInstruction => self.next_address().wrapping_add(operand),
        })
    }
}
