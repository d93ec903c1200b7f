//! Analysis of instruction control flow

use serde::Serialize;

/// Indicates what kind of control flow a particular instruction involves.
///
/// Control flow determines in what order instructions are executed within a
/// procedure. This implies the notion of a "next" instruction, present at the
/// address following the current instruction, and zero or more alternative
/// targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Normal control flow.
    ///
    /// Instruction control predictably flows from the current instruction to
    /// the following instruction.
    Normal,

    /// Branching control flow.
    ///
    /// Instruction control diverges at this point with a number of possible
    /// continuing branches. The boolean parameter indicates whether or not the
    /// following instruction is one of them.
    Branching(bool),

    /// Returning control flow.
    ///
    /// Instruction control flow for this procedure ends.
    Returning,
}

impl Flow {
    /// Yields `true` if the following instruction may execute next.
    pub fn is_nonfinal(self) -> bool {
        match self {
            Flow::Normal => true,
            Flow::Branching(with_next) => with_next,
            Flow::Returning => false,
        }
    }

    /// Yields `true` if this instruction does not end its block.
    pub fn is_nonbranching(self) -> bool {
        match self {
            Flow::Normal => true,
            Flow::Branching(_) => false,
            Flow::Returning => false,
        }
    }
}
