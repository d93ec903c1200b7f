//! Types used in modeling the virtual machine

use serde::{Deserialize, Serialize};
use std::{fmt, result, str};

/// Enumeration of every virtual register any revision may declare.
///
/// None of these hold values while decoding. They are names that lifted IL
/// refers to, and which revision declares which is fixed by its register
/// file.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Register {
    /// The virtual stack pointer. Every revision has one.
    Vsp,

    /// Base address of the incoming argument area.
    Varg,

    /// First half of a split argument base.
    Varg1,

    /// Second half of a split argument base.
    Varg2,

    /// Base address of the virtual register file.
    Vreg,

    /// Scratch holder for the left operand of an order-sensitive operation.
    Vlhs,

    /// Scratch holder for the right operand of an order-sensitive operation.
    Vrhs,
}

impl Register {
    pub fn name(self) -> &'static str {
        use Register::*;

        match self {
            Vsp => "vsp",
            Varg => "varg",
            Varg1 => "varg1",
            Varg2 => "varg2",
            Vreg => "vreg",
            Vlhs => "vlhs",
            Vrhs => "vrhs",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl str::FromStr for Register {
    type Err = ();

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        use Register::*;

        match s.to_ascii_lowercase().as_ref() {
            "vsp" => Ok(Vsp),
            "varg" => Ok(Varg),
            "varg1" => Ok(Varg1),
            "varg2" => Ok(Varg2),
            "vreg" => Ok(Vreg),
            "vlhs" => Ok(Vlhs),
            "vrhs" => Ok(Vrhs),
            _ => Err(()),
        }
    }
}

serde_plain::derive_deserialize_from_str!(Register, "valid virtual register name");
serde_plain::derive_serialize_from_display!(Register);

/// Width of every virtual register, in bytes.
pub const REGISTER_WIDTH: usize = 8;

/// How a register file exposes the argument area.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgumentBase {
    /// A single `varg` register.
    Single,

    /// A `varg1`/`varg2` pair, chosen by the argument index.
    Split,

    /// No argument register at all.
    Absent,
}

/// The fixed set of registers one revision declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    registers: Vec<Register>,
}

impl RegisterFile {
    /// Construct a register file in declaration order.
    ///
    /// No validation happens here; a `Revision` checks the file it is built
    /// with before it becomes usable.
    pub fn new(registers: &[Register]) -> Self {
        RegisterFile {
            registers: registers.to_vec(),
        }
    }

    pub fn stack_pointer(&self) -> Register {
        Register::Vsp
    }

    pub fn contains(&self, reg: Register) -> bool {
        self.registers.contains(&reg)
    }

    pub fn as_slice(&self) -> &[Register] {
        &self.registers
    }

    pub fn iter(&self) -> impl Iterator<Item = Register> + '_ {
        self.registers.iter().copied()
    }

    pub fn argument_base(&self) -> ArgumentBase {
        if self.contains(Register::Varg) {
            ArgumentBase::Single
        } else if self.contains(Register::Varg1) && self.contains(Register::Varg2) {
            ArgumentBase::Split
        } else {
            ArgumentBase::Absent
        }
    }

    /// Yields `true` if both `vlhs` and `vrhs` are declared.
    pub fn has_scratch(&self) -> bool {
        self.contains(Register::Vlhs) && self.contains(Register::Vrhs)
    }
}

/// How an unconditional branch operand becomes a target address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchMode {
    /// The target is the operand plus one.
    Absolute,

    /// The target is the branch's own address plus the operand plus the
    /// branch's encoded length.
    RelativeToNextInstruction,
}

impl fmt::Display for BranchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchMode::Absolute => f.pad("absolute"),
            BranchMode::RelativeToNextInstruction => f.pad("relative"),
        }
    }
}

/// Which operand an order-sensitive operator pops first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopOrder {
    /// The first pop is the left operand (into `vlhs`).
    LeftFirst,

    /// The first pop is the right operand (into `vrhs`).
    RightFirst,
}
