//! Opcode descriptors and tables

use crate::il::BinaryOp;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Size of the immediate that follows an opcode byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OperandWidth {
    None,
    Dword,
    Qword,
}

impl OperandWidth {
    pub fn bytes(self) -> usize {
        match self {
            OperandWidth::None => 0,
            OperandWidth::Dword => 4,
            OperandWidth::Qword => 8,
        }
    }
}

impl TryFrom<u8> for OperandWidth {
    type Error = String;

    fn try_from(bytes: u8) -> Result<Self, Self::Error> {
        match bytes {
            0 => Ok(OperandWidth::None),
            4 => Ok(OperandWidth::Dword),
            8 => Ok(OperandWidth::Qword),
            _ => Err(format!("operand width must be 0, 4 or 8 bytes, not {}", bytes)),
        }
    }
}

impl From<OperandWidth> for u8 {
    fn from(width: OperandWidth) -> u8 {
        width.bytes() as u8
    }
}

/// Which register a register-relative address is computed from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressBase {
    /// The argument area (`varg`, or `varg1`/`varg2`).
    Argument,

    /// The virtual register file (`vreg`).
    RegisterFile,
}

/// What an opcode does, as far as decoding and lifting are concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Nop,

    /// Push the immediate.
    StackPush,

    /// Pop two values, combine them, push the result.
    StackBinaryOp(BinaryOp),

    /// Pop an address, push the value loaded from it.
    MemoryRead,

    /// Pop an address, pop a value, store the value at the address.
    MemoryWrite,

    /// Push the sum of a base register and the immediate.
    RegisterRelativeAddress(AddressBase),

    UnconditionalBranch,

    Return,
}

impl Category {
    /// Net change in stack depth, in slots, after executing an instruction of
    /// this category.
    pub fn stack_effect(self) -> isize {
        match self {
            Category::Nop => 0,
            Category::StackPush => 1,
            Category::RegisterRelativeAddress(_) => 1,
            Category::StackBinaryOp(_) => -1,
            Category::MemoryRead => 0,
            Category::MemoryWrite => -2,
            Category::UnconditionalBranch => 0,
            Category::Return => 0,
        }
    }

    /// Yields `true` if instructions of this category carry an immediate.
    pub fn takes_operand(self) -> bool {
        match self {
            Category::StackPush
            | Category::RegisterRelativeAddress(_)
            | Category::UnconditionalBranch => true,
            _ => false,
        }
    }
}

/// An immutable instruction descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    mnemonic: String,
    width: OperandWidth,
    category: Category,
}

impl Opcode {
    pub fn new(mnemonic: &str, width: OperandWidth, category: Category) -> Self {
        Opcode {
            mnemonic: mnemonic.to_string(),
            width,
            category,
        }
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn operand_width(&self) -> OperandWidth {
        self.width
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Total encoded length: the opcode byte plus its immediate.
    pub fn length(&self) -> usize {
        1 + self.width.bytes()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic)
    }
}

/// Maps opcode bytes onto descriptors.
///
/// Several bytes may alias the same descriptor. Each descriptor is stored
/// once and every byte holds an index into the descriptor list.
#[derive(Clone, Debug)]
pub struct OpcodeTable {
    opcodes: Vec<Opcode>,
    index: [Option<usize>; 256],
}

impl Default for OpcodeTable {
    fn default() -> Self {
        OpcodeTable {
            opcodes: Vec::new(),
            index: [None; 256],
        }
    }
}

impl OpcodeTable {
    pub fn new() -> Self {
        OpcodeTable::default()
    }

    /// Add a descriptor reachable from every byte in `bytes`.
    ///
    /// Returns the first byte that is already taken, if any, in which case
    /// the table is left unchanged.
    pub fn insert(&mut self, bytes: &[u8], opcode: Opcode) -> Result<(), u8> {
        if let Some(taken) = bytes.iter().find(|b| self.index[**b as usize].is_some()) {
            return Err(*taken);
        }

        let slot = self.opcodes.len();
        self.opcodes.push(opcode);

        for b in bytes {
            self.index[*b as usize] = Some(slot);
        }

        Ok(())
    }

    pub fn lookup(&self, byte: u8) -> Option<&Opcode> {
        self.index[byte as usize].map(|slot| &self.opcodes[slot])
    }

    pub fn is_empty(&self) -> bool {
        self.opcodes.is_empty()
    }

    /// Every distinct descriptor, in insertion order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Opcode> {
        self.opcodes.iter()
    }

    /// Every assigned byte with its descriptor, in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Opcode)> + '_ {
        self.index
            .iter()
            .enumerate()
            .filter_map(move |(b, slot)| slot.map(|slot| (b as u8, &self.opcodes[slot])))
    }

    /// All bytes that decode to the same descriptor as `byte`.
    pub fn aliases(&self, byte: u8) -> Vec<u8> {
        match self.index[byte as usize] {
            Some(slot) => self
                .index
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == Some(slot))
                .map(|(b, _)| b as u8)
                .collect(),
            None => Vec::new(),
        }
    }
}
