//! ISA revisions
//!
//! A revision bundles one opcode table, one register file and one branch
//! addressing mode, plus the per-operator pop order and the integer argument
//! registers. The decoder, renderer and lifter are shared by every revision
//! and consult it for all revision-specific behavior.
//!
//! A `Revision` can only be obtained through `Revision::from_def`, which
//! rejects inconsistent definitions, so everything downstream may assume the
//! definition is coherent.

use crate::analysis::{Error, Result};
use crate::arch::tigress::{
    AddressBase, ArgumentBase, BranchMode, Category, Opcode, OpcodeTable, OperandWidth, PopOrder,
    Register, RegisterFile,
};
use crate::il::BinaryOp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The ways a revision definition can contradict itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    #[error("register file has no stack pointer")]
    MissingStackPointer,

    #[error("register {0} is declared twice")]
    DuplicateRegister(Register),

    #[error("argument registers must be either varg alone or both varg1 and varg2")]
    AmbiguousArgumentRegisters,

    #[error("opcode byte {0:#04x} is assigned twice")]
    DuplicateOpcode(u8),

    #[error("opcode {mnemonic} has no bytes assigned")]
    UnassignedOpcode { mnemonic: String },

    #[error("opcode {mnemonic} cannot take a {width}-byte operand")]
    OperandWidthMismatch { mnemonic: String, width: usize },

    #[error("opcode {mnemonic} needs the vlhs and vrhs scratch registers")]
    MissingScratchRegisters { mnemonic: String },

    #[error("opcode {mnemonic} needs an argument register")]
    MissingArgumentRegister { mnemonic: String },

    #[error("opcode {mnemonic} needs the vreg register")]
    MissingRegisterFileBase { mnemonic: String },

    #[error("calling convention register {0} is not in the register file")]
    UnknownConventionRegister(Register),

    #[error("{0} is not a known operator")]
    UnknownOperator(String),

    #[error("operator {0:?} does not depend on operand order")]
    UnorderedOperator(BinaryOp),

    #[error("opcode table is empty")]
    EmptyTable,
}

/// One opcode in a revision definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpcodeDef {
    pub bytes: Vec<u8>,
    pub mnemonic: String,
    pub width: OperandWidth,
    pub category: Category,
}

/// The pop order observed for the order-sensitive operators.
///
/// Subtraction and left shift pop the left operand first; logical right
/// shift pops the right operand first.
pub fn observed_pop_orders() -> BTreeMap<String, PopOrder> {
    let mut orders = BTreeMap::new();
    orders.insert("sub".to_string(), PopOrder::LeftFirst);
    orders.insert("shl".to_string(), PopOrder::LeftFirst);
    orders.insert("lsr".to_string(), PopOrder::RightFirst);
    orders
}

/// Declarative form of a revision, as written in revision definition files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionDef {
    pub name: String,
    pub branch_mode: BranchMode,
    pub registers: Vec<Register>,

    #[serde(default)]
    pub calling_convention: Vec<Register>,

    /// Pop order per order-sensitive operator, keyed by operator name.
    #[serde(default = "observed_pop_orders")]
    pub pop_orders: BTreeMap<String, PopOrder>,

    pub opcodes: Vec<OpcodeDef>,
}

impl RevisionDef {
    pub fn new(name: &str, branch_mode: BranchMode) -> Self {
        RevisionDef {
            name: name.to_string(),
            branch_mode,
            registers: Vec::new(),
            calling_convention: Vec::new(),
            pop_orders: observed_pop_orders(),
            opcodes: Vec::new(),
        }
    }

    pub fn registers(mut self, registers: &[Register]) -> Self {
        self.registers = registers.to_vec();
        self
    }

    pub fn calling_convention(mut self, registers: &[Register]) -> Self {
        self.calling_convention = registers.to_vec();
        self
    }

    pub fn pop_order(mut self, op: BinaryOp, order: PopOrder) -> Self {
        self.pop_orders.insert(operator_key(op), order);
        self
    }

    pub fn opcode(
        mut self,
        bytes: &[u8],
        mnemonic: &str,
        width: OperandWidth,
        category: Category,
    ) -> Self {
        self.opcodes.push(OpcodeDef {
            bytes: bytes.to_vec(),
            mnemonic: mnemonic.to_string(),
            width,
            category,
        });
        self
    }
}

fn operator_key(op: BinaryOp) -> String {
    serde_plain::to_string(&op).unwrap_or_else(|_| format!("{:?}", op).to_ascii_lowercase())
}

/// A validated ISA revision.
#[derive(Clone, Debug)]
pub struct Revision {
    name: String,
    opcodes: OpcodeTable,
    registers: RegisterFile,
    branch_mode: BranchMode,
    pop_orders: Vec<(BinaryOp, PopOrder)>,
    calling_convention: Vec<Register>,
}

impl Revision {
    /// Validate a revision definition and build the revision it describes.
    pub fn from_def(def: &RevisionDef) -> Result<Self> {
        let invalid = |reason| Error::InvalidRevisionState {
            revision: def.name.clone(),
            reason,
        };

        let registers = RegisterFile::new(&def.registers);
        check_registers(&registers).map_err(invalid)?;

        for reg in def.calling_convention.iter() {
            if !registers.contains(*reg) {
                return Err(invalid(Inconsistency::UnknownConventionRegister(*reg)));
            }
        }

        let mut pop_orders = Vec::new();
        for (key, order) in def.pop_orders.iter() {
            let op: BinaryOp = serde_plain::from_str(key)
                .map_err(|_| invalid(Inconsistency::UnknownOperator(key.clone())))?;

            if !op.is_order_sensitive() {
                return Err(invalid(Inconsistency::UnorderedOperator(op)));
            }

            pop_orders.push((op, *order));
        }

        let mut opcodes = OpcodeTable::new();
        for op in def.opcodes.iter() {
            check_opcode(op, &registers).map_err(invalid)?;

            opcodes
                .insert(
                    &op.bytes,
                    Opcode::new(&op.mnemonic, op.width, op.category),
                )
                .map_err(|byte| invalid(Inconsistency::DuplicateOpcode(byte)))?;
        }

        if opcodes.is_empty() {
            return Err(invalid(Inconsistency::EmptyTable));
        }

        Ok(Revision {
            name: def.name.clone(),
            opcodes,
            registers,
            branch_mode: def.branch_mode,
            pop_orders,
            calling_convention: def.calling_convention.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opcodes(&self) -> &OpcodeTable {
        &self.opcodes
    }

    pub fn lookup(&self, byte: u8) -> Option<&Opcode> {
        self.opcodes.lookup(byte)
    }

    pub fn register_file(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn branch_mode(&self) -> BranchMode {
        self.branch_mode
    }

    /// Which operand an order-sensitive operator pops first.
    ///
    /// Operators the definition leaves out fall back to the observed order.
    pub fn pop_order(&self, op: BinaryOp) -> PopOrder {
        match self.pop_orders.iter().find(|(o, _)| *o == op) {
            Some((_, order)) => *order,
            None => observed_pop_orders()
                .get(&operator_key(op))
                .copied()
                .unwrap_or(PopOrder::LeftFirst),
        }
    }

    pub fn integer_arguments(&self) -> &[Register] {
        &self.calling_convention
    }

    /// The longest instruction this revision can encode.
    pub fn max_instruction_length(&self) -> usize {
        self.opcodes
            .descriptors()
            .map(Opcode::length)
            .max()
            .unwrap_or(1)
    }
}

fn check_registers(registers: &RegisterFile) -> std::result::Result<(), Inconsistency> {
    if !registers.contains(Register::Vsp) {
        return Err(Inconsistency::MissingStackPointer);
    }

    let mut seen = Vec::new();
    for reg in registers.iter() {
        if seen.contains(&reg) {
            return Err(Inconsistency::DuplicateRegister(reg));
        }

        seen.push(reg);
    }

    let single = registers.contains(Register::Varg);
    let first = registers.contains(Register::Varg1);
    let second = registers.contains(Register::Varg2);

    if (single && (first || second)) || first != second {
        return Err(Inconsistency::AmbiguousArgumentRegisters);
    }

    Ok(())
}

fn check_opcode(op: &OpcodeDef, registers: &RegisterFile) -> std::result::Result<(), Inconsistency> {
    if op.bytes.is_empty() {
        return Err(Inconsistency::UnassignedOpcode {
            mnemonic: op.mnemonic.clone(),
        });
    }

    if op.category.takes_operand() == (op.width == OperandWidth::None) {
        return Err(Inconsistency::OperandWidthMismatch {
            mnemonic: op.mnemonic.clone(),
            width: op.width.bytes(),
        });
    }

    let needs_scratch = match op.category {
        Category::StackBinaryOp(binop) => binop.is_order_sensitive(),
        Category::MemoryWrite => true,
        _ => false,
    };

    if needs_scratch && !registers.has_scratch() {
        return Err(Inconsistency::MissingScratchRegisters {
            mnemonic: op.mnemonic.clone(),
        });
    }

    match op.category {
        Category::RegisterRelativeAddress(AddressBase::Argument)
            if registers.argument_base() == ArgumentBase::Absent =>
        {
            Err(Inconsistency::MissingArgumentRegister {
                mnemonic: op.mnemonic.clone(),
            })
        }
        Category::RegisterRelativeAddress(AddressBase::RegisterFile)
            if !registers.contains(Register::Vreg) =>
        {
            Err(Inconsistency::MissingRegisterFileBase {
                mnemonic: op.mnemonic.clone(),
            })
        }
        _ => Ok(()),
    }
}
