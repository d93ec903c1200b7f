//! Stack-machine bytecode emitted by the Tigress code virtualizer
//!
//! Every virtualized function gets its own interpreter, and the instruction
//! set differs between obfuscator revisions. All revisions share the same
//! encoding rules: a one-byte opcode, optionally followed by a 4- or 8-byte
//! little-endian immediate.

mod dis;
mod instr;
mod lift;
mod opcode;
mod revision;
mod tables;
mod types;


pub use dis::{disassemble, render};
pub use instr::Instruction;
pub use lift::lift;
pub use opcode::{AddressBase, Category, Opcode, OpcodeTable, OperandWidth};
pub use revision::{observed_pop_orders, Inconsistency, OpcodeDef, Revision, RevisionDef};
pub use tables::{tigress1, tigress2, tigress3, tigress4, TIGRESS1, TIGRESS2, TIGRESS3, TIGRESS4};
pub use types::*;
