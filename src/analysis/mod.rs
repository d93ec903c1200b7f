//! Tools for analysis of disassembled program code

mod block;
mod disasm;
mod error;
mod flow;
mod passes;
mod reference;

#[cfg(test)]
mod tests;

pub use block::Block;
pub use disasm::Disasm;
pub use error::Error;
pub use error::Result;
pub use flow::Flow;
pub use passes::{default_label, disassemble_block, lift_block, lift_blocks, scan, Listing};
pub use reference::Reference;
pub use reference::ReferenceKind;
