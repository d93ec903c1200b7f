//! Architecture trait

use crate::analysis::{Disasm, Result};
use crate::arch::tigress::{self, Instruction, Register, Revision, REGISTER_WIDTH};
use crate::ast::Token;
use crate::il::IlSink;

/// Everything a disassembly host needs from a virtual instruction set.
///
/// Each method is a pure function of the instruction set and the byte window
/// it is handed; nothing is cached between calls, so one value may be shared
/// freely across threads. For a given window the lengths reported by
/// `instruction_info`, `instruction_text` and `instruction_il` always agree,
/// and they fail in the same way on the same input.
pub trait Architecture: Send + Sync {
    /// The name hosts should present for this instruction set.
    fn name(&self) -> &str;

    /// The longest instruction the instruction set can encode.
    ///
    /// Hosts should hand out windows at least this long where the image
    /// allows it.
    fn max_instruction_length(&self) -> usize;

    /// Determine the length and control flow of the instruction at `address`.
    fn instruction_info(&self, bytes: &[u8], address: u64) -> Result<Disasm>;

    /// Render the instruction at `address` as display tokens, alongside its
    /// length.
    fn instruction_text(&self, bytes: &[u8], address: u64) -> Result<(Vec<Token>, usize)>;

    /// Lift the instruction at `address` into `sink` and return its length.
    ///
    /// If the instruction cannot be decoded, the sink is left untouched.
    fn instruction_il<S: IlSink>(&self, bytes: &[u8], address: u64, sink: &mut S)
        -> Result<usize>
    where
        Self: Sized;

    /// Every register lifted IL may refer to.
    fn registers(&self) -> &[Register];

    fn stack_pointer(&self) -> Register;

    /// Width of every register, in bytes.
    fn register_width(&self) -> usize;

    /// Registers that carry integer arguments into a virtualized function.
    fn calling_convention(&self) -> &[Register];
}

impl Architecture for Revision {
    fn name(&self) -> &str {
        Revision::name(self)
    }

    fn max_instruction_length(&self) -> usize {
        Revision::max_instruction_length(self)
    }

    fn instruction_info(&self, bytes: &[u8], address: u64) -> Result<Disasm> {
        let instr = Instruction::decode(self, bytes, address)?;

        Ok(tigress::disassemble(&instr))
    }

    fn instruction_text(&self, bytes: &[u8], address: u64) -> Result<(Vec<Token>, usize)> {
        let instr = Instruction::decode(self, bytes, address)?;

        Ok((tigress::render(&instr), instr.length()))
    }

    fn instruction_il<S: IlSink>(&self, bytes: &[u8], address: u64, sink: &mut S) -> Result<usize> {
        let instr = Instruction::decode(self, bytes, address)?;
        tigress::lift(&instr, sink);

        Ok(instr.length())
    }

    fn registers(&self) -> &[Register] {
        self.register_file().as_slice()
    }

    fn stack_pointer(&self) -> Register {
        self.register_file().stack_pointer()
    }

    fn register_width(&self) -> usize {
        REGISTER_WIDTH
    }

    fn calling_convention(&self) -> &[Register] {
        self.integer_arguments()
    }
}
