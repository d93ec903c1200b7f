//! Control flow and text rendering of decoded instructions

use crate::analysis::{Disasm, Flow, Reference, ReferenceKind};
use crate::arch::tigress::{Category, Instruction};
use crate::ast::{literal, Token};

/// Determine the length and control flow of a decoded instruction.
pub fn disassemble(instr: &Instruction<'_>) -> Disasm {
    let from = instr.address();

    match instr.category() {
        Category::UnconditionalBranch => {
            let targets = match instr.branch_target() {
                Some(to) => vec![Reference::new_static_ref(from, to, ReferenceKind::Branch)],
                None => vec![Reference::new_dyn_ref(from, ReferenceKind::Branch)],
            };

            Disasm::new(instr.length(), Flow::Branching(false), targets)
        }
        Category::Return => Disasm::new(
            instr.length(),
            Flow::Returning,
            vec![Reference::new_dyn_ref(from, ReferenceKind::Return)],
        ),
        _ => Disasm::new(instr.length(), Flow::Normal, Vec::new()),
    }
}

/// Produce the display tokens of a decoded instruction.
///
/// Operands are shown as they are encoded, in hex, even for branches whose
/// real target differs from the operand.
pub fn render(instr: &Instruction<'_>) -> Vec<Token> {
    let mut tokens = vec![Token::instruction(instr.opcode().mnemonic())];

    if let Some(operand) = instr.operand() {
        tokens.push(Token::separator(" "));
        tokens.push(Token::possible_address(literal::format_hex(operand), operand));
    }

    tokens
}
