//! Semantic lifting into IL

use crate::arch::tigress::{
    AddressBase, ArgumentBase, Category, Instruction, PopOrder, Register, REGISTER_WIDTH,
};
use crate::il::{BinaryOp, IlSink};

/// Emit the IL for one decoded instruction into `sink`.
///
/// Every value is `REGISTER_WIDTH` bytes wide.
pub fn lift<S: IlSink>(instr: &Instruction<'_>, sink: &mut S) {
    let w = REGISTER_WIDTH;

    match instr.category() {
        Category::Nop => sink.nop(),
        Category::StackPush => {
            let value = sink.constant(w, instr.operand().unwrap_or(0));
            sink.push(w, value);
        }
        Category::RegisterRelativeAddress(base) => {
            let operand = instr.operand().unwrap_or(0);
            let base = base_register(instr, base, operand);
            let base = sink.reg(w, base);
            let offset = sink.constant(instr.opcode().operand_width().bytes(), operand);
            let addr = sink.binary(BinaryOp::Add, w, base, offset);
            sink.push(w, addr);
        }
        Category::StackBinaryOp(op) if op.is_order_sensitive() => {
            let (first, second) = match instr.revision().pop_order(op) {
                PopOrder::LeftFirst => (Register::Vlhs, Register::Vrhs),
                PopOrder::RightFirst => (Register::Vrhs, Register::Vlhs),
            };

            let popped = sink.pop(w);
            sink.set_reg(w, first, popped);
            let popped = sink.pop(w);
            sink.set_reg(w, second, popped);

            let lhs = sink.reg(w, Register::Vlhs);
            let rhs = sink.reg(w, Register::Vrhs);
            let value = sink.binary(op, w, lhs, rhs);
            sink.push(w, value);
        }
        Category::StackBinaryOp(op) => {
            let lhs = sink.pop(w);
            let rhs = sink.pop(w);
            let value = sink.binary(op, w, lhs, rhs);
            sink.push(w, value);
        }
        Category::MemoryRead => {
            let addr = sink.pop(w);
            let value = sink.load(w, addr);
            sink.push(w, value);
        }
        Category::MemoryWrite => {
            let popped = sink.pop(w);
            sink.set_reg(w, Register::Vlhs, popped);
            let popped = sink.pop(w);
            sink.set_reg(w, Register::Vrhs, popped);

            let addr = sink.reg(w, Register::Vlhs);
            let value = sink.reg(w, Register::Vrhs);
            sink.store(w, addr, value);
        }
        Category::UnconditionalBranch => match instr.branch_target() {
            Some(target) => {
                let target = sink.constant(w, target);
                sink.jump(target);
            }
            None => sink.nop(),
        },
        Category::Return => sink.ret(),
    }
}

/// Pick the register a register-relative address is computed from.
///
/// Split argument areas keep argument zero in `varg1` and every other
/// argument in `varg2`.
fn base_register(instr: &Instruction<'_>, base: AddressBase, operand: u64) -> Register {
    match base {
        AddressBase::RegisterFile => Register::Vreg,
        AddressBase::Argument => match instr.revision().register_file().argument_base() {
            ArgumentBase::Split if operand == 0 => Register::Varg1,
            ArgumentBase::Split => Register::Varg2,
            _ => Register::Varg,
        },
    }
}
