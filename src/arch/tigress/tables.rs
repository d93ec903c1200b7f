//! Built-in revision tables

use crate::arch::tigress::AddressBase::{Argument, RegisterFile};
use crate::arch::tigress::Category::*;
use crate::arch::tigress::OperandWidth::{Dword, None as NoOperand, Qword};
use crate::arch::tigress::Register::*;
use crate::arch::tigress::{BranchMode, Revision, RevisionDef};
use crate::il::BinaryOp::*;

/// The first observed revision.
///
/// Absolute 8-byte branch targets, a single argument register, no return
/// opcode.
pub fn tigress1() -> RevisionDef {
    RevisionDef::new("tigress1", BranchMode::Absolute)
        .registers(&[Vsp, Varg, Vreg, Vlhs, Vrhs])
        .calling_convention(&[Varg])
        .opcode(&[0x60, 0xE1], "loadq", Qword, StackPush)
        .opcode(&[0x4E], "nop", NoOperand, Nop)
        .opcode(&[0xC7], "mulq", NoOperand, StackBinaryOp(Mul))
        .opcode(&[0x8E], "ldarg", Dword, RegisterRelativeAddress(Argument))
        .opcode(&[0x61, 0x6E], "rmem", NoOperand, MemoryRead)
        .opcode(&[0x0E, 0x5F, 0x3C, 0x27], "addq", NoOperand, StackBinaryOp(Add))
        .opcode(&[0x90], "lead", Dword, RegisterRelativeAddress(RegisterFile))
        .opcode(&[0xDF], "wmem", NoOperand, MemoryWrite)
        .opcode(&[0x56], "orq", NoOperand, StackBinaryOp(Or))
        .opcode(&[0x4A], "andq", NoOperand, StackBinaryOp(And))
        .opcode(&[0x42], "subq", NoOperand, StackBinaryOp(Sub))
        .opcode(&[0x5D], "shlq", NoOperand, StackBinaryOp(Shl))
        .opcode(&[0x2B], "shrq", NoOperand, StackBinaryOp(Lsr))
        .opcode(&[0xF4], "jmp", Qword, UnconditionalBranch)
}

/// Like `tigress1`, without a register-file base and with a return opcode.
pub fn tigress2() -> RevisionDef {
    RevisionDef::new("tigress2", BranchMode::Absolute)
        .registers(&[Vsp, Varg, Vlhs, Vrhs])
        .calling_convention(&[Varg])
        .opcode(&[0x60], "loadq", Qword, StackPush)
        .opcode(&[0x4E], "nop", NoOperand, Nop)
        .opcode(&[0xC7], "mulq", NoOperand, StackBinaryOp(Mul))
        .opcode(&[0x8E], "ldarg", Dword, RegisterRelativeAddress(Argument))
        .opcode(&[0x61], "rmem", NoOperand, MemoryRead)
        .opcode(&[0x0E, 0x5F], "addq", NoOperand, StackBinaryOp(Add))
        .opcode(&[0xDF], "wmem", NoOperand, MemoryWrite)
        .opcode(&[0x56], "orq", NoOperand, StackBinaryOp(Or))
        .opcode(&[0x4A], "andq", NoOperand, StackBinaryOp(And))
        .opcode(&[0x42], "subq", NoOperand, StackBinaryOp(Sub))
        .opcode(&[0x5D], "shlq", NoOperand, StackBinaryOp(Shl))
        .opcode(&[0x2B], "shrq", NoOperand, StackBinaryOp(Lsr))
        .opcode(&[0xF4], "jmp", Qword, UnconditionalBranch)
        .opcode(&[0xB3], "ret", NoOperand, Return)
}

/// Split argument registers and 4-byte branches relative to the next
/// instruction.
///
/// The argument index is encoded directly in `ldarg`, so no calling
/// convention list is needed.
pub fn tigress3() -> RevisionDef {
    RevisionDef::new("tigress3", BranchMode::RelativeToNextInstruction)
        .registers(&[Vsp, Varg1, Varg2, Vreg, Vlhs, Vrhs])
        .opcode(&[0x60, 0xE1], "loadq", Qword, StackPush)
        .opcode(&[0x4E], "nop", NoOperand, Nop)
        .opcode(&[0xC7], "mulq", NoOperand, StackBinaryOp(Mul))
        .opcode(&[0x8E], "ldarg", Dword, RegisterRelativeAddress(Argument))
        .opcode(&[0x61], "rmem", NoOperand, MemoryRead)
        .opcode(&[0x0E, 0x5F, 0x3C, 0x27], "addq", NoOperand, StackBinaryOp(Add))
        .opcode(&[0x90], "lead", Dword, RegisterRelativeAddress(RegisterFile))
        .opcode(&[0xDF], "wmem", NoOperand, MemoryWrite)
        .opcode(&[0x56], "orq", NoOperand, StackBinaryOp(Or))
        .opcode(&[0x4A], "andq", NoOperand, StackBinaryOp(And))
        .opcode(&[0x42], "subq", NoOperand, StackBinaryOp(Sub))
        .opcode(&[0x5D], "shlq", NoOperand, StackBinaryOp(Shl))
        .opcode(&[0x2B], "shrq", NoOperand, StackBinaryOp(Lsr))
        .opcode(&[0xF4], "jmp", Dword, UnconditionalBranch)
        .opcode(&[0xB3], "ret", NoOperand, Return)
}

/// Single argument register, 4-byte relative branches and a 4-byte
/// immediate push.
pub fn tigress4() -> RevisionDef {
    RevisionDef::new("tigress4", BranchMode::RelativeToNextInstruction)
        .registers(&[Vsp, Varg, Vreg, Vlhs, Vrhs])
        .calling_convention(&[Varg])
        .opcode(&[0x60, 0xE1], "loadq", Qword, StackPush)
        .opcode(&[0x71], "loadl", Dword, StackPush)
        .opcode(&[0x4E], "nop", NoOperand, Nop)
        .opcode(&[0xC7], "mulq", NoOperand, StackBinaryOp(Mul))
        .opcode(&[0x8E], "ldarg", Dword, RegisterRelativeAddress(Argument))
        .opcode(&[0x61, 0x6E], "rmem", NoOperand, MemoryRead)
        .opcode(&[0x0E, 0x3C], "addq", NoOperand, StackBinaryOp(Add))
        .opcode(&[0x90], "lead", Dword, RegisterRelativeAddress(RegisterFile))
        .opcode(&[0xDF], "wmem", NoOperand, MemoryWrite)
        .opcode(&[0x56], "orq", NoOperand, StackBinaryOp(Or))
        .opcode(&[0x4A], "andq", NoOperand, StackBinaryOp(And))
        .opcode(&[0x42], "subq", NoOperand, StackBinaryOp(Sub))
        .opcode(&[0x5D], "shlq", NoOperand, StackBinaryOp(Shl))
        .opcode(&[0x2B], "shrq", NoOperand, StackBinaryOp(Lsr))
        .opcode(&[0xF4], "jmp", Dword, UnconditionalBranch)
        .opcode(&[0xC3], "ret", NoOperand, Return)
}

lazy_static! {
    pub static ref TIGRESS1: Revision =
        Revision::from_def(&tigress1()).expect("built-in revision tigress1 is inconsistent");
    pub static ref TIGRESS2: Revision =
        Revision::from_def(&tigress2()).expect("built-in revision tigress2 is inconsistent");
    pub static ref TIGRESS3: Revision =
        Revision::from_def(&tigress3()).expect("built-in revision tigress3 is inconsistent");
    pub static ref TIGRESS4: Revision =
        Revision::from_def(&tigress4()).expect("built-in revision tigress4 is inconsistent");
}
