//! IL sink trait

use crate::arch::tigress::Register;
use crate::il::BinaryOp;

/// A host-owned destination for lifted IL.
///
/// Expression builders return handles of the sink's own choosing; statement
/// builders consume those handles and append one statement to the sink's
/// current instruction. A lifter only ever calls statement builders in program
/// order, so a sink may evaluate expression handles lazily.
pub trait IlSink {
    /// Handle type returned by the expression builders.
    type Expr;

    fn constant(&mut self, width: usize, value: u64) -> Self::Expr;

    fn reg(&mut self, width: usize, reg: Register) -> Self::Expr;

    /// Pop a value off of the stack addressed by the stack pointer.
    fn pop(&mut self, width: usize) -> Self::Expr;

    fn load(&mut self, width: usize, addr: Self::Expr) -> Self::Expr;

    fn binary(&mut self, op: BinaryOp, width: usize, lhs: Self::Expr, rhs: Self::Expr)
        -> Self::Expr;

    fn nop(&mut self);

    /// Push a value onto the stack addressed by the stack pointer.
    fn push(&mut self, width: usize, value: Self::Expr);

    fn set_reg(&mut self, width: usize, reg: Register, value: Self::Expr);

    fn store(&mut self, width: usize, addr: Self::Expr, value: Self::Expr);

    fn jump(&mut self, target: Self::Expr);

    /// Return from the current procedure without a value.
    fn ret(&mut self);
}
