//! In-memory IL sink

use crate::arch::tigress::Register;
use crate::il::{BinaryOp, Expr, IlSink, Stmt};
use std::slice;

/// An `IlSink` that records statements as plain data.
///
/// Statements are grouped by the instruction address they were lifted from,
/// set with `at` before each lift.
#[derive(Clone, Debug, Default)]
pub struct ListBuilder {
    address: u64,
    stmts: Vec<(u64, Stmt)>,
}

impl ListBuilder {
    pub fn new() -> Self {
        ListBuilder::default()
    }

    /// Set the address attributed to statements appended from now on.
    pub fn at(&mut self, address: u64) -> &mut Self {
        self.address = address;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn iter(&self) -> slice::Iter<(u64, Stmt)> {
        self.stmts.iter()
    }

    /// Statements without their addresses.
    pub fn stmts(&self) -> impl Iterator<Item = &Stmt> {
        self.stmts.iter().map(|(_, s)| s)
    }

    pub fn into_stmts(self) -> Vec<Stmt> {
        self.stmts.into_iter().map(|(_, s)| s).collect()
    }

    pub fn into_parts(self) -> Vec<(u64, Stmt)> {
        self.stmts
    }

    /// Sum of the stack effect of every recorded statement.
    pub fn stack_effect(&self) -> isize {
        self.stmts().map(Stmt::stack_effect).sum()
    }

    fn append(&mut self, stmt: Stmt) {
        self.stmts.push((self.address, stmt));
    }
}

impl IlSink for ListBuilder {
    type Expr = Expr;

    fn constant(&mut self, width: usize, value: u64) -> Expr {
        Expr::Const { width, value }
    }

    fn reg(&mut self, width: usize, reg: Register) -> Expr {
        Expr::Reg { width, reg }
    }

    fn pop(&mut self, width: usize) -> Expr {
        Expr::Pop { width }
    }

    fn load(&mut self, width: usize, addr: Expr) -> Expr {
        Expr::Load {
            width,
            addr: Box::new(addr),
        }
    }

    fn binary(&mut self, op: BinaryOp, width: usize, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            width,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    fn nop(&mut self) {
        self.append(Stmt::Nop);
    }

    fn push(&mut self, width: usize, value: Expr) {
        self.append(Stmt::Push { width, value });
    }

    fn set_reg(&mut self, width: usize, reg: Register, value: Expr) {
        self.append(Stmt::SetReg { width, reg, value });
    }

    fn store(&mut self, width: usize, addr: Expr, value: Expr) {
        self.append(Stmt::Store { width, addr, value });
    }

    fn jump(&mut self, target: Expr) {
        self.append(Stmt::Jump { target });
    }

    fn ret(&mut self) {
        self.append(Stmt::Ret);
    }
}
