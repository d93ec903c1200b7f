//! IL expression and statement types

use crate::arch::tigress::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-operand arithmetic and bitwise operators the lifter can emit.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Mul,
    Or,
    And,
    Sub,
    Shl,
    Lsr,
}

impl BinaryOp {
    /// Yields `true` if swapping the operands can change the result.
    ///
    /// Order-sensitive operators are lifted through the `vlhs`/`vrhs` scratch
    /// registers so that the two pops are sequenced explicitly.
    pub fn is_order_sensitive(self) -> bool {
        match self {
            BinaryOp::Add | BinaryOp::Mul | BinaryOp::Or | BinaryOp::And => false,
            BinaryOp::Sub | BinaryOp::Shl | BinaryOp::Lsr => true,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Mul => "*",
            BinaryOp::Or => "|",
            BinaryOp::And => "&",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Lsr => "u>>",
        }
    }
}

/// A value-producing IL expression.
///
/// `Pop` is an expression, not a statement: its side effect on the stack
/// happens when the enclosing statement is evaluated, left to right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Const { width: usize, value: u64 },
    Reg { width: usize, reg: Register },
    Pop { width: usize },
    Load { width: usize, addr: Box<Expr> },
    Binary {
        op: BinaryOp,
        width: usize,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Count how many stack slots evaluating this expression consumes.
    pub fn pops(&self) -> usize {
        match self {
            Expr::Const { .. } | Expr::Reg { .. } => 0,
            Expr::Pop { .. } => 1,
            Expr::Load { addr, .. } => addr.pops(),
            Expr::Binary { lhs, rhs, .. } => lhs.pops() + rhs.pops(),
        }
    }
}

/// A single IL statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    Nop,
    Push { width: usize, value: Expr },
    SetReg { width: usize, reg: Register, value: Expr },
    Store { width: usize, addr: Expr, value: Expr },
    Jump { target: Expr },
    Ret,
}

impl Stmt {
    /// Net change in stack depth, in slots, caused by this statement.
    pub fn stack_effect(&self) -> isize {
        match self {
            Stmt::Nop | Stmt::Ret => 0,
            Stmt::Push { value, .. } => 1 - value.pops() as isize,
            Stmt::SetReg { value, .. } => -(value.pops() as isize),
            Stmt::Store { addr, value, .. } => -((addr.pops() + value.pops()) as isize),
            Stmt::Jump { target } => -(target.pops() as isize),
        }
    }
}

fn width_suffix(width: usize) -> &'static str {
    match width {
        1 => ".b",
        2 => ".w",
        4 => ".d",
        8 => ".q",
        _ => "",
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const { value, .. } => write!(f, "{:#x}", value),
            Expr::Reg { reg, .. } => write!(f, "{}", reg),
            Expr::Pop { width } => write!(f, "pop{}", width_suffix(*width)),
            Expr::Load { width, addr } => write!(f, "[{}]{}", addr, width_suffix(*width)),
            Expr::Binary { op, lhs, rhs, .. } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Nop => write!(f, "nop"),
            Stmt::Push { width, value } => write!(f, "push{}({})", width_suffix(*width), value),
            Stmt::SetReg { reg, value, .. } => write!(f, "{} = {}", reg, value),
            Stmt::Store { width, addr, value } => {
                write!(f, "[{}]{} = {}", addr, width_suffix(*width), value)
            }
            Stmt::Jump { target } => write!(f, "jump({})", target),
            Stmt::Ret => write!(f, "return"),
        }
    }
}
