//! Concrete evaluation of lifted IL

use crate::arch::tigress::Register;
use crate::il::{BinaryOp, Expr, Stmt};
use std::collections::HashMap;

/// What a statement does to the flow of execution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    /// Execution continues with the next statement.
    Continue,

    /// Execution transfers to the given address.
    Jump(u64),

    /// The current procedure returned.
    Return,
}

/// Represents a bundle of concrete virtual machine state.
///
/// Registers and memory that were never written read as zero. Memory is
/// byte-addressed and multi-byte values are little-endian. The stack grows
/// downwards through the stack pointer register: a push decrements it by the
/// pushed width and then stores, a pop loads and then increments.
#[derive(Clone, Debug)]
pub struct Machine {
    stack_pointer: Register,
    cpu_state: HashMap<Register, u64>,
    mem_state: HashMap<u64, u8>,
}

fn mask(width: usize) -> u64 {
    if width >= 8 {
        u64::MAX
    } else {
        (1u64 << (width * 8)) - 1
    }
}

impl Machine {
    pub fn new(stack_pointer: Register, stack_top: u64) -> Self {
        let mut cpu_state = HashMap::new();
        cpu_state.insert(stack_pointer, stack_top);

        Machine {
            stack_pointer,
            cpu_state,
            mem_state: HashMap::new(),
        }
    }

    pub fn get_register(&self, reg: Register) -> u64 {
        self.cpu_state.get(&reg).copied().unwrap_or(0)
    }

    pub fn set_register(&mut self, reg: Register, value: u64) {
        self.cpu_state.insert(reg, value);
    }

    /// Determine if any byte of the given range was ever written.
    pub fn memory_was_written(&self, addr: u64, width: usize) -> bool {
        (0..width as u64).any(|i| self.mem_state.contains_key(&addr.wrapping_add(i)))
    }

    pub fn read(&self, addr: u64, width: usize) -> u64 {
        (0..width as u64).rev().fold(0, |acc, i| {
            let byte = self
                .mem_state
                .get(&addr.wrapping_add(i))
                .copied()
                .unwrap_or(0);
            acc << 8 | byte as u64
        })
    }

    pub fn write(&mut self, addr: u64, width: usize, value: u64) {
        for i in 0..width {
            self.mem_state
                .insert(addr.wrapping_add(i as u64), (value >> (i * 8)) as u8);
        }
    }

    pub fn push(&mut self, width: usize, value: u64) {
        let sp = self
            .get_register(self.stack_pointer)
            .wrapping_sub(width as u64);
        self.set_register(self.stack_pointer, sp);
        self.write(sp, width, value);
    }

    pub fn pop(&mut self, width: usize) -> u64 {
        let sp = self.get_register(self.stack_pointer);
        let value = self.read(sp, width);
        self.set_register(self.stack_pointer, sp.wrapping_add(width as u64));
        value
    }

    /// Evaluate an expression, applying the stack effects of any pops it
    /// contains. Binary operands are evaluated left first.
    pub fn eval(&mut self, expr: &Expr) -> u64 {
        match expr {
            Expr::Const { width, value } => value & mask(*width),
            Expr::Reg { width, reg } => self.get_register(*reg) & mask(*width),
            Expr::Pop { width } => self.pop(*width),
            Expr::Load { width, addr } => {
                let addr = self.eval(addr);
                self.read(addr, *width)
            }
            Expr::Binary {
                op,
                width,
                lhs,
                rhs,
            } => {
                let lhs = self.eval(lhs);
                let rhs = self.eval(rhs);
                let value = match op {
                    BinaryOp::Add => lhs.wrapping_add(rhs),
                    BinaryOp::Mul => lhs.wrapping_mul(rhs),
                    BinaryOp::Or => lhs | rhs,
                    BinaryOp::And => lhs & rhs,
                    BinaryOp::Sub => lhs.wrapping_sub(rhs),
                    BinaryOp::Shl => {
                        if rhs >= 64 {
                            0
                        } else {
                            lhs << rhs
                        }
                    }
                    BinaryOp::Lsr => {
                        if rhs >= 64 {
                            0
                        } else {
                            lhs >> rhs
                        }
                    }
                };

                value & mask(*width)
            }
        }
    }

    pub fn execute(&mut self, stmt: &Stmt) -> Control {
        match stmt {
            Stmt::Nop => Control::Continue,
            Stmt::Push { width, value } => {
                let value = self.eval(value);
                self.push(*width, value);
                Control::Continue
            }
            Stmt::SetReg { width, reg, value } => {
                let value = self.eval(value) & mask(*width);
                self.set_register(*reg, value);
                Control::Continue
            }
            Stmt::Store { width, addr, value } => {
                let addr = self.eval(addr);
                let value = self.eval(value);
                self.write(addr, *width, value);
                Control::Continue
            }
            Stmt::Jump { target } => Control::Jump(self.eval(target)),
            Stmt::Ret => Control::Return,
        }
    }

    /// Execute statements in order, stopping at the first one that leaves
    /// straight-line execution.
    pub fn run<'a, I>(&mut self, stmts: I) -> Control
    where
        I: IntoIterator<Item = &'a Stmt>,
    {
        for stmt in stmts {
            match self.execute(stmt) {
                Control::Continue => continue,
                other => return other,
            }
        }

        Control::Continue
    }
}
