//! A display representation of disassembled code

pub mod literal;
mod line;
mod token;

#[cfg(test)]
mod tests;

pub use line::Line;
pub use token::{Token, TokenKind};
