//! Abstract IL that lifted instructions are expressed in
//!
//! The lifter never builds IL itself; it drives an `IlSink`. `ListBuilder` is
//! the sink this crate uses for display, serialization and evaluation, and a
//! host may provide its own sink to build its native IR directly.

mod builder;
mod eval;
mod expr;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::ListBuilder;
pub use eval::{Control, Machine};
pub use expr::{BinaryOp, Expr, Stmt};
pub use traits::IlSink;
