//! Decoding and lifting of virtualized bytecode.
//!
//! Code virtualizers replace native functions with bytecode for a private
//! stack machine plus an interpreter for it. This crate decodes that bytecode
//! into listings and lifts it into an abstract IL that other tools can
//! analyze.

#[macro_use]
extern crate clap;

#[macro_use]
extern crate lazy_static;

pub mod analysis;
pub mod arch;
pub mod ast;
pub mod cli;
pub mod il;
pub mod memory;
pub mod project;
