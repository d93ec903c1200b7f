//! CLI commands

mod common;
mod dis;
mod lift;
mod main;
mod revisions;
mod scan;

pub use common::{load_image, parse_address, resolve_program, resolve_revision, Command};
pub use dis::dis;
pub use lift::lift;
pub use main::main;
pub use revisions::revisions;
pub use scan::scan;
