//! CLI command: dis

use crate::cli::common::{load_image, parse_address, resolve_revision};
use crate::{analysis, arch, project};
use clap::ArgMatches;
use std::io;
use std::path::Path;

/// List the single basic block that starts at the given address.
pub fn dis(
    prog: &project::Program,
    registry: &arch::Registry,
    root: &Path,
    argv: &ArgMatches,
) -> io::Result<()> {
    let revision = resolve_revision(registry, prog)?;
    let image = load_image(prog, root)?;
    let start_spec = argv.value_of("start_pc").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Must specify a valid address to analyze",
        )
    })?;
    let start = parse_address(start_spec)?;

    let listing = analysis::disassemble_block(revision.as_ref(), &image, start);

    if listing.lines().is_empty() {
        if let Some(e) = listing.error() {
            return Err(e.clone().into());
        }
    }

    for line in listing.lines() {
        println!("{}", line);
    }

    for target in listing.targets() {
        println!("; {}", target);
    }

    if let Some(e) = listing.error() {
        println!("; {}", e);
    }

    Ok(())
}
