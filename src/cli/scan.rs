//! CLI command: scan

use crate::cli::common::{load_image, parse_address, resolve_revision};
use crate::{analysis, arch, project};
use clap::ArgMatches;
use std::io;
use std::path::Path;

/// Determine where to start analysis: addresses given to the command, or
/// else the program's entry points.
pub fn entry_points(prog: &project::Program, argv: &ArgMatches) -> io::Result<Vec<u64>> {
    match argv.values_of("start_pc") {
        Some(specs) => specs.map(parse_address).collect(),
        None => Ok(prog.entry_points()),
    }
}

/// Disassemble everything reachable from the entry points.
pub fn scan(
    prog: &project::Program,
    registry: &arch::Registry,
    root: &Path,
    argv: &ArgMatches,
) -> io::Result<()> {
    let revision = resolve_revision(registry, prog)?;
    let image = load_image(prog, root)?;
    let entries = entry_points(prog, argv)?;

    let listings = analysis::scan(revision.as_ref(), &image, &entries);

    for (i, listing) in listings.values().enumerate() {
        if i > 0 {
            println!();
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
    }

    Ok(())
}
