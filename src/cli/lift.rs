//! CLI command: lift

use crate::analysis::{Block, Listing};
use crate::arch::Architecture;
use crate::cli::common::{load_image, parse_address, resolve_revision};
use crate::cli::scan::entry_points;
use crate::il::{Control, ListBuilder, Machine, Stmt};
use crate::{analysis, arch, project};
use clap::ArgMatches;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

const DEFAULT_STEPS: usize = 1000;
const DEFAULT_STACK: u64 = 0x7fff_0000;

#[derive(Serialize)]
struct LiftedStmt<'a> {
    address: u64,
    stmt: &'a Stmt,
}

#[derive(Serialize)]
struct LiftedBlock<'a> {
    start: u64,
    length: u64,
    stmts: Vec<LiftedStmt<'a>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_text(blocks: &[Block], lifted: &[analysis::Result<ListBuilder>]) {
    for (i, (block, result)) in blocks.iter().zip(lifted.iter()).enumerate() {
        if i > 0 {
            println!();
        }

        println!("{}:", analysis::default_label(block.as_start()));

        match result {
            Ok(builder) => {
                for (addr, stmt) in builder.iter() {
                    println!("{:016x}  {}", addr, stmt);
                }
            }
            Err(e) => println!("; {}", e),
        }
    }
}

fn print_json(blocks: &[Block], lifted: &[analysis::Result<ListBuilder>]) -> io::Result<()> {
    let out: Vec<LiftedBlock> = blocks
        .iter()
        .zip(lifted.iter())
        .map(|(block, result)| match result {
            Ok(builder) => LiftedBlock {
                start: block.as_start(),
                length: block.as_length(),
                stmts: builder
                    .iter()
                    .map(|(address, stmt)| LiftedStmt {
                        address: *address,
                        stmt,
                    })
                    .collect(),
                error: None,
            },
            Err(e) => LiftedBlock {
                start: block.as_start(),
                length: block.as_length(),
                stmts: Vec::new(),
                error: Some(e.to_string()),
            },
        })
        .collect();

    serde_json::to_writer_pretty(io::stdout(), &out)?;
    println!();

    Ok(())
}

/// Execute lifted blocks, following jumps, until the code returns, leaves
/// the lifted code or runs out of steps.
fn run<A: Architecture>(
    arch: &A,
    listings: &BTreeMap<u64, Listing>,
    lifted: &BTreeMap<u64, &ListBuilder>,
    entry: u64,
    steps: usize,
    stack_top: u64,
) {
    let mut machine = Machine::new(arch.stack_pointer(), stack_top);
    let mut pc = entry;
    let mut outcome = None;

    for _ in 0..steps {
        let (builder, listing) = match (lifted.get(&pc), listings.get(&pc)) {
            (Some(builder), Some(listing)) => (builder, listing),
            _ => {
                outcome = Some(format!("no lifted code at {:#x}", pc));
                break;
            }
        };

        match machine.run(builder.stmts()) {
            Control::Jump(target) => pc = target,
            Control::Return => {
                outcome = Some(format!("returned from block {:#x}", pc));
                break;
            }
            Control::Continue => pc = listing.block().end(),
        }
    }

    println!(
        "; {}",
        outcome.unwrap_or_else(|| format!("stopped after {} blocks at {:#x}", steps, pc))
    );

    for reg in arch.registers() {
        println!("; {:<5} = {:#018x}", reg, machine.get_register(*reg));
    }
}

/// Lift everything reachable from the entry points, in parallel.
pub fn lift(
    prog: &project::Program,
    registry: &arch::Registry,
    root: &Path,
    argv: &ArgMatches,
) -> io::Result<()> {
    let revision = resolve_revision(registry, prog)?;
    let image = load_image(prog, root)?;
    let entries = entry_points(prog, argv)?;

    let listings = analysis::scan(revision.as_ref(), &image, &entries);
    let blocks: Vec<Block> = listings.values().map(|l| l.block().clone()).collect();
    let lifted = analysis::lift_blocks(revision.as_ref(), &image, &blocks);

    if argv.is_present("json") {
        print_json(&blocks, &lifted)?;
    } else {
        print_text(&blocks, &lifted);
    }

    if argv.is_present("run") {
        let steps = match argv.value_of("steps") {
            Some(spec) => spec.parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not a valid step count", spec),
                )
            })?,
            None => DEFAULT_STEPS,
        };
        let stack_top = match argv.value_of("stack") {
            Some(spec) => parse_address(spec)?,
            None => DEFAULT_STACK,
        };
        let entry = entries.first().copied().unwrap_or_else(|| prog.base());

        let by_start: BTreeMap<u64, &ListBuilder> = blocks
            .iter()
            .zip(lifted.iter())
            .filter_map(|(block, result)| result.as_ref().ok().map(|b| (block.as_start(), b)))
            .collect();

        run(revision.as_ref(), &listings, &by_start, entry, steps, stack_top);
    }

    Ok(())
}
