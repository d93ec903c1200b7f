//! Analysis passes responsible for walking program images with an
//! architecture.

use crate::analysis::{Block, Error, Flow, Reference, Result};
use crate::arch::Architecture;
use crate::ast::Line;
use crate::il::ListBuilder;
use crate::memory::Image;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// The result of disassembling one basic block.
#[derive(Clone, Debug)]
pub struct Listing {
    block: Block,
    lines: Vec<Line>,
    targets: Vec<Reference>,
    exit: Option<Flow>,
    error: Option<Error>,
}

impl Listing {
    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Every control-flow edge leaving an instruction of the block.
    pub fn targets(&self) -> &[Reference] {
        &self.targets
    }

    /// Control flow of the last instruction, if any decoded.
    pub fn exit(&self) -> Option<Flow> {
        self.exit
    }

    /// Why disassembly stopped early, if it did.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}

/// Name given to code locations that have no other name.
pub fn default_label(addr: u64) -> String {
    format!("loc_{:x}", addr)
}

/// Given an image and an address, disassemble a basic block of instructions
/// and return them.
///
/// A basic block consists of an unbroken string of instructions with the
/// following properties:
///
///  * Every instruction in the block naturally "follows" one another,
///    according to the lengths provided by the architecture.
///  * Disassembly continues until the program unconditionally jumps to
///    another location, returns, or hits an undecodable instruction.
///
/// An undecodable instruction is logged and recorded in the listing; it does
/// not fail the pass.
pub fn disassemble_block<A: Architecture>(arch: &A, image: &Image, start: u64) -> Listing {
    let mut pc = start;
    let mut lines = Vec::new();
    let mut targets = Vec::new();
    let mut offsets = Vec::new();
    let mut exit = None;
    let mut error = None;

    loop {
        let window = image.window(pc, arch.max_instruction_length());
        let decoded = arch.instruction_info(window, pc).and_then(|info| {
            let (tokens, _) = arch.instruction_text(window, pc)?;
            Ok((info, tokens))
        });

        let (info, tokens) = match decoded {
            Ok(decoded) => decoded,
            Err(e) => {
                log::warn!("Disassembly of block {:#x} stopped: {}", start, e);
                error = Some(e);
                break;
            }
        };

        let label = if pc == start {
            Some(default_label(start))
        } else {
            None
        };

        lines.push(Line::new(label, tokens, None, pc, &window[..info.length()]));
        offsets.push(pc.wrapping_sub(start));
        targets.extend_from_slice(info.targets());
        pc = pc.wrapping_add(info.length() as u64);
        exit = Some(info.flow());

        if !info.flow().is_nonbranching() {
            break;
        }
    }

    let mut block = Block::from_parts(start, pc.wrapping_sub(start));
    for offset in offsets {
        block.mark_instr_at(offset);
    }

    log::debug!("Disassembled {} instructions at {:#x}", lines.len(), start);

    Listing {
        block,
        lines,
        targets,
        exit,
        error,
    }
}

/// Recursively disassemble every block reachable from the given entry
/// points.
///
/// Static branch targets inside the image are followed; targets outside of it
/// and dynamic edges such as returns end the walk. Listings are keyed by
/// their start address.
pub fn scan<A: Architecture>(arch: &A, image: &Image, entry_points: &[u64]) -> BTreeMap<u64, Listing> {
    let mut listings = BTreeMap::new();
    let mut queued: BTreeSet<u64> = entry_points.iter().copied().collect();
    let mut worklist: Vec<u64> = queued.iter().rev().copied().collect();

    while let Some(start) = worklist.pop() {
        let listing = disassemble_block(arch, image, start);

        let mut next = Vec::new();
        for target in listing.targets() {
            if let Some(to) = target.as_target() {
                next.push(to);
            }
        }

        if let Some(Flow::Branching(true)) = listing.exit() {
            next.push(listing.block().end());
        }

        for to in next {
            if !image.contains(to) {
                log::debug!("Branch target {:#x} lies outside of the image", to);
                continue;
            }

            if queued.insert(to) {
                worklist.push(to);
            }
        }

        listings.insert(start, listing);
    }

    log::info!("Scan found {} blocks", listings.len());

    listings
}

/// Lift every instruction of one block into a fresh list.
pub fn lift_block<A: Architecture>(arch: &A, image: &Image, block: &Block) -> Result<ListBuilder> {
    let mut builder = ListBuilder::new();

    for addr in block.iter_instr_addresses() {
        let window = image.window(addr, arch.max_instruction_length());
        builder.at(addr);
        arch.instruction_il(window, addr, &mut builder)?;
    }

    Ok(builder)
}

/// Lift many blocks at once, in parallel.
///
/// Results come back in the same order as `blocks`.
pub fn lift_blocks<A: Architecture>(
    arch: &A,
    image: &Image,
    blocks: &[Block],
) -> Vec<Result<ListBuilder>> {
    blocks
        .par_iter()
        .map(|block| lift_block(arch, image, block))
        .collect()
}
