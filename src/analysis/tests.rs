use crate::analysis::{
    disassemble_block, lift_blocks, scan, Block, Error, Flow, Reference, ReferenceKind,
};
use crate::arch::tigress::{Register, TIGRESS1, TIGRESS4};
use crate::il::{Control, Machine};
use crate::memory::Image;

/// Two blocks: one computes 5 + 7 and jumps to the other, which hits an
/// unassigned opcode after a nop.
fn sample_image() -> Image {
    let mut data = vec![];
    data.extend_from_slice(&[0x60, 5, 0, 0, 0, 0, 0, 0, 0]);
    data.extend_from_slice(&[0x60, 7, 0, 0, 0, 0, 0, 0, 0]);
    data.push(0x0E);
    data.extend_from_slice(&[0xF4, 0x1F, 0x10, 0, 0, 0, 0, 0, 0]);
    data.extend_from_slice(&[0xFF; 4]);
    data.extend_from_slice(&[0x4E, 0xFF]);

    Image::new(0x1000, data)
}

#[test]
fn block_ends_at_branch() {
    let image = sample_image();
    let listing = disassemble_block(&*TIGRESS1, &image, 0x1000);

    assert_eq!(listing.lines().len(), 4);
    assert_eq!(listing.lines()[0].label(), Some("loc_1000"));
    assert_eq!(listing.lines()[3].instr_text(), "jmp 0x101f");
    assert_eq!(listing.block().as_length(), 0x1C);
    assert_eq!(listing.exit(), Some(Flow::Branching(false)));
    assert_eq!(
        listing.targets(),
        &[Reference::new_static_ref(0x1013, 0x1020, ReferenceKind::Branch)]
    );
    assert!(listing.error().is_none());

    let addrs: Vec<u64> = listing.block().iter_instr_addresses().collect();
    assert_eq!(addrs, vec![0x1000, 0x1009, 0x1012, 0x1013]);
}

#[test]
fn block_stops_at_unrecognized_opcode() {
    let image = sample_image();
    let listing = disassemble_block(&*TIGRESS1, &image, 0x1020);

    assert_eq!(listing.lines().len(), 1);
    assert_eq!(listing.exit(), Some(Flow::Normal));
    assert_eq!(
        listing.error(),
        Some(&Error::UnrecognizedOpcode {
            opcode: 0xFF,
            address: 0x1021
        })
    );
}

#[test]
fn block_stops_at_image_end() {
    let image = Image::new(0, vec![0x4E, 0x60, 1, 2]);
    let listing = disassemble_block(&*TIGRESS1, &image, 0);

    assert_eq!(listing.lines().len(), 1);
    assert_eq!(
        listing.error(),
        Some(&Error::TruncatedInput {
            address: 1,
            needed: 9,
            available: 3
        })
    );
}

#[test]
fn scan_follows_branches() {
    let image = sample_image();
    let listings = scan(&*TIGRESS1, &image, &[0x1000]);

    let starts: Vec<u64> = listings.keys().copied().collect();
    assert_eq!(starts, vec![0x1000, 0x1020]);
    assert!(listings[&0x1020].error().is_some());
}

#[test]
fn scan_ignores_targets_outside_image() {
    // relative jmp to 0x9000 + 5 + 0x10
    let image = Image::new(0x9000, vec![0xF4, 0x10, 0, 0, 0]);
    let listings = scan(&*TIGRESS4, &image, &[0x9000]);

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[&0x9000].targets()[0].as_target(), Some(0x9015));
}

#[test]
fn scan_terminates_on_loops() {
    // jmp back to itself
    let image = Image::new(0, vec![0xF4, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    let listings = scan(&*TIGRESS1, &image, &[0, 0]);

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[&0].targets()[0].as_target(), Some(0));
}

#[test]
fn lifted_blocks_execute() {
    let image = sample_image();
    let listings = scan(&*TIGRESS1, &image, &[0x1000]);
    let blocks: Vec<Block> = listings.values().map(|l| l.block().clone()).collect();

    let lifted = lift_blocks(&*TIGRESS1, &image, &blocks);
    assert_eq!(lifted.len(), 2);

    let first = lifted[0].as_ref().unwrap();
    assert_eq!(first.len(), 4);

    let mut machine = Machine::new(Register::Vsp, 0x8000);
    assert_eq!(machine.run(first.stmts()), Control::Jump(0x1020));
    assert_eq!(machine.pop(8), 12);

    let second = lifted[1].as_ref().unwrap();
    assert_eq!(machine.run(second.stmts()), Control::Continue);
}

#[test]
fn flow_predicates() {
    assert!(Flow::Normal.is_nonfinal());
    assert!(Flow::Normal.is_nonbranching());
    assert!(Flow::Branching(true).is_nonfinal());
    assert!(!Flow::Branching(false).is_nonfinal());
    assert!(!Flow::Branching(true).is_nonbranching());
    assert!(!Flow::Returning.is_nonfinal());
    assert!(!Flow::Returning.is_nonbranching());
}

#[test]
fn block_membership() {
    let mut block = Block::from_parts(0x100, 0x10);
    block.mark_instr_at(0);
    block.mark_instr_at(9);
    block.mark_instr_at(0x10);

    assert!(block.is_ptr_within_block(0x100));
    assert!(block.is_ptr_within_block(0x10F));
    assert!(!block.is_ptr_within_block(0x110));
    assert!(!block.is_ptr_within_block(0xFF));
    assert_eq!(block.end(), 0x110);

    let addrs: Vec<u64> = block.iter_instr_addresses().collect();
    assert_eq!(addrs, vec![0x100, 0x109]);
}

#[test]
fn reference_display() {
    assert_eq!(
        Reference::new_static_ref(0x10, 0x20, ReferenceKind::Branch).to_string(),
        "LOC 0x10 -> 0x20"
    );
    assert_eq!(
        Reference::new_dyn_ref(0x10, ReferenceKind::Return).to_string(),
        "RET 0x10"
    );
}

#[test]
fn errors_convert_to_io() {
    use std::io;

    let err: io::Error = Error::UnknownRevision("x".to_string()).into();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);

    let err: io::Error = Error::TruncatedInput {
        address: 0,
        needed: 1,
        available: 0,
    }
    .into();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
