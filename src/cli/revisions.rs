//! CLI command: revisions

use crate::arch;
use clap::ArgMatches;
use std::io;

/// List every known revision, or the opcode table of one of them.
pub fn revisions(registry: &arch::Registry, argv: &ArgMatches) -> io::Result<()> {
    if let Some(name) = argv.value_of("revision") {
        let revision = registry.get(name)?;

        for (byte, opcode) in revision.opcodes().iter() {
            println!(
                "{:#04x}  {:<6}  {}  {:?}",
                byte,
                opcode.mnemonic(),
                opcode.operand_width().bytes(),
                opcode.category()
            );
        }

        return Ok(());
    }

    for name in registry.names() {
        let revision = registry.get(name)?;
        let registers: Vec<String> = revision
            .register_file()
            .iter()
            .map(|r| r.to_string())
            .collect();

        println!(
            "{:<12}  {:<8}  {}",
            name,
            revision.branch_mode(),
            registers.join(" ")
        );
    }

    Ok(())
}
