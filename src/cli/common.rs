//! Common utilities for command implementations

use crate::arch::tigress::Revision;
use crate::arch::Registry;
use crate::ast::literal;
use crate::memory::Image;
use crate::project::{Program, Project};
use clap::{App, Arg, SubCommand};
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Enumeration of all CLI commands
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Disassemble,
    Scan,
    Lift,
    Revisions,
}

impl Command {
    /// Enumerate all commands that vlift recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Command::*;

        vec![Disassemble, Scan, Lift, Revisions]
    }

    /// Construct the subcommand object for this particular `Command`.
    pub fn into_clap_subcommand<'a, 'b>(self) -> App<'a, 'b> {
        match self {
            Command::Disassemble => SubCommand::with_name("dis")
                .about("List the basic block at a given address")
                .arg(
                    Arg::with_name("start_pc")
                        .value_name("0x1234")
                        .index(1)
                        .required(true)
                        .help("The address to list code for"),
                ),
            Command::Scan => SubCommand::with_name("scan")
                .about("Disassemble everything reachable from the entry points")
                .arg(
                    Arg::with_name("start_pc")
                        .value_name("0x1234")
                        .index(1)
                        .multiple(true)
                        .help("Addresses to start from instead of the program's entry points"),
                ),
            Command::Lift => SubCommand::with_name("lift")
                .about("Lift everything reachable from the entry points into IL")
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the IL as JSON"),
                )
                .arg(
                    Arg::with_name("run")
                        .long("run")
                        .help("Execute the lifted IL from the first entry point"),
                )
                .arg(
                    Arg::with_name("steps")
                        .long("steps")
                        .value_name("1000")
                        .takes_value(true)
                        .requires("run")
                        .help("How many blocks to execute before giving up"),
                )
                .arg(
                    Arg::with_name("stack")
                        .long("stack")
                        .value_name("0x7fff0000")
                        .takes_value(true)
                        .requires("run")
                        .help("Initial stack pointer for execution"),
                ),
            Command::Revisions => SubCommand::with_name("revisions")
                .about("List known instruction set revisions")
                .arg(
                    Arg::with_name("revision")
                        .value_name("tigress1")
                        .index(1)
                        .help("A revision to show the opcode table of"),
                ),
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "dis" => Ok(Command::Disassemble),
            "scan" => Ok(Command::Scan),
            "lift" => Ok(Command::Lift),
            "revisions" => Ok(Command::Revisions),
            _ => Err(()),
        }
    }
}

/// Merge the selected project program with command line settings.
///
/// Without a program name, the project's default program is used, if the
/// project has any.
pub fn resolve_program(project: &Project, name: Option<&str>, prog: Program) -> io::Result<Program> {
    match name {
        Some(name) => match project.program(name) {
            Some(project_program) => Ok(project_program.apply_override(&prog)),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("The specified program {} does not exist.", name),
            )),
        },
        None => match project.default_program() {
            Some((_, default_program)) => Ok(default_program.apply_override(&prog)),
            None => Ok(prog),
        },
    }
}

/// Look up the revision a program is decoded with.
pub fn resolve_revision(registry: &Registry, prog: &Program) -> io::Result<Arc<Revision>> {
    let name = prog.revision().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Unspecified revision, analysis cannot continue.",
        )
    })?;

    Ok(registry.get(name)?)
}

/// Load a program's image, relative to the project directory.
pub fn load_image(prog: &Program, root: &Path) -> io::Result<Image> {
    let path = prog.image().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Did not specify an image, analysis cannot continue.",
        )
    })?;

    Image::open(path.to_path(root), prog.base())
}

/// Parse an address typed by the user.
pub fn parse_address(spec: &str) -> io::Result<u64> {
    literal::parse_address(spec).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a valid address", spec),
        )
    })
}
