//! CLI support for non-command bits

use crate::cli::common::{resolve_program, Command};
use crate::{cli, project};
use clap::{Arg, ArgSettings};
use std::io;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_PROJECT: &str = "vlift.json";

/// Read the project file, tolerating a missing default project.
fn read_project(filename: Option<&str>) -> io::Result<project::Project> {
    match filename {
        Some(filename) => project::Project::read(filename),
        None => match project::Project::read(DEFAULT_PROJECT) {
            Ok(project) => Ok(project),
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No {} found, using command line settings only", DEFAULT_PROJECT);
                Ok(project::Project::default())
            }
            Err(e) => Err(e),
        },
    }
}

pub fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut app = app_from_crate!();
    app = app.arg(
        Arg::with_name("program")
            .long("program")
            .value_name("myapp")
            .takes_value(true)
            .help("Which program to analyze")
            .set(ArgSettings::Global),
    );
    app = project::Program::configure_app(app);
    app = app.arg(
        Arg::with_name("project")
            .long("project")
            .value_name("vlift.json")
            .takes_value(true)
            .help("The project file to load")
            .set(ArgSettings::Global),
    );

    for cmd in Command::enumerate().iter() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    let matches = app.get_matches();

    let project_filename = matches.value_of("project");
    let root = Path::new(project_filename.unwrap_or(DEFAULT_PROJECT))
        .parent()
        .unwrap_or_else(|| Path::new(""));
    let program_name = matches.value_of("program");
    let prog = project::Program::from_arg_matches(&matches);

    let (command, submatches) = matches.subcommand();
    let command = Command::from_str(command)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Please enter a command"))?;
    let submatches = submatches.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Please enter a command")
    })?;

    let project = read_project(project_filename)?;
    let registry = project.registry(root)?;

    let prog = resolve_program(&project, program_name, prog)?;

    match command {
        Command::Disassemble => cli::dis(&prog, &registry, root, submatches)?,
        Command::Scan => cli::scan(&prog, &registry, root, submatches)?,
        Command::Lift => cli::lift(&prog, &registry, root, submatches)?,
        Command::Revisions => cli::revisions(&registry, submatches)?,
    };

    Ok(())
}
