//! Project configuration file representation

use crate::arch::tigress::RevisionDef;
use crate::arch::Registry;
use crate::project::program::Program;
use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::{fs, io};

/// In-memory representation of the current project configuration.
///
/// This file is typically read from a file named `vlift.json`, and it
/// contains every program in the project along with any revision definition
/// files that are not built in.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Project {
    programs: BTreeMap<String, Program>,

    /// Revision definition files, keyed by the name they are registered as.
    #[serde(default)]
    revisions: BTreeMap<String, RelativePathBuf>,
}

impl Project {
    pub fn read(filename: &str) -> io::Result<Self> {
        let project_file = fs::File::open(filename)?;

        Ok(Project::from_reader(project_file)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> serde_json::Result<Self> {
        let mut project: Self = serde_json::from_reader(reader)?;

        for (name, prog) in project.programs.iter_mut() {
            prog.set_name(name);
        }

        Ok(project)
    }

    /// Get the program with the given name within the project.
    pub fn program(&self, name: &str) -> Option<&Program> {
        self.programs.get(name)
    }

    /// Get the project's default program, the first one by name.
    pub fn default_program(&self) -> Option<(&str, &Program)> {
        self.iter_programs().next()
    }

    pub fn iter_programs(&self) -> impl Iterator<Item = (&str, &Program)> {
        self.programs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_revisions(&self) -> impl Iterator<Item = (&str, &RelativePathBuf)> {
        self.revisions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a registry of the built-in revisions plus every revision
    /// definition the project names.
    ///
    /// Definition paths are relative to `root`, the directory holding the
    /// project file. Each definition is registered under its key in the
    /// project, whatever name the file itself gives.
    pub fn registry(&self, root: &Path) -> io::Result<Registry> {
        let mut registry = Registry::with_builtins();

        for (name, path) in self.iter_revisions() {
            let file = fs::File::open(path.to_path(root))?;
            let mut def: RevisionDef = serde_json::from_reader(file)?;

            if def.name != name {
                log::debug!("Revision file {} registered as {}", def.name, name);
                def.name = name.to_string();
            }

            registry.register(&def)?;
        }

        Ok(registry)
    }
}
