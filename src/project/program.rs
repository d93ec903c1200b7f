//! Program identifier

use crate::ast::literal;
use clap::{App, Arg, ArgMatches, ArgSettings};
use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};

/// One bytecode image and everything needed to decode it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    image: Option<RelativePathBuf>,
    revision: Option<String>,
    base: Option<u64>,

    #[serde(default)]
    entry_points: Vec<u64>,

    #[serde(skip)]
    name: Option<String>,
}

impl Program {
    pub fn configure_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("image")
                .long("image")
                .value_name("image.bin")
                .help("The bytecode image file to analyze.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("revision")
                .long("revision")
                .value_name("REVISION")
                .help("Which instruction set revision to decode with.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("base")
                .long("base")
                .value_name("ADDRESS")
                .help("The address the image is loaded at.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("entry")
                .long("entry")
                .value_name("ADDRESS")
                .help("An address where bytecode execution starts.")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .set(ArgSettings::Global),
        )
    }

    /// Construct a Program from clap ArgMatches
    ///
    /// Addresses that fail to parse are ignored with a warning.
    pub fn from_arg_matches(args: &ArgMatches) -> Program {
        let address = |s: &str| {
            let parsed = literal::parse_address(s);
            if parsed.is_none() {
                log::warn!("Ignoring unparseable address {}", s);
            }

            parsed
        };

        Program {
            image: args.value_of("image").map(RelativePathBuf::from),
            revision: args.value_of("revision").map(|s| s.to_string()),
            base: args.value_of("base").and_then(address),
            entry_points: args
                .values_of("entry")
                .map_or(Vec::new(), |v| v.filter_map(address).collect()),
            name: None,
        }
    }

    pub fn image(&self) -> Option<&RelativePath> {
        self.image.as_deref()
    }

    pub fn set_image(&mut self, path: &str) {
        self.image = Some(RelativePathBuf::from(path));
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn set_revision(&mut self, revision: &str) {
        self.revision = Some(revision.to_string());
    }

    /// Load address of the image; zero unless configured.
    pub fn base(&self) -> u64 {
        self.base.unwrap_or(0)
    }

    pub fn set_base(&mut self, base: u64) {
        self.base = Some(base);
    }

    /// Where to start scanning. Without explicit entry points, the start of
    /// the image is used.
    pub fn entry_points(&self) -> Vec<u64> {
        if self.entry_points.is_empty() {
            vec![self.base()]
        } else {
            self.entry_points.clone()
        }
    }

    pub fn add_entry_point(&mut self, addr: u64) {
        self.entry_points.push(addr);
    }

    pub fn as_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Layer command-line settings in `other` over this program.
    pub fn apply_override(&self, other: &Program) -> Program {
        Program {
            image: other.image.clone().or_else(|| self.image.clone()),
            revision: other.revision.clone().or_else(|| self.revision.clone()),
            base: other.base.or(self.base),
            entry_points: match other.entry_points.len() {
                0 => self.entry_points.clone(),
                _ => other.entry_points.clone(),
            },
            name: other.name.clone().or_else(|| self.name.clone()),
        }
    }
}
