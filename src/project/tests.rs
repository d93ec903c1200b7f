use crate::project::{Program, Project};
use std::io::Cursor;

const PROJECT: &str = r#"{
    "programs": {
        "crackme": {
            "image": "bin/crackme.vm",
            "revision": "tigress3",
            "base": 4096,
            "entry_points": [4096, 4352]
        },
        "aaa": {
            "image": "aaa.vm",
            "revision": "custom"
        }
    },
    "revisions": {
        "custom": "defs/custom.json"
    }
}"#;

#[test]
fn project_parses() {
    let project = Project::from_reader(Cursor::new(PROJECT)).unwrap();

    let prog = project.program("crackme").unwrap();
    assert_eq!(prog.as_name(), Some("crackme"));
    assert_eq!(prog.image().map(|p| p.as_str()), Some("bin/crackme.vm"));
    assert_eq!(prog.revision(), Some("tigress3"));
    assert_eq!(prog.base(), 0x1000);
    assert_eq!(prog.entry_points(), vec![0x1000, 0x1100]);

    let revisions: Vec<(&str, &str)> = project
        .iter_revisions()
        .map(|(name, path)| (name, path.as_str()))
        .collect();
    assert_eq!(revisions, vec![("custom", "defs/custom.json")]);
}

#[test]
fn default_program_is_first_by_name() {
    let project = Project::from_reader(Cursor::new(PROJECT)).unwrap();
    let (name, prog) = project.default_program().unwrap();

    assert_eq!(name, "aaa");
    assert_eq!(prog.base(), 0);
    assert_eq!(prog.entry_points(), vec![0]);
}

#[test]
fn command_line_overrides_project() {
    let project = Project::from_reader(Cursor::new(PROJECT)).unwrap();

    let mut cmdline = Program::default();
    cmdline.set_revision("tigress4");
    cmdline.set_base(0x2000);

    let prog = project.program("crackme").unwrap().apply_override(&cmdline);
    assert_eq!(prog.revision(), Some("tigress4"));
    assert_eq!(prog.base(), 0x2000);
    assert_eq!(prog.entry_points(), vec![0x1000, 0x1100]);
    assert_eq!(prog.as_name(), Some("crackme"));

    cmdline.add_entry_point(0x2010);
    let prog = project.program("crackme").unwrap().apply_override(&cmdline);
    assert_eq!(prog.entry_points(), vec![0x2010]);
}

#[test]
fn empty_project_uses_builtins() {
    let project = Project::default();
    let registry = project.registry(std::path::Path::new("")).unwrap();

    assert_eq!(registry.names(), vec!["tigress1", "tigress2", "tigress3", "tigress4"]);
    assert!(project.default_program().is_none());
}

#[test]
fn missing_revision_file_is_an_error() {
    let project = Project::from_reader(Cursor::new(PROJECT)).unwrap();
    let err = project
        .registry(std::path::Path::new("/nonexistent-vlift-root"))
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
