//! End-to-end project generation for every style (no git, no editor)

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;
use yait::manifest::{Extra, Licence, Manifest, Style};
use yait::scaffold::{self, Report};
use yait::{Phase, Quiet, ScaffoldError};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn manifest(style: Style) -> Manifest {
    let mut manifest = Manifest::new("demo", "Jane Doe");
    manifest.style = style;
    manifest.flags.git = false;
    manifest.flags.quiet = true;
    manifest
}

fn generate(manifest: &Manifest, parent: &Path) -> Report {
    scaffold::create_project_on(manifest, parent, Quiet, day()).unwrap()
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o111 != 0
}

#[test]
fn test_posix_project() {
    let temp = TempDir::new().unwrap();
    let report = generate(&manifest(Style::Posix), temp.path());
    let root = temp.path().join("demo");

    assert_eq!(report.root, root);
    assert_eq!(report.files, 9);
    assert_eq!(report.main_source, root.join("src/main.c"));

    assert!(read(root.join("src/main.c")).contains("demo: Hello Jane Doe!"));
    assert!(read(root.join("include/demo.h")).starts_with("#ifndef DEMO_H\n"));
    assert!(read(root.join("man/demo.1")).contains(".TH DEMO 1 \"2025-03-14\""));
    assert!(read(root.join("Makefile")).contains("BIN := build/bin/demo"));
    assert!(read(root.join("Makefile")).contains("src/%.c"));
    assert!(read(root.join("configure")).contains("trycc gcc\n"));
    assert!(read(root.join("COPYING")).contains("Copyright (c) 2025, Jane Doe"));
    assert!(root.join(".clang-format").is_file());
    assert!(root.join("doc/WHATNEXT").is_file());

    #[cfg(unix)]
    assert!(is_executable(&root.join("configure")));
}

#[test]
fn test_every_style_generates() {
    let expected = [
        (Style::Simple, "demo.c"),
        (Style::Posix, "src/main.c"),
        (Style::Gnu, "src/main.c"),
        (Style::Library, "src/demo.c"),
        (Style::Fasm, "SOURCE/main.c"),
        (Style::Cmake, "src/main.c"),
    ];

    for (style, main_source) in expected {
        for cpp in [false, true] {
            let temp = TempDir::new().unwrap();
            let mut manifest = manifest(style);
            manifest.flags.cpp = cpp;
            let report = generate(&manifest, temp.path());

            let main_source = if cpp {
                main_source.replace(".c", ".cpp")
            } else {
                main_source.to_string()
            };
            assert_eq!(report.main_source, temp.path().join("demo").join(&main_source), "{style} cpp={cpp}");
            assert!(report.main_source.is_file(), "{style} cpp={cpp}");
            assert!(temp.path().join("demo/COPYING").is_file(), "{style} cpp={cpp}");
        }
    }
}

#[test]
fn test_cmake_project() {
    let temp = TempDir::new().unwrap();
    let report = generate(&manifest(Style::Cmake), temp.path());
    let root = temp.path().join("demo");

    let lists = read(root.join("CMakeLists.txt"));
    assert!(lists.contains("project(demo VERSION 0.1 LANGUAGES C)"));
    assert!(lists.contains("add_executable(demo src/main.c)"));
    assert!(!root.join("Makefile").exists());
    assert_eq!(report.files, 5);
}

#[test]
fn test_cpp_posix_project() {
    let temp = TempDir::new().unwrap();
    let mut manifest = manifest(Style::Posix);
    manifest.flags.cpp = true;
    generate(&manifest, temp.path());
    let root = temp.path().join("demo");

    assert!(root.join("src/main.cpp").is_file());
    assert!(!root.join("src/main.c").exists());
    assert!(read(root.join("configure")).contains("trycc g++\n"));
    assert!(read(root.join("Makefile")).contains("src/%.cpp"));
}

#[test]
fn test_extras_are_written_as_scripts() {
    let temp = TempDir::new().unwrap();
    let mut manifest = manifest(Style::Posix);
    manifest.extras = vec![Extra::Format, Extra::Cleanup];
    let report = generate(&manifest, temp.path());
    let root = temp.path().join("demo");

    assert_eq!(report.files, 11);
    assert!(read(root.join("tools/format")).contains("clang-format"));
    assert!(read(root.join("tools/Cleanup")).contains("./tools/format"));

    #[cfg(unix)]
    for tool in ["tools/format", "tools/Cleanup"] {
        assert!(is_executable(&root.join(tool)), "{tool}");
    }
}

#[test]
fn test_shell_script_lands_next_to_root() {
    let temp = TempDir::new().unwrap();
    let report = generate(&manifest(Style::Shell), temp.path());
    let script = temp.path().join("demo");

    assert_eq!(report.root, temp.path());
    assert_eq!(report.files, 1);
    assert_eq!(report.executables, 1);
    assert!(script.is_file());

    let content = read(&script);
    assert!(content.starts_with("#!/bin/sh\n"));
    assert!(content.contains("year=2025\n"));
    assert!(content.contains("Copyright (C) $year Jane Doe."));
    assert!(!temp.path().join("COPYING").exists());

    #[cfg(unix)]
    assert!(is_executable(&script));
}

#[test]
fn test_licence_selection() {
    let temp = TempDir::new().unwrap();
    let mut manifest = manifest(Style::Simple);
    manifest.licence = Licence::Unlicense;
    generate(&manifest, temp.path());

    assert!(read(temp.path().join("demo/COPYING")).contains("public domain"));
}

#[test]
fn test_non_empty_target_needs_force() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("README"), "keep me").unwrap();

    let mut manifest = manifest(Style::Simple);
    let err = scaffold::create_project_on(&manifest, temp.path(), Quiet, day()).unwrap_err();
    assert!(err.to_string().contains("not empty"), "{err}");
    assert_eq!(read(root.join("README")), "keep me");

    manifest.flags.force = true;
    generate(&manifest, temp.path());
    assert_eq!(read(root.join("README")), "demo\n");
}

#[test]
fn test_empty_target_is_reused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();

    let report = generate(&manifest(Style::Library), temp.path());
    assert_eq!(report.files, 6);
}

#[test]
fn test_in_place_refuses_existing_artifact() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Makefile"), "all:\n").unwrap();

    let mut manifest = manifest(Style::Simple);
    manifest.in_place = true;
    let err = scaffold::create_project_on(&manifest, temp.path(), Quiet, day()).unwrap_err();
    assert!(err.to_string().contains("Makefile"), "{err}");

    manifest.flags.force = true;
    let report = generate(&manifest, temp.path());
    assert_eq!(report.root, temp.path());
    assert!(read(temp.path().join("Makefile")).contains("all: demo"));
}

#[test]
fn test_invalid_name_is_rejected_before_writing() {
    let temp = TempDir::new().unwrap();
    let mut manifest = manifest(Style::Posix);
    manifest.project = "../escape".to_string();

    assert!(scaffold::create_project_on(&manifest, temp.path(), Quiet, day()).is_err());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_first_failure_aborts_and_keeps_partial_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir(&root).unwrap();
    // `src` as a file blocks src/main.c, the fourth posix artifact
    fs::write(root.join("src"), "").unwrap();

    let mut manifest = manifest(Style::Posix);
    manifest.flags.force = true;
    let err = scaffold::create_project_on(&manifest, temp.path(), Quiet, day()).unwrap_err();

    let scaffold_err = err
        .downcast_ref::<ScaffoldError>()
        .expect("scaffold error in the chain");
    assert_eq!(scaffold_err.phase(), Phase::DirectoryCreation);

    assert!(root.join("Makefile").is_file());
    assert!(root.join("README").is_file());
    assert!(!root.join("include").exists());
    assert!(!root.join("COPYING").exists());
}
