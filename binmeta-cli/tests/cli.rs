//! Runs the command-line front end against files in a temporary directory.

use binmeta::fnv1a_32;
use binmeta_cli::{Cli, Summary, run};
use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

fn write_inputs(dir: &Path, extra_class: &str) {
    let json = format!(
        r#"{{
            "classes": [
                {{ "hash": {ability}, "isInterface": true,
                   "properties": [ {{ "hash": {is_valid}, "type": 1 }} ] }},
                {{ "hash": {spell}, "implements": [[{ability}]],
                   "properties": [ {{ "hash": {range}, "type": 10 }} ] }}
                {extra_class}
            ]
        }}"#,
        ability = fnv1a_32("Ability"),
        spell = fnv1a_32("Spell"),
        is_valid = fnv1a_32("mIsValid"),
        range = fnv1a_32("mRange"),
    );
    std::fs::write(dir.join("meta.json"), json).expect("Failed to write schema");
    std::fs::write(dir.join("types.txt"), "a Ability\nb Spell\n").expect("Failed to write types");
    std::fs::write(dir.join("fields.txt"), "a mIsValid\nb mRange\n")
        .expect("Failed to write fields");
}

fn cli(dir: &Path, extra: &[&str]) -> Cli {
    let schema = dir.join("meta.json");
    let classes = dir.join("types.txt");
    let fields = dir.join("fields.txt");
    let output = dir.join("classes.cs");

    let mut args = vec![
        "binmeta".to_string(),
        schema.display().to_string(),
        "--classes".to_string(),
        classes.display().to_string(),
        "--fields".to_string(),
        fields.display().to_string(),
    ];
    if !extra.contains(&"--out-dir") {
        args.push("--output".to_string());
        args.push(output.display().to_string());
    }
    args.extend(extra.iter().map(|s| s.to_string()));

    Cli::try_parse_from(args).expect("Failed to parse args")
}

#[test]
fn test_run_single_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_inputs(dir.path(), "");

    let summary = run(&cli(dir.path(), &[])).expect("Failed to run");
    assert_eq!(
        summary,
        Summary {
            generated: 2,
            skipped: 0
        }
    );

    let output = std::fs::read_to_string(dir.path().join("classes.cs")).expect("Missing output");
    assert!(output.starts_with("public interface Ability\n"));
    assert!(output.contains("[BINValue(\"mIsValid\")] public bool IsValid { get; set; }"));
    assert!(output.ends_with("}\n"));
}

#[test]
fn test_run_split_output() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_inputs(dir.path(), "");
    let out_dir = dir.path().join("generated");

    let summary = run(&cli(
        dir.path(),
        &["--out-dir", out_dir.to_str().expect("Non UTF-8 path"), "--profile", "legacy"],
    ))
    .expect("Failed to run");
    assert_eq!(summary.generated, 2);

    let spell = std::fs::read_to_string(out_dir.join("Spell.cs")).expect("Missing Spell.cs");
    assert!(spell.starts_with("public class Spell : Ability\n"));
    assert!(!spell.contains("IsValid"));
    assert!(out_dir.join("Ability.cs").exists());
}

#[test]
fn test_run_split_output_overwrites_previous_run() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_inputs(dir.path(), "");
    let out_dir = dir.path().join("generated");
    let args = ["--out-dir", out_dir.to_str().expect("Non UTF-8 path")];

    let first = run(&cli(dir.path(), &args)).expect("Failed first run");
    std::fs::write(out_dir.join("Spell.cs"), "stale").expect("Failed to write stale file");
    let second = run(&cli(dir.path(), &args)).expect("Failed second run");

    assert_eq!(first, second);
    let spell = std::fs::read_to_string(out_dir.join("Spell.cs")).expect("Missing Spell.cs");
    assert!(spell.starts_with("public class Spell : Ability\n"));
}

#[test]
fn test_run_aborts_on_dangling_reference() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_inputs(dir.path(), r#", { "hash": 5, "parentClass": 6 }"#);

    let result = run(&cli(dir.path(), &[]));
    assert!(result.is_err());
    assert!(!dir.path().join("classes.cs").exists());
}

#[test]
fn test_run_keep_going_skips_failures() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_inputs(dir.path(), r#", { "hash": 5, "parentClass": 6 }"#);

    let summary = run(&cli(dir.path(), &["--keep-going"])).expect("Failed to run");
    assert_eq!(
        summary,
        Summary {
            generated: 2,
            skipped: 1
        }
    );

    let output = std::fs::read_to_string(dir.path().join("classes.cs")).expect("Missing output");
    assert!(!output.contains("Class_5"));
}

#[test]
fn test_run_missing_dictionary() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_inputs(dir.path(), "");
    std::fs::remove_file(dir.path().join("types.txt")).expect("Failed to remove types");

    let err = run(&cli(dir.path(), &[])).expect_err("Missing dictionary must fail");
    assert!(err.to_string().contains("failed to read dictionary"));
}
