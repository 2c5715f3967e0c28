use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use starchart::StarchartError;
use starchart_cli::{Args, run};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Collects all .tsv files from a directory
fn collect_tsv_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("tsv")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Builds arguments for a catalog, using a sibling .toml config if present.
fn args_for(catalog_path: &Path, output_dir: &Path, prefix: &str) -> Args {
    let output_filename = format!(
        "{prefix}{}.svg",
        catalog_path.file_stem().unwrap().to_string_lossy()
    );
    let config_path = catalog_path.with_extension("toml");

    Args {
        input: catalog_path.to_string_lossy().to_string(),
        output: output_dir
            .join(output_filename)
            .to_string_lossy()
            .to_string(),
        config: config_path
            .is_file()
            .then(|| config_path.to_string_lossy().to_string()),
        full_catalog: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_fixtures() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_fixtures = collect_tsv_files(fixtures_dir());

    assert!(
        !valid_fixtures.is_empty(),
        "No valid fixtures found in tests/fixtures/"
    );

    let mut failed_fixtures = Vec::new();

    for fixture_path in &valid_fixtures {
        let args = args_for(fixture_path, temp_dir.path(), "");

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&args.output).expect("Output file was written");
                assert!(
                    svg.contains("<svg") && svg.contains("</svg>"),
                    "{} produced an incomplete SVG",
                    fixture_path.display()
                );
            }
            Err(e) => failed_fixtures.push((fixture_path.clone(), e)),
        }
    }

    if !failed_fixtures.is_empty() {
        eprintln!("\nValid fixtures that failed:");
        for (path, err) in &failed_fixtures {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid fixture(s) failed unexpectedly",
            failed_fixtures.len()
        );
    }

    println!("✅ All {} valid fixtures passed", valid_fixtures.len());
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_fixtures = collect_tsv_files(fixtures_dir().join("errors"));

    assert!(
        !error_fixtures.is_empty(),
        "No error fixtures found in tests/fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for fixture_path in &error_fixtures {
        let args = args_for(fixture_path, temp_dir.path(), "error_");

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(fixture_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError fixtures that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error fixture(s) should have failed but succeeded",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error fixtures failed as expected",
        error_fixtures.len()
    );
}

#[test]
fn e2e_unknown_link_reports_system_name() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let fixture = fixtures_dir().join("errors").join("unknown_link.tsv");

    let err = run(&args_for(&fixture, temp_dir.path(), "")).unwrap_err();

    assert!(matches!(err, StarchartError::Link(_)));
    assert!(err.to_string().contains("Barnard's Star"));
}

#[test]
fn e2e_full_catalog_flag_admits_filtered_systems() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let fixture = fixtures_dir().join("errors").join("unknown_link.tsv");

    let mut args = args_for(&fixture, temp_dir.path(), "");
    args.full_catalog = true;

    run(&args).expect("Barnard's Star is charted in full-catalog mode");
    let svg = fs::read_to_string(&args.output).unwrap();
    assert!(svg.contains("Barnard"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        input: temp_dir
            .path()
            .join("absent.tsv")
            .to_string_lossy()
            .to_string(),
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: None,
        full_catalog: false,
        log_level: "off".to_string(),
    };

    assert!(matches!(run(&args), Err(StarchartError::Io(_))));
}
