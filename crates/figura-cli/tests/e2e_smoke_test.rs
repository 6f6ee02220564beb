use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use figura::FiguraError;
use figura_cli::{Args, run};

/// Demo inputs live at the workspace root, not in the crate.
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .fig files from a directory
fn collect_fig_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("fig")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        format: None,
        viewport: None,
        config: None,
        strict: true,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_fig_files(demos_path());
    assert!(!valid_demos.is_empty(), "No demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let stem = demo_path.file_stem().unwrap().to_string_lossy().to_string();
        for extension in ["svg", "png"] {
            let output_path = temp_dir.path().join(format!("{stem}.{extension}"));
            match run(&args(demo_path, &output_path)) {
                Ok(()) if output_path.exists() => {}
                Ok(()) => failed_demos.push((demo_path.clone(), "no output written".to_string())),
                Err(e) => failed_demos.push((demo_path.clone(), e.to_string())),
            }
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo run(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_fig_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args(demo_path, &output_path)) {
            Err(FiguraError::Parse { err, .. }) if err.error_count() > 0 => {
                assert!(!output_path.exists(), "strict failure must not write output");
            }
            _ => unexpectedly_succeeded.push(demo_path.clone()),
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that did not fail as expected:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) did not fail",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_lenient_mode_skips_bad_records() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demo_path = demos_path().join("errors").join("out_of_range.fig");
    let output_path = temp_dir.path().join("lenient.svg");

    let mut lenient = args(&demo_path, &output_path);
    lenient.strict = false;
    run(&lenient).expect("lenient run should succeed");

    let svg = fs::read_to_string(&output_path).unwrap();
    // The valid point survives; the oversized circle is dropped.
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains(r#"r="0.7""#));
}

#[test]
fn e2e_unsupported_format_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demo_path = demos_path().join("shapes.fig");
    let output_path = temp_dir.path().join("shapes.bmp");

    let mut bmp = args(&demo_path, &output_path);
    bmp.format = Some("bmp".to_string());

    assert!(matches!(run(&bmp), Err(FiguraError::UnsupportedFormat(_))));
    assert!(!output_path.exists());
}

#[test]
fn e2e_viewport_and_format_flags() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demo_path = demos_path().join("arrows.fig");
    let output_path = temp_dir.path().join("cropped.out");

    let mut cropped = args(&demo_path, &output_path);
    cropped.format = Some("SVG".to_string());
    cropped.viewport = Some("10,10,90,90".parse().unwrap());
    run(&cropped).expect("run should succeed");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains(r#"viewBox="10 10 80 80""#));
}
