use std::fs::create_dir_all;
use xtaskops::ops::{clean_files, cmd};

const PACKAGE: &str = "int_array";

fn main() -> Result<(), anyhow::Error> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match args.first().map(String::as_str) {
        Some("cover") => cover(args.get(1).map(String::as_str)),
        Some("demo") => demo(&args[1..]),
        Some(task) => {
            eprintln!("unknown task: {task}");
            usage();
            Ok(())
        }
        None => {
            usage();
            Ok(())
        }
    }
}

fn usage() {
    eprintln!("usage: cargo xtask <task>");
    eprintln!();
    eprintln!("tasks:");
    eprintln!("  cover [xml|cobertura|lcov]  run the tests with coverage and write coverage/tests.<ext>");
    eprintln!("  demo [VALUES]...            run the demo binary with the given values");
}

/// Runs the demo binary in release mode, so its binary search is not checked for sortedness.
fn demo(values: &[String]) -> Result<(), anyhow::Error> {
    let mut args = vec!["run", "--release", "--package", PACKAGE, "--bin", "int_array_demo", "--"];
    args.extend(values.iter().map(String::as_str));
    cmd("cargo", args).run()?;
    Ok(())
}

// https://blog.rng0.io/how-to-do-code-coverage-in-rust
fn cover(format: Option<&str>) -> Result<(), anyhow::Error> {
    create_dir_all("coverage")?;

    let (fmt, file_ext) = match format.map(str::to_ascii_lowercase).as_deref() {
        Some("xml") | Some("cobertura") | None => ("cobertura", "xml"),
        Some("lcov") => ("lcov", "lcov"),
        Some(s) => {
            eprintln!("Warning: invalid format: {s}");
            ("cobertura", "xml")
        }
    };
    let file = format!("coverage/tests.{file_ext}");

    println!("=== coverage of {PACKAGE} as {fmt} ===");
    cmd!("cargo", "test", "--package", PACKAGE)
        .env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-Cinstrument-coverage")
        .env("LLVM_PROFILE_FILE", "cargo-test-%p-%m.profraw")
        .run()?;

    println!("=== report: {file} ===");
    cmd!(
        "grcov",
        ".",
        "--binary-path",
        "./target/debug/deps",
        "-s",
        ".",
        "-t",
        fmt,
        "--branch",
        "--ignore-not-existing",
        "--ignore",
        "../*",
        "--ignore",
        "/*",
        "--ignore",
        "xtask/*",
        "--ignore",
        "*/src/bin/*",
        "-o",
        file,
    )
    .run()?;

    clean_files("**/*.profraw")?;
    println!("ok.");

    Ok(())
}
