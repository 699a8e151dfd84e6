use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use rand::{Rng, SeedableRng, distributions::Uniform, rngs::StdRng};

// Configuration
const BINARY_NAME: &str = "scan";
const DATA_DIR: &str = "target/bench-data";

/// (file name, alphabet, length in bytes)
const TEXT_FILES: &[(&str, &[u8], usize)] = &[
    ("dna.txt", b"ACGT", 8 * 1024 * 1024),
    ("binary.txt", b"ab", 4 * 1024 * 1024),
    ("letters.txt", b"abcdefghijklmnopqrstuvwxyz", 8 * 1024 * 1024),
];

const PATTERNS: &[(&str, &str)] = &[
    ("TCGC", "Short DNA"),
    ("GATTACA", "Medium DNA"),
    ("abababababbabab", "Periodic"),
    ("aaaaaaaaaaaaaaaaaaaab", "Worst Case Sunday"),
    ("XYZXYZMISSING", "Not Present"),
];

const ALGORITHMS: &[&str] = &["naive", "kmp", "sunday"];

#[derive(Debug)]
struct ResultEntry {
    algo: String,
    pattern: String,
    file: String,
    duration_ns: u128,
    found_count: usize,
}

fn main() {
    println!("--- Starting Benchmark Script ---");

    println!("> Building project in release mode...");
    let build_status = Command::new("cargo")
        .args(["build", "--release", "-p", BINARY_NAME])
        .status()
        .expect("Failed to execute cargo build");

    if !build_status.success() {
        eprintln!("Error: Cargo build failed.");
        std::process::exit(1);
    }

    let binary_path = Path::new("target").join("release").join(BINARY_NAME);
    if !binary_path.exists() {
        eprintln!("Error: Binary not found at {:?}. Check crate name.", binary_path);
        std::process::exit(1);
    }

    println!("> Generating synthetic texts in {}...", DATA_DIR);
    let text_paths = generate_texts(Path::new(DATA_DIR));

    let mut results: Vec<ResultEntry> = Vec::new();

    for (pattern, pat_desc) in PATTERNS {
        for algo in ALGORITHMS {
            println!("> Running {} on pattern '{}' ({})", algo, pattern, pat_desc);

            let mut args = vec![
                "search".to_string(),
                "--all".to_string(),
                "--measure-time".to_string(),
                "--pattern".to_string(),
                pattern.to_string(),
                "--algo".to_string(),
                algo.to_string(),
            ];

            for txt in &text_paths {
                args.push("-t".to_string());
                args.push(txt.to_string_lossy().into_owned());
            }

            let output = Command::new(&binary_path)
                .args(&args)
                .output()
                .expect("Failed to run binary");

            if !output.status.success() {
                eprintln!("  ! Algorithm {} failed on pattern {}", algo, pattern);
                let stderr = String::from_utf8_lossy(&output.stderr);
                eprintln!("  ! Error: {}", stderr);
                continue;
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            results.extend(parse_output(&stdout, algo, pattern));
        }
    }

    print_summary_table(&results);
}

fn generate_texts(dir: &Path) -> Vec<PathBuf> {
    fs::create_dir_all(dir).expect("Failed to create bench data directory");
    let mut rng = StdRng::seed_from_u64(0xbe7c);

    TEXT_FILES
        .iter()
        .map(|(name, alphabet, len)| {
            let path = dir.join(name);
            if !path.exists() {
                let picks = Uniform::new(0, alphabet.len());
                let text: Vec<u8> = (0..*len).map(|_| alphabet[rng.sample(picks)]).collect();
                fs::write(&path, text).expect("Failed to write bench text");
            }
            path
        })
        .collect()
}

fn parse_output(output: &str, algo: &str, pattern: &str) -> Vec<ResultEntry> {
    let mut entries = Vec::new();
    let mut current_file = String::new();
    let mut current_ns = None;

    for line in output.lines() {
        let line = line.trim();

        if line.starts_with("text=") {
            current_file = line
                .trim_start_matches("text=\"")
                .trim_end_matches('"')
                .to_string();
        }

        if line.starts_with("execution_time:") {
            current_ns = line
                .split_whitespace()
                .nth(1)
                .and_then(|ns| ns.trim_end_matches("ns").parse::<u128>().ok());
        }

        if let Some(list) = line.strip_prefix("matches:") {
            let list = list.trim().trim_start_matches('[').trim_end_matches(']');
            let found_count = list.split(',').filter(|s| !s.trim().is_empty()).count();
            if let Some(ns) = current_ns.take() {
                entries.push(ResultEntry {
                    algo: algo.to_string(),
                    pattern: pattern.to_string(),
                    file: current_file.clone(),
                    duration_ns: ns,
                    found_count,
                });
            }
        }
    }
    entries
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^90}", " RESULTS SUMMARY ");
    println!(
        "{:<10} | {:<15} | {:<20} | {:>10} | {:>15}",
        "Algorithm", "Pattern", "File", "Found", "Time (µs)"
    );
    println!("{:-^90}", "");

    for entry in results {
        let micros = entry.duration_ns as f64 / 1000.0;

        let short_file = Path::new(&entry.file)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        println!(
            "{:<10} | {:<15} | {:<20} | {:>10} | {:>15.2}",
            entry.algo,
            entry.pattern.chars().take(12).collect::<String>(),
            short_file,
            entry.found_count,
            micros
        );
    }
    println!("{:=^90}", " END ");
}
