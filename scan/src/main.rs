use std::fs::File;
use std::hash::Hash;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use scan::{Kmp, Naive, Span, StringSearch, Sunday, longest_palindrome_span, longest_unique_span};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Algorithm {
    Naive,
    Kmp,
    Sunday,
}

/// What counts as one unit when scanning a text.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Units {
    Bytes,
    Chars,
}

/// Example:
/// cargo run --release -- search -a sunday -t data/ipsum.txt --pattern "Lorem" --all --measure-time
/// cargo run --release -- unique -t data/ipsum.txt --units chars
/// cargo run --release -- palindrome -t - < data/ipsum.txt
/// set RUST_LOG=debug for table and result tracing
#[derive(Debug, Parser)]
#[command(
    name = "scan",
    about = "Run classical string scanning algorithms over one or more texts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a pattern in every text
    Search(SearchArgs),
    /// Longest run without a repeated unit in every text
    Unique(ScanArgs),
    /// Longest palindrome in every text
    Palindrome(ScanArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(short, long, value_enum, default_value = "kmp")]
    algo: Algorithm,

    #[command(flatten)]
    io: IoArgs,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Report every match instead of only the first
    #[arg(long)]
    all: bool,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

#[derive(Debug, Args)]
struct ScanArgs {
    #[command(flatten)]
    io: IoArgs,

    #[arg(short, long, value_enum, default_value = "chars")]
    units: Units,
}

#[derive(Debug, Args)]
struct IoArgs {
    /// Text file to scan; `-` reads stdin
    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Search(args) => run_search(&args),
        Command::Unique(args) => run_scan(&args, Operation::Unique),
        Command::Palindrome(args) => run_scan(&args, Operation::Palindrome),
    }
}

fn open_output(args: &IoArgs) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
    Ok(match args.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    })
}

fn run_search(args: &SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let pattern = load_pattern(args)?;
    let mut out = open_output(&args.io)?;

    writeln!(
        out,
        "# algorithm={:?}, pattern-length={}, all={}",
        args.algo,
        pattern.len(),
        args.all
    )?;

    for text_path in &args.io.texts {
        let text = load_text(text_path)?;
        debug!("searching {:?} ({} bytes)", text_path, text.len());

        let (matches, duration) = run_algorithm(args, &text, &pattern);

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        writeln!(out, "matches: {:?}", matches)?;
        writeln!(out)?;
    }

    Ok(())
}

fn run_algorithm(
    args: &SearchArgs,
    text: &[u8],
    pattern: &[u8],
) -> (Vec<usize>, Option<Duration>) {
    let start = if args.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let result = if args.all {
        match args.algo {
            Algorithm::Naive => Naive::find_all_bytes(text, pattern),
            Algorithm::Kmp => Kmp::find_all_bytes(text, pattern),
            Algorithm::Sunday => Sunday::find_all_bytes(text, pattern),
        }
    } else {
        let first = match args.algo {
            Algorithm::Naive => Naive::find_bytes(text, pattern),
            Algorithm::Kmp => Kmp::find_bytes(text, pattern),
            Algorithm::Sunday => Sunday::find_bytes(text, pattern),
        };
        first.into_iter().collect()
    };

    let duration = start.map(|s| s.elapsed());
    info!("{:?}: {} match(es)", args.algo, result.len());

    (result, duration)
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Unique,
    Palindrome,
}

impl Operation {
    fn span<T: Eq + Hash>(self, seq: &[T]) -> Span {
        match self {
            Operation::Unique => longest_unique_span(seq),
            Operation::Palindrome => longest_palindrome_span(seq),
        }
    }
}

fn run_scan(args: &ScanArgs, operation: Operation) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = open_output(&args.io)?;

    writeln!(out, "# operation={:?}, units={:?}", operation, args.units)?;

    for text_path in &args.io.texts {
        let bytes = load_text(text_path)?;
        debug!("scanning {:?} ({} bytes)", text_path, bytes.len());

        let (span, value) = match args.units {
            Units::Bytes => {
                let span = operation.span(&bytes);
                (span, String::from_utf8_lossy(&bytes[span.range()]).into_owned())
            }
            Units::Chars => {
                let text = std::str::from_utf8(&bytes)
                    .map_err(|e| format!("{:?} is not valid UTF-8: {}", text_path, e))?;
                let chars: Vec<char> = text.chars().collect();
                let span = operation.span(&chars);
                (span, chars[span.range()].iter().collect::<String>())
            }
        };
        info!("{:?}: {:?}", operation, span);

        writeln!(out, "text={:?}", text_path)?;
        write_span(out.as_mut(), span, &value)?;
        writeln!(out)?;
    }

    Ok(())
}

fn write_span(out: &mut dyn Write, span: Span, found: &str) -> io::Result<()> {
    writeln!(out, "start: {}", span.start)?;
    writeln!(out, "length: {}", span.len)?;
    writeln!(out, "value: {:?}", found)
}

fn load_pattern(args: &SearchArgs) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(ref pat) = args.pattern {
        Ok(pat.as_bytes().to_vec())
    } else if let Some(ref path) = args.pattern_file {
        load_text(path)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn load_text(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(buf)
}
