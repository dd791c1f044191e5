//! CLI entrypoint for `pwcheck`.
//!
//! Parses command-line arguments, loads the optional supplemental wordlist,
//! evaluates passwords from a flag, a file, or piped stdin through the
//! library engine, prints per-password reports, and optionally writes a CSV
//! export and a batch summary.
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser, ValueEnum};
use log::{LevelFilter, error};
use pwcheck::{
    assessment::Assessment,
    engine::Engine,
    export::save_assessments_csv,
    io::{DEFAULT_MMAP_THRESHOLD_BYTES, iter_lines_auto, iter_lines_reader},
    report::{render_assessment, render_batch_summary},
    stats::summarize,
};

#[derive(Parser, Debug)]
#[command(name = "pwcheck", version, about = "Offline password strength auditor")]
struct Args {
    /// Password to evaluate directly
    #[arg(short = 'p', long = "password", conflicts_with = "file")]
    password: Option<String>,

    /// File with one password per non-blank line
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Supplemental common-password wordlist
    #[arg(short = 'c', long = "common")]
    common: Option<PathBuf>,

    /// Path to the output directory for CSV export
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Verbose report; repeat for debug logging (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print batch statistics after the reports
    #[arg(long = "summary")]
    summary: bool,

    /// Evaluate a file batch on the rayon pool
    #[arg(long = "parallel")]
    parallel: bool,

    /// Override mmap threshold in bytes. If zero, disable mmap.
    #[arg(long = "mmap-threshold", default_value_t = DEFAULT_MMAP_THRESHOLD_BYTES)]
    mmap_threshold: u64,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress per-password reports (exports and summary still produced)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn verify_inputs(args: &Args) -> Result<()> {
    if let Some(p) = &args.file {
        if !p.exists() {
            bail!("password file not found: {}", p.display());
        }
    }
    Ok(())
}

fn print_report(a: &Assessment, verbose: bool, quiet: bool, first: &mut bool) {
    if quiet {
        return;
    }
    if !*first {
        println!();
    }
    *first = false;
    print!("{}", render_assessment(a, verbose));
}

fn run(args: &Args, engine: &mut Engine) -> Result<()> {
    let verbose = args.verbose > 0;
    let threshold = if args.mmap_threshold == 0 {
        u64::MAX
    } else {
        args.mmap_threshold
    };
    let mut first = true;

    if let Some(pw) = &args.password {
        let a = engine.evaluate_one(pw);
        print_report(&a, verbose, args.quiet, &mut first);
        return Ok(());
    }

    if let Some(path) = &args.file {
        if args.parallel {
            let mut lines = Vec::new();
            for line in iter_lines_auto(path, threshold)? {
                lines.push(line?);
            }
            engine.evaluate_batch_parallel(&lines);
            for a in &engine.assessments {
                print_report(a, verbose, args.quiet, &mut first);
            }
        } else {
            // Stream so that reports printed before a mid-file read error
            // still stand.
            for line in iter_lines_auto(path, threshold)? {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let a = engine.evaluate_one(&line);
                print_report(&a, verbose, args.quiet, &mut first);
            }
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        for line in iter_lines_reader(stdin) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let a = engine.evaluate_one(&line);
            print_report(&a, verbose, args.quiet, &mut first);
        }
        return Ok(());
    }

    // Interactive terminal with nothing to do: usage, successful exit.
    let mut cmd = Args::command();
    let _ = cmd.print_help();
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
        }
        ColorChoice::Auto => {}
    }
    if let Err(e) = verify_inputs(&args) {
        error!("{}", e);
        std::process::exit(2);
    }

    let mut engine = Engine::new();
    if let Some(wordlist) = &args.common {
        let threshold = if args.mmap_threshold == 0 {
            u64::MAX
        } else {
            args.mmap_threshold
        };
        engine.load_wordlist(wordlist, threshold);
    }

    if let Err(e) = run(&args, &mut engine) {
        error!("failed to evaluate input: {}", e);
        std::process::exit(3);
    }

    if args.summary && !engine.assessments.is_empty() {
        print!("{}", render_batch_summary(&summarize(&engine.assessments)));
    }

    if let Some(outdir) = args.output {
        if let Err(e) = std::fs::create_dir_all(&outdir) {
            error!(
                "failed to create output directory {}: {}",
                outdir.display(),
                e
            );
            std::process::exit(4);
        }
        let ts = chrono::Local::now().format("%Y.%m.%d_%H.%M.%S");
        let csv = outdir.join(format!("pwcheck_assessments_{}.csv", ts));
        if let Err(e) = save_assessments_csv(&engine.assessments, &csv) {
            error!("failed to write {}: {}", csv.display(), e);
            std::process::exit(5);
        }
    }
}
