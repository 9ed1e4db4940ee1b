mod logging;

use clap::Parser;
use locator::{
    parse, Layout, Locator, LocatorError, Outcome, SampleManager, Step, TapeLoader, SAMPLES,
};
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Runs Minsky's locator machine over a tape and prints the final tape and verdict.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  locator-cli Y11X00Y
  locator-cli --file samples/single-mismatch.tape --debug
  locator-cli --sample second-candidate --json
  locator-cli --dir samples
  echo Y10X011X10Y | locator-cli")]
struct Cli {
    /// The tape to run, e.g. Y11X00Y
    tape: Option<String>,

    /// Read the tape from a .tape file
    #[clap(short, long, conflicts_with_all = ["tape", "sample"])]
    file: Option<String>,

    /// Run one of the built-in sample tapes
    #[clap(short, long, conflicts_with = "tape")]
    sample: Option<String>,

    /// Run every .tape file in a directory
    #[clap(long, conflicts_with_all = ["tape", "file", "sample"])]
    dir: Option<String>,

    /// List the built-in sample tapes and exit
    #[clap(long)]
    list: bool,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,

    /// Print the outcome as JSON
    #[clap(long)]
    json: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if cli.list {
        for sample in SAMPLES.iter() {
            println!(
                "{:<18} {:<14} {}",
                sample.name,
                sample.layout.to_string(),
                sample.expected
            );
        }
        return;
    }

    if let Some(dir) = &cli.dir {
        if !run_directory(Path::new(dir), cli.json) {
            std::process::exit(1);
        }
        return;
    }

    let layout = match load_layout(&cli) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    debug!(tape = %layout, head = layout.head(), "tape loaded");

    let outcome = match execute(&layout, cli.debug) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Machine error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize outcome: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{} {}", outcome.tape, outcome.verdict);
    }
}

/// Runs every tape file in `dir`, one result line per file.
///
/// Returns `false` if any file failed to load or run.
fn run_directory(dir: &Path, json: bool) -> bool {
    let mut ok = true;

    for result in TapeLoader::load_tapes(dir) {
        let (path, layout) = match result {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("{}", e);
                ok = false;
                continue;
            }
        };

        match layout.tape().and_then(locator::run) {
            Ok(outcome) if json => match serde_json::to_string(&outcome) {
                Ok(line) => println!("{}: {}", path.display(), line),
                Err(e) => {
                    eprintln!("{}: failed to serialize outcome: {}", path.display(), e);
                    ok = false;
                }
            },
            Ok(outcome) => println!("{}: {} {}", path.display(), outcome.tape, outcome.verdict),
            Err(e) => {
                eprintln!("{}: machine error: {}", path.display(), e);
                ok = false;
            }
        }
    }

    ok
}

/// Loads the tape based on CLI arguments.
///
/// It tries the positional tape, then a file, then a sample, and finally stdin
/// when it is not a terminal.
fn load_layout(cli: &Cli) -> Result<Layout, LocatorError> {
    if let Some(tape) = &cli.tape {
        parse(tape)
    } else if let Some(path) = &cli.file {
        TapeLoader::load_tape(Path::new(path))
    } else if let Some(name) = &cli.sample {
        SampleManager::get_sample_by_name(name).map(|sample| sample.layout.clone())
    } else if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| LocatorError::FileError(format!("Failed to read from stdin: {}", e)))?;
        TapeLoader::load_tape_from_string(&buffer)
    } else {
        Err(LocatorError::ValidationError(
            "No tape given; pass a tape, --file, --sample or pipe one on stdin".to_string(),
        ))
    }
}

/// Runs the locator, printing every step when `trace_steps` is set.
fn execute(layout: &Layout, trace_steps: bool) -> Result<Outcome, LocatorError> {
    let tape = layout.tape()?;
    if !trace_steps {
        return locator::run(tape);
    }

    let mut machine = Locator::new(tape);
    let print_state = |machine: &Locator| {
        println!(
            "Step: {}, State: {}, Head: {}, Tape: {}",
            machine.step_count(),
            machine.state(),
            machine.tape().head(),
            machine.tape()
        );
    };

    print_state(&machine);

    let verdict = loop {
        match machine.step()? {
            Step::Continue => print_state(&machine),
            Step::Halt(verdict) => break verdict,
        }
    };
    println!("\nMachine finished: {}", verdict);

    Ok(Outcome {
        tape: machine.tape().to_string(),
        verdict,
        steps: machine.step_count(),
    })
}
