//! Command-line front end for the classicrypt ciphers.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info};

use classicrypt::cipher::Direction;
use classicrypt::render::DEFAULT_MAX_ROWS;
use classicrypt::session::{self, Algorithm, InputPolicy, Request};

/// Columnar transposition (Latin) and progressive-key Vigenère (Cyrillic)
/// ciphers.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Operation to perform.
    #[arg(value_enum)]
    mode: Mode,

    /// Text to transform. Read from --input or standard input when absent.
    text: Option<String>,

    /// Cipher key.
    #[arg(short, long, env = "CLASSICRYPT_KEY", hide_env_values = true)]
    key: String,

    /// Cipher to use.
    #[arg(short, long, value_enum, default_value_t = CipherArg::Columnar)]
    algorithm: CipherArg,

    /// Read the text from this UTF-8 file.
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject inputs containing characters outside the cipher's alphabet
    /// instead of dropping them.
    #[arg(long)]
    strict: bool,

    /// Print the intermediate matrix or key-stream table to standard error.
    #[arg(long)]
    show_matrix: bool,

    /// Grid rows shown by --show-matrix.
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    max_rows: usize,

    /// Print the full report (result, diagnostics, warnings) as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Encrypt,
    Decrypt,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CipherArg {
    /// Columnar transposition over A-Z.
    Columnar,
    /// Progressive-key Vigenère over А-Я (with Ё).
    Vigenere,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encrypt => Direction::Encrypt,
            Mode::Decrypt => Direction::Decrypt,
        }
    }
}

impl From<CipherArg> for Algorithm {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Columnar => Algorithm::Columnar,
            CipherArg::Vigenere => Algorithm::Vigenere,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let code = execute(
        &args,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    process::exit(code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Runs one invocation and returns the process exit code: 0 on success,
/// 1 after printing the error.
fn execute<R: Read, W: Write, E: Write>(args: &Args, input: R, out: &mut W, err: &mut E) -> i32 {
    match run(args, input, out, err) {
        Ok(()) => 0,
        Err(error) => {
            // Nothing left to report to if stderr itself fails.
            let _ = writeln!(err, "error: {}", error);
            1
        }
    }
}

fn run<R: Read, W: Write, E: Write>(
    args: &Args,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<(), Box<dyn Error>> {
    let text = read_text(args, input)?;
    let request = Request {
        algorithm: args.algorithm.into(),
        direction: args.mode.into(),
        key: &args.key,
        text: &text,
        policy: if args.strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Lenient
        },
    };
    debug!(
        "{} {} with {:?} policy",
        request.algorithm, request.direction, request.policy
    );

    let report = session::process(&request)?;
    for warning in &report.warnings {
        writeln!(err, "warning: {}", warning)?;
    }
    if args.show_matrix {
        write!(err, "{}", report.render_diagnostics(args.max_rows))?;
    }

    let rendered = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.text.clone()
    };
    write_output(args.output.as_deref(), &rendered, out)
}

/// Takes the text from the positional argument, else `--input`, else
/// `input`. Text read from a file or stream loses one trailing line ending.
fn read_text<R: Read>(args: &Args, mut input: R) -> Result<String, Box<dyn Error>> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let mut text = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("cannot read {}: {}", path.display(), err))?;
            info!("loaded {} bytes from {}", text.len(), path.display());
            text
        }
        None => {
            let mut text = String::new();
            input.read_to_string(&mut text)?;
            text
        }
    };
    strip_line_ending(&mut text);
    Ok(text)
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_line_ending(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

fn write_output<W: Write>(path: Option<&Path>, rendered: &str, out: &mut W) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered))
                .map_err(|err| format!("cannot write {}: {}", path.display(), err))?;
            info!("saved result to {}", path.display());
        }
        None => {
            writeln!(out, "{}", rendered)?;
            out.flush()?;
        }
    }
    Ok(())
}
