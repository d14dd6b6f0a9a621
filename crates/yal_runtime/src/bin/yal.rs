//! YAL CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use yal_foundation::ErrorKind;
use yal_language::{Interpreter, InterpreterConfig};
use yal_runtime::{Repl, read_source};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    strict_integers: bool,
    clear_bare_instructions: bool,
    dump_tokens: bool,
}

impl CliConfig {
    fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig::default()
            .with_strict_integers(self.strict_integers)
            .with_retain_bare_instructions(!self.clear_bare_instructions)
            .with_dump_tokens(self.dump_tokens)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--strict-integers" => config.strict_integers = true,
            "--clear-bare-instructions" => config.clear_bare_instructions = true,
            "--dump-tokens" => config.dump_tokens = true,
            option if option.starts_with('-') && option != "-" => {
                return Err(format!("unknown option: {option}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

/// Returns `Ok(false)` if any file failed.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(true);
    }

    if config.show_version {
        println!("yal {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let interpreter_config = config.interpreter_config();

    if config.files.is_empty() {
        let mut repl = Repl::new()?.with_config(interpreter_config);
        repl.run()?;
        return Ok(true);
    }

    let mut success = true;
    for file in &config.files {
        let outcome = read_source(file).and_then(|source| {
            Interpreter::new()
                .with_config(interpreter_config.clone())
                .run(&source)
        });
        match outcome {
            Ok(true) => {}
            Ok(false) => {
                eprintln!(
                    "There were errors during the execution of {}.",
                    file.display()
                );
                success = false;
            }
            Err(e) if matches!(e.kind, ErrorKind::Io(_)) && e.context.is_some() => {
                eprintln!("{} does not seem to exist.", file.display());
                success = false;
            }
            Err(e) if matches!(e.kind, ErrorKind::InvalidInteger { .. }) => {
                // --strict-integers aborts the whole invocation.
                let context = e
                    .context
                    .clone()
                    .unwrap_or_default()
                    .with_source(file.display().to_string());
                eprintln!("\x1b[31mError: {e} {context}\x1b[0m");
                return Ok(false);
            }
            // Failed writes to stdout or stderr.
            Err(e) => return Err(e.into()),
        }
    }

    Ok(success)
}

fn print_help() {
    println!(
        "\x1b[1mYAL\x1b[0m - a one-keyword toy language

\x1b[1mUSAGE:\x1b[0m
    yal [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to interpret; without files a REPL is started

\x1b[1mOPTIONS:\x1b[0m
    -h, --help                   Print help information
    -V, --version                Print version information
    --strict-integers            Abort on integers that do not fit 64 bits
    --clear-bare-instructions    Do not keep a trailing `-` for later dumps
    --dump-tokens                Print the token dump of each input to stderr

\x1b[1mLANGUAGE:\x1b[0m
    -                    Empty instruction
    - describe 42        Prints: literal (Integral): eternal 42

\x1b[1mREPL COMMANDS:\x1b[0m
    :quit                Exit REPL
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
