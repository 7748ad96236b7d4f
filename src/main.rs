use std::fs;

use clap::Parser;
use ladle::{
    error::{Error, RuntimeError, Severity},
    prepare,
};
use tracing_subscriber::EnvFilter;

/// ladle is a small embeddable scripting and configuration language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ladle to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final
    /// sentinel value of a ladle script when it is printable.
    #[arg(short, long)]
    pipe_mode: bool,

    /// How many diagnostics to retain: minimum, many, or all.
    #[arg(short, long, default_value = "many", value_parser = parse_severity)]
    diagnostics: Severity,

    /// Turns the stdout module flag off before the run, suppressing script
    /// output and diagnostic echoes.
    #[arg(long)]
    no_stdout: bool,

    /// Turns the stdin module flag on before the run, allowing the script to
    /// read standard input.
    #[arg(long)]
    stdin: bool,

    contents: String,
}

fn parse_severity(threshold: &str) -> Result<Severity, String> {
    match threshold {
        "minimum" => Ok(Severity::Minimum),
        "many" => Ok(Severity::Many),
        "all" => Ok(Severity::All),
        other => Err(format!("'{other}' is not a diagnostic threshold (minimum, many, all)")),
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    match execute(&script, &args) {
        Ok(()) => {},
        // The library never exits the process; the quit request surfaces
        // here and becomes the exit code.
        Err(Error::Runtime(RuntimeError::Quit { code, .. })) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn execute(script: &str, args: &Args) -> Result<(), Error> {
    let (mut interpreter, diagnostics) = prepare(script, args.diagnostics)?;

    if args.no_stdout {
        interpreter.set_flag("stdout", false);
    }
    if args.stdin {
        interpreter.set_flag("stdin", true);
    }

    if !args.no_stdout {
        for diagnostic in diagnostics.entries() {
            eprintln!("{diagnostic}");
        }
    }

    let sentinel = interpreter.interpret()?;

    if args.pipe_mode && !sentinel.is_undefined() {
        println!("{sentinel}");
    }
    Ok(())
}
