mod error;

use env_logger::Env;
use error::report_to_stderr;
use pw_simplify::{render_expression, RenderOptions, RenderOptionsBuilder};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{collections::HashMap, fs, io::{self, IsTerminal, Read}, process::ExitCode};

const USAGE: &str = "usage: pw-repl [--tex] [--strict] [--partial] [--name NAME]... [FILE]";

/// Command-line arguments.
#[derive(Debug, Default, PartialEq)]
struct Args {
    /// Options to render every expression with.
    options: RenderOptions,

    /// The file to read expressions from, one per line.
    file: Option<String>,
}

impl Args {
    /// Parses the arguments, not including the program name.
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut builder = RenderOptionsBuilder::new();
        let mut file = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            builder = match arg.as_str() {
                "--tex" => builder.typeset(true),
                "--strict" => builder.strict(true),
                "--partial" => builder.partial_simplify(true),
                "--name" => match args.next() {
                    Some(name) => builder.known_name(name),
                    None => return Err("`--name` requires a value".to_owned()),
                },
                flag if flag.starts_with("--") => return Err(format!("unknown option `{}`", flag)),
                _ if file.is_some() => return Err(format!("unexpected argument `{}`", arg)),
                _ => {
                    file = Some(arg);
                    builder
                },
            };
        }

        Ok(Self { options: builder.build(), file })
    }
}

/// Renders every non-empty line of the input, sharing one cache. Returns true if every line
/// rendered successfully.
fn render_lines(input: &str, options: &RenderOptions) -> bool {
    let mut cache = HashMap::new();
    let mut ok = true;

    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match render_expression(line, options, &mut cache) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                report_to_stderr(&err, line);
                ok = false;
            },
        }
    }

    ok
}

/// Runs the interactive loop until end of input.
fn repl(options: &RenderOptions) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    let mut cache = HashMap::new();

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;

        match render_expression(input.trim(), options, &mut cache) {
            Ok(output) => println!("{}", output),
            Err(err) => report_to_stderr(&err, input.trim()),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            return ExitCode::FAILURE;
        },
    };

    let input = if let Some(filename) = &args.file {
        // render source file
        fs::read_to_string(filename).map_err(|err| format!("cannot read `{}`: {}", filename, err))
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)
            .map(|_| input)
            .map_err(|err| format!("cannot read stdin: {}", err))
    } else {
        // run the repl / interactive mode
        return match repl(&args.options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            },
        };
    };

    match input {
        Ok(input) if render_lines(&input, &args.options) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(msg) => {
            eprintln!("{}", msg);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        Args::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn flags_and_file() {
        let args = parse(&["--tex", "--name", "a", "exprs.txt", "--strict", "--name", "b"]).unwrap();

        assert_eq!(args.file.as_deref(), Some("exprs.txt"));
        assert_eq!(
            args.options,
            RenderOptionsBuilder::new()
                .typeset(true)
                .strict(true)
                .known_names(["a", "b"])
                .build(),
        );
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(parse(&["--name"]).unwrap_err(), "`--name` requires a value");
        assert_eq!(parse(&["--fast"]).unwrap_err(), "unknown option `--fast`");
        assert_eq!(parse(&["a", "b"]).unwrap_err(), "unexpected argument `b`");
    }
}
