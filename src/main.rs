use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use tomljson::{run, ConvertError};

const USAGE: &str = "tomljson can be used in two ways:
Reading from stdin:
  cat file.toml | tomljson > file.json

Reading from a file:
  tomljson file.toml > file.json";

/// TOML to JSON converter
#[derive(Parser, Debug)]
#[command(name = "tomljson")]
#[command(about = "Convert a TOML document to pretty-printed JSON")]
#[command(version)]
#[command(after_help = USAGE)]
struct CliArgs {
    /// TOML file to read (standard input when omitted; only the first
    /// file is used, extra arguments are ignored)
    #[arg()]
    files: Vec<PathBuf>,
}

fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => process::exit(handle_parse_error(err)),
    };

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let code = match run(&args.files, stdin, stdout) {
        Ok(()) => 0,
        Err(err) => report(&err, &mut io::stderr().lock()),
    };
    process::exit(code);
}

/// Usage and version text belongs on the error stream. An explicit
/// `--help`/`--version` request still succeeds; bad invocations keep
/// clap's stderr output and usage exit code.
fn handle_parse_error(err: clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(io::stderr(), "{}", err.render());
            0
        }
        _ => err.exit(),
    }
}

/// Print the failure to the error stream and return the process exit
/// code. Decode errors get a second line carrying the source position;
/// every other error is a bare message.
fn report(err: &ConvertError, stderr: &mut impl Write) -> i32 {
    match err {
        ConvertError::Decode(decode) => {
            let _ = writeln!(stderr, "{}", decode.message());
            let _ = writeln!(
                stderr,
                "error occurred at row {} column {}",
                decode.row(),
                decode.col()
            );
        }
        other => {
            let _ = writeln!(stderr, "{other}");
        }
    }
    1
}
