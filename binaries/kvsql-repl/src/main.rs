use {
    clap::Command,
    kvsql::Database,
    snafu::prelude::*,
    std::{
        io::{self, BufRead, Write},
        process,
    },
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("cannot read from standard input"))]
    ReadInput { source: io::Error },

    #[snafu(display("cannot write to standard output"))]
    WriteOutput { source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

const PROMPT: &str = ">> ";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    cli().get_matches();

    let mut db = Database::in_memory();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT).context(WriteOutputSnafu)?;
        stdout.flush().context(WriteOutputSnafu)?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context(ReadInputSnafu)?;
        if read == 0 {
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // A failed statement does not end the session.
        match db.execute(line) {
            Ok(response) => writeln!(stdout, "{}", response).context(WriteOutputSnafu)?,
            Err(err) => writeln!(stdout, "error: {}", report(&err)).context(WriteOutputSnafu)?,
        }
    }
}

/// Renders an error with its root cause, innermost last.
fn report(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();

    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
