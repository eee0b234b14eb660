use std::io::{self, Write};

fn main() {
    if let Err(err) = binary::run() {
        let message = format!("{err:#}");
        let message = message.trim_end();
        // stdout may be the thing that failed; never panic while reporting.
        if writeln!(io::stdout(), "{message}").is_err() {
            let _ = writeln!(io::stderr(), "{message}");
        }
        std::process::exit(1);
    }
}
