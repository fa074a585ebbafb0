//! # BEEB
//!
//! Interactive calculator for BeebAsm expressions.
//!
//! Set `BEEB_LOG` to one of `TRACE`, `DEBUG`, `INFO`, `WARN`, or `ERROR`
//! to see what the evaluator is doing.

use tracing::Level;

fn main() {
    let level = std::env::var("BEEB_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    beeb::term::main();
}
