//! Prints the tier of the current terminal each time it is resized.
//!
//! Widths are terminal columns, so the demo uses a column-sized table.
//! Press `q` or `Esc` to quit. Set `RUST_LOG=responsive=debug` to see tier
//! transitions on stderr.

use std::io::{Write, stdout};
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal;
use responsive::prelude::*;

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let table = BreakpointTable::new(60, 100, 140, 200)?;
    let term = Rc::new(TerminalViewport::new()?);
    let classifier = ViewportClassifier::builder()
        .provider(term.clone())
        .table(table)
        .on_change(|size, tier| print_line(&format!("{size} -> {tier}")))
        .build()?;

    terminal::enable_raw_mode()?;
    print_line(&format!(
        "{} -> {} (q to quit)",
        classifier.current(),
        classifier.breakpoint()
    ));

    let result = run(&term);
    terminal::disable_raw_mode()?;
    result
}

fn run(term: &TerminalViewport) -> anyhow::Result<()> {
    loop {
        let event = event::read()?;
        if let Event::Key(key) = &event
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            return Ok(());
        }
        term.handle_event(&event);
    }
}

fn print_line(line: &str) {
    let mut out = stdout();
    // raw mode: carriage return is not implied
    if let Err(err) = write!(out, "{line}\r\n").and_then(|()| out.flush()) {
        tracing::warn!(%err, "failed to write to the terminal");
    }
}
