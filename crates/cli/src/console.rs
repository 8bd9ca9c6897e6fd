//! Interactive console over a `Session`.

use anyhow::{Context, Result};
use geocalc::session::{Level, Message, Session};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "geocalc> ";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn colour(level: Level) -> Option<&'static str> {
    match level {
        Level::Success => Some(GREEN),
        Level::UserError => Some(YELLOW),
        Level::Error => Some(RED),
        Level::Info => None,
    }
}

fn render(msg: &Message) -> String {
    match colour(msg.level) {
        Some(c) => format!("{c}{}{RESET}", msg.text()),
        None => msg.text(),
    }
}

/// Read commands until `exit`, `quit`, or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    for line in input.lines() {
        let line = line.context("reading console input")?;
        match line.trim() {
            "exit" | "quit" => break,
            "" => {}
            "snapshot" => writeln!(out, "{}", serde_json::to_string(&session.snapshot())?)?,
            cmd => {
                let msg = session.run_line(cmd);
                writeln!(out, "{}", render(&msg))?;
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    tracing::info!(
        points = session.points().len(),
        lines = session.lines().len(),
        "console_closed"
    );
    Ok(())
}
