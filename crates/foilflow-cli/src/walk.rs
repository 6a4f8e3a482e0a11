//! Terminal wizard.
//!
//! Reads one command per line:
//! - `1`..`n`: pick an option
//! - `p`: follow the progression link of a result
//! - `s`: start over from a result
//! - `b <n>`: jump back to history entry `n`
//! - `r`: restart
//! - `q`: quit (end of input also quits)

use std::io::{self, BufRead, Write};

use foilflow_core::wizard::WizardView;
use foilflow_core::{FlowGraph, WizardSession};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Zero-based option index.
    Choose(usize),
    Progress,
    StartOver,
    /// Zero-based history index.
    Back(usize),
    Restart,
    Quit,
    Empty,
}

/// Parses a line. Option and history numbers are one-based on input.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::Empty);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("unexpected input '{}'", line));
    }

    match (head, arg) {
        ("p", None) => Ok(Command::Progress),
        ("s", None) => Ok(Command::StartOver),
        ("r", None) => Ok(Command::Restart),
        ("q", None) => Ok(Command::Quit),
        ("b", Some(n)) => one_based(n).map(Command::Back),
        ("b", None) => Err("'b' needs a history number".to_string()),
        (n, None) => one_based(n).map(Command::Choose),
        _ => Err(format!("unknown command '{}'", line)),
    }
}

fn one_based(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("'{}' is not a number from 1 up", s)),
    }
}

/// Runs the wizard over `input` until `q` or end of input.
pub fn run<R: BufRead, W: Write>(graph: &FlowGraph, input: R, out: &mut W) -> io::Result<()> {
    let mut session = WizardSession::new();
    let mut lines = input.lines();

    loop {
        render(&session.view(graph), out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        let outcome = match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Empty) => Ok(()),
            Ok(Command::Choose(i)) => session
                .choose_option(graph, i)
                .map_err(|_| format!("no option {}", i + 1)),
            Ok(Command::Progress) => session.follow_progression(graph).map_err(|e| e.to_string()),
            Ok(Command::StartOver) => {
                if session.current_node(graph).kind.is_result() {
                    session.start_over(graph);
                    Ok(())
                } else {
                    Err("start over is offered on results only, use 'r'".to_string())
                }
            }
            Ok(Command::Back(i)) => session
                .jump_to_history(i)
                .map_err(|_| format!("no history entry {}", i + 1)),
            Ok(Command::Restart) => {
                session.restart();
                Ok(())
            }
            Err(e) => Err(e),
        };
        if let Err(message) = outcome {
            writeln!(out, "! {}", message)?;
        }
    }
}

/// Writes the wizard card and history for `view`.
pub fn render<W: Write>(view: &WizardView, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    if !view.history.is_empty() {
        writeln!(out, "Path:")?;
        for entry in &view.history {
            writeln!(out, "  b {}  {}: {}", entry.index + 1, entry.topic, entry.answer)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "[{}]", view.badge.to_uppercase())?;
    writeln!(out, "{}", view.title)?;
    writeln!(out)?;
    writeln!(out, "{}", view.content)?;

    if let Some(analysis) = &view.analysis {
        writeln!(out)?;
        writeln!(out, "Why: {}", analysis.why)?;
        for line in &analysis.why_not {
            writeln!(out, "  - {}", line)?;
        }
    }
    if !view.roadmap.is_empty() {
        writeln!(out)?;
        writeln!(out, "Roadmap:")?;
        for step in &view.roadmap {
            writeln!(out, "  {}. {}: {}", step.number, step.title, step.description)?;
        }
    }

    writeln!(out)?;
    for option in &view.options {
        writeln!(out, "  {}) {}", option.index + 1, option.label)?;
    }
    if let Some(link) = &view.progression {
        writeln!(out, "  p) {}", link.label)?;
    }
    if view.can_start_over {
        writeln!(out, "  s) Start Over")?;
    }
    writeln!(out, "  r) restart  q) quit")?;
    Ok(())
}
