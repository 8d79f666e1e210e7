use crate::infra::parse_factor;
use crate::render::{render_breakdown, render_questionnaire};
use afrowurldstar::error::AppError;
use afrowurldstar::lab::clearance::{ClearanceError, FactorId, OptionChoice, SampleClearanceQuestionnaire};
use std::io::{BufRead, Write};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionInput {
    Select(usize),
    Toggle(FactorId),
    Reset,
    Help,
    Quit,
}

pub(crate) fn parse_input(line: &str) -> Result<SessionInput, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    match verb.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(SessionInput::Quit),
        "r" | "reset" => Ok(SessionInput::Reset),
        "h" | "help" | "?" => Ok(SessionInput::Help),
        "o" | "open" | "toggle" => parse_factor(rest)
            .map(SessionInput::Toggle)
            .map_err(|err| err.to_string()),
        other => other
            .parse::<usize>()
            .map(SessionInput::Select)
            .map_err(|_| format!("unrecognized input '{line}' (type `help`)")),
    }
}

const HELP: &str = "Commands: <n> pick option n for the open question | open <factor|1-5> expand or collapse a question | reset | quit";

/// Drives the guided questionnaire from line-oriented input until `quit` or
/// end of input.
pub(crate) fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    session: &mut SampleClearanceQuestionnaire,
) -> Result<(), AppError> {
    writeln!(out, "Sample Clearance Risk Analyzer (F4)")?;
    writeln!(out, "{HELP}")?;
    render_questionnaire(out, session)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_input(&line) {
            Ok(SessionInput::Quit) => break,
            Ok(SessionInput::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Ok(SessionInput::Reset) => {
                session.reset_all();
            }
            Ok(SessionInput::Toggle(factor)) => session.toggle_focus(factor),
            Ok(SessionInput::Select(position)) => {
                if let Err(err) = select_focused(session, position) {
                    warn!(%err, "rejected clearance answer");
                    writeln!(out, "! {err}")?;
                    continue;
                }
            }
            Err(message) => {
                writeln!(out, "! {message}")?;
                continue;
            }
        }

        writeln!(out)?;
        render_questionnaire(out, session)?;
    }

    let result = session.result();
    if result.complete {
        writeln!(out, "\nFinal breakdown")?;
        render_breakdown(out, &result)?;
    }
    Ok(())
}

fn select_focused(
    session: &mut SampleClearanceQuestionnaire,
    position: usize,
) -> Result<(), SelectError> {
    let factor = session.focus().ok_or(SelectError::NothingOpen)?;
    let choice = OptionChoice::at_position(factor, position)?;
    session.select(choice);
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum SelectError {
    #[error("no question is open; use `open <factor>` first")]
    NothingOpen,
    #[error(transparent)]
    Clearance(#[from] ClearanceError),
}
