use crate::infra::{parse_answer, AnswerArg};
use crate::render::{render_banner, render_breakdown};
use afrowurldstar::error::AppError;
use afrowurldstar::lab::clearance::{AggregateResult, AnswerState, ClearanceEngine};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Answer as <factor>=<option number>, e.g. `--answer usage=2` (repeatable)
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<AnswerArg>,
    /// Treat each value as the option's risk weight instead of its number
    #[arg(long)]
    pub(crate) raw: bool,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport<'a> {
    answers: &'a AnswerState,
    #[serde(flatten)]
    result: &'a AggregateResult,
    label: &'static str,
    message: &'static str,
}

pub(crate) fn run_analyze<W: Write>(out: &mut W, args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs { answers, raw, json } = args;

    let mut state = AnswerState::new();
    for answer in &answers {
        state.record(answer.to_choice(raw)?);
    }

    let result = ClearanceEngine::default().evaluate(&state);
    info!(
        total_score = result.total_score,
        level = ?result.level,
        answered = state.answered_count(),
        "clearance analysis complete"
    );

    if json {
        let report = AnalyzeReport {
            answers: &state,
            result: &result,
            label: result.level.label(),
            message: result.level.message(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Sample Clearance Risk Analyzer (F4)")?;
    render_banner(out, &result)?;
    if !result.components.is_empty() {
        writeln!(out, "\nBreakdown")?;
        render_breakdown(out, &result)?;
    }
    if !result.complete {
        let missing: Vec<&str> = state
            .iter()
            .filter(|(_, score)| score.is_none())
            .map(|(factor, _)| factor.key())
            .collect();
        writeln!(out, "\nUnanswered: {}", missing.join(", "))?;
    }
    Ok(())
}
