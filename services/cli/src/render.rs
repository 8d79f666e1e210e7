use afrowurldstar::feed::{analysis_card, culture_feed};
use afrowurldstar::lab::clearance::{AggregateResult, SampleClearanceQuestionnaire, RISK_FACTORS};
use afrowurldstar::lab::{tool, LabToolId, ToolAvailability, ToolLaunch, LAB_TOOLS};
use chrono::{DateTime, Utc};
use std::io::{self, Write};

pub(crate) fn render_feed<W: Write>(out: &mut W, now: DateTime<Utc>) -> io::Result<()> {
    writeln!(out, "The Culture Feed & Gist")?;

    let card = analysis_card();
    writeln!(out, "\n{}", card.headline)?;
    writeln!(out, "{}", card.body)?;
    writeln!(
        out,
        "-> {} (run `afrowurldstar {}`)",
        card.call_to_action,
        card.target.key()
    )?;

    writeln!(out)?;
    for item in culture_feed(now) {
        writeln!(
            out,
            "- [{}] {} | {} | {}",
            item.kind.label(),
            item.title,
            item.age_label(now),
            item.metric
        )?;
    }
    Ok(())
}

pub(crate) fn render_lab<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "The Lab: Producer & Artist Tools")?;
    for tool in &LAB_TOOLS {
        let status = match tool.availability {
            ToolAvailability::Live => "live",
            ToolAvailability::Promotional { .. } => "coming soon",
            ToolAvailability::PreRegistration => "pre-launch",
        };
        writeln!(out, "\n{} [{}]", tool.name, status)?;
        writeln!(out, "  {}", tool.pitch)?;
        writeln!(out, "  {} (`lab launch {}`)", tool.call_to_action, tool.id.key())?;
    }
    Ok(())
}

/// Returns true when the launched tool should open the clearance session.
pub(crate) fn render_launch<W: Write>(out: &mut W, id: LabToolId) -> io::Result<bool> {
    match tool(id).launch() {
        ToolLaunch::Open(_) => Ok(true),
        ToolLaunch::Notice(notice) => {
            writeln!(out, "{notice}")?;
            Ok(false)
        }
        ToolLaunch::Unavailable => {
            writeln!(out, "{} is not available yet.", tool(id).name)?;
            Ok(false)
        }
    }
}

pub(crate) fn render_banner<W: Write>(out: &mut W, result: &AggregateResult) -> io::Result<()> {
    match result.display_score() {
        Some(score) => writeln!(
            out,
            "DAWIE Risk Status: {} (Score: {})",
            result.level.label(),
            score
        )?,
        None => writeln!(out, "DAWIE Risk Status: {}", result.level.label())?,
    }
    writeln!(out, "{}", result.level.message())
}

pub(crate) fn render_breakdown<W: Write>(out: &mut W, result: &AggregateResult) -> io::Result<()> {
    for component in &result.components {
        let factor = component.factor.factor();
        writeln!(
            out,
            "  {}: {} (+{})",
            factor.label, component.answer, component.score
        )?;
    }
    Ok(())
}

pub(crate) fn render_questionnaire<W: Write>(
    out: &mut W,
    session: &SampleClearanceQuestionnaire,
) -> io::Result<()> {
    render_banner(out, &session.result())?;
    for factor in &RISK_FACTORS {
        let marker = if session.is_expanded(factor.id) {
            "v"
        } else {
            ">"
        };
        let answered = if session.answers().is_answered(factor.id) {
            " *"
        } else {
            ""
        };
        writeln!(out, "{marker} {}{answered}", factor.label)?;

        if session.is_expanded(factor.id) {
            writeln!(out, "    {}", factor.description)?;
            let selected = session.selected_option(factor.id);
            for (position, option) in factor.options.iter().enumerate() {
                let mark = if selected == Some(option) { "x" } else { " " };
                writeln!(
                    out,
                    "    [{mark}] {}. {} ({})",
                    position + 1,
                    option.text,
                    factor.severity_of(option).label()
                )?;
            }
        }
    }
    Ok(())
}
