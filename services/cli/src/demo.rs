use crate::render::{
    render_banner, render_breakdown, render_feed, render_lab, render_questionnaire,
};
use afrowurldstar::error::AppError;
use afrowurldstar::feed::analysis_card;
use afrowurldstar::lab::clearance::{FactorId, OptionChoice, SampleClearanceQuestionnaire};
use afrowurldstar::navigation::Navigator;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Option positions picked for each question of the scripted walkthrough.
const DEMO_PICKS: [usize; 5] = [2, 1, 2, 1, 2];

pub(crate) fn run_demo<W: Write>(out: &mut W, now: DateTime<Utc>) -> Result<(), AppError> {
    let mut navigator = Navigator::default();
    writeln!(out, "AFROWURLDSTAR walkthrough: {}", navigator.current().label())?;
    render_feed(out, now)?;

    let card = analysis_card();
    navigator.switch_to(card.target);
    writeln!(out, "\n-> {}: {}", card.call_to_action, navigator.current().label())?;
    render_lab(out)?;

    writeln!(out, "\nGuided analysis")?;
    let mut session = SampleClearanceQuestionnaire::default();
    for position in DEMO_PICKS {
        let Some(factor) = session.focus() else {
            break;
        };
        let choice = OptionChoice::at_position(factor, position)?;
        writeln!(out, "- {}: {}", factor.factor().label, choice.option().text)?;
        session.select(choice);
    }
    let result = session.result();
    render_banner(out, &result)?;
    render_breakdown(out, &result)?;

    writeln!(out, "\nRevisiting the release type")?;
    session.toggle_focus(FactorId::Commercial);
    render_questionnaire(out, &session)?;
    let revised = session.select(OptionChoice::at_position(FactorId::Commercial, 3)?);
    render_banner(out, &revised)?;

    writeln!(out, "\nReset analysis")?;
    session.reset_all();
    render_questionnaire(out, &session)?;
    Ok(())
}
