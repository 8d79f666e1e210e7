//! Static culture feed fixtures shown on the Gist tab.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::navigation::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsKind {
    Gist,
    NewMusic,
    Spotlight,
}

impl NewsKind {
    pub fn label(&self) -> &'static str {
        match self {
            NewsKind::Gist => "GIST",
            NewsKind::NewMusic => "NEW MUSIC",
            NewsKind::Spotlight => "SPOTLIGHT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub kind: NewsKind,
    pub title: &'static str,
    pub metric: &'static str,
    pub published_at: DateTime<Utc>,
}

impl NewsItem {
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        relative_age(now - self.published_at)
    }
}

/// Promo card that links a feed story to a lab tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisCard {
    pub headline: &'static str,
    pub body: &'static str,
    pub call_to_action: &'static str,
    pub target: View,
}

pub fn analysis_card() -> AnalysisCard {
    AnalysisCard {
        headline: "DAWIE ANALYSIS: The Wizkid Gist",
        body: "The master splits leak is a massive legal warning. DAWIE says never rely on trust when money is involved. We predict 90% of producers fail the legal check.",
        call_to_action: "DAWIE Wants You To Check YOUR Risk Now (F4)",
        target: View::Lab,
    }
}

/// Mock stories, newest first, dated relative to `now`.
pub fn culture_feed(now: DateTime<Utc>) -> Vec<NewsItem> {
    let stories = [
        (
            NewsKind::Gist,
            "Wizkid's New Album Leak: Producers Scramble to Secure Master Splits",
            "RISK ALERT",
            0,
        ),
        (
            NewsKind::NewMusic,
            "DAWIE's Pick: Rema drops genre-bending new single \"Bounce Back\"",
            "HOOK: 5.2s",
            30,
        ),
        (
            NewsKind::Spotlight,
            "Rising Star: Tems' engineer reveals her secret recording workflow",
            "Vocal Stack",
            60,
        ),
        (
            NewsKind::Gist,
            "TurnTable Charts: Amapiano reigns supreme for 5th consecutive week",
            "Tempo Trend",
            120,
        ),
    ];

    stories
        .into_iter()
        .map(|(kind, title, metric, minutes_ago)| NewsItem {
            kind,
            title,
            metric,
            published_at: now - Duration::minutes(minutes_ago),
        })
        .collect()
}

fn relative_age(age: Duration) -> String {
    let minutes = age.num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if minutes < 60 * 24 {
        format!("{} hr ago", age.num_hours())
    } else {
        format!("{} d ago", age.num_days())
    }
}
