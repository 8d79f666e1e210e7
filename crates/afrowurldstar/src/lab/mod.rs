//! Producer and artist tools listed in the lab.

pub mod clearance;

use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabToolId {
    HookTimeline,
    VocalAnalyzer,
    SampleClearance,
}

impl LabToolId {
    pub fn key(&self) -> &'static str {
        match self {
            LabToolId::HookTimeline => "hook-timeline",
            LabToolId::VocalAnalyzer => "vocal-analyzer",
            LabToolId::SampleClearance => "sample-clearance",
        }
    }
}

impl FromStr for LabToolId {
    type Err = UnknownTool;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        LAB_TOOLS
            .iter()
            .map(|tool| tool.id)
            .find(|id| id.key() == needle)
            .ok_or_else(|| UnknownTool(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lab tool '{0}'")]
pub struct UnknownTool(pub String);

/// Release state of a lab tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolAvailability {
    /// Usable now.
    Live,
    /// Promoted with a launch notice, not built yet.
    Promotional { notice: &'static str },
    /// Pre-registration only; the launch button is disabled.
    PreRegistration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabTool {
    pub id: LabToolId,
    pub name: &'static str,
    pub pitch: &'static str,
    pub call_to_action: &'static str,
    pub availability: ToolAvailability,
}

/// Outcome of pressing a tool's launch button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolLaunch {
    /// Open the live tool.
    Open(LabToolId),
    Notice(&'static str),
    Unavailable,
}

impl LabTool {
    pub fn launch(&self) -> ToolLaunch {
        match self.availability {
            ToolAvailability::Live => ToolLaunch::Open(self.id),
            ToolAvailability::Promotional { notice } => ToolLaunch::Notice(notice),
            ToolAvailability::PreRegistration => ToolLaunch::Unavailable,
        }
    }
}

pub static LAB_TOOLS: [LabTool; 3] = [
    LabTool {
        id: LabToolId::HookTimeline,
        name: "Hook Timeline Tool (F3)",
        pitch: "Analyze where your hook, drums, and bass drop in relation to the critical 7-second skip window. Engineer your streams!",
        call_to_action: "Launch Hook Tool (F3)",
        availability: ToolAvailability::Promotional {
            notice: "Hook Timeline Tool (F3) - Ready for development in The Lab!",
        },
    },
    LabTool {
        id: LabToolId::VocalAnalyzer,
        name: "Vocal Performance Analyzer (F5)",
        pitch: "The first tool for artists. Analyze vocal clarity, timing deviation (ms), and dynamic range consistency against chart standards.",
        call_to_action: "Pre-Register for Early Access",
        availability: ToolAvailability::PreRegistration,
    },
    LabTool {
        id: LabToolId::SampleClearance,
        name: "Sample Clearance Risk Analyzer (F4)",
        pitch: "Five questions on your sample. DAWIE scores the copyright risk before you release.",
        call_to_action: "Check Your Risk",
        availability: ToolAvailability::Live,
    },
];

/// `LAB_TOOLS` is declared in `LabToolId` order.
pub fn tool(id: LabToolId) -> &'static LabTool {
    &LAB_TOOLS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_clearance_analyzer_opens() {
        let opened: Vec<LabToolId> = LAB_TOOLS
            .iter()
            .filter_map(|tool| match tool.launch() {
                ToolLaunch::Open(id) => Some(id),
                _ => None,
            })
            .collect();
        assert_eq!(opened, vec![LabToolId::SampleClearance]);
    }

    #[test]
    fn placeholders_never_open() {
        assert!(matches!(
            tool(LabToolId::HookTimeline).launch(),
            ToolLaunch::Notice(notice) if notice.contains("Ready for development")
        ));
        assert_eq!(
            tool(LabToolId::VocalAnalyzer).launch(),
            ToolLaunch::Unavailable
        );
    }

    #[test]
    fn catalogue_is_indexed_by_id() {
        for tool_id in LAB_TOOLS.iter().map(|tool| tool.id) {
            assert_eq!(tool(tool_id).id, tool_id);
        }
    }

    #[test]
    fn parses_tool_keys() {
        assert_eq!(
            "Hook-Timeline".parse::<LabToolId>(),
            Ok(LabToolId::HookTimeline)
        );
        assert!("drum-machine".parse::<LabToolId>().is_err());
    }
}
