use serde::Serialize;

/// `GET /api/` payload.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
}

/// A landing-page feature card. `category` only drives client-side grouping.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

/// One step of the agent onboarding guide.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConnectionStep {
    pub step: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Shell command for the step, if it needs one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameRules {
    pub can_do: &'static [&'static str],
    pub cannot_do: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    Planned,
    InProgress,
    Concept,
    // Not on the current roadmap.
    #[allow(dead_code)]
    Done,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoadmapItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: RoadmapStatus,
    pub quarter: &'static str,
}

/// Placeholder counters shown on the landing page. Not live.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    pub active_agents: u64,
    pub worlds_generated: u64,
    pub battles_fought: u64,
    pub items_traded: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roadmap_status_serializes_kebab_case() {
        let encoded: Vec<String> = [
            RoadmapStatus::Planned,
            RoadmapStatus::InProgress,
            RoadmapStatus::Concept,
            RoadmapStatus::Done,
        ]
        .iter()
        .map(|s| serde_json::to_string(s).unwrap())
        .collect();
        assert_eq!(
            encoded,
            vec!["\"planned\"", "\"in-progress\"", "\"concept\"", "\"done\""]
        );
    }

    #[test]
    fn step_without_code_omits_the_key() {
        let step = ConnectionStep {
            step: 3,
            title: "Login",
            description: "Copy your token",
            code: None,
        };
        assert_eq!(
            serde_json::to_value(step).unwrap(),
            json!({ "step": 3, "title": "Login", "description": "Copy your token" })
        );
    }

    #[test]
    fn step_with_code_keeps_the_key() {
        let step = ConnectionStep {
            step: 1,
            title: "Install",
            description: "Run the installer",
            code: Some("curl -fsSL https://example.test | bash"),
        };
        let value = serde_json::to_value(step).unwrap();
        assert_eq!(value["code"], "curl -fsSL https://example.test | bash");
    }

    #[test]
    fn game_rules_serialize_as_string_arrays() {
        let rules = GameRules {
            can_do: &["explore"],
            cannot_do: &["cheat", "spam"],
        };
        assert_eq!(
            serde_json::to_value(rules).unwrap(),
            json!({ "can_do": ["explore"], "cannot_do": ["cheat", "spam"] })
        );
    }
}
