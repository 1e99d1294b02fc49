use serde::{Deserialize, Serialize};

/// Stage of the scripted fraud-response sequence. The wire order of the
/// variants is also the order events are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Info,
    Ingest,
    Detect,
    Freeze,
    Legal,
    Recover,
}

/// Display severity attached to each event; callers use it for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Info,
    Warn,
    Critical,
    Success,
}

impl EventType {
    /// Each event type maps to exactly one level.
    pub fn level(self) -> EventLevel {
        match self {
            EventType::Info => EventLevel::Info,
            EventType::Ingest => EventLevel::Info,
            EventType::Detect => EventLevel::Warn,
            EventType::Freeze => EventLevel::Critical,
            EventType::Legal => EventLevel::Success,
            EventType::Recover => EventLevel::Success,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Wall-clock time (HH:MM:SS) when the request was received. Shared by
    /// every event in one response; the caller animates the pacing.
    pub t: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub message: String,
    pub level: EventLevel,
}

/// Requested playback pacing. Validated against the enum on the way in;
/// anything outside slow/normal/fast fails the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(default = "default_scenario")]
    pub scenario: String,
    #[serde(default)]
    pub speed: SimulationSpeed,
}

fn default_scenario() -> String {
    "upi_scam".to_string()
}

impl Default for SimulationRequest {
    fn default() -> Self {
        SimulationRequest {
            scenario: default_scenario(),
            speed: SimulationSpeed::default(),
        }
    }
}
