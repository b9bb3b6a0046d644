use crate::models::villain::{ThreatLevel, VillainEntry};

const UNKNOWN_VILLAIN: VillainEntry = VillainEntry {
    threat: ThreatLevel::Unknown,
    message: "New villain detected! Batman is investigating.",
};

/// Look up a villain's threat entry. Matching is case-insensitive; names
/// outside the table get the default "investigating" entry.
pub fn assess_threat(name: &str) -> VillainEntry {
    match name.to_lowercase().as_str() {
        "joker" => VillainEntry {
            threat: ThreatLevel::High,
            message: "Chaos detected! Auto-scaling activated.",
        },
        "penguin" => VillainEntry {
            threat: ThreatLevel::Medium,
            message: "Traffic spike detected! Load balancing engaged.",
        },
        "riddler" => VillainEntry {
            threat: ThreatLevel::Low,
            message: "Configuration puzzle solved by Kustomize!",
        },
        "twoface" => VillainEntry {
            threat: ThreatLevel::Medium,
            message: "A/B deployment ready for canary release.",
        },
        _ => UNKNOWN_VILLAIN,
    }
}
