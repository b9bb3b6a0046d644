use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    High,
    Medium,
    Low,
    Unknown,
}

/// One row of the villain threat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VillainEntry {
    pub threat: ThreatLevel,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VillainAlert {
    pub villain: String,
    pub threat_level: ThreatLevel,
    pub batman_response: &'static str,
    pub city: String,
    pub auto_response: &'static str,
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threat_levels_serialize_uppercase() {
        assert_eq!(
            serde_json::to_string(&ThreatLevel::High).unwrap(),
            "\"HIGH\""
        );
        assert_eq!(
            serde_json::to_string(&ThreatLevel::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }
}
