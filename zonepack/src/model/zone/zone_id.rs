use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of the synthetic zone aggregating the whole jurisdiction.
/// it appears in the statistics sources but never in the boundary geodata.
pub const STATEWIDE_ZONE_ID: &str = "Statewide";

/// zone identifier as published in the boundary geodata and the
/// statistics sources. compared and hashed as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub String);

impl ZoneId {
    pub fn statewide() -> ZoneId {
        ZoneId(String::from(STATEWIDE_ZONE_ID))
    }

    pub fn is_statewide(&self) -> bool {
        self.0 == STATEWIDE_ZONE_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(value: &str) -> Self {
        ZoneId(String::from(value))
    }
}

impl From<String> for ZoneId {
    fn from(value: String) -> Self {
        ZoneId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statewide_id() {
        assert!(ZoneId::statewide().is_statewide());
        assert!(!ZoneId::from("10.1").is_statewide());
    }
}
