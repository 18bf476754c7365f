use serde::{Deserialize, Serialize};

use super::{Demographics, IncidenceRecord, ZoneId};

/// everything known about one zone: identity and deep link from the
/// boundary geodata, plus whatever the merge passes have attached so far.
/// counties and cities distinguish "never merged" (None) from "merged,
/// empty" (Some with no entries), which the statewide zone relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub zone_id: ZoneId,
    pub url: String,
    pub demographics: Option<Demographics>,
    pub counties: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
    pub incidence: Vec<IncidenceRecord>,
}

impl ZoneRecord {
    /// a freshly registered zone with its deep link and no statistics yet
    pub fn new(zone_id: ZoneId, url: String) -> ZoneRecord {
        ZoneRecord {
            zone_id,
            url,
            demographics: None,
            counties: None,
            cities: None,
            incidence: vec![],
        }
    }
}
