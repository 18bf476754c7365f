use serde::Deserialize;

/// one (zone, county) pair from the county membership source. a zone
/// appears once per county it overlaps, in the publisher's order.
#[derive(Debug, Clone, Deserialize)]
pub struct CountyRow {
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "County")]
    pub county: String,
}

/// one (zone, city) pair from the city membership source
#[derive(Debug, Clone, Deserialize)]
pub struct CityRow {
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "City")]
    pub city: String,
}
