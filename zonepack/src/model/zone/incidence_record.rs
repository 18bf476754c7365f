use serde::{Deserialize, Serialize};

/// age-adjusted incidence statistics for one population subgroup. any field
/// may be withheld at the source, typically for small-population suppression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubpopulationStats {
    pub population: Option<i64>,
    /// age-adjusted incidence rate per 100,000 person-years
    pub rate: Option<f64>,
    pub lower_ci: Option<f64>,
    pub upper_ci: Option<f64>,
}

/// one incidence stratum for a zone: a (sex, cancer site, year range)
/// combination with overall and per-subgroup statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidenceRecord {
    pub sex: Option<String>,
    pub cancer: Option<String>,
    pub years: Option<String>,
    pub overall: SubpopulationStats,
    pub white: SubpopulationStats,
    pub black: SubpopulationStats,
    pub hispanic: SubpopulationStats,
    pub asian: SubpopulationStats,
}
