use serde::{Deserialize, Serialize};

/// demographic summary for one zone, merged from the demographics source.
/// percentage fields are stored already rounded to one decimal place, the
/// precision published in the downloadable tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub pop_all: i64,
    /// neighborhood socioeconomic status quintile, absent for some zones
    pub qnses: Option<i64>,
    pub per_rural: f64,
    pub per_uninsured: f64,
    pub per_foreign_born: f64,
    pub per_white: f64,
    pub per_black: f64,
    pub per_hispanic: f64,
    pub per_asian: f64,
}
