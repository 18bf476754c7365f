use serde::Deserialize;

use super::StatsSource;
use crate::model::zone::{IncidenceRecord, SubpopulationStats};
use crate::model::zonepack_error::ZonePackError;

/// one row of the incidence source, kept as raw text until normalization.
/// the publisher is inconsistent about missing data, mixing blank cells
/// with "null" spellings, and ships counts as float text ("163.0"), so
/// every statistic column goes through [`IncidenceRow::to_record`].
#[derive(Debug, Clone, Deserialize)]
pub struct IncidenceRow {
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "sex")]
    pub sex: String,
    #[serde(rename = "cancer")]
    pub cancer: String,
    #[serde(rename = "years")]
    pub years: String,
    #[serde(rename = "PopTot")]
    pub pop_tot: String,
    #[serde(rename = "AAIR")]
    pub aair: String,
    #[serde(rename = "LCI")]
    pub lci: String,
    #[serde(rename = "UCI")]
    pub uci: String,
    #[serde(rename = "W_PopTot")]
    pub w_pop_tot: String,
    #[serde(rename = "W_AAIR")]
    pub w_aair: String,
    #[serde(rename = "W_LCI")]
    pub w_lci: String,
    #[serde(rename = "W_UCI")]
    pub w_uci: String,
    #[serde(rename = "B_PopTot")]
    pub b_pop_tot: String,
    #[serde(rename = "B_AAIR")]
    pub b_aair: String,
    #[serde(rename = "B_LCI")]
    pub b_lci: String,
    #[serde(rename = "B_UCI")]
    pub b_uci: String,
    #[serde(rename = "H_PopTot")]
    pub h_pop_tot: String,
    #[serde(rename = "H_AAIR")]
    pub h_aair: String,
    #[serde(rename = "H_LCI")]
    pub h_lci: String,
    #[serde(rename = "H_UCI")]
    pub h_uci: String,
    #[serde(rename = "A_PopTot")]
    pub a_pop_tot: String,
    #[serde(rename = "A_AAIR")]
    pub a_aair: String,
    #[serde(rename = "A_LCI")]
    pub a_lci: String,
    #[serde(rename = "A_UCI")]
    pub a_uci: String,
}

impl IncidenceRow {
    /// normalizes missing-data sentinels and coerces the statistic columns
    /// to their published types. text columns keep their raw spelling when
    /// present. a present but non-numeric statistic fails the run.
    pub fn to_record(&self) -> Result<IncidenceRecord, ZonePackError> {
        Ok(IncidenceRecord {
            sex: normalized(&self.sex).map(String::from),
            cancer: normalized(&self.cancer).map(String::from),
            years: normalized(&self.years).map(String::from),
            overall: SubpopulationStats {
                population: count_value("PopTot", &self.pop_tot)?,
                rate: real_value("AAIR", &self.aair)?,
                lower_ci: real_value("LCI", &self.lci)?,
                upper_ci: real_value("UCI", &self.uci)?,
            },
            white: SubpopulationStats {
                population: count_value("W_PopTot", &self.w_pop_tot)?,
                rate: real_value("W_AAIR", &self.w_aair)?,
                lower_ci: real_value("W_LCI", &self.w_lci)?,
                upper_ci: real_value("W_UCI", &self.w_uci)?,
            },
            black: SubpopulationStats {
                population: count_value("B_PopTot", &self.b_pop_tot)?,
                rate: real_value("B_AAIR", &self.b_aair)?,
                lower_ci: real_value("B_LCI", &self.b_lci)?,
                upper_ci: real_value("B_UCI", &self.b_uci)?,
            },
            hispanic: SubpopulationStats {
                population: count_value("H_PopTot", &self.h_pop_tot)?,
                rate: real_value("H_AAIR", &self.h_aair)?,
                lower_ci: real_value("H_LCI", &self.h_lci)?,
                upper_ci: real_value("H_UCI", &self.h_uci)?,
            },
            asian: SubpopulationStats {
                population: count_value("A_PopTot", &self.a_pop_tot)?,
                rate: real_value("A_AAIR", &self.a_aair)?,
                lower_ci: real_value("A_LCI", &self.a_lci)?,
                upper_ci: real_value("A_UCI", &self.a_uci)?,
            },
        })
    }
}

/// missing-data sentinel check: a blank cell or any casing of "null"
/// (with surrounding whitespace) means no data. anything else, including
/// whitespace-only text, is kept verbatim.
fn normalized(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw.trim().eq_ignore_ascii_case("null") {
        None
    } else {
        Some(raw)
    }
}

/// counts arrive as float text and are truncated to whole persons. "nan"
/// and "inf" parse as floats but have no whole-person reading, so they
/// fail like any other malformed cell.
fn count_value(column: &str, raw: &str) -> Result<Option<i64>, ZonePackError> {
    match normalized(raw) {
        None => Ok(None),
        Some(v) => {
            let real: f64 = v.trim().parse().map_err(|_| invalid_value(column, raw))?;
            if !real.is_finite() {
                return Err(invalid_value(column, raw));
            }
            Ok(Some(real as i64))
        }
    }
}

fn real_value(column: &str, raw: &str) -> Result<Option<f64>, ZonePackError> {
    match normalized(raw) {
        None => Ok(None),
        Some(v) => {
            let real: f64 = v.trim().parse().map_err(|_| invalid_value(column, raw))?;
            Ok(Some(real))
        }
    }
}

fn invalid_value(column: &str, raw: &str) -> ZonePackError {
    ZonePackError::InvalidNumericValue(
        StatsSource::Incidence,
        String::from(column),
        String::from(raw),
    )
}
