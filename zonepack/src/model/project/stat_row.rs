use itertools::Itertools;

use crate::model::export::FieldValue;
use crate::model::fieldname;
use crate::model::zone::{Demographics, IncidenceRecord, ZoneId, ZoneRecord};
use crate::model::zonepack_error::ZonePackError;

/// one flat row of the downloadable table: a single incidence stratum
/// overlaid with its zone's constant fields. membership lists are joined
/// at construction so every row of a zone renders them identically.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub zone_id: ZoneId,
    pub url: String,
    pub counties: Option<String>,
    pub cities: Option<String>,
    pub demographics: Option<Demographics>,
    pub incidence: IncidenceRecord,
}

impl StatRow {
    pub fn new(zone: &ZoneRecord, incidence: IncidenceRecord) -> StatRow {
        StatRow {
            zone_id: zone.zone_id.clone(),
            url: zone.url.clone(),
            counties: zone.counties.as_ref().map(|c| c.iter().join(", ")),
            cities: zone.cities.as_ref().map(|c| c.iter().join(", ")),
            demographics: zone.demographics.clone(),
            incidence,
        }
    }

    /// looks up one cell by export column name. a name outside the export
    /// schema is a schema/mapping mismatch and fails the run rather than
    /// emitting a misaligned table.
    pub fn field(&self, column: &str) -> Result<FieldValue, ZonePackError> {
        let demographics = self.demographics.as_ref();
        let value = match column {
            fieldname::ZONE => FieldValue::Text(self.zone_id.to_string()),
            fieldname::COUNTIES => FieldValue::from(self.counties.clone()),
            fieldname::CITIES => FieldValue::from(self.cities.clone()),
            fieldname::URL => FieldValue::Text(self.url.clone()),
            fieldname::SEX => FieldValue::from(self.incidence.sex.clone()),
            fieldname::CANCER => FieldValue::from(self.incidence.cancer.clone()),
            fieldname::YEARS => FieldValue::from(self.incidence.years.clone()),
            fieldname::POP_TOT => FieldValue::from(self.incidence.overall.population),
            fieldname::AAIR => FieldValue::from(self.incidence.overall.rate),
            fieldname::LCI => FieldValue::from(self.incidence.overall.lower_ci),
            fieldname::UCI => FieldValue::from(self.incidence.overall.upper_ci),
            fieldname::WHITE_POP_TOT => FieldValue::from(self.incidence.white.population),
            fieldname::WHITE_AAIR => FieldValue::from(self.incidence.white.rate),
            fieldname::WHITE_LCI => FieldValue::from(self.incidence.white.lower_ci),
            fieldname::WHITE_UCI => FieldValue::from(self.incidence.white.upper_ci),
            fieldname::BLACK_POP_TOT => FieldValue::from(self.incidence.black.population),
            fieldname::BLACK_AAIR => FieldValue::from(self.incidence.black.rate),
            fieldname::BLACK_LCI => FieldValue::from(self.incidence.black.lower_ci),
            fieldname::BLACK_UCI => FieldValue::from(self.incidence.black.upper_ci),
            fieldname::HISPANIC_POP_TOT => FieldValue::from(self.incidence.hispanic.population),
            fieldname::HISPANIC_AAIR => FieldValue::from(self.incidence.hispanic.rate),
            fieldname::HISPANIC_LCI => FieldValue::from(self.incidence.hispanic.lower_ci),
            fieldname::HISPANIC_UCI => FieldValue::from(self.incidence.hispanic.upper_ci),
            fieldname::ASIAN_POP_TOT => FieldValue::from(self.incidence.asian.population),
            fieldname::ASIAN_AAIR => FieldValue::from(self.incidence.asian.rate),
            fieldname::ASIAN_LCI => FieldValue::from(self.incidence.asian.lower_ci),
            fieldname::ASIAN_UCI => FieldValue::from(self.incidence.asian.upper_ci),
            fieldname::QNSES => FieldValue::from(demographics.and_then(|d| d.qnses)),
            fieldname::POP_ALL => FieldValue::from(demographics.map(|d| d.pop_all)),
            fieldname::PER_RURAL => FieldValue::from(demographics.map(|d| d.per_rural)),
            fieldname::PER_UNINSURED => FieldValue::from(demographics.map(|d| d.per_uninsured)),
            fieldname::PER_FOREIGN_BORN => {
                FieldValue::from(demographics.map(|d| d.per_foreign_born))
            }
            fieldname::PER_WHITE => FieldValue::from(demographics.map(|d| d.per_white)),
            fieldname::PER_BLACK => FieldValue::from(demographics.map(|d| d.per_black)),
            fieldname::PER_ASIAN => FieldValue::from(demographics.map(|d| d.per_asian)),
            fieldname::PER_HISPANIC => FieldValue::from(demographics.map(|d| d.per_hispanic)),
            _ => return Err(ZonePackError::UnmappedColumn(String::from(column))),
        };
        Ok(value)
    }
}
