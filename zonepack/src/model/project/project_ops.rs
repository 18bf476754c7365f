//! projection of the zone index into flat output rows. rows are produced
//! lazily so the all-zones table never materializes more than one row at
//! a time ahead of the writer.

use super::{StatRow, ZoneSelection};
use crate::model::zone::{ZoneIndex, ZoneRecord};
use crate::model::zonepack_error::ZonePackError;

/// projects the selected zones into rows: zones in index order, each
/// zone's incidence records in merge order. a zone with no incidence
/// records contributes no rows.
pub fn project<'a>(
    index: &'a ZoneIndex,
    selection: &ZoneSelection,
) -> Result<Box<dyn Iterator<Item = StatRow> + 'a>, ZonePackError> {
    match selection {
        ZoneSelection::All => Ok(Box::new(index.records().flat_map(zone_rows))),
        ZoneSelection::One(zone_id) => {
            let record = index
                .get(zone_id)
                .ok_or_else(|| ZonePackError::ZoneSelectionNotFound(zone_id.clone()))?;
            Ok(Box::new(zone_rows(record)))
        }
    }
}

fn zone_rows(record: &ZoneRecord) -> impl Iterator<Item = StatRow> + '_ {
    record
        .incidence
        .iter()
        .map(move |incidence| StatRow::new(record, incidence.clone()))
}
