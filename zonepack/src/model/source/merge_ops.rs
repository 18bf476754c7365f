//! merge passes applying the published statistics sources to the zone
//! index. each pass reads one CSV source and attaches its rows to the
//! registered zones, failing on any reference to an unregistered zone.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{CityRow, CountyRow, DemographicsRow, IncidenceRow, StatsSource};
use crate::model::zone::{Demographics, ZoneId, ZoneIndex, ZoneRecord};
use crate::model::zonepack_error::ZonePackError;

/// attaches demographics to each referenced zone, replacing any earlier
/// value. returns the number of rows merged.
pub fn merge_demographics(index: &mut ZoneIndex, file: &Path) -> Result<usize, ZonePackError> {
    let reader = open_source(StatsSource::Demographics, file)?;
    merge_demographics_rows(index, reader)
}

/// appends county memberships to each referenced zone in source order.
/// returns the number of rows merged.
pub fn merge_counties(index: &mut ZoneIndex, file: &Path) -> Result<usize, ZonePackError> {
    let reader = open_source(StatsSource::Counties, file)?;
    merge_county_rows(index, reader)
}

/// appends city memberships to each referenced zone in source order.
/// returns the number of rows merged.
pub fn merge_cities(index: &mut ZoneIndex, file: &Path) -> Result<usize, ZonePackError> {
    let reader = open_source(StatsSource::Cities, file)?;
    merge_city_rows(index, reader)
}

/// appends incidence records to each referenced zone in source order,
/// normalizing missing-data sentinels and coercing statistic columns.
/// returns the number of rows merged, not counting blank separator rows.
pub fn merge_incidence(index: &mut ZoneIndex, file: &Path) -> Result<usize, ZonePackError> {
    let reader = open_source(StatsSource::Incidence, file)?;
    merge_incidence_rows(index, reader)
}

fn open_source(source: StatsSource, file: &Path) -> Result<csv::Reader<File>, ZonePackError> {
    csv::Reader::from_path(file)
        .map_err(|e| ZonePackError::CsvOpenError(source, file.to_string_lossy().to_string(), e))
}

/// resolves a source row's zone reference against the registered zones
fn lookup_zone<'a>(
    index: &'a mut ZoneIndex,
    source: StatsSource,
    zone: &str,
) -> Result<&'a mut ZoneRecord, ZonePackError> {
    let zone_id = ZoneId::from(zone);
    index
        .get_mut(&zone_id)
        .ok_or_else(|| ZonePackError::UnknownZoneReference(source, zone_id.clone()))
}

fn merge_demographics_rows<R: Read>(
    index: &mut ZoneIndex,
    mut reader: csv::Reader<R>,
) -> Result<usize, ZonePackError> {
    let mut merged = 0;
    for result in reader.deserialize() {
        let row: DemographicsRow =
            result.map_err(|e| ZonePackError::CsvReadError(StatsSource::Demographics, e))?;
        let record = lookup_zone(index, StatsSource::Demographics, &row.zone)?;
        record.demographics = Some(Demographics::from(&row));
        merged += 1;
    }
    Ok(merged)
}

fn merge_county_rows<R: Read>(
    index: &mut ZoneIndex,
    mut reader: csv::Reader<R>,
) -> Result<usize, ZonePackError> {
    let mut merged = 0;
    for result in reader.deserialize() {
        let row: CountyRow =
            result.map_err(|e| ZonePackError::CsvReadError(StatsSource::Counties, e))?;
        let record = lookup_zone(index, StatsSource::Counties, &row.zone)?;
        record.counties.get_or_insert_with(Vec::new).push(row.county);
        merged += 1;
    }
    // the statewide zone intersects every county; its published list is empty
    if let Some(statewide) = index.get_mut(&ZoneId::statewide()) {
        statewide.counties = Some(vec![]);
    }
    Ok(merged)
}

fn merge_city_rows<R: Read>(
    index: &mut ZoneIndex,
    mut reader: csv::Reader<R>,
) -> Result<usize, ZonePackError> {
    let mut merged = 0;
    for result in reader.deserialize() {
        let row: CityRow =
            result.map_err(|e| ZonePackError::CsvReadError(StatsSource::Cities, e))?;
        let record = lookup_zone(index, StatsSource::Cities, &row.zone)?;
        record.cities.get_or_insert_with(Vec::new).push(row.city);
        merged += 1;
    }
    // same convention as counties
    if let Some(statewide) = index.get_mut(&ZoneId::statewide()) {
        statewide.cities = Some(vec![]);
    }
    Ok(merged)
}

fn merge_incidence_rows<R: Read>(
    index: &mut ZoneIndex,
    mut reader: csv::Reader<R>,
) -> Result<usize, ZonePackError> {
    let mut merged = 0;
    for result in reader.deserialize() {
        let row: IncidenceRow =
            result.map_err(|e| ZonePackError::CsvReadError(StatsSource::Incidence, e))?;
        if row.zone.is_empty() {
            // the publisher pads this file with blank separator rows
            continue;
        }
        let record = lookup_zone(index, StatsSource::Incidence, &row.zone)?;
        record.incidence.push(row.to_record()?);
        merged += 1;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCIDENCE_HEADER: &str = "Zone,sex,cancer,years,PopTot,AAIR,LCI,UCI,W_PopTot,W_AAIR,W_LCI,W_UCI,B_PopTot,B_AAIR,B_LCI,B_UCI,H_PopTot,H_AAIR,H_LCI,H_UCI,A_PopTot,A_AAIR,A_LCI,A_UCI";

    const DEMOGRAPHICS_HEADER: &str =
        "Zone,PopAll,QNSES,PerRural,PerUninsured,PerForeignBorn,PerWhite,PerBlack,PerHispanic,PerAPI";

    fn test_index() -> ZoneIndex {
        let mut index = ZoneIndex::new();
        for id in ["A", "B"] {
            index.insert(ZoneRecord::new(
                ZoneId::from(id),
                format!("https://example.org/?address={id}"),
            ));
        }
        index.insert(ZoneRecord::new(
            ZoneId::statewide(),
            String::from("https://example.org/"),
        ));
        index
    }

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(data.as_bytes())
    }

    #[test]
    fn test_demographics_merge() {
        let mut index = test_index();
        let data = format!("{DEMOGRAPHICS_HEADER}\nA,120543,3,12.34,4.04,27.96,41.0,6.449,30.08,18.55\n");
        let merged = merge_demographics_rows(&mut index, reader(&data)).expect("merge failed");
        assert_eq!(merged, 1);
        let demographics = index
            .get(&ZoneId::from("A"))
            .and_then(|r| r.demographics.clone())
            .expect("demographics not merged");
        assert_eq!(demographics.pop_all, 120543);
        assert_eq!(demographics.per_rural, 12.3);
        assert_eq!(demographics.per_asian, 18.6);
        assert_eq!(index.get(&ZoneId::from("B")).and_then(|r| r.demographics.clone()), None);
    }

    #[test]
    fn test_demographics_unknown_zone_is_fatal() {
        let mut index = test_index();
        let data = format!("{DEMOGRAPHICS_HEADER}\nZZZ,1,1,0,0,0,0,0,0,0\n");
        let result = merge_demographics_rows(&mut index, reader(&data));
        match result {
            Err(ZonePackError::UnknownZoneReference(source, zone_id)) => {
                assert_eq!(source, StatsSource::Demographics);
                assert_eq!(zone_id, ZoneId::from("ZZZ"));
            }
            other => panic!("expected UnknownZoneReference, got {other:?}"),
        }
    }

    #[test]
    fn test_county_merge_appends_in_source_order() {
        let mut index = test_index();
        let data = "Zone,County\nA,Yolo\nB,Sacramento\nA,Solano\n";
        let merged = merge_county_rows(&mut index, reader(data)).expect("merge failed");
        assert_eq!(merged, 3);
        let counties = index
            .get(&ZoneId::from("A"))
            .and_then(|r| r.counties.clone());
        assert_eq!(
            counties,
            Some(vec![String::from("Yolo"), String::from("Solano")])
        );
    }

    #[test]
    fn test_statewide_membership_list_forced_empty() {
        let mut index = test_index();
        let data = "Zone,County\nA,Yolo\nStatewide,Yolo\n";
        merge_county_rows(&mut index, reader(data)).expect("merge failed");
        let statewide = index
            .get(&ZoneId::statewide())
            .and_then(|r| r.counties.clone());
        assert_eq!(statewide, Some(vec![]));
    }

    #[test]
    fn test_city_merge_unknown_zone_names_source() {
        let mut index = test_index();
        let data = "Zone,City\nQ,Davis\n";
        let result = merge_city_rows(&mut index, reader(data));
        match result {
            Err(ZonePackError::UnknownZoneReference(source, zone_id)) => {
                assert_eq!(source, StatsSource::Cities);
                assert_eq!(zone_id, ZoneId::from("Q"));
            }
            other => panic!("expected UnknownZoneReference, got {other:?}"),
        }
    }

    #[test]
    fn test_incidence_merge_appends_and_skips_blank_zones() {
        let mut index = test_index();
        let blank = ",".repeat(23);
        let data = format!(
            "{INCIDENCE_HEADER}\n\
             A,Female,Breast,2013-2017,163.0,402.4,398.1,406.7,100,400.0,390.0,410.0,21,88.9,80.0,98.5,45,120.5,110.1,131.0,30,95.2,90.0,100.4\n\
             {blank}\n\
             A,Male,Prostate,2013-2017,150.0,380.0,370.0,390.0,90,385.0,375.0,395.0,20,80.0,70.0,90.0,40,110.0,100.0,120.0,25,90.0,85.0,95.0\n"
        );
        let merged = merge_incidence_rows(&mut index, reader(&data)).expect("merge failed");
        assert_eq!(merged, 2);
        let record = index.get(&ZoneId::from("A")).expect("missing zone");
        assert_eq!(record.incidence.len(), 2);
        assert_eq!(record.incidence[0].cancer, Some(String::from("Breast")));
        assert_eq!(record.incidence[0].overall.population, Some(163));
        assert_eq!(record.incidence[1].sex, Some(String::from("Male")));
    }

    #[test]
    fn test_incidence_unknown_zone_checked_before_coercion() {
        let mut index = test_index();
        // the statistics in this row are malformed, but the unknown zone
        // reference is reported first
        let data = format!(
            "{INCIDENCE_HEADER}\nZZZ,Female,Breast,2013-2017,bogus,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x\n"
        );
        let result = merge_incidence_rows(&mut index, reader(&data));
        match result {
            Err(ZonePackError::UnknownZoneReference(source, zone_id)) => {
                assert_eq!(source, StatsSource::Incidence);
                assert_eq!(zone_id, ZoneId::from("ZZZ"));
            }
            other => panic!("expected UnknownZoneReference, got {other:?}"),
        }
    }

    #[test]
    fn test_all_passes_complete_every_record() {
        let mut index = test_index();
        let demographics = format!(
            "{DEMOGRAPHICS_HEADER}\n\
             A,120543,3,12.3,4.0,28.0,41.0,6.4,30.1,18.6\n\
             B,98000,1,2.0,5.5,31.2,38.8,7.7,29.9,20.1\n\
             Statewide,39500000,2,5.1,7.0,26.8,36.5,5.5,39.4,15.3\n"
        );
        let counties = "Zone,County\nA,Yolo\nB,Sacramento\n";
        let cities = "Zone,City\nA,Davis\nB,Elk Grove\n";
        let incidence = format!(
            "{INCIDENCE_HEADER}\n\
             A,Female,Breast,2013-2017,163.0,402.4,398.1,406.7,100,400.0,390.0,410.0,21,88.9,80.0,98.5,45,120.5,110.1,131.0,30,95.2,90.0,100.4\n"
        );

        merge_demographics_rows(&mut index, reader(&demographics)).expect("demographics failed");
        merge_county_rows(&mut index, reader(counties)).expect("counties failed");
        merge_city_rows(&mut index, reader(cities)).expect("cities failed");
        merge_incidence_rows(&mut index, reader(&incidence)).expect("incidence failed");

        for record in index.records() {
            let zone = &record.zone_id;
            assert!(record.demographics.is_some(), "zone {zone} lacks demographics");
            assert!(record.counties.is_some(), "zone {zone} lacks counties");
            assert!(record.cities.is_some(), "zone {zone} lacks cities");
        }
    }
}
