use thiserror::Error;

use super::source::StatsSource;
use super::zone::ZoneId;

#[derive(Error, Debug)]
pub enum ZonePackError {
    #[error("invalid zonepack configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading boundary geodata {0}: {1}")]
    BoundaryReadError(String, String),
    #[error("failure opening {0} source at {1}: {2}")]
    CsvOpenError(StatsSource, String, csv::Error),
    #[error("failure reading {0} source rows: {1}")]
    CsvReadError(StatsSource, csv::Error),
    #[error("{0} source names zone id '{1}' not found in the boundary geodata")]
    UnknownZoneReference(StatsSource, ZoneId),
    #[error("{0} source column '{1}' has non-numeric value '{2}'")]
    InvalidNumericValue(StatsSource, String, String),
    #[error("attempting to project zone id '{0}' not in the zone index")]
    ZoneSelectionNotFound(ZoneId),
    #[error("export schema column '{0}' has no field mapping")]
    UnmappedColumn(String),
    #[error("failure writing statistics table: {0}")]
    CsvWriteError(csv::Error),
    #[error("failure writing archive {0}: {1}")]
    ArchiveWriteError(String, zip::result::ZipError),
    #[error("failure accessing file {0}: {1}")]
    FileIoError(String, std::io::Error),
    #[error("boundary conversion failed: {0}")]
    BoundaryToolError(String),
    #[error("{0}")]
    InternalError(String),
}
