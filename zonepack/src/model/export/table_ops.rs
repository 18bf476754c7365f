//! rendering of projected rows into the published delimited-table format.
//! the format quotes every non-numeric field, including empty cells, so
//! suppressed statistics remain visibly distinct from zero.

use std::io::Write;

use crate::model::fieldname;
use crate::model::project::{project_ops, StatRow, ZoneSelection};
use crate::model::zone::ZoneIndex;
use crate::model::zonepack_error::ZonePackError;

/// writes the header row and every projected row to the given writer
pub fn write_table<W, I>(rows: I, out: W) -> Result<(), ZonePackError>
where
    W: Write,
    I: Iterator<Item = StatRow>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(out);
    writer
        .write_record(fieldname::EXPORT_COLUMNS)
        .map_err(ZonePackError::CsvWriteError)?;
    for row in rows {
        let mut cells = Vec::with_capacity(fieldname::EXPORT_COLUMNS.len());
        for column in fieldname::EXPORT_COLUMNS {
            cells.push(row.field(column)?.render());
        }
        writer
            .write_record(&cells)
            .map_err(ZonePackError::CsvWriteError)?;
    }
    writer
        .flush()
        .map_err(|e| ZonePackError::FileIoError(String::from("statistics table"), e))?;
    Ok(())
}

/// renders the table for a zone selection to finished bytes, ready to be
/// stored as a package entry
pub fn table_bytes(index: &ZoneIndex, selection: &ZoneSelection) -> Result<Vec<u8>, ZonePackError> {
    let rows = project_ops::project(index, selection)?;
    let mut buffer: Vec<u8> = vec![];
    write_table(rows, &mut buffer)?;
    Ok(buffer)
}
