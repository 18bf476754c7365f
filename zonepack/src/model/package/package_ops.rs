//! assembly of the downloadable archives. each archive is built from
//! in-memory entries, written beside its final location, and renamed into
//! place so site consumers never observe a partially-written package.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use kdam::{Bar, BarExt};
use rayon::prelude::*;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::BoundaryFileSet;
use crate::model::export::table_ops;
use crate::model::project::ZoneSelection;
use crate::model::zone::{ZoneId, ZoneIndex};
use crate::model::zonepack_error::ZonePackError;

/// placeholder expanded to the zone id in per-zone filename templates
pub const ZONE_PLACEHOLDER: &str = "{zone}";

/// one named entry of a package archive
struct PackageEntry {
    name: String,
    bytes: Vec<u8>,
}

/// builds the combined package: the full shapefile companion set, the
/// all-zones statistics table, and the readme
pub fn build_combined_package(
    index: &ZoneIndex,
    boundary_files: &BoundaryFileSet,
    readme_file: &Path,
    downloads_directory: &Path,
    table_filename: &str,
    package_filename: &str,
) -> Result<PathBuf, ZonePackError> {
    let mut entries = vec![];
    for file in &boundary_files.files {
        let bytes = std::fs::read(file)
            .map_err(|e| ZonePackError::FileIoError(file.to_string_lossy().to_string(), e))?;
        entries.push(PackageEntry {
            name: entry_name(file),
            bytes,
        });
    }
    entries.push(PackageEntry {
        name: String::from(table_filename),
        bytes: table_ops::table_bytes(index, &ZoneSelection::All)?,
    });
    entries.push(PackageEntry {
        name: entry_name(readme_file),
        bytes: readme_crlf(readme_file)?.into_bytes(),
    });

    let target = downloads_directory.join(package_filename);
    write_package(&target, &entries)?;
    log::info!("created combined package {}", target.to_string_lossy());
    Ok(target)
}

/// builds one package per real zone, in parallel. the statewide zone is
/// covered by the combined package and gets no package of its own.
pub fn build_zone_packages(
    index: &ZoneIndex,
    readme_file: &Path,
    downloads_directory: &Path,
    table_template: &str,
    package_template: &str,
) -> Result<Vec<PathBuf>, ZonePackError> {
    let readme_name = entry_name(readme_file);
    let readme_text = readme_crlf(readme_file)?;
    let zone_ids: Vec<ZoneId> = index
        .zone_ids()
        .filter(|z| !z.is_statewide())
        .cloned()
        .collect();

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("create zone packages")
            .total(zone_ids.len())
            .build()
            .map_err(ZonePackError::InternalError)?,
    ));
    let packages = zone_ids
        .par_iter()
        .map(|zone_id| {
            let result = build_zone_package(
                index,
                zone_id,
                &readme_name,
                &readme_text,
                downloads_directory,
                table_template,
                package_template,
            );
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            result
        })
        .collect::<Result<Vec<_>, ZonePackError>>()?;
    eprintln!();
    Ok(packages)
}

fn build_zone_package(
    index: &ZoneIndex,
    zone_id: &ZoneId,
    readme_name: &str,
    readme_text: &str,
    downloads_directory: &Path,
    table_template: &str,
    package_template: &str,
) -> Result<PathBuf, ZonePackError> {
    let table = table_ops::table_bytes(index, &ZoneSelection::One(zone_id.clone()))?;
    let entries = vec![
        PackageEntry {
            name: zone_filename(table_template, zone_id),
            bytes: table,
        },
        PackageEntry {
            name: String::from(readme_name),
            bytes: readme_text.as_bytes().to_vec(),
        },
    ];
    let target = downloads_directory.join(zone_filename(package_template, zone_id));
    write_package(&target, &entries)?;
    log::debug!("created zone package {}", target.to_string_lossy());
    Ok(target)
}

/// expands a `{zone}` filename template for one zone
pub fn zone_filename(template: &str, zone_id: &ZoneId) -> String {
    template.replace(ZONE_PLACEHOLDER, zone_id.as_str())
}

/// reads the readme and rewrites every line feed as CRLF, the convention
/// for the plain-text document shipped inside each archive
pub fn readme_crlf(readme_file: &Path) -> Result<String, ZonePackError> {
    let text = std::fs::read_to_string(readme_file)
        .map_err(|e| ZonePackError::FileIoError(readme_file.to_string_lossy().to_string(), e))?;
    Ok(text.replace('\n', "\r\n"))
}

fn entry_name(file: &Path) -> String {
    file.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string_lossy().to_string())
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".partial");
    target.with_file_name(name)
}

fn write_package(target: &Path, entries: &[PackageEntry]) -> Result<(), ZonePackError> {
    let partial = partial_path(target);
    let file = std::fs::File::create(&partial)
        .map_err(|e| ZonePackError::FileIoError(partial.to_string_lossy().to_string(), e))?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));
    for entry in entries {
        archive.start_file(entry.name.as_str(), options).map_err(|e| {
            ZonePackError::ArchiveWriteError(target.to_string_lossy().to_string(), e)
        })?;
        archive
            .write_all(&entry.bytes)
            .map_err(|e| ZonePackError::FileIoError(target.to_string_lossy().to_string(), e))?;
    }
    archive
        .finish()
        .map_err(|e| ZonePackError::ArchiveWriteError(target.to_string_lossy().to_string(), e))?;
    std::fs::rename(&partial, target)
        .map_err(|e| ZonePackError::FileIoError(target.to_string_lossy().to_string(), e))?;
    Ok(())
}
