//! top-level packaging pipeline: register zones from the boundary geodata,
//! merge the published statistics sources, convert boundaries, and build
//! the downloadable archives.

use std::path::Path;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::config::ZonepackConfiguration;
use crate::model::package::{package_ops, BoundaryConverter, Ogr2OgrTool};
use crate::model::source::merge_ops;
use crate::model::zone::ZoneIndex;
use crate::model::ZonePackError;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ZonepackOperation {
    /// build every downloadable package from the published statistics sources
    Run {
        /// .toml or .json file overriding the default configuration
        #[arg(long)]
        configuration_file: Option<String>,
    },
}

impl ZonepackOperation {
    pub fn run(&self) -> Result<(), ZonePackError> {
        match self {
            ZonepackOperation::Run { configuration_file } => {
                let configuration = match configuration_file {
                    Some(f) => {
                        log::info!("loading configuration from {f}");
                        ZonepackConfiguration::try_from(f)?
                    }
                    None => ZonepackConfiguration::default(),
                };
                run_packaging(&configuration)
            }
        }
    }
}

/// the full packaging pipeline for one configuration
pub fn run_packaging(configuration: &ZonepackConfiguration) -> Result<(), ZonePackError> {
    let index = build_zone_index(configuration)?;

    std::fs::create_dir_all(&configuration.downloads_directory)
        .map_err(|e| ZonePackError::FileIoError(configuration.downloads_directory.clone(), e))?;
    let shapefile_target = Path::new(&configuration.shapefile_target);
    if let Some(parent) = shapefile_target.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ZonePackError::FileIoError(parent.to_string_lossy().to_string(), e))?;
    }

    let converter = Ogr2OgrTool::new(
        &configuration.source_projection,
        &configuration.target_projection,
        &configuration.boundary.layer_name(),
    );
    let boundary_files =
        converter.convert(Path::new(configuration.boundary.path()), shapefile_target)?;
    log::info!(
        "converted boundary geodata to {}",
        configuration.shapefile_target
    );

    package_ops::build_combined_package(
        &index,
        &boundary_files,
        Path::new(&configuration.readme_file),
        Path::new(&configuration.downloads_directory),
        &configuration.combined_table_filename,
        &configuration.combined_package_filename,
    )?;
    let packages = package_ops::build_zone_packages(
        &index,
        Path::new(&configuration.readme_file),
        Path::new(&configuration.downloads_directory),
        &configuration.zone_table_template,
        &configuration.zone_package_template,
    )?;
    log::info!(
        "created {} zone packages in {}",
        packages.len(),
        configuration.downloads_directory
    );
    Ok(())
}

/// registry pass followed by the four merge passes. the returned index is
/// complete; everything downstream reads it immutably.
fn build_zone_index(configuration: &ZonepackConfiguration) -> Result<ZoneIndex, ZonePackError> {
    let mut index = configuration
        .boundary
        .read_zone_index(&configuration.website_url)?;
    log::info!("registered {} zones from boundary geodata", index.len());

    let merged =
        merge_ops::merge_demographics(&mut index, Path::new(&configuration.demographics_file))?;
    log::info!("merged {merged} demographics rows");
    let merged = merge_ops::merge_counties(&mut index, Path::new(&configuration.counties_file))?;
    log::info!("merged {merged} county membership rows");
    let merged = merge_ops::merge_cities(&mut index, Path::new(&configuration.cities_file))?;
    log::info!("merged {merged} city membership rows");
    let merged = merge_ops::merge_incidence(&mut index, Path::new(&configuration.incidence_file))?;
    log::info!("merged {merged} incidence rows");

    Ok(index)
}
