use std::path::{Path, PathBuf};
use std::process::Command;

use crate::model::fieldname;
use crate::model::zonepack_error::ZonePackError;

/// extensions of the companion files jointly making up one shapefile dataset
pub const SHAPEFILE_EXTENSIONS: [&str; 4] = ["shp", "shx", "dbf", "prj"];

/// the on-disk companion file set produced by a boundary conversion
#[derive(Debug, Clone)]
pub struct BoundaryFileSet {
    pub files: Vec<PathBuf>,
}

impl BoundaryFileSet {
    /// companion paths for a shapefile target, one per extension
    pub fn for_target(target: &Path) -> BoundaryFileSet {
        let files = SHAPEFILE_EXTENSIONS
            .iter()
            .map(|ext| target.with_extension(ext))
            .collect();
        BoundaryFileSet { files }
    }

    /// deletes leftover companion files from an earlier run so a failed
    /// conversion cannot leave a stale mixed set behind
    pub fn remove_stale(&self) -> Result<(), ZonePackError> {
        for file in &self.files {
            if file.exists() {
                std::fs::remove_file(file).map_err(|e| {
                    ZonePackError::FileIoError(file.to_string_lossy().to_string(), e)
                })?;
            }
        }
        Ok(())
    }

    /// confirms every companion file exists after a conversion
    pub fn verify(&self) -> Result<(), ZonePackError> {
        for file in &self.files {
            if !file.exists() {
                return Err(ZonePackError::BoundaryToolError(format!(
                    "conversion did not produce {}",
                    file.to_string_lossy()
                )));
            }
        }
        Ok(())
    }
}

/// converts the boundary geodata document into the shapefile companion set
/// bundled with the combined package. implementations run synchronously and
/// any failure is fatal to the packaging run.
pub trait BoundaryConverter {
    fn convert(
        &self,
        boundary_document: &Path,
        shapefile_target: &Path,
    ) -> Result<BoundaryFileSet, ZonePackError>;
}

/// shells out to the GDAL ogr2ogr utility, reprojecting the boundaries
/// from the web mapping projection into the jurisdiction's published
/// equal-area projection
pub struct Ogr2OgrTool {
    pub source_projection: String,
    pub target_projection: String,
    pub layer: String,
}

impl Ogr2OgrTool {
    pub fn new(source_projection: &str, target_projection: &str, layer: &str) -> Ogr2OgrTool {
        Ogr2OgrTool {
            source_projection: String::from(source_projection),
            target_projection: String::from(target_projection),
            layer: String::from(layer),
        }
    }

    /// ORDER BY keeps shapefile row order stable across runs
    fn selection_sql(&self) -> String {
        format!(
            "SELECT {}, {} FROM {} ORDER BY {}",
            fieldname::ZONE,
            fieldname::ZONE_NAME,
            self.layer,
            fieldname::ZONE
        )
    }
}

impl BoundaryConverter for Ogr2OgrTool {
    fn convert(
        &self,
        boundary_document: &Path,
        shapefile_target: &Path,
    ) -> Result<BoundaryFileSet, ZonePackError> {
        let file_set = BoundaryFileSet::for_target(shapefile_target);
        file_set.remove_stale()?;

        let status = Command::new("ogr2ogr")
            .arg("-s_srs")
            .arg(&self.source_projection)
            .arg("-t_srs")
            .arg(&self.target_projection)
            .arg("-sql")
            .arg(self.selection_sql())
            .arg(shapefile_target)
            .arg(boundary_document)
            .status()
            .map_err(|e| ZonePackError::BoundaryToolError(format!("unable to run ogr2ogr: {e}")))?;
        if !status.success() {
            return Err(ZonePackError::BoundaryToolError(format!(
                "ogr2ogr exited with {status}"
            )));
        }

        file_set.verify()?;
        Ok(file_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_set_for_target() {
        let file_set = BoundaryFileSet::for_target(Path::new("scratch/zones.shp"));
        let files: Vec<String> = file_set
            .files
            .iter()
            .map(|f| f.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            files,
            vec![
                "scratch/zones.shp",
                "scratch/zones.shx",
                "scratch/zones.dbf",
                "scratch/zones.prj"
            ]
        );
    }

    #[test]
    fn test_selection_sql() {
        let tool = Ogr2OgrTool::new("EPSG:4326", "EPSG:3310", "zones");
        assert_eq!(
            tool.selection_sql(),
            "SELECT Zone, ZoneName FROM zones ORDER BY Zone"
        );
    }

    #[test]
    fn test_verify_reports_missing_companion() {
        let dir = std::env::temp_dir().join("zonepack_boundary_verify");
        std::fs::create_dir_all(&dir).expect("test setup failed");
        let target = dir.join("zones.shp");
        let file_set = BoundaryFileSet::for_target(&target);
        for file in &file_set.files {
            let _ = std::fs::remove_file(file);
        }
        std::fs::write(&target, b"shp").expect("test setup failed");
        let result = file_set.verify();
        assert!(matches!(result, Err(ZonePackError::BoundaryToolError(_))));

        for ext in SHAPEFILE_EXTENSIONS {
            std::fs::write(target.with_extension(ext), b"x").expect("test setup failed");
        }
        file_set.verify().expect("all companions present");
    }

    #[test]
    fn test_remove_stale_clears_companions() {
        let dir = std::env::temp_dir().join("zonepack_boundary_stale");
        std::fs::create_dir_all(&dir).expect("test setup failed");
        let target = dir.join("zones.shp");
        let file_set = BoundaryFileSet::for_target(&target);
        for ext in SHAPEFILE_EXTENSIONS {
            std::fs::write(target.with_extension(ext), b"x").expect("test setup failed");
        }
        file_set.remove_stale().expect("removal failed");
        for file in &file_set.files {
            assert!(!file.exists());
        }
        // removing an already-clean set is not an error
        file_set.remove_stale().expect("removal failed");
    }
}
