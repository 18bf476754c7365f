use serde::{Deserialize, Serialize};

use crate::model::registry::BoundarySource;
use crate::model::ZonePackError;

/// defines the inputs, naming, and destinations for one packaging run.
/// paths are resolved relative to the working directory unless absolute.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ZonepackConfiguration {
    /// public map site the download deep links point into
    pub website_url: String,
    /// boundary geodata document enumerating every real zone
    pub boundary: BoundarySource,
    pub demographics_file: String,
    pub counties_file: String,
    pub cities_file: String,
    pub incidence_file: String,
    /// plain-text document bundled into every archive
    pub readme_file: String,
    /// directory receiving every finished archive
    pub downloads_directory: String,
    /// scratch target for the converted shapefile companion set
    pub shapefile_target: String,
    pub combined_package_filename: String,
    /// statistics table entry name inside the combined package
    pub combined_table_filename: String,
    /// `{zone}` expands to the zone id
    pub zone_package_template: String,
    /// `{zone}` expands to the zone id
    pub zone_table_template: String,
    pub source_projection: String,
    pub target_projection: String,
}

impl Default for ZonepackConfiguration {
    fn default() -> Self {
        Self {
            website_url: String::from("https://www.healthzonemaps.org/"),
            boundary: BoundarySource::TopoJson {
                path: String::from("data/zones_topo.json"),
                layer: String::from("zones"),
            },
            demographics_file: String::from("data/demographics.csv"),
            counties_file: String::from("data/zone_counties.csv"),
            cities_file: String::from("data/zone_cities.csv"),
            incidence_file: String::from("data/incidence.csv"),
            readme_file: String::from("data/readme.txt"),
            downloads_directory: String::from("downloads"),
            shapefile_target: String::from("scratch/zones.shp"),
            combined_package_filename: String::from("statistics_all_zones.zip"),
            combined_table_filename: String::from("statistics_all_zones.csv"),
            zone_package_template: String::from("statistics_{zone}.zip"),
            zone_table_template: String::from("statistics_{zone}.csv"),
            source_projection: String::from("EPSG:4326"),
            target_projection: String::from("EPSG:3310"),
        }
    }
}

impl TryFrom<&String> for ZonepackConfiguration {
    type Error = ZonePackError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZonePackError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ZonePackError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZonePackError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ZonePackError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ZonePackError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let configuration = ZonepackConfiguration::default();
        let serialized = toml::to_string(&configuration).expect("serialization failed");
        let path = std::env::temp_dir().join("zonepack_configuration.toml");
        std::fs::write(&path, serialized).expect("test setup failed");

        let file = path.to_string_lossy().to_string();
        let loaded = ZonepackConfiguration::try_from(&file).expect("load failed");
        assert_eq!(loaded.website_url, configuration.website_url);
        assert_eq!(loaded.downloads_directory, configuration.downloads_directory);
        match loaded.boundary {
            BoundarySource::TopoJson { layer, .. } => assert_eq!(layer, "zones"),
            other => panic!("expected TopoJson boundary, got {other:?}"),
        }
    }

    #[test]
    fn test_json_configuration() {
        let contents = r#"{
            "website_url": "https://maps.example.org/",
            "boundary": { "GeoJson": { "path": "data/zones.geojson" } },
            "demographics_file": "data/demographics.csv",
            "counties_file": "data/zone_counties.csv",
            "cities_file": "data/zone_cities.csv",
            "incidence_file": "data/incidence.csv",
            "readme_file": "data/readme.txt",
            "downloads_directory": "downloads",
            "shapefile_target": "scratch/zones.shp",
            "combined_package_filename": "statistics_all_zones.zip",
            "combined_table_filename": "statistics_all_zones.csv",
            "zone_package_template": "statistics_{zone}.zip",
            "zone_table_template": "statistics_{zone}.csv",
            "source_projection": "EPSG:4326",
            "target_projection": "EPSG:3310"
        }"#;
        let path = std::env::temp_dir().join("zonepack_configuration.json");
        std::fs::write(&path, contents).expect("test setup failed");

        let file = path.to_string_lossy().to_string();
        let loaded = ZonepackConfiguration::try_from(&file).expect("load failed");
        assert_eq!(loaded.website_url, "https://maps.example.org/");
        assert!(matches!(loaded.boundary, BoundarySource::GeoJson { .. }));
    }

    #[test]
    fn test_unsupported_file_type() {
        let file = String::from("configuration.yaml");
        let result = ZonepackConfiguration::try_from(&file);
        assert!(matches!(result, Err(ZonePackError::ConfigurationError(_))));
    }
}
