use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::model::fieldname;
use crate::model::zone::{ZoneId, ZoneIndex, ZoneRecord};
use crate::model::zonepack_error::ZonePackError;

/// the boundary geodata document enumerating every real zone. this document
/// is the system of record for zone identity: any zone id appearing in a
/// statistics source but not here is treated as an error.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum BoundarySource {
    /// topology-encoded document with zone features under a named object layer
    TopoJson { path: String, layer: String },
    /// plain feature collection document
    GeoJson { path: String },
}

impl BoundarySource {
    pub fn path(&self) -> &str {
        match self {
            BoundarySource::TopoJson { path, .. } => path,
            BoundarySource::GeoJson { path } => path,
        }
    }

    /// layer name to select when handing this document to the boundary
    /// conversion tool. feature collections use the document's file stem.
    pub fn layer_name(&self) -> String {
        match self {
            BoundarySource::TopoJson { layer, .. } => layer.clone(),
            BoundarySource::GeoJson { path } => Path::new(path)
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }

    /// reads the boundary document and registers one zone record per feature,
    /// in document order, each with its deep link into the map site. the
    /// statewide record is appended last, linking to the site root.
    pub fn read_zone_index(&self, website_url: &str) -> Result<ZoneIndex, ZonePackError> {
        let path = self.path();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ZonePackError::BoundaryReadError(String::from(path), format!("{e}")))?;
        let document: Value = serde_json::from_str(&text)
            .map_err(|e| ZonePackError::BoundaryReadError(String::from(path), format!("{e}")))?;

        let features = match self {
            BoundarySource::TopoJson { layer, .. } => document
                .get("objects")
                .and_then(|o| o.get(layer))
                .and_then(|l| l.get("geometries"))
                .and_then(|g| g.as_array())
                .ok_or_else(|| {
                    ZonePackError::BoundaryReadError(
                        String::from(path),
                        format!("missing objects.{layer}.geometries array"),
                    )
                })?,
            BoundarySource::GeoJson { .. } => document
                .get("features")
                .and_then(|f| f.as_array())
                .ok_or_else(|| {
                    ZonePackError::BoundaryReadError(
                        String::from(path),
                        String::from("missing features array"),
                    )
                })?,
        };

        let mut index = ZoneIndex::new();
        for feature in features {
            let zone_id = feature
                .get("properties")
                .and_then(|p| p.get(fieldname::ZONE))
                .and_then(|z| z.as_str())
                .ok_or_else(|| {
                    ZonePackError::BoundaryReadError(
                        String::from(path),
                        format!("feature missing string '{}' property", fieldname::ZONE),
                    )
                })?;
            if zone_id.is_empty() {
                return Err(ZonePackError::BoundaryReadError(
                    String::from(path),
                    format!("feature has empty '{}' property", fieldname::ZONE),
                ));
            }
            let url = zone_url(website_url, zone_id);
            index.insert(ZoneRecord::new(ZoneId::from(zone_id), url));
        }

        // the statewide zone has no boundary feature of its own and deep
        // links to the site root rather than an address search
        index.insert(ZoneRecord::new(
            ZoneId::statewide(),
            String::from(website_url),
        ));
        Ok(index)
    }
}

/// deep link into the map site querying for one zone
fn zone_url(website_url: &str, zone_id: &str) -> String {
    format!("{website_url}?address={zone_id}")
}
