use indexmap::IndexMap;

use super::{ZoneId, ZoneRecord};

/// the complete collection of zone records, ordered by first registration.
/// projection and export iterate this order, so table and package contents
/// are deterministic for a given boundary document.
#[derive(Debug, Clone, Default)]
pub struct ZoneIndex {
    zones: IndexMap<ZoneId, ZoneRecord>,
}

impl ZoneIndex {
    pub fn new() -> ZoneIndex {
        ZoneIndex {
            zones: IndexMap::new(),
        }
    }

    /// adds or replaces the record for its zone id. replacement keeps the
    /// zone's original position in the iteration order.
    pub fn insert(&mut self, record: ZoneRecord) {
        self.zones.insert(record.zone_id.clone(), record);
    }

    pub fn get(&self, zone_id: &ZoneId) -> Option<&ZoneRecord> {
        self.zones.get(zone_id)
    }

    pub fn get_mut(&mut self, zone_id: &ZoneId) -> Option<&mut ZoneRecord> {
        self.zones.get_mut(zone_id)
    }

    pub fn contains(&self, zone_id: &ZoneId) -> bool {
        self.zones.contains_key(zone_id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// records in registration order
    pub fn records(&self) -> impl Iterator<Item = &ZoneRecord> {
        self.zones.values()
    }

    /// zone ids in registration order
    pub fn zone_ids(&self) -> impl Iterator<Item = &ZoneId> {
        self.zones.keys()
    }
}
