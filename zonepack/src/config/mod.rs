mod zonepack;

pub use zonepack::ZonepackConfiguration;
