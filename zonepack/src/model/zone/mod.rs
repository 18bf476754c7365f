mod demographics;
mod incidence_record;
mod zone_id;
mod zone_index;
mod zone_record;

pub use demographics::Demographics;
pub use incidence_record::{IncidenceRecord, SubpopulationStats};
pub use zone_id::{ZoneId, STATEWIDE_ZONE_ID};
pub use zone_index::ZoneIndex;
pub use zone_record::ZoneRecord;
