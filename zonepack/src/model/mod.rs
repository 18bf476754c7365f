pub mod export;
pub mod fieldname;
pub mod package;
pub mod project;
pub mod registry;
pub mod source;
pub mod zone;
mod zonepack_error;

pub use zonepack_error::ZonePackError;
