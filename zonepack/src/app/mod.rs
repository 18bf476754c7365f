mod operation;
mod zonepack_app;

pub use operation::{run_packaging, ZonepackOperation};
pub use zonepack_app::ZonepackApp;
