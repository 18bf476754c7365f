pub mod project_ops;
mod stat_row;
mod zone_selection;

pub use stat_row::StatRow;
pub use zone_selection::ZoneSelection;
