mod demographics_row;
mod incidence_row;
mod membership_row;
pub mod merge_ops;
mod stats_source;

pub use demographics_row::DemographicsRow;
pub use incidence_row::IncidenceRow;
pub use membership_row::{CityRow, CountyRow};
pub use stats_source::StatsSource;
