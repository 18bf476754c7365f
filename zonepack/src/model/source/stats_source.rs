use std::fmt::Display;

/// the four published statistics sources merged into the zone index,
/// named for error reporting when a row cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    Demographics,
    Counties,
    Cities,
    Incidence,
}

impl Display for StatsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StatsSource::Demographics => "demographics",
            StatsSource::Counties => "county membership",
            StatsSource::Cities => "city membership",
            StatsSource::Incidence => "incidence",
        };
        write!(f, "{label}")
    }
}
