use serde::{Deserialize, Serialize};

use crate::model::zone::ZoneId;

/// which zones a projection covers: every registered zone in index order,
/// or a single zone by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneSelection {
    All,
    One(ZoneId),
}
