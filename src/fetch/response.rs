//! Wire types for the top-tier agencies endpoint.

use crate::model::{AgencyRecord, AgencyTable};
use serde::Deserialize;

/// Body of `GET /api/v2/references/toptier_agencies/`.
///
/// Only `results` is read; paging and fiscal-year metadata are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToptierAgenciesResponse {
    #[serde(default)]
    pub results: Vec<AgencyRecord>,
}

impl From<ToptierAgenciesResponse> for AgencyTable {
    fn from(response: ToptierAgenciesResponse) -> Self {
        Self::from(response.results)
    }
}
