use super::filter::AdFilter;
use crate::error::{AdboardError, Result};
use crate::model::Ad;
use crate::store::DataStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateListing {
    pub state: String,
    pub total: usize,
    pub ads: Vec<Ad>,
}

/// All ads whose owner lives in `state`, in store order.
pub fn run<S: DataStore>(store: &S, state: Option<&str>) -> Result<StateListing> {
    let state = match state {
        Some(s) if !s.is_empty() => s,
        _ => return Err(AdboardError::bad_request("State is required")),
    };

    let ads = store.ads()?;
    let users = store.users()?;
    let ads = AdFilter::new().with_state(Some(state)).apply(ads, &users);

    Ok(StateListing {
        state: state.to_string(),
        total: ads.len(),
        ads,
    })
}
