use super::filter::AdFilter;
use crate::error::Result;
use crate::model::Ad;
use crate::store::DataStore;
use serde::Serialize;

/// Unpaginated listing kept for older clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Browse {
    pub ads: Vec<Ad>,
    pub total: usize,
}

/// Same predicates as `list`, without ordering or pagination.
pub fn run<S: DataStore>(store: &S, filter: &AdFilter) -> Result<Browse> {
    let ads = store.ads()?;
    let users = store.users()?;
    let ads = filter.apply(ads, &users);
    Ok(Browse {
        total: ads.len(),
        ads,
    })
}
