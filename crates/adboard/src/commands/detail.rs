use super::enrich::{enrich, other_ads, AdDetail};
use super::filter::OwnerIndex;
use crate::error::{AdboardError, Result};
use crate::model::AdId;
use crate::store::DataStore;
use log::debug;

/// Fetch one ad, counting the view.
///
/// The increment is persisted before the response is composed, and the
/// response is built from the post-increment collection, so the returned
/// `views` always includes this fetch.
pub fn run<S: DataStore>(store: &S, id: AdId, include_related: bool) -> Result<AdDetail> {
    let (ad, other) = store.update_ads(|ads| {
        let ad = ads
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AdboardError::AdNotFound(id.to_string()))?;
        ad.record_view();
        let ad = ad.clone();

        let other = include_related.then(|| other_ads(ads, &ad));
        Ok((ad, other))
    })?;

    debug!("ad {} now has {} views", ad.id, ad.views);

    let users = store.users()?;
    let owner = OwnerIndex::new(&users).get(ad.user_id);
    Ok(enrich(ad, owner, other))
}
