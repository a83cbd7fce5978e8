//! Seller enrichment for the ad detail view.
//!
//! The displayed `state` always comes from the ad's current owner, so an ad
//! follows its seller when the seller moves. An owner that cannot be resolved
//! degrades to `null` fields; it is never an error.

use crate::model::{Ad, SellerProfile, User};
use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdDetail {
    #[serde(flatten)]
    pub ad: Ad,
    pub state: Option<String>,
    #[serde(flatten)]
    pub related: Option<RelatedData>,
}

/// Present only when the caller asked for related data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedData {
    #[serde(rename = "userInfo")]
    pub user_info: Option<SellerProfile>,
    pub other: Vec<Ad>,
}

/// Every other ad owned by the same user, in store order.
pub fn other_ads(ads: &[Ad], ad: &Ad) -> Vec<Ad> {
    ads.iter()
        .filter(|item| item.user_id == ad.user_id && item.id != ad.id)
        .cloned()
        .collect()
}

/// Builds the detail view. Stored keys that collide with derived ones
/// (`state`, and `userInfo` / `other` when related data is attached) are
/// dropped from this response only; the stored record keeps them.
pub fn enrich(mut ad: Ad, owner: Option<&User>, other: Option<Vec<Ad>>) -> AdDetail {
    ad.extra.remove("state");
    if other.is_some() {
        ad.extra.remove("userInfo");
        ad.extra.remove("other");
    }

    if owner.is_none() {
        warn!("ad {} references missing user {}", ad.id, ad.user_id);
    }

    let state = owner.and_then(|u| u.state.clone());
    let related = other.map(|other| RelatedData {
        user_info: owner.map(SellerProfile::from),
        other,
    });

    AdDetail { ad, state, related }
}
