use crate::error::{AdboardError, Result};
use crate::model::{Ad, AdId, Category, ExtraFields, Price, Timestamp, UserId};
use crate::store::DataStore;
use chrono::{DateTime, SubsecRound, Utc};
use log::info;
use serde::Serialize;

/// Validated-on-create input. Raw strings are kept as received so that
/// validation lives in one place.
#[derive(Debug, Clone, Default)]
pub struct NewAd {
    pub title: Option<String>,
    pub price: Option<String>,
    pub negotiable: bool,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Already-stored image references, in upload order.
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Created {
    pub id: AdId,
}

pub fn validate_price(raw: Option<&str>, negotiable: bool) -> Result<Price> {
    if negotiable {
        return Ok(Price::negotiable());
    }
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(AdboardError::bad_request("Title and price are required"));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(Price::fixed(value)),
        _ => Err(AdboardError::bad_request("Invalid price")),
    }
}

/// Creation timestamps double as identifiers. Two ads created in the same
/// millisecond get consecutive ids instead of colliding.
pub fn next_ad_id(ads: &[Ad], now: DateTime<Utc>) -> Result<AdId> {
    let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    match ads.iter().map(|a| a.id).max() {
        Some(last) if last >= candidate => last
            .checked_add(1)
            .ok_or_else(|| AdboardError::Store(format!("ad id space exhausted after {}", last))),
        _ => Ok(candidate),
    }
}

pub fn run<S: DataStore>(
    store: &S,
    new_ad: NewAd,
    owner: UserId,
    now: DateTime<Utc>,
) -> Result<Created> {
    let title = new_ad
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AdboardError::bad_request("Title and price are required"))?
        .to_string();
    let price = validate_price(new_ad.price.as_deref(), new_ad.negotiable)?;

    let category = new_ad
        .category
        .filter(|c| !c.is_empty())
        .map(Category::Slug);
    let description = new_ad.description.filter(|d| !d.is_empty());

    let id = store.update_ads(|ads| {
        let id = next_ad_id(ads, now)?;
        ads.push(Ad {
            id,
            title,
            price,
            user_id: owner,
            images: new_ad.images,
            category,
            description,
            // Millisecond precision, the format stored records use.
            created_at: Some(Timestamp::At(now.trunc_subsecs(3))),
            views: 0,
            extra: ExtraFields::new(),
        });
        Ok(id)
    })?;

    info!("created ad {} for user {}", id, owner);
    Ok(Created { id })
}
