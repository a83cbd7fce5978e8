//! # Domain Model
//!
//! The two persisted record types, [`Ad`] and [`User`], plus the redacted
//! views of a user that are safe to return to clients.
//!
//! ## Wire Format
//!
//! Records are stored and returned as camelCase JSON so that collections
//! written by earlier versions of the service load unchanged:
//!
//! ```text
//! {
//!   "id": 1712345678901,
//!   "title": "Bicycle",
//!   "price": { "value": 50.0, "priceNegotiable": false },
//!   "userId": 1,
//!   "images": ["http://host/uploads/1712345678901-bike.jpg"],
//!   "category": "sports",
//!   "description": "Barely used",
//!   "createdAt": "2024-04-05T18:41:18.901Z",
//!   "views": 3
//! }
//! ```
//!
//! ## Price
//!
//! Exactly one of {fixed value, negotiable} holds. A negotiable price always
//! carries `value: null`. Older records may hold a bare number or numeric
//! string instead of the object; those load as a fixed price. A record with
//! no usable price loads as unset and is written back without a `price` key.
//!
//! ## Category
//!
//! Older records store the category as an object with a `slug` field instead
//! of a plain string. Both shapes load, both shapes are written back exactly
//! as they were read, and filtering always compares against the slug.
//!
//! ## Location
//!
//! Ads carry no location of their own. An ad's `state` is always derived from
//! its owner at read time (see `commands::enrich`).
//!
//! ## Unknown Keys
//!
//! Every collection write rewrites every record, so keys this crate does not
//! model (a stored `state`, a `slugUrl`, ...) are captured in `extra` and
//! written back unchanged. The same holds for a `createdAt` that is not
//! RFC 3339, which is kept verbatim as [`Timestamp::Raw`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub type AdId = u64;
pub type UserId = u64;

/// Keys a record carries that this crate does not model. They are kept so a
/// rewrite of the collection never drops them.
pub type ExtraFields = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPrice")]
pub struct Price {
    pub value: Option<f64>,
    pub price_negotiable: bool,
}

impl Price {
    pub fn fixed(value: f64) -> Self {
        Self {
            value: Some(value),
            price_negotiable: false,
        }
    }

    pub fn negotiable() -> Self {
        Self {
            value: None,
            price_negotiable: true,
        }
    }

    /// Neither a value nor negotiable: the record had no usable price.
    pub fn is_unset(&self) -> bool {
        self.value.is_none() && !self.price_negotiable
    }
}

// Shapes seen in stored records: the canonical object, a bare number, or a
// numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Full {
        #[serde(default)]
        value: Option<f64>,
        #[serde(default, rename = "priceNegotiable")]
        price_negotiable: bool,
    },
    Amount(f64),
    Text(String),
}

impl From<RawPrice> for Price {
    fn from(raw: RawPrice) -> Self {
        match raw {
            RawPrice::Full {
                value,
                price_negotiable,
            } => Price {
                value: if price_negotiable { None } else { value },
                price_negotiable,
            },
            RawPrice::Amount(value) => Price::fixed(value),
            RawPrice::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Price::fixed)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Slug(String),
    Nested {
        slug: String,
        #[serde(flatten)]
        rest: Map<String, Value>,
    },
}

impl Category {
    pub fn slug(&self) -> &str {
        match self {
            Category::Slug(slug) => slug,
            Category::Nested { slug, .. } => slug,
        }
    }
}

impl From<&str> for Category {
    fn from(slug: &str) -> Self {
        Category::Slug(slug.to_string())
    }
}

/// Creation time. Values that are not RFC 3339 are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    At(DateTime<Utc>),
    Raw(Value),
}

impl Timestamp {
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::At(at) => Some(*at),
            Timestamp::Raw(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(deserialize_with = "record_id")]
    pub id: AdId,
    #[serde(default)]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "price_or_unset",
        skip_serializing_if = "Price::is_unset"
    )]
    pub price: Price,
    #[serde(deserialize_with = "record_id")]
    pub user_id: UserId,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "views_or_zero")]
    pub views: u64,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Ad {
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(Category::slug)
    }

    /// Bumps the view counter. Absent counters were loaded as zero.
    pub fn record_view(&mut self) -> u64 {
        self.views = self.views.saturating_add(1);
        self.views
    }
}

// Ids are written as numbers, but hand-edited files sometimes quote them.
fn record_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid id {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id {:?}", s))),
        other => Err(serde::de::Error::custom(format!("invalid id {}", other))),
    }
}

fn price_or_unset<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Price>::deserialize(deserializer)?.unwrap_or_default())
}

// `null`, strings and floats all show up in hand-edited collections.
fn views_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// A user record as persisted. Never returned to clients directly; see the
/// redacted views below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "record_id")]
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    // Stored in plaintext and compared by equality.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Public seller card attached to an ad detail. Excludes email, password and token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerProfile {
    pub id: UserId,
    pub name: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub state: Option<String>,
}

impl From<&User> for SellerProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            phone: user.phone.clone(),
            avatar: user.avatar.clone(),
            state: user.state.clone(),
        }
    }
}

/// The signed-in user's own profile. Includes email, never password or token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub avatar: Option<String>,
}

impl From<&User> for AccountProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            state: user.state.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Minimal identity returned alongside a fresh session token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
