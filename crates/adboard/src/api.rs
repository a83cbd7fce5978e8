//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all adboard operations, regardless of the client being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: raw query-string style values (`Option<String>`) become
//!   typed parameters; defaults are applied here.
//! - **Dispatches** to the appropriate command function.
//! - **Logs store failures** at the operation boundary. The error still reaches the
//!   caller, whose `public_message()` hides the internal detail.
//!
//! ## Raw Input Rules
//!
//! - Empty strings are treated exactly like absent values.
//! - Boolean flags (`other`, `priceng`) are true only for the literal `"true"`.
//! - `limit` and `page` must be integers ≥ 1.
//! - An ad id that is not an integer cannot match any ad and yields `NotFound`.
//!
//! ## Generic Over DataStore
//!
//! `AdboardApi<S: DataStore>` is generic over the storage backend:
//! - Production: `AdboardApi<FileStore>`
//! - Testing: `AdboardApi<InMemoryStore>`
//!
//! All methods take `&self`; the store serializes writers internally, so one
//! API value can be shared across threads behind an `Arc`.

use crate::commands::{self, filter::AdFilter, list::ListParams, paginate::SortOrder};
use crate::config::AdboardConfig;
use crate::error::{AdboardError, Result};
use crate::model::AdId;
use crate::store::DataStore;
use chrono::Utc;
use log::error;
use serde::Deserialize;

pub use commands::account::Account;
pub use commands::browse::Browse;
pub use commands::by_state::StateListing;
pub use commands::create::Created;
pub use commands::enrich::{AdDetail, RelatedData};
pub use commands::list::AdPage;
pub use commands::signin::Session;

/// Query for the paginated listing: `q, state, cat, sort, limit, page`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub state: Option<String>,
    pub cat: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// Query for a single ad: `id, other`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
    pub other: Option<String>,
}

/// Query for the by-state listing: `state` (required).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ByStateQuery {
    pub state: Option<String>,
}

/// Query for the unpaginated compatibility listing: `q, state, cat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub state: Option<String>,
    pub cat: Option<String>,
}

/// Form fields for creating an ad: `title, price, priceng, desc, cat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateForm {
    pub title: Option<String>,
    pub price: Option<String>,
    pub priceng: Option<String>,
    pub desc: Option<String>,
    pub cat: Option<String>,
}

/// The main API facade for adboard operations.
pub struct AdboardApi<S: DataStore> {
    store: S,
    config: AdboardConfig,
}

impl<S: DataStore> AdboardApi<S> {
    pub fn new(store: S, config: AdboardConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &AdboardConfig {
        &self.config
    }

    pub fn list_ads(&self, query: &ListQuery) -> Result<AdPage> {
        let params = self.list_params(query)?;
        commands::list::run(&self.store, &params).inspect_err(|e| log_failure("list ads", e))
    }

    pub fn get_ad(&self, query: &DetailQuery) -> Result<AdDetail> {
        let id = parse_ad_id(query.id.as_deref())?;
        let include_related = flag(query.other.as_deref());
        commands::detail::run(&self.store, id, include_related)
            .inspect_err(|e| log_failure("load ad", e))
    }

    pub fn ads_by_state(&self, query: &ByStateQuery) -> Result<StateListing> {
        commands::by_state::run(&self.store, query.state.as_deref())
            .inspect_err(|e| log_failure("filter ads by state", e))
    }

    pub fn browse_ads(&self, query: &BrowseQuery) -> Result<Browse> {
        let filter = AdFilter::new()
            .with_text(query.q.as_deref())
            .with_state(query.state.as_deref())
            .with_category(query.cat.as_deref());
        commands::browse::run(&self.store, &filter).inspect_err(|e| log_failure("browse ads", e))
    }

    /// Creates an ad owned by the caller behind `authorization`, or by the
    /// configured placeholder owner when no authorization is given.
    pub fn create_ad(
        &self,
        form: CreateForm,
        images: Vec<String>,
        authorization: Option<&str>,
    ) -> Result<Created> {
        let owner = match authorization {
            Some(header) => commands::account::authenticate(&self.store, Some(header))?.id,
            None => self.config.placeholder_owner,
        };

        let new_ad = commands::create::NewAd {
            title: form.title,
            price: form.price,
            negotiable: flag(form.priceng.as_deref()),
            description: form.desc,
            category: form.cat,
            images,
        };
        commands::create::run(&self.store, new_ad, owner, Utc::now())
            .inspect_err(|e| log_failure("create ad", e))
    }

    pub fn account(&self, authorization: Option<&str>) -> Result<Account> {
        commands::account::run(&self.store, authorization)
            .inspect_err(|e| log_failure("load account", e))
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        commands::signin::run(
            &self.store,
            email,
            password,
            &self.config.token_prefix,
            Utc::now(),
        )
        .inspect_err(|e| log_failure("sign in", e))
    }

    fn list_params(&self, query: &ListQuery) -> Result<ListParams> {
        let filter = AdFilter::new()
            .with_text(query.q.as_deref())
            .with_category(query.cat.as_deref())
            .with_state(query.state.as_deref());
        Ok(ListParams {
            filter,
            sort: SortOrder::parse(query.sort.as_deref()),
            limit: parse_positive("limit", query.limit.as_deref(), self.config.page_size())?,
            page: parse_positive("page", query.page.as_deref(), 1)?,
        })
    }
}

fn log_failure(operation: &str, err: &AdboardError) {
    if err.is_store_failure() {
        error!("failed to {}: {}", operation, err);
    }
}

fn flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

fn parse_positive(name: &str, raw: Option<&str>, default: usize) -> Result<usize> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => match value.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(AdboardError::bad_request(format!(
                "{} must be a positive integer",
                name
            ))),
        },
    }
}

fn parse_ad_id(raw: Option<&str>) -> Result<AdId> {
    let raw = raw.map(str::trim).unwrap_or_default();
    raw.parse::<AdId>()
        .map_err(|_| AdboardError::AdNotFound(raw.to_string()))
}
