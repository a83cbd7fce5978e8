//! Ordering and page slicing.
//!
//! Ordering is positional: "ascending" is the collection order as stored and
//! "descending" is its full reversal. Records are never compared by
//! `createdAt`, because store order is the only order the collection promises.

use crate::model::Ad;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Absent or empty means the default (descending). Only `"desc"` selects
    /// descending explicitly; every other value keeps store order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("desc") => SortOrder::Desc,
            Some(_) => SortOrder::Asc,
        }
    }
}

pub fn sort(mut ads: Vec<Ad>, order: SortOrder) -> Vec<Ad> {
    if order == SortOrder::Desc {
        ads.reverse();
    }
    ads
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub items: Vec<T>,
}

/// Slices `[offset, offset + limit)` with `offset = (page - 1) * limit`.
///
/// `total` and `page_count` describe the whole input, so a page past the end
/// yields no items but still reports both. `page` and `limit` are 1-based and
/// must be at least 1; the API layer rejects anything else before we get here.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let limit = limit.max(1);
    let page = page.max(1);
    let total = items.len();
    let page_count = total.div_ceil(limit);
    let offset = (page - 1).saturating_mul(limit);

    let items = items.into_iter().skip(offset).take(limit).collect();

    Page {
        total,
        page,
        page_count,
        items,
    }
}
