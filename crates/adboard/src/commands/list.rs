use super::filter::AdFilter;
use super::paginate::{paginate, sort, SortOrder};
use crate::error::Result;
use crate::model::Ad;
use crate::store::DataStore;
use log::debug;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub filter: AdFilter,
    pub sort: SortOrder,
    pub limit: usize,
    pub page: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            filter: AdFilter::default(),
            sort: SortOrder::Desc,
            limit: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPage {
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub ads: Vec<Ad>,
}

/// Filter, order, then slice. `total` and `page_count` describe the filtered
/// set before slicing.
pub fn run<S: DataStore>(store: &S, params: &ListParams) -> Result<AdPage> {
    let ads = store.ads()?;
    let users = store.users()?;

    let filtered = params.filter.apply(ads, &users);
    let ordered = sort(filtered, params.sort);
    let page = paginate(ordered, params.page, params.limit);

    debug!(
        "list: {:?} -> {} matches, page {}/{}",
        params.filter, page.total, page.page, page.page_count
    );

    Ok(AdPage {
        total: page.total,
        page: page.page,
        page_count: page.page_count,
        ads: page.items,
    })
}
