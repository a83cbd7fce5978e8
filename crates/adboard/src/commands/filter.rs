//! Filter predicates over ads.
//!
//! Each dimension is toggled independently. An absent or empty value means the
//! dimension is not filtered at all (it never means "match the empty string").
//! Active dimensions are ANDed.

use crate::model::{Ad, User, UserId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdFilter {
    /// Case-insensitive substring over title OR description.
    pub text: Option<String>,
    /// Exact match against the category slug.
    pub category: Option<String>,
    /// Exact match against the owner's state.
    pub state: Option<String>,
}

impl AdFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: Option<&str>) -> Self {
        self.text = non_empty(text);
        self
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = non_empty(category);
        self
    }

    pub fn with_state(mut self, state: Option<&str>) -> Self {
        self.state = non_empty(state);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.category.is_none() && self.state.is_none()
    }

    pub fn matches(&self, ad: &Ad, owners: &OwnerIndex) -> bool {
        if let Some(text) = &self.text {
            if !matches_text(ad, &text.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if ad.category_slug() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(state) = &self.state {
            if owners.state_of(ad.user_id) != Some(state.as_str()) {
                return false;
            }
        }
        true
    }

    /// Keeps the ads that satisfy every active predicate, in their original order.
    pub fn apply(&self, ads: Vec<Ad>, users: &[User]) -> Vec<Ad> {
        if self.is_empty() {
            return ads;
        }
        let owners = OwnerIndex::new(users);
        ads.into_iter()
            .filter(|ad| self.matches(ad, &owners))
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn matches_text(ad: &Ad, needle_lower: &str) -> bool {
    ad.title.to_lowercase().contains(needle_lower)
        || ad
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(needle_lower))
}

/// Owner lookup by id. When the user collection holds duplicate ids the first
/// record wins, matching a linear scan.
pub struct OwnerIndex<'a> {
    by_id: HashMap<UserId, &'a User>,
}

impl<'a> OwnerIndex<'a> {
    pub fn new(users: &'a [User]) -> Self {
        let mut by_id = HashMap::with_capacity(users.len());
        for user in users {
            by_id.entry(user.id).or_insert(user);
        }
        Self { by_id }
    }

    pub fn get(&self, id: UserId) -> Option<&'a User> {
        self.by_id.get(&id).copied()
    }

    pub fn state_of(&self, id: UserId) -> Option<&'a str> {
        self.get(id).and_then(|u| u.state.as_deref())
    }
}
