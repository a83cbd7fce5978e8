//! Session lookups.
//!
//! Tokens are opaque strings compared by equality against the user
//! collection. There is no hashing and no expiry; a user holds at most one
//! live token, replaced on each sign-in.

use crate::error::{AdboardError, Result};
use crate::model::{AccountProfile, Ad, User};
use crate::store::DataStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub user: AccountProfile,
    pub ads: Vec<Ad>,
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?
        .strip_prefix("Bearer ")?
        .split(' ')
        .next()
        .filter(|t| !t.is_empty())
}

pub fn find_by_token<'a>(users: &'a [User], token: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.token.as_deref() == Some(token))
}

/// Resolves the caller behind an authorization header, or fails with `Unauthorized`.
pub fn authenticate<S: DataStore>(store: &S, authorization: Option<&str>) -> Result<User> {
    let token =
        bearer_token(authorization).ok_or_else(|| AdboardError::unauthorized("Not allowed"))?;
    let users = store.users()?;
    find_by_token(&users, token)
        .cloned()
        .ok_or_else(|| AdboardError::unauthorized("Not allowed"))
}

/// The caller's own profile and every ad they own, in store order.
pub fn run<S: DataStore>(store: &S, authorization: Option<&str>) -> Result<Account> {
    let user = authenticate(store, authorization)?;
    let ads = store
        .ads()?
        .into_iter()
        .filter(|ad| ad.user_id == user.id)
        .collect();

    Ok(Account {
        user: AccountProfile::from(&user),
        ads,
    })
}
