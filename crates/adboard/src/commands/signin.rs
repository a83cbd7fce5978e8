use crate::error::{AdboardError, Result};
use crate::model::{SessionUser, User};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// `<prefix><millis>`, bumped past any token another user already holds.
fn issue_token(users: &[User], prefix: &str, now: DateTime<Utc>) -> String {
    let mut stamp = now.timestamp_millis();
    loop {
        let token = format!("{}{}", prefix, stamp);
        if !users.iter().any(|u| u.token.as_deref() == Some(token.as_str())) {
            return token;
        }
        stamp += 1;
    }
}

/// Checks the credentials, replaces the user's token with a fresh one and
/// persists the user collection.
pub fn run<S: DataStore>(
    store: &S,
    email: &str,
    password: &str,
    token_prefix: &str,
    now: DateTime<Utc>,
) -> Result<Session> {
    if email.is_empty() || password.is_empty() {
        return Err(AdboardError::unauthorized("Invalid email or password"));
    }

    let session = store.update_users(|users| {
        let index = users
            .iter()
            .position(|u| u.email == email && u.password == password)
            .ok_or_else(|| AdboardError::unauthorized("Invalid email or password"))?;

        let token = issue_token(users, token_prefix, now);
        let user = &mut users[index];
        user.token = Some(token.clone());

        Ok(Session {
            token,
            user: SessionUser::from(&*user),
        })
    })?;

    info!("user {} signed in", session.user.id);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::account;
    use crate::error::ErrorKind;
    use crate::test_utils::seeded_store;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_sign_in_issues_and_persists_token() {
        let store = seeded_store();
        let session = run(&store, "user1@example.com", "secret", "token_", now()).unwrap();
        assert_eq!(session.token, "token_1700000000000");
        assert_eq!(session.user.id, 1);
        assert_eq!(session.user.email, "user1@example.com");

        let header = format!("Bearer {}", session.token);
        let account = account::run(&store, Some(&header)).unwrap();
        assert_eq!(account.user.id, 1);
    }

    #[test]
    fn test_new_token_replaces_old_one() {
        let store = seeded_store();
        let later = now() + chrono::Duration::seconds(5);
        run(&store, "user3@example.com", "secret", "token_", later).unwrap();

        let err = account::run(&store, Some("Bearer token_abc")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_tokens_never_collide_across_users() {
        let store = seeded_store();
        let a = run(&store, "user1@example.com", "secret", "token_", now()).unwrap();
        let b = run(&store, "user2@example.com", "secret", "token_", now()).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_wrong_password_is_unauthorized_and_writes_nothing() {
        let store = seeded_store();
        let err = run(&store, "user1@example.com", "wrong", "token_", now()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        let users = store.users().unwrap();
        assert!(users[0].token.is_none());
    }

    #[test]
    fn test_empty_credentials_are_rejected() {
        let store = seeded_store();
        assert!(run(&store, "", "", "token_", now()).is_err());
    }
}
