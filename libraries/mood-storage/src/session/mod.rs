//! Authentication session (keys `userToken` and `userInfo`)
//!
//! The token and the user info live under separate keys, the way the
//! mobile client stored them. A session exists only when both are present.

use crate::activities;
use crate::document::{load_optional, store_json};
use mood_core::{
    error::Result, storage::keys, storage::KeyValueStore, ActivityType, MoodError, Session,
    UserInfo,
};

/// Persist a session
pub async fn save(store: &dyn KeyValueStore, session: &Session) -> Result<()> {
    if session.token.is_empty() {
        return Err(MoodError::invalid_input("session token is empty"));
    }

    store_json(store, keys::USER_TOKEN, &session.token).await?;
    store_json(store, keys::USER_INFO, &session.user).await?;

    tracing::info!(user = %session.user.username, role = session.user.role.as_str(), "Signed in");
    activities::log(
        store,
        &session.user.username,
        ActivityType::Login,
        format!("{} signed in", session.user.username),
    )
    .await?;
    Ok(())
}

/// Load the current session, if any
pub async fn load(store: &dyn KeyValueStore) -> Result<Option<Session>> {
    let token: Option<String> = load_optional(store, keys::USER_TOKEN).await?;
    let user: Option<UserInfo> = load_optional(store, keys::USER_INFO).await?;

    Ok(match (token, user) {
        (Some(token), Some(user)) if !token.is_empty() => Some(Session { token, user }),
        _ => None,
    })
}

/// Remove the session. Returns the user that was signed in.
pub async fn clear(store: &dyn KeyValueStore) -> Result<Option<UserInfo>> {
    let previous = load(store).await?;

    store.remove(keys::USER_TOKEN).await?;
    store.remove(keys::USER_INFO).await?;

    if let Some(session) = &previous {
        tracing::info!(user = %session.user.username, "Signed out");
        activities::log(
            store,
            &session.user.username,
            ActivityType::Logout,
            format!("{} signed out", session.user.username),
        )
        .await?;
    }

    Ok(previous.map(|s| s.user))
}

/// Whether a session is stored
pub async fn is_authenticated(store: &dyn KeyValueStore) -> Result<bool> {
    Ok(load(store).await?.is_some())
}

/// Whether the stored session belongs to an admin
pub async fn is_admin(store: &dyn KeyValueStore) -> Result<bool> {
    Ok(load(store).await?.is_some_and(|s| s.is_admin()))
}

/// Fail with `PermissionDenied` unless an admin is signed in
pub async fn require_admin(store: &dyn KeyValueStore) -> Result<Session> {
    match load(store).await? {
        Some(session) if session.is_admin() => Ok(session),
        Some(session) => Err(MoodError::permission_denied(format!(
            "{} is not an admin",
            session.user.username
        ))),
        None => Err(MoodError::permission_denied("not signed in")),
    }
}
