//! Session and preference commands
use crate::cli::ThemeCommand;
use crate::error::Result;
use crate::state::AppState;
use mood_api_client::{ApiClient, ApiConfig};
use mood_core::{Role, Session, UserId, UserInfo};
use mood_storage::{session, settings};
use std::io::Write;

/// Sign in on this device without a backend
pub(super) async fn login_local(
    state: &AppState,
    username: &str,
    admin: bool,
    out: &mut impl Write,
) -> Result<()> {
    let username = username.trim();
    if username.is_empty() {
        return Err(mood_core::MoodError::invalid_input("username is required").into());
    }

    let new_session = Session {
        token: format!("local-{}", uuid::Uuid::new_v4()),
        user: UserInfo {
            id: UserId::generate(),
            username: username.to_string(),
            role: if admin { Role::Admin } else { Role::User },
        },
    };
    session::save(state.store(), &new_session).await?;
    write_signed_in(out, &new_session)
}

/// Sign in through the configured API and keep the returned session
pub(super) async fn login_remote(
    state: &AppState,
    username: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<()> {
    let client = ApiClient::new(ApiConfig::new(state.config.api.base_url.clone()))?;
    let response = client.login(username, password).await?;

    let new_session = Session {
        token: response.token,
        user: response.user,
    };
    session::save(state.store(), &new_session).await?;
    write_signed_in(out, &new_session)
}

pub(super) async fn logout(state: &AppState, out: &mut impl Write) -> Result<()> {
    match session::clear(state.store()).await? {
        Some(user) => writeln!(out, "Signed out {}", user.username)?,
        None => writeln!(out, "Not signed in")?,
    }
    Ok(())
}

pub(super) async fn whoami(state: &AppState, out: &mut impl Write) -> Result<()> {
    match session::load(state.store()).await? {
        Some(current) => writeln!(
            out,
            "{} ({})",
            current.user.username,
            current.user.role.as_str()
        )?,
        None => writeln!(out, "Not signed in")?,
    }
    Ok(())
}

pub(super) async fn theme(state: &AppState, action: ThemeCommand, out: &mut impl Write) -> Result<()> {
    let theme = match action {
        ThemeCommand::Show => settings::get_theme(state.store()).await?,
        ThemeCommand::Toggle => settings::toggle_theme(state.store()).await?,
    };
    writeln!(out, "Theme: {}", theme.as_str())?;
    Ok(())
}

fn write_signed_in(out: &mut impl Write, current: &Session) -> Result<()> {
    writeln!(
        out,
        "Signed in as {} ({})",
        current.user.username,
        current.user.role.as_str()
    )?;
    Ok(())
}
