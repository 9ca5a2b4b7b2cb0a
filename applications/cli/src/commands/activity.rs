use crate::cli::ActivityCommand;
use crate::error::Result;
use crate::state::AppState;
use mood_core::ActivityLogEntry;
use mood_storage::activities;
use std::io::Write;

pub(super) async fn run(
    state: &AppState,
    action: ActivityCommand,
    out: &mut impl Write,
) -> Result<()> {
    state.require_admin().await?;
    let store = state.store();

    match action {
        ActivityCommand::List { limit } => {
            let limit = limit.unwrap_or(state.config.dashboard.recent_activity_limit);
            let entries = activities::get_recent(store, limit).await?;
            if entries.is_empty() {
                writeln!(out, "No activity")?;
            }
            for entry in &entries {
                write_entry(out, entry)?;
            }
            Ok(())
        }
        ActivityCommand::Clear => {
            activities::clear(store).await?;
            writeln!(out, "Activity log cleared")?;
            Ok(())
        }
    }
}

pub(super) fn write_entry(out: &mut impl Write, entry: &ActivityLogEntry) -> Result<()> {
    writeln!(
        out,
        "{}  {:<16} {:<10} {}",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        entry.kind.as_str(),
        entry.user,
        entry.description
    )?;
    Ok(())
}
