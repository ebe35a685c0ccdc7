use clap::Subcommand;

use tempo_core::{minutes_to_secs, FileStore, Persister, SettingsStore};

/// Stored seconds to display minutes, rounded to nearest. An external
/// storage client may write durations off the minute boundary.
fn to_minutes(secs: u64) -> u64 {
    secs.saturating_add(30) / 60
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print all settings as JSON
    Show,
    /// Get a single setting
    Get { key: String },
    /// Set a setting. Duration keys take minutes and clamp to at least 1.
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let mut settings = SettingsStore::load(&store, Persister::disconnected());

    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(settings.get())?);
        }
        ConfigAction::Get { key } => {
            let value = match key.as_str() {
                "focus-minutes" => to_minutes(settings.get().focus_duration_secs).to_string(),
                "break-minutes" => to_minutes(settings.get().break_duration_secs).to_string(),
                "notifications" => settings.get().notifications_enabled.to_string(),
                other => return Err(format!("unknown config key: {other}").into()),
            };
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            match key.as_str() {
                "focus-minutes" => settings.set_focus_duration_secs(minutes_to_secs(&value)),
                "break-minutes" => settings.set_break_duration_secs(minutes_to_secs(&value)),
                "notifications" => settings.set_notifications_enabled(value.parse::<bool>()?),
                other => return Err(format!("unknown config key: {other}").into()),
            }
            // One-shot process: persist synchronously before exit.
            settings.save(&store)?;
            println!("{}", serde_json::to_string_pretty(settings.get())?);
        }
    }
    Ok(())
}
