use clap::Subcommand;

use tempo_core::{trailing_week, FileStore, Persister, SessionRecorder};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Focus minutes per day for the trailing 7 days
    Week {
        /// Print the series as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let recorder = SessionRecorder::load(&store, Persister::disconnected());

    match action {
        StatsAction::Week { json } => {
            let today = chrono::Local::now().date_naive();
            let week = trailing_week(recorder.sessions(), today);
            if json {
                println!("{}", serde_json::to_string_pretty(&week)?);
            } else {
                for point in &week {
                    println!("{:>3}  {:>4} min", point.day, point.focus_minutes);
                }
            }
        }
    }
    Ok(())
}
