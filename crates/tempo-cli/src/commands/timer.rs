use std::sync::Arc;

use clap::{Subcommand, ValueEnum};
use tokio::sync::mpsc;

use tempo_core::{Event, FileStore, Persister, Store, Ticker, TimerKind, Tracker};

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Focus,
    Break,
}

impl From<KindArg> for TimerKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Focus => TimerKind::Focus,
            KindArg::Break => TimerKind::Break,
        }
    }
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the countdown in the foreground, printing events as JSON lines
    Run {
        /// Timer kind to run (defaults to focus)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Stop after this many completed sessions
        #[arg(long)]
        count: Option<u64>,
    },
    /// Print the initial timer state as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { kind, count } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_loop(kind.map(Into::into), count))
        }
        TimerAction::Status => {
            let store = FileStore::open()?;
            let tracker = Tracker::load(&store, Persister::disconnected());
            print_event(&tracker.snapshot())
        }
    }
}

async fn run_loop(
    kind: Option<TimerKind>,
    count: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store: Arc<dyn Store> = Arc::new(FileStore::open()?);
    let persister = Persister::spawn(Arc::clone(&store));
    let mut tracker = Tracker::load(store.as_ref(), persister);

    if let Some(kind) = kind {
        print_event(&tracker.switch_kind(kind))?;
    }
    if let Some(event) = tracker.start() {
        print_event(&event)?;
    }

    let (tick_tx, mut tick_rx) = mpsc::channel(1);
    let mut ticker = Ticker::new();
    ticker.arm(tick_tx.clone());

    let mut completed = 0u64;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                ticker.cancel();
                if let Some(event) = tracker.pause() {
                    print_event(&event)?;
                }
                break;
            }
            Some(()) = tick_rx.recv() => {
                ticker.cancel();
                if let Some(event) = tracker.tick() {
                    print_event(&event)?;
                    if tracker.settings().notifications_enabled {
                        eprintln!("{} session complete", tracker.kind());
                    }
                    tracker.dismiss_notice();
                    completed += 1;
                    if count.is_some_and(|n| completed >= n) {
                        tracker.pause();
                        break;
                    }
                }
                if tracker.is_running() {
                    ticker.arm(tick_tx.clone());
                }
            }
        }
    }

    // Queued writes may still be in flight; make the final state durable.
    tracker.save(store.as_ref())?;
    Ok(())
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
