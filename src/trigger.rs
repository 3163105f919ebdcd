use crate::location_updater::{LocationUpdater, TriggerOutcome};
use futures::StreamExt;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

const QUIT_COMMANDS: [&str; 2] = ["q", "quit"];

/// Treats every line of `input` as a press of the "get location" button until input ends or a quit command arrives.
///
/// Each press runs as its own task. Presses arriving while an earlier attempt is still in flight start an
/// independent attempt; nothing is de-duplicated or cancelled. Returns once all attempts have finished.
#[instrument(skip_all)]
pub async fn listen<R>(input: R, updater: Arc<LocationUpdater>) -> io::Result<Vec<TriggerOutcome>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(input.lines());
    let mut attempts = JoinSet::new();
    let mut outcomes = Vec::new();

    while let Some(line) = lines.next().await {
        let line = line?;
        if QUIT_COMMANDS.contains(&line.trim()) {
            info!("👋 Stopped listening for location requests");
            break;
        }

        debug!("🔸 Location requested");
        let updater = updater.clone();
        attempts.spawn(async move { updater.on_trigger().await });

        while let Some(result) = attempts.try_join_next() {
            collect(result, &mut outcomes);
        }
    }

    while let Some(result) = attempts.join_next().await {
        collect(result, &mut outcomes);
    }

    Ok(outcomes)
}

fn collect(result: Result<TriggerOutcome, JoinError>, outcomes: &mut Vec<TriggerOutcome>) {
    match result {
        Ok(outcome) => outcomes.push(outcome),
        Err(e) => warn!("⚠️ Location attempt did not complete: {}", e),
    }
}
