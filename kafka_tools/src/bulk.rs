use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::collections::BTreeSet;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

pub const TIMED_OUT: &str = "timed out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedOperation {
    pub name: String,
    pub reason: String,
}

/// Result of a bulk request split by outcome. Both lists are sorted by name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BulkOutcome {
    pub completed: Vec<String>,
    pub not_completed: Vec<FailedOperation>,
}

impl BulkOutcome {
    pub fn total(&self) -> usize {
        self.completed.len() + self.not_completed.len()
    }
}

/// Runs `operation` for every name concurrently and waits for all of them,
/// or until `timeout` elapses. Requests still pending at that point are
/// reported as not completed. Nothing is retried.
pub async fn run_bulk<F, Fut>(
    names: impl IntoIterator<Item = String>,
    timeout: Option<Duration>,
    operation: F,
) -> BulkOutcome
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<(), anyhow::Error>>,
{
    let mut pending_names = names.into_iter().collect::<BTreeSet<_>>();
    let mut pending = pending_names
        .iter()
        .map(|name| {
            let name = name.clone();
            let future = operation(name.clone());
            async move { (name, future.await) }
        })
        .collect::<FuturesUnordered<_>>();
    debug!("Dispatched {} requests", pending.len());

    let deadline = timeout.map(|timeout| Instant::now() + timeout);
    let mut outcome = BulkOutcome::default();

    loop {
        let next = match deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, pending.next()).await {
                Ok(next) => next,
                Err(_) => {
                    warn!("{} requests still pending at the deadline", pending.len());
                    break;
                }
            },
            None => pending.next().await,
        };
        let Some((name, result)) = next else {
            break;
        };

        pending_names.remove(&name);
        match result {
            Ok(()) => outcome.completed.push(name),
            Err(e) => {
                warn!("Request for {name} failed: {e:#}");
                outcome.not_completed.push(FailedOperation {
                    name,
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    outcome
        .not_completed
        .extend(pending_names.into_iter().map(|name| FailedOperation {
            name,
            reason: TIMED_OUT.to_owned(),
        }));
    outcome.completed.sort();
    outcome.not_completed.sort_by(|a, b| a.name.cmp(&b.name));
    outcome
}
