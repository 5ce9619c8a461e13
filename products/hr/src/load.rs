use entity::EmployeeCollectionResponse;
use platform_api::{ApiError, EmployeeSource, load_employees};
use thiserror::Error;
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{Instrument, debug, info, warn};

use crate::roster::{Roster, RosterChange};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("load task ended without delivering a result")]
    Interrupted,
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Api(err) => err.code(),
            LoadError::Interrupted => "INTERRUPTED",
        }
    }
}

/// A load in flight. The outcome arrives at most once; dropping the handle
/// aborts the task so a late result cannot reach a torn-down view.
#[derive(Debug)]
pub struct PendingLoad {
    rx: oneshot::Receiver<Result<EmployeeCollectionResponse, ApiError>>,
    task: JoinHandle<()>,
}

impl PendingLoad {
    pub async fn wait(mut self) -> Result<EmployeeCollectionResponse, LoadError> {
        match (&mut self.rx).await {
            Ok(outcome) => outcome.map_err(LoadError::from),
            Err(_) => Err(LoadError::Interrupted),
        }
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn fetch + decode on the runtime. Must be called from within a tokio
/// runtime.
pub fn start_load<S>(source: S) -> PendingLoad
where
    S: EmployeeSource + 'static,
{
    let (tx, rx) = oneshot::channel();
    let task = tokio::spawn(
        async move {
            let outcome = load_employees(&source).await;
            if tx.send(outcome).is_err() {
                debug!("view went away before the load finished; dropping result");
            }
        }
        .in_current_span(),
    );
    PendingLoad { rx, task }
}

/// Install a successful outcome into the roster. Failures are logged with
/// their cause and leave the roster exactly as it was.
pub fn apply(
    outcome: Result<EmployeeCollectionResponse, LoadError>,
    roster: &mut Roster,
) -> Option<RosterChange> {
    match outcome {
        Ok(response) => {
            let change = roster.replace_with_response(response);
            info!(
                previous = change.previous,
                count = change.current,
                "roster replaced"
            );
            Some(change)
        }
        Err(err) => {
            warn!(code = err.code(), error = %err, "employee load failed; keeping current rows");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    };

    use anyhow::Result;
    use platform_api::{FetchError, StatusCode};

    use super::*;
    use crate::roster::RosterState;

    struct StaticSource(&'static str);

    impl EmployeeSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    struct FailingSource;

    impl EmployeeSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Status {
                url: "http://directory.test/employees".into(),
                status: StatusCode::NOT_FOUND,
            })
        }
    }

    struct SlowSource {
        delivered: Arc<AtomicBool>,
    }

    impl EmployeeSource for SlowSource {
        async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            self.delivered.store(true, Ordering::SeqCst);
            Ok(br#"{"message":"late","employees":[]}"#.to_vec())
        }
    }

    #[tokio::test]
    async fn successful_load_populates_roster() -> Result<()> {
        let mut roster = Roster::new();
        let pending = start_load(StaticSource(
            r#"{"message":"ok","employees":[{"name":"Asha","profile":"Engineer"}]}"#,
        ));

        let change = apply(pending.wait().await, &mut roster).expect("load succeeds");
        assert_eq!(change, RosterChange { previous: 0, current: 1 });
        assert_eq!(roster.count(), 1);
        assert_eq!(roster.row_at(0)?.as_tuple(), ("Asha", "Engineer"));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_failure_leaves_roster_empty() {
        let mut roster = Roster::new();
        let outcome = start_load(FailingSource).wait().await;

        assert_eq!(outcome.as_ref().unwrap_err().code(), "STATUS");
        assert!(apply(outcome, &mut roster).is_none());
        assert_eq!(roster.state(), RosterState::Empty);
        assert_eq!(roster.count(), 0);
    }

    #[tokio::test]
    async fn decode_failure_keeps_previous_rows() -> Result<()> {
        let mut roster = Roster::new();
        let first = start_load(StaticSource(
            r#"{"message":"ok","employees":[{"name":"Li","profile":"QA"}]}"#,
        ));
        apply(first.wait().await, &mut roster);

        let outcome = start_load(StaticSource("not valid json")).wait().await;
        assert_eq!(outcome.as_ref().unwrap_err().code(), "DECODE");
        assert!(apply(outcome, &mut roster).is_none());

        assert_eq!(roster.count(), 1);
        assert_eq!(roster.row_at(0)?.as_tuple(), ("Li", "QA"));
        assert_eq!(roster.message(), Some("ok"));
        Ok(())
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels_the_load() {
        let delivered = Arc::new(AtomicBool::new(false));
        let pending = start_load(SlowSource {
            delivered: delivered.clone(),
        });
        drop(pending);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!delivered.load(Ordering::SeqCst));
    }
}
