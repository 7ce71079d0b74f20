//! Startup database-connectivity polling.
//!
//! The server refuses to accept traffic until one probe round-trip has
//! succeeded. The poll retries on a fixed delay and honours an overall
//! deadline, after which startup is aborted.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use super::pool::{DbPool, PoolError};

/// Errors raised while waiting for database connectivity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectivityError {
    /// No probe succeeded before the deadline elapsed.
    #[error("database did not become reachable within {deadline:?}: {last_failure}")]
    DeadlineExceeded {
        deadline: Duration,
        last_failure: String,
    },
}

/// Poll `probe` on `poll_delay` until it succeeds or `deadline` elapses.
///
/// The deadline is enforced around the whole loop, so a hanging probe cannot
/// extend the wait.
pub(crate) async fn poll_until_ready<P, F, E>(
    mut probe: P,
    deadline: Duration,
    poll_delay: Duration,
) -> Result<(), ConnectivityError>
where
    P: FnMut() -> F,
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    let mut last_failure = "no probe completed".to_owned();

    let attempts = async {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match probe().await {
                Ok(()) => return,
                Err(err) => {
                    warn!(attempt, error = %err, "database connectivity probe failed");
                    last_failure = err.to_string();
                }
            }
            tokio::time::sleep(poll_delay).await;
        }
    };

    let outcome = tokio::time::timeout(deadline, attempts).await;
    match outcome {
        Ok(()) => Ok(()),
        Err(_) => Err(ConnectivityError::DeadlineExceeded {
            deadline,
            last_failure,
        }),
    }
}

/// Block until the database behind `pool` answers a probe query.
pub async fn wait_until_connected(
    pool: &DbPool,
    deadline: Duration,
    poll_delay: Duration,
) -> Result<(), ConnectivityError> {
    info!(?deadline, ?poll_delay, "checking for database connectivity");
    let probe = || {
        let pool = pool.clone();
        async move {
            let result: Result<(), PoolError> = pool.ping().await;
            result
        }
    };
    poll_until_ready(probe, deadline, poll_delay).await?;
    info!("database connection successful");
    Ok(())
}
