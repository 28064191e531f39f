//! System metrics collection modules
//!
//! Every collector builds its own fresh snapshot; nothing is shared between
//! invocations. Collectors block (sampling sleeps, `/proc` reads), so the
//! server runs them through [`blocking`].

pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;
pub mod process;
pub mod procfs;
pub mod users;

use crate::error::{MonitorError, MonitorResult};

/// Run a collector on the blocking thread pool
pub async fn blocking<T, F>(what: &'static str, collect: F) -> MonitorResult<T>
where
    F: FnOnce() -> MonitorResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(collect)
        .await
        .map_err(|e| MonitorError::unavailable(what, e))?
}

/// `part` as a percentage of `whole`, 0 when `whole` is 0
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}
