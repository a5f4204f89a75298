//! Correlation id for one HTTP request.
//!
//! The `Trace` middleware generates a [`TraceId`] per request and runs the
//! handler inside [`TraceId::scope`]. Code running in that task reads it back
//! with [`TraceId::current`]; [`crate::domain::Error`] does so on
//! construction. The value lives in a Tokio task-local, so work moved to a
//! spawned task or a blocking thread must be wrapped in `scope` again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header echoing the request's trace id.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// UUID identifying a single request in logs, errors and responses.
///
/// # Examples
/// ```
/// use contacts_backend::TraceId;
///
/// async fn handler() -> Option<String> {
///     TraceId::current().map(|id| id.to_string())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Id of the request being served by this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current id.
    ///
    /// # Examples
    /// ```
    /// use contacts_backend::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = TraceId::generate();
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw).map(Self)
    }
}
