/// Append-only record of upload outcomes per handler
///
/// Every handler owns two plain text files under the tracking root:
///
/// - `<handler>-uploaded.txt` - artifacts delivered successfully
/// - `<handler>-failed.txt` - one line per failed attempt (repeats allowed)
///
/// A path listed as uploaded is never sent again by that handler, even if it
/// also shows up in the failure file from an earlier attempt. Nothing is ever
/// removed by a run; cleanup is left to the operator.
///
/// Write failures are logged and otherwise ignored, so an unavailable tracking
/// directory degrades to re-uploading on the next run instead of aborting.
///
/// ## Usage
///
/// ```rust,ignore
/// use artifact_uploader::tracking::TrackingStore;
///
/// let store = TrackingStore::open("tracking");
/// store.record_success("logs", Path::new("build/app.log"));
/// assert!(store.is_succeeded("logs", Path::new("build/app.log")));
/// ```

pub mod error;
pub mod records;
pub mod store;

pub use error::{Result, TrackingError};
pub use store::{HandlerRecords, TrackingStore};
