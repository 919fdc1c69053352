//! Record and workspace identifier generation

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond-based integer id, strictly increasing within a process.
///
/// Falls back to last+1 when two ids are requested within the same
/// millisecond, so ids stay unique even in tight loops.
pub fn next_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .unwrap_or(now);
    if now > prev {
        now
    } else {
        prev + 1
    }
}

/// Workspace id of the form `ws_<millis>_<suffix>`
pub fn workspace_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ws_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}
