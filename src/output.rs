//! CLI output formatting.
//!
//! Each line the tool prints has a `format_*` function (pure, returns a
//! `String`) and the printing itself happens in `main`'s event sink. The
//! split keeps stream routing in one place: dry-run traces go to stderr,
//! created-thumbnail paths go to stdout, and nothing else is ever printed
//! for a successful batch.

use crate::batch::BatchEvent;

/// The line printed for one batch event. Both event kinds print the bare
/// destination path; which stream it belongs on is the caller's decision.
pub fn format_event(event: &BatchEvent) -> String {
    match event {
        BatchEvent::Planned { destination } | BatchEvent::Created { destination } => {
            destination.display().to_string()
        }
    }
}
