//! Bootstrap progress tracking.
//!
//! [`ProgressMeter`] is the single progress handle associated with the
//! bootstrap phase. It is created by [`load`](crate::proxy::load) after
//! provider selection, owned exclusively by the lifecycle proxy, and
//! marked complete when the loading overlay takes over. The rendering
//! of progress is the notification UI's concern, not this crate's;
//! label changes and completion are surfaced as tracing events.

use tracing::debug;

/// Tracing target for progress events.
const PROGRESS_TARGET: &str = "kindling_earlywindow::progress";

/// Mutable progress handle for one named bootstrap stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressMeter {
    name: String,
    label: String,
    completed: bool,
}

impl ProgressMeter {
    /// Creates a meter for the named stage with an empty label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            completed: false,
        }
    }

    /// Returns the stage name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the current label.
    #[must_use]
    pub const fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns whether the stage has been marked complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Updates the label shown for this stage.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        debug!(
            target: PROGRESS_TARGET,
            stage = %self.name,
            label = %self.label,
            "progress label updated"
        );
    }

    /// Marks the stage complete. Completion is one-way.
    pub fn complete(&mut self) {
        self.completed = true;
        debug!(
            target: PROGRESS_TARGET,
            stage = %self.name,
            "progress stage complete"
        );
    }
}
