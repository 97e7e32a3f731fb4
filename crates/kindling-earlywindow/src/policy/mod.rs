//! Launch policy deciding which window provider becomes active.
//!
//! [`select`] is the pure decision function mapping the launch context
//! and the discovered provider list to exactly one active provider.
//! Selection never fails: every non-matching path substitutes the
//! always-available [`FallbackProvider`](crate::fallback::FallbackProvider),
//! and the [`SelectionReason`] records which rule produced it so the
//! three fallback causes stay distinguishable in logs.
//!
//! Discovery is passed in as a closure so the short-circuiting rules
//! (disallowed target, disabled feature) never consult the registry at
//! all.

use tracing::info;

use kindling_config::BootConfig;

use crate::fallback::FallbackProvider;
use crate::provider::WindowProvider;

/// Tracing target for selection events.
const POLICY_TARGET: &str = "kindling_earlywindow::policy";

/// Launch targets that want a graphical bootstrap window.
const WINDOWED_TARGETS: [&str; 2] = ["neoforgeclient", "neoforgeclientdev"];

/// Immutable launch-time inputs to provider selection.
///
/// Built once at [`load`](crate::proxy::load) time from the launch
/// target, the raw argument list, and the resolved configuration;
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchContext {
    launch_target: String,
    arguments: Vec<String>,
    early_window_control: bool,
    provider_name: String,
}

impl LaunchContext {
    /// Builds a context from the launch target, arguments, and the
    /// resolved bootstrap configuration.
    #[must_use]
    pub fn new(
        launch_target: impl Into<String>,
        arguments: Vec<String>,
        config: &BootConfig,
    ) -> Self {
        Self {
            launch_target: launch_target.into(),
            arguments,
            early_window_control: config.early_window_control(),
            provider_name: config.early_window_provider().to_owned(),
        }
    }

    /// Returns the launch target name.
    #[must_use]
    pub const fn launch_target(&self) -> &str {
        self.launch_target.as_str()
    }

    /// Returns the raw launch arguments.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Returns whether the early-window feature is enabled.
    #[must_use]
    pub const fn early_window_control(&self) -> bool {
        self.early_window_control
    }

    /// Returns the configured provider name.
    #[must_use]
    pub const fn provider_name(&self) -> &str {
        self.provider_name.as_str()
    }

    /// Returns whether the launch target is one that wants a bootstrap
    /// window.
    #[must_use]
    pub fn target_wants_window(&self) -> bool {
        WINDOWED_TARGETS.contains(&self.launch_target.as_str())
    }
}

/// Why selection produced the provider it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// The launch target is not one that wants a bootstrap window.
    DisallowedTarget,
    /// The early-window control flag is off.
    FeatureDisabled,
    /// No discovered provider matched the configured name.
    ProviderMissing,
    /// The configured provider was discovered and selected.
    ProviderFound,
}

impl SelectionReason {
    /// Returns whether this reason substituted the fallback provider.
    #[must_use]
    pub const fn used_fallback(self) -> bool {
        !matches!(self, Self::ProviderFound)
    }
}

/// Outcome of provider selection: the active provider plus the rule
/// that chose it.
pub struct Selection {
    provider: Box<dyn WindowProvider>,
    reason: SelectionReason,
}

impl Selection {
    fn fallback(reason: SelectionReason) -> Self {
        Self {
            provider: Box::new(FallbackProvider::new()),
            reason,
        }
    }

    /// Returns the selected provider's name.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Returns the rule that produced this selection.
    #[must_use]
    pub const fn reason(&self) -> SelectionReason {
        self.reason
    }

    /// Consumes the selection, yielding the provider and the reason.
    #[must_use]
    pub fn into_parts(self) -> (Box<dyn WindowProvider>, SelectionReason) {
        (self.provider, self.reason)
    }
}

/// Selects the active window provider for this launch.
///
/// Rules are evaluated in order, first match wins: targets outside the
/// allow-list and a disabled control flag both short-circuit to the
/// fallback without invoking `discover`; otherwise the discovered list
/// is searched for the configured provider name, substituting the
/// fallback when no name matches.
pub fn select<F>(context: &LaunchContext, discover: F) -> Selection
where
    F: FnOnce() -> Vec<Box<dyn WindowProvider>>,
{
    if !context.target_wants_window() {
        info!(
            target: POLICY_TARGET,
            launch_target = %context.launch_target(),
            "early window provider not loading because launch target does not want one"
        );
        return Selection::fallback(SelectionReason::DisallowedTarget);
    }
    if !context.early_window_control() {
        info!(
            target: POLICY_TARGET,
            "early window provider not loading because the early window is disabled"
        );
        return Selection::fallback(SelectionReason::FeatureDisabled);
    }

    let configured = context.provider_name();
    info!(
        target: POLICY_TARGET,
        provider = configured,
        "loading early window provider"
    );

    let mut discovered = discover();
    match discovered.iter().position(|p| p.name() == configured) {
        Some(index) => Selection {
            provider: discovered.swap_remove(index),
            reason: SelectionReason::ProviderFound,
        },
        None => {
            info!(
                target: POLICY_TARGET,
                provider = configured,
                "failed to find early window provider, disabling"
            );
            Selection::fallback(SelectionReason::ProviderMissing)
        }
    }
}
