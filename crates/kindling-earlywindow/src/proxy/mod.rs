//! Lifecycle proxy: the single handle the bootstrap sequence holds.
//!
//! [`load`] is the one-shot entry point of the subsystem. It runs the
//! graphics bootstrap plugins, applies the launch policy, initialises
//! the selected provider, and returns an [`EarlyWindow`] — the explicit
//! context object that replaces process-wide statics. Every subsequent
//! lifecycle call goes through the `EarlyWindow`, which forwards to the
//! active provider without the caller ever learning which
//! implementation was chosen.
//!
//! The `EarlyWindow` exclusively owns the active provider, the
//! bootstrap progress meter, and the per-frame tick callback; no other
//! component holds a reference to any of them.

use tracing::debug;

use kindling_config::BootConfig;

use crate::error::WindowError;
use crate::fallback::FALLBACK_PROVIDER_NAME;
use crate::policy::{self, LaunchContext, SelectionReason};
use crate::progress::ProgressMeter;
use crate::provider::{
    IntSink, ModuleLayer, OverlayFactory, OverlayRequest, PlacementSinks, TickFn, WindowHandle,
    WindowProvider,
};
use crate::registry::ProviderRegistry;

/// Tracing target for lifecycle events.
const PROXY_TARGET: &str = "kindling_earlywindow::proxy";

/// Name of the bootstrap progress stage.
const EARLY_STAGE: &str = "EARLY";

/// Initial label shown while the bootstrap window comes up.
const BOOTSTRAP_LABEL: &str = "Bootstrapping game";

/// Selects and initialises the early-window provider for this launch.
///
/// Must be called exactly once, synchronously, on the host's bootstrap
/// thread, before any window exists. Bootstrap plugins run first, then
/// the launch policy picks the active provider (consulting discovery
/// only when the target and control flag allow a window), the
/// configured provider name self-heals to the chosen name when a real
/// provider won, and the provider is initialised with the bootstrap
/// progress meter started.
///
/// The fallback's name is never written back, so a temporarily
/// unavailable provider is retried on the next launch instead of being
/// permanently overwritten.
pub fn load(
    mut registry: ProviderRegistry,
    config: &mut BootConfig,
    launch_target: &str,
    arguments: &[String],
) -> EarlyWindow {
    for mut bootstrap in registry.take_bootstraps() {
        debug!(
            target: PROXY_TARGET,
            plugin = bootstrap.name(),
            "invoking graphics bootstrap plugin"
        );
        bootstrap.bootstrap(arguments);
    }

    let context = LaunchContext::new(launch_target, arguments.to_vec(), config);
    let selection = policy::select(&context, || registry.take_providers());
    if selection.provider_name() != FALLBACK_PROVIDER_NAME {
        config.set_early_window_provider(selection.provider_name());
    }

    let (mut provider, reason) = selection.into_parts();
    let tick = provider.initialize(arguments);
    let mut progress = ProgressMeter::new(EARLY_STAGE);
    progress.set_label(BOOTSTRAP_LABEL);

    EarlyWindow {
        provider,
        reason,
        progress,
        tick,
    }
}

/// The uniform lifecycle handle returned by [`load`].
pub struct EarlyWindow {
    provider: Box<dyn WindowProvider>,
    reason: SelectionReason,
    progress: ProgressMeter,
    tick: TickFn,
}

impl EarlyWindow {
    /// Returns the active provider's name.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Returns the rule that selected the active provider.
    #[must_use]
    pub const fn selection_reason(&self) -> SelectionReason {
        self.reason
    }

    /// Returns the bootstrap progress meter.
    #[must_use]
    pub const fn progress(&self) -> &ProgressMeter {
        &self.progress
    }

    /// Creates the bootstrap window through the active provider.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`WindowError`]; on an unbound
    /// fallback this is [`WindowError::FallbackUnbound`].
    pub fn setup_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: i64,
    ) -> Result<WindowHandle, WindowError> {
        self.provider.setup_window(width, height, title, monitor)
    }

    /// Requests a window placement from the active provider.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`WindowError`]; on an unbound
    /// fallback this is [`WindowError::FallbackUnbound`].
    pub fn position_window(
        &mut self,
        monitor: Option<i64>,
        sinks: PlacementSinks<'_>,
    ) -> Result<bool, WindowError> {
        self.provider.position_window(monitor, sinks)
    }

    /// Pushes current framebuffer dimensions through the sinks.
    pub fn update_framebuffer_size(&mut self, width: IntSink<'_>, height: IntSink<'_>) {
        self.provider.update_framebuffer_size(width, height);
    }

    /// Builds the loading-overlay factory, marking the bootstrap
    /// progress stage complete first. Called once, at the moment
    /// bootstrap is considered complete.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`WindowError`]; on an unbound
    /// fallback this is [`WindowError::FallbackUnbound`].
    pub fn loading_overlay(
        &mut self,
        request: OverlayRequest,
    ) -> Result<OverlayFactory, WindowError> {
        self.progress.complete();
        self.provider.loading_overlay(request)
    }

    /// Forwards the host's module-layer-available notification to the
    /// active provider. On the fallback this triggers the one-shot
    /// secondary binding attempt.
    pub fn notify_module_layer(&mut self, layer: &dyn ModuleLayer) {
        self.provider.update_module_reads(layer);
    }

    /// Invokes the per-frame callback returned by the provider's
    /// initialisation.
    pub fn window_tick(&mut self) {
        (self.tick)();
    }

    /// Forwards the per-frame maintenance tick to the active provider.
    /// Never fails from the caller's perspective.
    pub fn periodic_tick(&mut self) {
        self.provider.periodic_tick();
    }

    /// Returns the GL version reported by the active provider.
    #[must_use]
    pub fn gl_version(&self) -> String {
        self.provider.gl_version()
    }

    /// Updates the bootstrap progress label.
    pub fn update_progress(&mut self, message: &str) {
        self.progress.set_label(message);
    }

    /// Reports a terminal bootstrap failure through the active
    /// provider. One-way; never fails.
    pub fn crash(&self, message: &str) {
        self.provider.crash(message);
    }
}
