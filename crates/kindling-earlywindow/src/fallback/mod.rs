//! Always-available fallback provider with deferred secondary binding.
//!
//! The [`FallbackProvider`] is chosen whenever no real window provider
//! is wanted or available. It starts fully degraded: ticks, crash
//! notifications, and framebuffer updates succeed as no-ops, while the
//! window-setup operations are unusable. When the host announces its
//! later-loaded module layer, the provider makes a single attempt to
//! resolve the window hook table exported by the game module; on
//! success it upgrades itself and the window-setup operations forward
//! to the bound functions from then on.
//!
//! The binding is one-way: `Unbound -> Bound` on a successful
//! resolution, with no reverse transition. If the game module or its
//! hook table is never found, the provider stays degraded for the rest
//! of the process lifetime.

use tracing::{debug, warn};

use crate::error::WindowError;
use crate::provider::{
    IntSink, ModuleLayer, OverlayFactory, OverlayRequest, PlacementSinks, SecondaryHooks, TickFn,
    WindowHandle, WindowProvider,
};

/// Tracing target for fallback provider events.
const FALLBACK_TARGET: &str = "kindling_earlywindow::fallback";

/// Name of the always-available fallback provider.
///
/// The launch policy compares against this sentinel when deciding
/// whether to write the selected name back to configuration.
pub const FALLBACK_PROVIDER_NAME: &str = "dummyprovider";

/// Conservative GL version reported when no bound query is available.
/// Matches the version the host assumes when creating windows itself.
pub const DEFAULT_GL_VERSION: &str = "3.2";

/// Name of the late-loaded module expected to export the window hooks.
pub const GAME_MODULE: &str = "neoforge";

/// The fallback implementation of the provider contract.
pub struct FallbackProvider {
    binding: Option<SecondaryHooks>,
}

impl FallbackProvider {
    /// Creates an unbound fallback provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { binding: None }
    }

    /// Returns whether the secondary hook table has been bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

impl Default for FallbackProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowProvider for FallbackProvider {
    fn name(&self) -> &str {
        FALLBACK_PROVIDER_NAME
    }

    fn initialize(&mut self, _arguments: &[String]) -> TickFn {
        Box::new(|| {})
    }

    fn setup_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: i64,
    ) -> Result<WindowHandle, WindowError> {
        self.binding.as_mut().map_or(
            Err(WindowError::FallbackUnbound {
                operation: "setup_window",
            }),
            |hooks| Ok((hooks.window_handoff)(width, height, title, monitor)),
        )
    }

    fn position_window(
        &mut self,
        monitor: Option<i64>,
        sinks: PlacementSinks<'_>,
    ) -> Result<bool, WindowError> {
        self.binding.as_mut().map_or(
            Err(WindowError::FallbackUnbound {
                operation: "position_window",
            }),
            |hooks| Ok((hooks.window_positioning)(monitor, sinks)),
        )
    }

    fn update_framebuffer_size(&mut self, _width: IntSink<'_>, _height: IntSink<'_>) {}

    fn loading_overlay(&mut self, request: OverlayRequest) -> Result<OverlayFactory, WindowError> {
        self.binding.as_mut().map_or(
            Err(WindowError::FallbackUnbound {
                operation: "loading_overlay",
            }),
            |hooks| Ok((hooks.loading_overlay)(request)),
        )
    }

    fn update_module_reads(&mut self, layer: &dyn ModuleLayer) {
        if self.binding.is_some() {
            // Already bound; re-resolving would be harmless but is
            // unnecessary.
            return;
        }
        let Some(module) = layer.find_module(GAME_MODULE) else {
            warn!(
                target: FALLBACK_TARGET,
                module = GAME_MODULE,
                "game module not present in layer, fallback stays unbound"
            );
            return;
        };
        match module.fallback_hooks() {
            Some(hooks) => {
                debug!(
                    target: FALLBACK_TARGET,
                    module = GAME_MODULE,
                    "bound secondary window hooks"
                );
                self.binding = Some(hooks);
            }
            None => {
                warn!(
                    target: FALLBACK_TARGET,
                    module = GAME_MODULE,
                    "game module exports no window hooks, fallback stays unbound"
                );
            }
        }
    }

    fn periodic_tick(&mut self) {}

    fn gl_version(&self) -> String {
        self.binding
            .as_ref()
            .and_then(|hooks| (hooks.gl_version)())
            .unwrap_or_else(|| DEFAULT_GL_VERSION.to_owned())
    }

    fn crash(&self, _message: &str) {}
}
