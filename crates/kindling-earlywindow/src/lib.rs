//! Early-window provider selection and lifecycle mediation for the
//! Kindling bootstrap phase.
//!
//! During application launch, before the main module graph is
//! available, the host may want a minimal graphical window to show
//! bootstrap progress. This crate decides **who** supplies that window
//! and mediates every call to it; it renders nothing itself and owns no
//! graphics API.
//!
//! # Architecture
//!
//! The host registers its [`GraphicsBootstrap`] plugins and
//! [`WindowProvider`] implementations in a [`ProviderRegistry`], then
//! calls [`load`] exactly once on the bootstrap thread. The launch
//! policy in [`policy`] picks at most one active provider from the
//! launch target, the [`BootConfig`](kindling_config::BootConfig)
//! flags, and the registered providers; every non-matching path
//! substitutes the always-available [`FallbackProvider`].
//!
//! [`load`] returns an [`EarlyWindow`], the single lifecycle handle the
//! rest of the bootstrap sequence holds. It forwards each call to the
//! active provider, so callers never branch on which implementation
//! won. The fallback starts with its window-setup operations unusable
//! and upgrades itself once the host announces its later-loaded module
//! layer, binding the hook table the game module exports.
//!
//! # Example
//!
//! ```rust,no_run
//! use kindling_config::BootConfig;
//! use kindling_earlywindow::{ProviderRegistry, load};
//!
//! let registry = ProviderRegistry::new();
//! let mut config = BootConfig::default();
//! let mut early = load(registry, &mut config, "neoforgeclient", &[]);
//! early.update_progress("Scanning mods");
//! early.periodic_tick();
//! ```

pub mod error;
pub mod fallback;
pub mod policy;
pub mod progress;
pub mod provider;
pub mod proxy;
pub mod registry;

#[cfg(test)]
mod tests;

pub use self::error::WindowError;
pub use self::fallback::{DEFAULT_GL_VERSION, FALLBACK_PROVIDER_NAME, FallbackProvider};
pub use self::policy::{LaunchContext, Selection, SelectionReason};
pub use self::progress::ProgressMeter;
pub use self::provider::{
    GraphicsBootstrap, HostRef, IntSink, ModuleHandle, ModuleLayer, OverlayFactory, OverlayRequest,
    PlacementSinks, SecondaryHooks, TickFn, WindowHandle, WindowProvider,
};
pub use self::proxy::{EarlyWindow, load};
pub use self::registry::ProviderRegistry;
