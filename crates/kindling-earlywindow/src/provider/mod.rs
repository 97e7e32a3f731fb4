//! Provider contract and shared handle types for the early window.
//!
//! A [`WindowProvider`] is a pluggable implementation of the bootstrap
//! window lifecycle. Exactly one provider is active after selection;
//! the lifecycle proxy forwards every host call to it without knowing
//! which implementation it holds. [`GraphicsBootstrap`] plugins run
//! earlier still, once, before any provider is chosen.
//!
//! Values crossing the host boundary are deliberately opaque: window
//! and monitor handles travel as 64-bit integers, host-owned objects as
//! [`HostRef`] tokens, and computed placement values flow back through
//! single-shot integer sinks instead of an allocated return structure.

use crate::error::WindowError;

/// Per-frame callback returned by [`WindowProvider::initialize`].
///
/// The host invokes it every frame until the window is handed off.
pub type TickFn = Box<dyn FnMut()>;

/// Single-shot integer sink used for output parameters.
pub type IntSink<'a> = &'a mut dyn FnMut(i32);

/// Opaque platform window handle, modelled as a 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    /// Wraps a raw platform handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw platform handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque reference to an object owned by the host, modelled as a
/// 64-bit token. The subsystem only moves these around; it never
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRef(u64);

impl HostRef {
    /// Wraps a raw host token.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw host token.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Output sinks for a computed window placement.
///
/// The provider writes each computed value through the matching sink;
/// sinks it does not write are left untouched.
pub struct PlacementSinks<'a> {
    /// Receives the computed window width.
    pub width: IntSink<'a>,
    /// Receives the computed window height.
    pub height: IntSink<'a>,
    /// Receives the computed window x position.
    pub x: IntSink<'a>,
    /// Receives the computed window y position.
    pub y: IntSink<'a>,
}

/// Inputs the host passes when requesting the loading-overlay factory.
pub struct OverlayRequest {
    /// Supplies the host's main client object once it exists.
    pub game: Box<dyn Fn() -> HostRef>,
    /// Supplies the host's resource-reload instance.
    pub reload_instance: Box<dyn Fn() -> HostRef>,
    /// Receives the terminal bootstrap error, if any.
    pub error_sink: Box<dyn Fn(Option<String>)>,
    /// Whether the overlay fades out once loading completes.
    pub fade: bool,
}

/// Factory producing the host's loading-overlay object.
pub type OverlayFactory = Box<dyn Fn() -> HostRef>;

/// Function table exported for fallback use by a module that loads
/// after this subsystem initialises.
///
/// The table is resolved at most once, on the module-layer-available
/// notification, and never re-resolved. The GL query returns `None`
/// when the underlying lookup fails so callers can degrade to a
/// conservative default instead of propagating the failure.
pub struct SecondaryHooks {
    /// Hands the bootstrap window over, returning the platform handle.
    pub window_handoff: Box<dyn FnMut(u32, u32, &str, i64) -> WindowHandle>,
    /// Computes a window placement through the given sinks; returns
    /// whether a placement was actually computed.
    pub window_positioning: Box<dyn FnMut(Option<i64>, PlacementSinks<'_>) -> bool>,
    /// Builds the loading-overlay factory.
    pub loading_overlay: Box<dyn FnMut(OverlayRequest) -> OverlayFactory>,
    /// Queries the GL version string.
    pub gl_version: Box<dyn Fn() -> Option<String>>,
}

/// Handle onto a module inside a late-loaded module layer.
pub trait ModuleHandle {
    /// Resolves the fallback window hook table exported by this
    /// module, if it exports one.
    fn fallback_hooks(&self) -> Option<SecondaryHooks>;
}

/// Handle onto the host's later-loaded module graph.
///
/// Delivered by the host at most once, when its own module layer
/// becomes resolvable. The fallback provider uses it to look up the
/// game module and upgrade itself from degraded to forwarding mode.
pub trait ModuleLayer {
    /// Looks up the named module within the layer.
    fn find_module(&self, name: &str) -> Option<&dyn ModuleHandle>;
}

/// A graphics bootstrap plugin, run once before provider selection.
///
/// Bootstrap plugins prepare platform state the window providers rely
/// on (driver workarounds, display-server probing, and the like). They
/// run for every launch target, whether or not a provider is chosen.
pub trait GraphicsBootstrap {
    /// Returns the plugin's unique name.
    fn name(&self) -> &str;

    /// Runs the bootstrap step with the raw launch arguments.
    fn bootstrap(&mut self, arguments: &[String]);
}

/// A pluggable implementation of the early-window lifecycle contract.
///
/// All calls arrive on the host's bootstrap thread in program order;
/// implementations do not need to be thread safe, and
/// [`periodic_tick`](Self::periodic_tick) must never block the
/// cooperative frame loop.
pub trait WindowProvider {
    /// Returns the provider's unique name, matched against the
    /// configured provider name during selection.
    fn name(&self) -> &str;

    /// Initialises the provider and returns the per-frame tick
    /// callback. Called exactly once, immediately after selection.
    fn initialize(&mut self, arguments: &[String]) -> TickFn;

    /// Creates the bootstrap window and returns its platform handle.
    ///
    /// Must only be called after [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Provider`] when window creation fails, or
    /// [`WindowError::FallbackUnbound`] when invoked on an unbound
    /// fallback provider.
    fn setup_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: i64,
    ) -> Result<WindowHandle, WindowError>;

    /// Computes a window placement, writing results through the sinks.
    /// Returns whether a placement was actually computed.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Provider`] when the provider cannot query
    /// the platform, or [`WindowError::FallbackUnbound`] when invoked
    /// on an unbound fallback provider.
    fn position_window(
        &mut self,
        monitor: Option<i64>,
        sinks: PlacementSinks<'_>,
    ) -> Result<bool, WindowError>;

    /// Pushes the current framebuffer dimensions through the sinks.
    fn update_framebuffer_size(&mut self, width: IntSink<'_>, height: IntSink<'_>);

    /// Builds the loading-overlay factory. Called once, at the moment
    /// bootstrap is considered complete.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Provider`] when the provider cannot build
    /// the overlay, or [`WindowError::FallbackUnbound`] when invoked on
    /// an unbound fallback provider.
    fn loading_overlay(&mut self, request: OverlayRequest) -> Result<OverlayFactory, WindowError>;

    /// Notifies the provider that the host's later-loaded module layer
    /// is available. Delivered zero or one times.
    fn update_module_reads(&mut self, layer: &dyn ModuleLayer);

    /// Per-frame maintenance hook driven by the host's cooperative
    /// loop. Must not block.
    fn periodic_tick(&mut self);

    /// Returns the GL version string the window was created with.
    ///
    /// Advisory only: providers that cannot determine the version
    /// return a conservative default rather than failing.
    fn gl_version(&self) -> String;

    /// One-way terminal-failure notification. Never fails; what
    /// "crash" does is the provider's decision.
    fn crash(&self, message: &str);
}
