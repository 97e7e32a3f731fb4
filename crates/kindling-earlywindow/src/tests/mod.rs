//! Crate-level integration tests and shared test doubles.

use std::cell::RefCell;
use std::rc::Rc;

use kindling_config::BootConfig;

use crate::error::WindowError;
use crate::provider::{
    GraphicsBootstrap, HostRef, IntSink, ModuleHandle, ModuleLayer, OverlayFactory, OverlayRequest,
    PlacementSinks, SecondaryHooks, TickFn, WindowHandle, WindowProvider,
};
use crate::proxy::load;
use crate::registry::ProviderRegistry;

/// Shared call log for recording doubles.
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Creates an empty shared call log.
pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Builds an overlay request with inert suppliers.
pub fn overlay_request() -> OverlayRequest {
    OverlayRequest {
        game: Box::new(|| HostRef::new(1)),
        reload_instance: Box::new(|| HostRef::new(2)),
        error_sink: Box::new(|_| {}),
        fade: false,
    }
}

/// A window provider double that records every call it receives and
/// answers with canned values.
pub struct RecordingProvider {
    name: String,
    log: CallLog,
}

impl RecordingProvider {
    /// Creates a recording provider with a private log.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_log(name, call_log())
    }

    /// Creates a recording provider writing into the given log.
    pub fn with_log(name: impl Into<String>, log: CallLog) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }

    fn record(&self, call: &str) {
        self.log.borrow_mut().push(call.to_owned());
    }
}

impl WindowProvider for RecordingProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, _arguments: &[String]) -> TickFn {
        self.record("initialize");
        let log = Rc::clone(&self.log);
        Box::new(move || log.borrow_mut().push("tick".to_owned()))
    }

    fn setup_window(
        &mut self,
        _width: u32,
        _height: u32,
        _title: &str,
        _monitor: i64,
    ) -> Result<WindowHandle, WindowError> {
        self.record("setup_window");
        Ok(WindowHandle::new(7))
    }

    fn position_window(
        &mut self,
        _monitor: Option<i64>,
        mut sinks: PlacementSinks<'_>,
    ) -> Result<bool, WindowError> {
        self.record("position_window");
        (sinks.width)(640);
        (sinks.height)(480);
        (sinks.x)(0);
        (sinks.y)(0);
        Ok(true)
    }

    fn update_framebuffer_size(&mut self, width: IntSink<'_>, height: IntSink<'_>) {
        self.record("update_framebuffer_size");
        width(640);
        height(480);
    }

    fn loading_overlay(&mut self, _request: OverlayRequest) -> Result<OverlayFactory, WindowError> {
        self.record("loading_overlay");
        Ok(Box::new(|| HostRef::new(9)))
    }

    fn update_module_reads(&mut self, _layer: &dyn ModuleLayer) {
        self.record("update_module_reads");
    }

    fn periodic_tick(&mut self) {
        self.record("periodic_tick");
    }

    fn gl_version(&self) -> String {
        self.record("gl_version");
        "4.6".to_owned()
    }

    fn crash(&self, message: &str) {
        self.record(&format!("crash:{message}"));
    }
}

/// A bootstrap plugin double that records its invocation.
pub struct RecordingBootstrap {
    name: String,
    log: CallLog,
}

impl RecordingBootstrap {
    /// Creates a recording bootstrap writing into the given log.
    pub fn with_log(name: impl Into<String>, log: CallLog) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }
}

impl GraphicsBootstrap for RecordingBootstrap {
    fn name(&self) -> &str {
        &self.name
    }

    fn bootstrap(&mut self, arguments: &[String]) {
        self.log
            .borrow_mut()
            .push(format!("bootstrap:{}:{}", self.name, arguments.len()));
    }
}

/// A module handle exporting a full hook table with canned behaviour.
pub struct HookedModule {
    /// GL version the hook table reports; `None` models a failing
    /// query.
    pub gl: Option<String>,
}

impl ModuleHandle for HookedModule {
    fn fallback_hooks(&self) -> Option<SecondaryHooks> {
        let gl = self.gl.clone();
        Some(SecondaryHooks {
            window_handoff: Box::new(|width, height, _title, _monitor| {
                WindowHandle::new((u64::from(width) << 32) | u64::from(height))
            }),
            window_positioning: Box::new(|_monitor, mut sinks| {
                (sinks.width)(800);
                (sinks.height)(600);
                (sinks.x)(10);
                (sinks.y)(20);
                true
            }),
            loading_overlay: Box::new(|_request| Box::new(|| HostRef::new(77))),
            gl_version: Box::new(move || gl.clone()),
        })
    }
}

/// A module handle exporting no hook table.
pub struct BareModule;

impl ModuleHandle for BareModule {
    fn fallback_hooks(&self) -> Option<SecondaryHooks> {
        None
    }
}

/// A module layer holding named module handles.
#[derive(Default)]
pub struct StaticLayer {
    modules: Vec<(String, Box<dyn ModuleHandle>)>,
}

impl StaticLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named module to the layer.
    #[must_use]
    pub fn with_module(mut self, name: impl Into<String>, module: Box<dyn ModuleHandle>) -> Self {
        self.modules.push((name.into(), module));
        self
    }
}

impl ModuleLayer for StaticLayer {
    fn find_module(&self, name: &str) -> Option<&dyn ModuleHandle> {
        self.modules
            .iter()
            .find(|(module_name, _)| module_name.as_str() == name)
            .map(|(_, module)| module.as_ref())
    }
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_bootstrap_with_real_provider() {
    let log = call_log();
    let mut registry = ProviderRegistry::new();
    registry
        .register_bootstrap(Box::new(RecordingBootstrap::with_log(
            "display-probe",
            Rc::clone(&log),
        )))
        .expect("register bootstrap");
    registry
        .register_provider(Box::new(RecordingProvider::with_log(
            "glfw",
            Rc::clone(&log),
        )))
        .expect("register glfw");

    let mut config = BootConfig::default();
    let arguments = vec!["--gameDir".to_owned(), "/tmp/game".to_owned()];
    let mut early = load(registry, &mut config, "neoforgeclient", &arguments);

    assert_eq!(early.provider_name(), "glfw");
    assert_eq!(config.early_window_provider(), "glfw");

    early.window_tick();
    early.periodic_tick();
    let handle = early
        .setup_window(854, 480, "Kindling", 0)
        .expect("setup window");
    assert_eq!(handle.raw(), 7);
    assert_eq!(early.gl_version(), "4.6");

    let factory = early.loading_overlay(overlay_request()).expect("overlay");
    assert_eq!(factory().raw(), 9);
    assert!(early.progress().is_complete());

    let calls = log.borrow();
    assert_eq!(
        calls.first().map(String::as_str),
        Some("bootstrap:display-probe:2"),
        "bootstrap plugins must run before selection"
    );
    assert!(calls.iter().any(|c| c == "initialize"));
}

#[test]
fn end_to_end_degraded_launch_is_total() {
    let registry = ProviderRegistry::new();
    let mut config = BootConfig::default();
    let mut early = load(registry, &mut config, "neoforgeclient", &[]);

    assert_eq!(early.provider_name(), crate::fallback::FALLBACK_PROVIDER_NAME);

    // Every call the host issues completes; degraded mode is
    // indistinguishable from a minimal working provider.
    early.window_tick();
    early.periodic_tick();
    early.update_progress("Scanning mods");
    early.crash("unused");
    let mut width = -1;
    let mut height = -1;
    let mut width_sink = |value| width = value;
    let mut height_sink = |value| height = value;
    early.update_framebuffer_size(&mut width_sink, &mut height_sink);
    assert_eq!(early.gl_version(), crate::fallback::DEFAULT_GL_VERSION);
}
