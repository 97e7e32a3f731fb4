//! Default values for the bootstrap configuration keys.

/// Default early-window provider name requested when no configuration
/// file exists or the key is missing.
pub const DEFAULT_PROVIDER: &str = "glfw";

/// Default state of the early-window control flag.
pub const DEFAULT_EARLY_WINDOW_CONTROL: bool = true;

/// Owned provider-name default used where allocation is required
/// (e.g. serde).
pub fn default_provider_string() -> String {
    DEFAULT_PROVIDER.to_owned()
}

/// Serde default for the early-window control flag.
pub const fn default_early_window_control() -> bool {
    DEFAULT_EARLY_WINDOW_CONTROL
}
