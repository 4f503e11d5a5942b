//! Platform detection helpers.

/// Short human-readable platform tag, logged at startup and attached to
/// nothing else.
pub fn platform_string() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        "web".to_string()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::consts::OS.to_string()
    }
}
