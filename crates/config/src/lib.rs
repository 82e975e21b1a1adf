//! Build-time embedded Psiphon configuration
//!
//! Release builds can bake the Psiphon config JSON directly into the binary
//! by enabling the `embed-config` feature and placing the payload at
//! `embedded/psiphon_config.json` before building:
//!
//! ```bash
//! cargo build --release --features embed-config
//! ```
//!
//! Without the feature the embedded payload is empty and surrounding
//! application code falls back to runtime configuration.

#[cfg(feature = "embed-config")]
static EMBEDDED_PSIPHON_CONFIG: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/embedded/psiphon_config.json"
));

#[cfg(not(feature = "embed-config"))]
static EMBEDDED_PSIPHON_CONFIG: &[u8] = &[];

/// The embedded Psiphon config, empty when none was embedded at build time
pub fn embedded_psiphon_config() -> &'static [u8] {
    EMBEDDED_PSIPHON_CONFIG
}

/// Whether a config payload was embedded at build time
pub fn has_embedded_config() -> bool {
    !EMBEDDED_PSIPHON_CONFIG.is_empty()
}
