//! Logging facilities for Horizon Divider.
//!
//! Horizon Divider is instrumented with the `tracing` crate and never installs
//! a subscriber itself. Applications choose how events are collected:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_divider::paint=trace")
//!     .init();
//! ```
//!
//! Event levels follow one convention across the crate:
//!
//! - `error` - a pass could not complete (a drawable failed to resolve)
//! - `warn` - the host reported inconsistent layout data that was corrected
//! - `debug` - configuration and lifecycle changes (build, attach, detach)
//! - `trace` - per-pass details and no-op passes

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate root target.
    pub const DIVIDER: &str = "horizon_divider";
    /// Divider construction and strategy resolution.
    pub const BUILDER: &str = "horizon_divider::builder";
    /// Layout probing and span sanitizing.
    pub const LAYOUT: &str = "horizon_divider::layout";
    /// Inset measurement passes.
    pub const OFFSET: &str = "horizon_divider::offset";
    /// Paint passes.
    pub const PAINT: &str = "horizon_divider::paint";
    /// Attach and detach against decoration hosts.
    pub const CONTROLLER: &str = "horizon_divider::controller";
    /// Loading of configured defaults.
    pub const CONFIG: &str = "horizon_divider::config";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn targets_share_the_crate_prefix() {
        for target in [
            targets::BUILDER,
            targets::LAYOUT,
            targets::OFFSET,
            targets::PAINT,
            targets::CONTROLLER,
            targets::CONFIG,
        ] {
            assert!(target.starts_with(targets::DIVIDER));
        }
    }
}
