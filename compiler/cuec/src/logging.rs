//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Install the global subscriber if a log filter is configured.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    let Some(directives) = filter_directives(
        std::env::var("CUE_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    ) else {
        return;
    };
    let filter = EnvFilter::new(directives);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if tree_enabled(std::env::var("CUE_LOG_TREE").ok().as_deref()) {
        registry
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// The filter to use: `CUE_LOG` first, then `RUST_LOG`. Empty values
/// count as unset.
fn filter_directives(cue_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    cue_log
        .filter(|v| !v.trim().is_empty())
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
}

fn tree_enabled(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}
