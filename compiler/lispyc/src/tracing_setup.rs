//! Tracing subscriber setup.
//!
//! Logging is off unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=lispy_parse=trace lispy eval "+ 1 2"`.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let layer = HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_indent_lines(true);
            // Another global subscriber (e.g. installed by an embedder) wins.
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    });
}
