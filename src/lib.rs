//! # Parkgrid
//!
//! Parking-management console core. The workspace is organized as:
//!
//! 1. **parkgrid-core** - shared data model, layout document contracts,
//!    grid geometry, configuration, errors
//! 2. **parkgrid-editor** - the interactive floor layout editor (canvas
//!    model, label derivation, pointer state machine)
//! 3. **parkgrid-viewer** - read-only projection of persisted layouts
//! 4. **parkgrid-api** - backend contracts and the layout service
//! 5. **parkgrid** - this binary, a layout document inspector

pub use parkgrid_api as api;
pub use parkgrid_editor as editor;
pub use parkgrid_viewer as viewer;

pub use parkgrid_core::{
    ElementKind, Establishment, Floor, FloorLayout, GridConfig, LayoutDocument, OccupancySummary,
    Orientation, Point, SpotStatus,
};

/// Initializes the tracing subscriber. Log level defaults to INFO and is
/// overridable through `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
