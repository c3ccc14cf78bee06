//! Layout document inspector.
//!
//! Loads a persisted layout document, validates it against the default
//! grid, and prints the floor summary the console's stats panel shows.

use anyhow::{bail, Context};
use parkgrid::{GridConfig, LayoutDocument};
use parkgrid_viewer::LayoutView;

fn main() -> anyhow::Result<()> {
    parkgrid::init_logging()?;

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: parkgrid <layout.json>");
    };

    let config = GridConfig::default();
    let document = LayoutDocument::load_from_file(&path)
        .with_context(|| format!("Failed to load layout from {path}"))?;
    document
        .validate(config.grid_size)
        .with_context(|| format!("Layout in {path} is invalid"))?;

    let layout = document.to_floor_layout(&config);
    let view = LayoutView::project(&layout);
    let stats = view.occupancy();

    println!("Piso {}", document.floor_number);
    println!(
        "Elementos: {} ({} parqueos, {} fijos)",
        document.element_count(),
        document.spots.len(),
        document.elements.len()
    );
    println!(
        "Total: {}  Disponibles: {}  Ocupados: {}  Ocupación: {}%",
        stats.total,
        stats.available,
        stats.occupied,
        stats.occupancy_rate()
    );

    Ok(())
}
