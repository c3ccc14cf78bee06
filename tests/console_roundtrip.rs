//! End-to-end: edit a floor, export it, write it to disk, and project it
//! for the read-only viewer.

use parkgrid::{ElementKind, GridConfig, LayoutDocument, Point, SpotStatus};
use parkgrid_editor::{EditorSession, PointerOutcome, Tool};
use parkgrid_viewer::LayoutView;

#[test]
fn test_edit_save_view_round_trip() {
    let config = GridConfig::default();
    let mut session = EditorSession::new(config);
    session.set_edit_mode(true);

    session.set_tool(Tool::Place(ElementKind::ParkingSpot));
    let PointerOutcome::Placed(spot) = session.pointer_down(Point::new(0, 0)) else {
        panic!("expected placement");
    };
    session.pointer_down(Point::new(40, 0));
    session.set_tool(Tool::Place(ElementKind::Elevator));
    session.pointer_down(Point::new(400, 0));

    session.canvas.select(Some(spot));
    session.set_selected_status(SpotStatus::Ocupado);

    // Export and persist to disk.
    let doc = session.canvas.to_document(5, "2");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("floor2.json");
    doc.save_to_file(&path).unwrap();

    // Read back and project for the viewer.
    let loaded = LayoutDocument::load_from_file(&path).unwrap();
    assert_eq!(loaded, doc);
    let view = LayoutView::project(&loaded.to_floor_layout(&config));

    assert_eq!(view.visuals.len(), 3);
    let stats = view.occupancy();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.occupied, 1);
    assert_eq!(stats.occupancy_rate(), 50);

    // The occupied spot is clickable and carries its data.
    let hit = view.hit_spot(Point::new(10, 10)).unwrap();
    assert_eq!(hit.number, "A1");
    assert_eq!(hit.status, SpotStatus::Ocupado);
    // The elevator is not.
    assert!(view.hit_spot(Point::new(410, 10)).is_none());
}
