use gridsync_model::{LayoutModel, PlacementConfig};
use gridsync_types::{GridItem, GridSettings};
use pretty_assertions::assert_eq;

// ── First-fit scenarios ──────────────────────────────────────────

#[test]
fn empty_grid_places_at_origin() {
    let model = LayoutModel::new();
    let placed = model.find_free_position("a", 4, 3);
    assert_eq!(placed, GridItem::new("a", 0, 0, 4, 3));
}

#[test]
fn second_item_goes_beside_first_then_full_width_goes_below() {
    let mut model = LayoutModel::new();
    model.put(GridItem::new("A", 0, 0, 4, 3)).unwrap();

    let b = model.find_free_position("B", 4, 3);
    assert_eq!((b.x, b.y), (4, 0));
    model.put(b).unwrap();

    let c = model.find_free_position("C", 12, 1);
    assert_eq!((c.x, c.y), (0, 3));
}

#[test]
fn finds_gap_between_items() {
    let mut model = LayoutModel::new();
    model.put(GridItem::new("left", 0, 0, 4, 2)).unwrap();
    model.put(GridItem::new("right", 8, 0, 4, 2)).unwrap();

    let placed = model.find_free_position("mid", 4, 2);
    assert_eq!((placed.x, placed.y), (4, 0));
}

#[test]
fn lowest_row_wins_over_lowest_column() {
    let mut model = LayoutModel::new();
    model.put(GridItem::new("tall", 0, 0, 2, 5)).unwrap();
    model.put(GridItem::new("wide", 2, 0, 10, 1)).unwrap();

    let placed = model.find_free_position("n", 2, 2);
    assert_eq!((placed.x, placed.y), (2, 1));
}

#[test]
fn placement_does_not_modify_model() {
    let mut model = LayoutModel::new();
    model.put(GridItem::new("a", 0, 0, 4, 3)).unwrap();
    let _ = model.find_free_position("b", 4, 3);
    assert_eq!(model.len(), 1);
    assert_eq!(model.revision(), 1);
}

#[test]
fn static_items_still_occupy_cells() {
    let mut model = LayoutModel::new();
    model.put(GridItem::new("pinned", 0, 0, 12, 2).as_static()).unwrap();
    let placed = model.find_free_position("n", 3, 1);
    assert_eq!((placed.x, placed.y), (0, 2));
}

// ── Fallback ─────────────────────────────────────────────────────

#[test]
fn wider_than_grid_falls_back_below_everything() {
    let mut model = LayoutModel::with_settings(GridSettings::new(6, 30));
    model.put(GridItem::new("a", 0, 0, 3, 4)).unwrap();

    let placed = model.find_free_position("huge", 7, 1);
    assert_eq!((placed.x, placed.y), (0, 4));
}

#[test]
fn exhausted_scan_appends_at_bottom() {
    let mut model = LayoutModel::new();
    model.put(GridItem::new("wall", 0, 0, 12, 5)).unwrap();

    let config = PlacementConfig { max_scan_rows: 3 };
    let placed = model.find_free_position_with("n", 4, 2, &config);
    assert_eq!((placed.x, placed.y), (0, 5));
}

#[test]
fn fallback_on_empty_grid_is_origin() {
    let model = LayoutModel::with_settings(GridSettings::new(2, 30));
    let placed = model.find_free_position("n", 5, 5);
    assert_eq!((placed.x, placed.y), (0, 0));
}

#[test]
fn default_scan_bound() {
    assert_eq!(PlacementConfig::default().max_scan_rows, 1000);
}

// ── is_free ──────────────────────────────────────────────────────

#[test]
fn is_free_detects_overlap() {
    let mut model = LayoutModel::new();
    model.put(GridItem::new("a", 2, 2, 2, 2)).unwrap();
    assert!(!model.is_free(3, 3, 1, 1));
    assert!(model.is_free(4, 2, 1, 1));
    assert!(model.is_free(0, 0, 2, 2));
}
