use gridsync_types::{Axis, GridItem, ItemError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_item_is_unconstrained_and_interactive() {
    let item = GridItem::new("a", 1, 2, 3, 4);
    assert_eq!(item.id, "a");
    assert_eq!((item.x, item.y, item.w, item.h), (1, 2, 3, 4));
    assert_eq!(item.min_w, None);
    assert_eq!(item.max_h, None);
    assert!(!item.is_static);
    assert!(item.is_draggable);
    assert!(item.is_resizable);
}

#[test]
fn default_size_is_four_by_three_at_origin() {
    let item = GridItem::with_default_size("w");
    assert_eq!((item.x, item.y, item.w, item.h), (0, 0, 4, 3));
}

#[test]
fn fluent_helpers_set_flags_and_bounds() {
    let item = GridItem::new("a", 0, 0, 4, 3)
        .with_min_size(2, 2)
        .with_max_size(8, 6)
        .as_static()
        .not_draggable()
        .not_resizable()
        .at(5, 7);

    assert_eq!(item.min_w, Some(2));
    assert_eq!(item.min_h, Some(2));
    assert_eq!(item.max_w, Some(8));
    assert_eq!(item.max_h, Some(6));
    assert!(item.is_static);
    assert!(!item.is_draggable);
    assert!(!item.is_resizable);
    assert_eq!((item.x, item.y), (5, 7));
}

#[test]
fn display_shows_id_origin_and_size() {
    assert_eq!(GridItem::new("chart", 4, 0, 4, 3).to_string(), "chart@(4,0) 4x3");
}

// ── Geometry ─────────────────────────────────────────────────────

#[test]
fn right_and_bottom_edges() {
    let item = GridItem::new("a", 2, 3, 4, 5);
    assert_eq!(item.right(), 6);
    assert_eq!(item.bottom(), 8);
}

#[test]
fn occupies_is_half_open() {
    let item = GridItem::new("a", 0, 0, 2, 2);
    assert!(item.occupies(0, 0));
    assert!(item.occupies(1, 1));
    assert!(!item.occupies(2, 0));
    assert!(!item.occupies(0, 2));
}

#[test]
fn adjacent_items_do_not_overlap() {
    let a = GridItem::new("a", 0, 0, 4, 3);
    let b = GridItem::new("b", 4, 0, 4, 3);
    let c = GridItem::new("c", 0, 3, 12, 1);
    assert!(!a.overlaps(&b));
    assert!(!a.overlaps(&c));
    assert!(!b.overlaps(&c));
}

#[test]
fn intersecting_items_overlap() {
    let a = GridItem::new("a", 0, 0, 4, 3);
    let b = GridItem::new("b", 3, 2, 4, 3);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn valid_item_passes() {
    let item = GridItem::new("a", 0, 0, 4, 3).with_min_size(2, 2).with_max_size(8, 6);
    assert!(item.validate().is_ok());
}

#[test]
fn empty_id_rejected() {
    let item = GridItem::new("", 0, 0, 1, 1);
    assert_eq!(item.validate(), Err(ItemError::EmptyId));
}

#[test]
fn zero_size_rejected() {
    let item = GridItem::new("a", 0, 0, 0, 3);
    assert!(matches!(item.validate(), Err(ItemError::ZeroSize { w: 0, h: 3, .. })));
}

#[test]
fn width_below_minimum_rejected_not_clamped() {
    let item = GridItem::new("a", 0, 0, 1, 3).with_min_size(2, 2);
    let err = item.validate().unwrap_err();
    assert_eq!(
        err,
        ItemError::OutOfBounds {
            id: "a".into(),
            axis: Axis::Width,
            value: 1,
            min: Some(2),
            max: None,
        }
    );
    assert_eq!(item.w, 1);
}

#[test]
fn height_above_maximum_rejected() {
    let item = GridItem::new("a", 0, 0, 4, 9).with_max_size(8, 6);
    assert!(matches!(
        item.validate(),
        Err(ItemError::OutOfBounds { axis: Axis::Height, value: 9, .. })
    ));
}

#[test]
fn inverted_bounds_rejected() {
    let mut item = GridItem::new("a", 0, 0, 4, 3);
    item.min_w = Some(6);
    item.max_w = Some(5);
    assert!(matches!(
        item.validate(),
        Err(ItemError::InvertedBounds { axis: Axis::Width, min: 6, max: 5, .. })
    ));
}

#[test]
fn error_messages_name_the_item() {
    let err = GridItem::new("kpi", 0, 0, 1, 1).with_min_size(2, 1).validate().unwrap_err();
    assert!(err.to_string().contains("kpi"));
    assert!(err.to_string().contains("width"));
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn overlap_is_symmetric(
        ax in 0u32..20, ay in 0u32..20, aw in 1u32..6, ah in 1u32..6,
        bx in 0u32..20, by in 0u32..20, bw in 1u32..6, bh in 1u32..6,
    ) {
        let a = GridItem::new("a", ax, ay, aw, ah);
        let b = GridItem::new("b", bx, by, bw, bh);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlap_matches_cell_occupancy(
        ax in 0u32..10, ay in 0u32..10, aw in 1u32..4, ah in 1u32..4,
        bx in 0u32..10, by in 0u32..10, bw in 1u32..4, bh in 1u32..4,
    ) {
        let a = GridItem::new("a", ax, ay, aw, ah);
        let b = GridItem::new("b", bx, by, bw, bh);
        let shared = (bx..bx + bw).any(|cx| (by..by + bh).any(|cy| a.occupies(cx, cy)));
        prop_assert_eq!(a.overlaps(&b), shared);
    }
}
