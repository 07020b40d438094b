use snap_desk::config::Metrics;
use snap_desk::layout::{Bounds, Position, SnapZone, Viewport, bounds_for_zone, classify_snap_zone};

fn hd() -> Viewport {
    Viewport::new(1920, 1080, 48)
}

fn classify(x: i32, y: i32) -> SnapZone {
    classify_snap_zone(Position::new(x, y), hd(), &Metrics::default())
}

#[test]
fn top_edge_wins_over_side_edges_outside_corners() {
    for x in [200, 500, 1000, 1500, 1720] {
        for y in 0..10 {
            assert_eq!(classify(x, y), SnapZone::Maximize, "({x}, {y})");
        }
    }
}

#[test]
fn every_point_gets_a_zone_with_consistent_bounds() {
    let vp = hd();
    let metrics = Metrics::default();
    for x in (0..=1920).step_by(40) {
        for y in (0..=1080).step_by(40) {
            let pointer = Position::new(x, y);
            let zone = classify_snap_zone(pointer, vp, &metrics);
            assert_eq!(zone, classify_snap_zone(pointer, vp, &metrics));
            match bounds_for_zone(zone, vp) {
                Some(bounds) => {
                    assert!(!zone.is_none());
                    assert!(bounds.x >= 0 && bounds.y >= 0);
                    assert!(bounds.right() <= vp.width);
                    assert!(bounds.bottom() <= vp.usable_height());
                }
                None => assert!(zone.is_none()),
            }
        }
    }
}

#[test]
fn terminal_metrics_snap_on_the_outermost_cells() {
    let vp = Viewport::new(80, 24, 1);
    let metrics = Metrics::terminal();
    let at = |x, y| classify_snap_zone(Position::new(x, y), vp, &metrics);
    assert_eq!(at(0, 12), SnapZone::Left);
    assert_eq!(at(79, 12), SnapZone::Right);
    assert_eq!(at(40, 0), SnapZone::Maximize);
    assert_eq!(at(1, 12), SnapZone::Left);
    assert_eq!(at(2, 12), SnapZone::None);
    assert_eq!(
        bounds_for_zone(SnapZone::Right, vp),
        Some(Bounds::new(40, 0, 40, 23))
    );
}
