mod support;

use geo::{BoundingRect, Contains, coord};
use tvmount::{
    Breakdown, DistanceStrategy, FieldOfView, MountingMode, calculate,
    config::DEGENERATE_ANGLE_DEG,
    diagram::{SideView, TV_DEPTH_CM},
};

#[test]
fn ergonomic_view_has_no_angle_arc() {
    let inputs = support::inputs(65, 92.0, DistanceStrategy::FieldOfView(FieldOfView::Thx), MountingMode::Ergonomic);
    let result = calculate(&inputs).unwrap();
    assert!(result.vertical_angle_deg.abs() < DEGENERATE_ANGLE_DEG);

    let view = SideView::new(&inputs, &result);
    assert!(view.angle_arc.is_none());
    assert_eq!(view.labels.len(), 1);
    // sight line is the eye line when the screen centre is at eye level
    assert_eq!(view.sight_line.end.y, view.eye_line.end.y);
}

#[test]
fn reclined_view_draws_arc_and_angle_label() {
    let inputs = support::inputs(65, 92.0, DistanceStrategy::DiagonalHeuristic, MountingMode::Reclined);
    let result = calculate(&inputs).unwrap();
    let view = SideView::new(&inputs, &result);

    let arc = view.angle_arc.as_ref().expect("reclined view should draw an arc");
    let first = arc.0.first().unwrap();
    let last = arc.0.last().unwrap();
    assert!(support::approx_eq(first.y, view.eye.y, 1e-9), "arc starts on the eye line");
    assert!(last.y > view.eye.y, "arc ends above the eye line");
    assert!(view.labels.iter().any(|l| l.text == "12.4°"));
}

#[test]
fn scene_is_proportioned_in_centimetres() {
    let inputs = support::inputs(65, 92.0, DistanceStrategy::FieldOfView(FieldOfView::Smpte), MountingMode::Reclined)
        .with_manual_distance(Some(3.6));
    let result = calculate(&inputs).unwrap();
    let view = SideView::new(&inputs, &result);

    assert!(support::approx_eq(view.eye.x, 360.0, 1e-9));
    assert_eq!(view.eye.y, 92.0);
    assert_eq!(view.sight_line.end, coord! { x: 0.0, y: result.tv_center_height_cm });
    assert_eq!(view.wall.start.x, -TV_DEPTH_CM);

    let distance = &view.dimensions[0];
    assert!(support::approx_eq(distance.length(), 360.0, 1e-9));
    assert_eq!(distance.label, "3.60 m");

    let center = &view.dimensions[1];
    assert!(support::approx_eq(center.length(), result.tv_center_height_cm, 1e-9));
    assert_eq!(center.label, "171.2 cm");
}

#[test]
fn bounds_enclose_tv_and_viewer() {
    for mode in [MountingMode::Ergonomic, MountingMode::Reclined] {
        for distance in [0.5, 10.0] {
            let inputs = support::inputs(120, 150.0, DistanceStrategy::DiagonalHeuristic, mode)
                .with_manual_distance(Some(distance));
            let result = calculate(&inputs).unwrap();
            let view = SideView::new(&inputs, &result);
            let bounds = view.bounds().to_polygon();

            let tv = view.tv.bounding_rect().unwrap();
            assert!(bounds.contains(&view.viewer.head.bounding_rect().unwrap().center()));
            assert!(bounds.contains(&tv.center()));
            assert!(view.bounds().max().y >= tv.max().y);
            assert!(view.bounds().min().y < 0.0, "distance callout sits below the floor");
        }
    }
}

#[cfg(feature = "svg-io")]
#[test]
fn svg_contains_room_elements() {
    let inputs = support::inputs(65, 92.0, DistanceStrategy::FieldOfView(FieldOfView::Smpte), MountingMode::Reclined);
    let result = calculate(&inputs).unwrap();
    let svg = SideView::new(&inputs, &result).to_svg(640);

    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"640\""));
    assert!(svg.contains("viewBox="));
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("2.69 m"));
    assert!(svg.contains("12.4°"));
}

#[test]
fn breakdown_shows_substituted_formula() {
    let inputs = support::inputs(65, 92.0, DistanceStrategy::DiagonalHeuristic, MountingMode::Reclined);
    let result = calculate(&inputs).unwrap();
    let breakdown = Breakdown::new(&inputs, &result);

    assert_eq!(breakdown.formula(), "Height = EL + (VD × 0.22)");
    assert_eq!(breakdown.substituted(), "92.0 + (275.7 * 0.22) = 152.7 cm");

    let text = breakdown.to_string();
    assert!(text.contains("- Eye Level (EL): 92.0 cm"));
    assert!(text.contains("- Viewing Distance (VD): 275.7 cm"));
    assert!(text.contains("Vertical Factor: 0.22"));

    let ergonomic = support::inputs(65, 92.0, DistanceStrategy::DiagonalHeuristic, MountingMode::Ergonomic);
    let result = calculate(&ergonomic).unwrap();
    let breakdown = Breakdown::new(&ergonomic, &result);
    assert_eq!(breakdown.formula(), "Height = EL");
    assert!(!breakdown.to_string().contains("Vertical Factor"));
    assert!(breakdown.to_string().contains("Bottom = 92.0 - (80.9 / 2) = 51.5 cm"));
}
