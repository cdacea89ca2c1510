//! Side-view scene of the room: floor, wall, TV, viewer and sight lines.
//!
//! Coordinates are centimetres. `x` runs from the TV screen (x = 0) towards
//! the viewer, `y` is height above the floor. The wall sits behind the screen
//! at `x = -TV_DEPTH_CM`. Everything is plain [`geo`] geometry so it can be
//! measured, transformed or exported like any other 2D shape.

#[cfg(feature = "svg-io")]
pub mod svg;

use crate::calculator::{ViewingInputs, ViewingResult};
use crate::config::DEGENERATE_ANGLE_DEG;
use crate::float_types::{PI, Real};
use geo::{
    BoundingRect, Geometry, GeometryCollection, Line, LineString, Polygon as GeoPolygon, Rect,
    coord, line_string,
};
use nalgebra::{Point2, Vector2};

/// Panel thickness drawn between wall and screen.
pub const TV_DEPTH_CM: Real = 6.0;
/// Head radius of the viewer figure.
pub const HEAD_RADIUS_CM: Real = 10.0;
/// Seat cushion height.
pub const SEAT_HEIGHT_CM: Real = 45.0;
/// Seat depth behind the viewer's eye.
pub const SEAT_DEPTH_CM: Real = 50.0;
/// Clearance left around the scene.
pub const MARGIN_CM: Real = 30.0;

const HEAD_SEGMENTS: usize = 24;
const ARC_SEGMENTS: usize = 16;

/// A measured span with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub from: Point2<Real>,
    pub to: Point2<Real>,
    pub label: String,
}

impl Dimension {
    pub fn length(&self) -> Real {
        (self.to - self.from).norm()
    }

    pub fn midpoint(&self) -> Point2<Real> {
        nalgebra::center(&self.from, &self.to)
    }

    pub fn line(&self) -> Line<Real> {
        Line::new(to_coord(&self.from), to_coord(&self.to))
    }
}

/// Free-standing caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub anchor: Point2<Real>,
    pub text: String,
}

/// Stick figure seated on a stool, eye at [`SideView::eye`].
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub head: GeoPolygon<Real>,
    /// Neck → hip → knee → foot.
    pub body: LineString<Real>,
    pub seat: GeoPolygon<Real>,
}

/// Proportioned side view of one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SideView {
    pub floor: Line<Real>,
    pub wall: Line<Real>,
    pub tv: GeoPolygon<Real>,
    pub viewer: Viewer,
    pub eye: Point2<Real>,
    /// Horizontal line from the eye to the screen.
    pub eye_line: Line<Real>,
    /// Eye to screen centre.
    pub sight_line: Line<Real>,
    /// Arc between eye line and sight line, absent below [`DEGENERATE_ANGLE_DEG`].
    pub angle_arc: Option<LineString<Real>>,
    pub dimensions: Vec<Dimension>,
    pub labels: Vec<Label>,
}

impl SideView {
    pub fn new(inputs: &ViewingInputs, result: &ViewingResult) -> Self {
        let distance = result.distance_cm();
        let bottom = result.tv_bottom_height_cm;
        let top = result.tv_top_height_cm();
        let center = result.tv_center_height_cm;
        let eye = Point2::new(distance, inputs.eye_level_cm);
        let screen_center = Point2::new(0.0, center);

        let far_x = distance + SEAT_DEPTH_CM + MARGIN_CM;
        let wall_x = -TV_DEPTH_CM;
        let ceiling = top.max(eye.y + HEAD_RADIUS_CM) + MARGIN_CM;

        let floor = Line::new(coord! { x: wall_x, y: 0.0 }, coord! { x: far_x, y: 0.0 });
        let wall = Line::new(coord! { x: wall_x, y: 0.0 }, coord! { x: wall_x, y: ceiling });
        let tv = rectangle(wall_x, bottom, 0.0, top);

        let eye_line = Line::new(to_coord(&eye), coord! { x: 0.0, y: eye.y });
        let sight_line = Line::new(to_coord(&eye), to_coord(&screen_center));

        let angle_arc = (result.vertical_angle_deg.abs() >= DEGENERATE_ANGLE_DEG)
            .then(|| arc(&eye, distance * 0.25, result.vertical_angle_deg.to_radians()));

        let dimension_y = -MARGIN_CM / 2.0;
        let callout_x = wall_x - MARGIN_CM / 2.0;
        let dimensions = vec![
            Dimension {
                from: Point2::new(0.0, dimension_y),
                to: Point2::new(distance, dimension_y),
                label: format!("{:.2} m", result.distance_m),
            },
            Dimension {
                from: Point2::new(callout_x, 0.0),
                to: Point2::new(callout_x, center),
                label: format!("{center:.1} cm"),
            },
            Dimension {
                from: Point2::new(callout_x - MARGIN_CM, 0.0),
                to: Point2::new(callout_x - MARGIN_CM, bottom),
                label: format!("{bottom:.1} cm"),
            },
        ];

        let mut labels = vec![Label {
            anchor: Point2::new(wall_x, top + MARGIN_CM / 3.0),
            text: format!("{}\"", inputs.tv_size_inch),
        }];
        if angle_arc.is_some() {
            let toward_screen = (screen_center - eye).normalize();
            labels.push(Label {
                anchor: eye + (toward_screen + Vector2::new(-1.0, 0.0)).normalize() * distance * 0.3,
                text: format!("{:.1}°", result.vertical_angle_deg),
            });
        }

        Self {
            floor,
            wall,
            tv,
            viewer: viewer(&eye),
            eye,
            eye_line,
            sight_line,
            angle_arc,
            dimensions,
            labels,
        }
    }

    /// All drawable shapes as one collection, dimensions included.
    pub fn to_geometry(&self) -> GeometryCollection<Real> {
        let mut shapes = vec![
            Geometry::Line(self.floor),
            Geometry::Line(self.wall),
            Geometry::Polygon(self.tv.clone()),
            Geometry::Polygon(self.viewer.head.clone()),
            Geometry::LineString(self.viewer.body.clone()),
            Geometry::Polygon(self.viewer.seat.clone()),
            Geometry::Line(self.eye_line),
            Geometry::Line(self.sight_line),
        ];
        if let Some(arc) = &self.angle_arc {
            shapes.push(Geometry::LineString(arc.clone()));
        }
        shapes.extend(self.dimensions.iter().map(|d| Geometry::Line(d.line())));
        GeometryCollection(shapes)
    }

    /// Extent of every shape in the scene, labels excluded.
    pub fn bounds(&self) -> Rect<Real> {
        // the floor and wall alone are non-degenerate, so a rect always exists
        self.to_geometry()
            .bounding_rect()
            .unwrap_or_else(|| Rect::new(self.floor.start, self.wall.end))
    }
}

#[inline]
fn to_coord(p: &Point2<Real>) -> geo::Coord<Real> {
    coord! { x: p.x, y: p.y }
}

fn rectangle(x0: Real, y0: Real, x1: Real, y1: Real) -> GeoPolygon<Real> {
    GeoPolygon::new(
        line_string![
            (x: x0, y: y0),
            (x: x1, y: y0),
            (x: x1, y: y1),
            (x: x0, y: y1),
            (x: x0, y: y0),
        ],
        vec![],
    )
}

/// Arc around `center` from the screen-facing horizontal (angle π) up to the
/// sight line, which leaves the eye at `π - angle`.
fn arc(center: &Point2<Real>, radius: Real, angle: Real) -> LineString<Real> {
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let theta = PI - angle * (i as Real) / (ARC_SEGMENTS as Real);
            coord! { x: center.x + radius * theta.cos(), y: center.y + radius * theta.sin() }
        })
        .collect()
}

fn viewer(eye: &Point2<Real>) -> Viewer {
    // head sits just behind the eye, facing the screen
    let head_center = Point2::new(eye.x + HEAD_RADIUS_CM * 0.6, eye.y);
    let mut head: Vec<geo::Coord<Real>> = (0..HEAD_SEGMENTS)
        .map(|i| {
            let theta = 2.0 * PI * (i as Real) / (HEAD_SEGMENTS as Real);
            coord! {
                x: head_center.x + HEAD_RADIUS_CM * theta.cos(),
                y: head_center.y + HEAD_RADIUS_CM * theta.sin()
            }
        })
        .collect();
    head.push(head[0]);

    let neck = coord! { x: head_center.x, y: head_center.y - HEAD_RADIUS_CM };
    let hip_y = SEAT_HEIGHT_CM.min(neck.y);
    let hip = coord! { x: eye.x + SEAT_DEPTH_CM * 0.5, y: hip_y };
    let knee = coord! { x: eye.x - SEAT_DEPTH_CM * 0.3, y: hip_y };
    let foot = coord! { x: knee.x, y: 0.0 };

    let seat_back = eye.x + SEAT_DEPTH_CM;
    let seat_front = eye.x - SEAT_DEPTH_CM * 0.1;

    Viewer {
        head: GeoPolygon::new(LineString::new(head), vec![]),
        body: LineString::new(vec![neck, hip, knee, foot]),
        seat: rectangle(seat_front, 0.0, seat_back, hip_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::distance::{DistanceStrategy, FieldOfView};
    use crate::mounting::MountingMode;

    #[test]
    fn arc_ends_on_sight_line() {
        let eye = Point2::new(200.0, 100.0);
        let angle: Real = 0.3;
        let arc = arc(&eye, 50.0, angle);
        let end = arc.0.last().unwrap();
        let rise = (end.y - eye.y) / (eye.x - end.x);
        assert!((rise - angle.tan()).abs() < 1e-9);
    }

    #[test]
    fn tv_spans_mounting_heights() {
        let inputs = ViewingInputs::new(DistanceStrategy::FieldOfView(FieldOfView::Thx))
            .with_mounting_mode(MountingMode::Reclined);
        let result = calculate(&inputs).unwrap();
        let view = SideView::new(&inputs, &result);
        let tv = view.tv.bounding_rect().unwrap();
        assert!((tv.min().y - result.tv_bottom_height_cm).abs() < 1e-9);
        assert!((tv.max().y - result.tv_top_height_cm()).abs() < 1e-9);
        assert_eq!(tv.max().x, 0.0);
    }
}
