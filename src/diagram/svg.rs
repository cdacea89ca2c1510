//! SVG export of a [`SideView`].

use super::{Dimension, Label, SideView};
use crate::float_types::Real;
use geo::{Coord, Line, LineString, Polygon as GeoPolygon};
use ::svg::Document;
use ::svg::node::element::{Group, Line as SvgLine, Polygon as SvgPolygon, Polyline, Text};

const STROKE: &str = "#222222";
const TV_FILL: &str = "#1f3b57";
const SIGHT: &str = "#d9480f";
const GUIDE: &str = "#868e96";
const FONT_SIZE_CM: Real = 9.0;

impl SideView {
    /// Renders the scene as a standalone SVG document `width_px` wide.
    ///
    /// Scene centimetres map to SVG user units with y flipped, so the floor
    /// ends up at the bottom of the picture.
    pub fn to_svg(&self, width_px: u32) -> String {
        let bounds = self.bounds();
        let pad = super::MARGIN_CM;
        let min_x = bounds.min().x - pad;
        let view_width = bounds.width() + 2.0 * pad;
        let view_height = bounds.height() + 2.0 * pad;
        // flipped y: scene max_y lands at the top
        let top = -(bounds.max().y + pad);
        let height_px = (width_px as Real * view_height / view_width).round();

        let mut room = Group::new()
            .set("stroke", STROKE)
            .set("stroke-width", 1.5)
            .set("fill", "none")
            .add(line(&self.floor).set("stroke-width", 3))
            .add(line(&self.wall).set("stroke-width", 3))
            .add(polygon(&self.tv).set("fill", TV_FILL))
            .add(polygon(&self.viewer.head))
            .add(polyline(&self.viewer.body))
            .add(polygon(&self.viewer.seat).set("fill", "#dee2e6"));

        room = room
            .add(line(&self.eye_line).set("stroke", GUIDE).set("stroke-dasharray", "6 4"))
            .add(line(&self.sight_line).set("stroke", SIGHT).set("stroke-width", 2));
        if let Some(arc) = &self.angle_arc {
            room = room.add(polyline(arc).set("stroke", SIGHT));
        }

        let dimensions = self
            .dimensions
            .iter()
            .fold(Group::new().set("stroke", GUIDE), |group, d| group.add(dimension(d)));

        let labels = self
            .labels
            .iter()
            .fold(Group::new().set("fill", STROKE), |group, l| group.add(label(l)));

        Document::new()
            .set("width", width_px)
            .set("height", height_px as u32)
            .set("viewBox", format!("{min_x:.1} {top:.1} {view_width:.1} {view_height:.1}"))
            .set("font-family", "sans-serif")
            .set("font-size", FONT_SIZE_CM)
            .add(room)
            .add(dimensions)
            .add(labels)
            .to_string()
    }
}

#[inline]
fn flip(c: &Coord<Real>) -> (Real, Real) {
    (c.x, -c.y)
}

fn points<'a>(coords: impl Iterator<Item = &'a Coord<Real>>) -> String {
    coords
        .map(|c| {
            let (x, y) = flip(c);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn line(l: &Line<Real>) -> SvgLine {
    let (x1, y1) = flip(&l.start);
    let (x2, y2) = flip(&l.end);
    SvgLine::new().set("x1", x1).set("y1", y1).set("x2", x2).set("y2", y2)
}

fn polygon(p: &GeoPolygon<Real>) -> SvgPolygon {
    SvgPolygon::new().set("points", points(p.exterior().0.iter()))
}

fn polyline(ls: &LineString<Real>) -> Polyline {
    Polyline::new().set("points", points(ls.0.iter()))
}

fn dimension(d: &Dimension) -> Group {
    let mid = d.midpoint();
    Group::new()
        .add(line(&d.line()).set("stroke-dasharray", "2 2"))
        .add(
            Text::new(d.label.clone())
                .set("x", mid.x)
                .set("y", -mid.y)
                .set("text-anchor", "middle")
                .set("stroke", "none")
                .set("fill", STROKE),
        )
}

fn label(l: &Label) -> Text {
    Text::new(l.text.clone())
        .set("x", l.anchor.x)
        .set("y", -l.anchor.y)
        .set("text-anchor", "middle")
}
