use crate::geometry::{Point, Size};
use crate::model::Placeholder;
use derive_more::{Display, From, Into};
use std::time::Duration;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct LineId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Challenge,
    Tool,
}

/// A connector drawn from `anchor`, rotated `angle_degrees` clockwise from
/// the positive x axis (screen coordinates, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub anchor: Point,
    pub length: f64,
    pub angle_degrees: f64,
    pub reveal_after: Duration,
}

impl LineSpec {
    pub fn end(&self) -> Point {
        let rad = self.angle_degrees.to_radians();
        self.anchor.offset(self.length * rad.cos(), self.length * rad.sin())
    }
}

/// What the compass needs from whatever displays it.
///
/// Nodes are appended first and positioned afterwards, so the renderer can
/// measure a node before centering it on its target point.
pub trait Surface {
    fn clear(&mut self);

    fn size(&self) -> Size;

    fn append_node(&mut self, kind: NodeKind, text: &str, reveal_after: Duration) -> NodeId;

    /// `None` if the node is not on this surface.
    fn measure_node(&self, node: NodeId) -> Option<Size>;

    /// Moves the node's top-left corner to `origin`.
    fn place_node(&mut self, node: NodeId, origin: Point);

    fn append_line(&mut self, line: LineSpec) -> LineId;

    fn set_node_active(&mut self, node: NodeId, active: bool);

    fn set_line_active(&mut self, line: LineId, active: bool);

    /// Clicks on `node` are to be reported back as a selection of `spoke`.
    fn listen_clicks(&mut self, node: NodeId, spoke: usize);

    fn show_message(&mut self, message: Placeholder);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_end_follows_angle() {
        let line = LineSpec {
            anchor: Point::new(100.0, 100.0),
            length: 50.0,
            angle_degrees: -90.0,
            reveal_after: Duration::ZERO,
        };
        let end = line.end();
        assert!((end.x - 100.0).abs() < 1e-9);
        assert!((end.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Challenge.to_string(), "challenge");
        assert_eq!(NodeKind::Tool.to_string(), "tool");
    }
}
