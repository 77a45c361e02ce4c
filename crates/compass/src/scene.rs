use crate::geometry::{self, Point, Size};
use crate::model::Placeholder;
use crate::surface::{LineId, LineSpec, NodeId, NodeKind, Surface};
use std::time::Duration;

/// Measures the rendered box of a node's text.
pub trait TextMetrics {
    fn measure(&self, text: &str, kind: NodeKind) -> Size;
}

/// Monospace approximation; good enough headless and as a fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
            padding: 8.0,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str, kind: NodeKind) -> Size {
        let scale = match kind {
            NodeKind::Challenge => 1.25,
            NodeKind::Tool => 1.0,
        };
        Size::new(
            text.chars().count() as f64 * self.char_width * scale + 2.0 * self.padding,
            self.line_height * scale + 2.0 * self.padding,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub text: String,
    /// Top-left corner.
    pub origin: Point,
    pub size: Size,
    pub active: bool,
    pub reveal_after: Duration,
}

impl SceneNode {
    pub fn center(&self) -> Point {
        self.origin.offset(self.size.width / 2.0, self.size.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        geometry::contains(self.origin, self.size, point)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLine {
    pub id: LineId,
    pub spec: LineSpec,
    pub active: bool,
}

/// Retained display list implementing [`Surface`]. A host paints it and
/// feeds pointer clicks through [`Scene::click_target`].
pub struct Scene {
    size: Size,
    metrics: Box<dyn TextMetrics>,
    nodes: Vec<SceneNode>,
    lines: Vec<SceneLine>,
    listeners: Vec<(NodeId, usize)>,
    message: Option<Placeholder>,
    next_id: u32,
}

impl Scene {
    pub fn new(size: Size, metrics: impl TextMetrics + 'static) -> Self {
        Self {
            size,
            metrics: Box::new(metrics),
            nodes: Vec::new(),
            lines: Vec::new(),
            listeners: Vec::new(),
            message: None,
            next_id: 0,
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn lines(&self) -> &[SceneLine] {
        &self.lines
    }

    pub fn message(&self) -> Option<Placeholder> {
        self.message
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn line(&self, id: LineId) -> Option<&SceneLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.lines.is_empty() && self.message.is_none()
    }

    /// Spoke index registered for the topmost listened node under `point`.
    pub fn click_target(&self, point: Point) -> Option<usize> {
        self.visible_click_target(point, Duration::MAX)
    }

    /// Like [`Scene::click_target`], but only nodes already revealed
    /// `elapsed` after the render can be hit.
    pub fn visible_click_target(&self, point: Point, elapsed: Duration) -> Option<usize> {
        self.nodes
            .iter()
            .rev()
            .filter(|n| n.reveal_after <= elapsed && n.contains(point))
            .find_map(|n| {
                self.listeners
                    .iter()
                    .find(|(id, _)| *id == n.id)
                    .map(|&(_, spoke)| spoke)
            })
    }

    /// Distinct reveal delays, ascending. A host redraws at each of them.
    pub fn reveal_times(&self) -> Vec<Duration> {
        let mut times: Vec<_> = self
            .nodes
            .iter()
            .map(|n| n.reveal_after)
            .chain(self.lines.iter().map(|l| l.spec.reveal_after))
            .collect();
        times.sort();
        times.dedup();
        times
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        let node = self.nodes.iter_mut().find(|n| n.id == id);
        if node.is_none() {
            log::warn!("Node {} is not on the scene", id);
        }
        node
    }
}

impl Surface for Scene {
    fn clear(&mut self) {
        self.nodes.clear();
        self.lines.clear();
        self.listeners.clear();
        self.message = None;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn append_node(&mut self, kind: NodeKind, text: &str, reveal_after: Duration) -> NodeId {
        let id = NodeId::from(self.next_id());
        let size = self.metrics.measure(text, kind);
        self.nodes.push(SceneNode {
            id,
            kind,
            text: text.to_string(),
            origin: Point::default(),
            size,
            active: false,
            reveal_after,
        });
        id
    }

    fn measure_node(&self, node: NodeId) -> Option<Size> {
        self.node(node).map(|n| n.size)
    }

    fn place_node(&mut self, node: NodeId, origin: Point) {
        if let Some(n) = self.node_mut(node) {
            n.origin = origin;
        }
    }

    fn append_line(&mut self, line: LineSpec) -> LineId {
        let id = LineId::from(self.next_id());
        self.lines.push(SceneLine {
            id,
            spec: line,
            active: false,
        });
        id
    }

    fn set_node_active(&mut self, node: NodeId, active: bool) {
        if let Some(n) = self.node_mut(node) {
            n.active = active;
        }
    }

    fn set_line_active(&mut self, line: LineId, active: bool) {
        match self.lines.iter_mut().find(|l| l.id == line) {
            Some(l) => l.active = active,
            None => log::warn!("Line {} is not on the scene", line),
        }
    }

    fn listen_clicks(&mut self, node: NodeId, spoke: usize) {
        self.listeners.retain(|(id, _)| *id != node);
        self.listeners.push((node, spoke));
    }

    fn show_message(&mut self, message: Placeholder) {
        self.message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(Size::new(400.0, 400.0), FixedMetrics::default())
    }

    #[test]
    fn test_append_measures_node() {
        let mut s = scene();
        let id = s.append_node(NodeKind::Tool, "Calm", Duration::ZERO);
        assert_eq!(s.measure_node(id), Some(Size::new(4.0 * 8.0 + 16.0, 32.0)));
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut s = scene();
        let first = s.append_node(NodeKind::Tool, "a", Duration::ZERO);
        s.clear();
        let second = s.append_node(NodeKind::Tool, "b", Duration::ZERO);
        assert_ne!(first, second);
        assert_eq!(s.measure_node(first), None);
        assert!(s.node(second).is_some());
    }

    #[test]
    fn test_click_target_needs_listener() {
        let mut s = scene();
        let a = s.append_node(NodeKind::Challenge, "hub", Duration::ZERO);
        let b = s.append_node(NodeKind::Tool, "spoke", Duration::ZERO);
        s.place_node(a, Point::new(0.0, 0.0));
        s.place_node(b, Point::new(200.0, 200.0));
        s.listen_clicks(b, 3);

        assert_eq!(s.click_target(Point::new(5.0, 5.0)), None);
        assert_eq!(s.click_target(Point::new(210.0, 210.0)), Some(3));
        assert_eq!(s.click_target(Point::new(390.0, 390.0)), None);
    }

    #[test]
    fn test_hidden_node_ignores_clicks() {
        let mut s = scene();
        let n = s.append_node(NodeKind::Tool, "late", Duration::from_millis(300));
        s.place_node(n, Point::new(100.0, 100.0));
        s.listen_clicks(n, 1);

        let inside = Point::new(110.0, 110.0);
        assert_eq!(s.visible_click_target(inside, Duration::from_millis(100)), None);
        assert_eq!(s.visible_click_target(inside, Duration::from_millis(300)), Some(1));
        assert_eq!(s.click_target(inside), Some(1));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut s = scene();
        let n = s.append_node(NodeKind::Tool, "x", Duration::ZERO);
        s.listen_clicks(n, 0);
        s.append_line(LineSpec {
            anchor: Point::default(),
            length: 1.0,
            angle_degrees: 0.0,
            reveal_after: Duration::ZERO,
        });
        s.show_message(Placeholder::NotFound);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.click_target(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_reveal_times_sorted_and_distinct() {
        let mut s = scene();
        s.append_node(NodeKind::Tool, "b", Duration::from_millis(300));
        s.append_node(NodeKind::Tool, "a", Duration::from_millis(100));
        s.append_line(LineSpec {
            anchor: Point::default(),
            length: 1.0,
            angle_degrees: 0.0,
            reveal_after: Duration::from_millis(100),
        });
        assert_eq!(
            s.reveal_times(),
            vec![Duration::from_millis(100), Duration::from_millis(300)]
        );
    }
}
