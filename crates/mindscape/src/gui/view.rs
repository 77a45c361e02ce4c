use super::metrics::{self, NODE_PADDING};
use super::theme::ThemeColors;
use cairo::Context;
use compass::{NodeKind, Scene, SceneLine, SceneNode, Size, Surface};
use palette::Srgba;
use std::f64::consts::PI;
use std::time::Duration;

const LINE_WIDTH: f64 = 2.0;
const ACTIVE_LINE_WIDTH: f64 = 4.0;
const MESSAGE_FONT_SIZE: f64 = 16.0;

struct NodeRenderer<'a> {
    node: &'a SceneNode,
}

impl<'a> NodeRenderer<'a> {
    fn new(node: &'a SceneNode) -> Self {
        Self { node }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_box(cr, colors)?;
        self.draw_text(cr, colors)
    }

    fn draw_box(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let color = NodeState::resolve(self.node).color(colors);
        set_source(cr, color);
        let (x, y) = (self.node.origin.x, self.node.origin.y);
        let (w, h) = (self.node.size.width, self.node.size.height);
        rounded_rect(cr, x, y, w, h, (h / 2.0).min(NODE_PADDING * 1.5));
        cr.fill()
    }

    fn draw_text(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_source(cr, colors.text);
        metrics::apply_font(cr, self.node.kind);
        let ext = cr.text_extents(&self.node.text)?;
        let center = self.node.center();
        cr.move_to(
            center.x - ext.width() / 2.0 - ext.x_bearing(),
            center.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(&self.node.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Hub,
    Active,
    Idle,
}

impl NodeState {
    fn resolve(node: &SceneNode) -> Self {
        match (node.kind, node.active) {
            (NodeKind::Challenge, _) => Self::Hub,
            (NodeKind::Tool, true) => Self::Active,
            (NodeKind::Tool, false) => Self::Idle,
        }
    }

    fn color(&self, colors: &ThemeColors) -> Srgba<f64> {
        match self {
            Self::Hub => colors.hub,
            Self::Active => colors.tool_active,
            Self::Idle => colors.tool,
        }
    }
}

/// Paints `scene` as it looks `elapsed` after it was rendered; nodes and
/// lines whose reveal delay has not passed yet are skipped.
pub fn draw(
    cr: &Context,
    scene: &Scene,
    colors: &ThemeColors,
    elapsed: Duration,
) -> Result<(), cairo::Error> {
    set_source(cr, colors.background);
    cr.paint()?;

    if let Some(message) = scene.message() {
        return draw_message(cr, scene.size(), &message.to_string(), colors);
    }

    for line in scene.lines().iter().filter(|l| l.spec.reveal_after <= elapsed) {
        draw_line(cr, line, colors)?;
    }
    for node in scene.nodes().iter().filter(|n| n.reveal_after <= elapsed) {
        NodeRenderer::new(node).draw(cr, colors)?;
    }
    Ok(())
}

fn draw_line(cr: &Context, line: &SceneLine, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (color, width) = if line.active {
        (colors.line_active, ACTIVE_LINE_WIDTH)
    } else {
        (colors.line, LINE_WIDTH)
    };
    set_source(cr, color);
    cr.set_line_width(width);

    let end = line.spec.end();
    cr.move_to(line.spec.anchor.x, line.spec.anchor.y);
    cr.line_to(end.x, end.y);
    cr.stroke()
}

fn draw_message(
    cr: &Context,
    area: Size,
    text: &str,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_source(cr, colors.message);
    cr.select_font_face(
        metrics::FONT_FAMILY,
        cairo::FontSlant::Italic,
        cairo::FontWeight::Normal,
    );
    cr.set_font_size(MESSAGE_FONT_SIZE);
    let ext = cr.text_extents(text)?;
    let center = area.center();
    cr.move_to(
        center.x - ext.width() / 2.0 - ext.x_bearing(),
        center.y - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn rounded_rect(cr: &Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}
