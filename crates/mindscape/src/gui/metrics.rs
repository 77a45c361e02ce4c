use cairo::{Context, FontSlant, FontWeight};
use compass::{FixedMetrics, NodeKind, Size, TextMetrics};

pub const FONT_FAMILY: &str = "Sans";
pub const NODE_PADDING: f64 = 12.0;
const LINE_SPACING: f64 = 1.3;

pub fn font_size(kind: NodeKind) -> f64 {
    match kind {
        NodeKind::Challenge => 20.0,
        NodeKind::Tool => 14.0,
    }
}

pub fn apply_font(cr: &Context, kind: NodeKind) {
    let weight = match kind {
        NodeKind::Challenge => FontWeight::Bold,
        NodeKind::Tool => FontWeight::Normal,
    };
    cr.select_font_face(FONT_FAMILY, FontSlant::Normal, weight);
    cr.set_font_size(font_size(kind));
}

/// Measures node text with the same font the view paints it with.
pub struct CairoMetrics {
    context: Option<Context>,
    fallback: FixedMetrics,
}

impl CairoMetrics {
    pub fn new() -> Self {
        let context = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1)
            .and_then(|surface| Context::new(&surface))
            .inspect_err(|e| log::warn!("Text measurement falls back to estimates: {}", e))
            .ok();
        Self {
            context,
            fallback: FixedMetrics::default(),
        }
    }
}

impl Default for CairoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for CairoMetrics {
    fn measure(&self, text: &str, kind: NodeKind) -> Size {
        self.context
            .as_ref()
            .and_then(|cr| {
                apply_font(cr, kind);
                cr.text_extents(text).ok()
            })
            .map(|ext| {
                Size::new(
                    ext.x_advance().max(ext.width()) + 2.0 * NODE_PADDING,
                    font_size(kind) * LINE_SPACING + 2.0 * NODE_PADDING,
                )
            })
            .unwrap_or_else(|| self.fallback.measure(text, kind))
    }
}
