use crate::geometry::{Point, Size};
use crate::layout::{self, Placement};
use crate::lexicon::{Lexicon, ToolLabel};
use crate::model::{ChallengeNode, ConnectorLine, Diagram, Placeholder, Spoke, ToolNode};
use crate::surface::{LineSpec, NodeId, NodeKind, Surface};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { tools: usize },
    NotFound,
}

/// Entrance delays: later spokes appear later, so tools come in rotationally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    base: Duration,
    step: Duration,
}

impl Stagger {
    /// Smallest step that still keeps the entrance strictly ordered.
    pub const MIN_STEP: Duration = Duration::from_millis(1);

    pub fn new(base: Duration, step: Duration) -> Self {
        if step < Self::MIN_STEP {
            log::warn!(
                "Stagger step {:?} would reveal tools together; using {:?}",
                step,
                Self::MIN_STEP
            );
        }
        Self {
            base,
            step: step.max(Self::MIN_STEP),
        }
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn delay(&self, index: usize) -> Duration {
        self.base + self.step * index as u32
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(Duration::from_millis(200), Duration::from_millis(120))
    }
}

/// Owns the current [`Diagram`] and keeps `S` in sync with it.
pub struct CompassRenderer<'a, S: Surface> {
    lexicon: &'a Lexicon,
    surface: S,
    stagger: Stagger,
    diagram: Option<Diagram>,
}

impl<'a, S: Surface> CompassRenderer<'a, S> {
    pub fn new(lexicon: &'a Lexicon, surface: S) -> Self {
        Self {
            lexicon,
            surface,
            stagger: Stagger::default(),
            diagram: None,
        }
    }

    pub fn with_stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn diagram(&self) -> Option<&Diagram> {
        self.diagram.as_ref()
    }

    /// Replaces whatever is on the surface with the compass for
    /// `challenge`, or with the not-found message.
    pub fn render(&mut self, challenge: &str) -> RenderOutcome {
        self.reset();

        let lexicon = self.lexicon;
        let Some(tools) = lexicon.lookup(challenge) else {
            self.surface.show_message(Placeholder::NotFound);
            return RenderOutcome::NotFound;
        };

        let region = self.surface.size();
        let center = region.center();
        let challenge_node =
            self.append_centered(NodeKind::Challenge, challenge, center, Duration::ZERO);

        let spokes = layout::compute_layout(tools.len(), region)
            .into_iter()
            .zip(tools)
            .map(|(placement, label)| self.append_spoke(center, placement, label))
            .collect::<Vec<_>>();

        let count = spokes.len();
        self.diagram = Some(Diagram::new(
            ChallengeNode {
                text: challenge.to_string(),
                node: challenge_node,
                center,
            },
            spokes,
        ));

        log::debug!(
            "Rendered '{}' with {} tools in {}x{}",
            challenge,
            count,
            region.width,
            region.height
        );
        RenderOutcome::Rendered { tools: count }
    }

    pub fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.reset();
        self.surface.show_message(placeholder);
    }

    /// Highlights spoke `index` alone. Returns `false` when there is no such
    /// spoke in the current diagram.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(diagram) = self.diagram.as_mut() else {
            return false;
        };
        let Some(changed) = diagram.activate(index) else {
            log::warn!("Spoke {} does not exist", index);
            return false;
        };

        for spoke in changed.into_iter().map(|i| &diagram.spokes[i]) {
            self.surface.set_node_active(spoke.tool.node, spoke.tool.active);
            self.surface.set_line_active(spoke.line.line, spoke.line.active);
        }
        true
    }

    fn reset(&mut self) {
        self.diagram = None;
        self.surface.clear();
    }

    fn append_centered(
        &mut self,
        kind: NodeKind,
        text: &str,
        target: Point,
        reveal_after: Duration,
    ) -> NodeId {
        let node = self.surface.append_node(kind, text, reveal_after);
        let size = self.surface.measure_node(node).unwrap_or_else(|| {
            log::warn!("Could not measure {} node '{}'", kind, text);
            Size::default()
        });
        self.surface.place_node(node, layout::centered_origin(target, size));
        node
    }

    fn append_spoke(&mut self, center: Point, placement: Placement, label: &ToolLabel) -> Spoke {
        let reveal_after = self.stagger.delay(placement.index);
        let node = self.append_centered(NodeKind::Tool, label, placement.position, reveal_after);
        let line = LineSpec {
            anchor: center,
            length: placement.line_length,
            angle_degrees: placement.line_angle_degrees,
            reveal_after,
        };
        let line_id = self.surface.append_line(line);
        self.surface.listen_clicks(node, placement.index);

        Spoke {
            index: placement.index,
            label: label.clone(),
            tool: ToolNode {
                node,
                center: placement.position,
                active: false,
            },
            line: ConnectorLine {
                line: line_id,
                anchor: center,
                length: line.length,
                angle_degrees: line.angle_degrees,
                active: false,
            },
        }
    }
}
