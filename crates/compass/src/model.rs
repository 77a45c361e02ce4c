use crate::geometry::Point;
use crate::lexicon::ToolLabel;
use crate::surface::{LineId, NodeId};
use strum::{Display as StrumDisplay, EnumIter};

/// User-facing text shown instead of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter)]
pub enum Placeholder {
    #[strum(to_string = "No tools found for this challenge yet. Try \"stress\" or \"anxiety\".")]
    NotFound,
    #[strum(to_string = "Please enter a challenge to map your coping compass.")]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeNode {
    /// As typed, not normalized.
    pub text: String,
    pub node: NodeId,
    pub center: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolNode {
    pub node: NodeId,
    pub center: Point,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorLine {
    pub line: LineId,
    pub anchor: Point,
    pub length: f64,
    pub angle_degrees: f64,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spoke {
    pub index: usize,
    pub label: ToolLabel,
    pub tool: ToolNode,
    pub line: ConnectorLine,
}

impl Spoke {
    pub fn is_active(&self) -> bool {
        self.tool.active
    }

    fn set_active(&mut self, active: bool) {
        self.tool.active = active;
        self.line.active = active;
    }
}

/// One rendering: the challenge hub and its spokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub challenge: ChallengeNode,
    pub spokes: Vec<Spoke>,
}

impl Diagram {
    pub fn new(challenge: ChallengeNode, spokes: Vec<Spoke>) -> Self {
        Self { challenge, spokes }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.spokes.iter().position(Spoke::is_active)
    }

    /// Makes `index` the only active spoke. Returns the indices whose state
    /// changed, or `None` when `index` is out of range.
    pub fn activate(&mut self, index: usize) -> Option<Vec<usize>> {
        if index >= self.spokes.len() {
            return None;
        }

        let changed = self
            .spokes
            .iter_mut()
            .enumerate()
            .filter_map(|(i, spoke)| {
                let active = i == index;
                (spoke.is_active() != active).then(|| {
                    spoke.set_active(active);
                    i
                })
            })
            .collect();

        Some(changed)
    }
}
