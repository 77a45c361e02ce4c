use crate::model::Placeholder;
use crate::renderer::{CompassRenderer, RenderOutcome};
use crate::surface::Surface;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum SubmitTrigger {
    #[strum(serialize = "button")]
    Button,
    #[strum(serialize = "enter key")]
    EnterKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    EmptyInput,
    Rendered(RenderOutcome),
}

/// Turns raw input submissions into renders.
pub struct InputController<'a, S: Surface> {
    renderer: CompassRenderer<'a, S>,
}

impl<'a, S: Surface> InputController<'a, S> {
    pub fn new(renderer: CompassRenderer<'a, S>) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &CompassRenderer<'a, S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut CompassRenderer<'a, S> {
        &mut self.renderer
    }

    /// Trims `raw` and renders it. Case is left alone; the lexicon folds it.
    pub fn submit(&mut self, raw: &str, trigger: SubmitTrigger) -> Submission {
        let challenge = raw.trim();
        log::debug!("Submitted via {}: '{}'", trigger, challenge);

        if challenge.is_empty() {
            self.renderer.show_placeholder(Placeholder::EmptyInput);
            return Submission::EmptyInput;
        }

        Submission::Rendered(self.renderer.render(challenge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::lexicon::Lexicon;
    use crate::scene::{FixedMetrics, Scene};
    use crate::surface::NodeKind;

    fn controller(lexicon: &Lexicon) -> InputController<'_, Scene> {
        let scene = Scene::new(Size::new(640.0, 480.0), FixedMetrics::default());
        InputController::new(CompassRenderer::new(lexicon, scene))
    }

    #[test]
    fn test_whitespace_only_is_empty_input() {
        let lexicon = Lexicon::builtin();
        let mut c = controller(&lexicon);
        for raw in ["", "   ", "\t\n"] {
            assert_eq!(c.submit(raw, SubmitTrigger::Button), Submission::EmptyInput);
            let scene = c.renderer().surface();
            assert_eq!(scene.message(), Some(Placeholder::EmptyInput));
            assert!(scene.nodes().is_empty());
        }
    }

    #[test]
    fn test_input_is_trimmed_but_not_lowercased() {
        let lexicon = Lexicon::builtin();
        let mut c = controller(&lexicon);
        assert_eq!(
            c.submit("  Stress  ", SubmitTrigger::EnterKey),
            Submission::Rendered(RenderOutcome::Rendered { tools: 4 })
        );
        let hub = c
            .renderer()
            .surface()
            .nodes()
            .iter()
            .find(|n| n.kind == NodeKind::Challenge)
            .map(|n| n.text.clone());
        assert_eq!(hub.as_deref(), Some("Stress"));
    }

    #[test]
    fn test_unknown_topic_is_not_found() {
        let lexicon = Lexicon::builtin();
        let mut c = controller(&lexicon);
        assert_eq!(
            c.submit("quantum dread", SubmitTrigger::Button),
            Submission::Rendered(RenderOutcome::NotFound)
        );
        assert_eq!(
            c.renderer().surface().message(),
            Some(Placeholder::NotFound)
        );
    }

    #[test]
    fn test_empty_input_clears_previous_diagram() {
        let lexicon = Lexicon::builtin();
        let mut c = controller(&lexicon);
        c.submit("stress", SubmitTrigger::Button);
        c.renderer_mut().select(1);
        c.submit(" ", SubmitTrigger::EnterKey);
        assert!(c.renderer().diagram().is_none());
        assert!(c.renderer().surface().nodes().is_empty());
        assert!(c.renderer().surface().lines().is_empty());
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(SubmitTrigger::EnterKey.to_string(), "enter key");
    }
}
