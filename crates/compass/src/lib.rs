//! Radial "coping compass" core: maps a challenge to its tools and lays the
//! tools out as spokes around the challenge.
//!
//! Nothing in here depends on a GUI toolkit. Hosts implement [`Surface`]
//! (or drive the bundled [`Scene`]) and forward submissions and clicks.

pub mod geometry;
pub mod input;
pub mod layout;
pub mod lexicon;
pub mod macros;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod surface;

pub use geometry::{Point, Size};
pub use input::{InputController, Submission, SubmitTrigger};
pub use lexicon::{Lexicon, LexiconError, ToolLabel, TopicEntry, TopicKey};
pub use model::{ChallengeNode, ConnectorLine, Diagram, Placeholder, Spoke, ToolNode};
pub use renderer::{CompassRenderer, RenderOutcome, Stagger};
pub use scene::{FixedMetrics, Scene, SceneLine, SceneNode, TextMetrics};
pub use surface::{LineId, LineSpec, NodeId, NodeKind, Surface};
