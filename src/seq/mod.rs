// The sequence data model: an ordered list of pad presses with the time
// elapsed since the previous press. Insertion order is playback order.

use std::time::Duration;

use crate::shared::PadId;

pub mod player;
pub mod recorder;
pub mod store;

pub use player::Player;
pub use recorder::Recorder;
pub use store::{SavedSequence, SequenceStore};

/// One recorded pad press. `delay` is the gap since the previous action in
/// the same sequence (zero for the first). Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub pad: PadId,
    pub delay: Duration,
}

pub type Sequence = Vec<Action>;
