//! Move sources for people and for chance.

mod human;
mod random;

pub use human::{HumanSource, LineInput, StdinReader};
pub use random::RandomSource;

use crate::app_config::{PlayerKind, PlayerSpec};
use gridtoe_core::MoveSource;
use tracing::instrument;

/// Builds the move source a player entry describes.
///
/// Human players share stdin, taking its lock only while reading a line,
/// and prompt on stdout.
#[instrument]
pub fn build_source(spec: &PlayerSpec) -> Box<dyn MoveSource> {
    match spec.kind() {
        PlayerKind::Human => Box::new(HumanSource::new(
            spec.name().clone(),
            StdinReader::new(),
            std::io::stdout(),
        )),
        PlayerKind::Random => Box::new(RandomSource::new(spec.name().clone(), *spec.seed())),
    }
}
