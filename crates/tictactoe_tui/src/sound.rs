//! Sound cues rendered as the terminal bell.

use std::io::Write;
use tracing::{debug, error};

/// A sound the game asks the presentation layer to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A human placed a mark.
    Click,
    /// A move won the game.
    Win,
    /// The board filled with no winner.
    Draw,
}

impl Cue {
    /// Number of bell rings that stand in for this cue.
    fn rings(self) -> usize {
        match self {
            Cue::Click => 1,
            Cue::Draw => 2,
            Cue::Win => 3,
        }
    }
}

/// Plays cues by writing BEL characters.
#[derive(Debug)]
pub struct Bell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> Bell<W> {
    /// Creates a bell writing to `out`; when disabled, cues are dropped.
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    /// Plays a cue. Write failures are logged, never returned.
    pub fn play(&mut self, cue: Cue) {
        if !self.enabled {
            return;
        }
        debug!(?cue, "Playing cue");
        let bells = vec![0x07; cue.rings()];
        if let Err(e) = self.out.write_all(&bells).and_then(|()| self.out.flush()) {
            error!(error = %e, ?cue, "Error playing sound");
        }
    }
}
