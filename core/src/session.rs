use alloc::string::{String, ToString};

use crate::*;

/// Tag of one "start game" request. Results carrying an older tag belong to a superseded game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    /// No game has been requested yet.
    Idle,
    Loading,
    Ready(Board),
    Failed(FetchError),
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// What the view should do after a load finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The result belonged to an older game and was dropped.
    Stale,
    Ready,
    /// Loading failed; the message is meant for the player.
    Failed(String),
}

impl SessionUpdate {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::Stale)
    }
}

/// Owns the board of the game being played and guards it against late results of earlier games.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    generation: Generation,
    phase: SessionPhase,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throws the current board away and waits for a new one.
    pub fn start(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.phase = SessionPhase::Loading;
        log::debug!("starting game {:?}", self.generation);
        self.generation
    }

    /// Hands the outcome of the load started as `generation` to the session.
    pub fn finish(&mut self, generation: Generation, result: FetchResult<Board>) -> SessionUpdate {
        if generation != self.generation || !self.is_loading() {
            log::debug!(
                "dropping result of {:?}, current game is {:?}",
                generation,
                self.generation
            );
            return SessionUpdate::Stale;
        }

        match result {
            Ok(board) => {
                self.phase = SessionPhase::Ready(board);
                SessionUpdate::Ready
            }
            Err(err) => {
                log::error!("failed to load board: {}", err);
                let message = err.to_string();
                self.phase = SessionPhase::Failed(err);
                SessionUpdate::Failed(message)
            }
        }
    }

    /// Forwards a cell click to the board; does nothing while there is no board.
    pub fn click(&mut self, cell: CellId) -> Result<RevealEffect> {
        match &mut self.phase {
            SessionPhase::Ready(board) => board.click(cell),
            _ => Ok(RevealEffect::NoChange),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    pub fn board(&self) -> Option<&Board> {
        match &self.phase {
            SessionPhase::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            SessionPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Caption of the start button.
    pub fn start_label(&self) -> &'static str {
        match self.phase {
            SessionPhase::Idle => "Start",
            SessionPhase::Loading => "Loading...",
            SessionPhase::Ready(_) | SessionPhase::Failed(_) => "Restart",
        }
    }
}
