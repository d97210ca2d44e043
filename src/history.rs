//! Match history: the append-only sequence of frames for one match.
//!
//! Frames are never edited after they are appended; each new frame must
//! carry the next turn number. A history round-trips through JSON so a
//! finished match can be inspected or resumed from its latest frame.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{Game, GameFrame};

/// Error type for history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// The history file could not be read or written.
    Io(std::io::Error),
    /// The history file is not valid JSON for [`MatchHistory`].
    Parse(serde_json::Error),
    /// An appended frame does not follow the latest one.
    TurnGap {
        /// Turn the next frame must have.
        expected: u32,
        /// Turn the offered frame had.
        actual: u32,
    },
    /// A loaded history contains no frames.
    Empty,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "history I/O failed: {e}"),
            Self::Parse(e) => write!(f, "failed to parse history: {e}"),
            Self::TurnGap { expected, actual } => {
                write!(f, "expected frame for turn {expected}, got turn {actual}")
            }
            Self::Empty => write!(f, "history has no frames"),
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::TurnGap { .. } | Self::Empty => None,
        }
    }
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// All frames of one match, oldest first.
///
/// Deserialization applies the same checks as [`MatchHistory::push`], so a
/// history always holds at least one frame and its turns are consecutive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory")]
pub struct MatchHistory {
    game: Game,
    frames: Vec<GameFrame>,
}

/// Unchecked on-disk shape of a [`MatchHistory`].
#[derive(Deserialize)]
struct StoredHistory {
    game: Game,
    frames: Vec<GameFrame>,
}

impl TryFrom<StoredHistory> for MatchHistory {
    type Error = HistoryError;

    fn try_from(stored: StoredHistory) -> Result<Self, Self::Error> {
        let mut frames = stored.frames.into_iter();
        let initial = frames.next().ok_or(HistoryError::Empty)?;
        let mut history = Self::new(stored.game, initial);
        for frame in frames {
            history.push(frame)?;
        }
        Ok(history)
    }
}

impl MatchHistory {
    /// Start a history from the match's initial frame.
    #[must_use]
    pub fn new(game: Game, initial: GameFrame) -> Self {
        Self {
            game,
            frames: vec![initial],
        }
    }

    /// The match this history belongs to.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Append the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::TurnGap`] if `frame.turn` is not one past the
    /// latest frame's turn. The history is unchanged in that case.
    pub fn push(&mut self, frame: GameFrame) -> Result<(), HistoryError> {
        let expected = self.latest().turn.saturating_add(1);
        if frame.turn != expected {
            return Err(HistoryError::TurnGap {
                expected,
                actual: frame.turn,
            });
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Append a frame produced by a tick from the latest frame.
    pub(crate) fn record(&mut self, frame: GameFrame) {
        debug_assert_eq!(frame.turn, self.latest().turn.saturating_add(1));
        self.frames.push(frame);
    }

    /// The most recent frame.
    #[must_use]
    pub fn latest(&self) -> &GameFrame {
        // Every constructor, deserialization included, leaves one frame.
        &self.frames[self.frames.len() - 1]
    }

    /// The frame with the given turn number, if recorded.
    #[must_use]
    pub fn frame(&self, turn: u32) -> Option<&GameFrame> {
        let first = self.frames[0].turn;
        let offset = turn.checked_sub(first)?;
        self.frames.get(usize::try_from(offset).ok()?)
    }

    /// All frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[GameFrame] {
        &self.frames
    }

    /// Number of frames recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: construction and deserialization both reject an empty
    /// frame list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Write the history as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a history written by [`MatchHistory::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, has no
    /// frames, or has frames whose turns are not consecutive.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let reader = BufReader::new(File::open(path)?);
        let stored: StoredHistory = serde_json::from_reader(reader)?;
        Self::try_from(stored)
    }
}
