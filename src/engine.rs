//! Match runner.
//!
//! Drives a match turn by turn: asks the move source for decisions on the
//! latest frame, runs the tick and appends the result to the history.

use tracing::{info, warn};

use crate::config::RulesConfig;
use crate::error::TickResult;
use crate::game::{GameFrame, PointSelector, SnakeId, check_invariants, game_tick};
use crate::history::MatchHistory;
use crate::moves::MoveSource;

/// How a call to [`Engine::run`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The only living snake, if exactly one is left.
    pub winner: Option<SnakeId>,
    /// Ticks run by this call.
    pub turns_played: u32,
    /// Whether the match is decided.
    pub finished: bool,
}

/// Runs ticks for one match at a time.
#[derive(Debug)]
pub struct Engine<S, P> {
    rules: RulesConfig,
    source: S,
    selector: P,
}

impl<S: MoveSource, P: PointSelector> Engine<S, P> {
    /// Create an engine.
    #[must_use]
    pub fn new(rules: RulesConfig, source: S, selector: P) -> Self {
        Self {
            rules,
            source,
            selector,
        }
    }

    /// Rules applied by every tick.
    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Advance the match by one turn and return the new frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the game's board is invalid; the history is left
    /// unchanged.
    pub fn step<'h>(&mut self, history: &'h mut MatchHistory) -> TickResult<&'h GameFrame> {
        let decisions = self.source.moves(history.game(), history.latest());
        let next = game_tick(
            &self.rules,
            history.game(),
            history.latest(),
            &decisions,
            &mut self.selector,
        )?;

        for violation in check_invariants(history.game(), &next, self.rules.max_health) {
            warn!(game = %history.game().id, turn = next.turn, %violation, "frame invariant violated");
        }

        history.record(next);
        Ok(history.latest())
    }

    /// Step until the match is decided or `max_turns` ticks have run.
    ///
    /// # Errors
    ///
    /// Returns the first tick error; frames produced before it stay in the
    /// history.
    pub fn run(&mut self, history: &mut MatchHistory, max_turns: u32) -> TickResult<MatchOutcome> {
        let mut turns_played = 0;
        while turns_played < max_turns && !history.latest().is_over() {
            self.step(history)?;
            turns_played += 1;
        }

        let latest = history.latest();
        let finished = latest.is_over();
        let mut alive = latest.alive_snakes();
        let winner = match (alive.next(), alive.next()) {
            (Some(snake), None) => Some(snake.id.clone()),
            _ => None,
        };

        info!(
            game = %history.game().id,
            turn = latest.turn,
            turns_played,
            finished,
            winner = winner.as_deref().unwrap_or("none"),
            "match run ended"
        );

        Ok(MatchOutcome {
            winner,
            turns_played,
            finished,
        })
    }
}
