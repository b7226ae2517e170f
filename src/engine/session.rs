//! Session state machine
//!
//! Owns one game: the generated table, the expected-rank pointer, the
//! highlight overlay, the timer, and the two delayed effects (clearing
//! an incorrect flash, reshuffling after a click).
//!
//! Delayed effects are explicit deadlines polled by [`Session::tick`]
//! rather than fire-and-forget timers, so a game that completes between
//! scheduling and execution cancels them cleanly instead of racing.
//!
//! # States
//!
//! ```text
//! InProgress(expected_rank = 1) --correct clicks--> InProgress(n)
//! InProgress(size²) --last correct click--> Completed
//! Completed --reset / apply settings--> InProgress(1)
//! ```

use std::time::{Duration, Instant};

use rand::Rng;

use super::symbol;
use super::table::{self, Cell};
use super::timer::GameTimer;
use crate::error::Result;
use crate::settings::Settings;

/// How long a wrong cell stays flagged
pub const INCORRECT_FLASH_DURATION: Duration = Duration::from_millis(800);

/// Delay between a click and the shuffle-on-click regeneration
pub const RESHUFFLE_DELAY: Duration = Duration::from_millis(500);

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Completed,
}

/// What a click did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Right cell, pointer advanced
    Correct,
    /// Right cell, and it was the last one
    Completed,
    /// Wrong cell, flagged for [`INCORRECT_FLASH_DURATION`]
    Incorrect,
    /// Click on a finished game or out-of-range index
    Ignored,
}

/// A wrong click being displayed
#[derive(Debug, Clone, Copy)]
struct IncorrectFlash {
    cell: usize,
    clear_at: Instant,
}

/// One active game
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    cells: Vec<Cell>,
    /// Next rank the player must click, 1-based
    expected_rank: u32,
    phase: Phase,
    /// Per-cell "already found" overlay, parallel to `cells`
    correct: Vec<bool>,
    incorrect_flash: Option<IncorrectFlash>,
    /// Deadline for the scheduled table regeneration, if any
    pending_reshuffle: Option<Instant>,
    timer: GameTimer,
    status_message: Option<String>,
}

impl Session {
    /// Start a new game from a settings snapshot
    pub fn new(settings: Settings, rng: &mut impl Rng) -> Result<Self> {
        let cells = table::generate(&settings, rng)?;
        let cell_count = cells.len();
        Ok(Self {
            settings,
            cells,
            expected_rank: 1,
            phase: Phase::InProgress,
            correct: vec![false; cell_count],
            incorrect_flash: None,
            pending_reshuffle: None,
            timer: GameTimer::new(),
            status_message: None,
        })
    }

    /// Regenerate the table and zero the game state, keeping settings
    pub fn reset(&mut self, rng: &mut impl Rng) -> Result<()> {
        log::debug!("Resetting session ({}x{})", self.settings.size, self.settings.size);
        self.cells = table::generate(&self.settings, rng)?;
        self.expected_rank = 1;
        self.phase = Phase::InProgress;
        self.correct = vec![false; self.cells.len()];
        self.incorrect_flash = None;
        self.pending_reshuffle = None;
        self.timer.reset();
        self.status_message = None;
        Ok(())
    }

    /// Replace the settings snapshot and start over
    pub fn apply_settings(&mut self, settings: Settings, rng: &mut impl Rng) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        self.reset(rng)
    }

    /// Update the scale in the settings snapshot without restarting.
    ///
    /// Scale only affects rendering, so the running game keeps its
    /// table and progress.
    pub fn set_scale_factor(&mut self, scale: f64) {
        self.settings.scale_factor = scale;
    }

    /// Process a click on the cell at `index`.
    ///
    /// The first click of a game starts the timer, whether or not it
    /// hits the right cell. With shuffle-on-click enabled, any click on
    /// a still-running game schedules a regeneration after
    /// [`RESHUFFLE_DELAY`].
    pub fn handle_click(&mut self, index: usize, now: Instant) -> ClickOutcome {
        if self.phase == Phase::Completed {
            return ClickOutcome::Ignored;
        }
        let Some(cell) = self.cells.get(index) else {
            return ClickOutcome::Ignored;
        };

        self.timer.start(now);

        let expected = symbol::rank_to_symbol(self.expected_rank, self.settings.symbol_type);
        let outcome = if cell.symbol == expected {
            self.correct[index] = true;
            self.expected_rank += 1;
            if self.expected_rank > self.settings.cell_count() {
                self.complete(now);
                ClickOutcome::Completed
            } else {
                ClickOutcome::Correct
            }
        } else {
            log::debug!(
                "Wrong click: cell {} ({}), expected {}",
                index,
                cell.symbol,
                expected
            );
            self.incorrect_flash = Some(IncorrectFlash {
                cell: index,
                clear_at: now + INCORRECT_FLASH_DURATION,
            });
            ClickOutcome::Incorrect
        };

        if self.settings.shuffle_on_click && self.phase == Phase::InProgress {
            // Keep the earliest deadline: clicks faster than the delay
            // must not postpone a regeneration that is already due
            let deadline = now + RESHUFFLE_DELAY;
            self.pending_reshuffle =
                Some(self.pending_reshuffle.map_or(deadline, |due| due.min(deadline)));
        }

        outcome
    }

    /// Run delayed effects whose deadlines have passed.
    ///
    /// Called from the event loop on every poll. The reshuffle re-checks
    /// the phase at execution time: a game completed in the interim must
    /// not have its finished table replaced.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) -> Result<()> {
        if let Some(flash) = self.incorrect_flash {
            if now >= flash.clear_at {
                self.incorrect_flash = None;
            }
        }

        if let Some(due) = self.pending_reshuffle {
            if now >= due {
                self.pending_reshuffle = None;
                if self.phase == Phase::InProgress {
                    self.reshuffle(rng)?;
                }
            }
        }
        Ok(())
    }

    /// Regenerate cell positions, then restore the progress overlay.
    ///
    /// Eligibility is decided by decoding each new cell's label back to
    /// a rank and comparing against the expected-rank pointer, so
    /// progress survives even though every position changed.
    fn reshuffle(&mut self, rng: &mut impl Rng) -> Result<()> {
        self.cells = table::generate(&self.settings, rng)?;
        self.incorrect_flash = None;
        self.correct = self
            .cells
            .iter()
            .map(|cell| {
                symbol::symbol_to_rank(&cell.symbol, self.settings.symbol_type)
                    .is_some_and(|rank| rank < self.expected_rank)
            })
            .collect();
        Ok(())
    }

    fn complete(&mut self, now: Instant) {
        self.phase = Phase::Completed;
        self.timer.stop(now);
        self.incorrect_flash = None;
        self.pending_reshuffle = None;
        self.correct.fill(true);
        self.status_message = Some(format!(
            "Completed in {:.1} seconds!",
            self.timer.elapsed_secs(now)
        ));
        log::info!(
            "Game completed: {}x{} in {:.1}s",
            self.settings.size,
            self.settings.size,
            self.timer.elapsed_secs(now)
        );
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn expected_rank(&self) -> u32 {
        self.expected_rank
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// The label the player must find next, `None` once completed
    pub fn expected_symbol(&self) -> Option<String> {
        (self.phase == Phase::InProgress)
            .then(|| symbol::rank_to_symbol(self.expected_rank, self.settings.symbol_type))
    }

    /// Whether the cell at `index` is highlighted as found
    pub fn is_cell_correct(&self, index: usize) -> bool {
        self.correct.get(index).copied().unwrap_or(false)
    }

    /// The cell currently flagged as a wrong click, if any
    pub fn flashing_cell(&self) -> Option<usize> {
        self.incorrect_flash.map(|flash| flash.cell)
    }

    /// True while a regeneration is scheduled but not yet run
    pub fn reshuffle_pending(&self) -> bool {
        self.pending_reshuffle.is_some()
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    /// Completion message with the final time, once finished
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
