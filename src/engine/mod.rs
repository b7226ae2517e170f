//! Session Engine
//!
//! Everything with testable invariants lives here: the symbol codec,
//! table generation, the click-validation state machine, and the game
//! timer. Nothing in this module touches the terminal; the UI renders
//! whatever state the engine exposes.
//!
//! # Module Structure
//! - `symbol` - rank <-> label codec
//! - `table` - cell list generation (ordering, center cell)
//! - `session` - click validation, highlight overlay, delayed effects
//! - `timer` - start/stop/reset monotonic timer

pub mod session;
pub mod symbol;
pub mod table;
pub mod timer;

pub use session::{ClickOutcome, Phase, Session, INCORRECT_FLASH_DURATION, RESHUFFLE_DELAY};
pub use symbol::{rank_to_symbol, symbol_to_rank, ALPHABET, ALPHABET_LEN, MAX_LETTER_RANK};
pub use table::{generate, Cell};
pub use timer::{GameTimer, DISPLAY_RESOLUTION};
