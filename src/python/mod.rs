//! Python bindings for the Bluff Number engine.
//!
//! Lets a Python chat bot drive matches directly.
//!
//! # Quick Start
//!
//! ```python
//! import bluff_number as bn
//!
//! game = bn.BluffMatch(channel_id=1, host_id=10, seed=42)
//! game.add_player(10, "Alice")
//! game.add_player(11, "Bob")
//! game.add_player(12, "Carol")
//! game.start_game()
//!
//! game.make_declaration(10, 12)
//! message, loser, winner = game.make_challenge(11)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// bluff_number: a turn-based bluff/declaration game engine.
#[pymodule]
fn bluff_number(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStanding>()?;
    m.add_class::<PyBluffMatch>()?;
    Ok(())
}
