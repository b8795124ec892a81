//! Domain layer: the grid engine. Pure game logic, no I/O.

pub mod adjacency;
pub mod cell_types;
pub mod generator;
pub mod grid;
pub mod moves;
pub mod rules;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_moves;

// Re-exports for ergonomics
pub use adjacency::is_legal;
pub use cell_types::{Appearance, Cell, Color, Shape};
pub use generator::{generate_grid, satisfies_generation_invariant, PairSource, RandomPairs};
pub use grid::{Grid, Position};
pub use moves::{legal_replacements, resolve_click, ClickOutcome, IgnoreReason};
pub use state::GameState;
