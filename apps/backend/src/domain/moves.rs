//! Click resolution: legality filtering, replacement choice, cooldowns and score.

use rand::Rng;
use tracing::{debug, info};

use crate::domain::adjacency::is_legal;
use crate::domain::cell_types::Appearance;
use crate::domain::grid::{Grid, Position};
use crate::domain::rules::COOLDOWN_TURNS;
use crate::domain::state::GameState;

/// Why a click left the state untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IgnoreReason {
    Inactive,
    OutOfBounds,
    CoolingDown,
}

/// Result of resolving one click.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClickOutcome {
    /// The cell at `pos` now shows `placed`; score and cooldowns advanced.
    Applied { pos: Position, placed: Appearance },
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// No legal replacement existed; the game is now inactive.
    GameOver { final_score: u32 },
}

/// Every pair that differs from the cell's current shape and color and
/// passes the adjacency check against the unmodified grid.
///
/// Deterministic; ordered shapes outer, colors inner.
pub fn legal_replacements(grid: &Grid, pos: Position) -> Vec<Appearance> {
    let current = grid[pos].appearance();
    Appearance::all()
        .filter(|candidate| candidate.differs_fully(current))
        .filter(|candidate| is_legal(grid, pos, *candidate))
        .collect()
}

/// Resolve a click at client-supplied coordinates, mutating `state` in place.
///
/// Ignored outcomes and GameOver leave the grid and score exactly as they were;
/// GameOver only clears `is_active`.
pub fn resolve_click<R: Rng + ?Sized>(
    state: &mut GameState,
    row: i64,
    col: i64,
    rng: &mut R,
) -> ClickOutcome {
    if !state.is_active {
        return ClickOutcome::Ignored(IgnoreReason::Inactive);
    }

    let Some(pos) = Position::from_signed(row, col) else {
        return ClickOutcome::Ignored(IgnoreReason::OutOfBounds);
    };

    if !state.grid[pos].is_clickable() {
        debug!(
            row,
            col,
            cooldown = state.grid[pos].cooldown,
            "Click ignored: cell is on cooldown"
        );
        return ClickOutcome::Ignored(IgnoreReason::CoolingDown);
    }

    let candidates = legal_replacements(&state.grid, pos);
    if candidates.is_empty() {
        state.is_active = false;
        info!(row, col, final_score = state.score, "Game over: no legal replacement");
        return ClickOutcome::GameOver {
            final_score: state.score,
        };
    }

    let placed = candidates[rng.random_range(0..candidates.len())];
    apply_replacement(state, pos, placed);
    info!(row, col, score = state.score, "Move applied");

    ClickOutcome::Applied { pos, placed }
}

fn apply_replacement(state: &mut GameState, pos: Position, placed: Appearance) {
    for other in Position::all().filter(|other| *other != pos) {
        let cell = &mut state.grid[other];
        cell.cooldown = cell.cooldown.saturating_sub(1);
    }

    let cell = &mut state.grid[pos];
    cell.shape = placed.shape;
    cell.color = placed.color;
    cell.cooldown = COOLDOWN_TURNS;

    state.score = state.score.saturating_add(1);
}
