// Proptest generators for domain types.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::rules::{COLS, COOLDOWN_TURNS, ROWS};
use crate::domain::{generate_grid, Appearance, Cell, Color, GameState, Grid, RandomPairs, Shape};

pub fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Triangle),
        Just(Shape::Square),
        Just(Shape::Diamond),
        Just(Shape::Circle),
    ]
}

pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Green),
        Just(Color::Blue),
        Just(Color::Yellow),
    ]
}

pub fn appearance() -> impl Strategy<Value = Appearance> {
    (shape(), color()).prop_map(|(shape, color)| Appearance::new(shape, color))
}

/// Any cell, including cooldowns the engine would never leave behind.
pub fn cell() -> impl Strategy<Value = Cell> {
    (appearance(), 0..=COOLDOWN_TURNS)
        .prop_map(|(a, cooldown)| Cell::with_cooldown(a.shape, a.color, cooldown))
}

/// An arbitrary grid, not necessarily satisfying any invariant.
pub fn any_grid() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(cell(), ROWS * COLS).prop_map(|cells| {
        let mut grid = Grid::filled(cells[0]);
        for (pos, cell) in crate::domain::Position::all().zip(cells) {
            grid[pos] = cell;
        }
        grid
    })
}

/// A grid produced by the real generator from a proptest-chosen seed.
pub fn generated_grid() -> impl Strategy<Value = Grid> {
    any::<u64>().prop_map(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_grid(&mut RandomPairs(&mut rng))
    })
}

/// An active game on an arbitrary grid with an arbitrary starting score.
pub fn active_state() -> impl Strategy<Value = GameState> {
    (any_grid(), 0u32..1_000).prop_map(|(grid, score)| GameState {
        score,
        grid,
        is_active: true,
    })
}

/// In-bounds click coordinates.
pub fn click() -> impl Strategy<Value = (i64, i64)> {
    (0..ROWS as i64, 0..COLS as i64)
}
