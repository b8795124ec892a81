use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::rules::COOLDOWN_TURNS;
use crate::domain::{
    legal_replacements, resolve_click, Appearance, Cell, ClickOutcome, Color, GameState, Grid,
    IgnoreReason, Position, Shape,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

/// Target (1, 2) is Triangle/Red. Its neighbors cover Square, Diamond and
/// Triangle plus Green, Blue and Red, leaving Circle/Yellow as the only
/// replacement.
fn single_exit_grid() -> Grid {
    let mut grid = Grid::filled(Cell::new(Shape::Diamond, Color::Green));
    grid[pos(1, 2)] = Cell::new(Shape::Triangle, Color::Red);
    grid[pos(0, 2)] = Cell::new(Shape::Square, Color::Green);
    grid[pos(2, 2)] = Cell::new(Shape::Diamond, Color::Blue);
    grid[pos(1, 1)] = Cell::new(Shape::Triangle, Color::Green);
    grid[pos(1, 3)] = Cell::new(Shape::Square, Color::Red);
    grid
}

/// Target (1, 2) is Triangle/Red; every other shape already sits next to it.
fn dead_end_grid() -> Grid {
    let mut grid = Grid::filled(Cell::new(Shape::Diamond, Color::Green));
    grid[pos(1, 2)] = Cell::new(Shape::Triangle, Color::Red);
    grid[pos(0, 2)] = Cell::new(Shape::Square, Color::Green);
    grid[pos(2, 2)] = Cell::new(Shape::Diamond, Color::Blue);
    grid[pos(1, 1)] = Cell::new(Shape::Circle, Color::Yellow);
    grid
}

#[test]
fn single_legal_combination_is_applied() {
    let mut state = GameState::with_grid(single_exit_grid());
    assert_eq!(
        legal_replacements(&state.grid, pos(1, 2)),
        vec![Appearance::new(Shape::Circle, Color::Yellow)]
    );

    let outcome = resolve_click(&mut state, 1, 2, &mut rng());

    assert_eq!(
        outcome,
        ClickOutcome::Applied {
            pos: pos(1, 2),
            placed: Appearance::new(Shape::Circle, Color::Yellow),
        }
    );
    let cell = state.grid[pos(1, 2)];
    assert_eq!((cell.shape, cell.color), (Shape::Circle, Color::Yellow));
    assert_eq!(cell.cooldown, COOLDOWN_TURNS);
    assert_eq!(state.score, 1);
    assert!(state.is_active);
}

#[test]
fn no_legal_combination_ends_game_without_touching_grid() {
    let grid = dead_end_grid();
    let mut state = GameState {
        score: 12,
        grid: grid.clone(),
        is_active: true,
    };
    assert!(legal_replacements(&state.grid, pos(1, 2)).is_empty());

    let outcome = resolve_click(&mut state, 1, 2, &mut rng());

    assert_eq!(outcome, ClickOutcome::GameOver { final_score: 12 });
    assert!(!state.is_active);
    assert_eq!(state.grid, grid);
    assert_eq!(state.score, 12);
}

#[test]
fn replacement_must_change_both_shape_and_color() {
    // All neighbors are Diamond/Green, so only the old-value rule limits us.
    let mut grid = Grid::filled(Cell::new(Shape::Diamond, Color::Green));
    grid[pos(1, 2)] = Cell::new(Shape::Triangle, Color::Red);

    let options = legal_replacements(&grid, pos(1, 2));
    assert_eq!(options.len(), 4);
    for option in options {
        assert_ne!(option.shape, Shape::Triangle);
        assert_ne!(option.color, Color::Red);
        assert_ne!(option.shape, Shape::Diamond);
        assert_ne!(option.color, Color::Green);
    }
}

#[test]
fn applied_move_ticks_other_cooldowns_only() {
    let mut grid = single_exit_grid();
    grid[pos(0, 0)].cooldown = 2;
    grid[pos(2, 5)].cooldown = 1;
    grid[pos(0, 5)].cooldown = 3;
    let mut state = GameState::with_grid(grid);

    let outcome = resolve_click(&mut state, 1, 2, &mut rng());
    assert!(matches!(outcome, ClickOutcome::Applied { .. }));

    assert_eq!(state.grid[pos(0, 0)].cooldown, 1);
    assert_eq!(state.grid[pos(2, 5)].cooldown, 0);
    assert_eq!(state.grid[pos(0, 5)].cooldown, 2);
    assert_eq!(state.grid[pos(1, 2)].cooldown, COOLDOWN_TURNS);
    assert_eq!(state.grid[pos(1, 1)].cooldown, 0);
}

#[test]
fn clicking_a_cooling_cell_is_ignored() {
    let mut grid = single_exit_grid();
    grid[pos(1, 2)].cooldown = 1;
    grid[pos(0, 0)].cooldown = 2;
    let mut state = GameState::with_grid(grid);
    let before = state.clone();

    let outcome = resolve_click(&mut state, 1, 2, &mut rng());

    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::CoolingDown));
    assert_eq!(state, before);
}

#[test]
fn out_of_bounds_clicks_are_ignored() {
    let mut state = GameState::with_grid(single_exit_grid());
    let before = state.clone();

    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 6), (i64::MAX, 2)] {
        let outcome = resolve_click(&mut state, row, col, &mut rng());
        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::OutOfBounds));
    }
    assert_eq!(state, before);
}

#[test]
fn inactive_game_ignores_clicks() {
    let mut state = GameState::with_grid(single_exit_grid());
    state.is_active = false;
    let before = state.clone();

    let outcome = resolve_click(&mut state, 1, 2, &mut rng());

    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::Inactive));
    assert_eq!(state, before);
}

#[test]
fn inactive_check_precedes_bounds_check() {
    let mut state = GameState::with_grid(single_exit_grid());
    state.is_active = false;
    let outcome = resolve_click(&mut state, 99, 99, &mut rng());
    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::Inactive));
}

#[test]
fn cooled_down_cell_becomes_clickable_after_three_moves_elsewhere() {
    // Neighbors of each clicked corner are Diamond/Green everywhere, so
    // every corner always has replacements.
    let mut state = GameState::with_grid(Grid::filled(Cell::new(Shape::Diamond, Color::Green)));
    let mut rng = rng();

    assert!(matches!(
        resolve_click(&mut state, 0, 0, &mut rng),
        ClickOutcome::Applied { .. }
    ));
    for (row, col) in [(2, 5), (2, 0)] {
        assert_eq!(
            resolve_click(&mut state, 0, 0, &mut rng),
            ClickOutcome::Ignored(IgnoreReason::CoolingDown)
        );
        assert!(matches!(
            resolve_click(&mut state, row, col, &mut rng),
            ClickOutcome::Applied { .. }
        ));
    }
    assert_eq!(state.grid[pos(0, 0)].cooldown, 1);
    assert!(matches!(
        resolve_click(&mut state, 0, 5, &mut rng),
        ClickOutcome::Applied { .. }
    ));
    assert_eq!(state.grid[pos(0, 0)].cooldown, 0);
    assert!(matches!(
        resolve_click(&mut state, 0, 0, &mut rng),
        ClickOutcome::Applied { .. }
    ));
    assert_eq!(state.score, 5);
}

#[test]
fn score_saturates_at_the_top_of_its_range() {
    let mut state = GameState {
        score: u32::MAX,
        grid: single_exit_grid(),
        is_active: true,
    };

    let outcome = resolve_click(&mut state, 1, 2, &mut rng());

    assert!(matches!(outcome, ClickOutcome::Applied { .. }));
    assert_eq!(state.score, u32::MAX);
    assert_eq!(state.grid[pos(1, 2)].cooldown, COOLDOWN_TURNS);
}
