//! Fixed game configuration.

/// Grid height.
pub const ROWS: usize = 3;

/// Grid width.
pub const COLS: usize = 6;

/// Cooldown given to a cell right after it is changed.
pub const COOLDOWN_TURNS: u8 = 3;

/// Draws allowed per cell during grid generation before the whole grid
/// is thrown away and generation starts over.
pub const GENERATION_MAX_ATTEMPTS: u32 = 50;
