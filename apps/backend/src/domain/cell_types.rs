//! Core cell-related types: Shape, Color, Appearance, Cell

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Shape {
    Triangle,
    Square,
    Diamond,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Triangle, Shape::Square, Shape::Diamond, Shape::Circle];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
}

/// A (shape, color) pair, independent of any cooldown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Appearance {
    pub shape: Shape,
    pub color: Color,
}

impl Appearance {
    pub const fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }

    /// The full 16-pair cross-product, shapes outer, colors inner.
    pub fn all() -> impl Iterator<Item = Appearance> {
        Shape::ALL
            .into_iter()
            .flat_map(|shape| Color::ALL.into_iter().map(move |color| Appearance { shape, color }))
    }

    /// True when the two pairs share a shape or share a color.
    pub fn overlaps(self, other: Appearance) -> bool {
        self.shape == other.shape || self.color == other.color
    }

    /// True when the two pairs differ on both axes.
    pub fn differs_fully(self, other: Appearance) -> bool {
        !self.overlaps(other)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub shape: Shape,
    pub color: Color,
    /// Accepted moves left before this cell is clickable again.
    pub cooldown: u8,
}

impl Cell {
    pub const fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            cooldown: 0,
        }
    }

    pub const fn with_cooldown(shape: Shape, color: Color, cooldown: u8) -> Self {
        Self {
            shape,
            color,
            cooldown,
        }
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::new(self.shape, self.color)
    }

    pub fn is_clickable(&self) -> bool {
        self.cooldown == 0
    }
}

impl From<Appearance> for Cell {
    fn from(a: Appearance) -> Self {
        Cell::new(a.shape, a.color)
    }
}
