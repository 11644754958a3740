//! Side identification and per-side data storage.
//!
//! ## Color
//!
//! The two sides of the board. White moves first and its pawns advance
//! toward row 0; Black's pawns advance toward row 7.
//!
//! ## ColorMap
//!
//! Per-side storage with O(1) access, indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns start (and may double-step from).
    #[must_use]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Dense index: White = 0, Black = 1.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use hotseat_chess::core::{Color, ColorMap};
///
/// let mut clocks: ColorMap<u32> = ColorMap::with_value(300);
/// clocks[Color::Black] -= 10;
///
/// assert_eq!(clocks[Color::White], 300);
/// assert_eq!(clocks[Color::Black], 290);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for color in Color::ALL {
            assert_ne!(color.opponent(), color);
            assert_eq!(color.opponent().opponent(), color);
        }
    }

    #[test]
    fn test_pawn_geometry() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
        assert_eq!(Color::White.pawn_home_row(), 6);
        assert_eq!(Color::Black.pawn_home_row(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn test_color_map_new() {
        let map = ColorMap::new(|c| c.index() * 10);
        assert_eq!(map[Color::White], 0);
        assert_eq!(map[Color::Black], 10);
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map: ColorMap<u32> = ColorMap::default();
        map[Color::White] = 5;
        *map.get_mut(Color::Black) += 7;

        assert_eq!(map[Color::White], 5);
        assert_eq!(map[Color::Black], 7);
    }

    #[test]
    fn test_color_map_iter() {
        let map = ColorMap::new(|c| c.index());
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Color::White, &0), (Color::Black, &1)]);
    }

    #[test]
    fn test_color_map_serialization() {
        let map = ColorMap::new(|c| c.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ColorMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
