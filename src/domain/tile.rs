// Tile domain models
use super::instance::InstanceInfo;
use std::cmp::Ordering;

pub const DEFAULT_TILE_COUNT: usize = 3;
pub const MAX_TILE_COUNT: usize = 20;

/// Number of tiles to render, always within `1..=MAX_TILE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCount(usize);

impl TileCount {
    /// Sanitize a raw `count` parameter.
    ///
    /// Missing, non-numeric (including surrounding whitespace), zero and
    /// negative values fall back to the default; anything above the maximum
    /// is clamped to it.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.and_then(|s| s.parse::<i64>().ok()) {
            Some(n) if n > 0 => Self((n as u64).min(MAX_TILE_COUNT as u64) as usize),
            // Larger than i64 but still a positive integer.
            None if raw.is_some_and(is_positive_integer) => Self(MAX_TILE_COUNT),
            _ => Self::default(),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TileCount {
    fn default() -> Self {
        Self(DEFAULT_TILE_COUNT)
    }
}

fn is_positive_integer(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) && digits.bytes().any(|b| b != b'0')
}

/// One rendered instance tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub index: usize,
    pub info: InstanceInfo,
    pub color: String,
    pub hostname_color: String,
}

impl Tile {
    pub fn new(index: usize, info: InstanceInfo, color: String) -> Self {
        Self {
            index,
            info,
            hostname_color: color.clone(),
            color,
        }
    }

    /// Display order: hostname descending, then version descending.
    pub fn display_order(a: &Tile, b: &Tile) -> Ordering {
        b.info
            .hostname
            .cmp(&a.info.hostname)
            .then_with(|| b.info.version.cmp(&a.info.version))
    }
}
