// Tile color palette
use std::sync::Arc;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
}

/// Ordered, non-empty list of colors. Cloning shares the underlying list.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Arc<[String]>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self {
            colors: colors.into(),
        })
    }

    /// Deterministic color for `key`: the same key always maps to the same entry.
    pub fn color_for(&self, key: &str) -> &str {
        let idx = fnv1a_32(key.as_bytes()) as usize % self.colors.len();
        &self.colors[idx]
    }
}

fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, b| {
        (hash ^ u32::from(*b)).wrapping_mul(FNV_PRIME)
    })
}
