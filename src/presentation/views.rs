// HTML views rendered by askama
use crate::domain::tile::{MAX_TILE_COUNT, Tile};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub count: usize,
    pub max_count: usize,
}

impl IndexView {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_count: MAX_TILE_COUNT,
        }
    }
}

#[derive(Template)]
#[template(path = "tiles.html")]
pub struct TilesView {
    pub tiles: Vec<Tile>,
}
