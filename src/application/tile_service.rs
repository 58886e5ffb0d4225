// Tile service - Use case for building the instance tiles of one page
use crate::application::instance_source::InstanceSource;
use crate::domain::instance::InstanceInfo;
use crate::domain::palette::Palette;
use crate::domain::tile::{Tile, TileCount};
use futures::future::join_all;
use std::sync::Arc;

#[derive(Clone)]
pub struct TileService {
    source: Arc<dyn InstanceSource>,
    palette: Palette,
}

impl TileService {
    pub fn new(source: Arc<dyn InstanceSource>, palette: Palette) -> Self {
        Self { source, palette }
    }

    /// Fetch `count` instances concurrently and turn them into ordered, colored tiles.
    ///
    /// Never fails: a slot whose fetch fails is filled with
    /// [`InstanceInfo::unavailable`]. The returned tiles are sorted with
    /// [`Tile::display_order`] and indexed `1..=count`.
    pub async fn build_tiles(&self, count: TileCount) -> Vec<Tile> {
        let fetches = (0..count.get()).map(|slot| self.fetch_slot(slot));
        let infos = join_all(fetches).await;

        let mut tiles: Vec<Tile> = infos
            .into_iter()
            .map(|info| {
                let color = self.palette.color_for(&info.color_key()).to_string();
                Tile::new(0, info, color)
            })
            .collect();

        tiles.sort_by(Tile::display_order);
        for (i, tile) in tiles.iter_mut().enumerate() {
            tile.index = i + 1;
        }

        let failed = tiles.iter().filter(|t| t.info.is_unavailable()).count();
        tracing::debug!(requested = count.get(), failed, "Built instance tiles");

        tiles
    }

    async fn fetch_slot(&self, slot: usize) -> InstanceInfo {
        match self.source.fetch_instance().await {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(slot = slot + 1, error = %e, "Instance fetch failed, using placeholder");
                InstanceInfo::unavailable()
            }
        }
    }
}
