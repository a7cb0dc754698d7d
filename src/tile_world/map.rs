use super::tile::*;
use crate::error::*;
use crate::geo::*;
use serde::*;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// grid geometry of a level
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MapLayout {
    pub level_width: Int,
    pub level_height: Int,
    pub tile_width: Int,
    pub tile_height: Int,
}

impl Default for MapLayout {
    fn default() -> Self {
        MapLayout {
            level_width: 1280,
            level_height: 960,
            tile_width: 80,
            tile_height: 80,
        }
    }
}

impl MapLayout {
    pub fn columns(&self) -> usize {
        (self.level_width / self.tile_width.max(1)).max(0) as usize
    }

    pub fn rows(&self) -> usize {
        (self.level_height / self.tile_height.max(1)).max(0) as usize
    }

    /// how many codes a map file for this layout holds
    pub fn total_tiles(&self) -> usize {
        self.columns() * self.rows()
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.level_width, self.level_height)
    }

    /// tiles must have area and tile the level exactly
    pub fn validate(&self) -> std::result::Result<(), MapLoadError> {
        let fits = self.tile_width > 0
            && self.tile_height > 0
            && self.level_width > 0
            && self.level_height > 0
            && self.level_width % self.tile_width == 0
            && self.level_height % self.tile_height == 0;
        if fits {
            Ok(())
        } else {
            Err(MapLoadError::InvalidLayout {
                level_width: self.level_width,
                level_height: self.level_height,
                tile_width: self.tile_width,
                tile_height: self.tile_height,
            })
        }
    }

    /// box of the tile at `index`, counted row major
    pub fn tile_bounds(&self, index: usize) -> Rect {
        let columns = self.columns().max(1);
        let (column, row) = ((index % columns) as Int, (index / columns) as Int);
        Rect::new(
            column * self.tile_width,
            row * self.tile_height,
            self.tile_width,
            self.tile_height,
        )
    }
}

/// reads exactly `layout.total_tiles()` codes, row major. a layout whose
/// tiles do not divide the level is rejected before anything is read
pub fn parse_tiles(source: &str, layout: &MapLayout) -> std::result::Result<Vec<Tile>, MapLoadError> {
    layout.validate()?;
    let total = layout.total_tiles();
    let mut tokens = source.split_whitespace();
    let mut tiles = Vec::with_capacity(total);
    for index in 0..total {
        let token = tokens
            .next()
            .ok_or(MapLoadError::UnexpectedEnd { index })?;
        let code: i64 = token.parse().map_err(|_| MapLoadError::InvalidToken {
            index,
            token: token.to_owned(),
        })?;
        let kind =
            TileType::from_code(code).ok_or(MapLoadError::InvalidTileType { index, code })?;
        tiles.push(Tile::new(layout.tile_bounds(index), kind));
    }
    let trailing = tokens.count();
    if trailing > 0 {
        return Err(MapLoadError::TrailingData { count: trailing });
    }
    debug!(tiles = tiles.len(), "parsed tile map");
    Ok(tiles)
}

pub fn load_tiles(path: impl AsRef<Path>, layout: &MapLayout) -> Result<Vec<Tile>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::ResourceUnavailable {
        path: path.to_owned(),
        source,
    })?;
    let tiles = parse_tiles(&source, layout)?;
    info!(path = %path.display(), tiles = tiles.len(), "loaded tile map");
    Ok(tiles)
}
