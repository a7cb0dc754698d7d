//! The static level: a grid of tiles, some of which are walls, seen through
//! a scrolling camera.

pub mod camera;
pub mod map;
pub mod tile;

pub use camera::*;
pub use map::*;
pub use tile::*;

use crate::error::Result;
use crate::geo::*;
use crate::render::{Canvas, Texture};
use std::path::Path;

pub struct TileWorld {
    layout: MapLayout,
    tiles: Vec<Tile>,
}

impl TileWorld {
    pub fn new(layout: MapLayout, tiles: Vec<Tile>) -> TileWorld {
        TileWorld { layout, tiles }
    }

    pub fn parse(source: &str, layout: MapLayout) -> Result<TileWorld> {
        let tiles = parse_tiles(source, &layout)?;
        Ok(TileWorld::new(layout, tiles))
    }

    pub fn load(path: impl AsRef<Path>, layout: MapLayout) -> Result<TileWorld> {
        let tiles = load_tiles(path, &layout)?;
        Ok(TileWorld::new(layout, tiles))
    }

    pub fn bounds(&self) -> Rect {
        self.layout.bounds()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn walls(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_wall())
    }

    /// wether `rect` overlaps any wall tile
    pub fn touches_wall(&self, rect: &Rect) -> bool {
        self.walls().any(|t| rect_overlap(rect, t.bounds()))
    }

    pub fn visible_tiles<'a>(&'a self, camera: &'a Camera) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles.iter().filter(move |t| camera.is_visible(t.bounds()))
    }

    /// draws the tiles inside the camera, clipped from the tile sheet.
    /// returns how many were drawn
    pub fn render_visible(&self, canvas: &mut impl Canvas, camera: &Camera) -> usize {
        let mut drawn = 0;
        for tile in self.visible_tiles(camera) {
            let clip = tile
                .kind()
                .sprite_clip(self.layout.tile_width, self.layout.tile_height);
            canvas.copy(Texture::Tiles, Some(clip), camera.to_screen(tile.bounds().origin));
            drawn += 1;
        }
        drawn
    }
}

impl Obstacle for TileWorld {
    fn blocks(&self, collider: &Collider) -> bool {
        self.walls().any(|t| collider.does_collide(t.bounds()))
    }
}
