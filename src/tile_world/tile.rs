use crate::geo::*;
use serde::*;

/// index into the tile sprite sheet
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TileType(pub u8);

impl TileType {
    pub const RED: TileType = TileType(0);
    pub const GREEN: TileType = TileType(1);
    pub const BLUE: TileType = TileType(2);
    pub const CENTER: TileType = TileType(3);
    pub const TOP: TileType = TileType(4);
    pub const TOP_RIGHT: TileType = TileType(5);
    pub const RIGHT: TileType = TileType(6);
    pub const BOTTOM_RIGHT: TileType = TileType(7);
    pub const BOTTOM: TileType = TileType(8);
    pub const BOTTOM_LEFT: TileType = TileType(9);
    pub const LEFT: TileType = TileType(10);
    pub const TOP_LEFT: TileType = TileType(11);

    /// number of sprites on the sheet. valid codes are `0..TOTAL_SPRITES`
    pub const TOTAL_SPRITES: u8 = 12;

    pub fn from_code(code: i64) -> Option<TileType> {
        if code >= 0 && code < TileType::TOTAL_SPRITES as i64 {
            Some(TileType(code as u8))
        } else {
            None
        }
    }

    /// the structural band `CENTER..=TOP_LEFT` blocks movement, the plain
    /// colored tiles are floor
    pub fn is_wall(self) -> bool {
        self.0 >= TileType::CENTER.0 && self.0 <= TileType::TOP_LEFT.0
    }

    /// where this sprite sits on the sheet. the sheet is four columns of
    /// three rows:
    ///
    /// | red   | top left    | top    | top right    |
    /// | green | left        | center | right        |
    /// | blue  | bottom left | bottom | bottom right |
    pub fn sprite_clip(self, tile_width: Int, tile_height: Int) -> Rect {
        let (column, row) = match self {
            TileType::RED => (0, 0),
            TileType::GREEN => (0, 1),
            TileType::BLUE => (0, 2),
            TileType::TOP_LEFT => (1, 0),
            TileType::LEFT => (1, 1),
            TileType::BOTTOM_LEFT => (1, 2),
            TileType::TOP => (2, 0),
            TileType::CENTER => (2, 1),
            TileType::BOTTOM => (2, 2),
            TileType::TOP_RIGHT => (3, 0),
            TileType::RIGHT => (3, 1),
            TileType::BOTTOM_RIGHT => (3, 2),
            // from_code keeps everything else out
            TileType(_) => (0, 0),
        };
        Rect::new(
            column * tile_width,
            row * tile_height,
            tile_width,
            tile_height,
        )
    }
}

/// one grid cell of the level. never changes after loading
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tile {
    bounds: Rect,
    kind: TileType,
}

impl Tile {
    pub fn new(bounds: Rect, kind: TileType) -> Tile {
        Tile { bounds, kind }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn kind(&self) -> TileType {
        self.kind
    }

    pub fn is_wall(&self) -> bool {
        self.kind.is_wall()
    }
}
