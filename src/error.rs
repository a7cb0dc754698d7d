use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// reasons a tile map could not be read. no tiles are handed out when one of
/// these is returned
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapLoadError {
    /// the map ran out before tile `index`
    UnexpectedEnd { index: usize },
    /// tile `index` is not an integer
    InvalidToken { index: usize, token: String },
    /// tile `index` names a sprite that does not exist
    InvalidTileType { index: usize, code: i64 },
    /// `count` values follow the last tile
    TrailingData { count: usize },
    /// the tile size is not positive or does not divide the level size
    InvalidLayout {
        level_width: i32,
        level_height: i32,
        tile_width: i32,
        tile_height: i32,
    },
}

impl fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MapLoadError::UnexpectedEnd { index } => {
                write!(f, "unexpected end of file at tile {}", index)
            }
            MapLoadError::InvalidToken { index, token } => {
                write!(f, "tile {} is not a number: {:?}", index, token)
            }
            MapLoadError::InvalidTileType { index, code } => {
                write!(f, "invalid tile type {} at tile {}", code, index)
            }
            MapLoadError::TrailingData { count } => {
                write!(f, "{} values after the last tile", count)
            }
            MapLoadError::InvalidLayout {
                level_width,
                level_height,
                tile_width,
                tile_height,
            } => write!(
                f,
                "{}x{} tiles do not fit a {}x{} level",
                tile_width, tile_height, level_width, level_height
            ),
        }
    }
}

impl StdError for MapLoadError {}

#[derive(Debug)]
pub enum Error {
    /// an asset or the map file could not be opened
    ResourceUnavailable { path: PathBuf, source: io::Error },
    MapLoad(MapLoadError),
    /// the settings file exists but is not valid
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ResourceUnavailable { path, source } => {
                write!(f, "unable to load {}: {}", path.display(), source)
            }
            Error::MapLoad(e) => write!(f, "error loading map: {}", e),
            Error::Settings { path, source } => {
                write!(f, "malformed settings in {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::ResourceUnavailable { source, .. } => Some(source),
            Error::MapLoad(e) => Some(e),
            Error::Settings { source, .. } => Some(source),
        }
    }
}

impl From<MapLoadError> for Error {
    fn from(e: MapLoadError) -> Self {
        Error::MapLoad(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
