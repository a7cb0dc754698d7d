use crate::entity::RandomWalk;
use crate::error::*;
use crate::geo::*;
use crate::tile_world::MapLayout;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// everything the demo can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: Int,
    pub screen_height: Int,
    pub layout: MapLayout,
    pub map_path: PathBuf,
    pub player_start: P2,
    /// per key velocity of the player
    pub player_step: Int,
    pub enemy_count: usize,
    pub enemy_spawn: P2,
    pub enemy_walk: RandomWalk,
    pub particle_count: usize,
    /// extra obstacles on top of the wall tiles
    pub obstacles: Vec<Geo>,
    /// `None` runs uncapped
    pub frame_cap: Option<u32>,
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_width: 640,
            screen_height: 480,
            layout: MapLayout::default(),
            map_path: PathBuf::from("assets/lazy.map"),
            player_start: P2::new(100, 100),
            player_step: crate::entity::DOT_VEL,
            enemy_count: 500,
            enemy_spawn: P2::new(100, 480),
            enemy_walk: RandomWalk::default(),
            particle_count: 20,
            obstacles: Vec::new(),
            frame_cap: None,
            seed: 0xcafef00dd15ea5e5,
        }
    }
}

impl Settings {
    /// defaults when the file is missing, an error when it is malformed
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let settings = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                    Error::Settings {
                        path: path.to_owned(),
                        source,
                    }
                })?;
                info!(path = %path.display(), "read settings");
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            Err(source) => Err(Error::ResourceUnavailable {
                path: path.to_owned(),
                source,
            }),
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::ResourceUnavailable {
            path: path.to_owned(),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|source| {
            Error::Settings {
                path: path.to_owned(),
                source,
            }
        })
    }

    pub fn screen(&self) -> Rect {
        Rect::from_size(self.screen_width, self.screen_height)
    }
}
