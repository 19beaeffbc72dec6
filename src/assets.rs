use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::{GAME_OVER_FRAME, GARBAGE_CATEGORY, ROCKET_CATEGORY};
use crate::error::{GameError, Result};
use crate::frame::Frame;

/// Where sprites come from. Loading happens once at startup; tasks only ever
/// see the resulting frames.
pub trait FrameSource {
    fn load_frame(&self, id: &str) -> Result<Frame>;
    fn load_frame_set(&self, category: &str) -> Result<Vec<Frame>>;
}

const ROCKET_FRAME_1: &str = "  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n  )\n ( )";
const ROCKET_FRAME_2: &str = "  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n  )\n ( )\n  (";

const GARBAGE_FRAMES: &[&str] = &[
    " __\n(  )\n ||\n ||",
    " ___\n|___|",
    " _______\n|_|_|_|_|\n|_______|",
    "  _\n>(.)__\n (___/",
    "  .-.\n /___\\\n |[ ]|====\n '---'",
];

const GAME_OVER: &str = concat!(
    r"  ____                         ___",
    "\n",
    r" / ___| __ _ _ __ ___   ___   / _ \__   _____ _ __",
    "\n",
    r"| |  _ / _` | '_ ` _ \ / _ \ | | | \ \ / / _ \ '__|",
    "\n",
    r"| |_| | (_| | | | | | |  __/ | |_| |\ V /  __/ |",
    "\n",
    r" \____|\__,_|_| |_| |_|\___|  \___/  \_/ \___|_|",
);

/// Sprites compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinAssets;

impl FrameSource for BuiltinAssets {
    fn load_frame(&self, id: &str) -> Result<Frame> {
        match id {
            GAME_OVER_FRAME => Ok(Frame::new(GAME_OVER)),
            _ => Err(GameError::AssetMissing(format!("no built-in frame '{}'", id))),
        }
    }

    fn load_frame_set(&self, category: &str) -> Result<Vec<Frame>> {
        match category {
            ROCKET_CATEGORY => Ok(vec![Frame::new(ROCKET_FRAME_1), Frame::new(ROCKET_FRAME_2)]),
            GARBAGE_CATEGORY => Ok(GARBAGE_FRAMES.iter().map(|text| Frame::new(text)).collect()),
            _ => Err(GameError::AssetMissing(format!("no built-in category '{}'", category))),
        }
    }
}

/// Sprites read from a directory: `<root>/<id>.txt` for single frames and
/// `<root>/<category>/*.txt` for sets.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirAssets { root: root.into() }
    }

    fn read(path: &Path) -> Result<Frame> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Frame::new(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(GameError::AssetMissing(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl FrameSource for DirAssets {
    fn load_frame(&self, id: &str) -> Result<Frame> {
        let path = self.root.join(format!("{}.txt", id));
        debug!("Loading frame {}", path.display());
        Self::read(&path)
    }

    fn load_frame_set(&self, category: &str) -> Result<Vec<Frame>> {
        let dir = self.root.join(category);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GameError::AssetMissing(dir.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                paths.push(path);
            }
        }
        paths.sort();

        let frames = paths.iter().map(|path| Self::read(path)).collect::<Result<Vec<_>>>()?;
        info!("Loaded {} frames from {}", frames.len(), dir.display());
        Ok(frames)
    }
}
