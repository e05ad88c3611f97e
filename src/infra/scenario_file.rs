use std::{collections::VecDeque, fs, path::Path};

use anyhow::Result;

use crate::{
    domain::{frame::FrameSnapshot, scenario::Scenario},
    infra::error::AppError,
    usecases::contracts::FrameFeed,
};

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ScenarioRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| AppError::ScenarioParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_frames(path: &Path) -> Result<Vec<FrameSnapshot>, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::FrameRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| AppError::FrameParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Frame feed backed by a pre-recorded frame sequence, served in order.
#[derive(Debug, Default)]
pub struct FileFrameFeed {
    frames: VecDeque<FrameSnapshot>,
}

impl FileFrameFeed {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        Ok(Self::from_frames(load_frames(path)?))
    }

    pub fn from_frames(frames: Vec<FrameSnapshot>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl FrameFeed for FileFrameFeed {
    fn next_frame(&mut self) -> Result<Option<FrameSnapshot>> {
        Ok(self.frames.pop_front())
    }
}
