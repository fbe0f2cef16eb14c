//! Simulator configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use board_core::DepthSign;

/// Settings that sit outside the game rules: where content lives and how the
/// frame loop is clocked.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub data_dir: PathBuf,
    /// Seconds advanced per simulated frame.
    pub frame_dt: f32,
    /// Overrides the depth convention from `config.toml` when set.
    pub depth_sign: Option<DepthSign>,
}

impl SimConfig {
    pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOARD_DATA_DIR` - Content directory (default: `data`)
    /// - `BOARD_FRAME_DT` - Seconds per frame (default: 1/60)
    /// - `BOARD_DEPTH_SIGN` - `negative` or `positive` (default: from config)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BOARD_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(frame_dt) = read_env::<f32>("BOARD_FRAME_DT")
            && frame_dt.is_finite()
            && frame_dt > 0.0
        {
            config.frame_dt = frame_dt;
        }

        config.depth_sign = read_env::<DepthSign>("BOARD_DEPTH_SIGN");

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            frame_dt: Self::DEFAULT_FRAME_DT,
            depth_sign: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
