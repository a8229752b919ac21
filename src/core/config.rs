//! Host and scene configuration.
//!
//! Loaded once at startup from an optional JSON document; every field has a
//! default so `{}` is a valid config.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::core::error::{HostError, HostResult};
use crate::core::logging;
use crate::input::camera_mover::CameraMode;

/// 60 Hz cadence used by the frame driver.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// How the host numbers mouse buttons before forwarding them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonScheme {
    /// `MouseEvent.button`: 0 = left, 1 = middle, 2 = right
    #[default]
    Button,
    /// Legacy `which`: 1 = left, 2 = middle, 3 = right
    Which,
}

impl ButtonScheme {
    /// Convert a raw button id into `MouseEvent.button` numbering.
    ///
    /// `which == 0` means "no button" and maps outside the known range.
    #[inline]
    pub fn normalize(self, raw: u32) -> u32 {
        match self {
            ButtonScheme::Button => raw,
            ButtonScheme::Which => raw.checked_sub(1).unwrap_or(u32::MAX),
        }
    }
}

/// Preview scene parameters consumed by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Bodies per lattice axis
    pub density: u32,
    /// Edge length of the enclosing box
    pub bounding_box_size: f64,
    /// Edge length of each lattice cube
    pub body_size: f64,
    /// Yaw per frame in radians
    pub spin_rate: f64,
    pub wheel_scale: f64,
    pub camera_mode: CameraMode,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            density: 3,
            bounding_box_size: 50.0,
            body_size: 3.0,
            spin_rate: 0.01,
            wheel_scale: 2.0,
            camera_mode: CameraMode::Rel,
        }
    }
}

impl SceneSettings {
    pub fn validate(&self) -> HostResult<()> {
        if self.density == 0 {
            return Err(HostError::InvalidConfig("scene density must be at least 1".into()));
        }
        if !(self.bounding_box_size > 0.0) || !(self.body_size > 0.0) {
            return Err(HostError::InvalidConfig("scene sizes must be positive".into()));
        }
        let n = f64::from(self.density);
        if self.body_size * n > self.bounding_box_size {
            return Err(HostError::InvalidConfig(format!(
                "{} bodies of size {} do not fit a box of {}",
                self.density, self.body_size, self.bounding_box_size
            )));
        }
        Ok(())
    }
}

/// Host shell configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub width: u32,
    pub height: u32,
    pub frame_interval_ms: f64,
    /// Extra init parameter; overrides `scene.density` when set
    pub scene_density: Option<u32>,
    /// Forward wheel events
    pub wheel: bool,
    pub button_scheme: ButtonScheme,
    pub log_level: String,
    pub perf_metrics: bool,
    pub scene: SceneSettings,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frame_interval_ms: FRAME_INTERVAL_MS,
            scene_density: None,
            wheel: true,
            button_scheme: ButtonScheme::Button,
            log_level: "info".to_string(),
            perf_metrics: false,
            scene: SceneSettings::default(),
        }
    }
}

impl HostConfig {
    pub fn from_json(json: &str) -> HostResult<Self> {
        let config: HostConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HostResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HostError::InvalidConfig(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.frame_interval_ms > 0.0) {
            return Err(HostError::InvalidConfig("frame interval must be positive".into()));
        }
        self.scene_settings().validate()
    }

    /// Scene settings with the init-parameter override applied.
    pub fn scene_settings(&self) -> SceneSettings {
        let mut settings = self.scene.clone();
        if let Some(n) = self.scene_density {
            settings.density = n;
        }
        settings
    }

    /// Interval in whole milliseconds for the browser timer.
    pub fn interval_millis(&self) -> u32 {
        self.frame_interval_ms.trunc().max(1.0) as u32
    }

    pub fn log_level(&self) -> LevelFilter {
        logging::parse_level(&self.log_level).unwrap_or_else(|| {
            log::warn!("unknown log level {:?}, using info", self.log_level);
            LevelFilter::Info
        })
    }
}
