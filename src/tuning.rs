//! Device tuning presets
//!
//! Chosen once at startup from a coarse screen-size check and never revisited.

use serde::{Deserialize, Serialize};

/// Coarse device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceProfile {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceProfile::Desktop => "Desktop",
            DeviceProfile::Mobile => "Mobile",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "desktop" | "pc" => Some(DeviceProfile::Desktop),
            "mobile" | "phone" => Some(DeviceProfile::Mobile),
            _ => None,
        }
    }

    /// Profile for a media-query result on `(max-width: 600px)`
    pub fn from_small_screen(matches: bool) -> Self {
        if matches {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }
}

/// Starting speeds for a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball vertical speed before the first serve
    pub initial_velocity_y: f32,
    /// Ball horizontal speed before the first paddle contact
    pub initial_velocity_x: f32,
    /// Opponent paddle step per tick
    pub ai_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_profile(DeviceProfile::Desktop)
    }
}

impl Tuning {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        match profile {
            DeviceProfile::Desktop => Self {
                initial_velocity_y: -1.0,
                initial_velocity_x: -1.0,
                ai_speed: 3.0,
            },
            DeviceProfile::Mobile => Self {
                initial_velocity_y: -2.0,
                initial_velocity_x: -2.0,
                ai_speed: 4.0,
            },
        }
    }

    /// Parse an override; missing fields take the desktop preset
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
