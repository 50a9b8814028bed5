use std::path::Path;

use navpuck_base::{Result, ensure_positive};
use serde::{Deserialize, Serialize};

use super::ui::{Vec2, vec2};
use super::widget::LayoutKind;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub zoom_factor: f64,
    pub orbit_sensitivity: f64,
    pub snap_angle_deg: f64,
    pub min_view_distance: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            zoom_factor: 0.02,
            orbit_sensitivity: 0.005,
            snap_angle_deg: 15.0,
            min_view_distance: 0.1,
        }
    }
}

impl NavigationConfig {
    pub fn snap_angle(&self) -> f64 {
        self.snap_angle_deg.to_radians()
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("navigation.zoom_factor", self.zoom_factor)?;
        ensure_positive("navigation.orbit_sensitivity", self.orbit_sensitivity)?;
        ensure_positive("navigation.snap_angle_deg", self.snap_angle_deg)?;
        ensure_positive("navigation.min_view_distance", self.min_view_distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub layout: LayoutKind,
    pub spacing: f32,
    pub button_size: [f32; 2],
    pub auto_dismiss_distance: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Grid,
            spacing: 8.0,
            button_size: [60.0, 60.0],
            auto_dismiss_distance: 100.0,
        }
    }
}

impl WidgetConfig {
    pub fn button_size(&self) -> Vec2 {
        vec2(self.button_size[0], self.button_size[1])
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("widget.button_size[0]", self.button_size[0] as f64)?;
        ensure_positive("widget.button_size[1]", self.button_size[1] as f64)?;
        ensure_positive(
            "widget.auto_dismiss_distance",
            self.auto_dismiss_distance as f64,
        )?;
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(navpuck_base::Error::InvalidParameter(
                "widget.spacing must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuckConfig {
    pub navigation: NavigationConfig,
    pub widget: WidgetConfig,
}

impl PuckConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.navigation.validate()?;
        self.widget.validate()
    }
}
