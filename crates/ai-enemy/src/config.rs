//! Enemy tuning, loaded from YAML.

use std::path::Path;

use ai_core::Vec2;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EnemyResult};
use crate::world::FactionLayer;

/// Tuning for one enemy archetype.
///
/// Every field has a default, so a config file only lists what it overrides:
///
/// ```yaml
/// attack_range: 2.0
/// patrol_points:
///   - { x: 0.0, y: 0.0 }
///   - { x: 6.0, y: 0.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Upper bound of the attack band, in world units.
    pub attack_range: f32,

    /// Upper bound of the chase band, in world units.
    pub detection_range: f32,

    pub patrol_speed: f32,
    pub chase_speed: f32,

    /// Distance at which a patrol waypoint counts as reached.
    pub waypoint_tolerance: f32,

    /// Delay between launching an attack and its hit test.
    pub attack_windup_seconds: f32,

    /// How long `can_attack` stays false after the hit test.
    pub attack_cooldown_seconds: f32,

    pub attack_damage: u32,

    /// Radius of the hit-test circle.
    pub attack_radius: f32,

    /// Hit-test anchor relative to the enemy when facing right; mirrored when facing left.
    pub attack_offset: Vec2,

    pub stun_seconds: f32,

    /// Faction layer the hit test looks for.
    pub target_layer: FactionLayer,

    /// Patrol route, visited in order and wrapped around.
    pub patrol_points: Vec<Vec2>,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            attack_range: 1.5,
            detection_range: 8.0,
            patrol_speed: 2.0,
            chase_speed: 3.5,
            waypoint_tolerance: 0.5,
            attack_windup_seconds: 0.4,
            attack_cooldown_seconds: 1.0,
            attack_damage: 10,
            attack_radius: 0.6,
            attack_offset: Vec2::new(0.8, 0.0),
            stun_seconds: 1.5,
            target_layer: FactionLayer::PLAYER,
            patrol_points: Vec::new(),
        }
    }
}

impl EnemyConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read enemy config from {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load enemy config from {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(content: &str) -> EnemyResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> EnemyResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_patrol_points(mut self, points: impl IntoIterator<Item = Vec2>) -> Self {
        self.patrol_points = points.into_iter().collect();
        self
    }

    /// Reject values no enemy can be driven with.
    ///
    /// An attack band wider than the detection band is allowed; it only means
    /// the chase branch is never reached from inside the attack band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("attack_range", self.attack_range),
            ("detection_range", self.detection_range),
            ("patrol_speed", self.patrol_speed),
            ("chase_speed", self.chase_speed),
            ("attack_windup_seconds", self.attack_windup_seconds),
            ("attack_cooldown_seconds", self.attack_cooldown_seconds),
            ("attack_radius", self.attack_radius),
            ("stun_seconds", self.stun_seconds),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !self.waypoint_tolerance.is_finite() || self.waypoint_tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(self.waypoint_tolerance));
        }

        if !self.attack_offset.is_finite() {
            return Err(ConfigError::AttackOffset);
        }

        if let Some(index) = self.patrol_points.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::PatrolPoint { index });
        }

        Ok(())
    }
}
