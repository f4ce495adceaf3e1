use thiserror::Error;

/// A field of [`EnemyConfig`](crate::EnemyConfig) that failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and non-negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("waypoint_tolerance must be positive (got {0})")]
    Tolerance(f32),

    #[error("attack_offset must be finite")]
    AttackOffset,

    #[error("patrol point {index} is not finite")]
    PatrolPoint { index: usize },
}

#[derive(Debug, Error)]
pub enum EnemyError {
    #[error("invalid enemy config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to parse enemy config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type EnemyResult<T> = Result<T, EnemyError>;
