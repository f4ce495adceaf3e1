use ai_core::TimerQueue;
use serde::{Deserialize, Serialize};

/// Human-readable behavior label for observers (animation, debug overlays).
///
/// Written by the policy's action leaves, never read back by any node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StateLabel {
    #[default]
    Patrol,
    Chase,
    Attack,
    Stunned,
    Retreat,
}

impl StateLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StateLabel::Patrol => "Patrol",
            StateLabel::Chase => "Chase",
            StateLabel::Attack => "Attack",
            StateLabel::Stunned => "Stunned",
            StateLabel::Retreat => "Retreat",
        }
    }

    /// Stable numeric code used in trace payloads.
    pub fn code(self) -> u64 {
        match self {
            StateLabel::Patrol => 0,
            StateLabel::Chase => 1,
            StateLabel::Attack => 2,
            StateLabel::Stunned => 3,
            StateLabel::Retreat => 4,
        }
    }
}

impl core::fmt::Display for StateLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal movement component; `None` when there is none.
    pub fn from_dx(dx: f32) -> Option<Facing> {
        if dx > f32::EPSILON {
            Some(Facing::Right)
        } else if dx < -f32::EPSILON {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Progress of the attack sub-behavior.
///
/// `Idle -> Windup -> (hit test) -> Cooldown -> Idle`. The hit test is the
/// transition out of `Windup`, driven by [`EnemyTimer::AttackHit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackPhase {
    #[default]
    Idle,
    Windup,
    Cooldown,
}

/// Deferred events owned by one enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyTimer {
    /// Windup finished: run the hit test and start the cooldown.
    AttackHit,
    /// Cooldown finished: attacks are allowed again.
    AttackReady,
    /// Stun lockout finished.
    StunOver,
}

impl EnemyTimer {
    pub fn code(self) -> u64 {
        match self {
            EnemyTimer::AttackHit => 0,
            EnemyTimer::AttackReady => 1,
            EnemyTimer::StunOver => 2,
        }
    }
}

/// Mutable record owned by exactly one enemy, read and written by its tree and timers.
#[derive(Debug, Clone)]
pub struct EnemyState {
    label: StateLabel,
    pub is_stunned: bool,
    /// Cooldown gate for the attack branch.
    pub can_attack: bool,
    pub waypoint_index: usize,
    pub facing: Facing,
    pub attack: AttackPhase,
    pub(crate) timers: TimerQueue<EnemyTimer>,
}

impl Default for EnemyState {
    fn default() -> Self {
        Self {
            label: StateLabel::Patrol,
            is_stunned: false,
            can_attack: true,
            waypoint_index: 0,
            facing: Facing::Right,
            attack: AttackPhase::Idle,
            timers: TimerQueue::new(),
        }
    }
}

impl EnemyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> StateLabel {
        self.label
    }

    /// Returns `true` when the label actually changed.
    pub(crate) fn set_label(&mut self, label: StateLabel) -> bool {
        let changed = self.label != label;
        self.label = label;
        changed
    }

    pub fn timers(&self) -> &TimerQueue<EnemyTimer> {
        &self.timers
    }

    pub fn is_attacking(&self) -> bool {
        self.attack != AttackPhase::Idle
    }
}
