use core::fmt::Debug;

/// Stable identifier for an agent.
///
/// Multi-agent stepping sorts by `stable_id` so that every run visits agents
/// in the same order regardless of how the host stores them.
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        u64::from(self)
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

/// Read-only world access.
///
/// This trait only names the agent handle type. Consumers that need queries
/// (positions, targets, area checks) define extension traits on top of it.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
