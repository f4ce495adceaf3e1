use ai_bt::BtStatus;
use ai_core::{AgentId, TickContext};
use ai_tools::{TraceEvent, Tracer};

use crate::combat;
use crate::config::EnemyConfig;
use crate::error::EnemyResult;
use crate::policy::{build_tree, EnemyTree};
use crate::state::{EnemyState, StateLabel};
use crate::world::EnemyWorldMut;

/// One enemy: its tuning, private state, decision tree and trace output.
///
/// Each frame [`tick`](Self::tick) first resolves every timer that became due,
/// then evaluates the tree once, so the tree never sees half-applied timer
/// effects.
pub struct EnemyBrain<W>
where
    W: EnemyWorldMut + 'static,
{
    pub agent: W::Agent,
    config: EnemyConfig,
    state: EnemyState,
    tree: EnemyTree<W>,
    pub tracer: Tracer,
}

impl<W> EnemyBrain<W>
where
    W: EnemyWorldMut + 'static,
{
    /// Validate `config` and build the decision tree for `agent`.
    pub fn new(agent: W::Agent, config: EnemyConfig) -> EnemyResult<Self> {
        config.validate()?;
        let tree = build_tree(&config);
        Ok(Self {
            agent,
            config,
            state: EnemyState::new(),
            tree,
            tracer: Tracer::new(),
        })
    }

    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn state(&self) -> &EnemyState {
        &self.state
    }

    /// Direct state access for hosts that restore or script agents.
    pub fn state_mut(&mut self) -> &mut EnemyState {
        &mut self.state
    }

    pub fn state_label(&self) -> StateLabel {
        self.state.label()
    }

    /// Root status from the most recent tick.
    pub fn last_status(&self) -> Option<BtStatus> {
        self.tree.last_status()
    }

    /// Resolve due timers, then evaluate the tree once.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> BtStatus {
        self.state.timers.advance(ctx.dt_seconds);
        while let Some(timer) = self.state.timers.pop_due() {
            tracing::debug!(agent = ?self.agent, ?timer, "timer fired");
            self.tracer
                .emit(TraceEvent::new(ctx.tick, "enemy.timer").with_a(timer.code()));
            combat::on_timer(&self.config, self.agent, world, &mut self.state, timer);
        }

        let before = self.state.label();
        let status = self.tree.evaluate(ctx, self.agent, world, &mut self.state);
        let after = self.state.label();
        if after != before {
            self.tracer.emit(
                TraceEvent::new(ctx.tick, "enemy.label")
                    .with_a(after.code())
                    .with_b(before.code()),
            );
        }
        status
    }

    /// Arm the stun lockout. Idempotent while already stunned; returns whether it armed.
    ///
    /// The lockout takes over on the next [`tick`](Self::tick). An attack that is
    /// already winding up is not interrupted.
    pub fn request_stun(&mut self, ctx: &TickContext, world: &mut W) -> bool {
        let armed = combat::request_stun(&self.config, self.agent, world, &mut self.state);
        if armed {
            self.tracer.emit(TraceEvent::new(ctx.tick, "enemy.stun"));
        }
        armed
    }
}

impl<W> core::fmt::Debug for EnemyBrain<W>
where
    W: EnemyWorldMut + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EnemyBrain")
            .field("agent", &self.agent)
            .field("state", &self.state)
            .field("last_status", &self.tree.last_status())
            .finish()
    }
}

/// Tick many enemies sharing one world, in stable-id order.
///
/// Each brain touches only its own state and timers; the world is the only
/// shared piece and is borrowed by one brain at a time.
pub fn tick_brains<W>(ctx: &TickContext, world: &mut W, brains: &mut [EnemyBrain<W>])
where
    W: EnemyWorldMut + 'static,
{
    brains.sort_by_key(|b| b.agent.stable_id());
    for brain in brains.iter_mut() {
        brain.tick(ctx, world);
    }
}
