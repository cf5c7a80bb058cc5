//! Function-pointer phase table for the watering state machine.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  PhaseTable                                   │
//! │  ┌──────────┬──────────────────────────────┐  │
//! │  │ Phase    │ decide                       │  │
//! │  ├──────────┼──────────────────────────────┤  │
//! │  │ CoolDown │ fn(&ctx) -> Result<Action>   │  │
//! │  │ Active   │ fn(&ctx) -> Result<Action>   │  │
//! │  │ Forced   │ fn(&ctx) -> Result<Action>   │  │
//! │  └──────────┴──────────────────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Each tick the process looks up the row for the current [`Phase`] and
//! calls its `decide` handler with a read-only [`DecisionContext`].  The
//! handler only *chooses* an [`Action`]; applying it (controller calls and
//! state flag updates) is the process's job.  Phases are not stored
//! separately: they are derived from the state flags every tick.

pub mod context;
pub mod states;

use serde::Serialize;

use crate::error::Result;
use context::DecisionContext;

// ---------------------------------------------------------------------------
// Phase identity
// ---------------------------------------------------------------------------

/// Phases of the watering cycle.
/// Must stay in sync with the table built in [`states::build_phase_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Phase {
    /// Post-watering: pump off, valve open, draining.  No fills.
    CoolDown = 0,
    /// A fill may start if the thresholds call for one.
    Active = 1,
    /// Neither flag set (cold boot): watering is forced unless the tank
    /// is already full.
    Forced = 2,
}

impl Phase {
    /// Total number of phases — used to size the table array.
    pub const COUNT: usize = 3;
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// What the process does this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Close the drain valve; nothing else changes.
    CloseValve,
    /// Pump off → valve open → clear watering cycle → enter cool-down.
    Drain,
    /// Valve closed → pump on → mark watering cycle.  Phase unchanged.
    Fill,
    /// Close the valve and leave cool-down for active.
    EndCoolDown,
}

/// Actuator mirrors and the watering-cycle flag after a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusFlags {
    pub pump_on: bool,
    pub valve_closed: bool,
    pub watering_cycle: bool,
}

/// Outcome of one process tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub phase_before: Phase,
    pub action: Action,
    pub phase_after: Phase,
    pub status: StatusFlags,
}

impl TickReport {
    pub fn phase_changed(&self) -> bool {
        self.phase_before != self.phase_after
    }
}

// ---------------------------------------------------------------------------
// Phase descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Signature for the per-tick decision handler.
pub type DecideFn = fn(&DecisionContext<'_>) -> Result<Action>;

/// Static descriptor for a single phase.
pub struct PhaseDescriptor {
    pub id: Phase,
    pub name: &'static str,
    pub decide: DecideFn,
}

/// Fixed-size table indexed by `Phase as usize`.
pub struct PhaseTable {
    rows: [PhaseDescriptor; Phase::COUNT],
}

impl PhaseTable {
    pub fn new(rows: [PhaseDescriptor; Phase::COUNT]) -> Self {
        Self { rows }
    }

    pub fn name(&self, phase: Phase) -> &'static str {
        self.rows[phase as usize].name
    }

    /// Run the decision handler for `ctx`'s current phase.
    pub fn decide(&self, ctx: &DecisionContext<'_>) -> Result<Action> {
        let row = &self.rows[ctx.phase() as usize];
        debug_assert_eq!(row.id, ctx.phase());
        (row.decide)(ctx)
    }
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self::new(states::build_phase_table())
    }
}
