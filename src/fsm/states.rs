//! Concrete phase handlers and table builder.
//!
//! Each phase is a plain `fn` pointer — no closures, no heap.
//!
//! ```text
//!  FORCED ──[water < max]──▶ fill (stays FORCED until a drain)
//!    │
//!  [water ≥ max]
//!    ▼
//!  COOL DOWN ──[water ≤ min, period elapsed]──▶ ACTIVE
//!    ▲                                            │
//!    └───────────────[water ≥ max]: drain ────────┘
//!
//!  ACTIVE: water ≤ min and soil dry → fill, otherwise keep the valve shut
//! ```

use log::{debug, info, warn};

use super::context::DecisionContext;
use super::{Action, Phase, PhaseDescriptor};
use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static phase table.  Called once when the process is built.
pub fn build_phase_table() -> [PhaseDescriptor; Phase::COUNT] {
    [
        // Index 0 — CoolDown
        PhaseDescriptor {
            id: Phase::CoolDown,
            name: "CoolDown",
            decide: cool_down_decide,
        },
        // Index 1 — Active
        PhaseDescriptor {
            id: Phase::Active,
            name: "Active",
            decide: active_decide,
        },
        // Index 2 — Forced
        PhaseDescriptor {
            id: Phase::Forced,
            name: "Forced",
            decide: forced_decide,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  COOL DOWN — release pressure, never refill
// ═══════════════════════════════════════════════════════════════════════════

fn cool_down_decide(ctx: &DecisionContext<'_>) -> Result<Action> {
    if !ctx.water_level_min()? {
        info!("COOL DOWN: water above minimum, continuing to drain");
        return Ok(Action::Drain);
    }

    if ctx.cool_down_elapsed() {
        info!(
            "COOL DOWN: drained and rested for {} ticks, returning to active",
            ctx.ticks_in_phase
        );
        return Ok(Action::EndCoolDown);
    }

    debug!("COOL DOWN: water at minimum, closing valve");
    Ok(Action::CloseValve)
}

// ═══════════════════════════════════════════════════════════════════════════
//  ACTIVE — fill when the container is empty and the soil is dry
// ═══════════════════════════════════════════════════════════════════════════

fn active_decide(ctx: &DecisionContext<'_>) -> Result<Action> {
    if ctx.water_level_max()? {
        info!("ACTIVE: water at maximum, draining");
        return Ok(Action::Drain);
    }

    if ctx.water_level_min()? {
        if ctx.moisture_level_min()? {
            info!("ACTIVE: water and moisture at minimum, filling");
            return Ok(Action::Fill);
        }
        debug!("ACTIVE: water at minimum, soil still moist, closing valve");
        return Ok(Action::CloseValve);
    }

    // Between the thresholds: hold whatever water is in the container.
    debug!("ACTIVE: water between thresholds, keeping valve closed");
    Ok(Action::CloseValve)
}

// ═══════════════════════════════════════════════════════════════════════════
//  FORCED — neither flag set (cold boot): water unless already full
// ═══════════════════════════════════════════════════════════════════════════

fn forced_decide(ctx: &DecisionContext<'_>) -> Result<Action> {
    if ctx.water_level_max()? {
        warn!("FORCED: water already at maximum when forcing a watering cycle, draining");
        return Ok(Action::Drain);
    }

    info!("FORCED: forcing a watering cycle");
    Ok(Action::Fill)
}
