//! Events emitted by the simulation for renderer, audio and UI feedback.
//!
//! Fire-and-forget: the simulation collects them during a tick and hands
//! them out with the snapshot. Nothing in the core reads them back.

use serde::Serialize;

use crate::enums::{AbilitySlot, MatchOutcome, StatusId};
use crate::types::{ActorId, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    AbilityUsed {
        actor: ActorId,
        slot: AbilitySlot,
        ability: &'static str,
    },
    Hit {
        target: ActorId,
        source: Option<ActorId>,
        amount: f64,
        absorbed: f64,
    },
    Healed {
        target: ActorId,
        amount: f64,
    },
    StatusApplied {
        target: ActorId,
        status: StatusId,
        debuff: bool,
    },
    Downed {
        actor: ActorId,
        by: Option<ActorId>,
    },
    Revived {
        actor: ActorId,
    },
    WildlifeEaten {
        monster: ActorId,
        food_value: f64,
    },
    Evolved {
        monster: ActorId,
        stage: u8,
    },
    Explosion {
        position: Vec2,
        radius: f64,
    },
    TrapPlaced {
        position: Vec2,
    },
    TrapTriggered {
        position: Vec2,
        victim: ActorId,
    },
    DomeRaised {
        position: Vec2,
        radius: f64,
    },
    DomeCollapsed,
    MatchEnded {
        outcome: MatchOutcome,
    },
}
