//! Nexus powers and the effects they grant.
//!
//! Each nexus space carries one power for the whole game. The engine never
//! matches on power names: it asks the board whether a player holds a
//! given `PowerEffect`.

use serde::{Deserialize, Serialize};

/// Power attached to a nexus space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NexusPower {
    Speed,
    Vision,
    Strength,
    Recall,
    Shifting,
    Barriers,
    Momentum,
}

/// What holding a power does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerEffect {
    /// Roll one extra die when drafting first.
    ExtraDraftDie,
    /// See the opponent's unused dice.
    RevealOpponentDice,
    /// Own Warriors cannot be bumped.
    WarriorBumpImmunity,
    /// Return one used die to the pool once per turn.
    RecallUsedDie,
    /// Split one die's movement across two pieces.
    SplitMovement,
    /// Place a temporary blocking token.
    BarrierToken,
    /// Extra spaces when passing through.
    PassThroughBoost,
}

impl PowerEffect {
    /// Whether the rules engine applies this effect.
    ///
    /// The remaining effects are described for players but have no rule
    /// behind them yet.
    #[must_use]
    pub const fn is_enforced(self) -> bool {
        matches!(
            self,
            PowerEffect::ExtraDraftDie
                | PowerEffect::RevealOpponentDice
                | PowerEffect::WarriorBumpImmunity
        )
    }
}

impl NexusPower {
    /// Powers in board order (spaces 3, 6, 9, 12, 15, 18, 20).
    pub const ALL: [NexusPower; 7] = [
        NexusPower::Speed,
        NexusPower::Vision,
        NexusPower::Strength,
        NexusPower::Recall,
        NexusPower::Shifting,
        NexusPower::Barriers,
        NexusPower::Momentum,
    ];

    #[must_use]
    pub const fn effect(self) -> PowerEffect {
        match self {
            NexusPower::Speed => PowerEffect::ExtraDraftDie,
            NexusPower::Vision => PowerEffect::RevealOpponentDice,
            NexusPower::Strength => PowerEffect::WarriorBumpImmunity,
            NexusPower::Recall => PowerEffect::RecallUsedDie,
            NexusPower::Shifting => PowerEffect::SplitMovement,
            NexusPower::Barriers => PowerEffect::BarrierToken,
            NexusPower::Momentum => PowerEffect::PassThroughBoost,
        }
    }

    /// Display name, e.g. "Nexus of Speed".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NexusPower::Speed => "Nexus of Speed",
            NexusPower::Vision => "Nexus of Vision",
            NexusPower::Strength => "Nexus of Strength",
            NexusPower::Recall => "Nexus of Recall",
            NexusPower::Shifting => "Nexus of Shifting",
            NexusPower::Barriers => "Nexus of Barriers",
            NexusPower::Momentum => "Nexus of Momentum",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            NexusPower::Speed => "Draw +1 extra die during draft (once per round)",
            NexusPower::Vision => "See opponent's remaining dice",
            NexusPower::Strength => "Your Warriors cannot be bumped",
            NexusPower::Recall => "Once per turn, return one used die to your pool",
            NexusPower::Shifting => "Split movement across two pieces",
            NexusPower::Barriers => "Place a temporary block token",
            NexusPower::Momentum => "+2 spaces when passing through",
        }
    }
}

impl std::fmt::Display for NexusPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
