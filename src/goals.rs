//! Health goals and goal-driven nutrient prioritization
//!
//! Each goal maps to a fixed, ordered nutrient priority list used to sort
//! and tie-break nutrient gaps. A flat lookup table keeps the mapping
//! auditable and testable in isolation; there is no per-user configuration.

use serde::{Deserialize, Serialize};

use crate::models::Nutrient;

/// Priority assigned to nutrients absent from a goal's list: they sort
/// after every listed nutrient, preserving input order among themselves.
pub const UNRANKED_PRIORITY: usize = 99;

// ---------------------------------------------------------------------------
/// Health Goal: closed enumeration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    LoseWeight,
    GainMuscle,
    MaintainWeight,
    #[default]
    GeneralWellness,
    Pregnancy,
    HeartHealth,
    EnergyBoost,
    BoneHealth,
}

impl std::fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::LoseWeight => "lose_weight",
            Self::GainMuscle => "gain_muscle",
            Self::MaintainWeight => "maintain_weight",
            Self::GeneralWellness => "general_wellness",
            Self::Pregnancy => "pregnancy",
            Self::HeartHealth => "heart_health",
            Self::EnergyBoost => "energy_boost",
            Self::BoneHealth => "bone_health",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for HealthGoal {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose_weight" => Ok(Self::LoseWeight),
            "gain_muscle" => Ok(Self::GainMuscle),
            "maintain_weight" => Ok(Self::MaintainWeight),
            "general_wellness" => Ok(Self::GeneralWellness),
            "pregnancy" => Ok(Self::Pregnancy),
            "heart_health" => Ok(Self::HeartHealth),
            "energy_boost" => Ok(Self::EnergyBoost),
            "bone_health" => Ok(Self::BoneHealth),
            _ => Err(format!("Unknown health goal: {}", s)),
        }
    }
}

impl HealthGoal {
    /// Parse a stored goal string, falling back to general wellness.
    ///
    /// Unrecognized goals are a data-quality signal from the profile layer,
    /// so the fallback is logged rather than silent.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(goal = s, "unrecognized health goal, using general_wellness");
            Self::GeneralWellness
        })
    }

    /// Ordered nutrient priority list for this goal.
    ///
    /// Goals without a dedicated table share the general-wellness ordering.
    pub fn priority_nutrients(&self) -> &'static [Nutrient] {
        match self {
            Self::LoseWeight => &[
                Nutrient::Calories,
                Nutrient::Protein,
                Nutrient::Iron,
                Nutrient::Calcium,
                Nutrient::Zinc,
            ],
            Self::GainMuscle => &[
                Nutrient::Calories,
                Nutrient::Protein,
                Nutrient::Carbohydrates,
                Nutrient::Iron,
                Nutrient::Zinc,
            ],
            Self::MaintainWeight => &[
                Nutrient::Protein,
                Nutrient::Calories,
                Nutrient::Iron,
                Nutrient::Calcium,
                Nutrient::Zinc,
            ],
            _ => &[
                Nutrient::Protein,
                Nutrient::Calories,
                Nutrient::Iron,
                Nutrient::Calcium,
                Nutrient::Potassium,
            ],
        }
    }

    /// Sort key for a nutrient under this goal: its index in the priority
    /// list, or [`UNRANKED_PRIORITY`] if unlisted.
    pub fn priority_index(&self, nutrient: Nutrient) -> usize {
        self.priority_nutrients()
            .iter()
            .position(|n| *n == nutrient)
            .unwrap_or(UNRANKED_PRIORITY)
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
