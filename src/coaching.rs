//! Coaching tone policy: learning phase and streak announcements
//!
//! The first 21 logged meals are the learning phase, during which coaching
//! tone is deliberately softer. The transition to the active phase happens
//! once, at the 21st meal, and never reverses.

use serde::{Deserialize, Serialize};

/// Number of logged meals that completes the learning phase. A fixed
/// constant, not configurable per user.
pub const LEARNING_PHASE_MEALS: i64 = 21;

/// Daily-calorie percentage below which a meal is assumed to be the first
/// of the day. A heuristic proxy: exact first-meal detection would need a
/// meal-ordinal input from the persistence layer.
const FIRST_MEAL_CALORIE_PCT: f64 = 30.0;

/// Streaks shorter than this are never announced
const MIN_ANNOUNCEABLE_STREAK: i64 = 3;

/// Whether the user is still in the soft-tone learning phase
pub fn is_learning_phase(total_meals_logged: i64) -> bool {
  total_meals_logged < LEARNING_PHASE_MEALS
}

/// Learning-phase progress, reported to the narration layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPhaseState {
  pub is_learning: bool,
  pub total_meals_logged: i64,
  pub meals_until_complete: i64,
}

impl LearningPhaseState {
  pub fn from_total(total_meals_logged: i64) -> Self {
    Self {
      is_learning: is_learning_phase(total_meals_logged),
      total_meals_logged,
      meals_until_complete: (LEARNING_PHASE_MEALS - total_meals_logged).max(0),
    }
  }
}

/// Decide whether the current streak may be announced with this feedback.
///
/// Announce only on what looks like the first meal of the day (daily
/// calories still under 30% of target) and only for streaks of 3+ days, so
/// the announcement lands once per day and 1-2 day streaks stay quiet.
pub fn should_announce_streak(daily_calorie_pct: f64, streak_days: i64) -> bool {
  daily_calorie_pct < FIRST_MEAL_CALORIE_PCT && streak_days >= MIN_ANNOUNCEABLE_STREAK
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
