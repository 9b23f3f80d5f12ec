//! Feedback assembly: the structured object handed to the narration layer
//!
//! Composes the per-request analysis results into one JSON-serializable
//! package. The LLM (or UI) binds to these field names literally, so the
//! shapes here are a wire contract, not an internal convenience.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{
  analyze_gaps, classify_calories, percentage_of_target, select_top_win,
  summarize_goal_nutrient, CalorieStatus, GapEntry, GoalNutrientSummary, MealQualityScore,
  TopWin,
};
use crate::coaching::{should_announce_streak, LearningPhaseState};
use crate::goals::HealthGoal;
use crate::models::{DailyTotals, MealRecord, Nutrient, NutrientSet, UserProfile};

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

/// Failures in feedback assembly.
///
/// Missing required inputs fail fast rather than guessing defaults:
/// fabricated targets or totals would silently corrupt coaching accuracy.
/// Degraded *values* inside present inputs (zero targets, empty history)
/// are policy cases, not errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoachError {
  #[error("user profile unavailable")]
  MissingProfile,

  #[error("daily nutrient totals unavailable")]
  MissingDailyTotals,

  #[error("meal has no foods to analyze")]
  EmptyMeal,
}

/// ---------------------------------------------------------------------------
/// Feedback Structure
/// ---------------------------------------------------------------------------

/// The central feedback artifact, derived fresh on every request and never
/// persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackStructure {
  pub calorie_status: CalorieStatus,
  pub goal_nutrient: GoalNutrientSummary,
  pub critical_gaps: Vec<GapEntry>,
  pub moderate_gaps: Vec<GapEntry>,
  pub top_win: Option<TopWin>,
  pub health_goal: HealthGoal,
}

/// Run the analysis sequence (calorie status, goal nutrient, gap analysis,
/// top win) over the latest meal and current daily totals.
pub fn build_feedback_structure(
  meal: &MealRecord,
  daily: &NutrientSet,
  profile: &UserProfile,
) -> FeedbackStructure {
  let meal_totals = meal.totals();
  let gaps = analyze_gaps(daily, &profile.targets, profile.health_goal);

  FeedbackStructure {
    calorie_status: classify_calories(
      meal_totals.calories,
      daily.get(Nutrient::Calories),
      profile.targets.get(Nutrient::Calories),
      meal.meal_type,
    ),
    goal_nutrient: summarize_goal_nutrient(daily, &profile.targets),
    critical_gaps: gaps.critical_gaps,
    moderate_gaps: gaps.moderate_gaps,
    top_win: select_top_win(daily, &profile.targets),
    health_goal: profile.health_goal,
  }
}

/// ---------------------------------------------------------------------------
/// Coaching Context (terminal artifact)
/// ---------------------------------------------------------------------------

/// Everything the glue layer fetched for one feedback request
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
  /// The meal that triggered the request
  pub meal: MealRecord,
  /// RDV profile; None when the profile fetch came back empty
  pub profile: Option<UserProfile>,
  /// Accumulated totals for the meal's day; None when unavailable
  pub daily_totals: Option<DailyTotals>,
  /// Lifetime meal count, maintained by the stats job
  pub total_meals_logged: i64,
}

/// The complete package sent to the narration layer for one feedback
/// request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingContext {
  pub feedback: FeedbackStructure,
  pub learning_phase: LearningPhaseState,
  pub meal_quality: MealQualityScore,
  pub announce_streak: bool,
}

impl CoachingContext {
  /// Serialize to JSON for the narration prompt
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// Build the coaching context for a logged meal.
///
/// Fails fast when the profile or daily totals are absent; everything else
/// (zero targets, short history, unrecognized goals) degrades by policy
/// inside the analysis layer.
pub fn build_coaching_context(request: FeedbackRequest) -> Result<CoachingContext, CoachError> {
  let profile = request.profile.ok_or(CoachError::MissingProfile)?;
  let daily = request.daily_totals.ok_or(CoachError::MissingDailyTotals)?;
  if request.meal.foods.is_empty() {
    return Err(CoachError::EmptyMeal);
  }

  let feedback = build_feedback_structure(&request.meal, &daily.nutrients, &profile);

  // Gap count feeding the quality score is what the structure reports:
  // critical plus the (already truncated) moderate list
  let gap_count = feedback.critical_gaps.len() + feedback.moderate_gaps.len();
  let meal_protein_pct = percentage_of_target(
    request.meal.totals().get(Nutrient::Protein),
    profile.targets.get(Nutrient::Protein),
  );
  let meal_quality =
    MealQualityScore::compute(meal_protein_pct, request.meal.food_count(), gap_count);

  let learning_phase = LearningPhaseState::from_total(request.total_meals_logged);
  let announce_streak = should_announce_streak(
    feedback.calorie_status.percentage,
    profile.current_logging_streak,
  );

  tracing::debug!(
    goal = %profile.health_goal,
    critical = feedback.critical_gaps.len(),
    moderate = feedback.moderate_gaps.len(),
    score = meal_quality.score,
    "coaching context built"
  );

  Ok(CoachingContext {
    feedback,
    learning_phase,
    meal_quality,
    announce_streak,
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
