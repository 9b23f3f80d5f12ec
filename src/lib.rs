//! Goal-driven nutrient feedback engine
//!
//! Turns logged meals, accumulated daily totals, and a user's personalized
//! RDV targets into a structured, prioritized coaching package: calorie
//! status, goal-nutrient summary, critical/moderate nutrient gaps, top win,
//! meal quality, and tone policy. An external narration layer turns the
//! package into prose; this crate only does the deterministic math.
//!
//! All computation is synchronous and pure over already-fetched inputs.
//! Fetching profiles, totals, and meal history, and serializing anything
//! back, belongs to the calling layer.

pub mod analysis;
pub mod coaching;
pub mod feedback;
pub mod goals;
pub mod models;
pub mod stats;

#[cfg(test)]
mod test_utils;

pub use analysis::{
  analyze_gaps, classify_calories, select_top_win, summarize_goal_nutrient, CalorieStatus,
  CalorieStatusLevel, GapAnalysis, GapEntry, GoalNutrientStatus, GoalNutrientSummary,
  MealQualityScore, MealQualityTier, MealSize, TopWin,
};
pub use coaching::{is_learning_phase, should_announce_streak, LearningPhaseState};
pub use feedback::{
  build_coaching_context, build_feedback_structure, CoachError, CoachingContext,
  FeedbackRequest, FeedbackStructure,
};
pub use goals::HealthGoal;
pub use models::{
  DailyTotals, FoodItem, MealRecord, MealType, Nutrient, NutrientSet, RdvTarget, UserProfile,
};
pub use stats::{
  compute_streaks, compute_trends, weekly_averages, NutrientTrend, NutritionStats, StreakState,
  TrendDirection, WeeklyAverages,
};
