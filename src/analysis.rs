//! Deterministic analysis layer for nutrient intake
//!
//! This module computes gap, calorie, and quality metrics from logged meal
//! data and daily totals. The LLM interprets these pre-computed results
//! rather than doing math itself.

use serde::{Deserialize, Serialize};

use crate::goals::HealthGoal;
use crate::models::{MealType, Nutrient, NutrientSet, RdvTarget};

/// Nutrients evaluated by the gap analyzer. Calories are excluded here and
/// handled separately by the calorie-status classifier.
pub const GAP_NUTRIENTS: [Nutrient; 7] = [
  Nutrient::Protein,
  Nutrient::Carbohydrates,
  Nutrient::Fat,
  Nutrient::Iron,
  Nutrient::Calcium,
  Nutrient::Potassium,
  Nutrient::Zinc,
];

/// Nutrients scanned by the top-win selector, in tie-break order.
/// Carbs, fat, and calories are deliberately excluded: a calorie "win" is
/// not positive reinforcement.
pub const TOP_WIN_NUTRIENTS: [Nutrient; 5] = [
  Nutrient::Protein,
  Nutrient::Iron,
  Nutrient::Calcium,
  Nutrient::Potassium,
  Nutrient::Zinc,
];

/// Percentage of target achieved, rounded to one decimal place.
///
/// A zero or missing target forces 0%: absence of a target is treated as
/// worse than a low target, so the nutrient always classifies as critical.
/// This is policy, not a numeric artifact.
pub fn percentage_of_target(current: f64, target: f64) -> f64 {
  if target > 0.0 {
    (current / target * 100.0 * 10.0).round() / 10.0
  } else {
    0.0
  }
}

/// ---------------------------------------------------------------------------
/// Tier 1: Nutrient Gap Analysis
/// ---------------------------------------------------------------------------

/// One nutrient's shortfall against its daily target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
  pub nutrient: Nutrient,
  pub current: f64,
  pub target: f64,
  pub percentage: f64,
  pub gap: f64,
}

impl GapEntry {
  fn compute(nutrient: Nutrient, current: f64, target: f64) -> Self {
    Self {
      nutrient,
      current,
      target,
      percentage: percentage_of_target(current, target),
      gap: (target - current).max(0.0),
    }
  }
}

/// Critical and moderate nutrient gaps, sorted by the goal's priority order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
  pub critical_gaps: Vec<GapEntry>,
  pub moderate_gaps: Vec<GapEntry>,
}

/// Classify each tracked nutrient against its target.
///
/// Bands: critical < 50%, moderate 50-80% (exclusive upper), adequate >= 80%
/// (adequate nutrients are simply not reported). Both lists are sorted by
/// the goal's priority ordering; nutrients not in the goal's list sort last
/// in their original order. Moderate gaps are truncated to the top 2 after
/// sorting.
pub fn analyze_gaps(daily: &NutrientSet, targets: &RdvTarget, goal: HealthGoal) -> GapAnalysis {
  let mut critical_gaps = Vec::new();
  let mut moderate_gaps = Vec::new();

  for nutrient in GAP_NUTRIENTS {
    let entry = GapEntry::compute(nutrient, daily.get(nutrient), targets.get(nutrient));
    if entry.percentage < 50.0 {
      critical_gaps.push(entry);
    } else if entry.percentage < 80.0 {
      moderate_gaps.push(entry);
    }
  }

  // Stable sort keeps input order among equally-ranked nutrients
  critical_gaps.sort_by_key(|e| goal.priority_index(e.nutrient));
  moderate_gaps.sort_by_key(|e| goal.priority_index(e.nutrient));
  moderate_gaps.truncate(2);

  GapAnalysis {
    critical_gaps,
    moderate_gaps,
  }
}

/// ---------------------------------------------------------------------------
/// Tier 1: Calorie Status
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieStatusLevel {
  Under,
  OnTrack,
  Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSize {
  Light,
  Moderate,
  Heavy,
}

/// Where the day's calories stand, plus how this meal fits into the day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieStatus {
  pub meal_calories: f64,
  pub daily_calories: f64,
  pub target_calories: f64,
  pub percentage: f64,
  pub status: CalorieStatusLevel,
  pub is_snack: bool,
  pub meal_size: MealSize,
}

/// Classify daily calories against target and size the triggering meal.
///
/// The on-track band (40-120% of target) is identical across all health
/// goals: goal nuance (deficit for weight loss, surplus for muscle gain)
/// lives in downstream narration, not in this classifier.
pub fn classify_calories(
  meal_calories: f64,
  daily_calories: f64,
  target_calories: f64,
  meal_type: MealType,
) -> CalorieStatus {
  let percentage = percentage_of_target(daily_calories, target_calories);

  let status = if (40.0..=120.0).contains(&percentage) {
    CalorieStatusLevel::OnTrack
  } else if percentage > 120.0 {
    CalorieStatusLevel::Over
  } else {
    CalorieStatusLevel::Under
  };

  let meal_pct = percentage_of_target(meal_calories, target_calories);
  let meal_size = match meal_pct {
    p if p < 20.0 => MealSize::Light,
    p if p < 35.0 => MealSize::Moderate,
    _ => MealSize::Heavy,
  };

  // A logged snack is a snack; anything under 20% of the daily target is
  // treated as one regardless of how it was logged
  let is_snack = meal_type == MealType::Snack || meal_pct < 20.0;

  CalorieStatus {
    meal_calories,
    daily_calories,
    target_calories,
    percentage,
    status,
    is_snack,
    meal_size,
  }
}

/// ---------------------------------------------------------------------------
/// Tier 1: Goal Nutrient Summary
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalNutrientStatus {
  Low,
  Good,
  Excellent,
}

/// The primary lever nutrient, summarized for the day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalNutrientSummary {
  pub nutrient: Nutrient,
  pub current: f64,
  pub target: f64,
  pub percentage: f64,
  pub gap: f64,
  pub status: GoalNutrientStatus,
}

/// Summarize the goal nutrient. Protein is the universal anchor nutrient
/// for every health goal in the current policy.
pub fn summarize_goal_nutrient(daily: &NutrientSet, targets: &RdvTarget) -> GoalNutrientSummary {
  let nutrient = Nutrient::Protein;
  let current = daily.get(nutrient);
  let target = targets.get(nutrient);
  let percentage = percentage_of_target(current, target);

  let status = match percentage {
    p if p < 50.0 => GoalNutrientStatus::Low,
    p if p < 80.0 => GoalNutrientStatus::Good,
    _ => GoalNutrientStatus::Excellent,
  };

  GoalNutrientSummary {
    nutrient,
    current,
    target,
    percentage,
    gap: (target - current).max(0.0),
    status,
  }
}

/// ---------------------------------------------------------------------------
/// Tier 1: Top Win
/// ---------------------------------------------------------------------------

/// The single best-performing nutrient, surfaced for positive reinforcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopWin {
  pub nutrient: Nutrient,
  pub current: f64,
  pub target: f64,
  pub percentage: f64,
}

/// Pick the nutrient with the highest percentage of target, if any reaches
/// 70%. Ties go to the earliest nutrient in [`TOP_WIN_NUTRIENTS`]: the
/// comparison is strict, so later equal values do not replace the leader.
pub fn select_top_win(daily: &NutrientSet, targets: &RdvTarget) -> Option<TopWin> {
  let mut best: Option<TopWin> = None;

  for nutrient in TOP_WIN_NUTRIENTS {
    let current = daily.get(nutrient);
    let target = targets.get(nutrient);
    let percentage = percentage_of_target(current, target);

    if percentage >= 70.0 && best.as_ref().is_none_or(|b| percentage > b.percentage) {
      best = Some(TopWin {
        nutrient,
        current,
        target,
        percentage,
      });
    }
  }

  best
}

/// ---------------------------------------------------------------------------
/// Tier 1: Meal Quality Score
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealQualityTier {
  Excellent,
  Okay,
  Poor,
}

/// Additive 0-100 quality score for a single meal.
///
/// Informational context for narration only; nothing else in the core
/// consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealQualityScore {
  pub score: u8,
  pub tier: MealQualityTier,
  pub flags: Vec<String>,
}

impl MealQualityScore {
  /// Score a meal from protein adequacy, food variety, and remaining
  /// nutrient gaps. Each component is a step function, not linear.
  ///
  /// `meal_protein_pct` is the meal's protein as a percentage of the daily
  /// protein target; `gap_count` is the number of critical + moderate gaps
  /// in the day so far.
  pub fn compute(meal_protein_pct: f64, food_count: usize, gap_count: usize) -> Self {
    // Protein component (0-40)
    let protein_points: u8 = match meal_protein_pct {
      p if p >= 20.0 => 40,
      p if p >= 15.0 => 30,
      p if p >= 10.0 => 20,
      p if p >= 5.0 => 10,
      _ => 0,
    };

    // Variety component (0-30)
    let variety_points: u8 = match food_count {
      c if c >= 4 => 30,
      3 => 20,
      2 => 10,
      _ => 0,
    };

    // Completeness component (0-30)
    let completeness_points: u8 = match gap_count {
      0 => 30,
      c if c <= 2 => 20,
      c if c <= 4 => 10,
      _ => 0,
    };

    let score = protein_points + variety_points + completeness_points;
    let tier = match score {
      s if s >= 70 => MealQualityTier::Excellent,
      s if s >= 40 => MealQualityTier::Okay,
      _ => MealQualityTier::Poor,
    };

    let mut flags = Vec::new();
    if meal_protein_pct >= 20.0 {
      flags.push("protein_rich".to_string());
    } else if meal_protein_pct < 5.0 {
      flags.push("low_protein".to_string());
    }
    if food_count >= 4 {
      flags.push("good_variety".to_string());
    } else if food_count < 2 {
      flags.push("low_variety".to_string());
    }
    if gap_count == 0 {
      flags.push("nutritionally_complete".to_string());
    } else if gap_count > 4 {
      flags.push("many_gaps".to_string());
    }

    Self { score, tier, flags }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::make_targets;

  #[test]
  fn test_percentage_rounds_to_one_decimal() {
    assert_eq!(percentage_of_target(1.0, 3.0), 33.3);
    assert_eq!(percentage_of_target(2.0, 3.0), 66.7);
    assert_eq!(percentage_of_target(720.0, 2000.0), 36.0);
  }

  #[test]
  fn test_percentage_forced_zero_without_target() {
    assert_eq!(percentage_of_target(50.0, 0.0), 0.0);
    assert_eq!(percentage_of_target(50.0, -1.0), 0.0);
    assert_eq!(percentage_of_target(0.0, 0.0), 0.0);
  }

  #[test]
  fn test_gap_band_boundaries() {
    let targets = make_targets();
    let mut daily = NutrientSet::default();
    daily.set(Nutrient::Protein, targets.protein * 0.499); // critical
    daily.set(Nutrient::Iron, targets.iron * 0.50); // moderate, lower bound inclusive
    daily.set(Nutrient::Calcium, targets.calcium * 0.799); // still moderate
    daily.set(Nutrient::Zinc, targets.zinc * 0.80); // adequate, not reported

    let gaps = analyze_gaps(&daily, &targets, HealthGoal::GeneralWellness);

    let critical: Vec<_> = gaps.critical_gaps.iter().map(|e| e.nutrient).collect();
    assert!(critical.contains(&Nutrient::Protein));
    assert!(!critical.contains(&Nutrient::Iron));

    let moderate: Vec<_> = gaps.moderate_gaps.iter().map(|e| e.nutrient).collect();
    assert!(moderate.contains(&Nutrient::Iron));
    assert!(!moderate.contains(&Nutrient::Zinc), "80% is adequate");
    assert!(
      !critical.contains(&Nutrient::Zinc),
      "adequate nutrients are not reported at all"
    );
  }

  #[test]
  fn test_missing_target_is_always_critical() {
    let mut targets = make_targets();
    targets.set(Nutrient::Zinc, 0.0);
    let mut daily = NutrientSet::default();
    // Plenty of zinc consumed, but no target to measure against
    daily.set(Nutrient::Zinc, 25.0);
    for nutrient in GAP_NUTRIENTS {
      if nutrient != Nutrient::Zinc {
        daily.set(nutrient, targets.get(nutrient)); // 100%, adequate
      }
    }

    let gaps = analyze_gaps(&daily, &targets, HealthGoal::GeneralWellness);

    assert_eq!(gaps.critical_gaps.len(), 1);
    let entry = &gaps.critical_gaps[0];
    assert_eq!(entry.nutrient, Nutrient::Zinc);
    assert_eq!(entry.percentage, 0.0);
    assert_eq!(entry.gap, 0.0, "gap is max(0, target - current)");
  }

  #[test]
  fn test_gaps_sorted_by_goal_priority_unlisted_last() {
    let targets = make_targets();
    // Everything at zero: all seven nutrients critical
    let daily = NutrientSet::default();

    // gain_muscle priority: calories, protein, carbohydrates, iron, zinc.
    // Calories are not a gap nutrient, so the listed prefix is
    // protein, carbohydrates, iron, zinc; fat/calcium/potassium trail in
    // their original GAP_NUTRIENTS order.
    let gaps = analyze_gaps(&daily, &targets, HealthGoal::GainMuscle);
    let order: Vec<_> = gaps.critical_gaps.iter().map(|e| e.nutrient).collect();
    assert_eq!(
      order,
      vec![
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Iron,
        Nutrient::Zinc,
        Nutrient::Fat,
        Nutrient::Calcium,
        Nutrient::Potassium,
      ]
    );
  }

  #[test]
  fn test_moderate_gaps_truncated_to_two() {
    let targets = make_targets();
    let mut daily = NutrientSet::default();
    // Four nutrients in the moderate band
    for nutrient in [
      Nutrient::Protein,
      Nutrient::Fat,
      Nutrient::Calcium,
      Nutrient::Potassium,
    ] {
      daily.set(nutrient, targets.get(nutrient) * 0.6);
    }
    // Rest adequate
    for nutrient in [Nutrient::Carbohydrates, Nutrient::Iron, Nutrient::Zinc] {
      daily.set(nutrient, targets.get(nutrient));
    }

    let gaps = analyze_gaps(&daily, &targets, HealthGoal::GeneralWellness);

    assert!(gaps.critical_gaps.is_empty());
    assert_eq!(gaps.moderate_gaps.len(), 2);
    // Highest-priority two under general_wellness: protein, then calcium
    assert_eq!(gaps.moderate_gaps[0].nutrient, Nutrient::Protein);
    assert_eq!(gaps.moderate_gaps[1].nutrient, Nutrient::Calcium);
  }

  #[test]
  fn test_calorie_status_scenario() {
    // Heavy single meal early in the day
    let status = classify_calories(720.0, 720.0, 2000.0, MealType::Dinner);
    assert_eq!(status.percentage, 36.0);
    assert_eq!(status.meal_size, MealSize::Heavy, "36% of target is >= 35%");
    assert!(!status.is_snack);
  }

  #[test]
  fn test_calorie_on_track_band() {
    let at_40 = classify_calories(100.0, 800.0, 2000.0, MealType::Lunch);
    assert_eq!(at_40.status, CalorieStatusLevel::OnTrack);

    let at_120 = classify_calories(100.0, 2400.0, 2000.0, MealType::Lunch);
    assert_eq!(at_120.status, CalorieStatusLevel::OnTrack);

    let over = classify_calories(100.0, 2420.0, 2000.0, MealType::Lunch);
    assert_eq!(over.status, CalorieStatusLevel::Over);

    let under = classify_calories(100.0, 780.0, 2000.0, MealType::Lunch);
    assert_eq!(under.status, CalorieStatusLevel::Under);
  }

  #[test]
  fn test_snack_detection() {
    // Logged as snack: always a snack, even when large
    let logged = classify_calories(900.0, 900.0, 2000.0, MealType::Snack);
    assert!(logged.is_snack);

    // Small dinner: snack by the 20% heuristic
    let small = classify_calories(300.0, 1500.0, 2000.0, MealType::Dinner);
    assert!(small.is_snack);
    assert_eq!(small.meal_size, MealSize::Light);

    // Zero calorie target: meal percentage forced to 0, so everything
    // reads as a light snack rather than dividing by zero
    let no_target = classify_calories(700.0, 700.0, 0.0, MealType::Dinner);
    assert!(no_target.is_snack);
    assert_eq!(no_target.status, CalorieStatusLevel::Under);
  }

  #[test]
  fn test_goal_nutrient_is_protein_with_banded_status() {
    let targets = make_targets();
    let mut daily = NutrientSet::default();

    daily.set(Nutrient::Protein, targets.protein * 0.3);
    let low = summarize_goal_nutrient(&daily, &targets);
    assert_eq!(low.nutrient, Nutrient::Protein);
    assert_eq!(low.status, GoalNutrientStatus::Low);

    daily.set(Nutrient::Protein, targets.protein * 0.5);
    let good = summarize_goal_nutrient(&daily, &targets);
    assert_eq!(good.status, GoalNutrientStatus::Good);

    daily.set(Nutrient::Protein, targets.protein * 0.8);
    let excellent = summarize_goal_nutrient(&daily, &targets);
    assert_eq!(excellent.status, GoalNutrientStatus::Excellent);
    assert!((excellent.gap - targets.protein * 0.2).abs() < 1e-9);
  }

  #[test]
  fn test_top_win_none_below_seventy() {
    let targets = make_targets();
    let mut daily = NutrientSet::default();
    for nutrient in TOP_WIN_NUTRIENTS {
      daily.set(nutrient, targets.get(nutrient) * 0.69);
    }
    assert_eq!(select_top_win(&daily, &targets), None);
  }

  #[test]
  fn test_top_win_highest_percentage_wins() {
    let targets = make_targets();
    let mut daily = NutrientSet::default();
    daily.set(Nutrient::Protein, targets.protein * 0.75);
    daily.set(Nutrient::Potassium, targets.potassium * 0.92);

    let win = select_top_win(&daily, &targets).expect("potassium qualifies");
    assert_eq!(win.nutrient, Nutrient::Potassium);
    assert_eq!(win.percentage, 92.0);
  }

  #[test]
  fn test_top_win_tie_goes_to_iteration_order() {
    let targets = make_targets();
    let mut daily = NutrientSet::default();
    // Iron and calcium both at exactly 85%; iron comes first in the scan
    daily.set(Nutrient::Iron, targets.iron * 0.85);
    daily.set(Nutrient::Calcium, targets.calcium * 0.85);

    let win = select_top_win(&daily, &targets).expect("both qualify");
    assert_eq!(win.nutrient, Nutrient::Iron, "first nutrient keeps a tied maximum");
  }

  #[test]
  fn test_meal_quality_perfect_score() {
    let quality = MealQualityScore::compute(22.0, 4, 0);
    assert_eq!(quality.score, 100);
    assert_eq!(quality.tier, MealQualityTier::Excellent);
    assert!(quality.flags.contains(&"protein_rich".to_string()));
    assert!(quality.flags.contains(&"nutritionally_complete".to_string()));
  }

  #[test]
  fn test_meal_quality_step_functions() {
    // Protein steps
    assert_eq!(MealQualityScore::compute(19.9, 0, 9).score, 30);
    assert_eq!(MealQualityScore::compute(15.0, 0, 9).score, 30);
    assert_eq!(MealQualityScore::compute(10.0, 0, 9).score, 20);
    assert_eq!(MealQualityScore::compute(5.0, 0, 9).score, 10);
    assert_eq!(MealQualityScore::compute(4.9, 0, 9).score, 0);

    // Variety steps
    assert_eq!(MealQualityScore::compute(0.0, 3, 9).score, 20);
    assert_eq!(MealQualityScore::compute(0.0, 2, 9).score, 10);
    assert_eq!(MealQualityScore::compute(0.0, 1, 9).score, 0);

    // Completeness steps
    assert_eq!(MealQualityScore::compute(0.0, 0, 2).score, 20);
    assert_eq!(MealQualityScore::compute(0.0, 0, 4).score, 10);
    assert_eq!(MealQualityScore::compute(0.0, 0, 5).score, 0);
  }

  #[test]
  fn test_meal_quality_tiers() {
    assert_eq!(
      MealQualityScore::compute(20.0, 4, 5).tier,
      MealQualityTier::Excellent
    ); // 70
    assert_eq!(
      MealQualityScore::compute(10.0, 3, 5).tier,
      MealQualityTier::Okay
    ); // 40
    assert_eq!(
      MealQualityScore::compute(5.0, 2, 5).tier,
      MealQualityTier::Poor
    ); // 20
  }
}
