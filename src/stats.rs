//! Stats aggregator numeric logic: streaks, weekly averages, trends
//!
//! Runs after each meal log. Everything here is recomputed from the full
//! meal history on every invocation rather than maintained incrementally:
//! recomputation is idempotent, so retried or out-of-order meal writes
//! self-heal instead of corrupting counters.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{MealRecord, Nutrient, NutrientSet};

/// Nutrients carried through weekly averages and trend reporting
pub const TRACKED_NUTRIENTS: [Nutrient; 8] = [
    Nutrient::Calories,
    Nutrient::Protein,
    Nutrient::Carbohydrates,
    Nutrient::Fat,
    Nutrient::Iron,
    Nutrient::Calcium,
    Nutrient::Potassium,
    Nutrient::Zinc,
];

// ---------------------------------------------------------------------------
/// Streak Calculator
// ---------------------------------------------------------------------------

/// Logging streaks in consecutive calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreakState {
    pub current_logging_streak: i64,
    pub longest_logging_streak: i64,
}

/// Compute current and longest logging streaks from meal dates.
///
/// The current streak counts back from `today` without gaps and is 0 when
/// nothing was logged today. The longest streak is the longest run of
/// consecutive days anywhere in history, floored at max(current, 1) when
/// any meal exists.
pub fn compute_streaks(meal_dates: &[NaiveDate], today: NaiveDate) -> StreakState {
    let mut dates: Vec<NaiveDate> = meal_dates.to_vec();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    if dates.is_empty() {
        return StreakState::default();
    }

    let mut current = 0i64;
    for (i, date) in dates.iter().enumerate() {
        if *date == today - Duration::days(i as i64) {
            current += 1;
        } else {
            break;
        }
    }

    let mut longest = 1i64;
    let mut run = 1i64;
    for pair in dates.windows(2) {
        if pair[0] - pair[1] == Duration::days(1) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    StreakState {
        current_logging_streak: current,
        longest_logging_streak: longest.max(current).max(1),
    }
}

// ---------------------------------------------------------------------------
/// Weekly Averages
// ---------------------------------------------------------------------------

/// Per-day nutrient averages over one week window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WeeklyAverages {
    /// Average daily intake for each tracked nutrient (untracked fields
    /// stay zero)
    pub averages: NutrientSet,
    /// Distinct calendar dates with at least one meal in the window
    pub days_logged: i64,
}

/// Average the tracked nutrients over the half-open week window
/// `[today - (days_ago + 7), today - days_ago)`.
///
/// Sums every food of every meal dated in-window, then divides by the
/// number of distinct logged dates, not by 7, so partial weeks average
/// over the days that were actually logged. No logged days yields a zeroed
/// struct, not an error.
pub fn weekly_averages(meals: &[MealRecord], today: NaiveDate, days_ago: i64) -> WeeklyAverages {
    let window_start = today - Duration::days(days_ago + 7);
    let window_end = today - Duration::days(days_ago);

    let mut sums = NutrientSet::default();
    let mut logged_dates: Vec<NaiveDate> = Vec::new();

    for meal in meals {
        if meal.meal_date < window_start || meal.meal_date >= window_end {
            continue;
        }
        let totals = meal.totals();
        for nutrient in TRACKED_NUTRIENTS {
            sums.set(nutrient, sums.get(nutrient) + totals.get(nutrient));
        }
        if !logged_dates.contains(&meal.meal_date) {
            logged_dates.push(meal.meal_date);
        }
    }

    let days_logged = logged_dates.len() as i64;
    if days_logged == 0 {
        return WeeklyAverages::default();
    }

    let mut averages = NutrientSet::default();
    for nutrient in TRACKED_NUTRIENTS {
        averages.set(nutrient, sums.get(nutrient) / days_logged as f64);
    }

    WeeklyAverages {
        averages,
        days_logged,
    }
}

// ---------------------------------------------------------------------------
/// Trends
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

/// Week-over-week movement for one tracked nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTrend {
    pub nutrient: Nutrient,
    pub current_avg: f64,
    pub previous_avg: f64,
    pub percent_change: f64,
    pub direction: TrendDirection,
}

/// Compare this week's averages against last week's.
///
/// percent_change = (week1 - week2) / week2 * 100; a zero previous week is
/// reported as stable unconditionally rather than dividing by zero. The
/// 10% boundaries are inclusive-stable: exactly 10% is not yet a trend.
pub fn compute_trends(current: &WeeklyAverages, previous: &WeeklyAverages) -> Vec<NutrientTrend> {
    TRACKED_NUTRIENTS
        .iter()
        .map(|&nutrient| {
            let current_avg = current.averages.get(nutrient);
            let previous_avg = previous.averages.get(nutrient);

            let (percent_change, direction) = if previous_avg == 0.0 {
                (0.0, TrendDirection::Stable)
            } else {
                let change = (current_avg - previous_avg) / previous_avg * 100.0;
                let direction = if change > 10.0 {
                    TrendDirection::Improving
                } else if change < -10.0 {
                    TrendDirection::Declining
                } else {
                    TrendDirection::Stable
                };
                ((change * 10.0).round() / 10.0, direction)
            };

            NutrientTrend {
                nutrient,
                current_avg,
                previous_avg,
                percent_change,
                direction,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
/// Aggregated Stats
// ---------------------------------------------------------------------------

/// Everything the stats job recomputes after a meal log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionStats {
    pub streaks: StreakState,
    pub current_week: WeeklyAverages,
    pub previous_week: WeeklyAverages,
    pub trends: Vec<NutrientTrend>,
    pub total_meals_logged: i64,
}

impl NutritionStats {
    /// Recompute all aggregates from the full meal history.
    pub fn compute(meals: &[MealRecord], today: NaiveDate) -> Self {
        let dates: Vec<NaiveDate> = meals.iter().map(|m| m.meal_date).collect();
        let streaks = compute_streaks(&dates, today);

        let current_week = weekly_averages(meals, today, 0);
        let previous_week = weekly_averages(meals, today, 7);
        let trends = compute_trends(&current_week, &previous_week);

        Self {
            streaks,
            current_week,
            previous_week,
            trends,
            total_meals_logged: meals.len() as i64,
        }
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
