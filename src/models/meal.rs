use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::nutrients::NutrientSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
  Breakfast,
  Lunch,
  Dinner,
  Snack,
}

impl MealType {
  pub fn as_str(&self) -> &'static str {
    match self {
      MealType::Breakfast => "breakfast",
      MealType::Lunch => "lunch",
      MealType::Dinner => "dinner",
      MealType::Snack => "snack",
    }
  }
}

/// One food within a logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
  pub name: String,
  pub nutrients: NutrientSet,
}

/// A logged meal as handed over by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
  pub foods: Vec<FoodItem>,
  pub meal_type: MealType,
  pub meal_date: NaiveDate,
  pub meal_time: Option<NaiveTime>,
}

impl MealRecord {
  /// Sum food-level nutrients into meal totals. Used whenever the
  /// persistence layer does not supply pre-aggregated totals.
  pub fn totals(&self) -> NutrientSet {
    let mut totals = NutrientSet::default();
    for food in &self.foods {
      totals.accumulate(&food.nutrients);
    }
    totals
  }

  pub fn food_count(&self) -> usize {
    self.foods.len()
  }
}

/// Accumulated nutrient totals for one calendar day.
///
/// `meal_count` is carried through from the persistence row but unused by
/// the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTotals {
  pub nutrients: NutrientSet,
  pub meal_count: Option<i64>,
}
