//! Test fixtures: mock data factories shared across module tests

use chrono::NaiveDate;

use crate::goals::HealthGoal;
use crate::models::{FoodItem, MealRecord, MealType, NutrientSet, RdvTarget, UserProfile};

/// A representative adult RDV target set. Round numbers keep expected
/// percentages easy to eyeball in assertions.
pub fn make_targets() -> RdvTarget {
  NutrientSet {
    calories: 2000.0,
    protein: 50.0,
    carbohydrates: 250.0,
    fat: 70.0,
    fiber: 30.0,
    iron: 18.0,
    calcium: 1000.0,
    zinc: 11.0,
    potassium: 3500.0,
    sodium: 2300.0,
    magnesium: 400.0,
    vitamin_a: 900.0,
    vitamin_c: 90.0,
    vitamin_d: 20.0,
    vitamin_b12: 2.4,
    folate: 400.0,
  }
}

/// A food carrying only calories and protein; other nutrients stay zero
pub fn make_food(name: &str, calories: f64, protein: f64) -> FoodItem {
  FoodItem {
    name: name.to_string(),
    nutrients: NutrientSet {
      calories,
      protein,
      ..Default::default()
    },
  }
}

pub fn make_meal(meal_type: MealType, meal_date: NaiveDate, foods: Vec<FoodItem>) -> MealRecord {
  MealRecord {
    foods,
    meal_type,
    meal_date,
    meal_time: None,
  }
}

pub fn make_profile(health_goal: HealthGoal) -> UserProfile {
  UserProfile {
    targets: make_targets(),
    health_goal,
    current_logging_streak: 0,
  }
}
