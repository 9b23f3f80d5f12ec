use serde::{Deserialize, Serialize};

/// The 16 tracked nutrients, in canonical order.
///
/// Every nutrient container in the system (per-food values, meal totals,
/// daily totals, RDV targets) carries all 16; upstream gaps come through
/// as zero rather than as missing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
  Calories,
  Protein,
  Carbohydrates,
  Fat,
  Fiber,
  Iron,
  Calcium,
  Zinc,
  Potassium,
  Sodium,
  Magnesium,
  VitaminA,
  VitaminC,
  VitaminD,
  VitaminB12,
  Folate,
}

impl Nutrient {
  /// All nutrients in canonical order
  pub const ALL: [Nutrient; 16] = [
    Nutrient::Calories,
    Nutrient::Protein,
    Nutrient::Carbohydrates,
    Nutrient::Fat,
    Nutrient::Fiber,
    Nutrient::Iron,
    Nutrient::Calcium,
    Nutrient::Zinc,
    Nutrient::Potassium,
    Nutrient::Sodium,
    Nutrient::Magnesium,
    Nutrient::VitaminA,
    Nutrient::VitaminC,
    Nutrient::VitaminD,
    Nutrient::VitaminB12,
    Nutrient::Folate,
  ];

  /// Canonical snake_case name. Downstream prompt templates and UI
  /// bindings match on these strings literally.
  pub fn as_str(&self) -> &'static str {
    match self {
      Nutrient::Calories => "calories",
      Nutrient::Protein => "protein",
      Nutrient::Carbohydrates => "carbohydrates",
      Nutrient::Fat => "fat",
      Nutrient::Fiber => "fiber",
      Nutrient::Iron => "iron",
      Nutrient::Calcium => "calcium",
      Nutrient::Zinc => "zinc",
      Nutrient::Potassium => "potassium",
      Nutrient::Sodium => "sodium",
      Nutrient::Magnesium => "magnesium",
      Nutrient::VitaminA => "vitamin_a",
      Nutrient::VitaminC => "vitamin_c",
      Nutrient::VitaminD => "vitamin_d",
      Nutrient::VitaminB12 => "vitamin_b12",
      Nutrient::Folate => "folate",
    }
  }

  /// Display unit for narration (the values themselves are unit-agnostic)
  pub fn unit(&self) -> &'static str {
    match self {
      Nutrient::Calories => "kcal",
      Nutrient::Protein | Nutrient::Carbohydrates | Nutrient::Fat | Nutrient::Fiber => "g",
      Nutrient::Iron
      | Nutrient::Calcium
      | Nutrient::Zinc
      | Nutrient::Potassium
      | Nutrient::Sodium
      | Nutrient::Magnesium
      | Nutrient::VitaminC => "mg",
      Nutrient::VitaminA
      | Nutrient::VitaminD
      | Nutrient::VitaminB12
      | Nutrient::Folate => "mcg",
    }
  }
}

impl std::fmt::Display for Nutrient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A fixed collection of the 16 tracked nutrient quantities.
///
/// Used for per-food nutrients, meal totals, daily totals, and RDV targets.
/// All values are non-negative reals; a missing upstream value is 0.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSet {
  #[serde(default)]
  pub calories: f64,
  #[serde(default)]
  pub protein: f64,
  #[serde(default)]
  pub carbohydrates: f64,
  #[serde(default)]
  pub fat: f64,
  #[serde(default)]
  pub fiber: f64,
  #[serde(default)]
  pub iron: f64,
  #[serde(default)]
  pub calcium: f64,
  #[serde(default)]
  pub zinc: f64,
  #[serde(default)]
  pub potassium: f64,
  #[serde(default)]
  pub sodium: f64,
  #[serde(default)]
  pub magnesium: f64,
  #[serde(default)]
  pub vitamin_a: f64,
  #[serde(default)]
  pub vitamin_c: f64,
  #[serde(default)]
  pub vitamin_d: f64,
  #[serde(default)]
  pub vitamin_b12: f64,
  #[serde(default)]
  pub folate: f64,
}

impl NutrientSet {
  pub fn get(&self, nutrient: Nutrient) -> f64 {
    match nutrient {
      Nutrient::Calories => self.calories,
      Nutrient::Protein => self.protein,
      Nutrient::Carbohydrates => self.carbohydrates,
      Nutrient::Fat => self.fat,
      Nutrient::Fiber => self.fiber,
      Nutrient::Iron => self.iron,
      Nutrient::Calcium => self.calcium,
      Nutrient::Zinc => self.zinc,
      Nutrient::Potassium => self.potassium,
      Nutrient::Sodium => self.sodium,
      Nutrient::Magnesium => self.magnesium,
      Nutrient::VitaminA => self.vitamin_a,
      Nutrient::VitaminC => self.vitamin_c,
      Nutrient::VitaminD => self.vitamin_d,
      Nutrient::VitaminB12 => self.vitamin_b12,
      Nutrient::Folate => self.folate,
    }
  }

  pub fn set(&mut self, nutrient: Nutrient, value: f64) {
    match nutrient {
      Nutrient::Calories => self.calories = value,
      Nutrient::Protein => self.protein = value,
      Nutrient::Carbohydrates => self.carbohydrates = value,
      Nutrient::Fat => self.fat = value,
      Nutrient::Fiber => self.fiber = value,
      Nutrient::Iron => self.iron = value,
      Nutrient::Calcium => self.calcium = value,
      Nutrient::Zinc => self.zinc = value,
      Nutrient::Potassium => self.potassium = value,
      Nutrient::Sodium => self.sodium = value,
      Nutrient::Magnesium => self.magnesium = value,
      Nutrient::VitaminA => self.vitamin_a = value,
      Nutrient::VitaminC => self.vitamin_c = value,
      Nutrient::VitaminD => self.vitamin_d = value,
      Nutrient::VitaminB12 => self.vitamin_b12 = value,
      Nutrient::Folate => self.folate = value,
    }
  }

  /// Add another set into this one (summing foods into meal totals,
  /// meals into daily totals)
  pub fn accumulate(&mut self, other: &NutrientSet) {
    for nutrient in Nutrient::ALL {
      self.set(nutrient, self.get(nutrient) + other.get(nutrient));
    }
  }
}

/// A NutrientSet interpreted as one user's recommended daily targets.
///
/// Derived externally from demographics + goal; immutable for the duration
/// of one feedback computation.
pub type RdvTarget = NutrientSet;
