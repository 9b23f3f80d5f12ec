pub mod meal;
pub mod nutrients;
pub mod profile;

pub use meal::{DailyTotals, FoodItem, MealRecord, MealType};
pub use nutrients::{Nutrient, NutrientSet, RdvTarget};
pub use profile::UserProfile;
