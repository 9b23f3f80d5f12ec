use serde::{Deserialize, Serialize};

use super::nutrients::RdvTarget;
use crate::goals::HealthGoal;

/// The user's RDV profile as supplied by the external profile/RDV provider:
/// personalized daily targets, the active health goal, and the current
/// logging streak maintained by the stats job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
  pub targets: RdvTarget,
  #[serde(default)]
  pub health_goal: HealthGoal,
  #[serde(default)]
  pub current_logging_streak: i64,
}
