//! Fact probes. Each takes the fact record by value and hands back the
//! updated record.

pub mod directory;
pub mod kube;
pub mod vcs;

use crate::domain::AppError;
use crate::ports::Environment;

/// Variables consulted for the home directory, in order.
pub const HOME_VARS: [&str; 2] = ["HOME", "USERPROFILE"];

/// Resolve the invoking user's home directory. Empty values count as unset.
pub fn home_dir(env: &impl Environment) -> Result<String, AppError> {
    HOME_VARS
        .iter()
        .filter_map(|key| env.var(key))
        .find(|value| !value.is_empty())
        .ok_or(AppError::HomeNotFound)
}
