//! Signup and unregister against the activity catalog.
//!
//! Callers must already have passed [`crate::auth::require_auth`]; the acting
//! user is only recorded in the log.

use crate::catalog::Catalog;
use crate::error::AppError;
use tracing::info;

/// Append `email` to the roster of `activity_name`.
///
/// Does not look at `max_participants`.
pub fn signup(
    catalog: &mut Catalog,
    activity_name: &str,
    email: &str,
    acting_user: &str,
) -> Result<String, AppError> {
    let activity = catalog.get_mut(activity_name)?;
    if activity.participants.iter().any(|p| p == email) {
        return Err(AppError::AlreadyRegistered);
    }
    activity.participants.push(email.to_string());
    info!(activity = activity_name, email, by = acting_user, "Signed up student");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove `email` from the roster of `activity_name`.
pub fn unregister(
    catalog: &mut Catalog,
    activity_name: &str,
    email: &str,
    acting_user: &str,
) -> Result<String, AppError> {
    let activity = catalog.get_mut(activity_name)?;
    let pos = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(AppError::NotRegistered)?;
    activity.participants.remove(pos);
    info!(activity = activity_name, email, by = acting_user, "Unregistered student");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
