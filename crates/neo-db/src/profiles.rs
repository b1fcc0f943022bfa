//! User profiles stored as `user` records in the shared collection.
//!
//! Profile lookup only: there are no credentials.

use chrono::Utc;
use neo_core::entities::{Record, StoredRecord, User, UserProfile};

use crate::error::ProfileError;
use crate::store::RecordStore;

/// The profile for `email` in a snapshot.
#[must_use]
pub fn find_profile<'a>(records: &'a [StoredRecord], email: &str) -> Option<&'a UserProfile> {
    records
        .iter()
        .filter_map(StoredRecord::as_user)
        .find(|profile| profile.user_email == email)
}

/// Create a profile for `user`.
///
/// # Errors
///
/// Returns [`ProfileError::AlreadyRegistered`] when the email already has a
/// profile, or [`ProfileError::Persistence`] when the create fails.
pub async fn register<S: RecordStore>(store: &S, user: &User) -> Result<StoredRecord, ProfileError> {
    if find_profile(&store.snapshot(), &user.email).is_some() {
        return Err(ProfileError::AlreadyRegistered {
            email: user.email.clone(),
        });
    }

    let stored = store
        .create(Record::User(UserProfile {
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            created_at: Utc::now(),
        }))
        .await?;
    tracing::info!(email = %user.email, "profile registered");
    Ok(stored)
}

/// Resolve `email` to the registered user, with the stored display name.
///
/// # Errors
///
/// Returns [`ProfileError::NotRegistered`] when no profile exists.
pub fn sign_in(records: &[StoredRecord], email: &str) -> Result<User, ProfileError> {
    let email = email.trim();
    find_profile(records, email)
        .map(|profile| User {
            email: profile.user_email.clone(),
            name: profile.user_name.clone(),
        })
        .ok_or_else(|| ProfileError::NotRegistered {
            email: email.to_string(),
        })
}
