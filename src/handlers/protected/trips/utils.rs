use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Width of `users.user_id`
const USER_ID_MAX: usize = 36;

/// Effective caller for a trip request.
///
/// A verified token always wins over a `userId` in the query or body; a
/// mismatch is logged and the token's user is used, so the request only ever
/// sees that user's trips.
pub fn resolve_user_id(claimed: Option<String>, auth: Option<&AuthUser>) -> Result<String, ApiError> {
    let user_id = effective_user_id(claimed, auth)?;
    if user_id.chars().count() > USER_ID_MAX {
        return Err(ApiError::bad_request(format!(
            "userId must be at most {} characters",
            USER_ID_MAX
        )));
    }
    Ok(user_id)
}

fn effective_user_id(claimed: Option<String>, auth: Option<&AuthUser>) -> Result<String, ApiError> {
    let claimed = claimed
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match (auth, claimed) {
        (Some(user), Some(claimed)) if claimed != user.user_id => {
            tracing::warn!(
                token_user = %user.user_id,
                claimed_user = %claimed,
                "Ignoring userId that differs from the authenticated user"
            );
            Ok(user.user_id.clone())
        }
        (Some(user), _) => Ok(user.user_id.clone()),
        (None, Some(claimed)) => Ok(claimed),
        (None, None) => Err(ApiError::bad_request("userId is required")),
    }
}
