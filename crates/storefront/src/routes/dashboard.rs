//! Dashboard handler (requires authentication).

use axum::Json;

use crate::middleware::RequireAuth;
use crate::models::CurrentUser;

/// Show the logged-in user's identity.
///
/// Anonymous requests are redirected to the login page by the extractor.
pub async fn show(RequireAuth(user): RequireAuth) -> Json<CurrentUser> {
    Json(user)
}
