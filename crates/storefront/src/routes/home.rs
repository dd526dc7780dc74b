//! Home page and greeting handlers.

use axum::extract::Path;

use crate::middleware::OptionalAuth;

/// Home page greeting.
///
/// Logged-in visitors are greeted by name.
pub async fn home(OptionalAuth(user): OptionalAuth) -> String {
    user.map_or_else(
        || "Hola, esta es la página principal!".to_string(),
        |u| format!("Hola, {}! Esta es la página principal.", u.name),
    )
}

/// Personalized greeting.
pub async fn greet(Path(nombre): Path<String>) -> String {
    format!("Bienvenido, {nombre}!")
}
