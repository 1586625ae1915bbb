// src/web/mod.rs
pub mod admin_handlers;
pub mod email_handlers;
pub mod public_handlers;
pub mod routes;

use serde::Deserialize;

/// Feedback das operações, carregado pela query string após o redirect
/// (padrão Post/Redirect/Get: ?success=... / ?error=...).
#[derive(Deserialize, Debug, Default)]
pub struct FeedbackParams {
    pub success: Option<String>,
    pub error: Option<String>,
}
