// src/web/routes.rs
use crate::{
    state::AppState,
    web::{admin_handlers, email_handlers, public_handlers},
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route("/", get(public_handlers::show_public_page))
        .route(
            "/cadastro",
            get(public_handlers::show_registration_form)
                .post(public_handlers::handle_registration),
        );

    // --- Rotas Administrativas ---
    // O portal não tem autenticação: a área administrativa é aberta.
    let admin_routes = Router::new()
        .route("/", get(admin_handlers::show_dashboard))
        .route("/eventos", get(admin_handlers::show_admin_eventos))
        .route(
            "/eventos/novo",
            get(admin_handlers::show_create_evento_form).post(admin_handlers::handle_create_evento),
        )
        .route(
            "/eventos/{id}/editar",
            get(admin_handlers::show_edit_evento_form).post(admin_handlers::handle_edit_evento),
        )
        .route("/eventos/{id}/excluir", post(admin_handlers::handle_delete_evento))
        .route("/usuarios", get(admin_handlers::show_admin_usuarios))
        .route(
            "/usuarios/novo",
            get(admin_handlers::show_create_usuario_form)
                .post(admin_handlers::handle_create_usuario),
        )
        .route(
            "/usuarios/{id}/editar",
            get(admin_handlers::show_edit_usuario_form).post(admin_handlers::handle_edit_usuario),
        )
        .route("/usuarios/{id}/excluir", post(admin_handlers::handle_delete_usuario))
        .route("/emails", get(email_handlers::show_email_panel))
        .route("/emails/enviar", post(email_handlers::handle_send_email));

    Router::new()
        .merge(public_routes)
        .nest("/admin", admin_routes)
        .with_state(app_state)
}
