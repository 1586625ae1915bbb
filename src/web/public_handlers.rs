// src/web/public_handlers.rs
use crate::{
    error::AppResult,
    models::{
        event::{EventFilter, CAMPI, FILTRO_TODOS, PUBLICOS_ALVO},
        user::CURSOS,
    },
    services::{event_service, user_service},
    state::AppState,
    templates::{CadastroPage, PublicPage},
    web::FeedbackParams,
};
use askama::Template;
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use chrono::Local;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct EventFilterParams {
    pub q: Option<String>,
    pub campus: Option<String>,
    pub categoria: Option<String>,
    pub publico: Option<String>,
}

impl EventFilterParams {
    fn into_filter(self) -> EventFilter {
        EventFilter {
            search: self.q.unwrap_or_default(),
            campus: self.campus.unwrap_or_else(|| FILTRO_TODOS.to_string()),
            category: self.categoria.unwrap_or_else(|| FILTRO_TODOS.to_string()),
            audience: self.publico.unwrap_or_else(|| FILTRO_TODOS.to_string()),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CadastroForm {
    name: String,
    email: String,
    campus: String,
    curso: String,
}

/// Handler para GET / - Listagem pública de eventos com filtros
pub async fn show_public_page(
    State(state): State<AppState>,
    Query(params): Query<EventFilterParams>,
) -> AppResult<impl IntoResponse> {
    let filtro = params.into_filter();
    tracing::debug!("GET /: listagem pública com filtro {:?}", filtro);

    let eventos = state.events.snapshot().await;
    let hoje = Local::now().date_naive();

    let template = PublicPage {
        campus_opcoes: event_service::opcoes_de_campus(&eventos),
        categoria_opcoes: event_service::opcoes_de_categoria(&eventos),
        publico_opcoes: PUBLICOS_ALVO,
        eventos: event_service::filtrar_eventos(&eventos, &filtro, hoje),
        filtro,
    };
    Ok(Html(template.render()?))
}

/// Handler para GET /cadastro - Formulário público de cadastro de aluno
pub async fn show_registration_form(
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    let template = CadastroPage {
        campi: CAMPI,
        cursos: CURSOS,
        error_message: params.error,
        success_message: params.success,
    };
    Ok(Html(template.render()?))
}

/// Handler para POST /cadastro - Processa o cadastro público.
/// Validações na ordem: campos obrigatórios, domínio institucional,
/// e-mail duplicado. Qualquer falha aborta sem criar nada.
pub async fn handle_registration(
    State(state): State<AppState>,
    Form(form): Form<CadastroForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /cadastro: tentativa de cadastro para '{}'", form.email);

    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.campus.trim().is_empty()
        || form.curso.trim().is_empty()
    {
        let error_msg = urlencoding::encode("Preencha todos os campos do cadastro.");
        let redirect_url = format!("/cadastro?error={}", error_msg);
        return Ok(Redirect::to(&redirect_url));
    }

    let draft = user_service::RegistrationDraft {
        name: form.name,
        email: form.email,
        campus: form.campus,
        curso: form.curso,
    };

    match user_service::registrar_aluno(&state.users, draft).await {
        Ok(usuario) => {
            tracing::info!("Cadastro público concluído para '{}'.", usuario.email);
            let success_msg = urlencoding::encode(
                "Cadastro realizado com sucesso! Você receberá notificações sobre eventos.",
            );
            let redirect_url = format!("/cadastro?success={}", success_msg);
            Ok(Redirect::to(&redirect_url))
        }
        Err(e) => {
            // O gate devolve a mensagem exata a exibir (domínio ou duplicidade)
            let mensagem = e.to_string();
            let error_msg = urlencoding::encode(&mensagem);
            let redirect_url = format!("/cadastro?error={}", error_msg);
            Ok(Redirect::to(&redirect_url))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        data,
        state::{AppState, EventStore, UserStore},
        web::routes,
    };
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState {
            events: EventStore::seeded(data::seed_events()),
            users: UserStore::seeded(data::seed_users()),
        };
        routes::create_router(state)
    }

    #[tokio::test]
    async fn cadastro_com_email_externo_redireciona_com_a_mensagem_do_gate() {
        let body = "name=Jos%C3%A9+Externo&email=jose%40gmail.com\
                    &campus=Cambuci&curso=Inform%C3%A1tica";
        let requisicao = Request::builder()
            .method("POST")
            .uri("/cadastro")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();

        let resposta = app().oneshot(requisicao).await.unwrap();

        assert_eq!(resposta.status(), StatusCode::SEE_OTHER);
        let destino = resposta.headers()[header::LOCATION].to_str().unwrap();
        assert!(destino.starts_with("/cadastro?error=Por%20favor%2C%20utilize"));
    }
}
