// src/web/email_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{event::FILTRO_TODOS, user::RecipientFilter},
    services::{email_service, event_service},
    state::AppState,
    templates::EmailPage,
};
use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
};
// Form do axum-extra: a seleção manual envia destinatarios=...&destinatarios=...
use axum_extra::extract::Form;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct EmailPanelParams {
    /// Evento selecionado para divulgação (pré-preenche assunto e mensagem)
    pub evento: Option<String>,
    pub campus: Option<String>,
    pub tipo: Option<String>,
    pub curso: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct EnvioForm {
    #[serde(default)]
    evento_id: String,
    assunto: String,
    mensagem: String,
    #[serde(default)]
    campus: String,
    #[serde(default)]
    tipo: String,
    #[serde(default)]
    curso: String,
    /// Seleção manual de destinatários (checkboxes); vazia = usa o filtro
    #[serde(default)]
    destinatarios: Vec<String>,
}

fn filtro_de(campus: Option<String>, tipo: Option<String>, curso: Option<String>) -> RecipientFilter {
    RecipientFilter {
        campus: campus.unwrap_or_else(|| FILTRO_TODOS.to_string()),
        tipo: tipo.unwrap_or_else(|| FILTRO_TODOS.to_string()),
        curso: curso.unwrap_or_else(|| FILTRO_TODOS.to_string()),
    }
}

/// Handler para GET /admin/emails - Painel de composição e destinatários.
/// Selecionar um evento pré-preenche assunto e mensagem com o convite padrão.
pub async fn show_email_panel(
    State(state): State<AppState>,
    Query(params): Query<EmailPanelParams>,
) -> AppResult<impl IntoResponse> {
    let eventos = state.events.snapshot().await;
    let usuarios = state.users.snapshot().await;

    let filtro = filtro_de(params.campus, params.tipo, params.curso);
    let destinatarios = email_service::filtrar_destinatarios(&usuarios, &filtro);

    // Pré-preenchimento de conveniência a partir do evento escolhido
    let (evento_selecionado, assunto, mensagem) = match params.evento {
        Some(evento_id) if !evento_id.is_empty() => {
            match event_service::buscar_evento(&state.events, &evento_id).await {
                Some(evento) => {
                    let (assunto, mensagem) = email_service::montar_convite(&evento);
                    (Some(evento_id), assunto, mensagem)
                }
                None => (None, String::new(), String::new()),
            }
        }
        _ => (None, String::new(), String::new()),
    };

    let template = EmailPage {
        campus_opcoes: email_service::opcoes_de_campus(&usuarios),
        curso_opcoes: email_service::opcoes_de_curso(&usuarios),
        eventos,
        destinatarios,
        filtro,
        evento_selecionado,
        assunto,
        mensagem,
        success_message: params.success,
        error_message: params.error,
    };
    Ok(Html(template.render()?))
}

/// Handler para POST /admin/emails/enviar - Simula o envio da campanha.
/// O formulário só chega aqui após a confirmação explícita do operador.
pub async fn handle_send_email(
    State(state): State<AppState>,
    Form(form): Form<EnvioForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /admin/emails/enviar: resolvendo destinatários...");

    let usuarios = state.users.snapshot().await;
    let filtro = RecipientFilter {
        campus: if form.campus.is_empty() { FILTRO_TODOS.to_string() } else { form.campus },
        tipo: if form.tipo.is_empty() { FILTRO_TODOS.to_string() } else { form.tipo },
        curso: if form.curso.is_empty() { FILTRO_TODOS.to_string() } else { form.curso },
    };
    let filtrados = email_service::filtrar_destinatarios(&usuarios, &filtro);
    let destinatarios = email_service::resolver_destinatarios(&filtrados, &form.destinatarios);

    let evento_id = if form.evento_id.is_empty() {
        None
    } else {
        Some(form.evento_id)
    };

    match email_service::enviar_campanha(evento_id, &form.assunto, &form.mensagem, destinatarios)
        .await
    {
        Ok(campanha) => {
            // Sucesso: o formulário volta limpo (nada da campanha é retido)
            let success_msg = urlencoding::encode(&format!(
                "Email enviado com sucesso para {} destinatário(s)!",
                campanha.recipients.len()
            ))
            .to_string();
            let redirect_url = format!("/admin/emails?success={}", success_msg);
            Ok(Redirect::to(&redirect_url))
        }
        Err(AppError::Validation(msg)) => {
            let error_msg = urlencoding::encode(&msg);
            let redirect_url = format!("/admin/emails?error={}", error_msg);
            Ok(Redirect::to(&redirect_url))
        }
        Err(e) => Err(e),
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

    #[tokio::test(start_paused = true)]
    async fn envio_com_destinatarios_marcados_usa_a_selecao_manual() {
        // Dois checkboxes marcados: o corpo repete a chave destinatarios
        let body = "evento_id=&assunto=Convite&mensagem=Ol%C3%A1&campus=all&tipo=all&curso=all\
                    &destinatarios=joao.silva%40universidade.edu.br\
                    &destinatarios=maria.santos%40universidade.edu.br";
        let requisicao = Request::builder()
            .method("POST")
            .uri("/admin/emails/enviar")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();

        let resposta = app().oneshot(requisicao).await.unwrap();

        assert_eq!(resposta.status(), StatusCode::SEE_OTHER);
        let destino = resposta.headers()[header::LOCATION].to_str().unwrap();
        assert!(destino.starts_with("/admin/emails?success="));
        // A seleção manual (2 endereços) substitui o conjunto filtrado (15)
        assert!(destino.contains("para%202%20destinat"));
    }

    #[tokio::test(start_paused = true)]
    async fn envio_sem_marcacoes_usa_todo_o_conjunto_filtrado() {
        let body = "evento_id=&assunto=Convite&mensagem=Ol%C3%A1&campus=all&tipo=all&curso=all";
        let requisicao = Request::builder()
            .method("POST")
            .uri("/admin/emails/enviar")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();

        let resposta = app().oneshot(requisicao).await.unwrap();

        assert_eq!(resposta.status(), StatusCode::SEE_OTHER);
        let destino = resposta.headers()[header::LOCATION].to_str().unwrap();
        assert!(destino.contains("para%2015%20destinat"));
    }
}
