// src/web/admin_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        event::{EventDraft, LocationType, CAMPI, CATEGORIAS, PUBLICOS_ALVO, TODOS_OS_CAMPUS},
        user::{UserDraft, Vinculo, CURSOS},
    },
    services::{event_service, user_service},
    state::AppState,
    templates::{
        AdminEventosPage, AdminUsuariosPage, DashboardPage, EventoFormPage, UsuarioFormPage,
    },
    web::FeedbackParams,
};
use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
// Form do axum-extra: o extrator padrão não aceita chaves repetidas
// (checkboxes de público-alvo geram target_audience=...&target_audience=...)
use axum_extra::extract::Form;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

// --- Structs para os Formulários ---

#[derive(Deserialize, Debug)]
pub struct EventoForm {
    title: String,
    description: String,
    date: String,
    time: String,
    location: String,
    location_type: String,
    #[serde(default)]
    target_audience: Vec<String>,
    category: String,
    responsible: String,
    #[serde(default)]
    image_url: String,
    campus: String,
}

impl EventoForm {
    /// Valida os campos e converte no draft tipado.
    /// Retorna a mensagem de erro a exibir quando algo está errado.
    fn into_draft(self) -> Result<EventDraft, String> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.time.trim().is_empty()
            || self.location.trim().is_empty()
            || self.category.trim().is_empty()
            || self.responsible.trim().is_empty()
            || self.campus.trim().is_empty()
        {
            return Err("Dados inválidos. Verifique todos os campos do evento.".to_string());
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Data do evento inválida (use o formato aaaa-mm-dd).".to_string())?;

        let location_type = match self.location_type.as_str() {
            "presencial" => LocationType::Presencial,
            "online" => LocationType::Online,
            "hibrido" => LocationType::Hibrido,
            _ => return Err("Tipo de local inválido.".to_string()),
        };

        let image_url = match self.image_url.trim() {
            "" => None,
            url => Some(url.to_string()),
        };

        Ok(EventDraft {
            title: self.title,
            description: self.description,
            date,
            time: self.time,
            location: self.location,
            location_type,
            target_audience: self.target_audience,
            category: self.category,
            responsible: self.responsible,
            image_url,
            campus: self.campus,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct UsuarioForm {
    name: String,
    email: String,
    campus: String,
    tipo: String,
    #[serde(default)]
    curso: String,
    #[serde(default)]
    area: String,
}

impl UsuarioForm {
    fn into_draft(self) -> Result<UserDraft, String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.campus.trim().is_empty()
        {
            return Err("Dados inválidos. Verifique todos os campos do usuário.".to_string());
        }

        // O tipo escolhe a variante: aluno carrega curso, professor carrega área
        let vinculo = match self.tipo.as_str() {
            "aluno" => Vinculo::Aluno { curso: self.curso },
            "professor" => Vinculo::Professor { area: self.area },
            _ => return Err("Tipo de usuário inválido.".to_string()),
        };

        Ok(UserDraft {
            name: self.name,
            email: self.email,
            campus: self.campus,
            vinculo,
        })
    }
}

/// Opções de campus do formulário de evento (campi fixos + "Todos os Campus").
fn campi_para_eventos() -> Vec<String> {
    let mut campi: Vec<String> = CAMPI.iter().map(|c| c.to_string()).collect();
    campi.push(TODOS_OS_CAMPUS.to_string());
    campi
}

// --- Dashboard ---

/// Handler para GET /admin - Estatísticas e próximos eventos
pub async fn show_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    tracing::debug!("GET /admin: carregando dashboard...");

    let eventos = state.events.snapshot().await;
    let usuarios = state.users.snapshot().await;
    let hoje = Local::now().date_naive();

    let stats = event_service::calcular_stats(&eventos, &usuarios, hoje);
    let mut proximos = event_service::eventos_futuros(&eventos, hoje);
    proximos.truncate(5);

    let template = DashboardPage { stats, proximos };
    Ok(Html(template.render()?))
}

// --- Gestão de Eventos ---

/// Handler para GET /admin/eventos - Lista de eventos com ações
pub async fn show_admin_eventos(
    State(state): State<AppState>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    let template = AdminEventosPage {
        eventos: state.events.snapshot().await,
        success_message: params.success,
        error_message: params.error,
    };
    Ok(Html(template.render()?))
}

/// Handler para GET /admin/eventos/novo - Formulário de criação
pub async fn show_create_evento_form(
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    let template = EventoFormPage {
        evento: None,
        publicos: PUBLICOS_ALVO,
        categorias: CATEGORIAS,
        campi: campi_para_eventos(),
        error_message: params.error,
    };
    Ok(Html(template.render()?))
}

/// Handler para POST /admin/eventos/novo - Cria um novo evento
pub async fn handle_create_evento(
    State(state): State<AppState>,
    Form(form): Form<EventoForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /admin/eventos/novo: criando evento '{}'", form.title);

    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(msg) => {
            let error_msg = urlencoding::encode(&msg);
            let redirect_url = format!("/admin/eventos/novo?error={}", error_msg);
            return Ok(Redirect::to(&redirect_url));
        }
    };

    event_service::criar_evento(&state.events, draft).await;
    let success_msg = urlencoding::encode("Evento criado com sucesso!");
    let redirect_url = format!("/admin/eventos?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
}

/// Handler para GET /admin/eventos/{id}/editar - Formulário de edição
pub async fn show_edit_evento_form(
    State(state): State<AppState>,
    Path(evento_id): Path<String>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    let Some(evento) = event_service::buscar_evento(&state.events, &evento_id).await else {
        tracing::warn!("Tentativa de editar evento inexistente: {}", evento_id);
        return Err(AppError::NotFound(format!("evento '{}'", evento_id)));
    };

    let template = EventoFormPage {
        evento: Some(evento),
        publicos: PUBLICOS_ALVO,
        categorias: CATEGORIAS,
        campi: campi_para_eventos(),
        error_message: params.error,
    };
    Ok(Html(template.render()?))
}

/// Handler para POST /admin/eventos/{id}/editar - Processa a edição
pub async fn handle_edit_evento(
    State(state): State<AppState>,
    Path(evento_id): Path<String>,
    Form(form): Form<EventoForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /admin/eventos/{}/editar: processando edição", evento_id);

    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(msg) => {
            let error_msg = urlencoding::encode(&msg);
            let redirect_url = format!("/admin/eventos/{}/editar?error={}", evento_id, error_msg);
            return Ok(Redirect::to(&redirect_url));
        }
    };

    // ID inexistente é no-op no serviço (precondição violada, não erro de usuário)
    event_service::atualizar_evento(&state.events, &evento_id, draft).await;
    let success_msg = urlencoding::encode("Evento atualizado com sucesso!");
    let redirect_url = format!("/admin/eventos?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
}

/// Handler para POST /admin/eventos/{id}/excluir - Remove o evento
pub async fn handle_delete_evento(
    State(state): State<AppState>,
    Path(evento_id): Path<String>,
) -> AppResult<Redirect> {
    event_service::excluir_evento(&state.events, &evento_id).await;
    let success_msg = urlencoding::encode("Evento removido com sucesso!");
    let redirect_url = format!("/admin/eventos?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
}

// --- Gestão de Usuários ---

/// Handler para GET /admin/usuarios - Lista de usuários com ações
pub async fn show_admin_usuarios(
    State(state): State<AppState>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    let template = AdminUsuariosPage {
        usuarios: state.users.snapshot().await,
        success_message: params.success,
        error_message: params.error,
    };
    Ok(Html(template.render()?))
}

/// Handler para GET /admin/usuarios/novo - Formulário de criação
pub async fn show_create_usuario_form(
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    let template = UsuarioFormPage {
        usuario: None,
        campi: CAMPI,
        cursos: CURSOS,
        error_message: params.error,
    };
    Ok(Html(template.render()?))
}

/// Handler para POST /admin/usuarios/novo - Cria um novo usuário.
/// O fluxo administrativo não passa pelo gate de cadastro público.
pub async fn handle_create_usuario(
    State(state): State<AppState>,
    Form(form): Form<UsuarioForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /admin/usuarios/novo: criando usuário '{}'", form.name);

    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(msg) => {
            let error_msg = urlencoding::encode(&msg);
            let redirect_url = format!("/admin/usuarios/novo?error={}", error_msg);
            return Ok(Redirect::to(&redirect_url));
        }
    };

    user_service::criar_usuario(&state.users, draft).await;
    let success_msg = urlencoding::encode("Usuário criado com sucesso!");
    let redirect_url = format!("/admin/usuarios?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
}

/// Handler para GET /admin/usuarios/{id}/editar - Formulário de edição
pub async fn show_edit_usuario_form(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    let Some(usuario) = user_service::buscar_usuario(&state.users, &user_id).await else {
        tracing::warn!("Tentativa de editar usuário inexistente: {}", user_id);
        return Err(AppError::NotFound(format!("usuário '{}'", user_id)));
    };

    let template = UsuarioFormPage {
        usuario: Some(usuario),
        campi: CAMPI,
        cursos: CURSOS,
        error_message: params.error,
    };
    Ok(Html(template.render()?))
}

/// Handler para POST /admin/usuarios/{id}/editar - Processa a edição
pub async fn handle_edit_usuario(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Form(form): Form<UsuarioForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /admin/usuarios/{}/editar: processando edição", user_id);

    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(msg) => {
            let error_msg = urlencoding::encode(&msg);
            let redirect_url = format!("/admin/usuarios/{}/editar?error={}", user_id, error_msg);
            return Ok(Redirect::to(&redirect_url));
        }
    };

    user_service::atualizar_usuario(&state.users, &user_id, draft).await;
    let success_msg = urlencoding::encode("Usuário atualizado com sucesso!");
    let redirect_url = format!("/admin/usuarios?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
}

/// Handler para POST /admin/usuarios/{id}/excluir - Remove o usuário
pub async fn handle_delete_usuario(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Redirect> {
    user_service::excluir_usuario(&state.users, &user_id).await;
    let success_msg = urlencoding::encode("Usuário removido com sucesso!");
    let redirect_url = format!("/admin/usuarios?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
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

    fn app() -> (AppState, Router) {
        let state = AppState {
            events: EventStore::seeded(data::seed_events()),
            users: UserStore::seeded(data::seed_users()),
        };
        (state.clone(), routes::create_router(state))
    }

    fn post_form(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn criar_evento_aceita_varios_publicos_alvo_no_formulario() {
        let (state, app) = app();
        // Checkboxes marcados chegam como chaves repetidas no corpo
        let body = "title=Semana+de+Inova%C3%A7%C3%A3o&description=Oficinas+e+palestras\
                    &date=2025-03-10&time=14%3A00&location=Audit%C3%B3rio+Central\
                    &location_type=presencial&target_audience=Alunos&target_audience=Professores\
                    &category=Workshop&responsible=Prof.+Ana&campus=Cambuci";

        let resposta = app.oneshot(post_form("/admin/eventos/novo", body)).await.unwrap();

        assert_eq!(resposta.status(), StatusCode::SEE_OTHER);
        let destino = resposta.headers()[header::LOCATION].to_str().unwrap();
        assert!(destino.starts_with("/admin/eventos?success="));

        let eventos = state.events.snapshot().await;
        assert_eq!(eventos.len(), 6);
        assert_eq!(eventos[0].title, "Semana de Inovação");
        assert_eq!(eventos[0].target_audience, vec!["Alunos", "Professores"]);
    }

    #[tokio::test]
    async fn editar_evento_inexistente_responde_404() {
        let (_, app) = app();
        let requisicao = Request::builder()
            .uri("/admin/eventos/nao-existe/editar")
            .body(Body::empty())
            .unwrap();

        let resposta = app.oneshot(requisicao).await.unwrap();
        assert_eq!(resposta.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn editar_usuario_inexistente_responde_404() {
        let (_, app) = app();
        let requisicao = Request::builder()
            .uri("/admin/usuarios/nao-existe/editar")
            .body(Body::empty())
            .unwrap();

        let resposta = app.oneshot(requisicao).await.unwrap();
        assert_eq!(resposta.status(), StatusCode::NOT_FOUND);
    }
}
