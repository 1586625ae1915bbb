// src/error.rs
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Falha de validação de um formulário (campo obrigatório vazio,
    // e-mail fora do domínio institucional, e-mail duplicado, etc.)
    #[error("{0}")]
    Validation(String),

    #[error("Registro não encontrado: {0}")]
    NotFound(String),

    #[error("Erro ao renderizar template: {0}")]
    Template(#[from] askama::Error),
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Template(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao montar a página.".to_string(),
            ),
        };

        // Página HTML simples de erro
        (status, Html(format!(r#"
            <!DOCTYPE html><html><head><title>Erro</title><style>body{{font-family:sans-serif;}}</style></head>
            <body><h1>Erro {status_code}</h1><p>{message}</p><a href="javascript:history.back()">Voltar</a></body></html>
         "#, status_code=status.as_u16(), message=user_message))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
