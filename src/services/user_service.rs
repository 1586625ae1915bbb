// src/services/user_service.rs
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserDraft, Vinculo, DOMINIOS_INSTITUCIONAIS},
    state::UserStore,
};

/// Dados do formulário público de cadastro de aluno.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub campus: String,
    pub curso: String,
}

/// Busca um usuário pelo seu ID.
pub async fn buscar_usuario(store: &UserStore, user_id: &str) -> Option<User> {
    store
        .snapshot()
        .await
        .into_iter()
        .find(|u| u.id == user_id)
}

/// Verifica se o e-mail é institucional (basta conter um dos domínios).
pub fn email_institucional(email: &str) -> bool {
    let email = email.to_lowercase();
    DOMINIOS_INSTITUCIONAIS
        .iter()
        .any(|dominio| email.contains(dominio))
}

/// Verifica se o e-mail já pertence a algum usuário (case-insensitive).
pub fn email_ja_cadastrado(usuarios: &[User], email: &str) -> bool {
    usuarios
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(email))
}

/// Cria um novo usuário (fluxo administrativo, sem passar pelo gate de
/// cadastro público): atribui ID único e timestamp de criação e insere
/// no início da coleção.
pub async fn criar_usuario(store: &UserStore, draft: UserDraft) -> User {
    let usuario = User {
        id: Uuid::new_v4().to_string(),
        name: draft.name,
        email: draft.email,
        campus: draft.campus,
        vinculo: draft.vinculo,
        created_at: Utc::now(),
    };

    let mut usuarios = store.write().await;
    usuarios.insert(0, usuario.clone());
    tracing::info!("✅ Usuário '{}' criado (id {}).", usuario.name, usuario.id);
    usuario
}

/// Cadastro público de aluno. Duas verificações, nesta ordem:
/// 1. o e-mail precisa ser institucional;
/// 2. o e-mail não pode já estar cadastrado (case-insensitive).
/// Passando ambas, delega à criação normal com vínculo de aluno.
pub async fn registrar_aluno(store: &UserStore, draft: RegistrationDraft) -> AppResult<User> {
    if !email_institucional(&draft.email) {
        tracing::warn!("Cadastro rejeitado: e-mail '{}' fora do domínio institucional.", draft.email);
        return Err(AppError::Validation(
            "Por favor, utilize um e-mail institucional da universidade.".to_string(),
        ));
    }

    {
        let usuarios = store.snapshot().await;
        if email_ja_cadastrado(&usuarios, &draft.email) {
            tracing::warn!("Cadastro rejeitado: e-mail '{}' já existe.", draft.email);
            return Err(AppError::Validation(
                "Este e-mail já está cadastrado na plataforma!".to_string(),
            ));
        }
    }

    let usuario = criar_usuario(
        store,
        UserDraft {
            name: draft.name,
            email: draft.email,
            campus: draft.campus,
            vinculo: Vinculo::Aluno { curso: draft.curso },
        },
    )
    .await;

    Ok(usuario)
}

/// Substitui todos os campos do usuário, exceto `id` e `created_at`.
/// No-op silencioso se o ID não existir.
pub async fn atualizar_usuario(store: &UserStore, user_id: &str, draft: UserDraft) {
    let mut usuarios = store.write().await;
    match usuarios.iter_mut().find(|u| u.id == user_id) {
        Some(usuario) => {
            usuario.name = draft.name;
            usuario.email = draft.email;
            usuario.campus = draft.campus;
            usuario.vinculo = draft.vinculo;
            tracing::info!("✅ Usuário {} atualizado.", user_id);
        }
        None => {
            tracing::warn!("Update ignorado: usuário '{}' não encontrado.", user_id);
        }
    }
}

/// Remove o usuário da coleção. No-op se o ID não existir; irreversível.
pub async fn excluir_usuario(store: &UserStore, user_id: &str) {
    let mut usuarios = store.write().await;
    let antes = usuarios.len();
    usuarios.retain(|u| u.id != user_id);
    if usuarios.len() < antes {
        tracing::info!("Usuário {} removido.", user_id);
    } else {
        tracing::warn!("Exclusão ignorada: usuário '{}' não encontrado.", user_id);
    }
}
