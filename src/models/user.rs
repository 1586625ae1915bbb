// src/models/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event::FILTRO_TODOS;

/// Cursos oferecidos (lista fixa dos formulários).
pub const CURSOS: &[&str] = &[
    "Administração",
    "Eletrotécnica",
    "Informática",
    "Química",
    "Mecânica",
    "Automação Industrial",
    "Sistemas de Informação",
    "Engenharia Mecânica",
    "Licenciatura em Química",
];

/// Substrings que marcam um e-mail como institucional.
/// Basta conter uma delas para passar no cadastro público.
pub const DOMINIOS_INSTITUCIONAIS: &[&str] = &["universidade.edu.br", "ufx.edu.br", "@edu.br"];

/// Vínculo do usuário com a instituição. Cada variante carrega apenas
/// o campo que lhe diz respeito (curso para alunos, área para professores),
/// em vez de uma struct com os dois campos opcionais ao mesmo tempo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Vinculo {
    Aluno { curso: String },
    Professor { area: String },
}

impl Vinculo {
    pub fn is_aluno(&self) -> bool {
        matches!(self, Vinculo::Aluno { .. })
    }

    pub fn is_professor(&self) -> bool {
        matches!(self, Vinculo::Professor { .. })
    }

    /// Curso, quando o usuário é aluno.
    pub fn curso(&self) -> Option<&str> {
        match self {
            Vinculo::Aluno { curso } => Some(curso),
            Vinculo::Professor { .. } => None,
        }
    }

    /// Área de atuação, quando o usuário é professor.
    pub fn area(&self) -> Option<&str> {
        match self {
            Vinculo::Aluno { .. } => None,
            Vinculo::Professor { area } => Some(area),
        }
    }

    pub fn tipo(&self) -> &'static str {
        match self {
            Vinculo::Aluno { .. } => "aluno",
            Vinculo::Professor { .. } => "professor",
        }
    }

    /// Texto exibido no badge do usuário (curso, área ou o tipo).
    pub fn label(&self) -> &str {
        match self {
            Vinculo::Aluno { curso } if !curso.is_empty() => curso,
            Vinculo::Professor { area } if !area.is_empty() => area,
            Vinculo::Aluno { .. } => "Aluno",
            Vinculo::Professor { .. } => "Professor",
        }
    }
}

/// Um usuário cadastrado (aluno ou professor).
/// `id` e `created_at` são atribuídos uma única vez, na criação.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub campus: String,
    #[serde(flatten)]
    pub vinculo: Vinculo,
    pub created_at: DateTime<Utc>,
}

/// Campos editáveis de um usuário (tudo exceto `id`/`created_at`).
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub campus: String,
    pub vinculo: Vinculo,
}

/// Critérios do filtro de destinatários do painel de e-mails.
/// AND entre os três; o sentinela "all" desliga o critério.
#[derive(Debug, Clone)]
pub struct RecipientFilter {
    pub campus: String,
    pub tipo: String,
    pub curso: String,
}

impl Default for RecipientFilter {
    fn default() -> Self {
        RecipientFilter {
            campus: FILTRO_TODOS.to_string(),
            tipo: FILTRO_TODOS.to_string(),
            curso: FILTRO_TODOS.to_string(),
        }
    }
}
