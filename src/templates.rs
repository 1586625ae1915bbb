// src/templates.rs
use askama::Template;

use crate::models::{
    event::{Event, EventFilter},
    user::{RecipientFilter, User},
};
use crate::services::event_service::DashboardStats;

/// Página pública com a listagem filtrada de eventos.
#[derive(Template)]
#[template(path = "public.html")]
pub struct PublicPage {
    pub eventos: Vec<Event>,
    pub filtro: EventFilter,
    pub campus_opcoes: Vec<String>,
    pub categoria_opcoes: Vec<String>,
    pub publico_opcoes: &'static [&'static str],
}

impl PublicPage {
    pub fn campus_ativo(&self, campus: &str) -> bool {
        self.filtro.campus == campus
    }

    pub fn categoria_ativa(&self, categoria: &str) -> bool {
        self.filtro.category == categoria
    }

    pub fn publico_ativo(&self, publico: &str) -> bool {
        self.filtro.audience == publico
    }
}

/// Formulário público de cadastro de aluno.
#[derive(Template)]
#[template(path = "cadastro.html")]
pub struct CadastroPage {
    pub campi: &'static [&'static str],
    pub cursos: &'static [&'static str],
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

/// Dashboard administrativo: estatísticas e próximos eventos.
#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct DashboardPage {
    pub stats: DashboardStats,
    pub proximos: Vec<Event>,
}

#[derive(Template)]
#[template(path = "admin_eventos.html")]
pub struct AdminEventosPage {
    pub eventos: Vec<Event>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// Formulário de criação/edição de evento. `evento = None` é criação.
#[derive(Template)]
#[template(path = "evento_form.html")]
pub struct EventoFormPage {
    pub evento: Option<Event>,
    pub publicos: &'static [&'static str],
    pub categorias: &'static [&'static str],
    pub campi: Vec<String>,
    pub error_message: Option<String>,
}

impl EventoFormPage {
    /// Verifica se o público já está marcado no evento em edição.
    pub fn tem_publico(&self, publico: &str) -> bool {
        self.evento
            .as_ref()
            .map(|e| e.target_audience.iter().any(|p| p == publico))
            .unwrap_or(false)
    }

    /// Valor atual da modalidade ("presencial" por padrão na criação).
    pub fn tipo_local(&self) -> &str {
        match &self.evento {
            Some(e) => match e.location_type {
                crate::models::event::LocationType::Presencial => "presencial",
                crate::models::event::LocationType::Online => "online",
                crate::models::event::LocationType::Hibrido => "hibrido",
            },
            None => "presencial",
        }
    }

    pub fn titulo(&self) -> &str {
        self.evento.as_ref().map(|e| e.title.as_str()).unwrap_or("")
    }

    pub fn descricao(&self) -> &str {
        self.evento.as_ref().map(|e| e.description.as_str()).unwrap_or("")
    }

    /// Data no formato aaaa-mm-dd esperado pelo input type="date".
    pub fn data_iso(&self) -> String {
        self.evento
            .as_ref()
            .map(|e| e.date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn horario(&self) -> &str {
        self.evento.as_ref().map(|e| e.time.as_str()).unwrap_or("")
    }

    pub fn local(&self) -> &str {
        self.evento.as_ref().map(|e| e.location.as_str()).unwrap_or("")
    }

    pub fn categoria_atual(&self) -> &str {
        self.evento.as_ref().map(|e| e.category.as_str()).unwrap_or("")
    }

    pub fn responsavel(&self) -> &str {
        self.evento.as_ref().map(|e| e.responsible.as_str()).unwrap_or("")
    }

    pub fn imagem(&self) -> &str {
        self.evento
            .as_ref()
            .and_then(|e| e.image_url.as_deref())
            .unwrap_or("")
    }

    pub fn campus_atual(&self) -> &str {
        self.evento.as_ref().map(|e| e.campus.as_str()).unwrap_or("")
    }
}

#[derive(Template)]
#[template(path = "admin_usuarios.html")]
pub struct AdminUsuariosPage {
    pub usuarios: Vec<User>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// Formulário de criação/edição de usuário. `usuario = None` é criação.
#[derive(Template)]
#[template(path = "usuario_form.html")]
pub struct UsuarioFormPage {
    pub usuario: Option<User>,
    pub campi: &'static [&'static str],
    pub cursos: &'static [&'static str],
    pub error_message: Option<String>,
}

impl UsuarioFormPage {
    pub fn nome(&self) -> &str {
        self.usuario.as_ref().map(|u| u.name.as_str()).unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.usuario.as_ref().map(|u| u.email.as_str()).unwrap_or("")
    }

    pub fn campus_atual(&self) -> &str {
        self.usuario.as_ref().map(|u| u.campus.as_str()).unwrap_or("")
    }

    pub fn tipo_atual(&self) -> &str {
        self.usuario
            .as_ref()
            .map(|u| u.vinculo.tipo())
            .unwrap_or("aluno")
    }

    pub fn curso_atual(&self) -> &str {
        self.usuario
            .as_ref()
            .and_then(|u| u.vinculo.curso())
            .unwrap_or("")
    }

    pub fn area_atual(&self) -> &str {
        self.usuario
            .as_ref()
            .and_then(|u| u.vinculo.area())
            .unwrap_or("")
    }
}

/// Painel de composição e envio de e-mails.
#[derive(Template)]
#[template(path = "emails.html")]
pub struct EmailPage {
    pub eventos: Vec<Event>,
    pub destinatarios: Vec<User>,
    pub filtro: RecipientFilter,
    pub campus_opcoes: Vec<String>,
    pub curso_opcoes: Vec<String>,
    pub evento_selecionado: Option<String>,
    pub assunto: String,
    pub mensagem: String,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl EmailPage {
    pub fn evento_esta_selecionado(&self, evento_id: &str) -> bool {
        self.evento_selecionado.as_deref() == Some(evento_id)
    }

    pub fn campus_ativo(&self, campus: &str) -> bool {
        self.filtro.campus == campus
    }

    pub fn tipo_ativo(&self, tipo: &str) -> bool {
        self.filtro.tipo == tipo
    }

    pub fn curso_ativo(&self, curso: &str) -> bool {
        self.filtro.curso == curso
    }
}
