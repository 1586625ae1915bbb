// src/models/event.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Valor sentinela dos seletores de filtro ("todos").
pub const FILTRO_TODOS: &str = "all";

/// Públicos-alvo reconhecidos pelos formulários.
pub const PUBLICOS_ALVO: &[&str] = &["Alunos", "Professores", "Comunidade", "Funcionários"];

/// Categorias sugeridas (o campo continua a ser texto livre).
pub const CATEGORIAS: &[&str] = &[
    "Palestra",
    "Workshop",
    "Aula Especial",
    "Seminário",
    "Mesa Redonda",
    "Outro",
];

/// Lista fixa de campi da instituição.
pub const CAMPI: &[&str] = &[
    "Bom Jesus do Itabapoana",
    "Cambuci",
    "Itaperuna",
    "Santo Antônio de Pádua",
];

/// Sentinela de campus usado em eventos que abrangem toda a instituição.
pub const TODOS_OS_CAMPUS: &str = "Todos os Campus";

/// Modalidade do evento (define como o campo `location` deve ser lido).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Presencial,
    Online,
    Hibrido,
}

impl LocationType {
    pub fn label(&self) -> &'static str {
        match self {
            LocationType::Presencial => "Presencial",
            LocationType::Online => "Online",
            LocationType::Hibrido => "Híbrido",
        }
    }
}

/// Um evento da instituição.
/// `id` e `created_at` são atribuídos uma única vez, na criação,
/// e nunca alterados por updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Data de calendário do evento (sem timezone).
    pub date: NaiveDate,
    /// Horário de parede, como "14:00". Apenas exibição.
    pub time: String,
    pub location: String,
    pub location_type: LocationType,
    pub target_audience: Vec<String>,
    pub category: String,
    pub responsible: String,
    pub image_url: Option<String>,
    pub campus: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Data formatada no padrão brasileiro (dd/mm/aaaa), para templates e e-mails.
    pub fn date_br(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Campos editáveis de um evento (tudo exceto `id`/`created_at`).
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub location_type: LocationType,
    pub target_audience: Vec<String>,
    pub category: String,
    pub responsible: String,
    pub image_url: Option<String>,
    pub campus: String,
}

/// Critérios do filtro da página pública. Todos combinados com AND;
/// string vazia na busca e o sentinela "all" nos seletores são identidade.
#[derive(Debug, Clone)]
pub struct EventFilter {
    pub search: String,
    pub campus: String,
    pub category: String,
    pub audience: String,
}

impl Default for EventFilter {
    fn default() -> Self {
        EventFilter {
            search: String::new(),
            campus: FILTRO_TODOS.to_string(),
            category: FILTRO_TODOS.to_string(),
            audience: FILTRO_TODOS.to_string(),
        }
    }
}
