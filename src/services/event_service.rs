// src/services/event_service.rs
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    models::{
        event::{Event, EventDraft, EventFilter, FILTRO_TODOS},
        user::User,
    },
    state::EventStore,
};

/// Estatísticas exibidas no dashboard administrativo.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    pub total_eventos: usize,
    pub eventos_futuros: usize,
    pub total_usuarios: usize,
    pub alunos: usize,
    pub professores: usize,
}

fn criterio_todos(valor: &str) -> bool {
    valor.is_empty() || valor == FILTRO_TODOS
}

/// Aplica os cinco critérios da página pública (AND entre todos).
/// A busca textual é case-insensitive sobre título OU descrição; os seletores
/// com o sentinela "all" viram identidade; eventos datados de `hoje` entram,
/// eventos passados ficam de fora. A ordem da coleção de origem é preservada.
pub fn filtrar_eventos(eventos: &[Event], filtro: &EventFilter, hoje: NaiveDate) -> Vec<Event> {
    let busca = filtro.search.trim().to_lowercase();

    eventos
        .iter()
        .filter(|evento| {
            let combina_busca = busca.is_empty()
                || evento.title.to_lowercase().contains(&busca)
                || evento.description.to_lowercase().contains(&busca);
            let combina_campus = criterio_todos(&filtro.campus) || evento.campus == filtro.campus;
            let combina_categoria =
                criterio_todos(&filtro.category) || evento.category == filtro.category;
            let combina_publico = criterio_todos(&filtro.audience)
                || evento.target_audience.iter().any(|p| p == &filtro.audience);
            let eh_futuro = evento.date >= hoje;

            combina_busca && combina_campus && combina_categoria && combina_publico && eh_futuro
        })
        .cloned()
        .collect()
}

/// Eventos de hoje em diante, na ordem da coleção (para o dashboard).
pub fn eventos_futuros(eventos: &[Event], hoje: NaiveDate) -> Vec<Event> {
    eventos.iter().filter(|e| e.date >= hoje).cloned().collect()
}

/// Valores distintos de campus presentes na coleção (para o seletor do filtro).
pub fn opcoes_de_campus(eventos: &[Event]) -> Vec<String> {
    let mut opcoes: Vec<String> = Vec::new();
    for evento in eventos {
        if !opcoes.contains(&evento.campus) {
            opcoes.push(evento.campus.clone());
        }
    }
    opcoes
}

/// Valores distintos de categoria presentes na coleção.
pub fn opcoes_de_categoria(eventos: &[Event]) -> Vec<String> {
    let mut opcoes: Vec<String> = Vec::new();
    for evento in eventos {
        if !opcoes.contains(&evento.category) {
            opcoes.push(evento.category.clone());
        }
    }
    opcoes
}

/// Estatísticas do dashboard a partir das duas coleções.
pub fn calcular_stats(eventos: &[Event], usuarios: &[User], hoje: NaiveDate) -> DashboardStats {
    let alunos = usuarios.iter().filter(|u| u.vinculo.is_aluno()).count();
    DashboardStats {
        total_eventos: eventos.len(),
        eventos_futuros: eventos.iter().filter(|e| e.date >= hoje).count(),
        total_usuarios: usuarios.len(),
        alunos,
        professores: usuarios.len() - alunos,
    }
}

/// Busca um evento pelo seu ID.
pub async fn buscar_evento(store: &EventStore, evento_id: &str) -> Option<Event> {
    store
        .snapshot()
        .await
        .into_iter()
        .find(|e| e.id == evento_id)
}

/// Cria um novo evento: atribui um ID único e o timestamp de criação,
/// e insere no início da coleção (mais recente primeiro).
pub async fn criar_evento(store: &EventStore, draft: EventDraft) -> Event {
    let evento = Event {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        description: draft.description,
        date: draft.date,
        time: draft.time,
        location: draft.location,
        location_type: draft.location_type,
        target_audience: draft.target_audience,
        category: draft.category,
        responsible: draft.responsible,
        image_url: draft.image_url,
        campus: draft.campus,
        created_at: Utc::now(),
    };

    let mut eventos = store.write().await;
    eventos.insert(0, evento.clone());
    tracing::info!("✅ Evento '{}' criado (id {}).", evento.title, evento.id);
    evento
}

/// Substitui todos os campos do evento, exceto `id` e `created_at`.
/// Se o ID não existir, é um no-op silencioso: pela UI esse caminho
/// não é alcançável em operação normal.
pub async fn atualizar_evento(store: &EventStore, evento_id: &str, draft: EventDraft) {
    let mut eventos = store.write().await;
    match eventos.iter_mut().find(|e| e.id == evento_id) {
        Some(evento) => {
            evento.title = draft.title;
            evento.description = draft.description;
            evento.date = draft.date;
            evento.time = draft.time;
            evento.location = draft.location;
            evento.location_type = draft.location_type;
            evento.target_audience = draft.target_audience;
            evento.category = draft.category;
            evento.responsible = draft.responsible;
            evento.image_url = draft.image_url;
            evento.campus = draft.campus;
            tracing::info!("✅ Evento {} atualizado.", evento_id);
        }
        None => {
            tracing::warn!("Update ignorado: evento '{}' não encontrado.", evento_id);
        }
    }
}

/// Remove o evento da coleção. No-op se o ID não existir; irreversível.
pub async fn excluir_evento(store: &EventStore, evento_id: &str) {
    let mut eventos = store.write().await;
    let antes = eventos.len();
    eventos.retain(|e| e.id != evento_id);
    if eventos.len() < antes {
        tracing::info!("Evento {} removido.", evento_id);
    } else {
        tracing::warn!("Exclusão ignorada: evento '{}' não encontrado.", evento_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_events;
    use crate::models::event::LocationType;

    fn hoje_seed() -> NaiveDate {
        // Data de referência entre o primeiro e o último evento do seed
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    fn draft_exemplo() -> EventDraft {
        EventDraft {
            title: "Feira de Profissões".to_string(),
            description: "Apresentação dos cursos da instituição.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: "13:00".to_string(),
            location: "Pátio Central".to_string(),
            location_type: LocationType::Presencial,
            target_audience: vec!["Comunidade".to_string()],
            category: "Outro".to_string(),
            responsible: "Coordenação Geral".to_string(),
            image_url: None,
            campus: "Cambuci".to_string(),
        }
    }

    #[test]
    fn filtro_vazio_eh_identidade_sobre_futuros() {
        let eventos = seed_events();
        let resultado = filtrar_eventos(&eventos, &EventFilter::default(), hoje_seed());
        // Todos os critérios no sentinela: sobra apenas o corte de data
        let esperado: Vec<String> = eventos
            .iter()
            .filter(|e| e.date >= hoje_seed())
            .map(|e| e.id.clone())
            .collect();
        let obtido: Vec<String> = resultado.iter().map(|e| e.id.clone()).collect();
        assert_eq!(obtido, esperado);
    }

    #[test]
    fn busca_textual_cobre_titulo_e_descricao_sem_case() {
        let eventos = seed_events();
        let mut filtro = EventFilter::default();
        filtro.search = "WORKSHOP".to_string();
        let resultado = filtrar_eventos(&eventos, &filtro, hoje_seed());
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].id, "2");

        // "frontend" aparece apenas na descrição do evento 2
        filtro.search = "frontend".to_string();
        let resultado = filtrar_eventos(&eventos, &filtro, hoje_seed());
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].id, "2");
    }

    #[test]
    fn filtro_por_campus_cambuci() {
        let eventos = seed_events();
        let mut filtro = EventFilter::default();
        filtro.campus = "Cambuci".to_string();
        let resultado = filtrar_eventos(&eventos, &filtro, hoje_seed());
        assert!(!resultado.is_empty());
        assert!(resultado.iter().all(|e| e.campus == "Cambuci" && e.date >= hoje_seed()));
    }

    #[test]
    fn filtro_por_publico_usa_pertencimento() {
        let eventos = seed_events();
        let mut filtro = EventFilter::default();
        filtro.audience = "Comunidade".to_string();
        let resultado = filtrar_eventos(&eventos, &filtro, hoje_seed());
        assert!(resultado
            .iter()
            .all(|e| e.target_audience.iter().any(|p| p == "Comunidade")));
        // O seminário (id 3) é voltado também à comunidade e é futuro
        assert!(resultado.iter().any(|e| e.id == "3"));
    }

    #[test]
    fn corte_de_data_inclui_hoje_e_exclui_ontem() {
        let eventos = seed_events();
        // Evento 2 é datado de 2025-01-20: com hoje = 2025-01-20 ele entra...
        let resultado = filtrar_eventos(&eventos, &EventFilter::default(), hoje_seed());
        assert!(resultado.iter().any(|e| e.id == "2"));
        // ...e com hoje = 2025-01-21 ele sai
        let amanha = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        let resultado = filtrar_eventos(&eventos, &EventFilter::default(), amanha);
        assert!(!resultado.iter().any(|e| e.id == "2"));
    }

    #[test]
    fn criterios_sao_conjuntivos() {
        let eventos = seed_events();
        let mut filtro = EventFilter::default();
        filtro.campus = "Cambuci".to_string();
        filtro.category = "Palestra".to_string(); // a palestra do seed é em outro campus
        let resultado = filtrar_eventos(&eventos, &filtro, hoje_seed());
        assert!(resultado.is_empty());
    }

    #[test]
    fn stats_do_dashboard() {
        let eventos = seed_events();
        let usuarios = crate::data::seed_users();
        let stats = calcular_stats(&eventos, &usuarios, hoje_seed());
        assert_eq!(stats.total_eventos, 5);
        assert_eq!(stats.eventos_futuros, 4);
        assert_eq!(stats.total_usuarios, 15);
        assert_eq!(stats.alunos, 10);
        assert_eq!(stats.professores, 5);
    }

    #[tokio::test]
    async fn criar_atribui_id_unico_e_insere_no_inicio() {
        let store = EventStore::seeded(seed_events());
        let criado = criar_evento(&store, draft_exemplo()).await;
        let outro = criar_evento(&store, draft_exemplo()).await;
        assert_ne!(criado.id, outro.id);

        let eventos = store.snapshot().await;
        assert_eq!(eventos.len(), 7);
        // Mais recente primeiro
        assert_eq!(eventos[0].id, outro.id);
        assert_eq!(eventos[1].id, criado.id);

        // Releitura pelo ID devolve os campos do draft
        let lido = buscar_evento(&store, &criado.id).await.unwrap();
        assert_eq!(lido.title, "Feira de Profissões");
        assert_eq!(lido.campus, "Cambuci");
    }

    #[tokio::test]
    async fn atualizar_preserva_id_e_created_at() {
        let store = EventStore::seeded(seed_events());
        let original = buscar_evento(&store, "1").await.unwrap();

        let mut draft = draft_exemplo();
        draft.title = "Título novo".to_string();
        atualizar_evento(&store, "1", draft).await;

        let atualizado = buscar_evento(&store, "1").await.unwrap();
        assert_eq!(atualizado.title, "Título novo");
        assert_eq!(atualizado.id, original.id);
        assert_eq!(atualizado.created_at, original.created_at);
    }

    #[tokio::test]
    async fn atualizar_id_inexistente_eh_noop() {
        let store = EventStore::seeded(seed_events());
        atualizar_evento(&store, "nao-existe", draft_exemplo()).await;
        let eventos = store.snapshot().await;
        assert_eq!(eventos.len(), 5);
        assert!(eventos.iter().all(|e| e.title != "Feira de Profissões"));
    }

    #[tokio::test]
    async fn excluir_eh_idempotente_na_ausencia() {
        let store = EventStore::seeded(seed_events());
        excluir_evento(&store, "3").await;
        assert_eq!(store.snapshot().await.len(), 4);

        excluir_evento(&store, "3").await;
        assert_eq!(store.snapshot().await.len(), 4);
    }
}
