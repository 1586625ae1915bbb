// src/services/email_service.rs
use std::time::Duration;

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        email::{CampaignStatus, EmailCampaign},
        event::{Event, FILTRO_TODOS},
        user::{RecipientFilter, User},
    },
};

/// Atraso fixo que simula a latência do envio. Nenhuma mensagem é
/// realmente transmitida.
const ATRASO_DE_ENVIO: Duration = Duration::from_secs(1);

fn criterio_todos(valor: &str) -> bool {
    valor.is_empty() || valor == FILTRO_TODOS
}

/// Aplica os três critérios do painel de destinatários (AND entre eles);
/// o sentinela "all" desliga o critério. O filtro de curso só combina com
/// alunos: professores não têm curso e ficam de fora quando ele está ativo.
pub fn filtrar_destinatarios(usuarios: &[User], filtro: &RecipientFilter) -> Vec<User> {
    usuarios
        .iter()
        .filter(|usuario| {
            if !criterio_todos(&filtro.campus) && usuario.campus != filtro.campus {
                return false;
            }
            if !criterio_todos(&filtro.tipo) && usuario.vinculo.tipo() != filtro.tipo {
                return false;
            }
            if !criterio_todos(&filtro.curso)
                && usuario.vinculo.curso() != Some(filtro.curso.as_str())
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Resolve a lista final de endereços: uma seleção manual não vazia
/// substitui o conjunto filtrado; vazia significa "todo o conjunto filtrado".
pub fn resolver_destinatarios(filtrados: &[User], selecionados: &[String]) -> Vec<String> {
    if selecionados.is_empty() {
        filtrados.iter().map(|u| u.email.clone()).collect()
    } else {
        selecionados.to_vec()
    }
}

/// Valores distintos de campus entre os usuários (para o seletor).
pub fn opcoes_de_campus(usuarios: &[User]) -> Vec<String> {
    let mut opcoes: Vec<String> = Vec::new();
    for usuario in usuarios {
        if !opcoes.contains(&usuario.campus) {
            opcoes.push(usuario.campus.clone());
        }
    }
    opcoes
}

/// Cursos distintos entre os alunos cadastrados (para o seletor).
pub fn opcoes_de_curso(usuarios: &[User]) -> Vec<String> {
    let mut opcoes: Vec<String> = Vec::new();
    for usuario in usuarios {
        if let Some(curso) = usuario.vinculo.curso() {
            if !opcoes.contains(&curso.to_string()) {
                opcoes.push(curso.to_string());
            }
        }
    }
    opcoes
}

/// Monta o assunto e o corpo padrão do convite a partir de um evento.
/// É apenas um preenchimento de conveniência; o operador pode editar tudo.
pub fn montar_convite(evento: &Event) -> (String, String) {
    let assunto = format!("Convite: {}", evento.title);
    let mensagem = format!(
        "Olá!\n\n\
         Você está convidado(a) para o evento \"{}\".\n\n\
         📅 Data: {}\n\
         🕐 Horário: {}\n\
         📍 Local: {}\n\n\
         {}\n\n\
         Responsável: {}\n\n\
         Não perca essa oportunidade!\n\n\
         Atenciosamente,\n\
         Equipe de Eventos",
        evento.title,
        evento.date_br(),
        evento.time,
        evento.location,
        evento.description,
        evento.responsible,
    );
    (assunto, mensagem)
}

/// Simula o envio de uma campanha: valida assunto, mensagem e destinatários,
/// aguarda o atraso fixo e reporta sucesso. Depois da validação não existe
/// caminho de falha, e nenhum registro da campanha fica retido.
pub async fn enviar_campanha(
    event_id: Option<String>,
    assunto: &str,
    mensagem: &str,
    destinatarios: Vec<String>,
) -> AppResult<EmailCampaign> {
    if destinatarios.is_empty() {
        return Err(AppError::Validation(
            "Nenhum destinatário selecionado".to_string(),
        ));
    }
    if assunto.trim().is_empty() || mensagem.trim().is_empty() {
        return Err(AppError::Validation(
            "Assunto e mensagem são obrigatórios".to_string(),
        ));
    }

    tracing::info!(
        "Simulando envio de e-mail para {} destinatário(s)...",
        destinatarios.len()
    );
    tokio::time::sleep(ATRASO_DE_ENVIO).await;

    let campanha = EmailCampaign {
        event_id,
        subject: assunto.to_string(),
        message: mensagem.to_string(),
        recipients: destinatarios,
        sent_at: Utc::now(),
        status: CampaignStatus::Enviado,
    };
    tracing::info!(
        "✅ E-mail enviado com sucesso para {} destinatário(s).",
        campanha.recipients.len()
    );
    Ok(campanha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{seed_events, seed_users};

    #[test]
    fn filtro_sem_criterios_devolve_todos() {
        let usuarios = seed_users();
        let filtrados = filtrar_destinatarios(&usuarios, &RecipientFilter::default());
        assert_eq!(filtrados.len(), usuarios.len());
    }

    #[test]
    fn filtro_combina_campus_tipo_e_curso() {
        let usuarios = seed_users();
        let filtro = RecipientFilter {
            campus: "Cambuci".to_string(),
            tipo: "aluno".to_string(),
            curso: FILTRO_TODOS.to_string(),
        };
        let filtrados = filtrar_destinatarios(&usuarios, &filtro);
        assert!(!filtrados.is_empty());
        assert!(filtrados
            .iter()
            .all(|u| u.campus == "Cambuci" && u.vinculo.is_aluno()));

        // Filtro de curso exclui professores (que não têm curso)
        let filtro = RecipientFilter {
            campus: FILTRO_TODOS.to_string(),
            tipo: FILTRO_TODOS.to_string(),
            curso: "Informática".to_string(),
        };
        let filtrados = filtrar_destinatarios(&usuarios, &filtro);
        assert_eq!(filtrados.len(), 1);
        assert_eq!(filtrados[0].name, "Carlos Eduardo");
    }

    #[test]
    fn selecao_manual_substitui_conjunto_filtrado() {
        let usuarios = seed_users();
        let filtrados = filtrar_destinatarios(&usuarios, &RecipientFilter::default());

        // Sem seleção manual: todos os e-mails filtrados
        let resolvidos = resolver_destinatarios(&filtrados, &[]);
        assert_eq!(resolvidos.len(), filtrados.len());

        // Com seleção manual: exatamente a lista manual, ignorando o filtro
        let manuais = vec!["so.este@universidade.edu.br".to_string()];
        let resolvidos = resolver_destinatarios(&filtrados, &manuais);
        assert_eq!(resolvidos, manuais);
    }

    #[test]
    fn convite_preenche_assunto_e_corpo_com_dados_do_evento() {
        let eventos = seed_events();
        let (assunto, mensagem) = montar_convite(&eventos[0]);
        assert_eq!(assunto, "Convite: Inovação em Inteligência Artificial na Educação");
        assert!(mensagem.contains("📅 Data: 15/01/2025"));
        assert!(mensagem.contains("🕐 Horário: 14:00"));
        assert!(mensagem.contains("📍 Local: Auditório Central"));
        assert!(mensagem.contains("Responsável: Prof. Dr. Ana Silva"));
    }

    #[tokio::test(start_paused = true)]
    async fn envio_rejeita_campanha_sem_destinatarios_ou_sem_texto() {
        let vazio = enviar_campanha(None, "Assunto", "Mensagem", Vec::new()).await;
        assert!(matches!(vazio, Err(AppError::Validation(_))));

        let sem_assunto = enviar_campanha(
            None,
            "   ",
            "Mensagem",
            vec!["a@universidade.edu.br".to_string()],
        )
        .await;
        assert!(matches!(sem_assunto, Err(AppError::Validation(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn envio_valido_reporta_contagem_apos_o_atraso() {
        let destinatarios = vec![
            "a@universidade.edu.br".to_string(),
            "b@universidade.edu.br".to_string(),
        ];
        let campanha = enviar_campanha(Some("1".to_string()), "Convite", "Olá!", destinatarios)
            .await
            .unwrap();
        assert_eq!(campanha.recipients.len(), 2);
        assert_eq!(campanha.status, CampaignStatus::Enviado);
        assert_eq!(campanha.event_id.as_deref(), Some("1"));
    }
}
