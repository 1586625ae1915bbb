// src/data.rs
//
// Dados de seed das coleções em memória. Não há camada de persistência:
// a cada reinício do processo as coleções voltam exatamente a este estado.
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{
    event::{Event, LocationType},
    user::{User, Vinculo},
};

fn ts(ano: i32, mes: u32, dia: u32, hora: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(ano, mes, dia, hora, min, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn dia(ano: i32, mes: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(ano, mes, d).unwrap_or_default()
}

/// Eventos iniciais da plataforma.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Inovação em Inteligência Artificial na Educação".to_string(),
            description: "Palestra sobre como a IA está transformando o ensino superior e as \
                          oportunidades para estudantes e professores."
                .to_string(),
            date: dia(2025, 1, 15),
            time: "14:00".to_string(),
            location: "Auditório Central".to_string(),
            location_type: LocationType::Presencial,
            target_audience: vec!["Alunos".to_string(), "Professores".to_string()],
            category: "Palestra".to_string(),
            responsible: "Prof. Dr. Ana Silva".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1758270704587-43339a801396".to_string()),
            campus: "Bom Jesus do Itabapoana".to_string(),
            created_at: ts(2025, 1, 1, 10, 0),
        },
        Event {
            id: "2".to_string(),
            title: "Workshop: Desenvolvimento Web Moderno".to_string(),
            description: "Aprenda React, TypeScript e as melhores práticas do desenvolvimento \
                          frontend. Vagas limitadas!"
                .to_string(),
            date: dia(2025, 1, 20),
            time: "09:00".to_string(),
            location: "Laboratório de Informática A".to_string(),
            location_type: LocationType::Presencial,
            target_audience: vec!["Alunos".to_string()],
            category: "Workshop".to_string(),
            responsible: "Prof. João Santos".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1661333886128-98466117d88b".to_string()),
            campus: "Cambuci".to_string(),
            created_at: ts(2025, 1, 2, 14, 30),
        },
        Event {
            id: "3".to_string(),
            title: "Seminário: Sustentabilidade e Meio Ambiente".to_string(),
            description: "Discussão sobre práticas sustentáveis no campus e projetos de extensão \
                          voltados ao meio ambiente."
                .to_string(),
            date: dia(2025, 1, 25),
            time: "16:00".to_string(),
            location: "https://meet.google.com/abc-defg-hij".to_string(),
            location_type: LocationType::Online,
            target_audience: vec![
                "Alunos".to_string(),
                "Professores".to_string(),
                "Comunidade".to_string(),
            ],
            category: "Seminário".to_string(),
            responsible: "Profa. Dra. Maria Oliveira".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1680226425348-cedaf70ec06d".to_string()),
            campus: "Todos os Campus".to_string(),
            created_at: ts(2025, 1, 3, 8, 15),
        },
        Event {
            id: "4".to_string(),
            title: "Mesa Redonda: Mercado de Trabalho em TI".to_string(),
            description: "Profissionais experientes compartilham suas experiências e dicas para \
                          ingressar no mercado de tecnologia."
                .to_string(),
            date: dia(2025, 2, 5),
            time: "19:00".to_string(),
            location: "Sala de Conferências - Itaperuna".to_string(),
            location_type: LocationType::Hibrido,
            target_audience: vec!["Alunos".to_string()],
            category: "Mesa Redonda".to_string(),
            responsible: "Coordenação de Estágios".to_string(),
            image_url: None,
            campus: "Itaperuna".to_string(),
            created_at: ts(2025, 1, 4, 16, 45),
        },
        Event {
            id: "5".to_string(),
            title: "Aula Especial: História da Arte Brasileira".to_string(),
            description: "Exploração das principais correntes artísticas do Brasil, desde o \
                          período colonial até a arte contemporânea."
                .to_string(),
            date: dia(2025, 2, 10),
            time: "10:00".to_string(),
            location: "Museu de Arte do Campus".to_string(),
            location_type: LocationType::Presencial,
            target_audience: vec!["Alunos".to_string(), "Comunidade".to_string()],
            category: "Aula Especial".to_string(),
            responsible: "Prof. Carlos Mendes".to_string(),
            image_url: None,
            campus: "Bom Jesus do Itabapoana".to_string(),
            created_at: ts(2025, 1, 5, 12, 20),
        },
    ]
}

/// Usuários iniciais da plataforma (alunos e professores).
pub fn seed_users() -> Vec<User> {
    fn aluno(id: &str, name: &str, email: &str, campus: &str, curso: &str, created: DateTime<Utc>) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            campus: campus.to_string(),
            vinculo: Vinculo::Aluno { curso: curso.to_string() },
            created_at: created,
        }
    }

    fn professor(id: &str, name: &str, email: &str, campus: &str, area: &str, created: DateTime<Utc>) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            campus: campus.to_string(),
            vinculo: Vinculo::Professor { area: area.to_string() },
            created_at: created,
        }
    }

    vec![
        aluno("1", "João Silva", "joao.silva@universidade.edu.br", "Bom Jesus do Itabapoana", "Sistemas de Informação", ts(2024, 2, 1, 0, 0)),
        professor("2", "Maria Santos", "maria.santos@universidade.edu.br", "Cambuci", "Engenharias", ts(2024, 1, 15, 0, 0)),
        aluno("3", "Pedro Oliveira", "pedro.oliveira@universidade.edu.br", "Itaperuna", "Administração", ts(2024, 3, 10, 0, 0)),
        professor("4", "Ana Costa", "ana.costa@universidade.edu.br", "Bom Jesus do Itabapoana", "Química", ts(2024, 1, 20, 0, 0)),
        aluno("5", "Lucas Ferreira", "lucas.ferreira@universidade.edu.br", "Cambuci", "Engenharia Mecânica", ts(2024, 4, 5, 0, 0)),
        aluno("6", "Carla Rodrigues", "carla.rodrigues@universidade.edu.br", "Santo Antônio de Pádua", "Eletrotécnica", ts(2024, 2, 20, 0, 0)),
        professor("7", "Prof. Roberto Lima", "roberto.lima@universidade.edu.br", "Itaperuna", "Automação e Mecânica", ts(2024, 1, 10, 0, 0)),
        aluno("8", "Isabella Martins", "isabella.martins@universidade.edu.br", "Bom Jesus do Itabapoana", "Química", ts(2024, 3, 1, 0, 0)),
        aluno("9", "Carlos Eduardo", "carlos.eduardo@universidade.edu.br", "Cambuci", "Informática", ts(2024, 3, 15, 0, 0)),
        aluno("10", "Fernanda Souza", "fernanda.souza@universidade.edu.br", "Itaperuna", "Mecânica", ts(2024, 4, 1, 0, 0)),
        aluno("11", "Rafael Dias", "rafael.dias@universidade.edu.br", "Santo Antônio de Pádua", "Automação Industrial", ts(2024, 4, 10, 0, 0)),
        professor("12", "Profa. Júlia Pereira", "julia.pereira@universidade.edu.br", "Bom Jesus do Itabapoana", "Licenciatura", ts(2024, 1, 5, 0, 0)),
        aluno("13", "Amanda Silva", "amanda.silva@universidade.edu.br", "Cambuci", "Licenciatura em Química", ts(2024, 2, 28, 0, 0)),
        professor("14", "Prof. Marcos Andrade", "marcos.andrade@universidade.edu.br", "Santo Antônio de Pádua", "Informática", ts(2024, 1, 12, 0, 0)),
        aluno("15", "Beatriz Santos", "beatriz.santos@universidade.edu.br", "Itaperuna", "Eletrotécnica", ts(2024, 4, 15, 0, 0)),
    ]
}
