// src/models/email.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resultado de uma tentativa de envio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Enviado,
    Erro,
}

/// Uma campanha de e-mail montada no painel administrativo.
/// É construída apenas para a tentativa de envio e descartada em seguida;
/// nenhum registro fica retido após a notificação ao operador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailCampaign {
    pub event_id: Option<String>,
    pub subject: String,
    pub message: String,
    /// Endereços de e-mail resolvidos (filtro ou lista manual).
    pub recipients: Vec<String>,
    pub sent_at: DateTime<Utc>,
    pub status: CampaignStatus,
}
