// ============================================================================
// TELEMETRIA - Modelos dos endpoints /api/v1/telemetria/*
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::licenca::Licenca;

/// Um evento de telemetria emitido pelo bot
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LogBot {
    pub id: i64,
    #[serde(default)]
    pub sessao_id: Option<String>,
    #[serde(default)]
    pub hwid: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub dados: Option<serde_json::Value>,
    #[serde(default)]
    pub lucro: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Métricas agregadas de GET /telemetria/dashboard
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ResumoTelemetria {
    #[serde(default)]
    pub total_logs: i64,
    #[serde(default)]
    pub bots_unicos: i64,
    #[serde(default)]
    pub sessoes: i64,
    #[serde(default)]
    pub lucro_total: f64,
    #[serde(default)]
    pub total_rounds: i64,
    #[serde(default)]
    pub bots_ativos_agora: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AtividadeHora {
    #[serde(default)]
    pub hora: Option<String>,
    #[serde(default)]
    pub quantidade: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct TopLicenca {
    #[serde(default)]
    pub hwid: Option<String>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(default)]
    pub lucro_total: f64,
    #[serde(default)]
    pub total_rounds: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct TelemetriaDashboard {
    #[serde(default)]
    pub periodo: String,
    #[serde(default)]
    pub resumo: ResumoTelemetria,
    #[serde(default)]
    pub por_tipo: HashMap<String, i64>,
    #[serde(default)]
    pub atividade_por_hora: Vec<AtividadeHora>,
    #[serde(default)]
    pub top_licencas: Vec<TopLicenca>,
}

/// Item de GET /telemetria/licencas-stats
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct TelemetriaLicenca {
    #[serde(default)]
    pub total_rounds: i64,
    #[serde(default)]
    pub lucro_total: f64,
    #[serde(default)]
    pub ultima_atividade: Option<String>,
    /// "online" | "recente" | "hoje" | "inativo" | "nunca_usado"
    #[serde(default)]
    pub status_bot: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LicencaComTelemetria {
    pub licenca: Licenca,
    #[serde(default)]
    pub telemetria: TelemetriaLicenca,
}

/// Estatísticas detalhadas de GET /telemetria/licenca/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct EstatisticasDetalhadas {
    #[serde(default)]
    pub total_logs: i64,
    #[serde(default)]
    pub total_sessoes: i64,
    #[serde(default)]
    pub total_rounds: i64,
    #[serde(default)]
    pub lucro_total: f64,
    #[serde(default)]
    pub vitorias: i64,
    #[serde(default)]
    pub derrotas: i64,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub primeira_atividade: Option<String>,
    #[serde(default)]
    pub ultima_atividade: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct EstatisticasLicenca {
    #[serde(default)]
    pub licenca: Licenca,
    #[serde(default)]
    pub periodo: Option<String>,
    /// None quando a licença nunca foi ativada (sem HWID)
    #[serde(default)]
    pub estatisticas: Option<EstatisticasDetalhadas>,
    #[serde(default)]
    pub mensagem: Option<String>,
}
