// ============================================================================
// LICENÇA - Espelho do JSON retornado pela API
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Licença como entregue por GET /api/v1/licencas e /api/v1/minhas-licencas.
/// Os campos opcionais refletem colunas anuláveis no banco da API.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Licenca {
    pub id: i64,
    pub chave: String,
    #[serde(default)]
    pub hwid: Option<String>,
    #[serde(default)]
    pub ativa: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub data_expiracao: Option<String>,
    #[serde(default)]
    pub cliente_nome: Option<String>,
    #[serde(default)]
    pub email_cliente: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
    #[serde(default)]
    pub plano_tipo: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub esta_expirada: bool,
    #[serde(default)]
    pub dias_restantes: Option<i64>,
}

impl Licenca {
    /// Data de expiração parseada (a API envia RFC 3339)
    pub fn expiracao(&self) -> Option<DateTime<Utc>> {
        let texto = self.data_expiracao.as_deref()?;
        DateTime::parse_from_rfc3339(texto)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Dias restantes calculados no cliente contra um "agora" explícito.
    /// Zera exatamente no instante da expiração e nunca fica negativo.
    /// Sem data de expiração, cai no valor que a API mandou.
    pub fn dias_restantes_em(&self, agora: DateTime<Utc>) -> Option<i64> {
        match self.expiracao() {
            Some(exp) => Some((exp - agora).num_days().max(0)),
            None => self.dias_restantes,
        }
    }

    /// Expirada neste instante?
    pub fn expirada_em(&self, agora: DateTime<Utc>) -> bool {
        match self.expiracao() {
            Some(exp) => agora > exp,
            None => self.esta_expirada,
        }
    }

    /// Vigente = ativa e não expirada
    pub fn vigente_em(&self, agora: DateTime<Utc>) -> bool {
        self.ativa && !self.expirada_em(agora)
    }
}

/// Corpo de POST /api/v1/licencas (criação manual pelo admin)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CriarLicencaRequest {
    pub cliente_nome: String,
    pub email_cliente: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    pub plano_tipo: String,
    pub dias_validade: i64,
}

/// Resposta dos PATCHes de ação (toggle, reset-hwid, toggle de versão)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SucessoResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub ativa: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn licenca_expirando(expiracao: DateTime<Utc>) -> Licenca {
        Licenca {
            id: 1,
            chave: "AAAA-BBBB-CCCC-DDDD".into(),
            ativa: true,
            data_expiracao: Some(expiracao.to_rfc3339()),
            ..Licenca::default()
        }
    }

    #[test]
    fn dias_restantes_nao_cresce_com_o_tempo() {
        let exp = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let lic = licenca_expirando(exp);

        let mut agora = exp - Duration::days(30);
        let mut anterior = lic.dias_restantes_em(agora).unwrap();
        while agora < exp + Duration::days(3) {
            agora += Duration::hours(7);
            let atual = lic.dias_restantes_em(agora).unwrap();
            assert!(atual <= anterior, "dias restantes subiu: {} -> {}", anterior, atual);
            anterior = atual;
        }
    }

    #[test]
    fn dias_restantes_zera_na_expiracao() {
        let exp = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let lic = licenca_expirando(exp);

        assert_eq!(lic.dias_restantes_em(exp), Some(0));
        assert_eq!(lic.dias_restantes_em(exp + Duration::days(10)), Some(0));
        assert_eq!(lic.dias_restantes_em(exp - Duration::days(5)), Some(5));
    }

    #[test]
    fn expirada_somente_apos_o_instante_exato() {
        let exp = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let lic = licenca_expirando(exp);

        assert!(!lic.expirada_em(exp));
        assert!(lic.expirada_em(exp + Duration::seconds(1)));
        assert!(lic.vigente_em(exp - Duration::days(1)));
        assert!(!lic.vigente_em(exp + Duration::days(1)));
    }

    #[test]
    fn sem_data_usa_valor_da_api() {
        let lic = Licenca {
            id: 2,
            chave: "X".into(),
            dias_restantes: Some(12),
            ..Licenca::default()
        };
        assert_eq!(lic.dias_restantes_em(Utc::now()), Some(12));
    }
}
