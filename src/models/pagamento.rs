// ============================================================================
// PAGAMENTO - Planos e integração com POST /api/v1/pagamento/criar
// ============================================================================

use serde::{Deserialize, Serialize};

/// Plano de assinatura exibido na loja. Preços e duração são os mesmos que a
/// API usa ao montar a preferência de pagamento.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Plano {
    pub id: &'static str,
    pub nome: &'static str,
    pub descricao: &'static str,
    pub preco: f64,
    pub preco_antigo: f64,
    pub dias: u32,
    pub destaques: &'static [&'static str],
}

pub const PLANOS: &[Plano] = &[
    Plano {
        id: "experimental",
        nome: "🧪 Experimental",
        descricao: "Para quem quer testar sem medo.",
        preco: 29.90,
        preco_antigo: 49.90,
        dias: 3,
        destaques: &[
            "Acesso completo ao bot",
            "Suporte de instalação",
            "3 dias de acesso",
        ],
    },
    Plano {
        id: "semanal",
        nome: "🚀 Semanal VIP",
        descricao: "Foco total em uma semana.",
        preco: 149.90,
        preco_antigo: 199.00,
        dias: 7,
        destaques: &[
            "Acesso completo ao bot",
            "Suporte via WhatsApp",
            "Estratégias avançadas",
        ],
    },
    Plano {
        id: "mensal",
        nome: "👑 Pro Mensal",
        descricao: "Para quem joga sério.",
        preco: 499.90,
        preco_antigo: 699.00,
        dias: 30,
        destaques: &[
            "Acesso completo ao bot",
            "Suporte prioritário",
            "Atualizações em primeira mão",
        ],
    },
];

/// Busca um plano pelo identificador usado na API
pub fn plano_por_id(id: &str) -> Option<&'static Plano> {
    PLANOS.iter().find(|p| p.id == id)
}

/// Corpo de POST /api/v1/pagamento/criar
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CriarPagamentoRequest {
    pub plano: String,
    pub nome: String,
    pub email: String,
    pub whatsapp: String,
}

/// Resposta com a URL do checkout hospedado (init_point)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CriarPagamentoResponse {
    pub payment_id: String,
    pub init_point: String,
    pub plano: String,
    pub valor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogo_cobre_os_tres_planos_da_api() {
        let ids: Vec<_> = PLANOS.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["experimental", "semanal", "mensal"]);
    }

    #[test]
    fn plano_por_id_encontra_e_rejeita() {
        assert_eq!(plano_por_id("mensal").unwrap().dias, 30);
        assert_eq!(plano_por_id("semanal").unwrap().preco, 149.90);
        assert!(plano_por_id("anual").is_none());
    }

    #[test]
    fn preco_promocional_sempre_abaixo_do_antigo() {
        for plano in PLANOS {
            assert!(plano.preco < plano.preco_antigo, "plano {}", plano.id);
        }
    }
}
