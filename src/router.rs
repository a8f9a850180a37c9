// ============================================================================
// ROTAS - Navegação por hash (#/...)
// ============================================================================
// O parse é puro e testável; a escrita do hash dispara o listener global de
// hashchange registrado em lib.rs, que recarrega dados e re-renderiza.
// ============================================================================

use std::collections::HashMap;

/// Página do painel administrativo
#[derive(Clone, PartialEq, Debug)]
pub enum PaginaAdmin {
    Dashboard,
    Licencas,
    Clientes,
    Versoes,
    Telemetria,
}

/// Resultado devolvido pelo processador de pagamento via back_urls
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StatusPagamento {
    Sucesso,
    Pendente,
    Falha,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Rota {
    Loja,
    Checkout { plano: Option<String> },
    Pagamento {
        status: StatusPagamento,
        collection_id: Option<String>,
        external_reference: Option<String>,
    },
    Login,
    Painel,
    Admin(PaginaAdmin),
}

impl Rota {
    /// Hash canônico da rota (sem query string)
    pub fn hash(&self) -> &'static str {
        match self {
            Rota::Loja => "#/",
            Rota::Checkout { .. } => "#/checkout",
            Rota::Pagamento { status, .. } => match status {
                StatusPagamento::Sucesso => "#/pagamento/sucesso",
                StatusPagamento::Pendente => "#/pagamento/pendente",
                StatusPagamento::Falha => "#/pagamento/falha",
            },
            Rota::Login => "#/login",
            Rota::Painel => "#/painel",
            Rota::Admin(pagina) => match pagina {
                PaginaAdmin::Dashboard => "#/admin",
                PaginaAdmin::Licencas => "#/admin/licencas",
                PaginaAdmin::Clientes => "#/admin/clientes",
                PaginaAdmin::Versoes => "#/admin/versoes",
                PaginaAdmin::Telemetria => "#/admin/telemetria",
            },
        }
    }
}

/// Interpreta o hash atual. Hash desconhecido cai na loja.
pub fn parsear_rota(hash: &str) -> Rota {
    let sem_hash = hash.strip_prefix('#').unwrap_or(hash);
    let (caminho, query) = match sem_hash.split_once('?') {
        Some((c, q)) => (c, q),
        None => (sem_hash, ""),
    };
    let caminho = caminho.trim_matches('/');
    let params = parsear_query(query);

    match caminho {
        "" => Rota::Loja,
        "checkout" => Rota::Checkout {
            plano: params.get("plano").cloned(),
        },
        "pagamento/sucesso" => rota_pagamento(StatusPagamento::Sucesso, &params),
        "pagamento/pendente" => rota_pagamento(StatusPagamento::Pendente, &params),
        "pagamento/falha" => rota_pagamento(StatusPagamento::Falha, &params),
        "login" => Rota::Login,
        "painel" => Rota::Painel,
        "admin" => Rota::Admin(PaginaAdmin::Dashboard),
        "admin/licencas" => Rota::Admin(PaginaAdmin::Licencas),
        "admin/clientes" => Rota::Admin(PaginaAdmin::Clientes),
        "admin/versoes" => Rota::Admin(PaginaAdmin::Versoes),
        "admin/telemetria" => Rota::Admin(PaginaAdmin::Telemetria),
        _ => Rota::Loja,
    }
}

fn rota_pagamento(status: StatusPagamento, params: &HashMap<String, String>) -> Rota {
    Rota::Pagamento {
        status,
        collection_id: params.get("collection_id").cloned(),
        external_reference: params.get("external_reference").cloned(),
    }
}

fn parsear_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|par| {
            let (chave, valor) = par.split_once('=')?;
            if chave.is_empty() {
                return None;
            }
            Some((chave.to_string(), valor.to_string()))
        })
        .collect()
}

/// Rota atual lida do window.location
pub fn rota_atual() -> Rota {
    let hash = web_sys::window()
        .map(|w| w.location())
        .and_then(|loc| loc.hash().ok())
        .unwrap_or_default();
    parsear_rota(&hash)
}

/// Navega escrevendo o hash (dispara hashchange)
pub fn navegar(rota: &Rota) {
    navegar_para(rota.hash());
}

pub fn navegar_para(hash: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_vazio_e_desconhecido_caem_na_loja() {
        assert_eq!(parsear_rota(""), Rota::Loja);
        assert_eq!(parsear_rota("#/"), Rota::Loja);
        assert_eq!(parsear_rota("#/nao-existe"), Rota::Loja);
    }

    #[test]
    fn checkout_carrega_plano_da_query() {
        assert_eq!(
            parsear_rota("#/checkout?plano=mensal"),
            Rota::Checkout {
                plano: Some("mensal".to_string())
            }
        );
        assert_eq!(parsear_rota("#/checkout"), Rota::Checkout { plano: None });
    }

    #[test]
    fn paginas_admin() {
        assert_eq!(parsear_rota("#/admin"), Rota::Admin(PaginaAdmin::Dashboard));
        assert_eq!(
            parsear_rota("#/admin/telemetria"),
            Rota::Admin(PaginaAdmin::Telemetria)
        );
        assert_eq!(
            parsear_rota("#/admin/licencas"),
            Rota::Admin(PaginaAdmin::Licencas)
        );
    }

    #[test]
    fn retorno_do_pagamento_preserva_parametros() {
        let rota = parsear_rota("#/pagamento/sucesso?collection_id=123&external_reference=mensal_abc");
        match rota {
            Rota::Pagamento {
                status,
                collection_id,
                external_reference,
            } => {
                assert_eq!(status, StatusPagamento::Sucesso);
                assert_eq!(collection_id.as_deref(), Some("123"));
                assert_eq!(external_reference.as_deref(), Some("mensal_abc"));
            }
            outra => panic!("rota inesperada: {:?}", outra),
        }
    }

    #[test]
    fn hash_canonico_faz_ida_e_volta() {
        let rotas = [
            Rota::Login,
            Rota::Painel,
            Rota::Admin(PaginaAdmin::Versoes),
            Rota::Admin(PaginaAdmin::Clientes),
        ];
        for rota in rotas {
            assert_eq!(parsear_rota(rota.hash()), rota);
        }
    }
}
