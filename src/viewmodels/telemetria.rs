// ============================================================================
// TELEMETRIA VIEWMODEL - Filtros sobre os logs do bot
// ============================================================================

use std::collections::BTreeSet;

use crate::models::LogBot;

pub const FILTRO_TODOS: &str = "todos";

/// Tipos de evento presentes na lista, ordenados, para montar o <select>
pub fn tipos_presentes(logs: &[LogBot]) -> Vec<String> {
    let tipos: BTreeSet<String> = logs
        .iter()
        .filter_map(|log| log.tipo.clone())
        .filter(|t| !t.is_empty())
        .collect();
    tipos.into_iter().collect()
}

/// Filtra os logs pelo tipo selecionado ("todos" não filtra)
pub fn filtrar_por_tipo<'a>(logs: &'a [LogBot], tipo: &str) -> Vec<&'a LogBot> {
    if tipo == FILTRO_TODOS || tipo.is_empty() {
        return logs.iter().collect();
    }
    logs.iter()
        .filter(|log| log.tipo.as_deref() == Some(tipo))
        .collect()
}

/// Payload livre do log como texto de célula
pub fn dados_como_texto(log: &LogBot) -> String {
    match &log.dados {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(valor) => valor.to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(tipo: Option<&str>) -> LogBot {
        LogBot {
            id: 1,
            tipo: tipo.map(|t| t.to_string()),
            ..LogBot::default()
        }
    }

    #[test]
    fn tipos_unicos_e_ordenados() {
        let logs = vec![
            log(Some("Round")),
            log(Some("Erro")),
            log(Some("Round")),
            log(None),
        ];
        assert_eq!(tipos_presentes(&logs), vec!["Erro", "Round"]);
    }

    #[test]
    fn filtro_todos_nao_remove_nada() {
        let logs = vec![log(Some("Round")), log(Some("Erro")), log(None)];
        assert_eq!(filtrar_por_tipo(&logs, FILTRO_TODOS).len(), 3);
        assert_eq!(filtrar_por_tipo(&logs, "Round").len(), 1);
        assert_eq!(filtrar_por_tipo(&logs, "Inexistente").len(), 0);
    }

    #[test]
    fn dados_de_log_viram_texto() {
        let mut l = log(Some("Round"));
        l.dados = Some(serde_json::json!({"mult": 2.3}));
        assert_eq!(dados_como_texto(&l), "{\"mult\":2.3}");

        l.dados = Some(serde_json::Value::String("aposta ganha".into()));
        assert_eq!(dados_como_texto(&l), "aposta ganha");

        l.dados = None;
        assert_eq!(dados_como_texto(&l), "—");
    }
}
