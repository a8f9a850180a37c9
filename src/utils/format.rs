// ============================================================================
// FORMATAÇÃO - Helpers de exibição (datas, moeda, identificadores)
// ============================================================================

use chrono::{DateTime, Utc};

/// Formata um timestamp RFC 3339 da API como "dd/mm/aaaa HH:MM".
/// Devolve "—" quando o campo veio nulo ou ilegível.
pub fn formatar_data(texto: Option<&str>) -> String {
    match texto.and_then(parsear_rfc3339) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => "—".to_string(),
    }
}

/// Só a data, sem hora
pub fn formatar_data_curta(texto: Option<&str>) -> String {
    match texto.and_then(parsear_rfc3339) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => "—".to_string(),
    }
}

pub fn parsear_rfc3339(texto: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(texto)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Valor em reais no formato brasileiro: "R$ 1.499,90"
pub fn formatar_moeda(valor: f64) -> String {
    let negativo = valor < 0.0;
    let centavos = (valor.abs() * 100.0).round() as u64;
    let inteiro = centavos / 100;
    let resto = centavos % 100;

    // Separador de milhar
    let digitos = inteiro.to_string();
    let mut agrupado = String::new();
    for (i, c) in digitos.chars().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }

    let sinal = if negativo { "-" } else { "" };
    format!("{}R$ {},{:02}", sinal, agrupado, resto)
}

/// HWID encurtado para tabelas ("a1b2c3d4e5f6…")
pub fn hwid_curto(hwid: Option<&str>) -> String {
    match hwid {
        Some(h) if h.chars().count() > 12 => {
            let inicio: String = h.chars().take(12).collect();
            format!("{}…", inicio)
        }
        Some(h) if !h.is_empty() => h.to_string(),
        _ => "—".to_string(),
    }
}

/// Trunca um texto livre (payload de telemetria) para caber numa célula
pub fn truncar(texto: &str, max: usize) -> String {
    if texto.chars().count() <= max {
        texto.to_string()
    } else {
        let corte: String = texto.chars().take(max).collect();
        format!("{}…", corte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moeda_em_formato_brasileiro() {
        assert_eq!(formatar_moeda(499.90), "R$ 499,90");
        assert_eq!(formatar_moeda(29.9), "R$ 29,90");
        assert_eq!(formatar_moeda(1499.9), "R$ 1.499,90");
        assert_eq!(formatar_moeda(0.0), "R$ 0,00");
        assert_eq!(formatar_moeda(-12.5), "-R$ 12,50");
    }

    #[test]
    fn data_legivel_ou_travessao() {
        assert_eq!(formatar_data_curta(Some("2026-03-15T12:00:00+00:00")), "15/03/2026");
        assert_eq!(formatar_data_curta(Some("lixo")), "—");
        assert_eq!(formatar_data(None), "—");
    }

    #[test]
    fn hwid_encurtado() {
        assert_eq!(hwid_curto(Some("a1b2c3d4e5f6a7b8")), "a1b2c3d4e5f6…");
        assert_eq!(hwid_curto(Some("curto")), "curto");
        assert_eq!(hwid_curto(None), "—");
    }

    #[test]
    fn truncar_respeita_limite() {
        assert_eq!(truncar("abcdef", 10), "abcdef");
        assert_eq!(truncar("abcdefghijk", 5), "abcde…");
    }
}
