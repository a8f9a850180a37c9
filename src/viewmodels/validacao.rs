// ============================================================================
// VALIDAÇÃO - Regras de formulário aplicadas antes de qualquer request
// ============================================================================

/// E-mail minimamente plausível: algo@dominio.tld
pub fn email_valido(email: &str) -> bool {
    let email = email.trim();
    let Some((usuario, dominio)) = email.split_once('@') else {
        return false;
    };
    if usuario.is_empty() || dominio.is_empty() {
        return false;
    }
    // Um único '@' e um ponto no domínio, fora das bordas
    if dominio.contains('@') {
        return false;
    }
    match dominio.split_once('.') {
        Some((antes, depois)) => !antes.is_empty() && !depois.is_empty(),
        None => false,
    }
}

/// WhatsApp: 10 a 13 dígitos depois de remover máscara (DDD + número,
/// com DDI opcional)
pub fn whatsapp_valido(whatsapp: &str) -> bool {
    let digitos: String = whatsapp.chars().filter(|c| c.is_ascii_digit()).collect();
    (10..=13).contains(&digitos.len())
}

/// Só os dígitos, como a API espera
pub fn whatsapp_normalizado(whatsapp: &str) -> String {
    whatsapp.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formulário de checkout da loja
pub fn validar_checkout(nome: &str, email: &str, whatsapp: &str) -> Result<(), String> {
    if nome.trim().is_empty() {
        return Err("Informe seu nome completo.".to_string());
    }
    if !email_valido(email) {
        return Err("E-mail inválido. Confira e tente de novo.".to_string());
    }
    if !whatsapp_valido(whatsapp) {
        return Err("WhatsApp inválido. Use DDD + número (ex: 65 99999-9999).".to_string());
    }
    Ok(())
}

/// Formulário de login
pub fn validar_login(email: &str, senha: &str) -> Result<(), String> {
    if email.trim().is_empty() || senha.is_empty() {
        return Err("Preencha e-mail e senha.".to_string());
    }
    Ok(())
}

/// Troca de senha: mínimo de 6 caracteres (mesmo limite da API) e
/// confirmação idêntica. Falhou aqui, nenhum request é feito.
pub fn validar_troca_senha(
    senha_atual: &str,
    nova_senha: &str,
    confirmacao: &str,
) -> Result<(), String> {
    if senha_atual.is_empty() {
        return Err("Informe a senha atual.".to_string());
    }
    if nova_senha.len() < 6 {
        return Err("A nova senha deve ter pelo menos 6 caracteres.".to_string());
    }
    if nova_senha != confirmacao {
        return Err("A confirmação não confere com a nova senha.".to_string());
    }
    Ok(())
}

/// Publicação de versão do bot
pub fn validar_nova_versao(versao: &str, download_url: &str) -> Result<(), String> {
    if versao.trim().is_empty() {
        return Err("Informe o número da versão (ex: 2.1.0).".to_string());
    }
    if download_url.trim().is_empty() {
        return Err("Informe a URL de download.".to_string());
    }
    if !download_url.starts_with("http://") && !download_url.starts_with("https://") {
        return Err("A URL de download deve começar com http:// ou https://.".to_string());
    }
    Ok(())
}

/// Criação manual de licença pelo admin
pub fn validar_nova_licenca(nome: &str, email: &str, dias: &str) -> Result<i64, String> {
    if nome.trim().is_empty() {
        return Err("Informe o nome do cliente.".to_string());
    }
    if !email_valido(email) {
        return Err("E-mail do cliente inválido.".to_string());
    }
    match dias.trim().parse::<i64>() {
        Ok(d) if d > 0 => Ok(d),
        _ => Err("Dias de validade deve ser um número maior que zero.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_aceita_e_rejeita() {
        assert!(email_valido("cliente@exemplo.com"));
        assert!(email_valido("a.b@sub.dominio.br"));
        assert!(!email_valido("sem-arroba"));
        assert!(!email_valido("@dominio.com"));
        assert!(!email_valido("usuario@"));
        assert!(!email_valido("usuario@dominio"));
        assert!(!email_valido("usuario@.com"));
    }

    #[test]
    fn whatsapp_com_ou_sem_mascara() {
        assert!(whatsapp_valido("65992950893"));
        assert!(whatsapp_valido("(65) 99295-0893"));
        assert!(whatsapp_valido("+55 65 99295-0893"));
        assert!(!whatsapp_valido("12345"));
        assert!(!whatsapp_valido("551234567890123"));
        assert_eq!(whatsapp_normalizado("(65) 99295-0893"), "65992950893");
    }

    #[test]
    fn checkout_exige_todos_os_campos() {
        assert!(validar_checkout("Ana", "ana@x.com", "65992950893").is_ok());
        assert!(validar_checkout("", "ana@x.com", "65992950893").is_err());
        assert!(validar_checkout("Ana", "ana", "65992950893").is_err());
        assert!(validar_checkout("Ana", "ana@x.com", "123").is_err());
    }

    #[test]
    fn troca_de_senha_sem_request_quando_invalida() {
        assert!(validar_troca_senha("antiga", "novasenha", "novasenha").is_ok());
        assert!(validar_troca_senha("", "novasenha", "novasenha").is_err());
        assert!(validar_troca_senha("antiga", "12345", "12345").is_err());
        // Confirmação divergente: exatamente o caso que nunca vira request
        assert!(validar_troca_senha("antiga", "novasenha", "outrasenha").is_err());
    }

    #[test]
    fn versao_exige_url_http() {
        assert!(validar_nova_versao("2.1.0", "https://cdn.x.com/bot.zip").is_ok());
        assert!(validar_nova_versao("", "https://cdn.x.com/bot.zip").is_err());
        assert!(validar_nova_versao("2.1.0", "").is_err());
        assert!(validar_nova_versao("2.1.0", "ftp://x").is_err());
    }

    #[test]
    fn licenca_manual_parseia_dias() {
        assert_eq!(validar_nova_licenca("Ana", "a@x.com", "30"), Ok(30));
        assert!(validar_nova_licenca("Ana", "a@x.com", "0").is_err());
        assert!(validar_nova_licenca("Ana", "a@x.com", "abc").is_err());
        assert!(validar_nova_licenca("", "a@x.com", "30").is_err());
    }
}
