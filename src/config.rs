/// URL base da API de licenças/pagamentos.
/// Configurada em tempo de compilação:
/// - Desenvolvimento: http://localhost:8000 (padrão)
/// - Produção: via variável API_URL no .env
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// WhatsApp de suporte exibido na loja (somente dígitos, com DDI)
pub const WHATSAPP_SUPORTE: &str = match option_env!("WHATSAPP_SUPORTE") {
    Some(numero) => numero,
    None => "5565992950893",
};

/// Intervalo do auto-refresh da telemetria, em milissegundos
pub const INTERVALO_AUTO_REFRESH_MS: u32 = 10_000;

/// Limite de registros pedidos nas listagens admin (a API pagina via skip/limit)
pub const LIMITE_LISTAGEM: u32 = 500;
