pub mod cliente;
pub mod licenca;
pub mod pagamento;
pub mod telemetria;
pub mod usuario;
pub mod versao;

pub use cliente::ClienteResumo;
pub use licenca::{CriarLicencaRequest, Licenca, SucessoResponse};
pub use pagamento::{plano_por_id, CriarPagamentoRequest, CriarPagamentoResponse, Plano, PLANOS};
pub use telemetria::{
    EstatisticasLicenca, LicencaComTelemetria, LogBot, TelemetriaDashboard,
};
pub use usuario::{LoginRequest, LoginResponse, Usuario};
pub use versao::{VersaoBot, VersaoCreateRequest};
