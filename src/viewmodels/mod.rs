// ViewModels: lógica pura de agregação e validação, sem DOM

pub mod licencas;
pub mod telemetria;
pub mod validacao;
