use crate::models::licenca::Licenca;

/// Resumo de um cliente, agregado no front a partir da lista de licenças.
/// A API não tem um endpoint de clientes; o agrupamento por e-mail acontece
/// inteiro no navegador (ver viewmodels::licencas).
#[derive(Clone, PartialEq, Debug)]
pub struct ClienteResumo {
    pub email: String,
    pub nome: String,
    pub whatsapp: Option<String>,
    pub licencas: Vec<Licenca>,
    pub total_licencas: usize,
    pub licencas_ativas: usize,
}
