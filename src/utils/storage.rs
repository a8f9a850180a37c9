use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

/// Chaves persistidas entre page loads. São exatamente duas: o token bearer
/// opaco e o perfil do usuário serializado.
pub const CHAVE_TOKEN: &str = "token";
pub const CHAVE_USUARIO: &str = "user";

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Grava um valor serializável como JSON
pub fn salvar_no_storage<T: Serialize>(chave: &str, valor: &T) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage indisponível")?;
    let json = serde_json::to_string(valor)
        .map_err(|e| format!("Erro serializando dados: {}", e))?;
    storage
        .set_item(chave, &json)
        .map_err(|_| "Erro gravando no localStorage".to_string())?;
    Ok(())
}

pub fn carregar_do_storage<T: DeserializeOwned>(chave: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(chave).ok()??;
    serde_json::from_str(&json).ok()
}

/// Grava uma string crua (o token não é JSON)
pub fn salvar_texto(chave: &str, valor: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage indisponível")?;
    storage
        .set_item(chave, valor)
        .map_err(|_| "Erro gravando no localStorage".to_string())
}

pub fn carregar_texto(chave: &str) -> Option<String> {
    local_storage()?.get_item(chave).ok()?
}

pub fn remover_do_storage(chave: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage indisponível")?;
    storage
        .remove_item(chave)
        .map_err(|_| "Erro removendo do localStorage".to_string())
}
