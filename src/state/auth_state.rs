// ============================================================================
// AUTH STATE - Espelho em memória da sessão persistida
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Usuario;
use crate::services::auth_service;

#[derive(Clone)]
pub struct AuthState {
    pub usuario: Rc<RefCell<Option<Usuario>>>,
}

impl AuthState {
    /// Carrega a sessão salva no localStorage, se houver
    pub fn new() -> Self {
        Self {
            usuario: Rc::new(RefCell::new(auth_service::usuario_atual())),
        }
    }

    pub fn set_usuario(&self, usuario: Option<Usuario>) {
        *self.usuario.borrow_mut() = usuario;
    }

    pub fn usuario(&self) -> Option<Usuario> {
        self.usuario.borrow().clone()
    }

    pub fn esta_logado(&self) -> bool {
        auth_service::esta_logado()
    }

    pub fn is_admin(&self) -> bool {
        self.usuario.borrow().as_ref().map(|u| u.is_admin).unwrap_or(false)
    }

    /// Re-sincroniza com o storage (após login/logout/401)
    pub fn recarregar(&self) {
        *self.usuario.borrow_mut() = auth_service::usuario_atual();
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
