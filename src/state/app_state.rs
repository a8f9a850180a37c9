// ============================================================================
// APP STATE - Estado global da aplicação
// ============================================================================
// Rc<RefCell> compartilhado entre views e closures de evento. Toda escrita
// relevante chama notificar(), que agenda um re-render via subscriber
// registrado em App::new (Timeout 0 para agrupar múltiplas escritas).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::models::telemetria::TelemetriaDashboard;
use crate::models::{Licenca, LicencaComTelemetria, LogBot, VersaoBot};
use crate::state::AuthState;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,

    // Painel do cliente
    pub minhas_licencas: Rc<RefCell<Vec<Licenca>>>,
    pub painel_carregando: Rc<RefCell<bool>>,
    pub painel_erro: Rc<RefCell<Option<String>>>,

    // Dados admin
    pub licencas: Rc<RefCell<Vec<Licenca>>>,
    pub versoes: Rc<RefCell<Vec<VersaoBot>>>,
    pub logs: Rc<RefCell<Vec<LogBot>>>,
    pub dashboard: Rc<RefCell<Option<TelemetriaDashboard>>>,
    pub licencas_stats: Rc<RefCell<Vec<LicencaComTelemetria>>>,
    pub admin_carregando: Rc<RefCell<bool>>,
    pub admin_erro: Rc<RefCell<Option<String>>>,
    pub admin_aviso: Rc<RefCell<Option<String>>>,

    // Filtros e seleções da UI admin
    pub busca_licencas: Rc<RefCell<String>>,
    pub busca_clientes: Rc<RefCell<String>>,
    pub filtro_tipo_log: Rc<RefCell<String>>,
    pub periodo_dashboard: Rc<RefCell<String>>,
    pub mostrar_form_licenca: Rc<RefCell<bool>>,

    // Auto-refresh da telemetria; dropar o Interval cancela o polling
    pub auto_refresh: Rc<RefCell<Option<Interval>>>,

    // Reatividade
    pub subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),

            minhas_licencas: Rc::new(RefCell::new(Vec::new())),
            painel_carregando: Rc::new(RefCell::new(false)),
            painel_erro: Rc::new(RefCell::new(None)),

            licencas: Rc::new(RefCell::new(Vec::new())),
            versoes: Rc::new(RefCell::new(Vec::new())),
            logs: Rc::new(RefCell::new(Vec::new())),
            dashboard: Rc::new(RefCell::new(None)),
            licencas_stats: Rc::new(RefCell::new(Vec::new())),
            admin_carregando: Rc::new(RefCell::new(false)),
            admin_erro: Rc::new(RefCell::new(None)),
            admin_aviso: Rc::new(RefCell::new(None)),

            busca_licencas: Rc::new(RefCell::new(String::new())),
            busca_clientes: Rc::new(RefCell::new(String::new())),
            filtro_tipo_log: Rc::new(RefCell::new("todos".to_string())),
            periodo_dashboard: Rc::new(RefCell::new("7d".to_string())),
            mostrar_form_licenca: Rc::new(RefCell::new(false)),

            auto_refresh: Rc::new(RefCell::new(None)),

            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscrever<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notifica os subscribers (que agendam o re-render)
    pub fn notificar(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }

    /// O toggle de auto-refresh está ligado?
    pub fn auto_refresh_ativo(&self) -> bool {
        self.auto_refresh.borrow().is_some()
    }

    /// Cancela o polling dropando o Interval (chamado ao sair da página
    /// de telemetria ou ao desligar o toggle)
    pub fn parar_auto_refresh(&self) {
        if self.auto_refresh.borrow_mut().take().is_some() {
            log::info!("⏹️ Auto-refresh da telemetria cancelado");
        }
    }

    pub fn set_erro_admin(&self, erro: Option<String>) {
        *self.admin_erro.borrow_mut() = erro;
    }

    /// Aviso de sucesso que some sozinho (após ações do admin)
    pub fn avisar(&self, mensagem: &str) {
        *self.admin_aviso.borrow_mut() = Some(mensagem.to_string());
        self.notificar();

        let state = self.clone();
        gloo_timers::callback::Timeout::new(4_000, move || {
            *state.admin_aviso.borrow_mut() = None;
            state.notificar();
        })
        .forget();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
