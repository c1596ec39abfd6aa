// ============================================================================
// LOGIN VIEWMODEL - Lógica de login/logout
// ============================================================================
// Sin autenticación real: el CPF solo tiene que no estar vacío.
// Devuelve la ruta destino, la vista se encarga de navegar.
// ============================================================================

use std::rc::Rc;

use crate::models::Session;
use crate::router::Route;
use crate::stores::SessionStore;
use crate::utils::StorageError;

/// Datos del formulario de login
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub identifier: String,
    /// Se recoge pero nunca se valida ni se guarda
    pub password: String,
}

impl LoginForm {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthMessage {
    LoginSubmitted(LoginForm),
    LogoutRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    /// CPF vacío: se muestra "preencha todos os campos"
    EmptyIdentifier,
    Storage(StorageError),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::EmptyIdentifier => write!(f, "fill in all fields"),
            LoginError::Storage(e) => write!(f, "Session storage error: {}", e),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<StorageError> for LoginError {
    fn from(e: StorageError) -> Self {
        LoginError::Storage(e)
    }
}

/// ViewModel de sesión - SOLO lógica, sin DOM
#[derive(Clone)]
pub struct LoginViewModel {
    store: Rc<dyn SessionStore>,
}

impl LoginViewModel {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, message: AuthMessage) -> Result<Route, LoginError> {
        match message {
            AuthMessage::LoginSubmitted(form) => self.submit(&form),
            AuthMessage::LogoutRequested => Ok(self.logout()?),
        }
    }

    /// Crea la sesión (sobrescribe cualquier otra) y devuelve `Route::Dashboard`
    pub fn submit(&self, form: &LoginForm) -> Result<Route, LoginError> {
        if form.identifier.trim().is_empty() {
            log::warn!("⚠️ Login rechazado: CPF vacío");
            return Err(LoginError::EmptyIdentifier);
        }

        self.store.set(&Session::new(form.identifier.clone()))?;
        log::info!("✅ Login motorista");

        Ok(Route::Dashboard)
    }

    /// Borra la sesión y devuelve `Route::Home`
    pub fn logout(&self) -> Result<Route, StorageError> {
        self.store.clear()?;
        log::info!("👋 Logout");
        Ok(Route::Home)
    }

    pub fn current_session(&self) -> Option<Session> {
        self.store.get()
    }
}
