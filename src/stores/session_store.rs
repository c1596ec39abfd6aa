// ============================================================================
// SESSION STORE - Slot único clave/valor para la sesión del motorista
// ============================================================================
// Un solo slot: cada `set` sobrescribe, sin expiración.
// Todas las vistas pasan por aquí en lugar de tocar localStorage directamente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::Session;
use crate::utils::{get_local_storage, load_from_storage, remove_from_storage, save_to_storage, StorageError};

pub trait SessionStore {
    /// Guarda la sesión, sobrescribiendo la anterior
    fn set(&self, session: &Session) -> Result<(), StorageError>;

    /// Sesión actual; `None` si no existe o el JSON guardado no es válido
    fn get(&self) -> Option<Session>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// Sesión en localStorage del navegador
#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalSessionStore {
    fn default() -> Self {
        Self::new(CONFIG.session_storage_key.clone())
    }
}

impl SessionStore for LocalSessionStore {
    fn set(&self, session: &Session) -> Result<(), StorageError> {
        save_to_storage(&self.key, session)
    }

    fn get(&self) -> Option<Session> {
        load_from_storage(&self.key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        remove_from_storage(&self.key)
    }
}

/// Sesión en memoria con el mismo formato JSON que localStorage.
///
/// Se pierde al recargar la página.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON tal cual quedaría en localStorage
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    #[cfg(test)]
    pub fn set_raw(&self, json: impl Into<String>) {
        *self.slot.borrow_mut() = Some(json.into());
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn get(&self) -> Option<Session> {
        let json = self.slot.borrow().clone()?;
        serde_json::from_str(&json).ok()
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// localStorage si el navegador lo permite; si no, memoria
pub fn default_session_store() -> Rc<dyn SessionStore> {
    if get_local_storage().is_some() {
        Rc::new(LocalSessionStore::default())
    } else {
        log::warn!("⚠️ localStorage no disponible, la sesión solo vivirá en memoria");
        Rc::new(MemorySessionStore::new())
    }
}


// localStorage real; requiere navegador (`wasm-pack test --headless --chrome`)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn raw_item(key: &str) -> Option<String> {
        get_local_storage().unwrap().get_item(key).unwrap()
    }

    #[wasm_bindgen_test]
    fn local_store_persists_cpf_under_motorista() {
        let store = LocalSessionStore::new("motorista");
        store.clear().unwrap();

        store.set(&Session::new("123.456.789-09")).unwrap();
        assert_eq!(raw_item("motorista").as_deref(), Some(r#"{"cpf":"123.456.789-09"}"#));
        assert_eq!(store.get(), Some(Session::new("123.456.789-09")));

        store.clear().unwrap();
        assert_eq!(raw_item("motorista"), None);
        assert_eq!(store.get(), None);
    }

    #[wasm_bindgen_test]
    fn local_store_ignores_foreign_json() {
        let store = LocalSessionStore::new("motorista-foreign");
        get_local_storage()
            .unwrap()
            .set_item("motorista-foreign", "{not json")
            .unwrap();

        assert_eq!(store.get(), None);
        store.clear().unwrap();
    }
}
