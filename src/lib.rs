// ============================================================================
// MOTOTAXI - CLIENTE WEB DEL MOTORISTA (YEW + WASM)
// ============================================================================
// Arquitectura:
// - Components: vistas Yew (login, dashboard, búsqueda de lugares, mapa)
// - Hooks: estado de vista + contextos (sesión, carga de Google Maps)
// - ViewModels: lógica de login/logout sin DOM
// - State: reducer del dashboard
// - Stores: slot único de sesión (localStorage o memoria)
// - Services: carga del script de Maps y resolución de lugares
// - Models: Session, Place
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::config::CONFIG;

/// Inicializa panic hook y logger del navegador
pub fn init_logging() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}
