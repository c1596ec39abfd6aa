use web_sys::window;

/// Alerta bloqueante del navegador; sin `window` solo se registra en el log
pub fn show_alert(message: &str) {
    match window() {
        Some(win) => {
            if win.alert_with_message(message).is_err() {
                log::warn!("⚠️ No se pudo mostrar la alerta: {}", message);
            }
        }
        None => log::warn!("⚠️ Sin window para la alerta: {}", message),
    }
}
