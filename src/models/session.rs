use serde::{Deserialize, Serialize};

// ============================================================================
// SESIÓN DEL MOTORISTA
// ============================================================================

/// Marcador local de "motorista logueado". No es una credencial.
///
/// Se guarda en localStorage como `{"cpf": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub cpf: String,
}

impl Session {
    pub fn new(cpf: impl Into<String>) -> Self {
        Self { cpf: cpf.into() }
    }

    pub fn identifier(&self) -> &str {
        &self.cpf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_cpf_object() {
        let json = serde_json::to_string(&Session::new("123.456.789-09")).unwrap();
        assert_eq!(json, r#"{"cpf":"123.456.789-09"}"#);
    }

    #[test]
    fn reads_layout_written_by_older_clients() {
        let session: Session = serde_json::from_str(r#"{ "cpf": "98765432100" }"#).unwrap();
        assert_eq!(session.identifier(), "98765432100");
    }
}
