// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    /// Idioma desconocido => portugués
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "EN" | "EN-US" | "EN-GB" => Language::English,
            _ => Language::Portuguese,
        }
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::English => {
            // Login
            translations.insert("login_motorista", "Driver Login");
            translations.insert("cpf", "CPF");
            translations.insert("senha", "Password");
            translations.insert("entrar", "Sign in");
            translations.insert("preencha_campos", "Fill in all fields");

            // Dashboard
            translations.insert("bem_vindo", "Welcome!");
            translations.insert("bem_vindo_motorista", "Welcome, {}!");
            translations.insert("sair", "Log out");
            translations.insert("solicitar_corrida", "Request a ride");
            translations.insert("origem", "Origin:");
            translations.insert("destino", "Destination:");
            translations.insert("digite_local", "Type a location");

            // Mapa
            translations.insert("mapa", "Map");
            translations.insert("carregando_mapa", "Loading map...");
            translations.insert("mapa_indisponivel", "Map unavailable");
            translations.insert("busca_indisponivel", "Address suggestions unavailable");

            // Rutas
            translations.insert("pagina_nao_encontrada", "Page not found");
            translations.insert("voltar_login", "Back to login");
        }
        Language::Portuguese => {
            // Login
            translations.insert("login_motorista", "Login Motorista");
            translations.insert("cpf", "CPF");
            translations.insert("senha", "Senha");
            translations.insert("entrar", "Entrar");
            translations.insert("preencha_campos", "Preencha todos os campos");

            // Dashboard
            translations.insert("bem_vindo", "Bem-vindo!");
            translations.insert("bem_vindo_motorista", "Bem-vindo, {}!");
            translations.insert("sair", "Sair");
            translations.insert("solicitar_corrida", "Solicitar Corrida");
            translations.insert("origem", "Origem:");
            translations.insert("destino", "Destino:");
            translations.insert("digite_local", "Digite um local");

            // Mapa
            translations.insert("mapa", "Mapa");
            translations.insert("carregando_mapa", "Carregando mapa...");
            translations.insert("mapa_indisponivel", "Mapa indisponível");
            translations.insert("busca_indisponivel", "Sugestões de endereço indisponíveis");

            // Rutas
            translations.insert("pagina_nao_encontrada", "Página não encontrada");
            translations.insert("voltar_login", "Voltar ao login");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave tal cual si no hay traducción.
pub fn t(key: &str, lang: Language) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

/// Traducción con un único parámetro `{}`
pub fn t_with(key: &str, lang: Language, value: &str) -> String {
    t(key, lang).replacen("{}", value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_existe", Language::Portuguese), "no_existe");
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        let pt = get_translations(Language::Portuguese);
        let en = get_translations(Language::English);
        let mut pt_keys: Vec<_> = pt.keys().collect();
        let mut en_keys: Vec<_> = en.keys().collect();
        pt_keys.sort();
        en_keys.sort();
        assert_eq!(pt_keys, en_keys);
    }

    #[test]
    fn validation_message_is_localized() {
        assert_eq!(t("preencha_campos", Language::English), "Fill in all fields");
        assert_eq!(t("preencha_campos", Language::Portuguese), "Preencha todos os campos");
    }

    #[test]
    fn welcome_with_identifier() {
        assert_eq!(
            t_with("bem_vindo_motorista", Language::Portuguese, "123.456.789-09"),
            "Bem-vindo, 123.456.789-09!"
        );
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("pt-BR"), Language::Portuguese);
        assert_eq!(Language::from_code(""), Language::Portuguese);
    }
}
