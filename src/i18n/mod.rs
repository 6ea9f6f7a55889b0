// ============================================================================
// Toxide - Internationalization Module
// ============================================================================
//
// File: src/i18n/mod.rs
// Responsibility: internationalization support and translation management
// Boundaries:
//   - ✅ Translation table lookup
//   - ✅ Translation macro definitions
//   - ✅ Language switching support
//   - ✅ Parameterized translation support
//   - ❌ No concrete translation content
//   - ❌ No business logic
//   - ❌ No CLI-related logic
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

/// Look up a translated string for the current language
pub fn get_translation(key: &str) -> String {
    // Read the language from config on every lookup so runtime
    // overrides take effect immediately.
    let language = get_language_from_config().unwrap_or_else(|| "en_us".to_string());

    let translation_data = match language.as_str() {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    };

    for &(k, v) in translation_data {
        if k == key {
            return v.to_string();
        }
    }

    format!("Unknown translation key: {}", key)
}

/// Read the configured language, if the global config is available
fn get_language_from_config() -> Option<String> {
    use crate::models::config::Config;

    Config::get_language().ok()
}

/// Simple translation macro
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// Fill `{}` placeholders in a translated template, left to right
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    for arg in args.iter() {
        if let Some(pos) = result.find("{}") {
            result.replace_range(pos..pos + 2, arg);
        }
    }
    result
}

/// Parameterized translation macro
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}
