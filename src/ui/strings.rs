//! Localized UI strings
//!
//! A fixed lookup table, one entry per language. Nothing here is computed.

use crate::diagnosis::Language;

/// Every piece of UI text, in one language
#[derive(Debug)]
pub struct Strings {
    pub capture_button: &'static str,
    pub diagnose_button: &'static str,
    pub diagnosing: &'static str,
    pub replace_image: &'static str,
    pub remove_image: &'static str,
    pub analyzing: &'static str,
    pub waiting_for_image: &'static str,
    pub healthy: &'static str,
    pub unhealthy: &'static str,
    pub apparent_diseases: &'static str,
    pub care_solutions: &'static str,
    pub language_change_message: &'static str,
    pub common_name: &'static str,
    pub latin_name: &'static str,
    pub inference_failed: &'static str,
    pub parse_failed: &'static str,
    pub select_language: &'static str,
    pub ok: &'static str,
}

static EN: Strings = Strings {
    capture_button: "Capture or upload your image",
    diagnose_button: "Diagnose your plant",
    diagnosing: "Diagnosing...",
    replace_image: "Replace image",
    remove_image: "Remove image",
    analyzing: "Analyzing your plant...",
    waiting_for_image: "Your plant diagnosis will be here after you upload an image...",
    healthy: "Healthy",
    unhealthy: "Unhealthy",
    apparent_diseases: "Apparent diseases",
    care_solutions: "Care solutions",
    language_change_message: "Language changed to English. If your diagnosis is ready, you'll have to run it again to see the changes.",
    common_name: "Common name",
    latin_name: "Latin name",
    inference_failed: "We couldn't reach the diagnosis service. Please try again.",
    parse_failed: "The diagnosis came back in an unexpected format. Please try again.",
    select_language: "Select language",
    ok: "OK",
};

static ES: Strings = Strings {
    capture_button: "Captura o sube tu imagen",
    diagnose_button: "Diagnostica tu planta",
    diagnosing: "Diagnosticando...",
    replace_image: "Reemplazar imagen",
    remove_image: "Quitar imagen",
    analyzing: "Analizando tu planta...",
    waiting_for_image: "El diagnóstico de tu planta aparecerá después de subir una imagen...",
    healthy: "Saludable",
    unhealthy: "No saludable",
    apparent_diseases: "Enfermedades aparentes",
    care_solutions: "Soluciones de cuidado",
    language_change_message: "Idioma cambiado a Español. Si tu diagnóstico está listo, deberás ejecutarlo nuevamente para ver los cambios.",
    common_name: "Nombre común",
    latin_name: "Nombre latino",
    inference_failed: "No pudimos contactar el servicio de diagnóstico. Inténtalo de nuevo.",
    parse_failed: "El diagnóstico llegó en un formato inesperado. Inténtalo de nuevo.",
    select_language: "Seleccionar idioma",
    ok: "OK",
};

static PT: Strings = Strings {
    capture_button: "Capture ou envie sua imagem",
    diagnose_button: "Diagnosticar sua planta",
    diagnosing: "Diagnosticando...",
    replace_image: "Substituir imagem",
    remove_image: "Remover imagem",
    analyzing: "Analisando sua planta...",
    waiting_for_image: "O diagnóstico da sua planta aparecerá depois de enviar uma imagem...",
    healthy: "Saudável",
    unhealthy: "Não saudável",
    apparent_diseases: "Doenças aparentes",
    care_solutions: "Soluções de cuidado",
    language_change_message: "Idioma alterado para Português. Se seu diagnóstico estiver pronto, você precisará executá-lo novamente para ver as alterações.",
    common_name: "Nome comum",
    latin_name: "Nome em latim",
    inference_failed: "Não foi possível contatar o serviço de diagnóstico. Tente novamente.",
    parse_failed: "O diagnóstico veio em um formato inesperado. Tente novamente.",
    select_language: "Selecionar idioma",
    ok: "OK",
};

/// Look up the string table for a language
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Pt => &PT,
    }
}
