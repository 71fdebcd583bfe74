//! Turning the provider's free-form text into a `Diagnosis`
//!
//! Two stages:
//! 1. Strip every code fence marker (```` ```json ```` and ```` ``` ````)
//! 2. Parse strictly: valid JSON, a top-level object, the exact shape
//!
//! Anything that fails is a `ParseError`. There is no partial result.

use serde_json::Value;

use super::model::Diagnosis;
use crate::error::{excerpt, ParseError};

const TAGGED_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Remove all code fence markers, wherever they appear
pub fn strip_code_fences(text: &str) -> String {
    text.replace(TAGGED_FENCE, "").replace(FENCE, "").trim().to_string()
}

/// Parse provider text into a diagnosis
pub fn parse_diagnosis(text: &str) -> Result<Diagnosis, ParseError> {
    let payload = strip_code_fences(text);
    if payload.is_empty() {
        return Err(ParseError::Empty);
    }

    let value: Value = serde_json::from_str(&payload).map_err(|source| ParseError::Syntax {
        excerpt: excerpt(&payload),
        source,
    })?;

    if !value.is_object() {
        return Err(ParseError::NotAnObject {
            excerpt: excerpt(&payload),
        });
    }

    serde_json::from_value(value).map_err(|source| ParseError::Schema {
        excerpt: excerpt(&payload),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNHEALTHY: &str = r#"{
  "isHealthy": false,
  "flowerIdentification": {
    "species": "Rosa",
    "latinName": "Rosa gallica",
    "description": "Arbusto de flores fragantes."
  },
  "apparentDiseases": [
    {"name": "Oídio", "symptoms": "Manchas blancas", "description": "Hongo común."},
    {"name": "Mancha negra", "symptoms": "Manchas oscuras", "description": "Hongo foliar."}
  ],
  "careSolutions": [
    {"type": "Fungicida", "description": "Aplicar cada 7 días."}
  ]
}"#;

    #[test]
    fn test_fenced_and_plain_parse_identically() {
        let plain = parse_diagnosis(UNHEALTHY).unwrap();
        let tagged = parse_diagnosis(&format!("```json\n{}\n```", UNHEALTHY)).unwrap();
        let untagged = parse_diagnosis(&format!("```\n{}\n```", UNHEALTHY)).unwrap();

        assert_eq!(plain, tagged);
        assert_eq!(plain, untagged);
        assert_eq!(plain.apparent_diseases.len(), 2);
        assert_eq!(plain.apparent_diseases[0].name, "Oídio");
        assert_eq!(plain.apparent_diseases[1].name, "Mancha negra");
    }

    #[test]
    fn test_serialized_diagnosis_parses_back() {
        let original = parse_diagnosis(UNHEALTHY).unwrap();
        let json = serde_json::to_string_pretty(&original).unwrap();
        assert_eq!(parse_diagnosis(&json).unwrap(), original);
    }

    #[test]
    fn test_truncated_json_is_a_syntax_error() {
        // What a 512-token ceiling cut-off looks like
        let half = UNHEALTHY.chars().count() / 2;
        let truncated: String = UNHEALTHY.chars().take(half).collect();
        let result = parse_diagnosis(&format!("```json\n{}", truncated));
        assert!(matches!(result, Err(ParseError::Syntax { .. })));
    }

    #[test]
    fn test_prose_is_rejected() {
        let result = parse_diagnosis("Sorry, I can't identify this plant.");
        assert!(matches!(result, Err(ParseError::Syntax { .. })));
    }

    #[test]
    fn test_only_fences_is_empty() {
        assert!(matches!(parse_diagnosis("```json\n```"), Err(ParseError::Empty)));
        assert!(matches!(parse_diagnosis("   "), Err(ParseError::Empty)));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let result = parse_diagnosis("[1, 2, 3]");
        assert!(matches!(result, Err(ParseError::NotAnObject { .. })));
    }

    #[test]
    fn test_wrong_shape_is_a_schema_error() {
        // Missing careSolutions, wrong type for isHealthy
        let missing = r#"{"isHealthy": true, "flowerIdentification": {"species": "a", "latinName": "b", "description": "c"}}"#;
        let wrong_type = UNHEALTHY.replace("\"isHealthy\": false", "\"isHealthy\": \"no\"");

        for raw in [missing.to_string(), wrong_type] {
            assert!(matches!(
                parse_diagnosis(&raw),
                Err(ParseError::Schema { .. })
            ));
        }
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
        assert_eq!(strip_code_fences("Here:\n```{}```"), "Here:\n{}");
    }
}
