//! Instruction sent alongside the photo
//!
//! The language shows up in exactly two places: the common name and the
//! rest of the narrative text. The Latin name lines never mention it, so the
//! model keeps the binomial name untranslated.

use super::language::Language;

const LANGUAGE_MARKER: &str = "{{language}}";

const INSTRUCTION_TEMPLATE: &str = r#"Analyze the provided image of a flower and respond with a detailed JSON object containing the following information:

1. Identify the flower with:
   - Its common name in {{language}} (for the "species" field)
   - Its scientific Latin name in binomial nomenclature (for the "latinName" field)
2. List any apparent diseases or issues visible in the image, including detailed descriptions of each.
3. Identify if the plant is healthy or not.
4. Suggest solutions for plant care, including farming practices, fertilizers, medicines, or specific chemicals, with detailed descriptions for each solution.

Please format your response as a JSON object with the following structure:

{
  "isHealthy": boolean,
  "flowerIdentification": {
    "species": "",
    "latinName": "",
    "description": ""
  },
  "apparentDiseases": [
    {
      "name": "",
      "symptoms": "",
      "description": ""
    }
  ],
  "careSolutions": [
    {
      "type": "",
      "description": ""
    }
  ]
}

For each disease, provide a clear description explaining what it is and how it affects the plant. For each care solution, provide detailed instructions on how to apply the solution.

Important: The "latinName" field must always be the scientific Latin name in binomial nomenclature format (e.g., "Rosa gallica"), never a translation. All other text, including the "species" field, must be written in {{language}}.
"#;

/// Build the instruction for one diagnosis request
pub fn build_instruction(language: Language) -> String {
    INSTRUCTION_TEMPLATE.replace(LANGUAGE_MARKER, &language.prompt_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_appears_exactly_twice() {
        for language in Language::ALL {
            let instruction = build_instruction(language);
            assert_eq!(
                instruction.matches(&language.prompt_token()).count(),
                2,
                "{:?}",
                language
            );
            assert!(!instruction.contains(LANGUAGE_MARKER));
        }
    }

    #[test]
    fn test_latin_name_lines_never_carry_the_language() {
        for language in Language::ALL {
            let instruction = build_instruction(language);
            let latin_lines: Vec<&str> = instruction
                .lines()
                .filter(|line| line.contains("Latin name"))
                .collect();

            assert_eq!(latin_lines.len(), 2);
            for line in latin_lines {
                // The "Important" line also holds the narrative instruction;
                // only the Latin name sentence must stay language-free.
                let latin_part = line.split("All other text").next().unwrap_or(line);
                assert!(!latin_part.contains(language.english_name()), "{}", line);
                assert!(!latin_part.contains(&format!("\"{}\"", language.code())));
            }
        }
    }

    #[test]
    fn test_common_name_line_carries_the_language() {
        let instruction = build_instruction(Language::Pt);
        let species_line = instruction
            .lines()
            .find(|line| line.contains("(for the \"species\" field)"))
            .expect("species instruction");
        assert!(species_line.contains("Portuguese (\"pt\")"));
    }

    #[test]
    fn test_instruction_describes_every_field() {
        let instruction = build_instruction(Language::En);
        for key in [
            "\"isHealthy\"",
            "\"flowerIdentification\"",
            "\"species\"",
            "\"latinName\"",
            "\"apparentDiseases\"",
            "\"symptoms\"",
            "\"careSolutions\"",
            "\"type\"",
        ] {
            assert!(instruction.contains(key), "missing {}", key);
        }
    }
}
