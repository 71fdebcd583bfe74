//! Structured diagnosis returned by the inference provider
//!
//! Field names follow the camelCase JSON the instruction asks for.

use serde::{Deserialize, Deserializer, Serialize};

/// The full result for one photo
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub is_healthy: bool,

    pub flower_identification: FlowerIdentification,

    /// Only meaningful when `is_healthy` is false. Models tend to send `null`
    /// or leave the key out for healthy plants, both read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub apparent_diseases: Vec<ApparentDisease>,

    pub care_solutions: Vec<CareSolution>,
}

/// What the plant is
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlowerIdentification {
    /// Common name, in the requested language
    pub species: String,
    /// Scientific binomial name, never translated
    pub latin_name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApparentDisease {
    pub name: String,
    pub symptoms: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CareSolution {
    /// Kind of treatment (fertilizer, pruning, fungicide...)
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl Diagnosis {
    /// Diseases worth showing: none at all for a healthy plant
    pub fn visible_diseases(&self) -> &[ApparentDisease] {
        if self.is_healthy {
            &[]
        } else {
            &self.apparent_diseases
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnosis {
        Diagnosis {
            is_healthy: false,
            flower_identification: FlowerIdentification {
                species: "Rosa".to_string(),
                latin_name: "Rosa gallica".to_string(),
                description: "Arbusto con flores fragantes.".to_string(),
            },
            apparent_diseases: vec![ApparentDisease {
                name: "Oídio".to_string(),
                symptoms: "Polvo blanco en las hojas".to_string(),
                description: "Hongo que debilita la planta.".to_string(),
            }],
            care_solutions: vec![CareSolution {
                kind: "Fungicida".to_string(),
                description: "Aplicar azufre cada 10 días.".to_string(),
            }],
        }
    }

    #[test]
    fn test_serialization() {
        let diagnosis = sample();
        let json = serde_json::to_string(&diagnosis).unwrap();

        // Wire names are camelCase and `kind` goes out as `type`
        assert!(json.contains("\"isHealthy\":false"));
        assert!(json.contains("\"latinName\":\"Rosa gallica\""));
        assert!(json.contains("\"type\":\"Fungicida\""));

        let restored: Diagnosis = serde_json::from_str(&json).unwrap();
        assert_eq!(diagnosis, restored);
    }

    #[test]
    fn test_missing_or_null_diseases_read_as_empty() {
        let absent = r#"{
            "isHealthy": true,
            "flowerIdentification": {"species": "Rose", "latinName": "Rosa", "description": ""},
            "careSolutions": []
        }"#;
        let null = r#"{
            "isHealthy": true,
            "flowerIdentification": {"species": "Rose", "latinName": "Rosa", "description": ""},
            "apparentDiseases": null,
            "careSolutions": []
        }"#;

        for raw in [absent, null] {
            let diagnosis: Diagnosis = serde_json::from_str(raw).unwrap();
            assert!(diagnosis.apparent_diseases.is_empty());
        }
    }

    #[test]
    fn test_healthy_plant_hides_diseases() {
        let mut diagnosis = sample();
        assert_eq!(diagnosis.visible_diseases().len(), 1);

        diagnosis.is_healthy = true;
        assert!(diagnosis.visible_diseases().is_empty());
        // The data itself is untouched
        assert_eq!(diagnosis.apparent_diseases.len(), 1);
    }
}
