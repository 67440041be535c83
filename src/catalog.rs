// 🗺️ Catalog - fixed table of enclosures and the animals living in them
//
// The table is plain configuration (names, sounds, descriptions).
// Building it into entities is the only place randomness is consumed:
// one gender draw per animal, taken from the generator passed in.

use crate::entities::{Animal, Enclosure, Gender};
use crate::error::CatalogError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// TEMPLATES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalTemplate {
    pub name: String,
    pub sound: String,
}

impl AnimalTemplate {
    pub fn new(name: impl Into<String>, sound: impl Into<String>) -> Self {
        AnimalTemplate {
            name: name.into(),
            sound: sound.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosureTemplate {
    pub description: String,
    pub animals: Vec<AnimalTemplate>,
}

/// CatalogConfig - ordered enclosure templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub enclosures: Vec<EnclosureTemplate>,
}

// Reference content: (description, [(name, sound)])
const DEFAULT_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "Это загон для зверей семейства кошачьих.",
        &[
            ("Рысь", "Мияуауааауаааяяяя"),
            ("Лев", "РРРррааааауурр"),
            ("Тигр", "Ррраааауу"),
        ],
    ),
    (
        "Это загон для зверей семейства собачьих.",
        &[
            ("Гиена", "Йи-хи-хи-хи-хи"),
            ("Волк", "Бауууу"),
            ("Дикая собака динго", "Буаф-бауф"),
        ],
    ),
    (
        "Это загон для зверей семейства птичьих.",
        &[
            ("Попугай", "Фиииить-чик-чик"),
            ("Орёл", "Иии-иии"),
            ("Сова", "Уу-уу-уу"),
        ],
    ),
    (
        "Это загон для сельскохозяйственных зверей.",
        &[
            ("Лошадь", "Иии-го-го"),
            ("Корова", "Муууу-у-у"),
            ("Овца", "Меее-е-е"),
        ],
    ),
];

impl Default for CatalogConfig {
    fn default() -> Self {
        let enclosures = DEFAULT_TABLE
            .iter()
            .map(|(description, animals)| EnclosureTemplate {
                description: description.to_string(),
                animals: animals
                    .iter()
                    .map(|(name, sound)| AnimalTemplate::new(*name, *sound))
                    .collect(),
            })
            .collect();

        CatalogConfig { enclosures }
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON table
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON table from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.enclosures.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, enclosure) in self.enclosures.iter().enumerate() {
            if enclosure.description.trim().is_empty() {
                return Err(CatalogError::MissingDescription { index });
            }
            if enclosure.animals.is_empty() {
                return Err(CatalogError::NoAnimals {
                    description: enclosure.description.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn animal_count(&self) -> usize {
        self.enclosures.iter().map(|e| e.animals.len()).sum()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Catalog - built once at startup, read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    enclosures: Vec<Enclosure>,
}

impl Catalog {
    /// Build entities from the table, drawing one gender per animal in table order
    pub fn build<R: Rng>(config: &CatalogConfig, rng: &mut R) -> Self {
        let enclosures: Vec<Enclosure> = config
            .enclosures
            .iter()
            .map(|template| {
                let mut enclosure = Enclosure::new(template.description.clone());
                for animal in &template.animals {
                    enclosure.add_animal(Animal::new(
                        animal.name.clone(),
                        animal.sound.clone(),
                        Gender::random(rng),
                    ));
                }
                enclosure
            })
            .collect();

        tracing::debug!(
            enclosures = enclosures.len(),
            animals = config.animal_count(),
            "catalog built"
        );

        Catalog { enclosures }
    }

    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    pub fn get(&self, index: usize) -> Option<&Enclosure> {
        self.enclosures.get(index)
    }

    pub fn len(&self) -> usize {
        self.enclosures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enclosures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_default_config_shape() {
        let config = CatalogConfig::default();

        assert_eq!(config.enclosures.len(), 4);
        assert!(config.enclosures.iter().all(|e| e.animals.len() == 3));
        assert_eq!(config.animal_count(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_preserves_table_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = Catalog::build(&CatalogConfig::default(), &mut rng);

        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.get(0).unwrap().description(),
            "Это загон для зверей семейства кошачьих."
        );
        assert_eq!(
            catalog.get(3).unwrap().description(),
            "Это загон для сельскохозяйственных зверей."
        );

        let dogs: Vec<&str> = catalog.get(1).unwrap().animals().iter().map(|a| a.name()).collect();
        assert_eq!(dogs, vec!["Гиена", "Волк", "Дикая собака динго"]);
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let config = CatalogConfig::default();
        let first = Catalog::build(&config, &mut StdRng::seed_from_u64(99));
        let second = Catalog::build(&config, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn test_genders_cover_both_values_over_many_builds() {
        let config = CatalogConfig::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen_male = false;
        let mut seen_female = false;

        for _ in 0..50 {
            let catalog = Catalog::build(&config, &mut rng);
            for animal in catalog.enclosures().iter().flat_map(|e| e.animals()) {
                assert!(Gender::ALL.contains(&animal.gender()));
                match animal.gender() {
                    Gender::Male => seen_male = true,
                    Gender::Female => seen_female = true,
                }
            }
        }

        assert!(seen_male && seen_female);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "enclosures": [
                { "description": "Аквариум", "animals": [ { "name": "Карп", "sound": "..." } ] }
            ]
        }"#;

        let config = CatalogConfig::from_json_str(json).unwrap();
        assert_eq!(config.enclosures.len(), 1);
        assert_eq!(config.enclosures[0].animals[0], AnimalTemplate::new("Карп", "..."));
    }

    #[test]
    fn test_default_config_json_roundtrip() {
        let config = CatalogConfig::default();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(CatalogConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let result = CatalogConfig::from_json_str(r#"{ "enclosures": [] }"#);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_validate_rejects_blank_description() {
        let json = r#"{ "enclosures": [ { "description": "  ", "animals": [ { "name": "a", "sound": "b" } ] } ] }"#;
        let result = CatalogConfig::from_json_str(json);
        assert!(matches!(result, Err(CatalogError::MissingDescription { index: 0 })));
    }

    #[test]
    fn test_validate_rejects_enclosure_without_animals() {
        let json = r#"{ "enclosures": [ { "description": "Пустой", "animals": [] } ] }"#;
        let result = CatalogConfig::from_json_str(json);
        assert!(matches!(result, Err(CatalogError::NoAnimals { .. })));
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        let result = CatalogConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&CatalogConfig::default()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = CatalogConfig::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
