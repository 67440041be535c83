// 🏞️ Enclosure - named, ordered group of animals

use super::animal::Animal;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Enclosure - animals are appended while the catalog is built and
/// only read afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    description: String,
    animals: Vec<Animal>,
}

impl Enclosure {
    pub fn new(description: impl Into<String>) -> Self {
        Enclosure {
            description: description.into(),
            animals: Vec::new(),
        }
    }

    pub fn add_animal(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Animals in insertion order
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Print header, count line (followed by a blank line), then one line per animal
    pub fn show<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.description)?;
        writeln!(out, "Здесь живут и не тужат {} зверей.", self.animals.len())?;
        writeln!(out)?;

        for animal in &self.animals {
            writeln!(out, "{}", animal.describe())?;
        }

        Ok(())
    }
}
