// 🐾 Animal Entity - immutable record shown inside an enclosure
//
// Name and sound come from the catalog table, gender is drawn once
// when the animal is built and never changes afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// GENDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// One uniform binary draw from the supplied generator
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Самец",
            Gender::Female => "Самка",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// ANIMAL ENTITY
// ============================================================================

/// Animal - never mutated after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    name: String,
    sound: String,
    gender: Gender,
}

impl Animal {
    pub fn new(name: impl Into<String>, sound: impl Into<String>, gender: Gender) -> Self {
        Animal {
            name: name.into(),
            sound: sound.into(),
            gender,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sound(&self) -> &str {
        &self.sound
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Single display line used by the enclosure view
    pub fn describe(&self) -> String {
        format!(
            "Такой вот звИрь - {}. Его речь звучит, как - {}. Его пол - {}",
            self.name, self.sound, self.gender
        )
    }
}
