// Entity Models
//
// Plain data records built once by the catalog and read by the session:
// - Animal: name, sound, gender
// - Enclosure: description + ordered animals

pub mod animal;
pub mod enclosure;

pub use animal::{Animal, Gender};
pub use enclosure::Enclosure;
