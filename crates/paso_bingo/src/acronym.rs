//! Stable acronym selection.
//!
//! Maps an opaque identifier to one entry of a fixed dictionary using the sum
//! of the identifier's code points. The same identifier always yields the
//! same entry, so the mapping never has to be stored.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Expansions of P.A.S.O. shown next to wall posts and oracle answers.
pub const BUILTIN_ACRONYMS: [&str; 10] = [
    "Personas Aliadas por la Solidaridad Obrera",
    "Plataforma de Apoyo Sindical Organizado",
    "Protegiendo Ahora Sueldos y Oportunidades",
    "Por un Acuerdo Salarial Obligatorio",
    "Plantilla Activa, Segura y Organizada",
    "Pedimos Aumentos Sin Otra excusa",
    "Presentes, Atentos, Solidarios y Organizados",
    "Pacto por Agendas Sostenibles y Ordenadas",
    "Puestos Amparados por Sindicato Obrero",
    "Paso A Paso, Siempre Organizados",
];

/// Error building an acronym dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AcronymError {
    /// The dictionary has no entries.
    #[display("Acronym dictionary must not be empty")]
    EmptyDictionary,
}

/// Index of `id` in a dictionary of `len` entries.
///
/// Sums the Unicode scalar values of `id` and reduces modulo `len`. Character
/// order does not matter.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn acronym_index(id: &str, len: usize) -> usize {
    assert!(len > 0, "acronym dictionary must not be empty");
    let sum: u64 = id.chars().map(|c| u64::from(u32::from(c))).sum();
    (sum % len as u64) as usize
}

/// Selects the dictionary entry for `id`.
///
/// # Panics
///
/// Panics if `dictionary` is empty. Use [`AcronymDictionary`] to reject empty
/// dictionaries up front.
#[instrument(skip(dictionary), fields(entries = dictionary.len()))]
pub fn select_stable_acronym<'a, S: AsRef<str>>(id: &str, dictionary: &'a [S]) -> &'a str {
    dictionary[acronym_index(id, dictionary.len())].as_ref()
}

/// A non-empty, fixed-order list of acronym expansions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AcronymDictionary {
    entries: Vec<String>,
}

impl AcronymDictionary {
    /// Builds a dictionary, rejecting an empty list.
    #[instrument(skip(entries))]
    pub fn new<I, S>(entries: I) -> Result<Self, AcronymError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(AcronymError::EmptyDictionary);
        }
        Ok(Self { entries })
    }

    /// The built-in P.A.S.O. expansions.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ACRONYMS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Selects the entry for `id`. Never fails.
    #[instrument(skip(self))]
    pub fn select(&self, id: &str) -> &str {
        select_stable_acronym(id, &self.entries)
    }

    /// Entries in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed dictionary.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AcronymDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<String>> for AcronymDictionary {
    type Error = AcronymError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<AcronymDictionary> for Vec<String> {
    fn from(dictionary: AcronymDictionary) -> Self {
        dictionary.entries
    }
}
