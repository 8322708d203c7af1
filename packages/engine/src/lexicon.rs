//! Immutable lexicon consumed by the annotation pipeline
//!
//! A [`Lexicon`] is built once by an external loader and then shared
//! read-only by every pipeline call. It holds:
//!
//! - an ordered list of compound-initial word forms, matched as prefixes
//! - an ordered list of suffix forms, matched as suffixes
//! - a pre-syllabified exception table for irregular and loan words
//! - a compound dictionary mapping joined surface forms to their components
//!
//! Lexicon order is significant: the first matching entry wins.

use std::collections::HashMap;

use crate::config::{MAX_LEXICON_ENTRIES, SYLLABLE_SEPARATOR};
use crate::error::{EngineError, Result};

/// Read-only lexicon shared by all annotation calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    initial_compounds: Vec<String>,
    suffixes: Vec<String>,
    presyllabified: HashMap<String, Vec<String>>,
    compounds: HashMap<String, Vec<String>>,
}

impl Lexicon {
    /// Create an empty lexicon. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a lexicon from already-parsed tables.
    ///
    /// # Arguments
    /// * `initial_compounds` - Compound-initial word forms, in priority order
    /// * `suffixes` - Suffix forms, in priority order
    /// * `presyllabified` - Exception entries with syllables separated by `.`
    ///   (e.g. `"ka.me.ra"`)
    /// * `compounds` - `(joined form, components)` pairs
    ///
    /// All entries are lowercased. Blank entries are skipped.
    ///
    /// # Errors
    /// * `CompoundMismatch` - a compound's components do not spell its key
    /// * `LexiconTooLarge` - more than [`MAX_LEXICON_ENTRIES`] entries in total
    pub fn new<I, S, P, C>(
        initial_compounds: I,
        suffixes: S,
        presyllabified: P,
        compounds: C,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        C: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut builder = LexiconBuilder::default();
        for entry in initial_compounds {
            builder = builder.initial_compound(entry.as_ref());
        }
        for entry in suffixes {
            builder = builder.suffix(entry.as_ref());
        }
        for entry in presyllabified {
            builder = builder.presyllabified(entry.as_ref());
        }
        for (key, components) in compounds {
            builder = builder.compound_entry(key, components);
        }
        builder.build()
    }

    /// Start building a lexicon entry by entry.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        self.initial_compounds.len()
            + self.suffixes.len()
            + self.presyllabified.len()
            + self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First compound-initial form that is a proper prefix of `word`.
    ///
    /// Matching is case-insensitive. A form equal to the whole word does not
    /// match, so peeling always leaves a non-empty remainder.
    pub fn match_initial_compound(&self, word: &str) -> Option<&str> {
        let lower = word.to_lowercase();
        self.initial_compounds
            .iter()
            .find(|form| lower.len() > form.len() && lower.starts_with(form.as_str()))
            .map(String::as_str)
    }

    /// First suffix form that is a proper suffix of `word` (case-insensitive).
    pub fn match_suffix(&self, word: &str) -> Option<&str> {
        let lower = word.to_lowercase();
        self.suffixes
            .iter()
            .find(|form| lower.len() > form.len() && lower.ends_with(form.as_str()))
            .map(String::as_str)
    }

    /// Components of a dictionary compound, looked up case-insensitively.
    pub fn compound_components(&self, word: &str) -> Option<&[String]> {
        self.compounds
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Syllables of a pre-syllabified exception, looked up case-insensitively.
    pub fn presyllabified(&self, word: &str) -> Option<&[String]> {
        self.presyllabified
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn initial_compounds(&self) -> &[String] {
        &self.initial_compounds
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

/// Fluent builder for [`Lexicon`].
///
/// ```
/// use finnsyll_engine::Lexicon;
///
/// let lexicon = Lexicon::builder()
///     .initial_compound("kala")
///     .suffix("kin")
///     .presyllabified("ka.me.ra")
///     .compound("maa-ilma")
///     .build()
///     .unwrap();
///
/// assert_eq!(lexicon.match_initial_compound("kalakauppa"), Some("kala"));
/// ```
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
    errors: Vec<EngineError>,
}

impl LexiconBuilder {
    pub fn initial_compound(mut self, form: &str) -> Self {
        if let Some(form) = normalize_entry(form) {
            self.lexicon.initial_compounds.push(form);
        }
        self
    }

    pub fn suffix(mut self, form: &str) -> Self {
        if let Some(form) = normalize_entry(form) {
            self.lexicon.suffixes.push(form);
        }
        self
    }

    /// Add an exception whose syllables are separated by `.`.
    pub fn presyllabified(mut self, entry: &str) -> Self {
        if let Some(entry) = normalize_entry(entry) {
            let syllables: Vec<String> = entry
                .split(SYLLABLE_SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            let key = syllables.concat();
            if key.is_empty() {
                tracing::trace!(entry = %entry, "Skipping empty presyllabified entry");
            } else {
                self.lexicon.presyllabified.insert(key, syllables);
            }
        }
        self
    }

    /// Add a compound with its boundaries marked by `-` (e.g. `"maa-ilma"`).
    pub fn compound(self, entry: &str) -> Self {
        let components: Vec<String> = entry
            .split(crate::config::COMPOUND_MARKER)
            .map(str::to_string)
            .collect();
        let key = components.concat();
        self.compound_entry(key, components)
    }

    /// Add a compound as an explicit `(joined form, components)` pair.
    pub fn compound_entry(mut self, key: String, components: Vec<String>) -> Self {
        let key = key.trim().to_lowercase();
        let components: Vec<String> = components
            .iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();

        if key.is_empty() || components.is_empty() {
            tracing::trace!("Skipping empty compound entry");
            return self;
        }
        if components.concat() != key {
            self.errors
                .push(EngineError::CompoundMismatch { key, components });
            return self;
        }
        self.lexicon.compounds.insert(key, components);
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns the first entry error encountered, or `LexiconTooLarge`.
    pub fn build(mut self) -> Result<Lexicon> {
        if !self.errors.is_empty() {
            return Err(self.errors.swap_remove(0));
        }
        let count = self.lexicon.len();
        if count > MAX_LEXICON_ENTRIES {
            tracing::warn!(count, max = MAX_LEXICON_ENTRIES, "Lexicon exceeds entry limit");
            return Err(EngineError::LexiconTooLarge {
                count,
                max: MAX_LEXICON_ENTRIES,
            });
        }
        tracing::debug!(
            initial = self.lexicon.initial_compounds.len(),
            suffixes = self.lexicon.suffixes.len(),
            presyllabified = self.lexicon.presyllabified.len(),
            compounds = self.lexicon.compounds.len(),
            "Lexicon built"
        );
        Ok(self.lexicon)
    }
}

fn normalize_entry(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.is_empty() {
        None
    } else {
        Some(entry.to_lowercase())
    }
}
