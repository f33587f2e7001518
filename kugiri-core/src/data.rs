//! Break data assembly
//!
//! A [`BreakData`] bundles the four class tables, the four rule tables, and
//! the sentence suppression list. It is built once, validated, and shared
//! between texts through an `Arc`; the built-in instance with the default
//! English abbreviations is cached for the life of the process.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::classes::{alphabet_len, wrap_class, BoundaryKind, BreakClass};
use crate::error::{Error, Result};
use crate::property::{self, ClassTable};
use crate::rules::sentence::Suppressions;
use crate::rules::{self, RuleTable};

static BUILTIN: OnceLock<Arc<BreakData>> = OnceLock::new();

/// Classification and rule data for all four boundary kinds.
#[derive(Debug)]
pub struct BreakData {
    /// Indexed by [`BoundaryKind::index`].
    class_tables: [ClassTable; 4],
    rule_tables: [RuleTable; 4],
    suppressions: Suppressions,
}

impl BreakData {
    /// The shared instance with the default English abbreviation list.
    pub fn builtin() -> Arc<BreakData> {
        BUILTIN
            .get_or_init(|| {
                BreakData::builder()
                    .build()
                    .expect("embedded break data must be valid")
            })
            .clone()
    }

    /// Starts a custom configuration.
    pub fn builder() -> BreakDataBuilder {
        BreakDataBuilder::default()
    }

    fn assemble(suppressions: Suppressions) -> Result<BreakData> {
        let class_tables = [
            property::grapheme::table()?,
            property::word::table()?,
            property::sentence::table()?,
            property::line::table()?,
        ];
        let rule_tables = [
            rules::grapheme::table(),
            rules::word::table(),
            rules::sentence::table(),
            rules::line::table(),
        ];
        for table in &rule_tables {
            table.validate(alphabet_len(table.kind))?;
        }
        Ok(BreakData {
            class_tables,
            rule_tables,
            suppressions,
        })
    }

    /// The break class of one scalar under one analysis.
    pub fn classify(&self, kind: BoundaryKind, c: char) -> BreakClass {
        wrap_class(kind, self.class_id(kind, c))
    }

    /// The active sentence suppression list.
    pub fn suppressions(&self) -> &Suppressions {
        &self.suppressions
    }

    /// Names of a kind's rules, in evaluation order.
    pub fn rule_names(&self, kind: BoundaryKind) -> Vec<&'static str> {
        self.rule_table(kind).rules.iter().map(|r| r.name).collect()
    }

    pub(crate) fn class_id(&self, kind: BoundaryKind, c: char) -> u8 {
        let cp = u32::from(c);
        // Precomposed Hangul syllables are classified arithmetically
        // instead of through the range tables.
        let syllable = match kind {
            BoundaryKind::Grapheme => property::grapheme::syllable_class(cp),
            BoundaryKind::Line => property::line::syllable_class(cp),
            _ => None,
        };
        syllable.unwrap_or_else(|| self.class_tables[kind.index()].classify(cp))
    }

    pub(crate) fn class_ids(&self, kind: BoundaryKind, content: &str) -> Vec<u8> {
        content.chars().map(|c| self.class_id(kind, c)).collect()
    }

    pub(crate) fn rule_table(&self, kind: BoundaryKind) -> &RuleTable {
        &self.rule_tables[kind.index()]
    }
}

/// Builds [`BreakData`] with customized suppressions.
///
/// The default configuration carries the embedded English abbreviation
/// list; pass [`Suppressions::empty`] to disable it.
#[derive(Debug, Default)]
pub struct BreakDataBuilder {
    suppressions: Option<Suppressions>,
}

impl BreakDataBuilder {
    /// Replaces the suppression list.
    pub fn suppressions(mut self, table: Suppressions) -> Self {
        self.suppressions = Some(table);
        self
    }

    /// Replaces the suppression list from a TOML document.
    pub fn suppressions_toml(self, document: &str) -> Result<Self> {
        let config: SuppressionsConfig = toml::from_str(document)
            .map_err(|e| Error::Config(format!("invalid suppressions document: {e}")))?;
        Ok(self.suppressions(config.into_table()?))
    }

    /// Replaces the suppression list from a TOML file.
    pub fn suppressions_path(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read suppressions {}: {e}", path.display()))
        })?;
        self.suppressions_toml(&document)
    }

    pub fn build(self) -> Result<Arc<BreakData>> {
        let suppressions = match self.suppressions {
            Some(table) => table,
            None => default_suppressions()?,
        };
        Ok(Arc::new(BreakData::assemble(suppressions)?))
    }
}

/// TOML schema for suppression documents.
///
/// Categories under `[suppressions]` are free-form and merged into one
/// table:
///
/// ```toml
/// [suppressions]
/// titles = ["Mr", "Dr"]
/// latin = ["e.g", "i.e"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuppressionsConfig {
    #[serde(default)]
    pub suppressions: SuppressionCategories,
}

/// Named groups of abbreviation entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuppressionCategories {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl SuppressionsConfig {
    fn into_table(self) -> Result<Suppressions> {
        Suppressions::from_words(self.suppressions.categories.into_values().flatten())
    }
}

fn default_suppressions() -> Result<Suppressions> {
    let embedded = include_str!("../configs/suppressions/english.toml");
    let config: SuppressionsConfig = toml::from_str(embedded)
        .map_err(|e| Error::Config(format!("embedded suppressions are malformed: {e}")))?;
    config.into_table()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{GraphemeClass, LineClass, WordClass};

    #[test]
    fn test_builtin_is_shared() {
        let a = BreakData::builtin();
        let b = BreakData::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_carries_default_abbreviations() {
        let data = BreakData::builtin();
        assert!(data.suppressions().contains("Mr"));
        assert!(data.suppressions().contains("e.g"));
        assert!(!data.suppressions().contains("etc"));
    }

    #[test]
    fn test_classify_dispatches_syllables() {
        let data = BreakData::builtin();
        assert_eq!(
            data.classify(BoundaryKind::Grapheme, '가'),
            BreakClass::Grapheme(GraphemeClass::HangulLv)
        );
        assert_eq!(
            data.classify(BoundaryKind::Line, '각'),
            BreakClass::Line(LineClass::H3)
        );
        assert_eq!(
            data.classify(BoundaryKind::Word, 'x'),
            BreakClass::Word(WordClass::ALetter)
        );
    }

    #[test]
    fn test_rule_names_end_with_catch_all() {
        let data = BreakData::builtin();
        for kind in BoundaryKind::ALL {
            let names = data.rule_names(kind);
            assert!(!names.is_empty());
            assert_eq!(*names.last().unwrap(), "any");
        }
    }

    #[test]
    fn test_builder_replaces_suppressions() {
        let data = BreakData::builder()
            .suppressions_toml("[suppressions]\ncustom = [\"Xyz\"]\n")
            .unwrap()
            .build()
            .unwrap();
        assert!(data.suppressions().contains("Xyz"));
        assert!(!data.suppressions().contains("Mr"));
    }

    #[test]
    fn test_builder_rejects_malformed_document() {
        let err = BreakData::builder()
            .suppressions_toml("suppressions = 3")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_document_means_no_suppressions() {
        let data = BreakData::builder()
            .suppressions_toml("")
            .unwrap()
            .build()
            .unwrap();
        assert!(data.suppressions().is_empty());
    }
}
