//! The immutable fact set produced by the scanner

use serde::Serialize;

/// Value of a single named fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FactValue {
    Count(usize),
    Flag(bool),
}

impl std::fmt::Display for FactValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactValue::Count(n) => write!(f, "{n}"),
            FactValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Structural facts extracted from one document.
///
/// Absent patterns are `0` / `false`. The only field not derived from the
/// text is `figures_directory_exists`, copied from the caller's hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FactSet {
    pub has_document_class: bool,
    /// Class name from the first `\documentclass` line, if any
    pub document_class: Option<String>,
    pub uses_japanese_doc_class: bool,
    pub has_begin_document: bool,
    pub has_end_document: bool,
    pub has_title: bool,
    pub has_author: bool,
    pub uses_localization_package: bool,

    pub section_count: usize,
    pub subsection_count: usize,

    pub figure_count: usize,
    pub table_count: usize,
    pub image_count: usize,
    pub caption_count: usize,
    pub figures_with_caption: usize,
    pub figures_directory_exists: bool,

    pub citation_count: usize,
    pub bibliography_present: bool,

    pub math_block_count: usize,
    pub uses_amsmath: bool,
    pub uses_amssymb: bool,

    pub listing_count: usize,
    pub uses_listing_package: bool,

    pub byte_count: usize,
    pub line_count: usize,
    pub word_count: usize,
}

impl FactSet {
    /// Every fact name, in a stable order
    pub const NAMES: [&'static str; 26] = [
        "has_document_class",
        "uses_japanese_doc_class",
        "has_begin_document",
        "has_end_document",
        "has_title",
        "has_author",
        "uses_localization_package",
        "section_count",
        "subsection_count",
        "figure_count",
        "table_count",
        "image_count",
        "caption_count",
        "figures_with_caption",
        "figures_directory_exists",
        "citation_count",
        "bibliography_present",
        "math_block_count",
        "uses_amsmath",
        "uses_amssymb",
        "listing_count",
        "uses_listing_package",
        "byte_count",
        "line_count",
        "word_count",
        "has_document_pair",
    ];

    /// Look up a fact by name
    pub fn get(&self, name: &str) -> Option<FactValue> {
        use FactValue::{Count, Flag};
        let value = match name {
            "has_document_class" => Flag(self.has_document_class),
            "uses_japanese_doc_class" => Flag(self.uses_japanese_doc_class),
            "has_begin_document" => Flag(self.has_begin_document),
            "has_end_document" => Flag(self.has_end_document),
            "has_title" => Flag(self.has_title),
            "has_author" => Flag(self.has_author),
            "uses_localization_package" => Flag(self.uses_localization_package),
            "section_count" => Count(self.section_count),
            "subsection_count" => Count(self.subsection_count),
            "figure_count" => Count(self.figure_count),
            "table_count" => Count(self.table_count),
            "image_count" => Count(self.image_count),
            "caption_count" => Count(self.caption_count),
            "figures_with_caption" => Count(self.figures_with_caption),
            "figures_directory_exists" => Flag(self.figures_directory_exists),
            "citation_count" => Count(self.citation_count),
            "bibliography_present" => Flag(self.bibliography_present),
            "math_block_count" => Count(self.math_block_count),
            "uses_amsmath" => Flag(self.uses_amsmath),
            "uses_amssymb" => Flag(self.uses_amssymb),
            "listing_count" => Count(self.listing_count),
            "uses_listing_package" => Flag(self.uses_listing_package),
            "byte_count" => Count(self.byte_count),
            "line_count" => Count(self.line_count),
            "word_count" => Count(self.word_count),
            "has_document_pair" => Flag(self.has_document_pair()),
            _ => return None,
        };
        Some(value)
    }

    /// All facts as `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FactValue)> + '_ {
        Self::NAMES
            .iter()
            .filter_map(move |name| self.get(name).map(|v| (*name, v)))
    }

    pub fn has_document_pair(&self) -> bool {
        self.has_begin_document && self.has_end_document
    }
}
