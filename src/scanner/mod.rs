//! Document scanner
//!
//! Turns raw LaTeX text into a [`FactSet`] in a single line-oriented pass.
//! This is a lint over plain text, not a parser: malformed markup never
//! fails, and every count is the number of command occurrences, including
//! several on the same line.
//!
//! Commented-out commands still count unless [`ScanOptions::strip_comments`]
//! is enabled.

mod facts;
mod patterns;

pub use facts::{FactSet, FactValue};

use crate::models::{AuditHints, Document};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options controlling how text is scanned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Remove `%` comments before matching (off by default)
    #[serde(default)]
    pub strip_comments: bool,
}

/// Extracts structural facts from documents
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Compute the fact set for a document
    pub fn scan(&self, document: &Document, hints: Option<&AuditHints>) -> FactSet {
        let mut facts = FactSet {
            byte_count: document.byte_len(),
            line_count: document.line_count(),
            word_count: document.text().split_whitespace().count(),
            figures_directory_exists: hints.map(|h| h.figures_directory_exists).unwrap_or(false),
            ..Default::default()
        };

        for raw_line in document.text().lines() {
            let line = if self.options.strip_comments {
                strip_comment(raw_line)
            } else {
                raw_line
            };
            if line.trim().is_empty() {
                continue;
            }
            scan_line(line, &mut facts);
        }

        facts.figures_with_caption = facts.caption_count.min(facts.figure_count);

        debug!(
            path = document.path(),
            lines = facts.line_count,
            sections = facts.section_count,
            figures = facts.figure_count,
            citations = facts.citation_count,
            "scanned document"
        );
        facts
    }
}

fn scan_line(line: &str, facts: &mut FactSet) {
    if let Some(caps) = patterns::document_class().captures(line) {
        let class = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if !facts.has_document_class {
            facts.document_class = Some(class.to_string());
        }
        facts.has_document_class = true;
        facts.uses_japanese_doc_class |= patterns::is_japanese_class(class);
    }

    facts.has_begin_document |= patterns::begin_document().is_match(line);
    facts.has_end_document |= patterns::end_document().is_match(line);
    facts.has_title |= patterns::title().is_match(line);
    facts.has_author |= patterns::author().is_match(line);

    for package in patterns::packages_on_line(line) {
        let package = package.as_str();
        facts.uses_localization_package |= patterns::LOCALIZATION_PACKAGES.contains(&package);
        facts.uses_listing_package |= patterns::LISTING_PACKAGES.contains(&package);
        facts.uses_amsmath |= package == "amsmath";
        facts.uses_amssymb |= package == "amssymb";
    }

    let count = |re: &regex::Regex| re.find_iter(line).count();
    facts.section_count += count(patterns::section());
    facts.subsection_count += count(patterns::subsection());
    facts.figure_count += count(patterns::figure());
    facts.table_count += count(patterns::table());
    facts.image_count += count(patterns::include_graphics());
    facts.caption_count += count(patterns::caption());
    facts.citation_count += count(patterns::citation());
    facts.math_block_count += count(patterns::math_block());
    facts.listing_count += count(patterns::listing());
    facts.bibliography_present |= patterns::bibliography().is_match(line);
}

/// Drop everything from the first unescaped `%` onwards
fn strip_comment(line: &str) -> &str {
    let mut backslashes = 0usize;
    for (idx, ch) in line.char_indices() {
        match ch {
            '\\' => backslashes += 1,
            '%' if backslashes % 2 == 0 => return &line[..idx],
            _ => backslashes = 0,
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> FactSet {
        Scanner::default().scan(&Document::new("test.tex", text), None)
    }

    const REPORT: &str = r"\documentclass[a4paper]{ltjsarticle}
\usepackage{luatexja}
\usepackage{amsmath,amssymb}
\usepackage{listings}
\title{Report}
\author{Student}
\begin{document}
\maketitle
\section{Introduction}
\subsection{Background}
\begin{figure}[h]
  \includegraphics[width=5cm]{figures/plot.pdf}
  \caption{A plot}
\end{figure}
As shown in \cite{knuth}.
\begin{equation}
  E = mc^2
\end{equation}
\begin{lstlisting}
int main() {}
\end{lstlisting}
\begin{thebibliography}{9}
\bibitem{knuth} D. Knuth.
\end{thebibliography}
\end{document}
";

    #[test]
    fn test_full_report_facts() {
        let facts = scan(REPORT);
        assert!(facts.has_document_class);
        assert_eq!(facts.document_class.as_deref(), Some("ltjsarticle"));
        assert!(facts.uses_japanese_doc_class);
        assert!(facts.uses_localization_package);
        assert!(facts.has_title && facts.has_author);
        assert!(facts.has_document_pair());
        assert_eq!(facts.section_count, 1);
        assert_eq!(facts.subsection_count, 1);
        assert_eq!(facts.figure_count, 1);
        assert_eq!(facts.image_count, 1);
        assert_eq!(facts.caption_count, 1);
        assert_eq!(facts.figures_with_caption, 1);
        assert_eq!(facts.citation_count, 1);
        assert!(facts.bibliography_present);
        assert_eq!(facts.math_block_count, 1);
        assert!(facts.uses_amsmath && facts.uses_amssymb);
        assert_eq!(facts.listing_count, 1);
        assert!(facts.uses_listing_package);
        assert_eq!(facts.line_count, 25);
    }

    #[test]
    fn test_empty_document() {
        let facts = scan("");
        assert_eq!(facts, FactSet::default());
    }

    #[test]
    fn test_malformed_markup_does_not_panic() {
        let facts = scan("\\documentclass{\n\\begin{figure\n\\section{unclosed\n}}}{{{");
        assert!(!facts.has_document_class);
        assert_eq!(facts.section_count, 1);
        assert_eq!(facts.figure_count, 0);
    }

    #[test]
    fn test_counts_every_occurrence_on_a_line() {
        let facts = scan("\\cite{a} and \\cite{b}\n\\cite{c}\n");
        assert_eq!(facts.citation_count, 3);

        let facts = scan("\\begin{figure}\\caption{x}\\end{figure} \\begin{figure}\\end{figure}\n");
        assert_eq!(facts.figure_count, 2);
        assert_eq!(facts.caption_count, 1);
        assert_eq!(facts.figures_with_caption, 1);
    }

    #[test]
    fn test_commented_commands_still_count() {
        let facts = scan("% \\section{Old}\n\\section{New}\n");
        assert_eq!(facts.section_count, 2);
    }

    #[test]
    fn test_strip_comments_option() {
        let scanner = Scanner::new(ScanOptions {
            strip_comments: true,
        });
        let doc = Document::new(
            "t.tex",
            "% \\section{Old}\n\\section{New} % trailing\n50\\% done \\section{Kept}\n",
        );
        let facts = scanner.scan(&doc, None);
        assert_eq!(facts.section_count, 2);
    }

    #[test]
    fn test_strip_comment_escapes() {
        assert_eq!(strip_comment("a % b"), "a ");
        assert_eq!(strip_comment(r"50\% done"), r"50\% done");
        assert_eq!(strip_comment(r"line\\% comment"), r"line\\");
        assert_eq!(strip_comment("no comment"), "no comment");
    }

    #[test]
    fn test_figures_directory_comes_from_hints() {
        let doc = Document::new("t.tex", "\\includegraphics{x}");
        let hints = AuditHints {
            figures_directory_exists: true,
            ..Default::default()
        };
        assert!(Scanner::default().scan(&doc, Some(&hints)).figures_directory_exists);
        assert!(!Scanner::default().scan(&doc, None).figures_directory_exists);
    }

    #[test]
    fn test_word_count() {
        let facts = scan("one two  three\nfour\n");
        assert_eq!(facts.word_count, 4);
    }
}
