//! Compiled command patterns
//!
//! All patterns match a single line. They recognise command tokens, not
//! LaTeX semantics, so braces need not balance and arguments are ignored.

use regex::Regex;
use std::sync::OnceLock;

macro_rules! pattern {
    ($fn_name:ident, $re:expr) => {
        pub(super) fn $fn_name() -> &'static Regex {
            static PATTERN: OnceLock<Regex> = OnceLock::new();
            PATTERN.get_or_init(|| Regex::new($re).expect("valid regex"))
        }
    };
}

pattern!(
    document_class,
    r"\\documentclass\s*(?:\[[^\]]*\])?\s*\{([^}]*)\}"
);
pattern!(begin_document, r"\\begin\s*\{document\}");
pattern!(end_document, r"\\end\s*\{document\}");
pattern!(title, r"\\title\s*(?:\[[^\]]*\])?\s*\{");
pattern!(author, r"\\author\s*(?:\[[^\]]*\])?\s*\{");
pattern!(
    use_package,
    r"\\(?:usepackage|RequirePackage)\s*(?:\[[^\]]*\])?\s*\{([^}]*)\}"
);
pattern!(section, r"\\section\*?\s*(?:\[[^\]]*\])?\s*\{");
pattern!(subsection, r"\\subsection\*?\s*(?:\[[^\]]*\])?\s*\{");
pattern!(figure, r"\\begin\s*\{figure\*?\}");
pattern!(table, r"\\begin\s*\{table\*?\}");
pattern!(include_graphics, r"\\includegraphics\*?\s*[\[{]");
pattern!(caption, r"\\caption\s*[\[{]");
pattern!(
    citation,
    r"\\(?:cite|citep|citet|parencite|textcite|autocite|footcite)\*?\s*[\[{]"
);
pattern!(
    bibliography,
    r"\\begin\s*\{thebibliography\}|\\bibliography\s*\{|\\printbibliography\b"
);
// `\[` opens display math; `\\[2mm]` is a line break and must not match.
pattern!(
    math_block,
    r"\\begin\s*\{(?:equation|align|gather|multline|eqnarray|displaymath)\*?\}|(?:^|[^\\])\\\["
);
pattern!(
    listing,
    r"\\begin\s*\{(?:lstlisting|minted)\}|\\lstinputlisting\b|\\inputminted\b"
);

/// Class-name fragments that mark a Japanese-aware document class
pub(super) const JAPANESE_CLASS_FRAGMENTS: &[&str] = &[
    "jsarticle",
    "jsreport",
    "jsbook",
    "jarticle",
    "jreport",
    "jbook",
    "jlreq",
    "ltjs",
    "bxjs",
];

/// Packages that provide Japanese / CJK text shaping
pub(super) const LOCALIZATION_PACKAGES: &[&str] = &[
    "luatexja",
    "luatexja-fontspec",
    "luatexja-preset",
    "xecjk",
    "zxjatype",
    "bxcjkjatype",
    "cjk",
    "cjkutf8",
    "pxjahyper",
    "otf",
];

pub(super) const LISTING_PACKAGES: &[&str] = &["listings", "minted"];

pub(super) fn is_japanese_class(class: &str) -> bool {
    let lower = class.to_lowercase();
    JAPANESE_CLASS_FRAGMENTS.iter().any(|f| lower.contains(f))
}

/// Package names loaded on one line (`\usepackage{a, b}` yields `a`, `b`)
pub(super) fn packages_on_line(line: &str) -> impl Iterator<Item = String> + '_ {
    use_package().captures_iter(line).flat_map(|caps| {
        caps.get(1)
            .map(|m| m.as_str())
            .unwrap_or("")
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
    })
}
