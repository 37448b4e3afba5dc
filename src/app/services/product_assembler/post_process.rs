//! Presentation pass over the finished product text

use crate::config::{CaseFolding, GlobalConfig};
use crate::constants::{DOUBLE_DASH, DOUBLE_DASH_PLACEHOLDER, MINUS_SIGN, RECORD_MARKER};

/// Apply the global presentation policy to assembled product text
///
/// Steps run in a fixed order: record marker substitution, negative sign
/// substitution, colon removal, then case folding. Double dashes survive the
/// negative sign substitution untouched.
pub fn post_process(text: &str, global: &GlobalConfig) -> String {
    let mut text = text.replace(RECORD_MARKER, &global.record_symbol);

    if global.negative_symbol != MINUS_SIGN.to_string() {
        text = text
            .replace(DOUBLE_DASH, DOUBLE_DASH_PLACEHOLDER)
            .replace(MINUS_SIGN, &global.negative_symbol)
            .replace(DOUBLE_DASH_PLACEHOLDER, DOUBLE_DASH);
    }

    if global.remove_colons {
        text.retain(|ch| ch != ':');
    }

    match global.case_folding {
        CaseFolding::Preserve => text,
        CaseFolding::Upper => text.to_uppercase(),
        CaseFolding::Lower => text.to_lowercase(),
    }
}
