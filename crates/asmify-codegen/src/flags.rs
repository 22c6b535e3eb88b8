//! Attribute-flag rendering.

use asmify_model::attributes::{AttrFlag, zero_member};

/// Render set flags as `Kind.A | Kind.B` in vocabulary order.
///
/// A named value is kept when all of its bits are present, so multi-bit
/// access values subsume the field-encoded values they contain. An empty
/// result falls back to the vocabulary's named zero member so callers
/// never splice an empty expression into an argument list.
pub fn render_flags(kind: &str, table: &[AttrFlag], bits: u32) -> String {
    let parts: Vec<String> = table
        .iter()
        .filter(|f| f.bits != 0 && bits & f.bits == f.bits)
        .map(|f| format!("{kind}.{}", f.name))
        .collect();

    if parts.is_empty() {
        match zero_member(table) {
            Some(name) => format!("{kind}.{name}"),
            None => "0".to_string(),
        }
    } else {
        parts.join(" | ")
    }
}
