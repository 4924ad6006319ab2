use crate::model::{Symbol, SymbolLocation, SymbolOrigin};

use super::policy::{prefer, ProjectRoot};

/// Combine two partial records of the same declaration.
///
/// The operand that saw a definition is the base when only one did;
/// otherwise `left` is. Panics if the ids differ.
pub fn merge_symbol(left: &Symbol, right: &Symbol, root: &ProjectRoot) -> Symbol {
    assert_eq!(left.id, right.id, "merge_symbol requires records with the same id");

    let prefer_right = right.has_definition() && !left.has_definition();
    // Include edges only carry over between records that agree on whether a
    // definition was seen; otherwise only the counts of shared headers add up.
    let merge_includes = left.has_definition() == right.has_definition();
    let (base, other) = if prefer_right { (right, left) } else { (left, right) };

    let mut merged = base.clone();
    merge_locations(&mut merged, other, root);
    merged.references = merged.references.saturating_add(other.references);
    backfill_text(&mut merged, other);
    merge_include_headers(&mut merged, other, merge_includes);
    merged.origin |= other.origin | SymbolOrigin::MERGE;
    merged.flags |= other.flags;
    merged
}

fn merge_locations(merged: &mut Symbol, other: &Symbol, root: &ProjectRoot) {
    if prefer(other.canonical_declaration.as_ref(), merged.canonical_declaration.as_ref(), root) {
        merged.canonical_declaration = other.canonical_declaration.clone();
    }
    if prefer(other.definition.as_ref(), merged.definition.as_ref(), root) {
        merged.definition = other.definition.clone();
    }
    // An empty location that survived because nothing better arrived is dropped.
    for location in [&mut merged.canonical_declaration, &mut merged.definition] {
        if location.as_ref().is_some_and(SymbolLocation::is_empty) {
            *location = None;
        }
    }
}

fn backfill_text(merged: &mut Symbol, other: &Symbol) {
    fill_if_empty(&mut merged.signature, &other.signature);
    fill_if_empty(&mut merged.completion_snippet_suffix, &other.completion_snippet_suffix);
    // A defined class keeps its (possibly empty) docs: the other record is
    // usually a forward declaration whose leading comment is unrelated.
    if !(merged.kind.is_record() && merged.has_definition()) {
        fill_if_empty(&mut merged.documentation, &other.documentation);
    }
    fill_if_empty(&mut merged.return_type, &other.return_type);
    fill_if_empty(&mut merged.ty, &other.ty);
}

fn fill_if_empty(field: &mut String, from: &str) {
    if field.is_empty() {
        field.push_str(from);
    }
}

fn merge_include_headers(merged: &mut Symbol, other: &Symbol, merge_includes: bool) {
    for include in &other.include_headers {
        match merged.include_headers.iter_mut().find(|h| h.header == include.header) {
            Some(existing) => {
                existing.references = existing.references.saturating_add(include.references)
            }
            None if merge_includes => merged.include_headers.push(include.clone()),
            None => {}
        }
    }
}
