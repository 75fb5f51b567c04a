//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use paramgraph_core::schema::{InputTypeRef, SchemaArg};

/// The document declares an input location this builder does not know.
#[inline]
pub fn unknown_input_location(field: &SchemaArg, input_type: &InputTypeRef) -> ! {
    panic!(
        "merge_field_variants: field `{}` accepts `{}` from an unknown location \
         (schema document is newer than this builder)",
        field.name,
        input_type.key()
    )
}
