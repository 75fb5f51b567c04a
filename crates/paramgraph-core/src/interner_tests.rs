use crate::{Interner, StringId};

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("where");
    let b = interner.intern("where");
    let c = interner.intern("take");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn ids_follow_first_seen_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");
    let z_again = interner.intern("z");

    assert_eq!(z.as_u32(), 0);
    assert_eq!(a.as_u32(), 1);
    assert_eq!(z_again, z);
    assert!(z < a);
}

#[test]
fn get_does_not_insert() {
    let mut interner = Interner::new();
    interner.intern("id");

    assert_eq!(interner.get("id"), Some(StringId::from_raw(0)));
    assert_eq!(interner.get("name"), None);
    assert_eq!(interner.len(), 1);
}

#[test]
fn from_strings_keeps_first_duplicate() {
    let interner =
        Interner::from_strings(vec!["a".to_string(), "b".to_string(), "a".to_string()]);

    assert_eq!(interner.len(), 3);
    assert_eq!(interner.get("a"), Some(StringId::from_raw(0)));
    assert_eq!(interner.get("b"), Some(StringId::from_raw(1)));
}

#[test]
fn into_strings_preserves_order() {
    let mut interner = Interner::new();
    interner.intern("where");
    interner.intern("id");
    interner.intern("where");

    assert_eq!(interner.into_strings(), vec!["where", "id"]);
}

#[test]
fn display_uses_table_prefix() {
    assert_eq!(StringId::from_raw(12).to_string(), "S12");
}
