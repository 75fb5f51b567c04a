use super::flags::{EdgeFlags, ScalarMask};

#[test]
fn edge_flag_bits_are_fixed() {
    assert_eq!(EdgeFlags::PARAM_SCALAR.bits(), 1);
    assert_eq!(EdgeFlags::PARAM_ENUM.bits(), 2);
    assert_eq!(EdgeFlags::PARAM_LIST_SCALAR.bits(), 4);
    assert_eq!(EdgeFlags::PARAM_LIST_ENUM.bits(), 8);
    assert_eq!(EdgeFlags::LIST_OBJECT.bits(), 16);
    assert_eq!(EdgeFlags::OBJECT.bits(), 32);
}

#[test]
fn edge_flags_combine() {
    let mut flags = EdgeFlags::EMPTY;
    assert!(flags.is_empty());

    flags |= EdgeFlags::PARAM_SCALAR;
    flags |= EdgeFlags::LIST_OBJECT;

    assert!(flags.accepts_scalar());
    assert!(flags.accepts_object());
    assert!(!flags.accepts_enum());
    assert!(flags.contains(EdgeFlags::PARAM_SCALAR));
    assert!(!flags.contains(EdgeFlags::PARAM_SCALAR | EdgeFlags::OBJECT));
    assert_eq!(flags.to_string(), "scalar|object[]");
}

#[test]
fn empty_flags_display_as_dash() {
    assert_eq!(EdgeFlags::EMPTY.to_string(), "-");
    assert_eq!(ScalarMask::EMPTY.to_string(), "-");
}

#[test]
fn scalar_mask_from_type_name() {
    assert_eq!(ScalarMask::from_scalar_type("String"), ScalarMask::STRING);
    assert_eq!(ScalarMask::from_scalar_type("DateTime").bits(), 64);
    assert_eq!(ScalarMask::from_scalar_type("Bytes").bits(), 256);
    assert!(ScalarMask::from_scalar_type("Null").is_empty());
    assert!(ScalarMask::from_scalar_type("UUID").is_empty());
}

#[test]
fn scalar_mask_union_lists_all_kinds() {
    let mask = ScalarMask::STRING | ScalarMask::INT | ScalarMask::JSON;
    assert_eq!(mask.bits(), 1 | 2 | 128);
    assert_eq!(mask.to_string(), "String|Int|Json");
}
