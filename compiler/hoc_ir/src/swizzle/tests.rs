use super::*;
use pretty_assertions::assert_eq;

/// Pack selectors by hand, slot 0 in the low bits.
fn pack(selectors: &[u32], bits: u32) -> u32 {
    selectors
        .iter()
        .enumerate()
        .fold(0, |mask, (slot, &s)| mask | (s << (slot as u32 * bits)))
}

fn pairwise_distinct(selectors: &[u32]) -> bool {
    selectors
        .iter()
        .enumerate()
        .all(|(i, a)| selectors[i + 1..].iter().all(|b| a != b))
}

// === Validator scenarios ===

#[test]
fn test_xyz_is_valid() {
    // x=0, y=1, z=2 -> 0b10_01_00
    assert_eq!(pack(&[0, 1, 2], 2), 36);
    assert!(is_valid_swizzle_write_mask(36, false, 3));
}

#[test]
fn test_xyx_is_invalid() {
    // x=0, y=1, x=0 -> 0b00_01_00
    assert_eq!(pack(&[0, 1, 0], 2), 4);
    assert!(!is_valid_swizzle_write_mask(4, false, 3));
}

#[test]
fn test_zero_slots_is_valid() {
    assert!(is_valid_swizzle_write_mask(0, false, 0));
    assert!(is_valid_swizzle_write_mask(0, true, 0));
}

#[test]
fn test_single_slot_is_always_valid() {
    for selector in 0..4 {
        assert!(is_valid_swizzle_write_mask(selector, false, 1));
    }
    for selector in 0..16 {
        assert!(is_valid_swizzle_write_mask(selector, true, 1));
    }
}

#[test]
fn test_only_counted_slots_are_examined() {
    // xy followed by a repeated x in slot 2, but only two slots requested.
    let mask = pack(&[0, 1, 0], 2);
    assert!(is_valid_swizzle_write_mask(mask, false, 2));
    assert!(!is_valid_swizzle_write_mask(mask, false, 3));
}

#[test]
fn test_wzyx_is_valid() {
    let mask = pack(&[3, 2, 1, 0], 2);
    assert!(is_valid_swizzle_write_mask(mask, false, 4));
}

#[test]
fn test_matrix_distinct_cells() {
    // _m00_m11_m22_m33
    let mask = pack(&[0, 5, 10, 15], 4);
    assert!(is_valid_swizzle_write_mask(mask, true, 4));
}

#[test]
fn test_matrix_repeated_cell() {
    // _m12_m03_m12
    let mask = pack(&[6, 3, 6], 4);
    assert!(!is_valid_swizzle_write_mask(mask, true, 3));
}

#[test]
fn test_same_bits_differ_by_kind() {
    // 0b0100_0001: as a vector that is y,x,x,y; as a matrix cells 1 and 4.
    let mask = 0x41;
    assert!(!is_valid_swizzle_write_mask(mask, false, 4));
    assert!(is_valid_swizzle_write_mask(mask, true, 2));
}

#[test]
fn test_oversized_slot_count_does_not_panic() {
    // Slots beyond the packed width read as selector 0.
    assert!(!is_valid_swizzle_write_mask(pack(&[1, 2, 3, 0], 2), false, 5));
    assert!(!is_valid_swizzle_write_mask(pack(&[1, 2, 3, 0], 4), true, 5));
    assert!(is_valid_swizzle_write_mask(pack(&[1, 2, 3, 4], 4), true, 5));
    assert!(!is_valid_swizzle_write_mask(u32::MAX, true, 64));
}

#[test]
fn test_bits_above_packed_width_are_ignored() {
    let mask = pack(&[0, 1, 2, 3], 2) | 0xFFFF_FF00;
    assert!(is_valid_swizzle_write_mask(mask, false, 4));
    let mask = pack(&[0, 1, 2, 3], 4) | 0xFFFF_0000;
    assert!(is_valid_swizzle_write_mask(mask, true, 4));
}

// === Swizzle parsing ===

#[test]
fn test_parse_vector_xyz() {
    let swizzle = Swizzle::parse_vector("xyz").unwrap();
    assert_eq!(swizzle.mask(), 36);
    assert_eq!(swizzle.len(), 3);
    assert_eq!(swizzle.kind(), SwizzleKind::Vector);
    assert!(swizzle.is_valid_write_mask());
}

#[test]
fn test_parse_vector_color_set() {
    let rgba = Swizzle::parse_vector("rgba").unwrap();
    let xyzw = Swizzle::parse_vector("xyzw").unwrap();
    assert_eq!(rgba, xyzw);
}

#[test]
fn test_parse_vector_repeat_is_parsable_but_not_writable() {
    let swizzle = Swizzle::parse_vector("xx").unwrap();
    assert_eq!(swizzle.selectors().collect::<Vec<_>>(), vec![0, 0]);
    assert!(!swizzle.is_valid_write_mask());
}

#[test]
fn test_parse_vector_errors() {
    assert_eq!(Swizzle::parse_vector(""), Err(SwizzleError::Empty));
    assert_eq!(
        Swizzle::parse_vector("xyzwx"),
        Err(SwizzleError::TooManyComponents(5))
    );
    assert_eq!(
        Swizzle::parse_vector("xq"),
        Err(SwizzleError::InvalidComponent('q'))
    );
    assert_eq!(
        Swizzle::parse_vector("xg"),
        Err(SwizzleError::MixedComponentSets)
    );
}

#[test]
fn test_parse_matrix_zero_based() {
    let swizzle = Swizzle::parse_matrix("_m00_m11_m23").unwrap();
    assert_eq!(swizzle.kind(), SwizzleKind::Matrix);
    assert_eq!(swizzle.selectors().collect::<Vec<_>>(), vec![0, 5, 11]);
    assert!(swizzle.is_valid_write_mask());
}

#[test]
fn test_parse_matrix_one_based() {
    let one_based = Swizzle::parse_matrix("_11_22_34").unwrap();
    let zero_based = Swizzle::parse_matrix("_m00_m11_m23").unwrap();
    assert_eq!(one_based, zero_based);
}

#[test]
fn test_parse_matrix_repeated_cell() {
    let err = Swizzle::parse_matrix("_m01_11").unwrap_err();
    assert_eq!(err, SwizzleError::MixedComponentSets);

    let swizzle = Swizzle::parse_matrix("_m01_m01").unwrap();
    assert!(!swizzle.is_valid_write_mask());
}

#[test]
fn test_parse_matrix_errors() {
    assert_eq!(Swizzle::parse_matrix(""), Err(SwizzleError::Empty));
    assert_eq!(
        Swizzle::parse_matrix("m00"),
        Err(SwizzleError::MalformedMatrixCell("m00".to_string()))
    );
    assert_eq!(
        Swizzle::parse_matrix("_m04"),
        Err(SwizzleError::MalformedMatrixCell("m04".to_string()))
    );
    assert_eq!(
        Swizzle::parse_matrix("_00"),
        Err(SwizzleError::MalformedMatrixCell("00".to_string()))
    );
    assert_eq!(
        Swizzle::parse_matrix("_"),
        Err(SwizzleError::MalformedMatrixCell(String::new()))
    );
    assert_eq!(
        Swizzle::parse_matrix("_11_12_13_14_21"),
        Err(SwizzleError::TooManyComponents(5))
    );
}

#[test]
fn test_from_selectors_range_check() {
    assert_eq!(
        Swizzle::from_selectors(SwizzleKind::Vector, &[0, 4]),
        Err(SwizzleError::SelectorOutOfRange {
            selector: 4,
            kind: SwizzleKind::Vector,
        })
    );
    assert!(Swizzle::from_selectors(SwizzleKind::Matrix, &[15, 4]).is_ok());
}

#[test]
fn test_swizzle_display() {
    assert_eq!(Swizzle::parse_vector("bgr").unwrap().to_string(), "zyx");
    assert_eq!(
        Swizzle::parse_matrix("_11_44").unwrap().to_string(),
        "_m00_m33"
    );
}

#[test]
fn test_swizzle_error_display() {
    assert_eq!(
        SwizzleError::TooManyComponents(6).to_string(),
        "swizzle selects 6 components, at most 4 are allowed"
    );
    assert_eq!(
        SwizzleError::InvalidComponent('k').to_string(),
        "invalid swizzle component `k`"
    );
}

// === Properties ===

mod proptest_write_mask {
    use super::{is_valid_swizzle_write_mask, pack, pairwise_distinct};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn vector_valid_iff_distinct(
            selectors in proptest::collection::vec(0u32..4, 0..=4)
        ) {
            let mask = pack(&selectors, 2);
            prop_assert_eq!(
                is_valid_swizzle_write_mask(mask, false, selectors.len()),
                pairwise_distinct(&selectors)
            );
        }

        #[test]
        fn matrix_valid_iff_distinct(
            selectors in proptest::collection::vec(0u32..16, 0..=4)
        ) {
            let mask = pack(&selectors, 4);
            prop_assert_eq!(
                is_valid_swizzle_write_mask(mask, true, selectors.len()),
                pairwise_distinct(&selectors)
            );
        }

        #[test]
        fn raw_vector_masks_agree_with_unpacked(mask in any::<u32>(), slots in 0usize..=4) {
            let selectors: Vec<u32> = (0..slots)
                .map(|slot| (mask >> (slot as u32 * 2)) & 0x3)
                .collect();
            prop_assert_eq!(
                is_valid_swizzle_write_mask(mask, false, slots),
                pairwise_distinct(&selectors)
            );
        }
    }
}
