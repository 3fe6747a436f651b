use endianness::LITTLE_ENDIAN;

// -------------------------------------------------------
// 1. FIXTURES
// -------------------------------------------------------

#[test]
fn ab_decodes_to_0x4241() {
    assert_eq!(LITTLE_ENDIAN.str_to_u16_vec("AB"), vec![0x4241]);
    assert_eq!(LITTLE_ENDIAN.bytes_to_u16_vec(&[0x41, 0x42]), vec![0x4241]);
}

#[test]
fn integer_widths() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    assert_eq!(
        LITTLE_ENDIAN.bytes_to_u16_vec(&bytes),
        vec![0x0201, 0x0403, 0x0605, 0x0807]
    );
    assert_eq!(
        LITTLE_ENDIAN.bytes_to_u32_vec(&bytes),
        vec![0x0403_0201, 0x0807_0605]
    );
    assert_eq!(
        LITTLE_ENDIAN.bytes_to_u64_vec(&bytes),
        vec![0x0807_0605_0403_0201]
    );
}

#[test]
fn float_widths() {
    assert_eq!(
        LITTLE_ENDIAN.bytes_to_f32_vec(&[0x00, 0x00, 0x80, 0x3F]),
        vec![1.0f32]
    );
    assert_eq!(
        LITTLE_ENDIAN.bytes_to_f64_vec(&[0, 0, 0, 0, 0, 0, 0, 0xC0]),
        vec![-2.0f64]
    );
}

#[test]
fn encode_writes_least_significant_first() {
    assert_eq!(LITTLE_ENDIAN.u16_slice_to_bytes(&[0xBEEF]), [0xEF, 0xBE]);
    assert_eq!(
        LITTLE_ENDIAN.u32_slice_to_bytes(&[0xDEAD_BEEF, 1]),
        [0xEF, 0xBE, 0xAD, 0xDE, 1, 0, 0, 0]
    );
    assert_eq!(
        LITTLE_ENDIAN.u64_slice_to_bytes(&[0x0102_0304_0506_0708]),
        [8, 7, 6, 5, 4, 3, 2, 1]
    );
    assert_eq!(LITTLE_ENDIAN.f32_slice_to_bytes(&[1.0]), [0, 0, 0x80, 0x3F]);
    assert_eq!(
        LITTLE_ENDIAN.f64_slice_to_bytes(&[-2.0]),
        [0, 0, 0, 0, 0, 0, 0, 0xC0]
    );
}

// -------------------------------------------------------
// 2. EMPTY INPUT
// -------------------------------------------------------

#[test]
fn empty_input_yields_empty_output() {
    assert!(LITTLE_ENDIAN.str_to_u16_vec("").is_empty());
    assert!(LITTLE_ENDIAN.str_to_u32_vec("").is_empty());
    assert!(LITTLE_ENDIAN.str_to_u64_vec("").is_empty());
    assert!(LITTLE_ENDIAN.str_to_f32_vec("").is_empty());
    assert!(LITTLE_ENDIAN.str_to_f64_vec("").is_empty());

    assert!(LITTLE_ENDIAN.u32_slice_to_bytes(&[]).is_empty());
    assert!(LITTLE_ENDIAN.u16_slice_to_text(&[]).is_empty());
    assert!(LITTLE_ENDIAN.f32_slice_to_text(&[]).is_empty());
}

// -------------------------------------------------------
// 3. TRUNCATION
// -------------------------------------------------------

#[test]
fn trailing_bytes_are_dropped() {
    assert_eq!(LITTLE_ENDIAN.str_to_u16_vec("ABC"), vec![0x4241]);
    assert_eq!(
        LITTLE_ENDIAN.bytes_to_u32_vec(&[1, 2, 3, 4, 5, 6, 7]),
        vec![0x0403_0201]
    );
    assert_eq!(
        LITTLE_ENDIAN.bytes_to_f32_vec(&[0, 0, 0x80, 0x3F, 0xFF]),
        vec![1.0f32]
    );
}
