use feistel_cipher::crypto::bit_vector::BitVector;
use feistel_cipher::crypto::cipher_errors::CipherError;

#[test]
fn binary_string_round_trip() {
    let v = BitVector::from_binary_string("1010110011110000").unwrap();
    assert_eq!(v.len(), 16);
    assert_eq!(v.to_binary_string(), "1010110011110000");
}

#[test]
fn binary_string_rejects_other_characters() {
    assert!(matches!(
        BitVector::from_binary_string("10102"),
        Err(CipherError::ParseError(_))
    ));
    assert!(matches!(
        BitVector::from_binary_string("10 01"),
        Err(CipherError::ParseError(_))
    ));
}

#[test]
fn hex_round_trip() {
    let v = BitVector::from_hex("0123456789ABCDEF").unwrap();
    assert_eq!(v.len(), 64);
    assert_eq!(v.to_hex(), "0123456789ABCDEF");

    // lowercase digits parse to the same bits
    let lower = BitVector::from_hex("0123456789abcdef").unwrap();
    assert_eq!(v, lower);
}

#[test]
fn hex_rejects_non_digits() {
    assert!(matches!(
        BitVector::from_hex("0G"),
        Err(CipherError::ParseError(_))
    ));
}

#[test]
fn to_hex_pads_most_significant_side() {
    let v = BitVector::from_binary_string("110").unwrap();
    assert_eq!(v.to_hex(), "6");

    let v = BitVector::from_binary_string("111110").unwrap();
    assert_eq!(v.to_hex(), "3E");
}

#[test]
fn byte_round_trip() {
    let v = BitVector::from_bytes(&[0xA5, 0x01]);
    assert_eq!(v.to_binary_string(), "1010010100000001");
    assert_eq!(v.to_bytes(), vec![0xA5, 0x01]);
}

#[test]
fn permute_uses_one_based_source_positions() {
    let v = BitVector::from_binary_string("1000").unwrap();
    // move the set first bit to the end
    let p = v.permute(&[2, 3, 4, 1]).unwrap();
    assert_eq!(p.to_binary_string(), "0001");

    // expansion tables may repeat positions
    let e = v.permute(&[1, 1, 2, 2]).unwrap();
    assert_eq!(e.to_binary_string(), "1100");
}

#[test]
fn permute_rejects_out_of_range_entries() {
    let v = BitVector::from_binary_string("1010").unwrap();
    assert_eq!(
        v.permute(&[1, 5]),
        Err(CipherError::IndexOutOfRange { index: 5, len: 4 })
    );
    assert_eq!(
        v.permute(&[0]),
        Err(CipherError::IndexOutOfRange { index: 0, len: 4 })
    );
}

#[test]
fn split_and_concat() {
    let v = BitVector::from_binary_string("110010").unwrap();
    let (head, tail) = v.split_at(2).unwrap();
    assert_eq!(head.to_binary_string(), "11");
    assert_eq!(tail.to_binary_string(), "0010");
    assert_eq!(head.concat(&tail), v);

    assert_eq!(
        v.split_at(7),
        Err(CipherError::InvalidWidth { at: 7, len: 6 })
    );
}

#[test]
fn xor_requires_equal_lengths() {
    let a = BitVector::from_binary_string("1100").unwrap();
    let b = BitVector::from_binary_string("1010").unwrap();
    assert_eq!(a.xor(&b).unwrap().to_binary_string(), "0110");

    let short = BitVector::from_binary_string("101").unwrap();
    assert_eq!(
        a.xor(&short),
        Err(CipherError::LengthMismatch { left: 4, right: 3 })
    );
}

#[test]
fn rotate_left_is_cyclic() {
    let v = BitVector::from_binary_string("10110").unwrap();
    assert_eq!(v.rotate_left(2).to_binary_string(), "11010");
    assert_eq!(v.rotate_left(5), v);
    assert_eq!(v.rotate_left(7), v.rotate_left(2));
    assert!(BitVector::from_bits([]).rotate_left(3).is_empty());
}
