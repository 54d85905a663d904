use feistel_cipher::crypto::bit_vector::BitVector;
use feistel_cipher::crypto::block_cipher::BlockCipher;
use feistel_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use feistel_cipher::crypto::table_set::TableSet;
use hex_literal::hex;
use std::sync::Arc;

// Published single-block reference values for the classical tables. These
// anchor the table wiring itself; the structural unit tests alone cannot.
const KNOWN_ANSWERS: [([u8; 8], [u8; 8], [u8; 8]); 3] = [
    (
        hex!("13 34 57 79 9B BC DF F1"),
        hex!("01 23 45 67 89 AB CD EF"),
        hex!("85 E8 13 54 0F 0A B4 05"),
    ),
    (
        hex!("00 00 00 00 00 00 00 00"),
        hex!("00 00 00 00 00 00 00 00"),
        hex!("8C A6 4D E9 C1 B1 23 A7"),
    ),
    (
        hex!("FF FF FF FF FF FF FF FF"),
        hex!("FF FF FF FF FF FF FF FF"),
        hex!("73 59 B2 16 3E 4E DC 58"),
    ),
];

#[test]
fn full64_matches_published_ciphertexts() {
    let tables = Arc::new(TableSet::full64());
    for (key, plaintext, ciphertext) in KNOWN_ANSWERS {
        let mut cipher = BlockCipher::new(tables.clone());
        cipher.set_key(&BitVector::from_bytes(&key)).unwrap();

        let out = cipher.encrypt(&BitVector::from_bytes(&plaintext)).unwrap();
        assert_eq!(
            out.to_bytes(),
            ciphertext,
            "key {:02X?}",
            key
        );
    }
}

#[test]
fn full64_decrypts_published_ciphertexts() {
    let tables = Arc::new(TableSet::full64());
    for (key, plaintext, ciphertext) in KNOWN_ANSWERS {
        let mut cipher = BlockCipher::new(tables.clone());
        cipher.set_key(&BitVector::from_bytes(&key)).unwrap();

        let out = cipher.decrypt(&BitVector::from_bytes(&ciphertext)).unwrap();
        assert_eq!(out.to_bytes(), plaintext, "key {:02X?}", key);
    }
}

#[test]
fn all_zero_block_known_answer_via_hex_strings() {
    // Same anchor through the string serialization boundary.
    let tables = Arc::new(TableSet::full64());
    let mut cipher = BlockCipher::new(tables);
    cipher
        .set_key(&BitVector::from_hex("0000000000000000").unwrap())
        .unwrap();

    let plaintext = BitVector::from_binary_string(&"0".repeat(64)).unwrap();
    let ciphertext = cipher.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext.to_hex(), "8CA64DE9C1B123A7");
}
