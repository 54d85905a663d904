use feistel_cipher::crypto::bit_vector::BitVector;
use feistel_cipher::crypto::block_cipher::BlockCipher;
use feistel_cipher::crypto::cipher_engine::CipherEngine;
use feistel_cipher::crypto::cipher_errors::CipherError;
use feistel_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use feistel_cipher::crypto::key_schedule::KeySchedule;
use feistel_cipher::crypto::table_set::TableSet;
use std::sync::Arc;

fn main() -> Result<(), CipherError> {
    // --------------------------------------------------------
    // 1) Classical 64-bit variant: the worked-example block
    // --------------------------------------------------------
    println!("=== 64-bit variant ===");
    let tables = Arc::new(TableSet::full64());

    let key = BitVector::from_hex("133457799BBCDFF1")?;
    let plaintext = BitVector::from_hex("0123456789ABCDEF")?;

    let round_keys = KeySchedule::derive_round_keys(&key, &tables)?;
    println!(" K1  = {}", round_keys[0].to_hex());
    println!(" K16 = {}", round_keys[15].to_hex());

    let mut cipher = BlockCipher::new(tables.clone());
    cipher.set_key(&key)?;

    let ciphertext = cipher.encrypt(&plaintext)?;
    let recovered = cipher.decrypt(&ciphertext)?;
    println!(" plaintext  = {}", plaintext.to_hex());
    println!(" ciphertext = {}", ciphertext.to_hex());
    println!(" recovered  = {}", recovered.to_hex());
    assert_eq!(recovered, plaintext);

    // --------------------------------------------------------
    // 2) Reduced 8-bit variant: every block round-trips
    // --------------------------------------------------------
    println!("\n=== 8-bit variant ===");
    let toy = TableSet::reduced8();
    let toy_key = BitVector::from_binary_string("10101010")?;
    let toy_keys = KeySchedule::derive_round_keys(&toy_key, &toy)?;
    let reversed: Vec<_> = toy_keys.iter().rev().cloned().collect();

    let mut round_tripped = 0u32;
    for value in 0..=255u8 {
        let block = BitVector::from_bytes(&[value]);
        let encrypted = CipherEngine::transform(&block, &toy_keys, &toy)?;
        let decrypted = CipherEngine::transform(&encrypted, &reversed, &toy)?;
        assert_eq!(decrypted, block);
        round_tripped += 1;
    }
    println!(" {} blocks round-tripped under key {}", round_tripped, toy_key.to_binary_string());

    let sample = BitVector::from_binary_string("11001010")?;
    let encrypted = CipherEngine::transform(&sample, &toy_keys, &toy)?;
    println!(
        " sample {} -> {}",
        sample.to_binary_string(),
        encrypted.to_binary_string()
    );

    Ok(())
}
