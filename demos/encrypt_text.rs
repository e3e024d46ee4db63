use des_cipher::crypto::cipher_context::CipherContext;
use des_cipher::crypto::cipher_types::CipherError;
use des_cipher::crypto::des::Des;
use des_cipher::crypto::utils::{apply_padding, remove_padding};

fn random_bytes(len: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

fn main() -> Result<(), CipherError> {
    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let data = text.as_bytes().to_vec();

    let key = random_bytes(8);
    let des = Des::new(&key)?;
    let ctx = CipherContext::new(Box::new(des));

    let encrypted = ctx.encrypt(&apply_padding(data.clone()));
    let decrypted = remove_padding(ctx.decrypt(&encrypted)?)?;

    assert_eq!(data, decrypted);
    println!(
        "DES ECB round-trip OK: {} plaintext bytes -> {} ciphertext bytes",
        data.len(),
        encrypted.len()
    );

    Ok(())
}
