use classical_ciphers::{Action, Algorithm, Result, dispatch, list_algorithms, random_key};

fn main() -> Result<()> {
    println!("Classical Cipher Workbench");
    println!("==========================");

    let plaintext = "Meet me by the old oak tree at noon";
    println!("Plaintext: {}\n", plaintext);

    for id in list_algorithms() {
        let algorithm: Algorithm = id.parse()?;
        let key = random_key(algorithm);

        let ciphertext = dispatch(Action::Encrypt, id, &key, plaintext)?;
        let recovered = dispatch(Action::Decrypt, id, &key, &ciphertext)?;

        println!("{} (key {:?})", algorithm, key);
        println!("  encrypted: {}", ciphertext);
        println!("  decrypted: {}\n", recovered);
    }

    println!("Invalid input is rejected before anything is transformed:");
    if let Err(e) = dispatch(Action::Encrypt, "affine", "2,8", plaintext) {
        println!("  Error: {}", e);
    }

    Ok(())
}
