use ecc_elgamal::{decrypt, encrypt, generate_keys, random_curve_point, SamplingConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() -> Result<(), ecc_elgamal::Error> {
    // Optional u64 seed for a reproducible run
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());
    let mut rng = match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_entropy(),
    };

    let (public_key, private_key) = generate_keys(&mut rng)?;
    let curve = &public_key.curve;
    println!("Public key:");
    println!("  p = {}", curve.p());
    println!("  a = {}", curve.a());
    println!("  b = {}", curve.b());
    println!("  G = {}", public_key.g);
    println!("  Q = {}", public_key.q);
    println!("Private key:");
    println!("  d = {}\n", private_key.scalar());

    let message = random_curve_point(curve, &mut rng, &SamplingConfig::default())?;
    println!("Message: {}\n", message);

    let ciphertext = encrypt(&message, &public_key, &mut rng)?;
    println!("Ciphertext:");
    println!("  C1 = {}", ciphertext.c1);
    println!("  C2 = {}\n", ciphertext.c2);

    let decrypted = decrypt(&ciphertext, &private_key, &public_key)?;
    println!("Decrypted message: {}", decrypted);
    println!("Match: {}", decrypted == message);
    Ok(())
}
