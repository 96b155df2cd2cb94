//! Random password generation.

use rand::Rng;

/// The 94 printable ASCII symbols passwords are drawn from: letters, digits,
/// and standard punctuation.
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Fixed password length.
pub const PASSWORD_LEN: usize = 10;

/// Generate a random password.
///
/// Each character is drawn independently and uniformly from [`ALPHABET`],
/// with replacement. `rand`'s range sampling re-draws rather than wrapping,
/// so there is no modulo bias.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..PASSWORD_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
