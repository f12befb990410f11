//! Strength estimates for generated passphrases.
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{zxcvbn, Entropy};

/// Measure the entropy in a passphrase.
pub fn measure_entropy(passphrase: &SecretString) -> Entropy {
    zxcvbn(passphrase.expose_secret(), &[])
}
