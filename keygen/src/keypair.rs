//! Curve25519 keypair generation for the NaCl `crypto_box` construction
//!
//! The private key is 32 bytes drawn straight from the entropy source. The
//! public key is the X25519 base-point multiple of it, computed by
//! `crypto_box`, which clamps the scalar internally and leaves the stored
//! bytes untouched.

use crate::error::{KeygenError, Result};
use crypto_box::SecretKey;
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::{debug, error};
use zeroize::Zeroizing;

/// Length in bytes of both halves of a keypair
pub const KEY_LEN: usize = crypto_box::KEY_SIZE;

/// A public/private keypair usable with `crypto_box`
pub struct Keypair {
    public_key: [u8; KEY_LEN],
    private_key: Zeroizing<[u8; KEY_LEN]>,
}

impl Keypair {
    /// Generate a fresh keypair using `rng` as the only entropy input.
    ///
    /// Fails with [`KeygenError::EntropyUnavailable`] if the source cannot
    /// supply the private key bytes; there is no zero-key fallback.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut private_key = Zeroizing::new([0u8; KEY_LEN]);
        rng.try_fill_bytes(&mut *private_key).map_err(|e| {
            error!("Failed to read {} bytes of entropy: {}", KEY_LEN, e);
            KeygenError::EntropyUnavailable(e)
        })?;
        debug!("Drew {} bytes of entropy", KEY_LEN);

        let secret = SecretKey::from(*private_key);
        let public_key = *secret.public_key().as_bytes();

        Ok(Self {
            public_key,
            private_key,
        })
    }

    pub fn public_key(&self) -> &[u8; KEY_LEN] {
        &self.public_key
    }

    pub fn private_key(&self) -> &[u8; KEY_LEN] {
        &self.private_key
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
