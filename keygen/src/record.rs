//! JSON output record for a generated keypair

use crate::error::Result;
use crate::keypair::Keypair;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Base64-encoded keypair, serialized as `{"privateKey":..,"publicKey":..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeypairRecord {
    /// Standard padded Base64 of the 32-byte private key
    pub private_key: String,
    /// Standard padded Base64 of the 32-byte public key
    pub public_key: String,
}

impl From<&Keypair> for KeypairRecord {
    fn from(keypair: &Keypair) -> Self {
        Self {
            private_key: STANDARD.encode(keypair.private_key()),
            public_key: STANDARD.encode(keypair.public_key()),
        }
    }
}

impl KeypairRecord {
    /// Compact JSON, no whitespace
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the record to `out` in one piece, without a trailing newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = self.to_json()?;
        out.write_all(json.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
