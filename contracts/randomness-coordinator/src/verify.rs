use drand_verify::Pubkey;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// drand quicknet public key (G2, 96 bytes), hex encoded.
/// Scheme: bls-unchained-g1-rfc9380
pub const QUICKNET_PK_HEX: &str = "83cf0f2896adee7eb8b5f01fcad3912212c437e0073e911fb90022d3e760183c8c4b450b6a0a6c3ac6a5776a2d1064510d1fec758c921cc22b0e17e63aaf4bcb5ed66304de9cf809bd274ca73bab4af5a6e9c76a4bc09e76eae8991ef5ece45a";

#[derive(Error, Debug, PartialEq)]
pub enum BeaconError {
    #[error("invalid pubkey length (expected 96 bytes)")]
    PubkeyLength,
    #[error("invalid pubkey (failed to parse G2 point)")]
    Pubkey,
    #[error("verification failed: {0}")]
    Verification(String),
    #[error("signature does not match round")]
    SignatureMismatch,
}

/// Check a quicknet beacon signature for `round` and return its randomness,
/// `sha256(signature)`.
pub fn verify_beacon(
    pubkey_bytes: &[u8],
    round: u64,
    signature: &[u8],
) -> Result<[u8; 32], BeaconError> {
    let pk_fixed: [u8; 96] = pubkey_bytes
        .try_into()
        .map_err(|_| BeaconError::PubkeyLength)?;

    let pk = drand_verify::G2PubkeyRfc::from_fixed(pk_fixed).map_err(|_| BeaconError::Pubkey)?;

    // Unchained scheme: no previous signature
    let valid = pk
        .verify(round, &[], signature)
        .map_err(|e| BeaconError::Verification(format!("{:?}", e)))?;
    if !valid {
        return Err(BeaconError::SignatureMismatch);
    }

    Ok(Sha256::digest(signature).into())
}

/// The round being published at `now` (seconds). Round 1 is published at genesis.
pub fn current_round(now: u64, genesis_time: u64, period_seconds: u64) -> u64 {
    if now < genesis_time {
        return 0;
    }
    (now - genesis_time) / period_seconds + 1
}

/// First round whose randomness cannot be known at `now`.
pub fn next_round(now: u64, genesis_time: u64, period_seconds: u64) -> u64 {
    current_round(now, genesis_time, period_seconds) + 1
}
