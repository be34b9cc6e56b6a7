use cosmwasm_std::Uint128;
use sha2::{Digest, Sha256};

/// Domain separation prefix for request id derivation.
pub const REQUEST_ID_DOMAIN: &[u8] = b"lootpack.request";

/// Derive the correlation token for a randomness request.
///
/// `request_id = hex( sha256( REQUEST_ID_DOMAIN || consumer_bytes || nonce_u64_be ) )`
///
/// The coordinator issues ids with this function, and consumers use it to key
/// their pending records before the request message is executed.
pub fn compute_request_id(consumer: &str, nonce: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(REQUEST_ID_DOMAIN);
    hasher.update(consumer.as_bytes());
    hasher.update(nonce.to_be_bytes());
    hex::encode(hasher.finalize())
}

/// Expand one 32-byte beacon into `count` independent words.
///
/// `word_i = uint128( sha256( randomness || request_id || i_u32_be )[0..16] )`
pub fn derive_words(randomness: &[u8], request_id: &str, count: u32) -> Vec<Uint128> {
    (0..count)
        .map(|i| {
            let mut hasher = Sha256::new();
            hasher.update(randomness);
            hasher.update(request_id.as_bytes());
            hasher.update(i.to_be_bytes());
            let digest: [u8; 32] = hasher.finalize().into();

            let mut word_bytes = [0u8; 16];
            word_bytes.copy_from_slice(&digest[0..16]);
            Uint128::new(u128::from_be_bytes(word_bytes))
        })
        .collect()
}
