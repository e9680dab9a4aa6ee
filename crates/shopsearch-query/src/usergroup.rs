use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Obfuscates a customer group key for the provider: the key is XORed
/// byte-wise with the shop key (up to the shorter of the two) and base64
/// encoded.
pub fn user_group_hash(shop_key: &str, customer_group_key: &str) -> String {
    let mixed: Vec<u8> = shop_key
        .bytes()
        .zip(customer_group_key.bytes())
        .map(|(a, b)| a ^ b)
        .collect();
    STANDARD.encode(mixed)
}
