//! Domain-separation tags for the hash collaborators

/// BIP340 tag for the aux-randomness hash
pub const BIP340_TAG_AUX: &[u8] = b"BIP0340/aux";

/// BIP340 tag for the nonce hash
pub const BIP340_TAG_NONCE: &[u8] = b"BIP0340/nonce";

/// BIP340 tag for the challenge hash
pub const BIP340_TAG_CHALLENGE: &[u8] = b"BIP0340/challenge";
