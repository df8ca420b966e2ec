//! Address strings built from the Base58 codec
//!
//! Only encoders that reduce to Base58/Base58Check over a hash or a raw key
//! live here. Keccak, bech32 and SS58 based formats are not provided.

use crate::base58::{self, Base58Alphabet};
use crate::bip32::Network;
use hdcrypt_algorithms::ec::k256::PublicKey;
use hdcrypt_api::{validate, CryptoProvider, Error, Result};
use hdcrypt_params::wallet::address::{P2PKH_MAINNET, P2PKH_TESTNET, RIPPLE_ACCOUNT};

/// version ‖ hash160
const VERSIONED_HASH_SIZE: usize = 21;

fn versioned_hash160<P: CryptoProvider + ?Sized>(
    version: u8,
    public_key: &PublicKey,
    provider: &P,
) -> [u8; VERSIONED_HASH_SIZE] {
    let mut payload = [0u8; VERSIONED_HASH_SIZE];
    payload[0] = version;
    payload[1..].copy_from_slice(&provider.hash160(&public_key.to_compressed()));
    payload
}

/// Bitcoin pay-to-pubkey-hash address of the compressed key
pub fn p2pkh_address<P: CryptoProvider + ?Sized>(
    public_key: &PublicKey,
    network: Network,
    provider: &P,
) -> String {
    let version = match network {
        Network::Mainnet => P2PKH_MAINNET,
        Network::Testnet => P2PKH_TESTNET,
    };
    base58::encode_check(&versioned_hash160(version, public_key, provider), provider)
}

/// Split a P2PKH address into its network and 20-byte key hash
pub fn parse_p2pkh<P: CryptoProvider + ?Sized>(
    address: &str,
    provider: &P,
) -> Result<(Network, [u8; 20])> {
    let payload = base58::decode_check(address, provider)?;
    validate::length("P2PKH address", payload.len(), VERSIONED_HASH_SIZE)?;
    let network = match payload[0] {
        P2PKH_MAINNET => Network::Mainnet,
        P2PKH_TESTNET => Network::Testnet,
        v => {
            return Err(Error::encoding(
                "P2PKH address",
                format!("unknown version byte 0x{:02x}", v),
            ))
        }
    };
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok((network, hash))
}

/// Solana account address: plain Base58 of the 32-byte ed25519 key
pub fn solana_address(public_key: &[u8; 32]) -> String {
    base58::encode(public_key)
}

/// XRP Ledger classic address of the compressed key
pub fn ripple_address<P: CryptoProvider + ?Sized>(public_key: &PublicKey, provider: &P) -> String {
    base58::encode_check_with_alphabet(
        &versioned_hash160(RIPPLE_ACCOUNT, public_key, provider),
        Base58Alphabet::Ripple,
        provider,
    )
}
