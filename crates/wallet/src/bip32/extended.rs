//! Extended keys: BIP32 tree nodes and their 78-byte serialization
//!
//! ```text
//! version(4) ‖ depth(1) ‖ parent fingerprint(4) ‖ child number(4)
//!   ‖ chain code(32) ‖ key data(33)
//! ```
//!
//! Key data is `0x00 ‖ k` for private nodes and the compressed point for
//! public ones. The Base58Check form of the 78 bytes is the familiar
//! `xprv…`/`xpub…` string.

use super::path::{ChildNumber, DerivationPath};
use crate::base58;
use core::fmt;
use hdcrypt_algorithms::ec::k256::{self as ec, PrivateKey, PublicKey, Scalar, K256_SCALAR_SIZE};
use hdcrypt_api::{validate, CryptoProvider, Error, Result};
use hdcrypt_common::SecretBuffer;
use hdcrypt_internal::endian::u32_from_be_bytes;
use hdcrypt_params::wallet::bip32::{
    CHAIN_CODE_SIZE, EXTENDED_KEY_SIZE, FINGERPRINT_SIZE, MASTER_KEY_HMAC_KEY, MAX_DEPTH,
    MAX_SEED_SIZE, MIN_SEED_SIZE, VERSION_MAINNET_PRIVATE, VERSION_MAINNET_PUBLIC,
    VERSION_TESTNET_PRIVATE, VERSION_TESTNET_PUBLIC,
};
use zeroize::Zeroizing;

/// Compressed public key or `0x00 ‖ private key`
const KEY_DATA_SIZE: usize = 33;

/// Version-byte family for extended key serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// `xprv` / `xpub`
    #[default]
    Mainnet,
    /// `tprv` / `tpub`
    Testnet,
}

impl Network {
    /// Version bytes of a private extended key
    pub fn private_version(self) -> [u8; 4] {
        match self {
            Network::Mainnet => VERSION_MAINNET_PRIVATE,
            Network::Testnet => VERSION_TESTNET_PRIVATE,
        }
    }

    /// Version bytes of a public extended key
    pub fn public_version(self) -> [u8; 4] {
        match self {
            Network::Mainnet => VERSION_MAINNET_PUBLIC,
            Network::Testnet => VERSION_TESTNET_PUBLIC,
        }
    }

    /// The network and privacy a version prefix announces
    fn from_version(version: [u8; 4]) -> Result<(Self, bool)> {
        match version {
            VERSION_MAINNET_PRIVATE => Ok((Network::Mainnet, true)),
            VERSION_MAINNET_PUBLIC => Ok((Network::Mainnet, false)),
            VERSION_TESTNET_PRIVATE => Ok((Network::Testnet, true)),
            VERSION_TESTNET_PUBLIC => Ok((Network::Testnet, false)),
            _ => Err(Error::encoding(
                "BIP32 extended key",
                format!("unknown version {:02x?}", version),
            )),
        }
    }
}

/// Fields common to both node kinds, after version and before key data
struct Header {
    depth: u8,
    parent_fingerprint: [u8; FINGERPRINT_SIZE],
    child_number: ChildNumber,
}

fn serialize_node(
    version: [u8; 4],
    header: &Header,
    chain_code: &[u8; CHAIN_CODE_SIZE],
    key_data: &[u8; KEY_DATA_SIZE],
) -> SecretBuffer<EXTENDED_KEY_SIZE> {
    let mut out = SecretBuffer::<EXTENDED_KEY_SIZE>::zeroed();
    let buf = out.as_mut_slice();
    buf[0..4].copy_from_slice(&version);
    buf[4] = header.depth;
    buf[5..9].copy_from_slice(&header.parent_fingerprint);
    buf[9..13].copy_from_slice(&header.child_number.to_index().to_be_bytes());
    buf[13..45].copy_from_slice(chain_code);
    buf[45..78].copy_from_slice(key_data);
    out
}

/// Base58Check-decode and split a serialized node
///
/// Returns the network, whether the version is a private one, the header,
/// the chain code and the raw key data.
fn parse_node<P: CryptoProvider + ?Sized>(
    encoded: &str,
    provider: &P,
) -> Result<(Network, bool, Header, [u8; CHAIN_CODE_SIZE], SecretBuffer<KEY_DATA_SIZE>)> {
    let data = Zeroizing::new(base58::decode_check(encoded, provider)?);
    validate::length("BIP32 extended key", data.len(), EXTENDED_KEY_SIZE)?;

    let mut version = [0u8; 4];
    version.copy_from_slice(&data[0..4]);
    let (network, private) = Network::from_version(version)?;

    let depth = data[4];
    let mut parent_fingerprint = [0u8; FINGERPRINT_SIZE];
    parent_fingerprint.copy_from_slice(&data[5..9]);
    let index = u32_from_be_bytes(&data[9..13]);

    // the master node has no parent
    if depth == 0 && (parent_fingerprint != [0u8; FINGERPRINT_SIZE] || index != 0) {
        return Err(Error::encoding(
            "BIP32 extended key",
            "depth 0 with non-zero parent fingerprint or child number",
        ));
    }

    let mut chain_code = [0u8; CHAIN_CODE_SIZE];
    chain_code.copy_from_slice(&data[13..45]);
    let key_data = SecretBuffer::from_slice("BIP32 key data", &data[45..78])?;

    let header = Header {
        depth,
        parent_fingerprint,
        child_number: ChildNumber::from_index(index),
    };
    Ok((network, private, header, chain_code, key_data))
}

fn skip(depth: u8, child: ChildNumber) -> Error {
    tracing::debug!(
        depth,
        index = child.to_index(),
        "BIP32 child yields an invalid key, skipping index"
    );
    Error::DerivationSkip {
        index: child.to_index(),
    }
}

fn check_depth(depth: u8) -> Result<()> {
    validate::parameter(
        depth < MAX_DEPTH,
        "BIP32 derivation",
        "depth 255 cannot be derived further",
    )
}

/// IL (the key tweak) and IR (the child chain code)
fn split_hmac(i: &[u8; 64]) -> (SecretBuffer<K256_SCALAR_SIZE>, SecretBuffer<CHAIN_CODE_SIZE>) {
    let mut il = SecretBuffer::<K256_SCALAR_SIZE>::zeroed();
    let mut ir = SecretBuffer::<CHAIN_CODE_SIZE>::zeroed();
    il.as_mut_slice().copy_from_slice(&i[..K256_SCALAR_SIZE]);
    ir.as_mut_slice().copy_from_slice(&i[K256_SCALAR_SIZE..]);
    (il, ir)
}

/// A private BIP32 node
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedPrivateKey {
    private_key: PrivateKey,
    chain_code: SecretBuffer<CHAIN_CODE_SIZE>,
    depth: u8,
    parent_fingerprint: [u8; FINGERPRINT_SIZE],
    child_number: ChildNumber,
}

impl ExtendedPrivateKey {
    /// The master node: HMAC-SHA512("Bitcoin seed", seed)
    ///
    /// The seed must be 16 to 64 bytes. A seed whose left half is not a
    /// valid key fails with `OutOfRange`; pick another seed.
    pub fn new_master<P: CryptoProvider + ?Sized>(seed: &[u8], provider: &P) -> Result<Self> {
        if !(MIN_SEED_SIZE..=MAX_SEED_SIZE).contains(&seed.len()) {
            return Err(Error::InvalidLength {
                context: "BIP32 seed",
                expected: if seed.len() < MIN_SEED_SIZE {
                    MIN_SEED_SIZE
                } else {
                    MAX_SEED_SIZE
                },
                actual: seed.len(),
            });
        }

        let i = SecretBuffer::new(provider.hmac_sha512(MASTER_KEY_HMAC_KEY, seed));
        let (il, chain_code) = split_hmac(i.as_array());
        let private_key = PrivateKey::from_bytes(il.as_slice()).map_err(|_| Error::OutOfRange {
            context: "BIP32 master key",
        })?;

        Ok(ExtendedPrivateKey {
            private_key,
            chain_code,
            depth: 0,
            parent_fingerprint: [0u8; FINGERPRINT_SIZE],
            child_number: ChildNumber::Normal(0),
        })
    }

    /// CKDpriv: derive one child
    ///
    /// Fails with `DerivationSkip` in the rare case that IL ≥ n or the child
    /// key is zero; the caller should move on to the next index.
    pub fn derive_child<P: CryptoProvider + ?Sized>(
        &self,
        child: ChildNumber,
        provider: &P,
    ) -> Result<Self> {
        check_depth(self.depth)?;
        let public_key = self.private_key.public_key();

        let mut data = Zeroizing::new([0u8; KEY_DATA_SIZE + 4]);
        if child.is_hardened() {
            // 0x00 ‖ k ‖ index
            data[1..KEY_DATA_SIZE].copy_from_slice(self.private_key.to_bytes().as_slice());
        } else {
            // K ‖ index
            data[..KEY_DATA_SIZE].copy_from_slice(&public_key.to_compressed());
        }
        data[KEY_DATA_SIZE..].copy_from_slice(&child.to_index().to_be_bytes());

        let i = SecretBuffer::new(provider.hmac_sha512(self.chain_code.as_slice(), &data[..]));
        let (il, chain_code) = split_hmac(i.as_array());

        let tweak = Scalar::from_bytes(il.as_array()).map_err(|_| skip(self.depth, child))?;
        let key = tweak.add(self.private_key.scalar());
        let private_key = PrivateKey::from_scalar(key).map_err(|_| skip(self.depth, child))?;

        tracing::trace!(
            depth = self.depth + 1,
            index = child.to_index(),
            hardened = child.is_hardened(),
            "derived BIP32 private child"
        );

        Ok(ExtendedPrivateKey {
            private_key,
            chain_code,
            depth: self.depth + 1,
            parent_fingerprint: fingerprint_of(&public_key, provider),
            child_number: child,
        })
    }

    /// Apply [`derive_child`](Self::derive_child) for every step of `path`
    pub fn derive_path<P: CryptoProvider + ?Sized>(
        &self,
        path: &DerivationPath,
        provider: &P,
    ) -> Result<Self> {
        let mut node = self.clone();
        for &child in path {
            node = node.derive_child(child, provider)?;
        }
        Ok(node)
    }

    /// The public node with the same chain code and position (N)
    pub fn public_key(&self) -> ExtendedPublicKey {
        ExtendedPublicKey {
            public_key: self.private_key.public_key(),
            chain_code: *self.chain_code.as_array(),
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_number: self.child_number,
        }
    }

    /// The node's private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The node's chain code
    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_SIZE] {
        self.chain_code.as_array()
    }

    /// Distance from the master node
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// First four bytes of the parent's identifier; zero for the master
    pub fn parent_fingerprint(&self) -> [u8; FINGERPRINT_SIZE] {
        self.parent_fingerprint
    }

    /// The index this node was derived at
    pub fn child_number(&self) -> ChildNumber {
        self.child_number
    }

    /// hash160 of the compressed public key
    pub fn identifier<P: CryptoProvider + ?Sized>(&self, provider: &P) -> [u8; 20] {
        provider.hash160(&self.private_key.public_key().to_compressed())
    }

    /// First four bytes of [`identifier`](Self::identifier)
    pub fn fingerprint<P: CryptoProvider + ?Sized>(&self, provider: &P) -> [u8; FINGERPRINT_SIZE] {
        fingerprint_of(&self.private_key.public_key(), provider)
    }

    /// The 78-byte serialization
    pub fn serialize(&self, network: Network) -> SecretBuffer<EXTENDED_KEY_SIZE> {
        let mut key_data = SecretBuffer::<KEY_DATA_SIZE>::zeroed();
        key_data.as_mut_slice()[1..].copy_from_slice(self.private_key.to_bytes().as_slice());
        serialize_node(
            network.private_version(),
            &self.header(),
            self.chain_code.as_array(),
            key_data.as_array(),
        )
    }

    /// `xprv…` (or `tprv…`) string
    pub fn to_base58<P: CryptoProvider + ?Sized>(&self, network: Network, provider: &P) -> String {
        base58::encode_check(self.serialize(network).as_slice(), provider)
    }

    /// Parse an `xprv…`/`tprv…` string
    ///
    /// Rejects public versions, a bad checksum or length, key data not
    /// starting with 0x00, out-of-range keys, and depth-0 nodes with a
    /// parent fingerprint or child number.
    pub fn from_base58<P: CryptoProvider + ?Sized>(
        encoded: &str,
        provider: &P,
    ) -> Result<(Self, Network)> {
        let (network, private, header, chain_code, key_data) = parse_node(encoded, provider)?;
        if !private {
            return Err(Error::encoding(
                "BIP32 extended key",
                "public key version where a private key was expected",
            ));
        }
        if key_data.as_slice()[0] != 0x00 {
            return Err(Error::encoding(
                "BIP32 extended key",
                "private key data must start with 0x00",
            ));
        }
        let private_key = PrivateKey::from_bytes(&key_data.as_slice()[1..]).map_err(|_| {
            Error::OutOfRange {
                context: "BIP32 extended private key",
            }
        })?;

        Ok((
            ExtendedPrivateKey {
                private_key,
                chain_code: SecretBuffer::new(chain_code),
                depth: header.depth,
                parent_fingerprint: header.parent_fingerprint,
                child_number: header.child_number,
            },
            network,
        ))
    }

    fn header(&self) -> Header {
        Header {
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_number: self.child_number,
        }
    }
}

impl fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("depth", &self.depth)
            .field("parent_fingerprint", &self.parent_fingerprint)
            .field("child_number", &self.child_number)
            .field("private_key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

/// A public BIP32 node; derives normal children only
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedPublicKey {
    public_key: PublicKey,
    chain_code: [u8; CHAIN_CODE_SIZE],
    depth: u8,
    parent_fingerprint: [u8; FINGERPRINT_SIZE],
    child_number: ChildNumber,
}

impl ExtendedPublicKey {
    /// CKDpub: derive one normal child
    ///
    /// A hardened index fails with `InvalidParameter`. IL ≥ n or a child at
    /// infinity fails with `DerivationSkip`.
    pub fn derive_child<P: CryptoProvider + ?Sized>(
        &self,
        child: ChildNumber,
        provider: &P,
    ) -> Result<Self> {
        if child.is_hardened() {
            return Err(Error::param(
                "BIP32 public derivation",
                "hardened child requires the parent private key",
            ));
        }
        check_depth(self.depth)?;

        let mut data = [0u8; KEY_DATA_SIZE + 4];
        data[..KEY_DATA_SIZE].copy_from_slice(&self.public_key.to_compressed());
        data[KEY_DATA_SIZE..].copy_from_slice(&child.to_index().to_be_bytes());

        let i = SecretBuffer::new(provider.hmac_sha512(&self.chain_code, &data));
        let (il, chain_code) = split_hmac(i.as_array());

        let tweak = Scalar::from_bytes(il.as_array()).map_err(|_| skip(self.depth, child))?;
        let point = ec::scalar_mult_base_g(&tweak).add(self.public_key.point());
        if point.is_identity() {
            return Err(skip(self.depth, child));
        }
        let public_key = PublicKey::from_point(point)?;

        tracing::trace!(
            depth = self.depth + 1,
            index = child.to_index(),
            "derived BIP32 public child"
        );

        Ok(ExtendedPublicKey {
            public_key,
            chain_code: *chain_code.as_array(),
            depth: self.depth + 1,
            parent_fingerprint: fingerprint_of(&self.public_key, provider),
            child_number: child,
        })
    }

    /// Apply [`derive_child`](Self::derive_child) for every step of `path`
    pub fn derive_path<P: CryptoProvider + ?Sized>(
        &self,
        path: &DerivationPath,
        provider: &P,
    ) -> Result<Self> {
        let mut node = *self;
        for &child in path {
            node = node.derive_child(child, provider)?;
        }
        Ok(node)
    }

    /// The node's public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The node's chain code
    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_SIZE] {
        &self.chain_code
    }

    /// Distance from the master node
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// First four bytes of the parent's identifier; zero for the master
    pub fn parent_fingerprint(&self) -> [u8; FINGERPRINT_SIZE] {
        self.parent_fingerprint
    }

    /// The index this node was derived at
    pub fn child_number(&self) -> ChildNumber {
        self.child_number
    }

    /// hash160 of the compressed public key
    pub fn identifier<P: CryptoProvider + ?Sized>(&self, provider: &P) -> [u8; 20] {
        provider.hash160(&self.public_key.to_compressed())
    }

    /// First four bytes of [`identifier`](Self::identifier)
    pub fn fingerprint<P: CryptoProvider + ?Sized>(&self, provider: &P) -> [u8; FINGERPRINT_SIZE] {
        fingerprint_of(&self.public_key, provider)
    }

    /// The 78-byte serialization
    pub fn serialize(&self, network: Network) -> [u8; EXTENDED_KEY_SIZE] {
        let header = Header {
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_number: self.child_number,
        };
        *serialize_node(
            network.public_version(),
            &header,
            &self.chain_code,
            &self.public_key.to_compressed(),
        )
        .as_array()
    }

    /// `xpub…` (or `tpub…`) string
    pub fn to_base58<P: CryptoProvider + ?Sized>(&self, network: Network, provider: &P) -> String {
        base58::encode_check(&self.serialize(network), provider)
    }

    /// Parse an `xpub…`/`tpub…` string
    pub fn from_base58<P: CryptoProvider + ?Sized>(
        encoded: &str,
        provider: &P,
    ) -> Result<(Self, Network)> {
        let (network, private, header, chain_code, key_data) = parse_node(encoded, provider)?;
        if private {
            return Err(Error::encoding(
                "BIP32 extended key",
                "private key version where a public key was expected",
            ));
        }
        if !matches!(key_data.as_slice()[0], 0x02 | 0x03) {
            return Err(Error::encoding(
                "BIP32 extended key",
                "public key data must be a compressed point",
            ));
        }
        let public_key = PublicKey::from_slice(key_data.as_slice())
            .map_err(|e| Error::from(e).with_context("BIP32 extended public key"))?;

        Ok((
            ExtendedPublicKey {
                public_key,
                chain_code,
                depth: header.depth,
                parent_fingerprint: header.parent_fingerprint,
                child_number: header.child_number,
            },
            network,
        ))
    }
}

fn fingerprint_of<P: CryptoProvider + ?Sized>(
    public_key: &PublicKey,
    provider: &P,
) -> [u8; FINGERPRINT_SIZE] {
    let id = provider.hash160(&public_key.to_compressed());
    let mut fp = [0u8; FINGERPRINT_SIZE];
    fp.copy_from_slice(&id[..FINGERPRINT_SIZE]);
    fp
}

/// Master node from `seed`, then every step of the textual `path`
pub fn derive_path<P: CryptoProvider + ?Sized>(
    seed: &[u8],
    path: &str,
    provider: &P,
) -> Result<ExtendedPrivateKey> {
    let path: DerivationPath = path.parse()?;
    ExtendedPrivateKey::new_master(seed, provider)?.derive_path(&path, provider)
}
