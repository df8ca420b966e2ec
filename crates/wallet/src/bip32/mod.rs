//! BIP32 hierarchical deterministic keys
//!
//! A master node comes from HMAC-SHA512 keyed with `"Bitcoin seed"`. Each
//! child takes HMAC-SHA512 under the parent chain code: the left half tweaks
//! the parent key, the right half becomes the child chain code. Hardened
//! children (index ≥ 2³¹) mix in the private key and so cannot be reached
//! from a public node.
//!
//! A child index whose tweak is ≥ n, or whose key comes out zero or at
//! infinity, yields [`Error::DerivationSkip`](hdcrypt_api::Error::DerivationSkip).
//! Nothing retries automatically.

mod extended;
mod path;

pub use extended::{derive_path, ExtendedPrivateKey, ExtendedPublicKey, Network};
pub use path::{ChildNumber, DerivationPath};
