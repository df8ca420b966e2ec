//! Child numbers and derivation paths

use core::fmt;
use core::str::FromStr;
use hdcrypt_api::{Error, Result};
use hdcrypt_params::wallet::bip32::HARDENED_OFFSET;

/// One step in a derivation path
///
/// The wrapped value is the index without the hardened offset, so both
/// variants hold values in [0, 2³¹).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChildNumber {
    /// Derivable from a public parent
    Normal(u32),
    /// Index + 2³¹; needs the parent private key
    Hardened(u32),
}

impl ChildNumber {
    /// Split a raw 32-bit child number on its high bit
    pub fn from_index(index: u32) -> Self {
        if index & HARDENED_OFFSET != 0 {
            ChildNumber::Hardened(index & !HARDENED_OFFSET)
        } else {
            ChildNumber::Normal(index)
        }
    }

    /// A normal child; `index` must be below 2³¹
    pub fn normal(index: u32) -> Result<Self> {
        check_index(index)?;
        Ok(ChildNumber::Normal(index))
    }

    /// A hardened child; `index` must be below 2³¹
    pub fn hardened(index: u32) -> Result<Self> {
        check_index(index)?;
        Ok(ChildNumber::Hardened(index))
    }

    /// The raw 32-bit child number, with the high bit set when hardened
    pub fn to_index(self) -> u32 {
        match self {
            ChildNumber::Normal(i) => i,
            ChildNumber::Hardened(i) => i | HARDENED_OFFSET,
        }
    }

    /// True for indices ≥ 2³¹
    pub fn is_hardened(self) -> bool {
        matches!(self, ChildNumber::Hardened(_))
    }
}

fn check_index(index: u32) -> Result<()> {
    if index >= HARDENED_OFFSET {
        return Err(Error::param(
            "BIP32 child number",
            format!("index {} is not below 2^31", index),
        ));
    }
    Ok(())
}

impl From<u32> for ChildNumber {
    fn from(index: u32) -> Self {
        ChildNumber::from_index(index)
    }
}

impl From<ChildNumber> for u32 {
    fn from(child: ChildNumber) -> Self {
        child.to_index()
    }
}

impl fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildNumber::Normal(i) => write!(f, "{}", i),
            ChildNumber::Hardened(i) => write!(f, "{}'", i),
        }
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    /// `44'`, `44h` and `44H` are hardened; `0` is normal
    fn from_str(s: &str) -> Result<Self> {
        let (digits, hardened) = match s.strip_suffix(&['\'', 'h', 'H'][..]) {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::encoding(
                "BIP32 path",
                format!("invalid segment {:?}", s),
            ));
        }
        let index: u32 = digits
            .parse()
            .ok()
            .filter(|&i| i < HARDENED_OFFSET)
            .ok_or_else(|| {
                Error::encoding("BIP32 path", format!("segment {:?} is out of range", s))
            })?;
        Ok(if hardened {
            ChildNumber::Hardened(index)
        } else {
            ChildNumber::Normal(index)
        })
    }
}

/// A sequence of child numbers from the master node, written `m/44'/0'/0'/0/0`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    /// The empty path `m`
    pub fn master() -> Self {
        DerivationPath(Vec::new())
    }

    /// `m/purpose'/coin'/account'/change/index`
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> Result<Self> {
        Ok(DerivationPath(vec![
            ChildNumber::hardened(purpose)?,
            ChildNumber::hardened(coin_type)?,
            ChildNumber::hardened(account)?,
            ChildNumber::normal(change)?,
            ChildNumber::normal(index)?,
        ]))
    }

    /// The steps in order
    pub fn as_slice(&self) -> &[ChildNumber] {
        &self.0
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for `m`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// This path extended by one step
    pub fn child(&self, child: ChildNumber) -> Self {
        let mut steps = self.0.clone();
        steps.push(child);
        DerivationPath(steps)
    }

    /// Iterate over the steps
    pub fn iter(&self) -> core::slice::Iter<'_, ChildNumber> {
        self.0.iter()
    }
}

impl From<Vec<ChildNumber>> for DerivationPath {
    fn from(steps: Vec<ChildNumber>) -> Self {
        DerivationPath(steps)
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildNumber;
    type IntoIter = core::slice::Iter<'a, ChildNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut segments = s.split('/');
        if segments.next() != Some("m") {
            return Err(Error::encoding(
                "BIP32 path",
                "path must start with \"m\"",
            ));
        }
        segments
            .map(ChildNumber::from_str)
            .collect::<Result<Vec<_>>>()
            .map(DerivationPath)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for child in &self.0 {
            write!(f, "/{}", child)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{ChildNumber, DerivationPath};
    use core::str::FromStr;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for ChildNumber {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ChildNumber {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            ChildNumber::from_str(&s).map_err(de::Error::custom)
        }
    }

    impl Serialize for DerivationPath {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for DerivationPath {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            DerivationPath::from_str(&s).map_err(de::Error::custom)
        }
    }
}
