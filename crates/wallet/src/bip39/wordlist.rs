//! The BIP39 English wordlist
//!
//! Embedded as text and split into an offset table at compile time. A list
//! with the wrong number of lines fails the build.

use core::cmp::Ordering;
use hdcrypt_params::wallet::bip39::WORDLIST_SIZE;

const ENGLISH: &str = include_str!("english.txt");

/// Byte offset of each word's first character, plus one past the last line
const fn build_offsets(text: &[u8]) -> [u16; WORDLIST_SIZE + 1] {
    let mut offsets = [0u16; WORDLIST_SIZE + 1];
    let mut word = 0;
    let mut i = 0;
    while i < text.len() {
        if text[i] == b'\n' {
            word += 1;
            if word > WORDLIST_SIZE {
                panic!("wordlist has more than 2048 lines");
            }
            offsets[word] = (i + 1) as u16;
        }
        i += 1;
    }
    if word != WORDLIST_SIZE {
        panic!("wordlist must have exactly 2048 newline-terminated lines");
    }
    offsets
}

static OFFSETS: [u16; WORDLIST_SIZE + 1] = build_offsets(ENGLISH.as_bytes());

/// The word at `index`, which must be below 2048
pub(crate) fn word(index: u16) -> &'static str {
    let i = index as usize % WORDLIST_SIZE;
    let start = OFFSETS[i] as usize;
    // drop the newline
    let end = OFFSETS[i + 1] as usize - 1;
    &ENGLISH[start..end]
}

/// Index of `candidate` in the sorted list
pub(crate) fn index_of(candidate: &str) -> Option<u16> {
    let (mut lo, mut hi) = (0usize, WORDLIST_SIZE);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match word(mid as u16).cmp(candidate) {
            Ordering::Equal => return Some(mid as u16),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Words starting with `prefix`, in list order
///
/// BIP39 English words are unique in their first four letters, so any
/// four-letter prefix yields at most one word.
pub fn words_with_prefix(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
    (0..WORDLIST_SIZE as u16)
        .map(word)
        .filter(move |w| w.starts_with(prefix))
}
