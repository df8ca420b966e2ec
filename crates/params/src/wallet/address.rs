//! Address version bytes

/// Bitcoin mainnet P2PKH version ("1…")
pub const P2PKH_MAINNET: u8 = 0x00;

/// Bitcoin testnet P2PKH version ("m…"/"n…")
pub const P2PKH_TESTNET: u8 = 0x6f;

/// XRP Ledger classic account version ("r…" in the Ripple alphabet)
pub const RIPPLE_ACCOUNT: u8 = 0x00;
