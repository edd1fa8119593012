//! # EVMアカウントアドレス
//!
//! `ethers::types::Address` の文字列表現の検証とEIP-55表記。
//!
//! ## 受理する表記
//! - `0x` + 40桁の16進数（`0X` も可）
//! - 英字が全て小文字、または全て大文字の場合はチェックサム検証を行わない
//! - 大文字小文字が混在する場合はEIP-55チェックサムと一致する必要がある

use ethers::types::Address;
use ethers::utils::to_checksum;

use crate::CryptoError;

/// EIP-55チェックサム付き表記（`0x` 付き）を返す。
pub fn checksum(address: &Address) -> String {
    to_checksum(address, None)
}

/// アドレス文字列を検証してパースする。
///
/// 比較はバイト列で行われるため、入力時の大文字小文字の違いは結果に影響しない。
pub fn parse_address(s: &str) -> Result<Address, CryptoError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| CryptoError::InvalidAddress(format!("0xプレフィックスがありません: {s}")))?;

    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CryptoError::InvalidAddress(format!(
            "16進数40桁である必要があります: {s}"
        )));
    }

    let address = digits
        .parse::<Address>()
        .map_err(|e| CryptoError::InvalidAddress(format!("{e}: {s}")))?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && checksum(&address)[2..] != *digits {
        return Err(CryptoError::ChecksumMismatch(s.to_string()));
    }

    Ok(address)
}
