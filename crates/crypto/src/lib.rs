//! # nftgate 暗号処理
//!
//! EVMチェーン上の所有権アテステーションに必要な暗号処理を `ethers` の上に提供する。
//!
//! ## 暗号アルゴリズム
//! | 用途 | アルゴリズム |
//! |------|------------|
//! | ハッシュ | Keccak-256 |
//! | アドレス表記 | EIP-55 チェックサム |
//! | 署名 | secp256k1 ECDSA（RFC 6979、リカバリ可能） |
//! | 署名メッセージ | EIP-191 personal_sign |

pub mod address;
pub mod attestation;

pub use address::{checksum, parse_address};
pub use attestation::{recover_attestation_signer, AttestationKey};
pub use ethers::types::{Address, U256};

/// 暗号処理のエラー型
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// アドレス文字列の形式が不正
    #[error("アドレスの形式が不正です: {0}")]
    InvalidAddress(String),
    /// EIP-55チェックサム不一致
    #[error("アドレスのチェックサムが一致しません: {0}")]
    ChecksumMismatch(String),
    /// `abi.encodePacked` の失敗
    #[error("署名メッセージのエンコードに失敗しました: {0}")]
    Encode(#[from] ethers::abi::EncodePackedError),
    /// 秘密鍵の読み込み・署名の失敗
    #[error("署名鍵の処理に失敗しました: {0}")]
    Wallet(#[from] ethers::signers::WalletError),
    /// 署名の形式不正・公開鍵の復元失敗
    #[error("署名を検証できません: {0}")]
    Signature(#[from] ethers::types::SignatureError),
}
