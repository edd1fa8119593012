//! # 所有権アテステーション署名
//!
//! `(address, isOwner)` の組に対するsecp256k1署名の生成と検証用の復元。
//!
//! ## 署名対象
//! 1. `message = keccak256(abi.encodePacked(address, isOwner))`
//! 2. `message` をEIP-191 personal_sign（`"\x19Ethereum Signed Message:\n32" || message`）で署名
//!
//! 署名は `r[32] || s[32] || v[1]`（`v = 27 + recovery_id`）の65バイト。
//! コントラクト側では `ecrecover` でそのまま検証できる。

use ethers::abi::{encode_packed, Token};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Signature};
use ethers::utils::keccak256;

use crate::CryptoError;

/// `keccak256(abi.encodePacked(address, bool))`
pub fn attestation_message(address: &Address, is_owner: bool) -> Result<[u8; 32], CryptoError> {
    let packed = encode_packed(&[Token::Address(*address), Token::Bool(is_owner)])?;
    Ok(keccak256(packed))
}

/// アテステーション署名鍵（secp256k1）。
pub struct AttestationKey {
    wallet: LocalWallet,
}

impl AttestationKey {
    /// 16進数（`0x` 任意）の32バイト秘密鍵から構築する。
    pub fn from_hex(key_hex: &str) -> Result<Self, CryptoError> {
        let wallet = key_hex.trim().parse::<LocalWallet>()?;
        Ok(Self { wallet })
    }

    /// ランダムな鍵を生成する（開発環境用）。
    pub fn generate() -> Self {
        Self {
            wallet: LocalWallet::new(&mut rand::thread_rng()),
        }
    }

    /// 署名者アドレス
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// `(address, is_owner)` に署名する。RFC 6979により同じ入力からは同じ署名になる。
    pub async fn sign(&self, address: &Address, is_owner: bool) -> Result<Signature, CryptoError> {
        let message = attestation_message(address, is_owner)?;
        Ok(self.wallet.sign_message(message).await?)
    }
}

/// アテステーション署名（65バイト）から署名者アドレスを復元する。
///
/// `v` は `27/28` と `0/1` のどちらの表記も受け付ける。
pub fn recover_attestation_signer(
    address: &Address,
    is_owner: bool,
    signature: &[u8],
) -> Result<Address, CryptoError> {
    let signature = Signature::try_from(signature)?;
    let message = attestation_message(address, is_owner)?;
    Ok(signature.recover(message.to_vec())?)
}
