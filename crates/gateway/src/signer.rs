//! # アテステーション署名者
//!
//! `(address, isOwner)` の組に署名し、第三者が署名者アドレスで検証できる
//! アテステーションを生成する。

use nftgate_crypto::{Address, AttestationKey, CryptoError};

/// 署名生成のエラー型
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// 暗号処理の失敗（鍵の不備等）
    #[error("{0}")]
    Crypto(#[from] CryptoError),
}

/// アテステーション署名者の抽象インターフェース。
///
/// 鍵をプロセス内に持つ実装のほか、外部の鍵管理サービスへの委譲を想定して非同期にしている。
#[async_trait::async_trait]
pub trait AttestationSigner: Send + Sync {
    /// 署名者アドレス（検証者が署名の復元結果と照合する）
    fn address(&self) -> Address;

    /// `(address, is_owner)` に署名し、`0x` 付き16進数の署名を返す。
    async fn sign(&self, address: &Address, is_owner: bool) -> Result<String, SigningError>;
}

/// プロセス内のsecp256k1秘密鍵による署名者。
pub struct LocalKeySigner {
    key: AttestationKey,
}

impl LocalKeySigner {
    pub fn new(key: AttestationKey) -> Self {
        Self { key }
    }
}

#[async_trait::async_trait]
impl AttestationSigner for LocalKeySigner {
    fn address(&self) -> Address {
        self.key.address()
    }

    async fn sign(&self, address: &Address, is_owner: bool) -> Result<String, SigningError> {
        let signature = self.key.sign(address, is_owner).await?;
        Ok(format!("0x{}", hex::encode(signature.to_vec())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nftgate_crypto::recover_attestation_signer;

    use crate::endpoints::test_helpers::{test_holder, TEST_SIGNER_KEY};

    #[tokio::test]
    async fn test_signature_format() {
        let signer = LocalKeySigner::new(AttestationKey::from_hex(TEST_SIGNER_KEY).unwrap());
        let signature = signer.sign(&test_holder(), true).await.unwrap();

        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 2 + 65 * 2);
    }

    /// 署名は真偽値ごとに異なり、どちらも署名者アドレスに復元される
    #[tokio::test]
    async fn test_signature_recovers_to_signer() {
        let signer = LocalKeySigner::new(AttestationKey::from_hex(TEST_SIGNER_KEY).unwrap());
        let holder = test_holder();

        let sig_true = signer.sign(&holder, true).await.unwrap();
        let sig_false = signer.sign(&holder, false).await.unwrap();
        assert_ne!(sig_true, sig_false);

        for (is_owner, sig) in [(true, &sig_true), (false, &sig_false)] {
            let bytes = hex::decode(&sig[2..]).unwrap();
            let recovered = recover_attestation_signer(&holder, is_owner, &bytes).unwrap();
            assert_eq!(recovered, signer.address());
        }
    }
}
