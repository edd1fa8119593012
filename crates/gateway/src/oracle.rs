//! # 所有権オラクル
//!
//! 「アドレスXは対象トークンの現在の所有者か」をコントラクト状態の読み取りで判定する。
//!
//! 本番実装はJSON-RPC `eth_call` でERC-721の `ownerOf(tokenId)` を呼び出す。
//! 呼び出しは1回のみで、失敗時の再試行は行わない。
//! `latest` ブロックを読むため、再編成やノードの遅延に対する保証はない。

use std::sync::Arc;

use ethers::contract::{abigen, ContractError};
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use nftgate_crypto::checksum;

abigen!(
    Erc721,
    r#"[
        function ownerOf(uint256 tokenId) external view returns (address)
    ]"#,
);

/// 所有権オラクルのエラー型
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// RPCエンドポイントURLが不正
    #[error("RPCエンドポイントURLが不正です: {0}")]
    InvalidRpcUrl(String),
    /// RPCノードとの通信失敗（接続失敗・タイムアウト・JSON-RPCエラー等）
    #[error("eth_callが失敗しました: {0}")]
    Call(String),
    /// コントラクト呼び出しがrevertした
    #[error("ownerOfがrevertしました: {0}")]
    Reverted(String),
    /// 戻り値をaddressとしてデコードできない
    #[error("ownerOfの戻り値が不正です: {0}")]
    InvalidResponse(String),
}

impl From<ContractError<Provider<Http>>> for OracleError {
    fn from(err: ContractError<Provider<Http>>) -> Self {
        match err {
            ContractError::Revert(data) => OracleError::Reverted(data.to_string()),
            ContractError::DecodingError(e) => OracleError::InvalidResponse(e.to_string()),
            ContractError::DetokenizationError(e) => OracleError::InvalidResponse(e.to_string()),
            other => OracleError::Call(other.to_string()),
        }
    }
}

/// 所有権オラクルの抽象インターフェース。
///
/// 対象コントラクトとトークンIDは実装側が保持する。
#[async_trait::async_trait]
pub trait OwnershipOracle: Send + Sync {
    /// `address` が対象トークンの現在の所有者かを返す。
    async fn is_owner(&self, address: &Address) -> Result<bool, OracleError>;
}

/// JSON-RPC `eth_call` による所有権オラクル実装。
pub struct RpcOwnershipOracle {
    /// ERC-721コントラクトバインディング
    contract: Erc721<Provider<Http>>,
    /// 対象トークンID
    token_id: U256,
}

impl RpcOwnershipOracle {
    /// `http_client` のタイムアウトがそのままRPC呼び出しのタイムアウトになる。
    pub fn new(
        http_client: reqwest::Client,
        rpc_url: &str,
        contract_address: Address,
        token_id: U256,
    ) -> Result<Self, OracleError> {
        let url = reqwest::Url::parse(rpc_url)
            .map_err(|e| OracleError::InvalidRpcUrl(format!("{e}: {rpc_url}")))?;
        let provider = Provider::new(Http::new_with_client(url, http_client));

        Ok(Self {
            contract: Erc721::new(contract_address, Arc::new(provider)),
            token_id,
        })
    }

    /// `ownerOf(tokenId)` を呼び出し、現在の所有者を返す。
    pub async fn owner_of(&self) -> Result<Address, OracleError> {
        let call = self.contract.owner_of(self.token_id);
        Ok(call.call().await?)
    }
}

#[async_trait::async_trait]
impl OwnershipOracle for RpcOwnershipOracle {
    async fn is_owner(&self, address: &Address) -> Result<bool, OracleError> {
        let owner = self.owner_of().await.map_err(|e| {
            tracing::error!(address = %checksum(address), error = %e, "NFT所有者の取得に失敗しました");
            e
        })?;

        let is_owner = owner == *address;
        tracing::info!(
            address = %checksum(address),
            owner = %checksum(&owner),
            is_owner,
            "NFT所有者を取得しました"
        );
        Ok(is_owner)
    }
}
