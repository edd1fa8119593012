//! # Gateway設定・共有状態
//!
//! 環境変数からの設定読み込みとGatewayの共有状態の定義。
//! 設定は起動時に一度だけ読み込み、以降は読み取り専用。

use std::time::Duration;

use anyhow::Context;
use nftgate_crypto::{parse_address, Address, U256};

use crate::oracle::OwnershipOracle;
use crate::signer::AttestationSigner;

/// NFTコントラクトアドレス（Base mainnet）
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x204B70042E2FD080ab88bdCAcB9a557EE3da4bBc";
/// 対象トークンID
pub const DEFAULT_TOKEN_ID: &str = "0";
/// Base mainnet のチェーンID
pub const DEFAULT_CHAIN_ID: u64 = 8453;
/// Base mainnet の公開RPCエンドポイント
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";
/// RPC呼び出しのタイムアウト（秒）
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;
/// 待ち受けアドレス
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Gatewayの起動時設定。
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// 待ち受けアドレス
    pub bind_addr: String,
    /// JSON-RPCエンドポイント
    pub rpc_url: String,
    /// 対象ネットワークのチェーンID
    pub chain_id: u64,
    /// ERC-721コントラクトアドレス
    pub contract_address: Address,
    /// 対象トークンID
    pub token_id: U256,
    /// RPC呼び出しのタイムアウト
    pub rpc_timeout: Duration,
    /// アテステーション署名用secp256k1秘密鍵（16進数）。
    /// Noneの場合は起動時にランダム鍵を生成する（開発環境用）。
    pub signer_private_key: Option<String>,
}

impl GatewayConfig {
    /// 環境変数から構築する。
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の変数ルックアップから構築する。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let rpc_url = lookup("RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let chain_id = match lookup("CHAIN_ID") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("CHAIN_IDが不正です: {v}"))?,
            None => DEFAULT_CHAIN_ID,
        };

        let contract_str = lookup("NFT_CONTRACT_ADDRESS")
            .unwrap_or_else(|| DEFAULT_CONTRACT_ADDRESS.to_string());
        let contract_address = parse_address(&contract_str)
            .with_context(|| format!("NFT_CONTRACT_ADDRESSが不正です: {contract_str}"))?;

        let token_str = lookup("TOKEN_ID").unwrap_or_else(|| DEFAULT_TOKEN_ID.to_string());
        if token_str.is_empty() {
            anyhow::bail!("TOKEN_IDが空です");
        }
        let token_id = U256::from_dec_str(&token_str)
            .map_err(|e| anyhow::anyhow!("TOKEN_IDが不正です: {token_str} ({e:?})"))?;

        let rpc_timeout_secs = match lookup("RPC_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("RPC_TIMEOUT_SECSが不正です: {v}"))?,
            None => DEFAULT_RPC_TIMEOUT_SECS,
        };
        if rpc_timeout_secs == 0 {
            anyhow::bail!("RPC_TIMEOUT_SECSは1以上である必要があります");
        }

        let signer_private_key = lookup("SIGNER_PRIVATE_KEY").filter(|v| !v.trim().is_empty());

        Ok(Self {
            bind_addr,
            rpc_url,
            chain_id,
            contract_address,
            token_id,
            rpc_timeout: Duration::from_secs(rpc_timeout_secs),
            signer_private_key,
        })
    }
}

/// Gatewayの共有状態。全リクエストで読み取り専用に共有される。
pub struct GatewayState {
    /// 所有権オラクル（ブロックチェーン読み取り、トレイトで抽象化）
    pub oracle: Box<dyn OwnershipOracle>,
    /// アテステーション署名者（トレイトで抽象化）
    pub signer: Box<dyn AttestationSigner>,
    /// ERC-721コントラクトアドレス
    pub contract_address: Address,
    /// 対象トークンID
    pub token_id: U256,
    /// 対象ネットワークのチェーンID
    pub chain_id: u64,
}
