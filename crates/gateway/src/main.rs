//! # nftgate Gateway
//!
//! 指定アドレスが特定のNFTを所有しているかをブロックチェーンから確認し、
//! 結果に署名したアテステーションを返すHTTPサーバー。
//!
//! ## 役割
//! - addressパラメータの検証
//! - 所有権オラクル経由のコントラクト読み取り（`ownerOf`）
//! - `(address, isOwner)` へのsecp256k1署名
//!
//! ## API エンドポイント
//! - `ANY /verify-ownership?address=0x...` — 所有権確認 + 署名
//! - `GET /.well-known/nftgate-info` — 署名者・対象トークン情報の公開

mod config;
mod endpoints;
mod error;
mod oracle;
mod signer;

use std::sync::Arc;

use nftgate_crypto::{checksum, AttestationKey};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::{GatewayConfig, GatewayState};
use crate::oracle::RpcOwnershipOracle;
use crate::signer::{AttestationSigner, LocalKeySigner};

/// axumルーターを構築する。
pub(crate) fn build_router(state: Arc<GatewayState>) -> axum::Router {
    axum::Router::new()
        .route(
            "/verify-ownership",
            axum::routing::any(endpoints::handle_verify_ownership),
        )
        .route(
            "/.well-known/nftgate-info",
            axum::routing::get(endpoints::handle_gateway_info),
        )
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;

    // アテステーション署名鍵
    let key = match config.signer_private_key.as_deref() {
        Some(key_hex) => AttestationKey::from_hex(key_hex)
            .map_err(|e| anyhow::anyhow!("SIGNER_PRIVATE_KEYが不正です: {e}"))?,
        None => {
            // 開発環境用: ランダムキーを生成
            tracing::warn!("SIGNER_PRIVATE_KEYが未設定です。ランダムキーを生成します（開発環境用）");
            AttestationKey::generate()
        }
    };
    let signer = LocalKeySigner::new(key);
    tracing::info!(signer_address = %checksum(&signer.address()), "アテステーション署名者アドレス");

    // RPC呼び出し用HTTPクライアント（タイムアウト付き）
    let http_client = reqwest::Client::builder()
        .timeout(config.rpc_timeout)
        .build()?;
    let oracle = RpcOwnershipOracle::new(
        http_client,
        &config.rpc_url,
        config.contract_address,
        config.token_id,
    )?;
    tracing::info!(
        rpc_url = %config.rpc_url,
        chain_id = config.chain_id,
        contract = %checksum(&config.contract_address),
        token_id = %config.token_id,
        "所有権オラクルを設定"
    );

    let state = Arc::new(GatewayState {
        oracle: Box::new(oracle),
        signer: Box::new(signer),
        contract_address: config.contract_address,
        token_id: config.token_id,
        chain_id: config.chain_id,
    });

    let app = build_router(state);

    tracing::info!("Gatewayを {} で起動します", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
