//! # GET /.well-known/nftgate-info
//!
//! アテステーション検証に必要な公開パラメータの公開エンドポイント。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use nftgate_crypto::checksum;
use nftgate_types::GatewayInfo;

use crate::config::GatewayState;

/// GET /.well-known/nftgate-info — 公開パラメータ。
///
/// 検証者は署名から復元したアドレスを `signerAddress` と照合する。
pub async fn handle_gateway_info(State(state): State<Arc<GatewayState>>) -> Json<GatewayInfo> {
    Json(GatewayInfo {
        signer_address: checksum(&state.signer.address()),
        contract_address: checksum(&state.contract_address),
        token_id: state.token_id.to_string(),
        chain_id: state.chain_id,
    })
}
