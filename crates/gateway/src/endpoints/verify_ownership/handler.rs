//! /verify-ownership ハンドラ実装

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use nftgate_crypto::{parse_address, Address};
use nftgate_types::OwnershipResponse;

use crate::config::GatewayState;
use crate::error::GatewayError;

/// クエリ文字列のパラメータ名
const ADDRESS_PARAM: &str = "address";

/// /verify-ownership エンドポイントハンドラ。
pub async fn handle_verify_ownership(
    State(state): State<Arc<GatewayState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<OwnershipResponse>, GatewayError> {
    let Query(params) =
        query.map_err(|e| GatewayError::InvalidInput(format!("クエリのパースに失敗: {e}")))?;
    let address = extract_address(&params)?;

    // Step 1: 所有権の確認
    let is_owner = state.oracle.is_owner(&address).await?;

    // Step 2: 結果への署名
    let signature = state.signer.sign(&address, is_owner).await?;

    Ok(Json(OwnershipResponse {
        is_owner,
        signature,
    }))
}

/// クエリパラメータから `address` を1つだけ取り出して検証する。
fn extract_address(params: &[(String, String)]) -> Result<Address, GatewayError> {
    let mut values = params
        .iter()
        .filter(|(key, _)| key == ADDRESS_PARAM)
        .map(|(_, value)| value.as_str());

    let raw = match (values.next(), values.next()) {
        (Some(raw), None) => raw,
        (None, _) => return Err(GatewayError::InvalidInput("addressがありません".into())),
        (Some(_), Some(_)) => {
            return Err(GatewayError::InvalidInput("addressが複数指定されています".into()))
        }
    };

    if raw.is_empty() {
        return Err(GatewayError::InvalidInput("addressが空です".into()));
    }

    parse_address(raw).map_err(|e| GatewayError::InvalidInput(e.to_string()))
}
