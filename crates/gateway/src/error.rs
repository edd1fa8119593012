//! # Gateway エラー型
//!
//! クライアントには固定のエラーメッセージのみを返し、
//! 失敗理由はログにだけ記録する。

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nftgate_types::ErrorResponse;

use crate::oracle::OracleError;
use crate::signer::SigningError;

/// Gatewayエラー型。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// addressパラメータの欠落・重複・形式不正
    #[error("不正な入力: {0}")]
    InvalidInput(String),
    /// ブロックチェーンからの所有者取得に失敗
    #[error("所有権の確認に失敗: {0}")]
    OwnershipLookup(#[from] OracleError),
    /// アテステーション署名の生成に失敗
    #[error("署名の生成に失敗: {0}")]
    Signing(#[from] SigningError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::InvalidInput(reason) => {
                tracing::warn!(reason = %reason, "不正な入力を拒否しました");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::invalid_address())).into_response()
            }
            GatewayError::OwnershipLookup(_) | GatewayError::Signing(_) => {
                tracing::error!(error = %self, "リクエスト処理に失敗しました");
                internal_error_response()
            }
        }
    }
}

/// 500レスポンス（固定メッセージ）
fn internal_error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}

/// ハンドラ内のpanicを500レスポンスに変換する。
/// `CatchPanicLayer::custom` に渡す。
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "不明なpanic".to_string()
    };
    tracing::error!(panic = %detail, "ハンドラがpanicしました");
    internal_error_response()
}
