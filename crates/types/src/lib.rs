//! # nftgate 共有型定義
//!
//! Gatewayとクライアントの間でやり取りされるJSON構造をRust構造体として提供する。
//!
//! ## エンコーディング規則
//! - アドレス: `0x` 付き16進数（EIP-55チェックサム表記）
//! - 署名: `0x` 付き16進数（`r || s || v` の65バイト）
//! - トークンID: 10進数文字列（uint256をJSON数値で表現しないため）
//! - フィールド名: camelCase

use serde::{Deserialize, Serialize};

/// 入力不正時の固定エラーメッセージ
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid address provided";

/// 内部エラー時の固定エラーメッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// ---------------------------------------------------------------------------
// 所有権確認 (/verify-ownership)
// ---------------------------------------------------------------------------

/// 所有権確認の成功レスポンス（アテステーション）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipResponse {
    /// 指定アドレスが対象トークンの現在の所有者か
    pub is_owner: bool,
    /// `(address, isOwner)` に対する署名
    pub signature: String,
}

/// エラーレスポンス。内部の失敗理由は含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 固定のエラーメッセージ
    pub error: String,
}

impl ErrorResponse {
    /// 入力不正（400）
    pub fn invalid_address() -> Self {
        Self {
            error: INVALID_ADDRESS_MESSAGE.to_string(),
        }
    }

    /// 内部エラー（500）
    pub fn internal() -> Self {
        Self {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// 公開情報 (/.well-known/nftgate-info)
// ---------------------------------------------------------------------------

/// 第三者がアテステーションを検証するための公開パラメータ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayInfo {
    /// 署名者アドレス
    pub signer_address: String,
    /// NFTコントラクトアドレス
    pub contract_address: String,
    /// 対象トークンID（10進数）
    pub token_id: String,
    /// 対象ネットワークのチェーンID
    pub chain_id: u64,
}
