//! # エンドポイントテスト用共通ヘルパー
//!
//! オラクル・署名者のフェイク実装と、モックJSON-RPCノード。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nftgate_crypto::{parse_address, Address, AttestationKey, CryptoError, U256};

use crate::config::GatewayState;
use crate::oracle::{OracleError, OwnershipOracle};
use crate::signer::{AttestationSigner, LocalKeySigner, SigningError};

/// テスト用署名鍵
pub const TEST_SIGNER_KEY: &str =
    "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// テスト用NFTコントラクト
pub fn test_contract() -> Address {
    parse_address("0x204B70042E2FD080ab88bdCAcB9a557EE3da4bBc").unwrap()
}

/// トークン所有者として使うアドレス
pub fn test_holder() -> Address {
    parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap()
}

/// 所有者ではないアドレス
pub fn test_other() -> Address {
    parse_address("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359").unwrap()
}

pub fn test_signer() -> LocalKeySigner {
    LocalKeySigner::new(AttestationKey::from_hex(TEST_SIGNER_KEY).unwrap())
}

/// `address` 型の戻り値としてABIエンコードしたワード（`0x` 付き）
pub fn owner_word(owner: &Address) -> String {
    format!("0x{}{}", "00".repeat(12), hex::encode(owner.as_bytes()))
}

/// テスト用GatewayStateを構築する
pub fn test_state(
    oracle: Box<dyn OwnershipOracle>,
    signer: Box<dyn AttestationSigner>,
) -> Arc<GatewayState> {
    Arc::new(GatewayState {
        oracle,
        signer,
        contract_address: test_contract(),
        token_id: U256::zero(),
        chain_id: 8453,
    })
}

// ---------------------------------------------------------------------------
// フェイク実装
// ---------------------------------------------------------------------------

/// 固定の所有者を返すオラクル。呼び出し回数を記録する。
pub struct StaticOracle {
    owner: Address,
    pub calls: Arc<AtomicUsize>,
}

impl StaticOracle {
    pub fn owned_by(owner: Address) -> Self {
        Self {
            owner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl OwnershipOracle for StaticOracle {
    async fn is_owner(&self, address: &Address) -> Result<bool, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(*address == self.owner)
    }
}

/// 常に失敗するオラクル（ノード停止・revertを模擬）
pub struct FailingOracle;

#[async_trait::async_trait]
impl OwnershipOracle for FailingOracle {
    async fn is_owner(&self, _address: &Address) -> Result<bool, OracleError> {
        Err(OracleError::Reverted("execution reverted".into()))
    }
}

/// panicするオラクル（想定外の障害を模擬）
pub struct PanickingOracle;

#[async_trait::async_trait]
impl OwnershipOracle for PanickingOracle {
    async fn is_owner(&self, _address: &Address) -> Result<bool, OracleError> {
        panic!("unexpected oracle state");
    }
}

/// 本物の署名者をラップし、呼び出し回数を記録する署名者
pub struct CountingSigner {
    inner: LocalKeySigner,
    pub calls: Arc<AtomicUsize>,
}

impl Default for CountingSigner {
    fn default() -> Self {
        Self {
            inner: test_signer(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl AttestationSigner for CountingSigner {
    fn address(&self) -> Address {
        self.inner.address()
    }

    async fn sign(&self, address: &Address, is_owner: bool) -> Result<String, SigningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.sign(address, is_owner).await
    }
}

/// 常に失敗する署名者（鍵が利用できない状態を模擬）
pub struct FailingSigner;

#[async_trait::async_trait]
impl AttestationSigner for FailingSigner {
    fn address(&self) -> Address {
        Address::zero()
    }

    async fn sign(&self, _address: &Address, _is_owner: bool) -> Result<String, SigningError> {
        Err(SigningError::Crypto(CryptoError::InvalidAddress("鍵が利用できません".into())))
    }
}

// ---------------------------------------------------------------------------
// モックJSON-RPCノード
// ---------------------------------------------------------------------------

/// 任意のハンドラでPOST / に応答するモックノードを起動し、ポートを返す。
pub async fn start_mock_rpc_with<H, T>(handler: H) -> u16
where
    H: axum::handler::Handler<T, ()>,
    T: 'static,
{
    let app = axum::Router::new().route("/", axum::routing::post(handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    port
}

/// 常に同じJSON-RPCレスポンスを返すモックノードを起動する。`id` はリクエストの値を返す。
pub async fn start_mock_rpc(response: serde_json::Value) -> u16 {
    start_mock_rpc_with(move |axum::Json(request): axum::Json<serde_json::Value>| {
        let mut body = response.clone();
        body["id"] = request["id"].clone();
        async move { axum::Json(body) }
    })
    .await
}
