//! # /verify-ownership エンドポイント
//!
//! 指定アドレスが対象NFTを所有しているかを確認し、署名付きの結果を返す。
//!
//! ## 処理フロー
//! 1. クエリ文字列の `address` を検証（欠落・重複・形式不正は400）
//! 2. 所有権オラクルで現在の所有者と照合
//! 3. `(address, isOwner)` に署名
//! 4. `{ isOwner, signature }` を返却
//!
//! 2か3のどちらかが失敗した場合は500を返し、結果と署名のどちらも返さない。
//! HTTPメソッドは問わない。

mod handler;


pub use handler::handle_verify_ownership;
