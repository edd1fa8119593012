//! # Gatewayエンドポイント

pub mod gateway_info;
pub mod verify_ownership;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use gateway_info::handle_gateway_info;
pub use verify_ownership::handle_verify_ownership;
