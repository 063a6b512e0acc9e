pub mod calls;
pub mod cli;
pub mod commands;
pub mod config;
pub mod crypto;
pub mod rpc;
pub mod secrets;
pub mod signer;
pub mod tx_builder;
