//! TeamBoard Library
//!
//! Core library for the TeamBoard desktop application: board views and the
//! local-first comment threads behind them.

pub mod app;
pub mod storage;
pub mod system;
pub mod types;
pub mod ui;
