//! Shared UI components

pub mod save_notice;
