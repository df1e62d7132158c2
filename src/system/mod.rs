//! System utilities
//!
//! This module provides system-level services such as the wall clock.

pub mod clock;
