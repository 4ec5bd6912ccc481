//! # ミドルウェア
//!
//! Customer Service 用のミドルウェアを提供する。

mod canonical_log;

pub use canonical_log::canonical_log_line;
