//! # Customer Service ライブラリ
//!
//! 顧客管理 API のユースケース・ハンドラ・ルーター構築を公開する。
//! 統合テストからルーターを直接駆動するためにライブラリとしても提供する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
