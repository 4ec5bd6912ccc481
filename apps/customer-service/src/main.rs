//! # Customer Service サーバー
//!
//! 顧客レコードの一覧・作成・更新・削除を提供する HTTP API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CUSTOMER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CUSTOMER_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `STORAGE_BACKEND` | No | `memory`（デフォルト）または `postgres` |
//! | `DATABASE_URL` | `postgres` 時 | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//!
//! ## 起動方法
//!
//! ```bash
//! # インメモリストアで起動
//! cargo run -p customers-service
//!
//! # PostgreSQL で起動（起動時にマイグレーションを適用）
//! STORAGE_BACKEND=postgres DATABASE_URL=postgres://... cargo run -p customers-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use customers_infra::{
    db,
    repository::{CustomerRepository, InMemoryCustomerRepository, PostgresCustomerRepository},
};
use customers_service::{
    app_builder::build_app,
    config::{CustomerConfig, StorageBackend},
    usecase::CustomerUseCaseImpl,
};
use customers_shared::observability::init_tracing;
use tokio::net::TcpListener;

/// Customer Service サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. 設定の読み込み
/// 3. トレーシングの初期化
/// 4. ストレージの初期化
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // ログ形式も設定に含まれるため、トレーシングより先に読み込む
    let config = CustomerConfig::from_env().context("設定の読み込みに失敗しました")?;

    init_tracing(config.log_format);
    let _tracing_guard = tracing::info_span!("app", service = "customer-service").entered();

    tracing::info!(
        "Customer Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let repository = create_repository(&config).await?;
    let app = build_app(CustomerUseCaseImpl::new(repository));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Customer Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// 設定に応じたリポジトリを作成する
async fn create_repository(config: &CustomerConfig) -> anyhow::Result<Arc<dyn CustomerRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("インメモリストアを使用します");
            Ok(Arc::new(InMemoryCustomerRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL が設定されていません")?;

            let pool = db::create_pool(database_url)
                .await
                .context("データベース接続に失敗しました")?;
            tracing::info!("データベースに接続しました");

            db::run_migrations(&pool)
                .await
                .context("マイグレーションの適用に失敗しました")?;
            tracing::info!("マイグレーションを適用しました");

            Ok(Arc::new(PostgresCustomerRepository::new(pool)))
        }
    }
}
