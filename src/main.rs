use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use dss_website::{config::Config, models::AppState, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    let config = Config::load()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // 创建应用状态
    let state = AppState {
        config: Arc::new(config),
    };

    // 创建路由
    let app = routes::create_router(state);

    // 启动服务器
    info!("Starting DSS Group Website backend on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
