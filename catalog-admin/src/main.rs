use catalog_admin::console::spawn_stdin_reader;
use catalog_admin::{Console, Dashboard, TerminalRenderer, ViewState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;

    tracing::info!(endpoint = %config.api_url, "Catalog admin starting...");

    // 2. 组装控制器
    let client = config.client_config().build_catalog()?;
    let mut dashboard = Dashboard::new(
        client,
        TerminalRenderer::stdout(),
        config.content_filter(),
        ViewState::with_page_size(config.page_size),
    )
    .with_export_dir(config.export_dir.clone());

    // 3. 首次加载; 失败时界面已提示, 之后仍可 `reload`
    if let Err(e) = dashboard.reload().await {
        tracing::warn!(error = %e, "Initial load failed");
    }

    // 4. 命令循环
    let mut console = Console::new(dashboard, config.search_debounce);
    spawn_stdin_reader(console.sender());
    console.run().await;

    Ok(())
}
