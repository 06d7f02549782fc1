//! Catalog Admin - 远程商品目录的终端管理控制台
//!
//! # 架构概述
//!
//! - **目录视图** (`catalog`): 内容过滤、搜索/排序/分页、分页栏、CSV 导出
//! - **核心** (`core`): 配置、纯状态转换、控制器、错误
//! - **渲染** (`render`): `Renderer` trait 与终端实现
//! - **控制台** (`console`): 命令解析与输入循环
//! - **工具** (`utils`): 表单校验、防抖、日志
//!
//! # 模块结构
//!
//! ```text
//! catalog-admin/src/
//! ├── catalog/       # 视图管线
//! ├── core/          # 配置、状态、控制器、错误
//! ├── render/        # 渲染接口
//! ├── console/       # 交互式命令行
//! └── utils/         # 工具函数
//! ```

pub mod catalog;
pub mod console;
pub mod core;
pub mod render;
pub mod utils;

// Re-export 公共类型
pub use catalog::{ContentFilter, PageView, SortField, ViewState};
pub use console::{Command, Console, Input};
pub use core::{AdminError, AdminResult, Config, Dashboard, DashboardEvent, DashboardState};
pub use render::{Renderer, TerminalRenderer};
pub use utils::{ProductForm, init_logger};

/// Load `.env`, read the configuration and install logging
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(config)
}
