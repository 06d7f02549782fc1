//! 核心模块 - 配置、状态、控制器和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 控制台配置
//! - [`DashboardState`] - 纯状态转换
//! - [`Dashboard`] - 控制器 (请求 + 渲染)
//! - [`AdminError`] - 错误类型

pub mod config;
pub mod controller;
pub mod error;
pub mod state;

pub use config::Config;
pub use controller::Dashboard;
pub use error::{AdminError, AdminResult};
pub use state::{DashboardEvent, DashboardState, LoadStatus};
