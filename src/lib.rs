//! Booknest - 图书阅读追踪
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 图书记录、阅读进度、表单校验规则
//!
//! 应用层 (application/):
//! - Ports: BookApiPort（远端图书资源）、NavigatorPort（视图跳转）
//! - Views: 列表 / 详情 / 编辑与新建视图模型
//! - Router: 客户端路由表
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: reqwest 图书 API 客户端
//! - Memory: 内存图书资源、导航记录器
//! - HTTP: 服务端渲染页面 + 表单动作

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
