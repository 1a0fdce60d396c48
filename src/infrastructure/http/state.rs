//! Application State
//!
//! 所有请求共享的端口与路由表；视图本身按请求新建，不在请求间共享

use std::sync::Arc;

use crate::application::{BookApiPort, Router};

use super::submission::SubmissionLedger;

/// 应用状态
pub struct AppState {
    pub api: Arc<dyn BookApiPort>,
    pub router: Router,
    /// 编辑/新建表单的一次性提交令牌
    pub submissions: SubmissionLedger,
}

impl AppState {
    /// 创建应用状态
    pub fn new(api: Arc<dyn BookApiPort>, router: Router) -> Self {
        Self {
            api,
            router,
            submissions: SubmissionLedger::new(),
        }
    }

    /// 使用默认路由表
    pub fn with_default_routes(api: Arc<dyn BookApiPort>) -> Self {
        Self::new(api, Router::default())
    }
}
