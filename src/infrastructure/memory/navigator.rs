//! Recording Navigator
//!
//! 记录视图发起的跳转；HTTP 层据此生成重定向

use std::sync::Mutex;

use crate::application::ports::NavigatorPort;

/// 记录跳转历史的导航器
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部跳转记录
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// 最近一次跳转
    pub fn last(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn push(&self, location: &str) {
        tracing::debug!(location = %location, "Navigate");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(location.to_string());
    }
}
