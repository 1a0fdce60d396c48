//! Form Submission Ledger - 表单一次性提交令牌
//!
//! 每次渲染编辑/新建表单都签发新令牌（隐藏字段 `submission`）。
//! 同一令牌的保存只执行一次：重复提交（包括并发的双击）等待首次结果并复用其跳转地址。
//! 保存失败不占用令牌，修正后可再次提交。

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use uuid::Uuid;

/// 最多跟踪的令牌数，超出后淘汰最早的
pub const SUBMISSION_CAPACITY: usize = 1024;

/// 令牌结果槽：保存成功后写入跳转地址
pub type SubmissionSlot = Arc<OnceCell<String>>;

/// 令牌台账
#[derive(Default)]
pub struct SubmissionLedger {
    /// token -> 结果槽
    slots: DashMap<String, SubmissionSlot>,
    /// 令牌登记顺序
    order: Mutex<VecDeque<String>>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 签发新令牌（渲染表单时调用）
    pub fn issue(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// 令牌对应的结果槽，首次使用时登记
    pub fn slot(&self, token: &str) -> SubmissionSlot {
        let (slot, inserted) = match self.slots.entry(token.to_string()) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => (entry.insert(SubmissionSlot::default()).value().clone(), true),
        };

        if inserted {
            self.track(token);
        }
        slot
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn track(&self, token: &str) {
        let evicted = {
            let mut order = self.order.lock().unwrap_or_else(|e| e.into_inner());
            order.push_back(token.to_string());
            if order.len() > SUBMISSION_CAPACITY {
                order.pop_front()
            } else {
                None
            }
        };

        if let Some(old) = evicted {
            tracing::debug!(token = %old, "Submission token evicted");
            self.slots.remove(&old);
        }
    }
}
