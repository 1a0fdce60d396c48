//! Navigator Port - 视图跳转
//!
//! 视图只描述"要去哪里"，由外层（HTTP 重定向、测试记录器）决定如何跳转

/// Navigator Port
pub trait NavigatorPort: Send + Sync {
    /// 跳转到指定客户端路径（如 `/book/157`、`/?search=Animal%20Farm`）
    fn push(&self, location: &str);
}
