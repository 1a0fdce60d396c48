//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod book_api;
mod navigator;

pub use book_api::{BookApiError, BookApiPort};
pub use navigator::NavigatorPort;
