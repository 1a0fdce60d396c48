//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookApi、Navigator）
//! - views: 列表、详情、编辑/新建视图模型
//! - router: 客户端路由表
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod router;
pub mod views;

pub use error::ApplicationError;
pub use ports::{BookApiError, BookApiPort, NavigatorPort};
pub use router::{default_routes, RouteDef, RouteMatch, Router, ViewKind};
pub use views::{
    BookForm, DetailView, EditMode, EditStage, EditView, ListFilter, ListView,
};
