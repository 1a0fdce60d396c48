//! 应用层 - 视图模型
//!
//! 每个视图持有自己的本地状态，只通过 BookApiPort 与 NavigatorPort 与外界交互；
//! 视图之间不共享状态，跨视图一致性依赖重新拉取服务端数据

mod detail_view;
mod edit_view;
mod list_view;

pub use detail_view::DetailView;
pub use edit_view::{BookForm, EditMode, EditStage, EditView};
pub use list_view::{ListFilter, ListView};
