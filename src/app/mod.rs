// ==========================================
// 订单查询助手 - 应用层
// ==========================================
// 职责: 装配状态，连接命令行/交互页面与查询 API
// ==========================================

pub mod cli;
pub mod interactive;
pub mod page;
pub mod state;

// 重导出
pub use cli::{execute, run, Cli, Commands, OutputFormat, EXIT_NOT_FOUND};
pub use interactive::{resolve_choice, InteractiveSession};
pub use page::{PageRenderer, Palette};
pub use state::{AppState, DataSource};
