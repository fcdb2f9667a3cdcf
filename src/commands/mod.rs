//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数，即页面调用后端的 IPC 接口层。
//! 每个子模块对应一个功能域：
//! - `content` - 服务、作品集、评价和成功案例的读取与案例筛选
//! - `contact` - 联系表单提交

pub mod contact;
pub mod content;

use crate::services::contact::ContactWriter;
use crate::services::repository::ContentRepository;
use crate::services::store::RestStore;

/// 注册为 managed state 的内容仓库
pub type SiteRepository = ContentRepository<RestStore>;

/// 注册为 managed state 的联系表单写入器
pub type SiteContactWriter = ContactWriter<RestStore>;
