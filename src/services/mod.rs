//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `store` - 远程表存储接口及其 Supabase REST 实现
//! - `fallback` - 远程存储不可用时的内置数据集
//! - `repository` - 内容仓库：每类内容一个读取方法，失败即回退
//! - `contact` - 联系表单写入
//! - `case_filter` - 成功案例的关键词搜索和分类筛选

pub mod case_filter;
pub mod contact;
pub mod fallback;
pub mod repository;
pub mod store;

#[cfg(test)]
pub mod test_support;
