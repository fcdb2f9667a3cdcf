//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! 所有结构体均派生 `Serialize`，用于 Tauri IPC 传输；需要从远程表读取的派生 `Deserialize`。
//! - `content` - 服务分类、服务、作品集和客户评价
//! - `case_study` - 成功案例及其表行形状
//! - `contact` - 联系表单输入、规范化行和提交结果

pub mod case_study;
pub mod contact;
pub mod content;
