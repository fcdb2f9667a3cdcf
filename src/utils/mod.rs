//! # 通用工具模块
//!
//! - `env` - 启动配置（远程存储地址和密钥）
//! - `time` - ISO 8601 时间戳

pub mod env;
pub mod time;
