//! # 启动配置
//!
//! 从进程环境变量读取远程存储（Supabase）的连接信息：
//! - `SUPABASE_URL` - 项目地址，如 `https://xyz.supabase.co`
//! - `SUPABASE_ANON_KEY` - 匿名访问密钥
//!
//! 与单次读取失败时回退到内置数据不同，缺少任一配置是致命错误：
//! 调用方（`lib.rs` 的 `setup` 钩子）必须中止启动，不能静默降级。

/// 项目地址的环境变量名
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";

/// 匿名密钥的环境变量名
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// 远程存储连接配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// 去掉末尾 `/` 的项目地址
    pub url: String,
    /// 访问密钥，同时用作 `apikey` 头和 Bearer 令牌
    pub anon_key: String,
}

impl StoreConfig {
    /// 从进程环境变量加载配置
    ///
    /// # 错误
    /// 任一变量缺失、为空或地址不是 http(s) 时返回错误信息
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过给定的查找函数加载配置
    ///
    /// # 参数
    /// - `lookup` - 变量名 → 变量值，变量不存在时返回 `None`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, SUPABASE_URL_VAR)?;
        let anon_key = required(&lookup, SUPABASE_ANON_KEY_VAR)?;

        let url = url.trim_end_matches('/').to_string();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(format!(
                "环境变量 {} 不是有效的 http(s) 地址: {}",
                SUPABASE_URL_VAR, url
            ));
        }

        Ok(Self { url, anon_key })
    }
}

/// 读取一个必填变量，去掉首尾空白后不能为空
fn required<F>(lookup: &F, name: &str) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("缺少必需的环境变量 {}", name))
}
