//! # 远程表存储服务
//!
//! 对 Supabase（PostgREST）的最小封装，只覆盖本站用到的两类操作：
//! - 整表查询：`select=*`，可选一个等值过滤、一个排序键和条数上限
//! - 单行插入：写入 `contact_submissions`
//!
//! ## 抽象层
//! `TableStore` trait 是仓库层和表单写入的唯一依赖，
//! 生产环境使用 `RestStore`（reqwest），测试使用内存实现。
//! 客户端在启动时显式构造，并通过 Tauri managed state 注入，不存在全局单例。
//!
//! ## 超时
//! 没有配置请求超时，也不支持取消；需要有界延迟的调用方须在外部自行加超时。

use std::fmt;
use std::future::Future;

use serde_json::Value;

use crate::utils::env::StoreConfig;

/// 服务分类表
pub const SERVICE_CATEGORIES: &str = "service_categories";
/// 服务表
pub const SERVICES: &str = "services";
/// 作品集表
pub const PORTFOLIO_ITEMS: &str = "portfolio_items";
/// 客户评价表
pub const TESTIMONIALS: &str = "testimonials";
/// 成功案例表
pub const CASE_STUDIES: &str = "case_studies";
/// 联系表单提交表
pub const CONTACT_SUBMISSIONS: &str = "contact_submissions";

// ============ 查询描述 ============

/// 等值过滤条件：`column = value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqFilter {
    pub column: String,
    pub value: String,
}

/// 单表查询描述
///
/// 始终选取全部列。通过链式方法追加过滤、排序和条数上限：
/// ```ignore
/// TableQuery::new(SERVICES).eq("categoryId", "marketing").order_by("id")
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    pub filter: Option<EqFilter>,
    /// 升序排序列
    pub order: Option<String>,
    pub limit: Option<usize>,
}

impl TableQuery {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filter: None,
            order: None,
            limit: None,
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filter = Some(EqFilter {
            column: column.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn order_by(mut self, column: &str) -> Self {
        self.order = Some(column.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// 转换为 PostgREST 查询参数
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        if let Some(filter) = &self.filter {
            params.push((filter.column.clone(), format!("eq.{}", filter.value)));
        }
        if let Some(column) = &self.order {
            params.push(("order".to_string(), format!("{}.asc", column)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

// ============ 错误类型 ============

/// 远程存储错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 请求未能完成（DNS、连接、TLS 等）
    Network(String),
    /// 服务端返回非 2xx 状态
    Rejected { status: u16, message: String },
    /// 响应体不是预期的 JSON 形状
    Decode(String),
}

impl StoreError {
    /// 面向用户的错误描述；没有可用描述时返回 `None`
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            StoreError::Network(m) | StoreError::Decode(m) => m,
            StoreError::Rejected { message, .. } => message,
        };
        let message = message.trim();
        if message.is_empty() { None } else { Some(message) }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(m) => write!(f, "网络请求失败: {}", m),
            StoreError::Rejected { status, message } => {
                write!(f, "远程存储拒绝请求 (HTTP {}): {}", status, message)
            }
            StoreError::Decode(m) => write!(f, "解析响应失败: {}", m),
        }
    }
}

impl std::error::Error for StoreError {}

// ============ 存储接口 ============

/// 表存储接口
///
/// 两个方法都只做一次往返，不重试。返回的 future 必须是 `Send`，
/// 以便在 Tauri 的异步 command 中使用。
pub trait TableStore: Send + Sync {
    /// 执行查询，返回原始 JSON 行
    fn select(
        &self,
        query: &TableQuery,
    ) -> impl Future<Output = Result<Vec<Value>, StoreError>> + Send;

    /// 向指定表插入一行
    fn insert(&self, table: &str, row: Value)
    -> impl Future<Output = Result<(), StoreError>> + Send;
}

// ============ PostgREST 实现 ============

/// 基于 reqwest 的 Supabase REST 客户端
///
/// `reqwest::Client` 内部是引用计数的连接池，克隆开销很小，
/// 内容仓库和表单写入各持有一份。
#[derive(Clone)]
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    /// 根据启动配置构造客户端
    ///
    /// # 错误
    /// HTTP 客户端初始化失败（如 TLS 后端不可用）时返回错误信息
    pub fn new(config: &StoreConfig) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| format!("初始化 HTTP 客户端失败: {}", e))?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key: config.anon_key.clone(),
        })
    }

    /// `{url}/rest/v1/{table}`
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// 附加认证头
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// 非 2xx 响应转换为 `StoreError::Rejected`
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message_from_body(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());

        Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

impl TableStore for RestStore {
    async fn select(&self, query: &TableQuery) -> Result<Vec<Value>, StoreError> {
        let request = self
            .http
            .get(self.table_url(&query.table))
            .query(&query.to_params());

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Self::check_status(response)
            .await?
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn insert(&self, table: &str, row: Value) -> Result<(), StoreError> {
        // PostgREST 批量插入接口，单行也以数组形式提交
        let request = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(&Value::Array(vec![row]));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Self::check_status(response).await.map(|_| ())
    }
}

/// 从 PostgREST 错误响应体中提取描述
///
/// 优先取 JSON 的 `message` 字段，其次是原始文本；都为空时返回 `None`。
fn error_message_from_body(body: &str) -> Option<String> {
    let from_json = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.trim().is_empty());

    from_json.or_else(|| {
        let text = body.trim();
        if text.is_empty() { None } else { Some(text.to_string()) }
    })
}
