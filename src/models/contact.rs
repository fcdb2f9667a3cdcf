//! # 联系表单数据模型
//!
//! - `ContactFormData`：前端表单提交的原始输入（IPC 入参）
//! - `ContactSubmission`：写入 `contact_submissions` 表的规范化行
//! - `SubmissionResult`：返回给表单的 `{ success, error? }` 结果
//!
//! 表单数据是一次性输入，客户端不保存；创建时间由提交时刻决定，不接受调用方传入。

use serde::{Deserialize, Serialize};

/// 联系表单输入
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ContactFormData {
///   name: string;
///   email: string;
///   phone?: string;
///   company?: string;
///   serviceInterest?: string[];
///   message: string;
/// }
/// ```
///
/// 必填字段的校验由表单负责，这里不做任何校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// 勾选的服务 ID，保持勾选顺序
    #[serde(default)]
    pub service_interest: Option<Vec<String>>,
    pub message: String,
}

/// `contact_submissions` 表的一行
///
/// 可选字段缺失时显式写 `null`（不省略列），`service_interest` 缺失时写空数组。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service_interest: Vec<String>,
    pub message: String,
    /// ISO 8601 UTC 时间戳
    pub created_at: String,
}

impl ContactSubmission {
    /// 由表单输入构造规范化的行
    ///
    /// 表单清空后的可选输入框会以空字符串提交，同样按缺失处理。
    ///
    /// # 参数
    /// - `data` - 表单输入
    /// - `created_at` - 提交时刻的 ISO 8601 时间戳
    pub fn from_form(data: ContactFormData, created_at: String) -> Self {
        Self {
            name: data.name,
            email: data.email,
            phone: data.phone.filter(|s| !s.trim().is_empty()),
            company: data.company.filter(|s| !s.trim().is_empty()),
            service_interest: data.service_interest.unwrap_or_default(),
            message: data.message,
            created_at,
        }
    }
}

/// 表单提交结果
///
/// 对应前端期望的 `{ success: boolean; error?: string }`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
