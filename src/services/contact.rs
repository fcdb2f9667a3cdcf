//! # 联系表单写入服务
//!
//! 每次提交向 `contact_submissions` 表插入一行规范化的线索记录。
//!
//! - 不做校验：必填项由表单负责
//! - 创建时间在提交时生成，不接受调用方传入
//! - 只尝试一次插入，不重试，也没有幂等键；重复提交会产生重复记录
//! - 任何失败都转换为 `SubmissionResult { success: false, error }`，不会向外抛出

use crate::models::contact::{ContactFormData, ContactSubmission, SubmissionResult};
use crate::services::store::{StoreError, TableStore, CONTACT_SUBMISSIONS};
use crate::utils::time;

/// 存储没有给出可用描述时的通用错误信息
pub const GENERIC_SUBMIT_ERROR: &str = "Ocorreu um erro ao enviar sua mensagem. Tente novamente.";

/// 联系表单写入器
///
/// 持有显式构造的存储客户端，由 `lib.rs` 注册为 Tauri managed state。
pub struct ContactWriter<S> {
    store: S,
}

impl<S: TableStore> ContactWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 提交一份联系表单
    ///
    /// # 参数
    /// - `data` - 表单输入
    ///
    /// # 返回值
    /// 插入成功返回 `{ success: true }`；
    /// 失败返回 `{ success: false, error }`，`error` 为存储给出的描述或通用信息
    pub async fn submit(&self, data: ContactFormData) -> SubmissionResult {
        let row = ContactSubmission::from_form(data, time::now_iso8601());

        match self.insert(&row).await {
            Ok(()) => SubmissionResult::ok(),
            Err(e) => {
                log::warn!("提交联系表单失败: {}", e);
                SubmissionResult::failed(e.message().unwrap_or(GENERIC_SUBMIT_ERROR))
            }
        }
    }

    async fn insert(&self, row: &ContactSubmission) -> Result<(), StoreError> {
        let value = serde_json::to_value(row).map_err(|e| StoreError::Decode(e.to_string()))?;
        self.store.insert(CONTACT_SUBMISSIONS, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::MemoryStore;
    use serde_json::json;

    fn form() -> ContactFormData {
        ContactFormData {
            name: "Maria Oliveira".into(),
            email: "maria@modastore.com.br".into(),
            phone: None,
            company: Some("ModaStore".into()),
            service_interest: Some(vec!["s1".into(), "s2".into()]),
            message: "Gostaria de um orçamento.".into(),
        }
    }

    #[tokio::test]
    async fn test_accepted_insert_succeeds() {
        let writer = ContactWriter::new(MemoryStore::new());

        let result = writer.submit(form()).await;
        assert_eq!(result, SubmissionResult::ok());

        let inserts = writer.store.inserted();
        assert_eq!(inserts.len(), 1);
        let (table, row) = &inserts[0];
        assert_eq!(table, CONTACT_SUBMISSIONS);
        assert_eq!(row["name"], "Maria Oliveira");
        assert_eq!(row["phone"], serde_json::Value::Null);
        assert_eq!(row["service_interest"], json!(["s1", "s2"]));
        assert!(row["created_at"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_rejected_insert_reports_store_message() {
        let store = MemoryStore::new().rejecting_inserts(StoreError::Rejected {
            status: 401,
            message: "Invalid API key".into(),
        });
        let writer = ContactWriter::new(store);

        let result = writer.submit(form()).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Invalid API key"));
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_generic_text() {
        let store = MemoryStore::new().rejecting_inserts(StoreError::Network(String::new()));
        let writer = ContactWriter::new(store);

        let result = writer.submit(form()).await;
        assert_eq!(result, SubmissionResult::failed(GENERIC_SUBMIT_ERROR));
    }

    #[tokio::test]
    async fn test_duplicate_submissions_are_not_deduplicated() {
        let writer = ContactWriter::new(MemoryStore::new());
        writer.submit(form()).await;
        writer.submit(form()).await;
        assert_eq!(writer.store.inserted().len(), 2);
    }
}
