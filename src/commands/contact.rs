//! # 联系表单 Tauri Commands
//!
//! - `submit_contact_form` - 提交联系表单，结果总是 `{ success, error? }`

use tauri::State;

use crate::commands::SiteContactWriter;
use crate::models::contact::{ContactFormData, SubmissionResult};

/// 提交联系表单
///
/// 写入失败不会成为 IPC 错误，而是以 `{ success: false, error }` 返回，
/// 由表单展示错误信息并允许用户再次提交。
///
/// # 参数
/// - `data` - 表单输入（必填项已由表单校验）
/// - `writer` - Tauri managed state，联系表单写入器
#[tauri::command]
pub async fn submit_contact_form(
    data: ContactFormData,
    writer: State<'_, SiteContactWriter>,
) -> Result<SubmissionResult, String> {
    Ok(writer.submit(data).await)
}
