//! # Delagil 网站后端 - Tauri 应用核心初始化模块
//!
//! 本模块负责应用的完整初始化流程：
//! - 注册 Tauri 官方插件（日志、外部链接）
//! - 从环境变量加载远程存储配置，构造存储客户端并注册为 managed state
//! - 注册页面调用的 Tauri commands
//!
//! ## 两级失败策略
//! - 启动配置缺失：致命错误，`setup` 返回错误，应用不会启动
//! - 单次读取失败：仓库层回退到内置数据，页面照常渲染
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 核心业务逻辑（存储、内容仓库、表单写入、案例筛选）
//! - `utils/` - 通用工具函数（启动配置、时间戳）

mod commands;
mod models;
mod services;
mod utils;

use tauri::Manager;

use services::contact::ContactWriter;
use services::repository::ContentRepository;
use services::store::RestStore;
use utils::env::StoreConfig;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 1. 注册日志插件（调试构建 Info 级别，发布构建 Warn 级别）和外部链接插件
/// 2. 在 `setup` 钩子中加载配置并注入内容仓库和联系表单写入器
/// 3. 注册所有自定义 Tauri commands
/// 4. 生成应用上下文并启动主事件循环
///
/// # Panics
/// `SUPABASE_URL` 或 `SUPABASE_ANON_KEY` 缺失时 `setup` 失败，
/// 应用启动通过 `.expect()` 中止。
pub fn run() {
    let log_level = if cfg!(debug_assertions) {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::default().level(log_level).build())
        // 作品集项目链接和社交媒体链接在系统浏览器中打开
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config = StoreConfig::from_env().inspect_err(|e| {
                log::error!("启动配置无效，应用退出: {}", e);
            })?;
            let store = RestStore::new(&config)?;

            log::info!("远程存储地址: {}", config.url);
            app.manage(ContentRepository::new(store.clone()));
            app.manage(ContactWriter::new(store));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // 站点内容 commands
            commands::content::list_service_categories,
            commands::content::list_services,
            commands::content::list_services_by_category,
            commands::content::get_service_category_page,
            commands::content::list_portfolio_items,
            commands::content::list_testimonials,
            commands::content::list_case_studies,
            commands::content::get_case_study,
            commands::content::filter_case_studies,
            // 联系表单 commands
            commands::contact::submit_contact_form,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
