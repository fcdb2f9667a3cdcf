//! # 站点内容 Tauri Commands
//!
//! 提供页面加载时调用的内容读取 command：
//! - `list_service_categories` / `list_services` - 服务总览
//! - `list_services_by_category` / `get_service_category_page` - 服务分类详情页
//! - `list_portfolio_items` - 作品集
//! - `list_testimonials` - 首页客户评价
//! - `list_case_studies` / `get_case_study` - 成功案例列表和详情
//! - `filter_case_studies` - 案例列表页的搜索和分类筛选
//!
//! 读取 command 永远成功：远程存储失败时仓库层已经回退到内置数据。
//! 返回 `Result` 只是因为带 `State` 引用的异步 command 必须返回 `Result`。

use tauri::State;

use crate::commands::SiteRepository;
use crate::models::case_study::CaseStudy;
use crate::models::content::{
    PortfolioItem, Service, ServiceCategory, ServiceCategoryPage, Testimonial,
};
use crate::services::case_filter::{CaseStudyFilter, CaseStudyListing};
use crate::services::repository::Sourced;

/// 取出数据；来自内置数据时记一条 info 日志，便于在开发时发现存储配置问题
fn serve<T>(command: &str, result: Sourced<T>) -> Result<T, String> {
    if result.is_fallback() {
        log::info!("{}: 使用内置数据响应", command);
    }
    Ok(result.into_inner())
}

/// 获取全部服务分类
#[tauri::command]
pub async fn list_service_categories(
    repo: State<'_, SiteRepository>,
) -> Result<Vec<ServiceCategory>, String> {
    serve("list_service_categories", repo.list_service_categories().await)
}

/// 获取全部服务
#[tauri::command]
pub async fn list_services(repo: State<'_, SiteRepository>) -> Result<Vec<Service>, String> {
    serve("list_services", repo.list_services().await)
}

/// 获取指定分类下的服务
///
/// # 参数
/// - `category_slug` - 路由中的分类 slug（前端传 `categorySlug`）
///
/// # 返回值
/// 未知 slug 返回空数组
#[tauri::command]
pub async fn list_services_by_category(
    category_slug: String,
    repo: State<'_, SiteRepository>,
) -> Result<Vec<Service>, String> {
    serve(
        "list_services_by_category",
        repo.list_services_by_category_slug(&category_slug).await,
    )
}

/// 获取服务分类详情页的数据（分类 + 服务）
///
/// # 返回值
/// 未知 slug 时 `category` 为 `null`，前端渲染“未找到”页面
#[tauri::command]
pub async fn get_service_category_page(
    category_slug: String,
    repo: State<'_, SiteRepository>,
) -> Result<ServiceCategoryPage, String> {
    serve(
        "get_service_category_page",
        repo.service_category_page(&category_slug).await,
    )
}

/// 获取全部作品集条目
#[tauri::command]
pub async fn list_portfolio_items(
    repo: State<'_, SiteRepository>,
) -> Result<Vec<PortfolioItem>, String> {
    serve("list_portfolio_items", repo.list_portfolio_items().await)
}

/// 获取全部客户评价
#[tauri::command]
pub async fn list_testimonials(
    repo: State<'_, SiteRepository>,
) -> Result<Vec<Testimonial>, String> {
    serve("list_testimonials", repo.list_testimonials().await)
}

/// 获取全部成功案例
#[tauri::command]
pub async fn list_case_studies(repo: State<'_, SiteRepository>) -> Result<Vec<CaseStudy>, String> {
    serve("list_case_studies", repo.list_case_studies().await)
}

/// 按 slug 获取单个成功案例
///
/// # 返回值
/// 未找到时返回 `null`，前端渲染“未找到”页面而不是错误提示
#[tauri::command]
pub async fn get_case_study(
    slug: String,
    repo: State<'_, SiteRepository>,
) -> Result<Option<CaseStudy>, String> {
    serve("get_case_study", repo.get_case_study_by_slug(&slug).await)
}

/// 在页面已加载的案例集合上应用筛选
///
/// 页面持有完整集合，每次关键词或分类变化时连同当前条件一起传入，
/// 返回筛选结果、完整的分类选项和生效中的筛选标签。
///
/// # 参数
/// - `case_studies` - 未筛选的完整集合（`list_case_studies` 的结果）
/// - `filter` - 当前筛选条件
#[tauri::command]
pub fn filter_case_studies(
    case_studies: Vec<CaseStudy>,
    filter: CaseStudyFilter,
) -> CaseStudyListing {
    CaseStudyListing::build(&case_studies, &filter)
}
