//! # 内容仓库服务
//!
//! 每类内容一个读取方法，统一遵循“失败即回退”策略：
//! 1. 按稳定的排序键查询远程表
//! 2. 成功时返回规范化后的领域记录（`Sourced::Remote`）
//! 3. 任何失败（网络错误、非 2xx、响应形状不符）记录 warn 日志，
//!    返回对应的完整内置数据集（`Sourced::Fallback`）
//!
//! 调用方永远拿到可渲染的数据，不会看到错误；
//! 返回值是来源还是回退，由 `Sourced` 的变体在类型上显式区分。
//!
//! ## 未找到
//! 未知的分类 slug 返回空列表，未知的案例 slug 返回 `None`。
//! 这两种情况都不是错误，也不会触发回退。
//!
//! ## 并发
//! 每次调用是一次独立的往返，调用之间不做协调。
//! 同一页面重叠的请求谁后返回谁决定最终显示的数据。

use serde::de::DeserializeOwned;

use crate::models::case_study::{CaseStudy, CaseStudyRecord};
use crate::models::content::{
    PortfolioItem, Service, ServiceCategory, ServiceCategoryPage, Testimonial,
};
use crate::services::fallback;
use crate::services::store::{
    StoreError, TableQuery, TableStore, CASE_STUDIES, PORTFOLIO_ITEMS, SERVICES,
    SERVICE_CATEGORIES, TESTIMONIALS,
};

/// `services` 表中指向分类的列，与 `Service` 的序列化字段名一致
const SERVICE_CATEGORY_COLUMN: &str = "categoryId";

/// 读取结果的来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    /// 远程存储的查询结果
    Remote(T),
    /// 远程存储失败后使用的内置数据
    Fallback(T),
}

impl<T> Sourced<T> {
    /// 取出数据，丢弃来源信息
    pub fn into_inner(self) -> T {
        match self {
            Sourced::Remote(v) | Sourced::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }
}

/// 在内存中按分类 slug 联结服务
///
/// 先按 slug 找到分类，再按 `category_id == category.id` 过滤服务，保持原顺序。
/// slug 不存在时返回空列表。远程联结和回退路径共用同一语义。
pub fn services_in_category(
    categories: &[ServiceCategory],
    services: &[Service],
    slug: &str,
) -> Vec<Service> {
    let Some(category) = categories.iter().find(|c| c.slug == slug) else {
        return vec![];
    };

    services
        .iter()
        .filter(|s| s.category_id == category.id)
        .cloned()
        .collect()
}

/// 内容仓库
///
/// 持有显式构造的存储客户端，由 `lib.rs` 注册为 Tauri managed state。
pub struct ContentRepository<S> {
    store: S,
}

impl<S: TableStore> ContentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // ======== 通用查询 ========

    /// 执行查询并把每一行反序列化为 `T`；任意一行不符即整体失败
    async fn fetch<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>, StoreError> {
        let rows = self.store.select(query).await?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| StoreError::Decode(e.to_string())))
            .collect()
    }

    /// 整表查询，失败时回退到内置数据集
    async fn list_or_fallback<T: DeserializeOwned>(
        &self,
        query: TableQuery,
        fallback: fn() -> Vec<T>,
    ) -> Sourced<Vec<T>> {
        match self.fetch(&query).await {
            Ok(rows) => Sourced::Remote(rows),
            Err(e) => {
                log::warn!("读取 {} 失败，改用内置数据: {}", query.table, e);
                Sourced::Fallback(fallback())
            }
        }
    }

    // ======== 各类内容 ========

    /// 全部服务分类，按 id 排序
    pub async fn list_service_categories(&self) -> Sourced<Vec<ServiceCategory>> {
        self.list_or_fallback(
            TableQuery::new(SERVICE_CATEGORIES).order_by("id"),
            fallback::service_categories,
        )
        .await
    }

    /// 全部服务，按 id 排序
    pub async fn list_services(&self) -> Sourced<Vec<Service>> {
        self.list_or_fallback(TableQuery::new(SERVICES).order_by("id"), fallback::services)
            .await
    }

    /// 指定分类 slug 下的服务
    ///
    /// 远程路径：先按 slug 查分类，再按分类 id 查服务。
    /// 两次查询任一失败都回退，并在内置的两个数据集上执行同样的联结。
    ///
    /// # 返回值
    /// slug 不存在时返回空列表（不是错误，也不回退）
    pub async fn list_services_by_category_slug(&self, slug: &str) -> Sourced<Vec<Service>> {
        match self.fetch_services_by_category_slug(slug).await {
            Ok(services) => Sourced::Remote(services),
            Err(e) => {
                log::warn!("读取分类 {} 的服务失败，改用内置数据: {}", slug, e);
                Sourced::Fallback(services_in_category(
                    &fallback::service_categories(),
                    &fallback::services(),
                    slug,
                ))
            }
        }
    }

    async fn fetch_services_by_category_slug(&self, slug: &str) -> Result<Vec<Service>, StoreError> {
        let categories: Vec<ServiceCategory> = self
            .fetch(&TableQuery::new(SERVICE_CATEGORIES).eq("slug", slug).limit(1))
            .await?;

        let Some(category) = categories.into_iter().next() else {
            return Ok(vec![]);
        };

        self.fetch(
            &TableQuery::new(SERVICES)
                .eq(SERVICE_CATEGORY_COLUMN, &category.id)
                .order_by("id"),
        )
        .await
    }

    /// 服务分类详情页：分类本身 + 分类下的服务
    ///
    /// 两部分各自独立回退；只要任一部分来自内置数据，整体标记为 `Fallback`。
    pub async fn service_category_page(&self, slug: &str) -> Sourced<ServiceCategoryPage> {
        let services = self.list_services_by_category_slug(slug).await;
        let categories = self.list_service_categories().await;
        let from_fallback = services.is_fallback() || categories.is_fallback();

        let page = ServiceCategoryPage {
            category: categories.into_inner().into_iter().find(|c| c.slug == slug),
            services: services.into_inner(),
        };

        if from_fallback {
            Sourced::Fallback(page)
        } else {
            Sourced::Remote(page)
        }
    }

    /// 全部作品集条目，按 id 排序
    pub async fn list_portfolio_items(&self) -> Sourced<Vec<PortfolioItem>> {
        self.list_or_fallback(
            TableQuery::new(PORTFOLIO_ITEMS).order_by("id"),
            fallback::portfolio_items,
        )
        .await
    }

    /// 全部客户评价，按 id 排序
    pub async fn list_testimonials(&self) -> Sourced<Vec<Testimonial>> {
        self.list_or_fallback(
            TableQuery::new(TESTIMONIALS).order_by("id"),
            fallback::testimonials,
        )
        .await
    }

    /// 全部成功案例，按创建时间排序，表行映射为领域形状
    pub async fn list_case_studies(&self) -> Sourced<Vec<CaseStudy>> {
        let query = TableQuery::new(CASE_STUDIES).order_by("created_at");
        match self.fetch::<CaseStudyRecord>(&query).await {
            Ok(records) => Sourced::Remote(records.into_iter().map(CaseStudy::from).collect()),
            Err(e) => {
                log::warn!("读取 {} 失败，改用内置数据: {}", query.table, e);
                Sourced::Fallback(fallback::case_studies())
            }
        }
    }

    /// 按 slug 查找单个案例
    ///
    /// # 返回值
    /// - 远程查询成功：命中返回 `Some`，未命中返回 `None`（不再查内置数据）
    /// - 远程查询失败：在内置数据中按 slug 查找
    pub async fn get_case_study_by_slug(&self, slug: &str) -> Sourced<Option<CaseStudy>> {
        let query = TableQuery::new(CASE_STUDIES).eq("slug", slug).limit(1);
        match self.fetch::<CaseStudyRecord>(&query).await {
            Ok(records) => Sourced::Remote(records.into_iter().next().map(CaseStudy::from)),
            Err(e) => {
                log::warn!("读取案例 {} 失败，改用内置数据: {}", slug, e);
                Sourced::Fallback(fallback::case_studies().into_iter().find(|c| c.slug == slug))
            }
        }
    }
}
