//! # 站点内容数据模型
//!
//! 定义了服务分类（ServiceCategory）、服务（Service）、作品集条目（PortfolioItem）
//! 和客户评价（Testimonial）的 Rust 结构体，对应前端 TypeScript 中的同名接口。
//!
//! 这些记录只读、不可变：本层从不创建、修改或删除它们，
//! 远程表和内置数据中的记录形状完全一致。
//!
//! IPC 方向和远程表的列名都使用 camelCase（如 `categoryId`、`imageUrl`），
//! 仓库层的过滤列名也以此为准。列名不符的行按形状异常处理，整表回退到内置数据。
//! 成功案例表例外，它使用 snake_case 列，见 `case_study.rs`。

use serde::{Deserialize, Serialize};

/// 服务分类
///
/// 对应 `service_categories` 表的一行，以及服务总览页上的一张分类卡片。
/// `slug` 用于路由（`/servicos/:categorySlug`），与 `id` 相互独立。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ServiceCategory {
///   id: string;
///   slug: string;
///   title: string;
///   description: string;
///   iconName: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    /// 前端图标集中的图标名（如 "Megaphone"），这里不做校验
    pub icon_name: String,
}

/// 服务
///
/// `category_id` 指向 `ServiceCategory.id`，但不做引用完整性检查：
/// 悬空的 `category_id` 只会导致该服务不出现在任何分类页中。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub category_id: String,
    pub title: String,
    /// 卡片上的一句话简介
    pub short_description: String,
    /// 分类详情页上的完整说明
    pub long_description: String,
    pub icon_name: String,
}

/// 作品集条目
///
/// `category` 是冗余的展示标签（自由文本），不是外键。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    /// 线上项目或案例链接（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// 客户评价
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    /// 作者职位与公司，如 "CEO da InovaTech"
    pub company: String,
}

/// 服务分类详情页的数据
///
/// 分类本身和该分类下的服务一起返回，前端只需一次 `invoke`。
/// 未知 slug 时 `category` 为 `None`、`services` 为空，前端据此渲染“未找到”页面。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategoryPage {
    pub category: Option<ServiceCategory>,
    pub services: Vec<Service>,
}
