//! # 案例筛选服务
//!
//! 在已经取回的案例集合上做关键词搜索和分类筛选，供“成功案例”列表页使用。
//!
//! ## 规则
//! - 关键词：不区分大小写的子串匹配，命中 `title`、`client_name`、
//!   `problem_statement`、`category` 任一字段即保留
//! - 分类：`category` 与所选值完全相等（区分大小写）
//! - 两个条件同时存在时取交集；空白关键词、空分类都视为未设置
//! - 非空白关键词按原样匹配，首尾空格也是关键词的一部分
//! - 分类选项来自未筛选的完整集合，筛选过程中选项不会减少
//!
//! 子串匹配使用 `memchr::memmem::Finder`，关键词只编译一次，逐条复用。

use memchr::memmem::Finder;
use serde::{Deserialize, Serialize};

use crate::models::case_study::CaseStudy;

/// 列表页当前的筛选条件
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface CaseStudyFilter {
///   search: string;
///   category: string;
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
}

impl CaseStudyFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// 生效的关键词；只含空白时视为未设置，否则原样返回
    fn search_term(&self) -> Option<&str> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.as_str())
        }
    }

    fn selected_category(&self) -> Option<&str> {
        if self.category.is_empty() {
            None
        } else {
            Some(self.category.as_str())
        }
    }

    /// 是否有任一筛选条件生效
    pub fn is_active(&self) -> bool {
        self.search_term().is_some() || self.selected_category().is_some()
    }

    /// 生效中的筛选标签，顺序固定为关键词在前、分类在后
    ///
    /// 如 `Busca: "fashion"`、`Categoria: Marketing Digital`
    pub fn active_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if let Some(term) = self.search_term() {
            labels.push(format!("Busca: \"{}\"", term));
        }
        if let Some(category) = self.selected_category() {
            labels.push(format!("Categoria: {}", category));
        }
        labels
    }

    /// 在完整集合上应用筛选，保持原顺序
    ///
    /// # 参数
    /// - `all` - 未经筛选的完整案例集合
    ///
    /// # 返回值
    /// 满足全部生效条件的案例引用；没有条件时返回全部
    pub fn apply<'a>(&self, all: &'a [CaseStudy]) -> Vec<&'a CaseStudy> {
        let needle = self.search_term().map(str::to_lowercase);
        let finder = needle.as_deref().map(|n| Finder::new(n.as_bytes()));
        let category = self.selected_category();

        all.iter()
            .filter(|cs| match &finder {
                Some(finder) => matches_search(finder, cs),
                None => true,
            })
            .filter(|cs| match category {
                Some(category) => cs.category == category,
                None => true,
            })
            .collect()
    }
}

/// 关键词是否出现在任一可搜索字段中
fn matches_search(finder: &Finder<'_>, case_study: &CaseStudy) -> bool {
    [
        &case_study.title,
        &case_study.client_name,
        &case_study.problem_statement,
        &case_study.category,
    ]
    .iter()
    .any(|field| finder.find(field.to_lowercase().as_bytes()).is_some())
}

/// 完整集合中出现过的分类，去重并保持首次出现的顺序
pub fn category_options(all: &[CaseStudy]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for case_study in all {
        if !options.iter().any(|c| *c == case_study.category) {
            options.push(case_study.category.clone());
        }
    }
    options
}

/// 列表页渲染所需的全部数据
///
/// `total` 是未筛选集合的大小：`items` 为空而 `total > 0` 表示“没有匹配结果”，
/// 与“还没有数据”区分开。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyListing {
    pub items: Vec<CaseStudy>,
    pub categories: Vec<String>,
    pub active_filters: Vec<String>,
    pub total: usize,
}

impl CaseStudyListing {
    /// 由完整集合和当前筛选条件计算列表页数据
    pub fn build(all: &[CaseStudy], filter: &CaseStudyFilter) -> Self {
        Self {
            items: if filter.is_active() {
                filter.apply(all).into_iter().cloned().collect()
            } else {
                all.to_vec()
            },
            categories: category_options(all),
            active_filters: filter.active_labels(),
            total: all.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback;

    fn titles(items: &[&CaseStudy]) -> Vec<String> {
        items.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn test_no_filter_keeps_everything() {
        let all = fallback::case_studies();
        let filter = CaseStudyFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&all).len(), all.len());
    }

    #[test]
    fn test_category_selects_exact_subset() {
        let all = fallback::case_studies();
        let filter = CaseStudyFilter::new("", "Marketing Digital");

        let result = filter.apply(&all);
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|c| c.category == "Marketing Digital"));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let all = fallback::case_studies();
        assert!(CaseStudyFilter::new("", "marketing digital").apply(&all).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let all = fallback::case_studies();

        // client_name
        let by_client = CaseStudyFilter::new("fashionnow", "").apply(&all);
        assert_eq!(titles(&by_client), vec![all[0].title.clone()]);

        // problem_statement
        let by_problem = CaseStudyFilter::new("PLANILHAS", "").apply(&all);
        assert_eq!(by_problem.len(), 1);
        assert_eq!(by_problem[0].id, "cs2");

        // category
        let by_category = CaseStudyFilter::new("cloud", "").apply(&all);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, "cs5");
    }

    #[test]
    fn test_blank_search_is_no_filter() {
        let all = fallback::case_studies();
        let filter = CaseStudyFilter::new("   ", "");
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&all).len(), all.len());
        assert!(filter.active_labels().is_empty());
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_term() {
        let mut case_study = fallback::case_studies().remove(0);
        case_study.title = "CloudFirst".into();
        case_study.client_name = "NowCloud".into();
        case_study.problem_statement = "Servidores próprios".into();
        case_study.category = "Infraestrutura".into();
        let all = vec![case_study];

        assert_eq!(CaseStudyFilter::new("cloud", "").apply(&all).len(), 1);
        assert!(CaseStudyFilter::new(" cloud", "").apply(&all).is_empty());
        assert_eq!(
            CaseStudyFilter::new(" cloud", "").active_labels(),
            vec!["Busca: \" cloud\""]
        );
    }

    #[test]
    fn test_non_matching_search_with_category_is_empty() {
        let all = fallback::case_studies();
        for category in category_options(&all) {
            let filter = CaseStudyFilter::new("xyz123nonexistent", category);
            assert!(filter.apply(&all).is_empty());
        }
    }

    #[test]
    fn test_category_options_ignore_active_filter() {
        let all = fallback::case_studies();
        let unfiltered = CaseStudyListing::build(&all, &CaseStudyFilter::default());
        let filtered = CaseStudyListing::build(&all, &CaseStudyFilter::new("", "Aplicativos Móveis"));

        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.categories.len(), unfiltered.categories.len());
        assert_eq!(filtered.categories, unfiltered.categories);
        assert_eq!(filtered.total, all.len());
    }

    #[test]
    fn test_category_options_are_distinct_in_first_seen_order() {
        let mut all = fallback::case_studies();
        let mut extra = all[0].clone();
        extra.id = "cs6".into();
        all.push(extra);

        let options = category_options(&all);
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], "Marketing Digital");
    }

    #[test]
    fn test_active_labels_follow_individual_removal() {
        let mut filter = CaseStudyFilter::new("test", "Marketing Digital");
        assert_eq!(
            filter.active_labels(),
            vec!["Busca: \"test\"", "Categoria: Marketing Digital"]
        );

        filter.search.clear();
        assert_eq!(filter.active_labels(), vec!["Categoria: Marketing Digital"]);

        filter.category.clear();
        assert!(filter.active_labels().is_empty());
    }

    #[test]
    fn test_end_to_end_listing_scenario() {
        let all: Vec<CaseStudy> = fallback::case_studies().into_iter().take(2).collect();
        assert!(all[0].title.starts_with("Aumento de 400%"));
        assert_eq!(all[0].category, "Marketing Digital");
        assert!(all[1].title.starts_with("Desenvolvimento de Plataforma"));
        assert_eq!(all[1].category, "Desenvolvimento de Software");

        let mut filter = CaseStudyFilter::new("FashionNow", "");
        let listing = CaseStudyListing::build(&all, &filter);
        assert_eq!(listing.items, vec![all[0].clone()]);

        filter.search.clear();
        filter.category = "Desenvolvimento de Software".into();
        let listing = CaseStudyListing::build(&all, &filter);
        assert_eq!(listing.items, vec![all[1].clone()]);

        filter.search = "xyz123nonexistent".into();
        let listing = CaseStudyListing::build(&all, &filter);
        assert!(listing.items.is_empty());
        assert_eq!(listing.total, 2);

        // “Limpar Filtros”
        filter = CaseStudyFilter::default();
        let listing = CaseStudyListing::build(&all, &filter);
        assert_eq!(listing.items, all);
        assert_eq!(listing.categories.len(), 2);
    }
}
