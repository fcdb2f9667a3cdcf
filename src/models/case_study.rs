//! # 案例数据模型
//!
//! 定义了成功案例（CaseStudy）的两种形状：
//! - `CaseStudy`：领域/IPC 形状，评价为嵌套对象 `testimonial { quote, author }`
//! - `CaseStudyRecord`：`case_studies` 表的行形状，snake_case 扁平列，
//!   评价拆成 `testimonial_quote` 和 `testimonial_author` 两个可空列
//!
//! 两者之间的转换是显式的 `From` 实现，不依赖字段名反射。
//!
//! ## 评价字段规则
//! | testimonial_quote | testimonial_author | testimonial |
//! |---|---|---|
//! | 有 | 有 | `Some { quote, author }` |
//! | 有 | 无 | `None` |
//! | 无 | 有 | `None` |
//! | 无 | 无 | `None` |
//!
//! 空白字符串等同于“无”。只有两者都存在才组装嵌套对象，部分存在按缺失处理。

use serde::{Deserialize, Serialize};

/// 案例中引用的客户评价
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyTestimonial {
    pub quote: String,
    pub author: String,
}

/// 成功案例（领域形状）
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface CaseStudy {
///   id: string;
///   slug: string;
///   title: string;
///   clientName: string;
///   problemStatement: string;
///   solutionProvided: string;
///   resultsAchieved: string[];
///   technologiesUsed: string[];
///   imageUrl: string;
///   category: string;
///   testimonial?: { quote: string; author: string };
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    /// 详情页路由标识（`/cases-de-sucesso/:slug`）
    pub slug: String,
    pub title: String,
    pub client_name: String,
    pub problem_statement: String,
    pub solution_provided: String,
    /// 有序的成果列表，按原顺序渲染
    pub results_achieved: Vec<String>,
    pub technologies_used: Vec<String>,
    pub image_url: String,
    /// 展示分类，同时作为列表页分类筛选的取值
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<CaseStudyTestimonial>,
}

/// `case_studies` 表的一行
///
/// 数组列在库里可能为 `null`，反序列化时按空列表处理。
/// `created_at` 只用于排序，不进入领域形状。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub client_name: String,
    pub problem_statement: String,
    pub solution_provided: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results_achieved: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub technologies_used: Vec<String>,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub testimonial_quote: Option<String>,
    #[serde(default)]
    pub testimonial_author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// 将 JSON `null` 数组列读为空列表
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// 丢弃空白字符串
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl CaseStudyTestimonial {
    /// 由两个扁平列组装评价，只有两者都存在时返回 `Some`
    pub fn from_parts(quote: Option<String>, author: Option<String>) -> Option<Self> {
        match (present(quote), present(author)) {
            (Some(quote), Some(author)) => Some(Self { quote, author }),
            _ => None,
        }
    }
}

impl From<CaseStudyRecord> for CaseStudy {
    fn from(record: CaseStudyRecord) -> Self {
        let testimonial =
            CaseStudyTestimonial::from_parts(record.testimonial_quote, record.testimonial_author);

        Self {
            id: record.id,
            slug: record.slug,
            title: record.title,
            client_name: record.client_name,
            problem_statement: record.problem_statement,
            solution_provided: record.solution_provided,
            results_achieved: record.results_achieved,
            technologies_used: record.technologies_used,
            image_url: record.image_url,
            category: record.category,
            testimonial,
        }
    }
}

impl From<CaseStudy> for CaseStudyRecord {
    fn from(case_study: CaseStudy) -> Self {
        // 无评价时两列都写 null，绝不出现只有一列有值的行
        let (testimonial_quote, testimonial_author) = match case_study.testimonial {
            Some(t) => (Some(t.quote), Some(t.author)),
            None => (None, None),
        };

        Self {
            id: case_study.id,
            slug: case_study.slug,
            title: case_study.title,
            client_name: case_study.client_name,
            problem_statement: case_study.problem_statement,
            solution_provided: case_study.solution_provided,
            results_achieved: case_study.results_achieved,
            technologies_used: case_study.technologies_used,
            image_url: case_study.image_url,
            category: case_study.category,
            testimonial_quote,
            testimonial_author,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(quote: Option<&str>, author: Option<&str>) -> CaseStudyRecord {
        serde_json::from_value(json!({
            "id": "cs1",
            "slug": "aumento-de-conversoes-para-e-commerce-de-moda",
            "title": "Aumento de 400% nas conversões",
            "client_name": "FashionNow",
            "problem_statement": "Baixas taxas de conversão",
            "solution_provided": "Otimização do funil",
            "results_achieved": ["Aumento de 400% na taxa de conversão"],
            "technologies_used": ["Google Analytics"],
            "image_url": "https://picsum.photos/seed/case1/800/600",
            "category": "Marketing Digital",
            "testimonial_quote": quote,
            "testimonial_author": author,
            "created_at": "2024-01-10T12:00:00+00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_record_with_quote_and_author_builds_testimonial() {
        let case_study = CaseStudy::from(record(Some("A parceria com a Delagil"), Some("Ana Costa")));
        assert_eq!(
            case_study.testimonial,
            Some(CaseStudyTestimonial {
                quote: "A parceria com a Delagil".into(),
                author: "Ana Costa".into(),
            })
        );
        assert_eq!(case_study.client_name, "FashionNow");
        assert_eq!(case_study.results_achieved, vec!["Aumento de 400% na taxa de conversão"]);
    }

    #[test]
    fn test_partial_testimonial_is_dropped() {
        assert_eq!(CaseStudy::from(record(Some("Só a citação"), None)).testimonial, None);
        assert_eq!(CaseStudy::from(record(None, Some("Só o autor"))).testimonial, None);
        assert_eq!(CaseStudy::from(record(None, None)).testimonial, None);
    }

    #[test]
    fn test_blank_testimonial_parts_count_as_absent() {
        assert_eq!(CaseStudy::from(record(Some("  "), Some("Ana Costa"))).testimonial, None);
        assert_eq!(CaseStudy::from(record(Some("Citação"), Some(""))).testimonial, None);
    }

    #[test]
    fn test_null_array_columns_become_empty() {
        let row: CaseStudyRecord = serde_json::from_value(json!({
            "id": "cs9",
            "slug": "sem-listas",
            "title": "Sem listas",
            "client_name": "Cliente",
            "problem_statement": "p",
            "solution_provided": "s",
            "results_achieved": null,
            "image_url": "https://example.com/x.png",
            "category": "Consultoria Estratégica"
        }))
        .unwrap();
        let case_study = CaseStudy::from(row);
        assert!(case_study.results_achieved.is_empty());
        assert!(case_study.technologies_used.is_empty());
        assert_eq!(case_study.testimonial, None);
    }

    #[test]
    fn test_domain_to_record_splits_or_nulls_testimonial() {
        let with = CaseStudy::from(record(Some("Citação"), Some("Autor")));
        let row = CaseStudyRecord::from(with);
        assert_eq!(row.testimonial_quote.as_deref(), Some("Citação"));
        assert_eq!(row.testimonial_author.as_deref(), Some("Autor"));

        let without = CaseStudy::from(record(Some("Citação"), None));
        let row = CaseStudyRecord::from(without);
        assert_eq!(row.testimonial_quote, None);
        assert_eq!(row.testimonial_author, None);
    }

    #[test]
    fn test_ipc_shape_omits_missing_testimonial() {
        let value = serde_json::to_value(CaseStudy::from(record(None, None))).unwrap();
        assert!(value.get("testimonial").is_none());
        assert_eq!(value["clientName"], "FashionNow");
        assert_eq!(value["technologiesUsed"], json!(["Google Analytics"]));
    }
}
