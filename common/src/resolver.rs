//! 查询解析
//!
//! 自由文本 → 分类结果。处理顺序:
//! 1. 去除首尾空白，空输入不做任何处理
//! 2. 完全一致（区分大小写）直接返回类别
//! 3. 模糊匹配：对全部物品打分，取得分不低于阈值的前 K 个候选
//! 4. 无候选时退回子串匹配，只给出建议，不给类别
//! 5. 都没有则为“未找到”
//!
//! 每次查询互相独立，解析器本身不保存任何状态。

use crate::category::Category;
use crate::similarity::Scorer;
use crate::table::ClassificationTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 默认候选数
pub const DEFAULT_LIMIT: usize = 5;
/// 默认相似度阈值（0–100，含）
pub const DEFAULT_THRESHOLD: f64 = 50.0;
/// 默认子串建议数
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// 解析参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// 模糊候选上限
    pub limit: usize,
    /// 相似度阈值
    pub threshold: f64,
    /// 子串建议上限
    pub suggestion_limit: usize,
    pub scorer: Scorer,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            threshold: DEFAULT_THRESHOLD,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            scorer: Scorer::default(),
        }
    }
}

/// 模糊匹配候选
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub item: String,
    /// 相似度（0–100）
    pub score: f64,
}

/// 物品及其类别
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub item: String,
    pub category: Category,
}

/// 查询结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// 空输入
    Empty,
    /// 完全一致
    Exact(Classification),
    /// 模糊候选，待用户选择
    Candidates { candidates: Vec<MatchResult> },
    /// 子串建议（不含类别）
    Suggestions { suggestions: Vec<String> },
    NotFound,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Exact(_))
    }
}

/// 查询解析器
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a ClassificationTable,
    options: ResolverOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a ClassificationTable, options: ResolverOptions) -> Self {
        Self { table, options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn table(&self) -> &'a ClassificationTable {
        self.table
    }

    /// 解析一条查询
    pub fn resolve(&self, input: &str) -> Resolution {
        let query = input.trim();
        if query.is_empty() {
            return Resolution::Empty;
        }

        if let Some(found) = self.classify(query) {
            debug!(query, category = %found.category, "exact match");
            return Resolution::Exact(found);
        }

        let candidates = self.fuzzy_candidates(query);
        if !candidates.is_empty() {
            debug!(query, count = candidates.len(), "fuzzy candidates");
            return Resolution::Candidates { candidates };
        }

        let suggestions = self.substring_suggestions(query);
        if !suggestions.is_empty() {
            debug!(query, count = suggestions.len(), "substring suggestions");
            return Resolution::Suggestions { suggestions };
        }

        debug!(query, "not found");
        Resolution::NotFound
    }

    /// 完全一致查询（输入先去除首尾空白）
    pub fn classify(&self, item: &str) -> Option<Classification> {
        let item = item.trim();
        self.table.lookup_category(item).map(|category| Classification {
            item: item.to_string(),
            category,
        })
    }

    /// 用户从候选中选定后，按完全一致取得类别
    pub fn select(&self, candidate: &str) -> Option<Classification> {
        self.classify(candidate)
    }

    /// 模糊候选：得分降序，同分保持对照表顺序
    pub fn fuzzy_candidates(&self, query: &str) -> Vec<MatchResult> {
        let query = query.trim();
        if query.is_empty() || self.options.limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<MatchResult> = self
            .table
            .all_items()
            .map(|(item, _)| MatchResult {
                item: item.to_string(),
                score: self.options.scorer.score(query, item),
            })
            .filter(|m| m.score >= self.options.threshold)
            .collect();

        // sort_by 为稳定排序
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.options.limit);
        scored
    }

    /// 包含查询文本的物品（对照表顺序）
    pub fn substring_suggestions(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        self.table
            .all_items()
            .filter(|(item, _)| item.contains(query))
            .map(|(item, _)| item.to_string())
            .take(self.options.suggestion_limit)
            .collect()
    }
}

/// 使用内置分类表和默认参数解析
pub fn resolve(input: &str) -> Resolution {
    Resolver::new(ClassificationTable::shanghai(), ResolverOptions::default()).resolve(input)
}
