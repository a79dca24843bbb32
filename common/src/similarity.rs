//! 字符串相似度
//!
//! 按字符（而非字节）计算，中文物品名称一个汉字计为一个单位。
//! 所有得分都落在 0–100 区间，完全相同为 100。

use serde::{Deserialize, Serialize};

/// 相似度算法
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scorer {
    /// 插入/删除编辑距离比（最长公共子序列）
    #[default]
    Ratio,
    /// 按较长字符串归一化的 Levenshtein 距离
    Levenshtein,
}

impl Scorer {
    pub fn score(&self, a: &str, b: &str) -> f64 {
        match self {
            Scorer::Ratio => ratio(a, b),
            Scorer::Levenshtein => levenshtein_ratio(a, b),
        }
    }
}

impl std::str::FromStr for Scorer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ratio" | "indel" => Ok(Scorer::Ratio),
            "levenshtein" | "lev" => Ok(Scorer::Levenshtein),
            _ => Err(format!("Unknown scorer: {}. Use ratio or levenshtein", s)),
        }
    }
}

impl std::fmt::Display for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scorer::Ratio => write!(f, "ratio"),
            Scorer::Levenshtein => write!(f, "levenshtein"),
        }
    }
}

/// 插入/删除距离比: 200 * LCS / (|a| + |b|)
pub fn ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    let lcs = lcs_len(&a_chars, &b_chars);
    200.0 * lcs as f64 / total as f64
}

/// 1 - lev(a, b) / max(|a|, |b|)，换算为 0–100
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    100.0 * (1.0 - distance as f64 / max_len as f64)
}

/// 计算 Levenshtein 距离
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // 只保留上一行
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// 最长公共子序列长度
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
