//! 查询流程与结果输出
//!
//! 解析本身在共通库中完成，这里只负责候选选择和文本/JSON 输出。

use crate::cli::{MatchArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::prompt;
use trash_sort_common::{Classification, Resolution, Resolver, ResolverOptions};

/// 不确定时的提示
pub const DRY_HINT: &str = "提示：不确定分类时请选择干垃圾";

/// 命令行参数覆盖配置文件中的匹配参数
pub fn resolver_options(config: &Config, matching: &MatchArgs) -> Result<ResolverOptions> {
    let mut merged = config.clone();
    if let Some(threshold) = matching.threshold {
        merged.threshold = threshold;
    }
    if let Some(limit) = matching.limit {
        merged.limit = limit;
    }
    if let Some(scorer) = matching.scorer {
        merged.scorer = scorer;
    }
    merged.validate()?;
    Ok(merged.resolver_options())
}

/// 候选被选定后按完全一致解析
pub fn resolve_choice(resolver: &Resolver<'_>, choice: &str) -> Resolution {
    resolver
        .select(choice)
        .map(Resolution::Exact)
        .unwrap_or(Resolution::NotFound)
}

/// 解析查询，必要时让用户从候选中选择
///
/// `select` 优先；未指定且 `interactive` 为真时弹出选择框。
/// 返回值中的字符串是用于显示的查询文本（选定后为选定的物品）。
pub fn answer(
    resolver: &Resolver<'_>,
    text: &str,
    select: Option<&str>,
    interactive: bool,
) -> Result<(String, Resolution)> {
    let resolution = resolver.resolve(text);

    let choice = match (&resolution, select) {
        (Resolution::Candidates { .. }, Some(choice)) => Some(choice.trim().to_string()),
        (Resolution::Candidates { candidates }, None) if interactive => {
            prompt::choose_candidate(candidates)?
        }
        _ => None,
    };

    match choice {
        Some(choice) => {
            let resolved = resolve_choice(resolver, &choice);
            Ok((choice, resolved))
        }
        None => Ok((text.trim().to_string(), resolution)),
    }
}

/// 文本输出
pub fn render(label: &str, resolution: &Resolution) -> Vec<String> {
    match resolution {
        Resolution::Empty => vec!["请输入垃圾名称，例如：电池、塑料袋...".to_string()],
        Resolution::Exact(found) => vec![render_classification(found)],
        Resolution::Candidates { candidates } => {
            let mut lines = vec![format!("🔍 与『{}』相似的物品：", label)];
            for (i, candidate) in candidates.iter().enumerate() {
                lines.push(format!("  {}) {} ({:.0})", i + 1, candidate.item, candidate.score));
            }
            lines.push("使用 --select 指定物品以查询分类".to_string());
            lines
        }
        Resolution::Suggestions { suggestions } => vec![
            not_found_line(label),
            "💡 类似物品建议：".to_string(),
            suggestions.join(", "),
        ],
        Resolution::NotFound => vec![
            not_found_line(label),
            "💡 类似物品建议：".to_string(),
            "暂无类似物品".to_string(),
            DRY_HINT.to_string(),
        ],
    }
}

pub fn render_classification(found: &Classification) -> String {
    format!("『{}』属于：{}", found.item, found.category)
}

fn not_found_line(label: &str) -> String {
    format!("未找到『{}』的分类，请尝试其他名称", label)
}

/// 输出一次查询结果
pub fn print_resolution(label: &str, resolution: &Resolution, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(resolution)?),
        OutputFormat::Text => {
            for line in render(label, resolution) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trash_sort_common::{resolve, Category, ClassificationTable, Scorer};

    fn resolver() -> Resolver<'static> {
        Resolver::new(ClassificationTable::shanghai(), ResolverOptions::default())
    }

    #[test]
    fn test_render_exact() {
        let lines = render("电池", &resolve("电池"));
        assert_eq!(lines, vec!["『电池』属于：有害垃圾"]);
    }

    #[test]
    fn test_render_not_found() {
        let lines = render("xyz123nonsense", &resolve("xyz123nonsense"));
        assert_eq!(lines[0], "未找到『xyz123nonsense』的分类，请尝试其他名称");
        assert!(lines.contains(&"暂无类似物品".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some(DRY_HINT));
    }

    #[test]
    fn test_render_suggestions() {
        let lines = render("装", &resolve("装"));
        assert_eq!(lines[2], "包装纸盒, 塑料包装盒, 食品包装袋, 快递包装");
    }

    #[test]
    fn test_render_candidates() {
        let lines = render("塑料", &resolve("塑料"));
        assert_eq!(lines[0], "🔍 与『塑料』相似的物品：");
        assert_eq!(lines[1], "  1) 塑料瓶 (80)");
    }

    #[test]
    fn test_answer_with_selection() {
        let (label, resolution) = answer(&resolver(), "塑料", Some("塑料袋"), false).unwrap();
        assert_eq!(label, "塑料袋");
        assert_eq!(
            resolution,
            Resolution::Exact(Classification {
                item: "塑料袋".to_string(),
                category: Category::Dry,
            })
        );
    }

    #[test]
    fn test_answer_selection_ignored_for_exact() {
        let (label, resolution) = answer(&resolver(), "电池", Some("塑料袋"), false).unwrap();
        assert_eq!(label, "电池");
        assert!(resolution.is_found());
    }

    #[test]
    fn test_answer_without_selection_keeps_candidates() {
        let (_, resolution) = answer(&resolver(), "塑料", None, false).unwrap();
        assert!(matches!(resolution, Resolution::Candidates { .. }));
    }

    #[test]
    fn test_answer_unknown_selection() {
        let (_, resolution) = answer(&resolver(), "塑料", Some("塑料"), false).unwrap();
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[test]
    fn test_resolver_options_override() {
        let matching = MatchArgs {
            threshold: Some(70.0),
            limit: None,
            scorer: Some(Scorer::Levenshtein),
        };
        let options = resolver_options(&Config::default(), &matching).unwrap();
        assert_eq!(options.threshold, 70.0);
        assert_eq!(options.limit, 5);
        assert_eq!(options.scorer, Scorer::Levenshtein);

        let invalid = MatchArgs {
            limit: Some(0),
            ..Default::default()
        };
        assert!(resolver_options(&Config::default(), &invalid).is_err());
    }
}
