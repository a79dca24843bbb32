//! 分类指南与数据检查

use crate::cli::OutputFormat;
use crate::error::Result;
use tracing::{debug, warn};
use trash_sort_common::{Category, ClassificationTable, DuplicateItem};

/// 指南文本（可只显示一个类别）
pub fn render_guide(table: &ClassificationTable, only: Option<Category>) -> Vec<String> {
    let mut lines = Vec::new();

    for group in table.groups() {
        if only.is_some_and(|c| c != group.category) {
            continue;
        }
        lines.push(format!("{}（共{}种）", group.category, group.items.len()));
        lines.push(format!("  {}", group.items.join("、")));
    }

    lines
}

pub fn print_guide(
    table: &ClassificationTable,
    only: Option<Category>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => match only {
            Some(category) => {
                println!("{}", serde_json::to_string_pretty(table.items(category))?)
            }
            None => println!("{}", table.to_json()?),
        },
        OutputFormat::Text => {
            for line in render_guide(table, only) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn describe_duplicate(duplicate: &DuplicateItem) -> String {
    if duplicate.is_conflict() {
        format!(
            "⚠ 『{}』同时登记在 {} 和 {}（查询时按 {} 处理）",
            duplicate.item, duplicate.first, duplicate.repeated, duplicate.first
        )
    } else {
        format!("- 『{}』在 {} 中重复登记", duplicate.item, duplicate.first)
    }
}

/// 数据完整性报告
pub fn integrity_report(table: &ClassificationTable) -> Vec<String> {
    let duplicates = table.duplicates();
    if duplicates.is_empty() {
        return vec![format!("✔ {}种物品，没有重复登记", table.len())];
    }

    let conflicts = table.conflicts().count();
    let mut lines = vec![format!(
        "{}种物品，重复登记{}处（跨类别冲突{}处）",
        table.len(),
        duplicates.len(),
        conflicts
    )];
    lines.extend(duplicates.iter().map(describe_duplicate));
    lines
}

/// 启动时把重复登记写入日志
pub fn log_integrity(table: &ClassificationTable) {
    for duplicate in table.duplicates() {
        if duplicate.is_conflict() {
            warn!(
                item = %duplicate.item,
                first = %duplicate.first,
                repeated = %duplicate.repeated,
                "item listed under two categories"
            );
        } else {
            debug!(item = %duplicate.item, category = %duplicate.first, "item listed twice");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_guide_all() {
        let lines = render_guide(ClassificationTable::shanghai(), None);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "可回收物（共34种）");
        assert_eq!(lines[2], "有害垃圾（共28种）");
        assert_eq!(lines[6], "干垃圾（共47种）");
    }

    #[test]
    fn test_render_guide_single_category() {
        let lines = render_guide(ClassificationTable::shanghai(), Some(Category::Wet));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "湿垃圾（共30种）");
        assert!(lines[1].starts_with("  剩菜剩饭、菜叶"));
    }

    #[test]
    fn test_integrity_report_shanghai() {
        let lines = integrity_report(ClassificationTable::shanghai());
        assert_eq!(lines[0], "139种物品，重复登记1处（跨类别冲突0处）");
        assert_eq!(lines[1], "- 『打火机』在 干垃圾 中重复登记");
    }

    #[test]
    fn test_integrity_report_conflict() {
        let entries: &[(Category, &[&str])] = &[
            (Category::Recyclable, &["纸杯"]),
            (Category::Dry, &["纸杯"]),
        ];
        let table = ClassificationTable::from_entries(entries);
        let lines = integrity_report(&table);
        assert_eq!(lines[1], "⚠ 『纸杯』同时登记在 可回收物 和 干垃圾（查询时按 可回收物 处理）");
    }

    #[test]
    fn test_integrity_report_clean() {
        let entries: &[(Category, &[&str])] = &[(Category::Hazardous, &["电池"])];
        let table = ClassificationTable::from_entries(entries);
        assert_eq!(integrity_report(&table), vec!["✔ 1种物品，没有重复登记"]);
    }
}
