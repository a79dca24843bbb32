//! 终端交互
//!
//! 模糊候选的单选框，以及逐行查询的交互模式。

use crate::cli::OutputFormat;
use crate::error::{Result, TrashSortError};
use crate::lookup;
use dialoguer::{Input, Select};
use trash_sort_common::{MatchResult, Resolver};

/// 交互模式下的一次输入
#[derive(Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// 查询
    Query(String),
    /// 空行，不做处理
    Skip,
    /// 退出
    Quit,
}

/// 解释交互模式的输入行
pub fn parse_shell_line(line: &str) -> ShellAction {
    match line.trim() {
        "" => ShellAction::Skip,
        "q" | "Q" | ":q" => ShellAction::Quit,
        text => ShellAction::Query(text.to_string()),
    }
}

/// 从候选中单选，Esc 取消时返回 None
pub fn choose_candidate(candidates: &[MatchResult]) -> Result<Option<String>> {
    let labels: Vec<String> = candidates
        .iter()
        .map(|c| format!("{} ({:.0})", c.item, c.score))
        .collect();

    let selection = Select::new()
        .with_prompt("找到以下相似物品，请选择 (Esc 取消)")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| TrashSortError::Prompt(e.to_string()))?;

    Ok(selection.map(|i| candidates[i].item.clone()))
}

/// 交互式连续查询
pub fn run_shell(resolver: &Resolver<'_>) -> Result<()> {
    println!("🗑️ 上海垃圾分类小助手");
    println!("输入垃圾名称查询所属分类，[q] 退出");
    println!("---\n");

    loop {
        let line: String = Input::new()
            .with_prompt("垃圾名称")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TrashSortError::Prompt(e.to_string()))?;

        match parse_shell_line(&line) {
            ShellAction::Skip => continue,
            ShellAction::Quit => break,
            ShellAction::Query(text) => {
                let (label, resolution) = lookup::answer(resolver, &text, None, true)?;
                lookup::print_resolution(&label, &resolution, OutputFormat::Text)?;
                println!();
            }
        }
    }

    Ok(())
}
