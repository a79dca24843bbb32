use clap::{Args, Parser, Subcommand};
use trash_sort_common::{Category, Scorer};

#[derive(Parser)]
#[command(name = "trash-sort")]
#[command(about = "上海生活垃圾分类查询工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 查询垃圾所属分类
    Query {
        /// 垃圾名称
        #[arg(required = true)]
        text: String,

        /// 从模糊候选中直接选定的物品
        #[arg(short, long)]
        select: Option<String>,

        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 不弹出候选选择框
        #[arg(long)]
        no_interactive: bool,

        #[command(flatten)]
        matching: MatchArgs,
    },

    /// 交互式连续查询
    Shell {
        #[command(flatten)]
        matching: MatchArgs,
    },

    /// 显示分类指南
    List {
        /// 只显示指定类别
        #[arg(short, long)]
        category: Option<Category>,

        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 检查分类表的数据完整性
    Check,

    /// 显示/修改设置
    Config {
        /// 显示设置
        #[arg(long)]
        show: bool,

        /// 相似度阈值（0-100）
        #[arg(long)]
        threshold: Option<f64>,

        /// 模糊候选数
        #[arg(long)]
        limit: Option<usize>,

        /// 子串建议数
        #[arg(long)]
        suggestion_limit: Option<usize>,

        /// 相似度算法 (ratio/levenshtein)
        #[arg(long)]
        scorer: Option<Scorer>,

        /// 恢复默认设置
        #[arg(long)]
        reset: bool,
    },
}

/// 本次运行临时覆盖的匹配参数
#[derive(Args, Clone, Debug, Default)]
pub struct MatchArgs {
    /// 相似度阈值（0-100）
    #[arg(long)]
    pub threshold: Option<f64>,

    /// 模糊候选数
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// 相似度算法 (ratio/levenshtein)
    #[arg(long)]
    pub scorer: Option<Scorer>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
