use clap::Parser;
use std::io::IsTerminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use trash_sort::{cli, config, guide, lookup, prompt};
use trash_sort_common::{ClassificationTable, Resolver};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use trash_sort::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        Config::default()
    });
    let table = ClassificationTable::shanghai();
    guide::log_integrity(table);

    match cli.command {
        Commands::Query { text, select, format, no_interactive, matching } => {
            let options = lookup::resolver_options(&config, &matching)?;
            let resolver = Resolver::new(table, options);

            // JSON 输出或非终端时不弹出选择框
            let interactive = !no_interactive
                && format == OutputFormat::Text
                && std::io::stdin().is_terminal();

            let (label, resolution) =
                lookup::answer(&resolver, &text, select.as_deref(), interactive)?;
            lookup::print_resolution(&label, &resolution, format)?;
        }

        Commands::Shell { matching } => {
            let options = lookup::resolver_options(&config, &matching)?;
            let resolver = Resolver::new(table, options);
            prompt::run_shell(&resolver)?;
        }

        Commands::List { category, format } => {
            if format == OutputFormat::Text {
                println!("🗑️ 上海垃圾分类指南\n");
            }
            guide::print_guide(table, category, format)?;
            if format == OutputFormat::Text {
                println!("\n{}", lookup::DRY_HINT);
            }
        }

        Commands::Check => {
            for line in guide::integrity_report(table) {
                println!("{}", line);
            }
        }

        Commands::Config { show, threshold, limit, suggestion_limit, scorer, reset } => {
            let mut config = if reset { Config::default() } else { config };
            let changed = reset
                || threshold.is_some()
                || limit.is_some()
                || suggestion_limit.is_some()
                || scorer.is_some();

            if let Some(threshold) = threshold {
                config.threshold = threshold;
            }
            if let Some(limit) = limit {
                config.limit = limit;
            }
            if let Some(suggestion_limit) = suggestion_limit {
                config.suggestion_limit = suggestion_limit;
            }
            if let Some(scorer) = scorer {
                config.scorer = scorer;
            }

            if changed {
                config.save()?;
                println!("✔ 设置已保存");
            }

            if show || !changed {
                println!("设置:");
                println!("  相似度阈值: {}", config.threshold);
                println!("  模糊候选数: {}", config.limit);
                println!("  子串建议数: {}", config.suggestion_limit);
                println!("  相似度算法: {}", config.scorer);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
