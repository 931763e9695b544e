use clap::Parser;
use readme_shots::{cli, config, error, updater};
use cli::{Cli, Commands};
use config::{Config, LOCAL_CONFIG_FILE};
use error::Result;
use readme_shots_common::Category;
use updater::UpdateMode;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    if let Some(dir) = cli.dir {
        config.screenshots_dir = dir;
    }
    if let Some(readme) = cli.readme {
        config.readme_path = readme;
    }

    match cli.command.unwrap_or(Commands::Update { dry_run: false, check: false }) {
        Commands::Update { dry_run, check } => {
            println!("🚀 readme-shots - README.md 更新");
            println!("{}", "=".repeat(50));

            let mode = if check {
                UpdateMode::Check
            } else if dry_run {
                UpdateMode::DryRun
            } else {
                UpdateMode::Write
            };

            match updater::update_readme(&config, mode, cli.verbose) {
                Ok(report) => {
                    if !report.dropped.is_empty() {
                        println!("⚠ {}枚は表に収まらず省略されました", report.dropped.len());
                    }
                    println!("\n🎉 完了");
                    if mode == UpdateMode::Write && report.changed {
                        println!("📝 {} をスクリーンショットで更新しました", config.readme_path.display());
                        println!("💡 push する前に差分を確認してください");
                    }
                }
                Err(e) if e.is_recoverable() => {
                    println!("❌ {}", e);
                    println!("\n❌ 処理に失敗しました");
                    println!("💡 screenshots フォルダに画像を追加したか確認してください");
                }
                Err(e) => return Err(e),
            }
        }

        Commands::List { json } => {
            let (screenshots, classified) = updater::classify_screenshots(&config);

            if json {
                println!("{}", serde_json::to_string_pretty(&classified)?);
                return Ok(());
            }

            println!("📸 {}枚のスクリーンショット ({})", screenshots.len(), config.screenshots_dir.display());
            for category in Category::ALL {
                let names = classified.get(category);
                if names.is_empty() && !cli.verbose {
                    continue;
                }
                println!("  {} ({}):", category, names.len());
                for name in names {
                    println!("    - {}", name);
                }
            }
        }

        Commands::Config { show, init } => {
            if init {
                config.save_to(std::path::Path::new(LOCAL_CONFIG_FILE))?;
                println!("✔ 設定を書き出しました: {}", LOCAL_CONFIG_FILE);
            }

            if show || !init {
                println!("設定:");
                println!("  スクリーンショット: {}", config.screenshots_dir.display());
                println!("  README: {}", config.readme_path.display());
                println!("  画像プレフィックス: {}", config.image_prefix);
                println!("  節の見出し: {}", config.section_heading);
                println!("  アンカー見出し: {}", config.anchor_heading);
                println!("  拡張子: {}", config.image_extensions.join(", "));
            }
        }
    }

    Ok(())
}
