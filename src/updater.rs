//! README更新パイプライン
//!
//! スキャン → 分類 → 節の生成 → README読み込み → 差し込み → 書き込み。
//! ファイルの読み書きはこのモジュールだけで行う。

use crate::config::Config;
use crate::error::{ReadmeShotsError, Result};
use crate::scanner;
use std::path::Path;
use readme_shots_common::{
    classify_all, patch_document, render_section, Classified, Placement, RenderOptions,
};

/// 更新モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// READMEを書き換える
    #[default]
    Write,
    /// 生成した節を表示するだけ
    DryRun,
    /// 差分があればエラー（書き込みなし）
    Check,
}

/// 更新結果
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub screenshots: Vec<String>,
    pub placement: Placement,
    /// 表の枠を超えて出力されなかったファイル
    pub dropped: Vec<String>,
    /// README本文が変わったか
    pub changed: bool,
}

/// スクリーンショットフォルダをスキャンして分類
pub fn classify_screenshots(config: &Config) -> (Vec<String>, Classified) {
    let screenshots = scanner::scan_screenshots(&config.screenshots_dir, config);
    let classified = classify_all(&screenshots);
    (screenshots, classified)
}

/// 差し込みステップの表示（モードごと）
fn patch_banner(mode: UpdateMode, readme_path: &Path) -> String {
    match mode {
        UpdateMode::Write => format!("[3/3] {} を更新中...", readme_path.display()),
        UpdateMode::DryRun => format!("[3/3] {} への差し込みをプレビュー中（書き込みなし）...", readme_path.display()),
        UpdateMode::Check => format!("[3/3] {} が最新か確認中...", readme_path.display()),
    }
}

/// READMEのスクリーンショット節を更新
pub fn update_readme(config: &Config, mode: UpdateMode, verbose: bool) -> Result<UpdateReport> {
    config.validate()?;
    let marker = config.section_heading()?;
    let anchor = config.anchor_heading()?;
    let readme_path = &config.readme_path;

    if !readme_path.is_file() {
        return Err(ReadmeShotsError::ReadmeNotFound(readme_path.display().to_string()));
    }

    // 1. スキャン・分類
    println!("[1/3] スクリーンショットをスキャン中...");
    let (screenshots, classified) = classify_screenshots(config);

    if screenshots.is_empty() {
        return Err(ReadmeShotsError::NoScreenshots(
            config.screenshots_dir.display().to_string(),
        ));
    }

    println!("📸 {}枚のスクリーンショットを検出:", screenshots.len());
    for name in &screenshots {
        match classified.category_of(name) {
            Some(category) if verbose => println!("  - {} [{}]", name, category),
            _ => println!("  - {}", name),
        }
    }
    println!();

    // 2. 節の生成
    println!("[2/3] スクリーンショット節を生成中...");
    let options = RenderOptions {
        section_heading: &config.section_heading,
        image_prefix: &config.image_prefix,
    };
    let rendered = render_section(&classified, &options);
    for name in &rendered.dropped {
        eprintln!("⚠ 表の枠を超えたため除外: {}", name);
    }
    if verbose {
        println!("  {} bytes", rendered.text.len());
    }
    println!();

    // 3. 差し込み
    println!("{}", patch_banner(mode, readme_path));
    let current = std::fs::read_to_string(readme_path)?;
    let outcome = patch_document(&current, &rendered.text, &marker, &anchor);
    let changed = outcome.text != current;

    match mode {
        UpdateMode::Write => {
            std::fs::write(readme_path, &outcome.text)?;
            println!("✔ {} ({})", readme_path.display(), outcome.placement);
        }
        UpdateMode::DryRun => {
            println!("--- 生成結果 ({}) ---", outcome.placement);
            print!("{}", rendered.text);
            println!("--- 書き込みはスキップしました ---");
        }
        UpdateMode::Check => {
            if changed {
                return Err(ReadmeShotsError::OutOfDate(readme_path.display().to_string()));
            }
            println!("✔ {} は最新です", readme_path.display());
        }
    }

    Ok(UpdateReport {
        screenshots,
        placement: outcome.placement,
        dropped: rendered.dropped,
        changed,
    })
}
