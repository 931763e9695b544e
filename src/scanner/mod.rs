use crate::config::Config;
use std::path::Path;
use walkdir::WalkDir;

/// フォルダ直下の画像ファイル名をファイル名順で返す
///
/// フォルダが存在しない場合は空のVec（エラーにしない）。
pub fn scan_screenshots(folder: &Path, config: &Config) -> Vec<String> {
    if !folder.is_dir() {
        return Vec::new();
    }

    let mut screenshots = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| config.is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if is_image {
            screenshots.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    // ファイル名でソート
    screenshots.sort();

    screenshots
}
