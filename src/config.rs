use crate::error::{ReadmeShotsError, Result};
use readme_shots_common::layout::{ANCHOR_HEADING, IMAGE_PREFIX, SECTION_HEADING};
use readme_shots_common::Heading;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// プロジェクト直下の設定ファイル名
pub const LOCAL_CONFIG_FILE: &str = "readme-shots.json";

/// 節見出しの最大レベル（小見出しが ### のため）
const MAX_SECTION_LEVEL: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// スクリーンショットフォルダ
    pub screenshots_dir: PathBuf,
    /// 更新対象のREADME
    pub readme_path: PathBuf,
    /// 画像参照のパスプレフィックス
    pub image_prefix: String,
    /// スクリーンショット節の見出し
    pub section_heading: String,
    /// 節がないときの挿入位置の見出し
    pub anchor_heading: String,
    /// 対象の拡張子（小文字、ドットなし）
    pub image_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screenshots_dir: PathBuf::from("screenshots"),
            readme_path: PathBuf::from("README.md"),
            image_prefix: IMAGE_PREFIX.into(),
            section_heading: SECTION_HEADING.into(),
            anchor_heading: ANCHOR_HEADING.into(),
            image_extensions: ["png", "jpg", "jpeg", "gif", "webp"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// カレントの readme-shots.json → ~/.config/readme-shots/config.json → 既定値 の順で読み込み
    pub fn load() -> Result<Self> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("readme-shots").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        let section = self.section_heading()?;
        let anchor = self.anchor_heading()?;

        if self.image_extensions.is_empty() {
            return Err(ReadmeShotsError::Config("image_extensions が空です".into()));
        }
        // 分類ごとの小見出しは ### 固定。節見出しはそれより浅くないと再実行で節が途中で切れる
        if section.level > MAX_SECTION_LEVEL {
            return Err(ReadmeShotsError::Config(format!(
                "section_heading は ## 以下のレベルにしてください: {}",
                self.section_heading
            )));
        }
        // 挿入後の再実行で節がアンカー見出しの節まで飲み込まないように
        if anchor.level > section.level {
            return Err(ReadmeShotsError::Config(format!(
                "anchor_heading は section_heading と同じかより浅いレベルにしてください: {}",
                self.anchor_heading
            )));
        }
        if section == anchor {
            return Err(ReadmeShotsError::Config(
                "section_heading と anchor_heading が同じです".into(),
            ));
        }
        Ok(())
    }

    pub fn section_heading(&self) -> Result<Heading> {
        Ok(Heading::parse(&self.section_heading)?)
    }

    pub fn anchor_heading(&self) -> Result<Heading> {
        Ok(Heading::parse(&self.anchor_heading)?)
    }

    /// 拡張子が対象か（大文字小文字を区別しない）
    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
