//! スクリーンショット分類の型定義
//!
//! - Category: ファイル名から決まる6つの分類
//! - Classified: 分類結果（全ファイルがちょうど1つの分類に属する）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// スクリーンショットの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Authentication,
    Workout,
    Nutrition,
    Tracking,
    Video,
    Other,
}

impl Category {
    /// 全分類（判定順）
    pub const ALL: [Category; 6] = [
        Category::Authentication,
        Category::Workout,
        Category::Nutrition,
        Category::Tracking,
        Category::Video,
        Category::Other,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Authentication => write!(f, "authentication"),
            Category::Workout => write!(f, "workout"),
            Category::Nutrition => write!(f, "nutrition"),
            Category::Tracking => write!(f, "tracking"),
            Category::Video => write!(f, "video"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// 分類結果
///
/// 各分類内の並びは入力順（スキャナのファイル名昇順）を保つ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classified {
    groups: BTreeMap<Category, Vec<String>>,
}

impl Classified {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分類にファイル名を追加
    pub fn push(&mut self, category: Category, file_name: String) {
        self.groups.entry(category).or_default().push(file_name);
    }

    /// 分類のファイル名一覧
    pub fn get(&self, category: Category) -> &[String] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// ファイル名が属する分類
    pub fn category_of(&self, file_name: &str) -> Option<Category> {
        self.groups
            .iter()
            .find(|(_, names)| names.iter().any(|n| n == file_name))
            .map(|(category, _)| *category)
    }

    /// 全ファイル数
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 空でない分類を判定順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.groups
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(category, names)| (*category, names.as_slice()))
    }
}
