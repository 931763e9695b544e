//! ファイル名キーワードによる分類
//!
//! 判定表を上から順に評価し、最初に一致した分類を採用する。
//! どれにも一致しなければ Other。

use crate::types::{Category, Classified};

/// 分類ルール
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// 判定表（評価順）
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Authentication,
        keywords: &["auth", "login", "register", "profile"],
    },
    CategoryRule {
        category: Category::Workout,
        keywords: &["workout", "exercise", "program", "training"],
    },
    CategoryRule {
        category: Category::Nutrition,
        keywords: &["nutrition", "diet", "food", "meal"],
    },
    CategoryRule {
        category: Category::Tracking,
        keywords: &["tracking", "daily", "statistics", "progress"],
    },
    CategoryRule {
        category: Category::Video,
        keywords: &["video", "recording", "upload"],
    },
];

impl CategoryRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// ファイル名1件を分類
pub fn classify(file_name: &str) -> Category {
    let lowered = file_name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}

/// ファイル名一覧を分類（入力順を保持）
pub fn classify_all<S: AsRef<str>>(file_names: &[S]) -> Classified {
    let mut classified = Classified::new();
    for name in file_names {
        let name = name.as_ref();
        classified.push(classify(name), name.to_string());
    }
    classified
}
