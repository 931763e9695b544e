//! 表レイアウト定義
//!
//! README上の各表（見出し・列ラベル・画像altテキスト・対象分類）。

use crate::types::Category;

/// 節の見出し（既存節の検出にも使う）
pub const SECTION_HEADING: &str = "## 📸 Ekran Görüntüleri";

/// 既存節がないときの挿入位置となる見出し
pub const ANCHOR_HEADING: &str = "## 🛠️ Teknoloji Stack'i";

/// 画像参照のパスプレフィックス
pub const IMAGE_PREFIX: &str = "screenshots";

/// 列定義
#[derive(Debug, Clone, Copy)]
pub struct ColumnDefinition {
    /// ヘッダー行のラベル
    pub label: &'static str,
    /// 画像のaltテキスト
    pub alt: &'static str,
}

/// 固定スロットの表
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub heading: &'static str,
    pub columns: &'static [ColumnDefinition],
    /// 取り込む分類（この順で連結してから列数分を採用）
    pub sources: &'static [Category],
}

impl TableLayout {
    /// 表示スロット数
    pub fn slots(&self) -> usize {
        self.columns.len()
    }
}

pub const AUTH_TABLE: TableLayout = TableLayout {
    heading: "### 🔐 Kimlik Doğrulama Ekranları",
    columns: &[
        ColumnDefinition { label: "Giriş Yapma", alt: "Login Screen" },
        ColumnDefinition { label: "Kayıt Olma", alt: "Register Screen" },
        ColumnDefinition { label: "Profil Oluşturma", alt: "Profile Screen" },
    ],
    sources: &[Category::Authentication],
};

pub const WORKOUT_TABLE: TableLayout = TableLayout {
    heading: "### 🏋️‍♂️ Antrenman Özellikleri",
    columns: &[
        ColumnDefinition { label: "AI Program Oluşturma", alt: "Workout Generation" },
        ColumnDefinition { label: "Egzersiz Detayları", alt: "Exercise Details" },
        ColumnDefinition { label: "Antrenman Takibi", alt: "Workout Tracking" },
    ],
    sources: &[Category::Workout],
};

pub const NUTRITION_TABLE: TableLayout = TableLayout {
    heading: "### 🍎 Beslenme ve Takip",
    columns: &[
        ColumnDefinition { label: "Beslenme Planı", alt: "Diet Plan" },
        ColumnDefinition { label: "Su Takibi", alt: "Water Tracking" },
        ColumnDefinition { label: "İlerleme Takibi", alt: "Progress Tracking" },
    ],
    sources: &[Category::Nutrition, Category::Tracking],
};

pub const VIDEO_TABLE: TableLayout = TableLayout {
    heading: "### 🎥 Video Özellikleri",
    columns: &[
        ColumnDefinition { label: "Video Kayıt", alt: "Video Recording" },
        ColumnDefinition { label: "Video Paylaşım", alt: "Video Sharing" },
    ],
    sources: &[Category::Video],
};

/// 固定表（出力順）
pub const FIXED_TABLES: &[TableLayout] = &[AUTH_TABLE, WORKOUT_TABLE, NUTRITION_TABLE, VIDEO_TABLE];

/// その他画面のグリッド
pub const OTHER_HEADING: &str = "### 📱 Diğer Ekranlar";
pub const OTHER_GRID_COLUMNS: usize = 3;
pub const OTHER_LABEL_PREFIX: &str = "Screen";
