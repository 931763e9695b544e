//! スクリーンショット節の生成
//!
//! 分類結果からMarkdownの表を組み立てる。ファイルI/Oは行わない。

use crate::layout::{
    TableLayout, FIXED_TABLES, IMAGE_PREFIX, OTHER_GRID_COLUMNS, OTHER_HEADING,
    OTHER_LABEL_PREFIX, SECTION_HEADING,
};
use crate::types::{Category, Classified};

/// 生成オプション
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// 節の見出し行
    pub section_heading: &'a str,
    /// 画像参照のパスプレフィックス
    pub image_prefix: &'a str,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            section_heading: SECTION_HEADING,
            image_prefix: IMAGE_PREFIX,
        }
    }
}

/// 生成結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSection {
    /// 節全体のテキスト（末尾は空行）
    pub text: String,
    /// 表の枠に収まらず出力されなかったファイル名
    pub dropped: Vec<String>,
}

/// 節全体を生成
pub fn render_section(classified: &Classified, options: &RenderOptions<'_>) -> RenderedSection {
    let mut section = RenderedSection {
        text: format!("{}\n\n", options.section_heading),
        dropped: Vec::new(),
    };

    for table in FIXED_TABLES {
        let pooled: Vec<&str> = table
            .sources
            .iter()
            .flat_map(|category| classified.get(*category))
            .map(String::as_str)
            .collect();

        if pooled.is_empty() {
            continue;
        }

        let shown = pooled.len().min(table.slots());
        section.text.push_str(&render_table(table, &pooled[..shown], options.image_prefix));
        section
            .dropped
            .extend(pooled[shown..].iter().map(|name| name.to_string()));
    }

    let others = classified.get(Category::Other);
    if !others.is_empty() {
        section.text.push_str(&render_other_grid(others, options.image_prefix));
    }

    section
}

/// 固定スロットの表（データ行は1行のみ）
fn render_table(table: &TableLayout, files: &[&str], prefix: &str) -> String {
    let labels: Vec<&str> = table.columns.iter().map(|c| c.label).collect();
    let cells: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| match files.get(i) {
            Some(file) => image_embed(column.alt, prefix, file),
            None => String::new(),
        })
        .collect();

    let mut block = open_block(table.heading);
    block.push_str(&table_row(&labels));
    block.push_str(&separator_row(&labels));
    block.push_str(&table_row(&cells));
    block.push_str(CLOSE_BLOCK);
    block
}

/// その他画面のグリッド（3列ずつ折り返し）
fn render_other_grid(files: &[String], prefix: &str) -> String {
    let labels: Vec<String> = (1..=OTHER_GRID_COLUMNS)
        .map(|n| format!("{} {}", OTHER_LABEL_PREFIX, n))
        .collect();

    let mut block = open_block(OTHER_HEADING);
    block.push_str(&table_row(&labels));
    block.push_str(&separator_row(&labels));

    for (row_idx, chunk) in files.chunks(OTHER_GRID_COLUMNS).enumerate() {
        let cells: Vec<String> = (0..OTHER_GRID_COLUMNS)
            .map(|col| match chunk.get(col) {
                Some(file) => {
                    let number = row_idx * OTHER_GRID_COLUMNS + col + 1;
                    let alt = format!("{} {}", OTHER_LABEL_PREFIX, number);
                    image_embed(&alt, prefix, file)
                }
                None => String::new(),
            })
            .collect();
        block.push_str(&table_row(&cells));
    }

    block.push_str(CLOSE_BLOCK);
    block
}

const CLOSE_BLOCK: &str = "\n</div>\n\n";

fn open_block(heading: &str) -> String {
    format!("{}\n<div align=\"center\">\n\n", heading)
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined: Vec<&str> = cells.iter().map(|c| c.as_ref()).collect();
    format!("| {} |\n", joined.join(" | "))
}

/// 区切り行（ラベル幅+2のダッシュ）
fn separator_row<S: AsRef<str>>(labels: &[S]) -> String {
    let mut row = String::from("|");
    for label in labels {
        row.push_str(&"-".repeat(label.as_ref().chars().count() + 2));
        row.push('|');
    }
    row.push('\n');
    row
}

fn image_embed(alt: &str, prefix: &str, file: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        format!("![{}]({})", alt, file)
    } else {
        format!("![{}]({}/{})", alt, prefix, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_all;

    fn render(names: &[&str]) -> RenderedSection {
        render_section(&classify_all(names), &RenderOptions::default())
    }

    #[test]
    fn test_scenario_auth_workout_other() {
        let section = render(&[
            "login_screen.png",
            "random_image.gif",
            "register_screen.png",
            "workout_plan.jpg",
        ]);

        let expected = "## 📸 Ekran Görüntüleri\n\n\
### 🔐 Kimlik Doğrulama Ekranları\n\
<div align=\"center\">\n\n\
| Giriş Yapma | Kayıt Olma | Profil Oluşturma |\n\
|-------------|------------|------------------|\n\
| ![Login Screen](screenshots/login_screen.png) | ![Register Screen](screenshots/register_screen.png) |  |\n\
\n</div>\n\n\
### 🏋️‍♂️ Antrenman Özellikleri\n\
<div align=\"center\">\n\n\
| AI Program Oluşturma | Egzersiz Detayları | Antrenman Takibi |\n\
|----------------------|--------------------|------------------|\n\
| ![Workout Generation](screenshots/workout_plan.jpg) |  |  |\n\
\n</div>\n\n\
### 📱 Diğer Ekranlar\n\
<div align=\"center\">\n\n\
| Screen 1 | Screen 2 | Screen 3 |\n\
|----------|----------|----------|\n\
| ![Screen 1](screenshots/random_image.gif) |  |  |\n\
\n</div>\n\n";

        assert_eq!(section.text, expected);
        assert!(section.dropped.is_empty());
    }

    #[test]
    fn test_auth_slots_truncated_to_three() {
        let section = render(&[
            "auth_a.png",
            "auth_b.png",
            "auth_c.png",
            "auth_d.png",
            "auth_e.png",
        ]);

        assert!(section.text.contains("auth_a.png"));
        assert!(section.text.contains("auth_b.png"));
        assert!(section.text.contains("auth_c.png"));
        assert!(!section.text.contains("auth_d.png"));
        assert!(!section.text.contains("auth_e.png"));
        assert_eq!(section.dropped, vec!["auth_d.png", "auth_e.png"]);
    }

    #[test]
    fn test_nutrition_and_tracking_are_pooled() {
        // 記録系が名前順で先でも栄養系が先に並ぶ
        let section = render(&["a_progress.png", "b_meal.png", "c_daily.png", "d_diet.png"]);

        assert_eq!(section.text.matches("### 🍎 Beslenme ve Takip").count(), 1);
        assert!(section.text.contains(
            "| ![Diet Plan](screenshots/b_meal.png) | ![Water Tracking](screenshots/d_diet.png) | ![Progress Tracking](screenshots/a_progress.png) |"
        ));
        assert_eq!(section.dropped, vec!["c_daily.png"]);
    }

    #[test]
    fn test_tracking_only_renders_combined_table() {
        let section = render(&["statistics.png"]);
        assert!(section.text.contains("### 🍎 Beslenme ve Takip"));
        assert!(section.text.contains("![Diet Plan](screenshots/statistics.png)"));
    }

    #[test]
    fn test_video_limited_to_two_slots() {
        let section = render(&["video_1.png", "video_2.png", "video_3.png"]);

        assert!(section.text.contains("| Video Kayıt | Video Paylaşım |"));
        assert!(section.text.contains("|-------------|----------------|"));
        assert!(!section.text.contains("video_3.png"));
        assert_eq!(section.dropped, vec!["video_3.png"]);
    }

    #[test]
    fn test_other_grid_numbers_continue_across_rows() {
        let section = render(&["a.png", "b.png", "c.png", "d.png"]);

        assert_eq!(section.text.matches("| Screen 1 | Screen 2 | Screen 3 |").count(), 1);
        assert!(section.text.contains(
            "| ![Screen 1](screenshots/a.png) | ![Screen 2](screenshots/b.png) | ![Screen 3](screenshots/c.png) |\n"
        ));
        assert!(section.text.contains("| ![Screen 4](screenshots/d.png) |  |  |\n"));
        assert!(section.dropped.is_empty());
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        let section = render(&["home.png"]);
        assert!(!section.text.contains("Kimlik"));
        assert!(!section.text.contains("Antrenman"));
        assert!(!section.text.contains("Video"));
        assert!(section.text.ends_with("</div>\n\n"));
    }

    #[test]
    fn test_custom_image_prefix() {
        let options = RenderOptions {
            section_heading: "## Screens",
            image_prefix: "docs/img/",
        };
        let section = render_section(&classify_all(&["login.png"]), &options);

        assert!(section.text.starts_with("## Screens\n\n"));
        assert!(section.text.contains("![Login Screen](docs/img/login.png)"));
    }
}
