//! README本文へのスクリーンショット節の差し込み
//!
//! ## 処理
//! 1. 節見出しがあれば、その行から同レベル以上の次の見出し直前（なければ末尾）までを置換
//! 2. なければアンカー見出しの直前に挿入
//! 3. どちらもなければ末尾に追加（空行1つで区切る）
//!
//! 置換・挿入範囲の外側はバイト単位でそのまま残る。

use crate::error::{Error, Result};
use regex::Regex;

lazy_static::lazy_static! {
    // ATX見出し: 先頭空白3つまで、#1〜6個、本文、末尾空白
    static ref HEADING_RE: Regex = Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").unwrap();
}

/// Markdownの見出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub text: String,
}

impl Heading {
    /// 見出し行を解釈（設定値の検証用）
    pub fn parse(line: &str) -> Result<Self> {
        parse_heading_line(line).ok_or_else(|| Error::InvalidHeading(line.to_string()))
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level), self.text)
    }
}

/// 差し込み位置の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// 既存の節を置換
    Replaced,
    /// アンカー見出しの直前に挿入
    InsertedBefore,
    /// 末尾に追加
    Appended,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Replaced => write!(f, "既存の節を置換"),
            Placement::InsertedBefore => write!(f, "アンカー見出しの前に挿入"),
            Placement::Appended => write!(f, "末尾に追加"),
        }
    }
}

/// 差し込み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub text: String,
    pub placement: Placement,
}

/// 本文に節を差し込む
///
/// # Arguments
/// * `document` - README本文
/// * `section` - 生成済みの節（末尾は空行）
/// * `marker` - 既存節の見出し
/// * `anchor` - 既存節がないときの挿入位置の見出し
pub fn patch_document(document: &str, section: &str, marker: &Heading, anchor: &Heading) -> PatchOutcome {
    let headings = scan_headings(document);

    if let Some(pos) = headings.iter().position(|(_, h)| h == marker) {
        let start = headings[pos].0;
        let end = headings[pos + 1..]
            .iter()
            .find(|(_, h)| h.level <= marker.level)
            .map(|(offset, _)| *offset)
            .unwrap_or(document.len());

        return PatchOutcome {
            text: splice(document, start, end, section),
            placement: Placement::Replaced,
        };
    }

    if let Some((offset, _)) = headings.iter().find(|(_, h)| h == anchor) {
        return PatchOutcome {
            text: splice(document, *offset, *offset, section),
            placement: Placement::InsertedBefore,
        };
    }

    let mut text = document.to_string();
    if !text.is_empty() && !text.ends_with("\n\n") {
        text.push_str(if text.ends_with('\n') { "\n" } else { "\n\n" });
    }
    text.push_str(section);

    PatchOutcome {
        text,
        placement: Placement::Appended,
    }
}

fn splice(document: &str, start: usize, end: usize, section: &str) -> String {
    let mut text = String::with_capacity(document.len() - (end - start) + section.len());
    text.push_str(&document[..start]);
    text.push_str(section);
    text.push_str(&document[end..]);
    text
}

/// 見出し行を（バイト位置, 見出し）で列挙。コードフェンス内は除外
fn scan_headings(document: &str) -> Vec<(usize, Heading)> {
    let mut headings = Vec::new();
    let mut offset = 0;
    let mut fence: Option<Fence> = None;

    for raw in document.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim_start();

        match fence {
            Some(open) => {
                if open.is_closed_by(trimmed) {
                    fence = None;
                }
            }
            None => match Fence::open(trimmed) {
                Some(open) => fence = Some(open),
                None => {
                    if let Some(heading) = parse_heading_line(line) {
                        headings.push((offset, heading));
                    }
                }
            },
        }

        offset += raw.len();
    }

    headings
}

/// コードフェンス（開始記号と長さ）
#[derive(Debug, Clone, Copy)]
struct Fence {
    ch: char,
    len: usize,
}

impl Fence {
    /// ``` または ~~~ が3つ以上で始まる行（info文字列は可）
    fn open(trimmed: &str) -> Option<Self> {
        let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = trimmed.chars().take_while(|c| *c == ch).count();
        (len >= 3).then_some(Fence { ch, len })
    }

    /// 同じ記号が開始時以上の長さで並び、後ろに何もない行で閉じる
    fn is_closed_by(&self, trimmed: &str) -> bool {
        let len = trimmed.chars().take_while(|c| *c == self.ch).count();
        len >= self.len && trimmed[len * self.ch.len_utf8()..].trim().is_empty()
    }
}

fn parse_heading_line(line: &str) -> Option<Heading> {
    let caps = HEADING_RE.captures(line.trim_end_matches(['\n', '\r']))?;
    Some(Heading {
        level: caps[1].len(),
        text: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
    })
}
