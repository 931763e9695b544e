//! readme-shots Common Library
//!
//! スクリーンショットの分類・README節の生成・本文への差し込み。
//! ファイルI/Oは行わない（CLI側で読み書きする）。

pub mod types;
pub mod classifier;
pub mod layout;
pub mod render;
pub mod patcher;
pub mod error;

pub use types::{Category, Classified};
pub use classifier::{classify, classify_all, CategoryRule, CATEGORY_RULES};
pub use render::{render_section, RenderOptions, RenderedSection};
pub use patcher::{patch_document, Heading, PatchOutcome, Placement};
pub use error::{Error, Result};
