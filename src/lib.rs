//! readme-shots
//!
//! screenshots フォルダの画像を分類し、README.md の「📸 Ekran Görüntüleri」節を再生成する。

pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
pub mod updater;
