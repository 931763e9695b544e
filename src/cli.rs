use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "readme-shots")]
#[command(about = "screenshotsフォルダの画像からREADMEのスクリーンショット節を再生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// スクリーンショットフォルダ（デフォルト: screenshots）
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// 更新対象のREADME（デフォルト: README.md）
    #[arg(short, long, global = true)]
    pub readme: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// READMEのスクリーンショット節を更新（サブコマンド省略時）
    Update {
        /// 書き込まずに生成結果を表示
        #[arg(long, conflicts_with = "check")]
        dry_run: bool,

        /// READMEが最新か確認（差分があれば終了コード1）
        #[arg(long)]
        check: bool,
    },

    /// スクリーンショットの分類結果を表示
    List {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/作成
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,

        /// 現在の設定を readme-shots.json に書き出す
        #[arg(long)]
        init: bool,
    },
}
