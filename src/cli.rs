use clap::{Parser, Subcommand};
use ocr_client_common::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ocr-client")]
#[command(about = "画像をOCRサーバーへ送信してテキストを取得するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像（またはフォルダ内の画像）を認識
    Recognize {
        /// 画像ファイルまたはフォルダのパス
        #[arg(required = true)]
        path: PathBuf,

        /// 認識言語 (mongolian/cyrillic)。省略時は保存済みの設定
        #[arg(short, long)]
        language: Option<Language>,

        /// OCRサーバーのURL（設定ファイルより優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 履歴に記録しない
        #[arg(long)]
        no_history: bool,

        /// 結果をJSONファイルに保存
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 認識履歴を表示・削除
    History {
        /// 履歴を削除
        #[arg(long)]
        clear: bool,

        /// 削除確認をスキップ
        #[arg(short, long)]
        yes: bool,

        /// JSON形式で出力
        #[arg(long)]
        json: bool,
    },

    /// 設定の表示・変更
    Config {
        /// OCRサーバーのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 既定の認識言語を設定
        #[arg(long)]
        set_language: Option<Language>,

        /// ダークモード設定 (true/false)
        #[arg(long)]
        dark_mode: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
