use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ocr_client::{cli, client, config, error, intake, session, store};
use ocr_client_common::Action;
use cli::{Cli, Commands};
use client::OcrClient;
use config::Config;
use error::{OcrCliError, Result};
use session::{RecognitionRecord, Session};
use store::FileStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?;
    let store = FileStore::in_dir(&Config::config_dir()?);

    match cli.command {
        Commands::Recognize { path, language, endpoint, no_history, output } => {
            println!("🔍 ocr-client - 文字認識\n");

            let candidates = intake::collect_candidates(&path)?;
            if candidates.is_empty() {
                return Err(OcrCliError::NoImagesFound(path.display().to_string()));
            }

            let mut client_config = config.client_config();
            if let Some(endpoint) = endpoint {
                client_config.endpoint = endpoint;
            }
            if no_history {
                client_config.record_history = false;
            }

            let client = OcrClient::new(&client_config)?;
            let mut session = Session::open(store, &client_config);
            if let Some(language) = language {
                // 画面の言語選択と同じく、次回以降の既定にもなる
                let _ = session.dispatch(Action::SetLanguage(language));
            }

            println!(
                "[1/2] {}枚の画像を送信 → {} (言語: {})",
                candidates.len(),
                client.endpoint(),
                session.state().preferences.language.label()
            );

            let progress = if candidates.len() > 1 {
                let bar = ProgressBar::new(candidates.len() as u64);
                bar.set_style(
                    ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                Some(bar)
            } else {
                None
            };

            let mut records: Vec<RecognitionRecord> = Vec::with_capacity(candidates.len());
            for candidate in &candidates {
                if let Some(bar) = &progress {
                    bar.set_message(candidate.file_name.clone());
                }
                records.push(session.process(&client, candidate).await);
                if let Some(bar) = &progress {
                    bar.inc(1);
                }
            }
            if let Some(bar) = progress {
                bar.finish_and_clear();
            }

            println!("[2/2] 認識結果\n");
            for record in &records {
                if records.len() > 1 {
                    println!("--- {} ---", record.file_name);
                }
                println!("{}\n", record.display_text());
            }

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&records)?;
                std::fs::write(&output, json)?;
                println!("✔ 結果を保存: {}", output.display());
            }

            let succeeded = records.iter().filter(|r| r.is_ok()).count();
            println!("✅ 完了 ({}/{}件成功)", succeeded, records.len());
        }

        Commands::History { clear, yes, json } => {
            let mut session = Session::open(store, &config.client_config());

            if clear {
                let confirmed = yes
                    || dialoguer::Confirm::new()
                        .with_prompt("履歴をすべて削除しますか？")
                        .default(false)
                        .interact()
                        .map_err(|e| OcrCliError::Io(std::io::Error::other(e.to_string())))?;

                if confirmed {
                    let _ = session.dispatch(Action::ClearHistory);
                    println!("✔ 履歴を削除しました");
                }
                return Ok(());
            }

            let entries = session.state().history.entries();
            if json {
                println!("{}", serde_json::to_string_pretty(entries)?);
            } else if entries.is_empty() {
                println!("履歴はありません");
            } else {
                for (i, entry) in entries.iter().enumerate() {
                    println!("{}. [{}] ({})", i + 1, entry.timestamp, entry.language.label());
                    println!("   {}", entry.text.trim_end().replace('\n', "\n   "));
                }
            }
        }

        Commands::Config { set_endpoint, set_timeout, set_language, dark_mode, show } => {
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                changed = true;
            }

            if let Some(seconds) = set_timeout {
                if seconds == 0 {
                    return Err(OcrCliError::Config("タイムアウトは1秒以上を指定してください".into()));
                }
                config.timeout_seconds = seconds;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            let mut session = Session::open(store, &config.client_config());

            if let Some(language) = set_language {
                let _ = session.dispatch(Action::SetLanguage(language));
                println!("✔ 言語を設定しました: {}", language.label());
            }

            if let Some(dark) = dark_mode {
                let _ = session.dispatch(Action::SetDarkMode(dark));
                println!("✔ ダークモード: {}", if dark { "オン" } else { "オフ" });
            }

            let nothing_requested = !changed && set_language.is_none() && dark_mode.is_none();
            if show || nothing_requested {
                let state = session.state();
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  履歴記録: {}", if config.record_history { "有効" } else { "無効" });
                println!("  言語: {}", state.preferences.language.label());
                println!("  ダークモード: {}", if state.preferences.dark_mode { "オン" } else { "オフ" });
                println!("  履歴件数: {}", state.history.len());
                println!("  保存先: {}", session.store().path().display());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "ocr_client=debug,info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
