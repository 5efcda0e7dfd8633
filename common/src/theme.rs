//! テーマのカラートークン
//!
//! ライト/ダークの2セットをブール値で切り替える。

/// ダークモード時にドキュメントへ付与するクラス名
pub const DARK_CLASS: &str = "dark";

/// 意味ごとの色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub surface: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl ThemeTokens {
    pub const LIGHT: ThemeTokens = ThemeTokens {
        background: "#ffffff",
        surface: "#f9fafb",
        accent: "#00c281",
        text: "#171717",
        border: "#d1d5db",
    };

    pub const DARK: ThemeTokens = ThemeTokens {
        background: "#0a0a0a",
        surface: "#1f2937",
        accent: "#00a36c",
        text: "#ededed",
        border: "#374151",
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// CSSカスタムプロパティとして出力（style属性用）
    pub fn css_variables(&self) -> String {
        format!(
            "--background: {}; --surface: {}; --accent: {}; --text: {}; --border: {};",
            self.background, self.surface, self.accent, self.text, self.border
        )
    }
}
