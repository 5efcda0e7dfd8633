//! 画像ファイルの受付判定
//!
//! 受け付けるのは PNG / JPEG / SVG / GIF の4種類のみ。
//! それ以外は何も起こさずに無視する（エラー表示もしない）。

/// ファイル選択ダイアログの `accept` 属性
pub const ACCEPT_ATTR: &str = ".svg,.png,.jpg,.jpeg,.gif";

/// 受付可能な画像形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Png,
    Jpeg,
    Svg,
    Gif,
}

impl ImageKind {
    pub const ALL: [ImageKind; 4] = [ImageKind::Png, ImageKind::Jpeg, ImageKind::Svg, ImageKind::Gif];

    /// 宣言されたMIMEタイプから判定（完全一致）
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(ImageKind::Png),
            "image/jpeg" => Some(ImageKind::Jpeg),
            "image/svg+xml" => Some(ImageKind::Svg),
            "image/gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    /// 拡張子から判定（大文字小文字は区別しない）
    ///
    /// ブラウザのようなMIME情報が無いCLIで使う。
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageKind::Png),
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "svg" => Some(ImageKind::Svg),
            "gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Svg => "image/svg+xml",
            ImageKind::Gif => "image/gif",
        }
    }
}
