use crate::error::ExtractError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zstd::stream::read::Decoder as ZstdDecoder;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CompressionMode {
    /// Decide from the file extension: `.zst` selects zstd.
    #[default]
    Auto,
    Plain,
    Zstd,
}

impl CompressionMode {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let normalized = raw.trim();
        if normalized.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if normalized.eq_ignore_ascii_case("plain") {
            Ok(Self::Plain)
        } else if normalized.eq_ignore_ascii_case("zstd") {
            Ok(Self::Zstd)
        } else {
            Err(format!(
                "Invalid compression value '{}'. Supported values: 'auto', 'plain' or 'zstd'.",
                normalized
            ))
        }
    }

    fn wants_zstd(self, path: &Path) -> bool {
        match self {
            Self::Plain => false,
            Self::Zstd => true,
            Self::Auto => path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("zst")),
        }
    }
}

/// Reads the complete textual content of `path`.
///
/// The file handle lives only for the duration of this call; callers get
/// either the full decoded content or an error, never a truncated buffer.
pub fn read_source(path: &Path, compression: CompressionMode) -> Result<String, ExtractError> {
    let mut file = File::open(path).map_err(|source| ExtractError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut raw = Vec::new();
    if compression.wants_zstd(path) {
        let mut decoder = ZstdDecoder::new(file).map_err(|e| ExtractError::DecodingError {
            path: path.to_path_buf(),
            reason: format!("failed to initialize zstd decoder: {}", e),
        })?;
        decoder
            .read_to_end(&mut raw)
            .map_err(|e| ExtractError::DecodingError {
                path: path.to_path_buf(),
                reason: format!("zstd stream: {}", e),
            })?;
    } else {
        file.read_to_end(&mut raw)
            .map_err(|e| ExtractError::DecodingError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
    }

    String::from_utf8(raw).map_err(|e| ExtractError::DecodingError {
        path: path.to_path_buf(),
        reason: format!("invalid UTF-8: {}", e),
    })
}
