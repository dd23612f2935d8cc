//! Pipeline orchestration
//!
//! Sequences one conversion run: validate, resolve, encode, fetch, then
//! either pass the vector bytes through or rasterize, and write the
//! artifact. Stages fail terminally; the first error is surfaced
//! verbatim and nothing is retried or cleaned up.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codepoints;
use crate::error::{EmojiconError, EmojiconResult};
use crate::fetch;
use crate::raster;
use crate::resolver::ShortcodeResolver;

/// One conversion run. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Raw emoji input: a glyph or a shortcode.
    pub emoji: String,

    /// Raster size in pixels; 0 means no rasterization requested.
    pub size: u32,

    /// Destination path; `None` derives icon.svg / icon<SIZE>.png.
    pub output: Option<PathBuf>,
}

/// Output format, derived strictly from the destination file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Verbatim pass-through of the fetched vector bytes.
    Svg,
    /// Fixed-size raster encoding.
    Png,
}

impl OutputFormat {
    /// Derive the format from a case-insensitive file extension.
    pub fn from_path(path: &Path) -> EmojiconResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(EmojiconError::UnsupportedFormat { extension }),
        }
    }

    /// Lowercase format name, matching the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Result of a successful run, returned to the caller for reporting.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Resolved glyph the artifact depicts.
    pub glyph: String,
    /// Code-point key used as the remote asset name.
    pub key: String,
    /// Path the artifact was written to.
    pub output: PathBuf,
    /// Format of the written artifact.
    pub format: OutputFormat,
    /// Artifact size in bytes.
    pub bytes_written: usize,
}

/// Sequences the resolution-and-rendering pipeline over an injected
/// shortcode resolver.
pub struct Pipeline {
    resolver: ShortcodeResolver,
}

impl Pipeline {
    pub fn new(resolver: ShortcodeResolver) -> Self {
        Self { resolver }
    }

    /// Run one lookup-fetch-render cycle.
    ///
    /// Validation happens before any network activity; the destination
    /// file is created and written in one operation at the very end.
    /// A `.svg` destination always receives the fetched bytes verbatim,
    /// even when a size was also supplied.
    pub fn run(&self, request: &RunRequest) -> EmojiconResult<RunReport> {
        // ValidateConfig
        let output = effective_output(request);
        let format = OutputFormat::from_path(&output)?;
        if format == OutputFormat::Png && request.size == 0 {
            return Err(EmojiconError::InvalidSize { size: request.size });
        }
        if request.emoji.is_empty() {
            return Err(EmojiconError::EmptyEmoji);
        }

        // ResolveGlyph, EncodeCodePoints
        let glyph = self.resolver.resolve(&request.emoji);
        log::debug!("resolved {:?} to {glyph:?}", request.emoji);
        let key = codepoints::encode(&glyph)?;

        // FetchAsset
        let vector = fetch::fetch_asset(&key)?;

        // PassThrough | Rasterize
        let artifact = match format {
            OutputFormat::Svg => vector,
            OutputFormat::Png => raster::rasterize(&vector, request.size)?,
        };

        // WriteOutput: create/truncate and write in one operation. No
        // atomic rename; a failed write may leave a partial file behind.
        let bytes_written = artifact.len();
        fs::write(&output, &artifact).map_err(|source| EmojiconError::WriteFailed {
            path: output.clone(),
            source,
        })?;
        log::info!("wrote {bytes_written} bytes to {}", output.display());

        Ok(RunReport {
            glyph,
            key,
            output,
            format,
            bytes_written,
        })
    }
}

/// Derive the destination path: explicit output wins, otherwise icon.svg,
/// or icon<SIZE>.png when a raster size was requested.
fn effective_output(request: &RunRequest) -> PathBuf {
    match &request.output {
        Some(path) => path.clone(),
        None if request.size > 0 => PathBuf::from(format!("icon{}.png", request.size)),
        None => PathBuf::from("icon.svg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> Pipeline {
        Pipeline::new(ShortcodeResolver::builtin())
    }

    #[test]
    fn test_effective_output_defaults_to_svg() {
        let request = RunRequest {
            emoji: "😀".to_string(),
            size: 0,
            output: None,
        };
        assert_eq!(effective_output(&request), PathBuf::from("icon.svg"));
    }

    #[test]
    fn test_effective_output_defaults_to_sized_png() {
        let request = RunRequest {
            emoji: "😀".to_string(),
            size: 64,
            output: None,
        };
        assert_eq!(effective_output(&request), PathBuf::from("icon64.png"));
    }

    #[test]
    fn test_effective_output_prefers_explicit_path() {
        let request = RunRequest {
            emoji: "😀".to_string(),
            size: 64,
            output: Some(PathBuf::from("art/grin.png")),
        };
        assert_eq!(effective_output(&request), PathBuf::from("art/grin.png"));
    }

    #[test]
    fn test_format_from_path_is_case_insensitive() {
        assert_eq!(
            OutputFormat::from_path(Path::new("ICON.SVG")).unwrap(),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("icon.PnG")).unwrap(),
            OutputFormat::Png
        );
    }

    #[test]
    fn test_format_from_path_rejects_other_extensions() {
        let err = OutputFormat::from_path(Path::new("icon.bmp")).unwrap_err();
        match err {
            EmojiconError::UnsupportedFormat { extension } => assert_eq!(extension, "bmp"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_format_from_path_rejects_missing_extension() {
        let err = OutputFormat::from_path(Path::new("icon")).unwrap_err();
        assert!(matches!(err, EmojiconError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_run_rejects_empty_emoji() {
        let request = RunRequest {
            emoji: String::new(),
            size: 0,
            output: None,
        };
        let err = pipeline().run(&request).unwrap_err();
        assert!(matches!(err, EmojiconError::EmptyEmoji));
    }

    #[test]
    fn test_run_rejects_unsupported_format_before_other_checks() {
        // Format validation runs first, so even an empty emoji reports
        // the unsupported destination.
        let request = RunRequest {
            emoji: String::new(),
            size: 64,
            output: Some(PathBuf::from("icon.bmp")),
        };
        let err = pipeline().run(&request).unwrap_err();
        assert!(matches!(err, EmojiconError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_run_rejects_png_without_size() {
        let request = RunRequest {
            emoji: "😀".to_string(),
            size: 0,
            output: Some(PathBuf::from("icon.png")),
        };
        let err = pipeline().run(&request).unwrap_err();
        assert!(matches!(err, EmojiconError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_run_svg_destination_ignores_size_for_format() {
        // A .svg destination with a size still validates as vector
        // pass-through; failure here must come from the resolver/encoder
        // path, not from size handling. Unresolvable whitespace input
        // encodes to an empty key and fails before any network call.
        let request = RunRequest {
            emoji: "   ".to_string(),
            size: 64,
            output: Some(PathBuf::from("icon.svg")),
        };
        let err = pipeline().run(&request).unwrap_err();
        assert!(matches!(err, EmojiconError::InvalidCodePoints { .. }));
    }

    // Network-touching end-to-end runs live in tests/cli_run.rs.
}
