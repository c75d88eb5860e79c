//! Reading and writing the stitch path file and the binary view configuration.
//!
//! The path file is plain text with one relative point per line, `"<x> <y>"`.
//!
//! The configuration is a fixed 128-byte little-endian record:
//!
//! | offset | size | field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 100  | file path, UTF-8, NUL-terminated        |
//! | 100    | 4    | padding (zero)                          |
//! | 104    | 8    | scale, `f64`                            |
//! | 112    | 8    | camera x, `f64`                         |
//! | 120    | 8    | camera y, `f64`                         |
//!
//! The record carries no version tag.

use crate::constants::{DEFAULT_FILE_PATH, DEFAULT_SCALE, FILE_PATH_LENGTH};
use crate::types::{vec2, Vec2};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SCALE_OFFSET: usize = 104;
const CAMERA_X_OFFSET: usize = 112;
const CAMERA_Y_OFFSET: usize = 120;
/// Total size of the encoded configuration record.
pub const CONFIG_RECORD_SIZE: usize = 128;

/// Errors raised while loading or saving files.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// A line of a path file is not two numbers separated by a space.
    #[error("line {line}: cannot parse {content:?} as a point")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending line text
        content: String,
    },
    /// The configuration record is truncated or holds invalid values.
    #[error("corrupt configuration: {0}")]
    CorruptConfig(String),
    /// No file path was given.
    #[error("no file path given")]
    EmptyFilePath,
}

impl PersistError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            PersistError::NotFound(path.to_path_buf())
        } else {
            PersistError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Formats relative points as path-file text.
pub fn format_points(points: &[Vec2]) -> String {
    let mut text = String::new();
    for p in points {
        let _ = writeln!(text, "{} {}", p.x, p.y);
    }
    text
}

/// Parses path-file text. The first malformed line aborts the whole parse.
pub fn parse_points(text: &str) -> Result<Vec<Vec2>, PersistError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            parse_point(line).ok_or_else(|| PersistError::Parse {
                line: i + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

fn parse_point(line: &str) -> Option<Vec2> {
    let (x, y) = line.split_once(' ')?;
    let x = x.trim().parse::<f64>().ok()?;
    let y = y.trim().parse::<f64>().ok()?;
    Some(vec2(x, y))
}

/// Writes relative points to a path file, replacing its contents.
pub fn save_points(path: &Path, points: &[Vec2]) -> Result<(), PersistError> {
    fs::write(path, format_points(points)).map_err(|e| PersistError::from_io(path, e))
}

/// Reads relative points from a path file.
pub fn load_points(path: &Path) -> Result<Vec<Vec2>, PersistError> {
    let text = fs::read_to_string(path).map_err(|e| PersistError::from_io(path, e))?;
    parse_points(&text)
}

/// Persisted view configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path file that was open when the configuration was saved
    pub current_file_path: String,
    /// Pixels per base unit
    pub scale: f64,
    /// Base-space point at the canvas top-left
    pub camera: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_file_path: DEFAULT_FILE_PATH.to_string(),
            scale: DEFAULT_SCALE,
            camera: Vec2::ZERO,
        }
    }
}

impl Config {
    /// Encodes the configuration as a fixed-size record.
    ///
    /// The file path is truncated on a character boundary so that it fits
    /// its field together with the NUL terminator.
    pub fn encode(&self) -> [u8; CONFIG_RECORD_SIZE] {
        let mut record = [0u8; CONFIG_RECORD_SIZE];
        let path = truncate_to_boundary(&self.current_file_path, FILE_PATH_LENGTH - 1);
        if path.len() < self.current_file_path.len() {
            log::warn!(
                "File path {:?} truncated to {:?} in the configuration",
                self.current_file_path,
                path
            );
        }
        record[..path.len()].copy_from_slice(path.as_bytes());
        record[SCALE_OFFSET..SCALE_OFFSET + 8].copy_from_slice(&self.scale.to_le_bytes());
        record[CAMERA_X_OFFSET..CAMERA_X_OFFSET + 8].copy_from_slice(&self.camera.x.to_le_bytes());
        record[CAMERA_Y_OFFSET..CAMERA_Y_OFFSET + 8].copy_from_slice(&self.camera.y.to_le_bytes());
        record
    }

    /// Decodes a record produced by [`Config::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, PersistError> {
        if bytes.len() < CONFIG_RECORD_SIZE {
            return Err(PersistError::CorruptConfig(format!(
                "expected {CONFIG_RECORD_SIZE} bytes, found {}",
                bytes.len()
            )));
        }
        let field = &bytes[..FILE_PATH_LENGTH];
        let end = field.iter().position(|&b| b == 0).ok_or_else(|| {
            PersistError::CorruptConfig("file path is not NUL-terminated".to_string())
        })?;
        let current_file_path = std::str::from_utf8(&field[..end])
            .map_err(|_| PersistError::CorruptConfig("file path is not UTF-8".to_string()))?
            .to_string();

        let scale = read_f64(bytes, SCALE_OFFSET);
        let camera = vec2(read_f64(bytes, CAMERA_X_OFFSET), read_f64(bytes, CAMERA_Y_OFFSET));
        if !scale.is_finite() || scale <= 0.0 || !camera.is_finite() {
            return Err(PersistError::CorruptConfig(format!(
                "invalid view (scale {scale}, camera {}, {})",
                camera.x, camera.y
            )));
        }

        Ok(Self {
            current_file_path,
            scale,
            camera,
        })
    }

    /// Reads the configuration record from `path`.
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let bytes = fs::read(path).map_err(|e| PersistError::from_io(path, e))?;
        Self::decode(&bytes)
    }

    /// Reads the configuration, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(PersistError::NotFound(_)) => {
                log::info!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Ignoring configuration: {err}");
                Self::default()
            }
        }
    }

    /// Writes the full configuration record to `path`.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        fs::write(path, self.encode()).map_err(|e| PersistError::from_io(path, e))
    }
}

fn read_f64(bytes: &[u8], offset: usize) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[offset..offset + 8]);
    f64::from_le_bytes(buf)
}

fn truncate_to_boundary(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
