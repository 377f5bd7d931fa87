//! Tile image loading
//!
//! Sources are decoded in order and counted down; the set only becomes
//! available once every source has decoded. A failed source stops the load,
//! so a preview waiting on it never becomes ready.

use crate::io::configuration::{SAMPLE_MINI_SIZE, SAMPLE_SIZE};
use crate::io::error::{PatternError, Result, invalid_parameter};
use image::{Rgba, RgbaImage};
use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;

/// Motifs compiled into the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundledAsset {
    /// Low resolution motif
    SampleMini,
    /// Full resolution motif
    Sample,
}

impl BundledAsset {
    /// Edge length of the rendered motif in pixels
    pub const fn size(self) -> u32 {
        match self {
            Self::SampleMini => SAMPLE_MINI_SIZE,
            Self::Sample => SAMPLE_SIZE,
        }
    }

    /// Draw the motif: a disc with a pointer on top and an off-centre
    /// highlight, so rotation and mirroring are both visible
    pub fn render(self) -> RgbaImage {
        let size = self.size();
        let scale = f64::from(size);
        RgbaImage::from_fn(size, size, |x, y| {
            let u = (f64::from(x) + 0.5) / scale;
            let v = (f64::from(y) + 0.5) / scale;
            motif_pixel(u, v)
        })
    }
}

const DISC: Rgba<u8> = Rgba([90, 40, 140, 255]);
const POINTER: Rgba<u8> = Rgba([255, 140, 0, 255]);
const HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn motif_pixel(u: f64, v: f64) -> Rgba<u8> {
    let within = |cx: f64, cy: f64, radius: f64| (u - cx).hypot(v - cy) <= radius;

    if within(0.62, 0.5, 0.09) {
        HIGHLIGHT
    } else if within(0.5, 0.6, 0.36) {
        DISC
    } else if (0.04..0.32).contains(&v) && (u - 0.5).abs() <= (v - 0.04) * 0.7 {
        POINTER
    } else {
        CLEAR
    }
}

/// Where a tile image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// One of the built-in motifs
    Bundled(BundledAsset),
    /// An image file on disk
    File(PathBuf),
    /// Encoded image data already in memory
    Bytes(Vec<u8>),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled(asset) => write!(f, "bundled {asset:?}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bytes(bytes) => write!(f, "{} bytes in memory", bytes.len()),
        }
    }
}

impl AssetSource {
    /// Decode the source into an RGBA image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or is not a supported image format
    /// - The in-memory bytes are not a supported image format
    pub fn decode(&self) -> Result<RgbaImage> {
        match self {
            Self::Bundled(asset) => Ok(asset.render()),
            Self::File(path) => image::open(path)
                .map(|decoded| decoded.to_rgba8())
                .map_err(|source| PatternError::ImageLoad {
                    path: path.clone(),
                    source,
                }),
            Self::Bytes(bytes) => image::load_from_memory(bytes)
                .map(|decoded| decoded.to_rgba8())
                .map_err(|source| PatternError::ImageDecode {
                    len: bytes.len(),
                    source,
                }),
        }
    }
}

/// Decoded images, in source order
#[derive(Debug, Clone)]
pub struct AssetSet {
    images: Vec<RgbaImage>,
}

impl AssetSet {
    /// Image used as the pattern motif
    ///
    /// With several sources the second one is the motif, the first being a
    /// low resolution companion; a single source is the motif itself.
    pub fn primary(&self) -> Option<&RgbaImage> {
        self.images.get(1).or_else(|| self.images.first())
    }

    /// Image decoded from the source at `index`
    pub fn get(&self, index: usize) -> Option<&RgbaImage> {
        self.images.get(index)
    }

    /// Number of decoded images
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the set holds no images
    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Counts down a list of sources as they decode
#[derive(Debug)]
pub struct AssetLoader {
    pending: VecDeque<AssetSource>,
    loaded: Vec<RgbaImage>,
}

impl AssetLoader {
    /// Queue `sources` for decoding
    pub fn new(sources: impl IntoIterator<Item = AssetSource>) -> Self {
        let pending: VecDeque<_> = sources.into_iter().collect();
        Self {
            loaded: Vec::with_capacity(pending.len()),
            pending,
        }
    }

    /// Both bundled motifs, low resolution first
    pub fn bundled() -> Self {
        Self::new([
            AssetSource::Bundled(BundledAsset::SampleMini),
            AssetSource::Bundled(BundledAsset::Sample),
        ])
    }

    /// Sources still waiting to be decoded
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Whether every queued source has decoded
    pub fn is_ready(&self) -> bool {
        self.pending.is_empty() && !self.loaded.is_empty()
    }

    /// Decode the next source, returning how many remain afterwards
    ///
    /// # Errors
    ///
    /// Returns the decoding error of the source; it is left at the front of
    /// the queue, so the loader stays not ready
    pub fn load_next(&mut self) -> Result<usize> {
        if let Some(source) = self.pending.front() {
            let decoded = source.decode().inspect_err(|error| {
                log::warn!("asset {source} failed to load: {error}");
            })?;
            log::debug!(
                "decoded asset {source} ({}x{})",
                decoded.width(),
                decoded.height()
            );
            self.loaded.push(decoded);
            self.pending.pop_front();
        }
        Ok(self.pending.len())
    }

    /// Decode every remaining source
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No sources were queued
    /// - Any source fails to decode
    pub fn load_all(mut self) -> Result<AssetSet> {
        if self.pending.is_empty() && self.loaded.is_empty() {
            return Err(invalid_parameter(
                "assets",
                &0,
                &"at least one image source is required",
            ));
        }
        while self.load_next()? > 0 {}
        log::info!("{} asset(s) ready", self.loaded.len());
        Ok(AssetSet {
            images: self.loaded,
        })
    }
}
