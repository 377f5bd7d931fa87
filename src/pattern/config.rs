//! Render configuration
//!
//! [`PatternParameters`] holds the values a user adjusts; [`PatternConfig`]
//! pairs them with a surface size and a decoded tile image for exactly one
//! render call. Construction validates everything the tiler relies on:
//! positive finite sizes, a finite rotation, and a spacing large enough
//! relative to the surface that the anchor walk always advances.

use crate::io::configuration::{
    DEFAULT_ROTATION, DEFAULT_SPACING, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH,
    DEFAULT_TILE_SIZE, MAX_LATTICE_STEPS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::surface::Surface;
use image::{Rgba, RgbaImage};

/// Cyan, the preview's initial background
pub const DEFAULT_BACKGROUND_RGBA: Rgba<u8> = Rgba([0, 255, 255, 255]);

/// User-adjustable pattern parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParameters {
    /// Distance between neighbouring tile anchors on both axes
    pub spacing: f64,
    /// Edge length of each drawn tile
    pub tile_size: f64,
    /// Per-tile rotation in degrees, clockwise
    pub rotation_degrees: f64,
    /// Color painted beneath the tiles
    pub background: Rgba<u8>,
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            tile_size: DEFAULT_TILE_SIZE,
            rotation_degrees: DEFAULT_ROTATION,
            background: DEFAULT_BACKGROUND_RGBA,
        }
    }
}

/// Immutable input to a single [`crate::pattern::render`] call
#[derive(Debug, Clone, Copy)]
pub struct PatternConfig<'a> {
    surface_width: f64,
    surface_height: f64,
    spacing: f64,
    tile_size: f64,
    rotation_degrees: f64,
    background: Rgba<u8>,
    image: &'a RgbaImage,
}

fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite number greater than zero",
        ))
    }
}

impl<'a> PatternConfig<'a> {
    /// Build a configuration for a surface of `width` × `height` pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - The surface width or height is not finite and positive
    /// - The spacing or tile size is not finite and positive
    /// - The spacing is so small that a surface edge spans more than
    ///   `MAX_LATTICE_STEPS` spacings
    /// - The rotation is not finite
    pub fn new(
        width: f64,
        height: f64,
        parameters: PatternParameters,
        image: &'a RgbaImage,
    ) -> Result<Self> {
        let rotation_degrees = parameters.rotation_degrees;
        if !rotation_degrees.is_finite() {
            return Err(invalid_parameter(
                "rotation",
                &rotation_degrees,
                &"must be a finite number of degrees",
            ));
        }

        let surface_width = require_positive("width", width)?;
        let surface_height = require_positive("height", height)?;
        let spacing = require_positive("spacing", parameters.spacing)?;
        if surface_width.max(surface_height) / spacing > MAX_LATTICE_STEPS {
            return Err(invalid_parameter(
                "spacing",
                &spacing,
                &format!("must cover each surface edge in at most {MAX_LATTICE_STEPS} steps"),
            ));
        }

        Ok(Self {
            surface_width,
            surface_height,
            spacing,
            tile_size: require_positive("tile size", parameters.tile_size)?,
            rotation_degrees,
            background: parameters.background,
            image,
        })
    }

    /// Build a configuration covering the whole of `surface`
    ///
    /// # Errors
    ///
    /// Same conditions as [`PatternConfig::new`]
    pub fn for_surface<S: Surface + ?Sized>(
        surface: &S,
        parameters: PatternParameters,
        image: &'a RgbaImage,
    ) -> Result<Self> {
        Self::new(surface.width(), surface.height(), parameters, image)
    }

    /// Configuration for the default 300 × 500 preview with default parameters
    ///
    /// # Errors
    ///
    /// Never fails for the built-in defaults; the `Result` mirrors [`PatternConfig::new`]
    pub fn with_defaults(image: &'a RgbaImage) -> Result<Self> {
        Self::new(
            f64::from(DEFAULT_SURFACE_WIDTH),
            f64::from(DEFAULT_SURFACE_HEIGHT),
            PatternParameters::default(),
            image,
        )
    }

    /// Surface width in pixels
    pub const fn surface_width(&self) -> f64 {
        self.surface_width
    }

    /// Surface height in pixels
    pub const fn surface_height(&self) -> f64 {
        self.surface_height
    }

    /// Anchor spacing, always positive
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Drawn tile edge length, always positive
    pub const fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Rotation in degrees as supplied
    pub const fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    /// Background fill color
    pub const fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// Tile image drawn at every anchor
    pub const fn image(&self) -> &'a RgbaImage {
        self.image
    }

    /// The adjustable parameters this configuration was built from
    pub const fn parameters(&self) -> PatternParameters {
        PatternParameters {
            spacing: self.spacing,
            tile_size: self.tile_size,
            rotation_degrees: self.rotation_degrees,
            background: self.background,
        }
    }
}
