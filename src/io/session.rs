//! Interactive preview state
//!
//! A [`PreviewSession`] owns the surface and the adjustable parameters and
//! repaints whenever either changes. Until assets are attached it is not
//! ready, and every repaint request is a no-op.

use crate::io::assets::AssetSet;
use crate::io::color::Color;
use crate::io::configuration::{
    DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MAX_SURFACE_DIMENSION, ROTATION_RANGE,
    SPACING_RANGE, TILE_SIZE_RANGE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::sampling::Smoothing;
use crate::pattern::{PatternConfig, PatternParameters, render};
use crate::surface::RasterSurface;
use std::ops::RangeInclusive;

/// Surface, parameters and assets of one live preview
#[derive(Debug)]
pub struct PreviewSession {
    surface: RasterSurface,
    parameters: PatternParameters,
    assets: Option<AssetSet>,
    renders: usize,
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(parameter: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<f64> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be within {}..={}", range.start(), range.end()),
        ))
    }
}

fn check_dimension(parameter: &'static str, value: u32) -> Result<u32> {
    if value == 0 || value > MAX_SURFACE_DIMENSION {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be within 1..={MAX_SURFACE_DIMENSION}"),
        ))
    } else {
        Ok(value)
    }
}

impl PreviewSession {
    /// Default-sized session with default parameters and no assets
    pub fn new() -> Self {
        Self {
            surface: RasterSurface::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT),
            parameters: PatternParameters::default(),
            assets: None,
            renders: 0,
        }
    }

    /// Select the image filter for subsequent renders
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.surface = self.surface.with_smoothing(smoothing);
        self
    }

    /// Whether assets are attached and renders will draw
    pub const fn is_ready(&self) -> bool {
        self.assets.is_some()
    }

    /// Current parameters
    pub const fn parameters(&self) -> PatternParameters {
        self.parameters
    }

    /// Surface holding the most recent render
    pub const fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// Number of completed renders
    pub const fn render_count(&self) -> usize {
        self.renders
    }

    /// Attach decoded assets, mark the session ready and render
    ///
    /// # Errors
    ///
    /// Returns an error if the render configuration is invalid
    pub fn attach_assets(&mut self, assets: AssetSet) -> Result<bool> {
        self.assets = Some(assets);
        log::info!("preview ready");
        self.render()
    }

    /// Rebuild the surface at a new size and repaint
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds the
    /// maximum surface size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool> {
        let width = check_dimension("width", width)?;
        let height = check_dimension("height", height)?;
        self.surface.resize(width, height);
        self.render()
    }

    /// Change the anchor spacing and repaint
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is outside the spacing control range
    pub fn set_spacing(&mut self, spacing: f64) -> Result<bool> {
        self.parameters.spacing = check_range("spacing", spacing, &SPACING_RANGE)?;
        self.render()
    }

    /// Change the drawn tile size and repaint
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is outside the size control range
    pub fn set_tile_size(&mut self, tile_size: f64) -> Result<bool> {
        self.parameters.tile_size = check_range("tile size", tile_size, &TILE_SIZE_RANGE)?;
        self.render()
    }

    /// Change the per-tile rotation and repaint
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is outside the rotation control range
    pub fn set_rotation(&mut self, degrees: f64) -> Result<bool> {
        self.parameters.rotation_degrees = check_range("rotation", degrees, &ROTATION_RANGE)?;
        self.render()
    }

    /// Change the background color and repaint
    ///
    /// # Errors
    ///
    /// Returns an error if the render configuration is invalid
    pub fn set_background(&mut self, color: Color) -> Result<bool> {
        self.parameters.background = color.rgba();
        self.render()
    }

    /// Repaint the surface from the current state
    ///
    /// Returns `Ok(false)` without touching the surface while no assets are
    /// attached, `Ok(true)` after a render.
    ///
    /// # Errors
    ///
    /// Returns an error if the render configuration is invalid
    pub fn render(&mut self) -> Result<bool> {
        let Some(image) = self.assets.as_ref().and_then(AssetSet::primary) else {
            log::debug!("render skipped: assets not ready");
            return Ok(false);
        };

        let config = PatternConfig::for_surface(&self.surface, self.parameters, image)?;
        render(&mut self.surface, &config);
        self.renders += 1;
        Ok(true)
    }

    /// Consume the session, returning the surface
    pub fn into_surface(self) -> RasterSurface {
        self.surface
    }
}
