//! Command-recording surface
//!
//! Keeps the ordered list of operations a render issued, together with the
//! transform in effect for each draw, so tile placement can be inspected
//! without rasterising.

use crate::surface::Surface;
use image::{Rgba, RgbaImage};
use kurbo::{Affine, Rect, Vec2};

/// One operation issued against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Rectangle reset to transparent
    ClearRect {
        /// Rectangle in the local frame at the time of the call
        rect: Rect,
        /// Transform in effect
        transform: Affine,
    },
    /// Solid rectangle fill
    FillRect {
        /// Rectangle in the local frame at the time of the call
        rect: Rect,
        /// Fill color
        color: Rgba<u8>,
        /// Transform in effect
        transform: Affine,
    },
    /// Origin translation
    Translate {
        /// Horizontal shift
        dx: f64,
        /// Vertical shift
        dy: f64,
    },
    /// Rotation about the local origin
    Rotate {
        /// Angle in radians, clockwise on screen
        radians: f64,
    },
    /// Scaled image draw
    DrawImage {
        /// Destination rectangle in the local frame
        dest: Rect,
        /// Transform in effect
        transform: Affine,
        /// Source image dimensions (width, height)
        image_size: (u32, u32),
    },
}

/// Surface that stores commands rather than pixels
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    transform: Affine,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording of the given size
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            commands: Vec::new(),
        }
    }

    /// All commands issued so far, in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Image draws with the transform each was issued under
    pub fn image_draws(&self) -> impl Iterator<Item = (Rect, Affine)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::DrawImage {
                dest, transform, ..
            } => Some((*dest, *transform)),
            _ => None,
        })
    }

    /// Forget recorded commands, keeping the current transform
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect {
            rect,
            transform: self.transform,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            transform: self.transform,
        });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * Affine::translate(Vec2::new(dx, dy));
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * Affine::rotate(radians);
        self.commands.push(DrawCommand::Rotate { radians });
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            dest,
            transform: self.transform,
            image_size: image.dimensions(),
        });
    }
}
