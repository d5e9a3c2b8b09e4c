//! Drawing surface trait for host render backends.
//!
//! The simulation draws through this capability interface instead of a
//! concrete canvas, so the renderer can run against a Canvas2D or GPU
//! backend in production and a recording surface in tests. Implementors
//! provide the primitives; the depth-sorted renderer decides what to
//! draw with them.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque RGB color in sRGB bytes. Pod so palettes and draw-op buffers
/// can be handed to a GPU/wasm host without repacking.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
}

/// One cubic bezier segment of a closed path, in local (unrotated)
/// coordinates relative to the path origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub c1: Vec2,
    pub c2: Vec2,
    pub to: Vec2,
}

/// A radial gradient color stop. `offset` is 0 at the center, 1 at the
/// outer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
    pub alpha: f32,
}

/// Primitive draw operations a render backend must provide.
///
/// Alpha and blur are scoped state, canvas-style: `set_alpha` applies
/// to subsequent fills/strokes, `set_blur`/`clear_blur` bracket the
/// draws that render under a blur filter.
pub trait Surface {
    /// Clear the whole surface.
    fn clear(&mut self);

    /// Set the compositing alpha for subsequent draws.
    fn set_alpha(&mut self, alpha: f32);

    /// Apply a blur filter of the given pixel radius to subsequent draws.
    fn set_blur(&mut self, radius: f32);

    /// Remove any active blur filter.
    fn clear_blur(&mut self);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Stroke a line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Fill a closed path of cubic bezier segments starting at the
    /// local origin, rotated by `rotation` and translated to `origin`.
    fn fill_bezier(&mut self, origin: Vec2, rotation: f32, curves: &[CubicBezier], color: Color);

    /// Fill an ellipse with radii `rx`/`ry`, rotated by `rotation`.
    fn fill_ellipse(&mut self, center: Vec2, rotation: f32, rx: f32, ry: f32, color: Color);

    /// Fill a disc with a radial gradient defined by `stops`.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);

    /// Stroke an axis-aligned ellipse outline at an explicit alpha
    /// (independent of the scoped alpha).
    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        rx: f32,
        ry: f32,
        width: f32,
        color: Color,
        alpha: f32,
    );
}

/// A recorded draw call, one per `Surface` method invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    SetAlpha(f32),
    SetBlur(f32),
    ClearBlur,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Bezier {
        origin: Vec2,
        rotation: f32,
        curves: Vec<CubicBezier>,
        color: Color,
    },
    Ellipse {
        center: Vec2,
        rotation: f32,
        rx: f32,
        ry: f32,
        color: Color,
    },
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
    },
    StrokeEllipse {
        center: Vec2,
        rx: f32,
        ry: f32,
        width: f32,
        color: Color,
        alpha: f32,
    },
}

/// Surface that records every draw call instead of producing pixels.
/// Used by the tests and the headless demo.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::SetAlpha(alpha));
    }

    fn set_blur(&mut self, radius: f32) {
        self.ops.push(DrawOp::SetBlur(radius));
    }

    fn clear_blur(&mut self) {
        self.ops.push(DrawOp::ClearBlur);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_bezier(&mut self, origin: Vec2, rotation: f32, curves: &[CubicBezier], color: Color) {
        self.ops.push(DrawOp::Bezier {
            origin,
            rotation,
            curves: curves.to_vec(),
            color,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, rotation: f32, rx: f32, ry: f32, color: Color) {
        self.ops.push(DrawOp::Ellipse {
            center,
            rotation,
            rx,
            ry,
            color,
        });
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.ops.push(DrawOp::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        rx: f32,
        ry: f32,
        width: f32,
        color: Color,
        alpha: f32,
    ) {
        self.ops.push(DrawOp::StrokeEllipse {
            center,
            rx,
            ry,
            width,
            color,
            alpha,
        });
    }
}
