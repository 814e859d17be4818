use crate::interpreter::value::{
    color::Color,
    figure::{Arc, Circle, Line, Point, Ray, Segment},
};

/// The drawing surface a program talks to.
///
/// The interpreter never renders anything itself. Every `draw`, `print` and
/// error report goes through this trait, and the canvas size it reports
/// bounds all random coordinates.
pub trait Renderer {
    /// Width of the canvas in drawing units.
    fn canvas_width(&self) -> u32;
    /// Height of the canvas in drawing units.
    fn canvas_height(&self) -> u32;

    /// Draws a point.
    fn draw_point(&mut self, point: &Point, color: Color, label: Option<&str>);
    /// Draws a line.
    fn draw_line(&mut self, line: &Line, color: Color, label: Option<&str>);
    /// Draws a segment.
    fn draw_segment(&mut self, segment: &Segment, color: Color, label: Option<&str>);
    /// Draws a ray.
    fn draw_ray(&mut self, ray: &Ray, color: Color, label: Option<&str>);
    /// Draws a circle.
    fn draw_circle(&mut self, circle: &Circle, color: Color, label: Option<&str>);
    /// Draws an arc.
    fn draw_arc(&mut self, arc: &Arc, color: Color, label: Option<&str>);

    /// Shows the textual form of a value.
    fn print(&mut self, text: &str);
    /// Shows a one-line error report.
    fn report_error(&mut self, message: &str);
}

/// Canvas side used when a host doesn't choose one.
pub const DEFAULT_CANVAS_SIZE: u32 = 100;

/// A renderer that ignores everything it is given.
///
/// Useful for evaluating programs only for their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullRenderer {
    /// Canvas width reported to the interpreter.
    pub width:  u32,
    /// Canvas height reported to the interpreter.
    pub height: u32,
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self { width:  DEFAULT_CANVAS_SIZE,
               height: DEFAULT_CANVAS_SIZE, }
    }
}

impl Renderer for NullRenderer {
    fn canvas_width(&self) -> u32 {
        self.width
    }

    fn canvas_height(&self) -> u32 {
        self.height
    }

    fn draw_point(&mut self, _: &Point, _: Color, _: Option<&str>) {}

    fn draw_line(&mut self, _: &Line, _: Color, _: Option<&str>) {}

    fn draw_segment(&mut self, _: &Segment, _: Color, _: Option<&str>) {}

    fn draw_ray(&mut self, _: &Ray, _: Color, _: Option<&str>) {}

    fn draw_circle(&mut self, _: &Circle, _: Color, _: Option<&str>) {}

    fn draw_arc(&mut self, _: &Arc, _: Color, _: Option<&str>) {}

    fn print(&mut self, _: &str) {}

    fn report_error(&mut self, _: &str) {}
}
