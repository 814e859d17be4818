#![allow(dead_code)]

use geowalle::interpreter::{
    renderer::Renderer,
    value::{
        color::Color,
        figure::{Arc, Circle, Figure, Line, Point, Ray, Segment},
    },
};

/// One call to a draw method.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawn {
    pub figure: Figure,
    pub color:  Color,
    pub label:  Option<String>,
}

/// A renderer that remembers everything it was asked to do.
#[derive(Debug)]
pub struct RecordingRenderer {
    pub width:   u32,
    pub height:  u32,
    pub drawn:   Vec<Drawn>,
    pub printed: Vec<String>,
    pub errors:  Vec<String>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self { width:   100,
               height:  100,
               drawn:   Vec::new(),
               printed: Vec::new(),
               errors:  Vec::new(), }
    }
}

impl RecordingRenderer {
    fn record(&mut self, figure: Figure, color: Color, label: Option<&str>) {
        self.drawn.push(Drawn { figure,
                                color,
                                label: label.map(str::to_string) });
    }
}

impl Renderer for RecordingRenderer {
    fn canvas_width(&self) -> u32 {
        self.width
    }

    fn canvas_height(&self) -> u32 {
        self.height
    }

    fn draw_point(&mut self, point: &Point, color: Color, label: Option<&str>) {
        self.record(Figure::Point(*point), color, label);
    }

    fn draw_line(&mut self, line: &Line, color: Color, label: Option<&str>) {
        self.record(Figure::Line(*line), color, label);
    }

    fn draw_segment(&mut self, segment: &Segment, color: Color, label: Option<&str>) {
        self.record(Figure::Segment(*segment), color, label);
    }

    fn draw_ray(&mut self, ray: &Ray, color: Color, label: Option<&str>) {
        self.record(Figure::Ray(*ray), color, label);
    }

    fn draw_circle(&mut self, circle: &Circle, color: Color, label: Option<&str>) {
        self.record(Figure::Circle(*circle), color, label);
    }

    fn draw_arc(&mut self, arc: &Arc, color: Color, label: Option<&str>) {
        self.record(Figure::Arc(*arc), color, label);
    }

    fn print(&mut self, text: &str) {
        self.printed.push(text.to_string());
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
