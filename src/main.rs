use std::{fs, path::Path};

use clap::Parser;
use geowalle::{
    get_result_with,
    interpreter::{
        evaluator::core::Settings,
        renderer::{DEFAULT_CANVAS_SIZE, Renderer},
        value::{
            color::Color,
            figure::{Arc, Circle, Line, Point, Ray, Segment},
        },
    },
};

/// geowalle runs G# programs, a small language for geometric constructions.
/// Drawn figures and printed values are written to standard output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells geowalle to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last expression
    /// instruction of the program.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Seed for every random choice the program makes.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Canvas width used to place random figures.
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    width: u32,

    /// Canvas height used to place random figures.
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    height: u32,

    contents: String,
}

/// Writes every draw call as a line of text.
struct ConsoleRenderer {
    width:  u32,
    height: u32,
}

impl ConsoleRenderer {
    fn emit(figure: &str, color: Color, label: Option<&str>) {
        match label {
            Some(label) => println!("draw {figure} [{color}] \"{label}\""),
            None => println!("draw {figure} [{color}]"),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn canvas_width(&self) -> u32 {
        self.width
    }

    fn canvas_height(&self) -> u32 {
        self.height
    }

    fn draw_point(&mut self, point: &Point, color: Color, label: Option<&str>) {
        Self::emit(&point.to_string(), color, label);
    }

    fn draw_line(&mut self, line: &Line, color: Color, label: Option<&str>) {
        Self::emit(&format!("line({}, {})", line.p1, line.p2), color, label);
    }

    fn draw_segment(&mut self, segment: &Segment, color: Color, label: Option<&str>) {
        Self::emit(&format!("segment({}, {})", segment.p1, segment.p2), color, label);
    }

    fn draw_ray(&mut self, ray: &Ray, color: Color, label: Option<&str>) {
        Self::emit(&format!("ray({}, {})", ray.p1, ray.p2), color, label);
    }

    fn draw_circle(&mut self, circle: &Circle, color: Color, label: Option<&str>) {
        Self::emit(&format!("circle({}, {})", circle.center, circle.radius), color, label);
    }

    fn draw_arc(&mut self, arc: &Arc, color: Color, label: Option<&str>) {
        Self::emit(&format!("arc({}, {}, {}, {})", arc.center, arc.start, arc.end, arc.radius),
                   color,
                   label);
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }

    fn report_error(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

fn main() {
    let args = Args::parse();

    let (script, import_root) = if args.file {
        let source = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                                           eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                                     &args.contents);
                                                           std::process::exit(1);
                                                       });
        let root = Path::new(&args.contents).parent()
                                            .map(Path::to_path_buf)
                                            .unwrap_or_default();
        (source, root)
    } else {
        (args.contents, Settings::default().import_root)
    };

    let settings = Settings { seed: args.seed,
                              import_root,
                              ..Settings::default() };
    let mut renderer = ConsoleRenderer { width:  args.width,
                                         height: args.height, };

    match get_result_with(&script, &mut renderer, settings) {
        Ok(value) if args.pipe_mode => println!("{value}"),
        Ok(_) => {},
        Err(errors) => {
            for error in &errors {
                renderer.report_error(&error.report());
            }
            std::process::exit(1);
        },
    }
}
