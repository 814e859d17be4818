mod common;

use std::fs;

use common::{Drawn, RecordingRenderer};
use geowalle::{
    error::{Error, ErrorKind},
    execute, get_result, get_result_with,
    interpreter::{
        evaluator::core::Settings,
        lexer::{TokenKind, scan},
        renderer::NullRenderer,
        value::{
            color::Color,
            core::Value,
            figure::{Figure, Measure, Point},
        },
    },
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut renderer = NullRenderer::default();
            let settings = Settings { import_root: "book/src".into(),
                                      ..Settings::default() };
            if let Err(e) = get_result_with(&code, &mut renderer, settings) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```gsharp") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run(src: &str) -> Result<Value, Vec<Error>> {
    get_result(src, &mut RecordingRenderer::default())
}

fn assert_value(src: &str, expected: Value) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected, "unexpected value for {src:?}"),
        Err(e) => panic!("Script failed: {e:?}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e:?}");
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(errors) => assert_eq!(errors[0].kind(), Some(kind), "errors: {errors:?}"),
    }
}

fn number(n: f64) -> Value {
    Value::Number(n)
}

fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn arithmetic_precedence() {
    assert_value("3+4*2;", number(11.0));
    assert_value("(3 + 4) * 2;", number(14.0));
    assert_value("10 - 4 - 3;", number(3.0));
    assert_value("7 % 4;", number(3.0));
    assert_value("2 ^ 3 ^ 2;", number(512.0));
    assert_value("-2 ^ 2;", number(4.0));
    assert_value("--3;", number(3.0));
}

#[test]
fn number_constants_and_literals() {
    assert_value("PI;", number(std::f64::consts::PI));
    assert_value("E;", number(std::f64::consts::E));
    assert_value("Ex = 2; Ex * E;", number(2.0 * std::f64::consts::E));
    assert_value("2.5 * 2;", number(5.0));
    assert_value("\"geo\" + \"walle\";", Value::Str("geowalle".to_string()));
    assert_value("true;", Value::Bool(true));
    assert_value("undefined;", Value::Undefined);
}

#[test]
fn comparisons_and_logic() {
    assert_value("1 < 2 & 2 < 3;", Value::Bool(true));
    assert_value("1 >= 2 | 2 <= 3;", Value::Bool(true));
    assert_value("true | false & false;", Value::Bool(false));
    assert_value("!(1 == 1);", Value::Bool(false));
    assert_value("1 != 2;", Value::Bool(true));
    assert_value("1 == \"1\";", Value::Bool(false));
    assert_value("undefined == undefined;", Value::Bool(true));
    assert_value("point(1, 2) == point(1, 2);", Value::Bool(true));
}

#[test]
fn undefined_is_absorbed_by_addition() {
    assert_value("undefined + 3;", number(3.0));
    assert_value("3 + undefined;", number(3.0));
}

#[test]
fn type_errors_are_runtime_errors() {
    assert_failure("1 + \"a\";", ErrorKind::Runtime);
    assert_failure("!3;", ErrorKind::Runtime);
    assert_failure("-true;", ErrorKind::Runtime);
    assert_failure("1 & true;", ErrorKind::Runtime);
    assert_failure("if 1 then 2 else 3;", ErrorKind::Runtime);
    assert_failure("1 / 0;", ErrorKind::Runtime);
    assert_failure("5 % 0;", ErrorKind::Runtime);
    assert_failure("{1} == {1};", ErrorKind::Runtime);
}

#[test]
fn conditionals_evaluate_one_branch() {
    assert_value("if 1 < 2 then \"yes\" else \"no\";", Value::Str("yes".to_string()));
    assert_value("if 1 > 2 then 1 / 0 else 7;", number(7.0));
}

#[test]
fn let_expressions() {
    assert_value("let x = 3; in x+1;", number(4.0));
    assert_value("let a = 1; b = 2; in a + b;", number(3.0));
    assert_value("x = 1; let x = 2; in x;", number(2.0));
    assert_value("x = 1; y = let x = 5; in x; x + y;", number(6.0));
    assert_value("let f(n) = n * 2; in f(4);", number(8.0));
}

#[test]
fn constants_are_write_once() {
    assert_failure("let x = 1; x = 2; in x;", ErrorKind::Semantic);
    assert_failure("x = 1; x = 2;", ErrorKind::Semantic);
    assert_failure("y = x + 1;", ErrorKind::Semantic);
    assert_success("_ = 1; _ = 2;");
}

#[test]
fn multiple_assignment() {
    assert_value("a, b, c = {1, 2, 3}; a + b + c;", number(6.0));
    assert_value("a, b, c = {1, 2}; c;", Value::Undefined);
    assert_value("_, b = {1, 2}; b;", number(2.0));
    assert_value("a, b, c = {10...}; a + b + c;", number(33.0));
    assert_failure("a, b = 3;", ErrorKind::Semantic);
}

#[test]
fn sequences() {
    assert_value("count({1...5});", number(5.0));
    assert_value("a, b, c, d, e, f = {1...5}; a + e;", number(6.0));
    assert_value("count({5...1});", number(0.0));
    assert_value("count({});", number(0.0));
    assert_value("count({1...});", Value::Undefined);
    assert_value("count({1, 2} + {5...7});", number(5.0));
    assert_value("count({1, 2} + {3...});", Value::Undefined);
    assert_value("count({} + {\"a\"});", number(1.0));
    assert_value("count({5...1} + {\"a\"});", number(1.0));
    assert_value("count({5...1} + {\"a\"} + {\"b\"});", number(2.0));
    assert_failure("{1, \"a\"};", ErrorKind::Semantic);
    assert_failure("{1} + {\"a\"};", ErrorKind::Semantic);
    assert_failure("count(3);", ErrorKind::Semantic);
}

#[test]
fn sequence_bounds_must_be_whole_numbers() {
    assert_failure("{1.5...3};", ErrorKind::Syntax);
    assert_failure("{-1...};", ErrorKind::Syntax);
    assert_failure("{1...x};", ErrorKind::Syntax);
    assert_failure("{0...9007199254740991};", ErrorKind::Syntax);
}

#[test]
fn the_longest_range_can_be_counted() {
    assert_value("count({0...9007199254740990});", number(9_007_199_254_740_991.0));
}

#[test]
fn concatenation_is_associative() {
    let mut renderer = RecordingRenderer::default();
    let src = "print ({1, 2} + {3}) + {4...6}; print {1, 2} + ({3} + {4...6});";
    get_result(src, &mut renderer).unwrap();

    assert_eq!(renderer.printed, vec!["{1, 2, 3, 4, 5, 6}", "{1, 2, 3, 4, 5, 6}"]);
}

#[test]
fn infinite_sequences_print_a_prefix() {
    let mut renderer = RecordingRenderer::default();
    get_result("print {1...};", &mut renderer).unwrap();

    let text = &renderer.printed[0];
    assert!(text.starts_with("{1, 2, 3, "), "{text}");
    assert!(text.ends_with("19, 20, ...}"), "{text}");
}

#[test]
fn functions_and_recursion() {
    assert_value("double(x) = x * 2; double(21);", number(42.0));
    assert_value("fib(n) = if n <= 1 then n else fib(n - 1) + fib(n - 2); fib(10);",
                 number(55.0));
    assert_value("add(a, b) = a + b; add(add(1, 2), 3);", number(6.0));
    assert_value("k = 10; f(x) = x + k; f(1);", number(11.0));
}

#[test]
fn function_declaration_errors() {
    assert_failure("f(x) = x; f(y) = y;", ErrorKind::Semantic);
    assert_failure("sin(x) = x;", ErrorKind::Semantic);
    assert_failure("f(x) = x; f(1, 2);", ErrorKind::Semantic);
    assert_failure("nope(1);", ErrorKind::Semantic);
    assert_failure("f(1) = 2;", ErrorKind::Syntax);
    assert_failure("f(x, x) = x;", ErrorKind::Syntax);
    assert_failure("f(x) = let g(y) = y; in g(x);", ErrorKind::Syntax);
}

#[test]
fn runaway_recursion_is_a_stack_overflow() {
    let settings = Settings { max_call_depth: 32,
                              ..Settings::default() };
    let errors = get_result_with("f(n) = f(n + 1); f(0);",
                                 &mut RecordingRenderer::default(),
                                 settings).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), Some(ErrorKind::Runtime));
    assert!(errors[0].to_string().contains("Stack overflow"));
}

#[test]
fn builtins() {
    assert_value("sqrt(16);", number(4.0));
    assert_value("cos(0);", number(1.0));
    assert_value("exp(0);", number(1.0));
    assert_value("log(8, 2);", number(3.0));
    assert_failure("log(8, 1);", ErrorKind::Semantic);
    assert_failure("log(-8, 2);", ErrorKind::Semantic);
    assert_failure("log(8);", ErrorKind::Semantic);
    assert_failure("sqrt(1, 2);", ErrorKind::Semantic);
    assert_failure("point(1, \"a\");", ErrorKind::Semantic);
    assert_failure("circle(point(0, 0), 3);", ErrorKind::Semantic);
}

#[test]
fn measure_arithmetic() {
    let prelude = "m = measure(point(0, 0), point(3, 4)); ";
    let with = |expr: &str| format!("{prelude}{expr}");

    assert_value(&with("m;"), Value::from(Measure::new(5.0)));
    assert_value(&with("m + m;"), Value::from(Measure::new(10.0)));
    assert_value(&with("m - measure(point(0, 0), point(0, 7));"), Value::from(Measure::new(2.0)));
    assert_value(&with("m * 2.7;"), Value::from(Measure::new(10.0)));
    assert_value(&with("-2 * m;"), Value::from(Measure::new(10.0)));
    assert_value(&with("m / measure(point(0, 0), point(0, 2));"), number(2.5));
    assert_value(&with("m > measure(point(0, 0), point(1, 0));"), Value::Bool(true));
    assert_failure(&with("m + 1;"), ErrorKind::Runtime);
}

#[test]
fn intersect_line_and_circle() {
    let src = "l = line(point(-2, -2), point(2, 2));
               c = circle(point(0, 0), measure(point(0, 0), point(1, 1)));
               intersect(l, c);";
    let Ok(Value::Sequence(points)) = run(src) else {
        panic!("expected a sequence");
    };
    let points = points.iter().collect::<Vec<_>>();

    assert_eq!(points.len(), 2);
    let Value::Figure(Figure::Point(first)) = points[0] else { panic!("not a point") };
    let Value::Figure(Figure::Point(second)) = points[1] else { panic!("not a point") };
    assert!(first.near(point(-1.0, -1.0)), "{first}");
    assert!(second.near(point(1.0, 1.0)), "{second}");
}

#[test]
fn intersect_reports_infinitely_many_points_as_undefined() {
    assert_value("c = circle(point(0, 0), measure(point(0, 0), point(1, 0))); intersect(c, c);",
                 Value::Undefined);
    assert_value("count(intersect(segment(point(0, 0), point(1, 0)), segment(point(0, 1), point(1, 1))));",
                 number(0.0));
    assert_failure("intersect(point(0, 0), 3);", ErrorKind::Semantic);
}

#[test]
fn draw_with_label_and_color() {
    let mut renderer = RecordingRenderer::default();
    get_result("draw point(1,2) \"A\";", &mut renderer).unwrap();

    assert_eq!(renderer.drawn,
               vec![Drawn { figure: Figure::Point(point(1.0, 2.0)),
                            color:  Color::Black,
                            label:  Some("A".to_string()), }]);
}

#[test]
fn draw_sequences_and_rejects_what_cannot_be_drawn() {
    let mut renderer = RecordingRenderer::default();
    get_result("draw {point(0, 0), point(1, 1)} \"pts\";", &mut renderer).unwrap();
    assert_eq!(renderer.drawn.len(), 2);
    assert!(renderer.drawn.iter().all(|d| d.label.as_deref() == Some("pts")));

    assert_failure("draw 3;", ErrorKind::Semantic);
    assert_failure("draw measure(point(0, 0), point(1, 1));", ErrorKind::Semantic);
    assert_failure("draw {1...};", ErrorKind::Semantic);
}

#[test]
fn color_stack() {
    let mut renderer = RecordingRenderer::default();
    let src = "color red; draw point(0, 0);
               color \"Blue\"; draw point(1, 1);
               restore; draw point(2, 2);
               restore; restore; draw point(3, 3);";
    get_result(src, &mut renderer).unwrap();

    let colors = renderer.drawn.iter().map(|d| d.color).collect::<Vec<_>>();
    assert_eq!(colors, vec![Color::Red, Color::Blue, Color::Red, Color::Black]);

    assert_failure("color purple;", ErrorKind::Syntax);
}

#[test]
fn print_with_and_without_label() {
    let mut renderer = RecordingRenderer::default();
    get_result("print 1 + 2 \"sum\"; print point(1, 2);", &mut renderer).unwrap();

    assert_eq!(renderer.printed, vec!["sum: 3", "point(1, 2)"]);
}

#[test]
fn lexical_errors_are_all_reported() {
    let errors = run("x = 12abc;\ny = \"open").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.kind() == Some(ErrorKind::Lexical)));

    assert_failure("x = 1 @ 2;", ErrorKind::Lexical);
    assert_failure("x = 1 . 2;", ErrorKind::Lexical);
}

#[test]
fn syntax_errors_recover_at_semicolons() {
    let errors = run("a = ; b = 2; c = );").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.kind() == Some(ErrorKind::Syntax)));

    assert_failure("x = 1", ErrorKind::Syntax);
    assert_failure("if true then 1;", ErrorKind::Syntax);
}

#[test]
fn evaluation_errors_only_abort_their_instruction() {
    let mut renderer = RecordingRenderer::default();
    let errors = get_result("print 1;\ny = nope;\nprint 2;", &mut renderer).unwrap_err();

    assert_eq!(renderer.printed, vec!["1", "2"]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), Some(2));
}

#[test]
fn execute_reports_through_the_renderer() {
    let mut renderer = RecordingRenderer::default();
    execute("x = 1;\nx = 2;", &mut renderer);
    assert_eq!(renderer.errors,
               vec!["! SEMANTIC ERROR at line 2: Another constant named 'x' already exists and can't be altered."]);

    let mut renderer = RecordingRenderer::default();
    execute("x = 12abc;", &mut renderer);
    assert_eq!(renderer.errors, vec!["! LEXICAL ERROR at line 1: Invalid number '12abc'."]);
}

#[test]
fn imports() {
    let root = std::env::temp_dir().join(format!("geowalle-imports-{}", std::process::id()));
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("lib.gs"), "double(x) = x * 2;\nbase = 21;\n").unwrap();
    fs::write(root.join("broken.gs"), "y = ;\n").unwrap();

    let settings = || Settings { import_root: root.clone(),
                                 ..Settings::default() };
    let mut renderer = RecordingRenderer::default();

    let value = get_result_with("import \"lib.gs\"; import \"lib.gs\"; double(base);",
                                &mut renderer,
                                settings()).unwrap();
    assert_eq!(value, number(42.0));

    let errors = get_result_with("import \"broken.gs\";", &mut renderer, settings()).unwrap_err();
    assert_eq!(errors[0].kind(), Some(ErrorKind::Semantic));

    let errors = get_result_with("import \"missing.gs\";", &mut renderer, settings()).unwrap_err();
    assert_eq!(errors[0].kind(), Some(ErrorKind::Semantic));

    assert_failure("x = 1; import \"lib.gs\";", ErrorKind::Syntax);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn random_declarations_are_reproducible_with_a_seed() {
    let src = "point p; draw p; circle sequence cs; draw cs; line l; draw l;";
    let draw = || {
        let mut renderer = RecordingRenderer::default();
        let settings = Settings { seed: Some(42),
                                  ..Settings::default() };
        get_result_with(src, &mut renderer, settings).unwrap();
        renderer.drawn
    };

    let first = draw();
    assert_eq!(first, draw());
    assert!(first.len() >= 4);

    let Figure::Point(p) = first[0].figure else { panic!("not a point") };
    assert!((0.0..100.0).contains(&p.x) && (0.0..100.0).contains(&p.y));
}

#[test]
fn random_builtins() {
    let Ok(Value::Number(n)) = run("count(samples());") else { panic!("expected a number") };
    assert!((2.0..=19.0).contains(&n));

    assert_value("a, _ = randoms(); b, _ = randoms(); a == b;", Value::Bool(true));

    let Ok(Value::Figure(Figure::Point(p))) = run("points(segment(point(0, 0), point(10, 0)));")
    else {
        panic!("expected a point");
    };
    assert!(p.y.abs() < 1e-9 && (0.0..=10.0).contains(&p.x), "{p}");

    let Ok(Value::Figure(Figure::Point(p))) =
        run("points(circle(point(5, 5), measure(point(0, 0), point(0, 2))));")
    else {
        panic!("expected a point");
    };
    assert!((p.distance_to(point(5.0, 5.0)) - 2.0).abs() < 1e-9, "{p}");
}

#[test]
fn points_rejects_figures_without_a_finite_extent() {
    assert_failure("points(ray(point(sqrt(-1), 0), point(1, 1)));", ErrorKind::Semantic);
    assert_failure("points(line(point(0, 0), point(sqrt(-1), 0)));", ErrorKind::Semantic);
    assert_failure("d = 0.1 ^ 320; points(line(point(0, 0), point(d, 0)));",
                   ErrorKind::Semantic);
    assert_failure("m = measure(point(0, 0), point(0, 1)); \
                    points(arc(point(sqrt(-1), 0), point(1, 0), point(0, 1), m));",
                   ErrorKind::Semantic);
    assert_value("points(line(point(1, 1), point(1, 1)));", Value::from(point(1.0, 1.0)));
}

#[test]
fn evaluation_is_repeatable() {
    let src = "f(x) = x ^ 2 + 1; f(3) * count({1...4});";
    assert_eq!(run(src).unwrap(), run(src).unwrap());
}

#[test]
fn relexing_tokens_reproduces_them() {
    let (tokens, errors) = scan("a, b = {1...3}; draw segment(point(0, 1.5), point(PI, E)) \"s\"; \
                                 f(x) = if x >= 2 & x != 3 then x % 2 else -x ^ 2; color red;");
    assert!(errors.is_empty());

    for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
        let (again, errors) = scan(&token.lexeme);
        assert!(errors.is_empty(), "{:?}", token.lexeme);
        assert_eq!(again.len(), 2, "{:?}", token.lexeme);
        assert_eq!(again[0].kind, token.kind);
        assert_eq!(again[0].literal(), token.literal());
    }
}

#[test]
fn error_lines_follow_newlines_and_comments() {
    let errors = run("x = 1; // first\n\ny = z;").unwrap_err();
    assert_eq!(errors[0].line(), Some(3));

    let errors = run("s = \"two\nlines\";\nq = w;").unwrap_err();
    assert_eq!(errors[0].line(), Some(3));
}
