use std::{fs, rc::Rc};

use log::debug;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::validate_function_name,
        },
        lexer::scan,
        parser::parse,
        value::{core::Value, figure::Figure},
    },
};

impl Context<'_> {
    /// Evaluates a single instruction.
    ///
    /// Only expression instructions produce a value; every other instruction
    /// runs for its effect on the scope or the renderer and returns
    /// `Ok(None)`.
    ///
    /// # Parameters
    /// - `statement`: The instruction to run.
    ///
    /// # Returns
    /// The value of an expression instruction, `None` otherwise.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.scope.set_constant(name, value, *line)?;
                Ok(None)
            },
            Statement::MultipleAssignment { names, value, line } => {
                self.eval_multiple_assignment(names, value, *line)?;
                Ok(None)
            },
            Statement::Function(def) => {
                self.declare_function(def)?;
                Ok(None)
            },
            Statement::Import { path, line } => {
                self.eval_import(path, *line)?;
                Ok(None)
            },
            Statement::Draw { expr, label, line } => {
                let value = self.eval(expr)?;
                self.draw_value(&value, label.as_deref(), *line)?;
                Ok(None)
            },
            Statement::Print { expr, label, .. } => {
                let value = self.eval(expr)?;
                let text = match label {
                    Some(label) => format!("{label}: {value}"),
                    None => value.to_string(),
                };
                self.renderer.print(&text);
                Ok(None)
            },
            Statement::Color { color, .. } => {
                self.scope.push_color(*color);
                Ok(None)
            },
            Statement::Restore { .. } => {
                self.scope.restore_color();
                Ok(None)
            },
            Statement::RandomDeclaration { name,
                                           kind,
                                           is_sequence,
                                           line, } => {
                let value = if *is_sequence {
                    self.library.random_sequence(*kind, *line)?.into()
                } else {
                    Value::Figure(self.library.random_figure(*kind))
                };
                self.scope.set_constant(name, value, *line)?;
                Ok(None)
            },
        }
    }

    /// Binds `a, b, c = sequence`.
    ///
    /// Only as many elements as there are names are enumerated, so infinite
    /// sequences are fine. Names left without an element are bound to
    /// `undefined`.
    fn eval_multiple_assignment(&mut self, names: &[String], value: &Expr, line: usize) -> EvalResult<()> {
        let value = self.eval(value)?;
        let sequence = value.as_sequence(line)?;

        let mut elements = sequence.iter();
        for name in names {
            let element = elements.next().unwrap_or(Value::Undefined);
            self.scope.set_constant(name, element, line)?;
        }
        Ok(())
    }

    fn declare_function(&mut self, def: &FunctionDef) -> EvalResult<()> {
        validate_function_name(&def.name, def.line)?;
        self.scope.declare_function(Rc::new(def.clone()))
    }

    /// Runs another source file in the current scope.
    ///
    /// The path is resolved against `Settings::import_root`. A file that was
    /// already imported in this run is skipped. Any error inside the file,
    /// from lexing to evaluation, fails the import as a whole.
    fn eval_import(&mut self, path: &str, line: usize) -> EvalResult<()> {
        let failed = |details: String| RuntimeError::ImportFailed { path: path.to_string(),
                                                                    details,
                                                                    line };

        let resolved = self.settings.import_root.join(path);
        let key = fs::canonicalize(&resolved).map_err(|e| failed(e.to_string()))?;
        if self.imported.contains(&key) {
            debug!("skipping {} which was already imported", resolved.display());
            return Ok(());
        }

        let source = fs::read_to_string(&key).map_err(|e| failed(e.to_string()))?;
        self.imported.insert(key);
        debug!("importing {}", resolved.display());

        let (tokens, lexical_errors) = scan(&source);
        if !lexical_errors.is_empty() {
            return Err(failed(describe_all(lexical_errors.iter().map(|e| (e.line(), e.to_string())))));
        }

        let (program, syntax_errors) = parse(&tokens);
        if !syntax_errors.is_empty() {
            return Err(failed(describe_all(syntax_errors.iter().map(|e| (e.line(), e.to_string())))));
        }

        let (_, runtime_errors) = self.eval_program(&program);
        if !runtime_errors.is_empty() {
            return Err(failed(describe_all(runtime_errors.iter().map(|e| (e.line(), e.to_string())))));
        }
        Ok(())
    }

    /// Draws a figure, or every element of a finite sequence of figures.
    fn draw_value(&mut self, value: &Value, label: Option<&str>, line: usize) -> EvalResult<()> {
        match value {
            Value::Figure(figure) => self.draw_figure(figure, label, line),
            Value::Sequence(sequence) => {
                if sequence.is_infinite() {
                    return Err(RuntimeError::InfiniteSequence { operation: "draw".to_string(),
                                                                line });
                }
                for element in sequence.iter() {
                    self.draw_value(&element, label, line)?;
                }
                Ok(())
            },
            other => Err(RuntimeError::NotDrawable { found: other.value_type().to_string(),
                                                     line }),
        }
    }

    fn draw_figure(&mut self, figure: &Figure, label: Option<&str>, line: usize) -> EvalResult<()> {
        let color = self.scope.current_color();
        match figure {
            Figure::Point(p) => self.renderer.draw_point(p, color, label),
            Figure::Line(l) => self.renderer.draw_line(l, color, label),
            Figure::Segment(s) => self.renderer.draw_segment(s, color, label),
            Figure::Ray(r) => self.renderer.draw_ray(r, color, label),
            Figure::Circle(c) => self.renderer.draw_circle(c, color, label),
            Figure::Arc(a) => self.renderer.draw_arc(a, color, label),
            Figure::Measure(_) => {
                return Err(RuntimeError::NotDrawable { found: figure.kind().to_string(),
                                                       line });
            },
        }
        Ok(())
    }
}

fn describe_all(errors: impl Iterator<Item = (usize, String)>) -> String {
    errors.map(|(line, message)| format!("line {line}: {message}"))
          .collect::<Vec<_>>()
          .join("; ")
}
