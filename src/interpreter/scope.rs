use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use log::trace;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{color::Color, core::Value},
    },
};

/// The identifier that discards whatever is bound to it.
pub const DISCARD: &str = "_";

/// One level of the binding stack.
#[derive(Debug, Clone, Default)]
struct Frame {
    constants:          HashMap<String, Value>,
    arguments:          HashMap<String, Value>,
    reserved:           HashSet<String>,
    functions:          HashMap<String, Rc<FunctionDef>>,
    declared_functions: HashSet<String>,
}

impl Frame {
    /// A child frame sees every binding of its parent but reserves nothing,
    /// so it may shadow them.
    fn child(&self) -> Self {
        Self { constants:          self.constants.clone(),
               arguments:          self.arguments.clone(),
               reserved:           HashSet::new(),
               functions:          self.functions.clone(),
               declared_functions: HashSet::new(), }
    }
}

/// The environment identifiers are resolved against.
///
/// A `Scope` is a stack of frames plus a stack of drawing colors. Entering a
/// function call or a `let` pushes a copy of the active frame and leaving it
/// pops that copy, so nothing bound inside leaks into the caller.
///
/// # Example
/// ```
/// use geowalle::interpreter::{scope::Scope, value::core::Value};
///
/// let mut scope = Scope::new();
/// scope.set_constant("x", Value::Number(1.0), 1).unwrap();
/// assert!(scope.set_constant("x", Value::Number(2.0), 2).is_err());
///
/// scope.enter();
/// scope.set_constant("x", Value::Number(3.0), 3).unwrap();
/// assert_eq!(scope.get("x", 3).unwrap(), Value::Number(3.0));
/// scope.exit();
///
/// assert_eq!(scope.get("x", 4).unwrap(), Value::Number(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Scope {
    frames: Vec<Frame>,
    colors: Vec<Color>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Creates a scope with one empty frame and black as the current color.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()],
               colors: vec![Color::Black], }
    }

    fn active(&self) -> &Frame {
        // The root frame is never popped.
        &self.frames[self.frames.len() - 1]
    }

    fn active_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// How many frames are on the stack, the root included.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Pushes a copy of the active frame.
    pub fn enter(&mut self) {
        let child = self.active().child();
        self.frames.push(child);
        trace!("entered frame {}", self.frames.len());
    }

    /// Pops the active frame. The root frame is kept.
    pub fn exit(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
            trace!("left frame {}", self.frames.len() + 1);
        }
    }

    /// Returns `true` if `id` is already reserved in the active frame.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.active().reserved.contains(id)
    }

    /// Claims `id` in the active frame.
    ///
    /// # Errors
    /// Returns `RuntimeError::ConstantRedeclaration` if the active frame has
    /// already reserved it.
    pub fn reserve(&mut self, id: &str, line: usize) -> EvalResult<()> {
        if id == DISCARD {
            return Ok(());
        }
        if !self.active_mut().reserved.insert(id.to_string()) {
            return Err(RuntimeError::ConstantRedeclaration { name: id.to_string(),
                                                             line });
        }
        Ok(())
    }

    /// Binds a write-once constant in the active frame.
    ///
    /// Binding `_` does nothing.
    ///
    /// # Errors
    /// Returns `RuntimeError::ConstantRedeclaration` if `id` was already
    /// bound in this frame.
    pub fn set_constant(&mut self, id: &str, value: Value, line: usize) -> EvalResult<()> {
        if id == DISCARD {
            return Ok(());
        }
        self.reserve(id, line)?;
        trace!("constant {id} = {value}");

        let frame = self.active_mut();
        frame.arguments.remove(id);
        frame.constants.insert(id.to_string(), value);
        Ok(())
    }

    /// Binds a function argument in the active frame, replacing any previous
    /// binding of the same name.
    pub fn set_argument(&mut self, id: &str, value: Value) {
        if id == DISCARD {
            return;
        }
        self.active_mut().arguments.insert(id.to_string(), value);
    }

    /// Looks `id` up among the arguments, then the constants.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownConstant` if the name is not bound.
    pub fn get(&self, id: &str, line: usize) -> EvalResult<Value> {
        let frame = self.active();
        frame.arguments
             .get(id)
             .or_else(|| frame.constants.get(id))
             .cloned()
             .ok_or_else(|| RuntimeError::UnknownConstant { name: id.to_string(),
                                                            line })
    }

    /// Records a user function in the active frame.
    ///
    /// # Errors
    /// Returns `RuntimeError::FunctionAlreadyDefined` if the active frame
    /// already declared a function with this name.
    pub fn declare_function(&mut self, function: Rc<FunctionDef>) -> EvalResult<()> {
        let frame = self.active_mut();
        if !frame.declared_functions.insert(function.name.clone()) {
            return Err(RuntimeError::FunctionAlreadyDefined { name: function.name.clone(),
                                                              line: function.line, });
        }
        trace!("function {}/{}", function.name, function.params.len());
        frame.functions.insert(function.name.clone(), function);
        Ok(())
    }

    /// Finds a user function visible from the active frame.
    #[must_use]
    pub fn get_function(&self, id: &str) -> Option<Rc<FunctionDef>> {
        self.active().functions.get(id).cloned()
    }

    /// Makes `color` the current drawing color.
    pub fn push_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// The color draw calls currently use.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.colors.last().copied().unwrap_or_default()
    }

    /// Goes back to the previous drawing color. The base color stays.
    pub fn restore_color(&mut self) {
        if self.colors.len() > 1 {
            self.colors.pop();
        }
    }
}
