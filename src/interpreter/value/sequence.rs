use std::{iter::successors, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueType},
    },
    util::num::f64_to_usize_checked,
};

/// How many elements the textual form of a sequence shows before it is cut
/// off with `...`.
pub const DISPLAY_LIMIT: usize = 20;

/// The number of elements in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Count {
    /// A known, finite number of elements.
    Finite(usize),
    /// The sequence never ends.
    Infinite,
}

impl Count {
    const fn plus(self, other: Self) -> Self {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.saturating_add(b)),
            _ => Self::Infinite,
        }
    }
}

/// The head segment of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceKind {
    /// Already evaluated elements.
    Finite(Rc<[Value]>),
    /// `start, start + 1, start + 2, ...` without end.
    Infinite {
        /// The first element.
        start: f64,
    },
    /// `start, start + 1, ..., end`.
    Range {
        /// The first element.
        start: f64,
        /// The last element, included.
        end:   f64,
    },
}

/// An immutable, possibly infinite sequence of values that all share one
/// type.
///
/// A sequence is a head segment optionally followed by a tail that was
/// attached by concatenation. Concatenation never copies elements: the
/// result shares both operands through reference counting and is enumerated
/// lazily.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    kind:         SequenceKind,
    element_type: Option<ValueType>,
    tail:         Option<Rc<Self>>,
}

impl Sequence {
    /// Creates a sequence holding exactly `elements`.
    ///
    /// # Errors
    /// Returns `RuntimeError::MixedSequence` if the elements do not all have
    /// the type of the first one.
    pub fn finite(elements: Vec<Value>, line: usize) -> EvalResult<Self> {
        let element_type = elements.first().map(Value::value_type);

        if let Some(expected) = element_type
           && let Some(odd) = elements.iter().find(|v| v.value_type() != expected)
        {
            return Err(RuntimeError::MixedSequence { expected: expected.to_string(),
                                                     found: odd.value_type().to_string(),
                                                     line });
        }

        Ok(Self { kind: SequenceKind::Finite(elements.into()),
                  element_type,
                  tail: None })
    }

    /// Creates the empty, untyped sequence `{}`.
    #[must_use]
    pub fn empty() -> Self {
        Self { kind:         SequenceKind::Finite(Rc::from(Vec::new())),
               element_type: None,
               tail:         None, }
    }

    /// Creates `{start...}`.
    #[must_use]
    pub const fn infinite(start: f64) -> Self {
        Self { kind:         SequenceKind::Infinite { start },
               element_type: Some(ValueType::Number),
               tail:         None, }
    }

    /// Creates `{start...end}`.
    #[must_use]
    pub const fn range(start: f64, end: f64) -> Self {
        Self { kind:         SequenceKind::Range { start, end },
               element_type: Some(ValueType::Number),
               tail:         None, }
    }

    /// The head segment of the sequence.
    #[must_use]
    pub const fn kind(&self) -> &SequenceKind {
        &self.kind
    }

    /// The sequence attached after the head, if any.
    #[must_use]
    pub fn tail(&self) -> Option<&Self> {
        self.tail.as_deref()
    }

    /// The type every element shares, or `None` while the sequence is
    /// empty.
    #[must_use]
    pub const fn element_type(&self) -> Option<ValueType> {
        self.element_type
    }

    /// The number of elements in the head segment alone.
    #[must_use]
    pub fn specific_count(&self) -> Count {
        match &self.kind {
            SequenceKind::Finite(items) => Count::Finite(items.len()),
            SequenceKind::Infinite { .. } => Count::Infinite,
            SequenceKind::Range { start, end } if end < start => Count::Finite(0),
            SequenceKind::Range { start, end } => {
                Count::Finite(f64_to_usize_checked(end - start + 1.0, ()).unwrap_or(usize::MAX))
            },
        }
    }

    /// The number of elements including every concatenated tail.
    ///
    /// # Example
    /// ```
    /// use geowalle::interpreter::value::sequence::{Count, Sequence};
    ///
    /// let range = Sequence::range(1.0, 5.0);
    /// assert_eq!(range.total_count(), Count::Finite(5));
    ///
    /// let joined = range.concatenate(&Sequence::infinite(10.0), 1).unwrap();
    /// assert_eq!(joined.specific_count(), Count::Finite(5));
    /// assert_eq!(joined.total_count(), Count::Infinite);
    /// ```
    #[must_use]
    pub fn total_count(&self) -> Count {
        let own = self.specific_count();
        self.tail.as_ref().map_or(own, |tail| own.plus(tail.total_count()))
    }

    /// Returns `true` if enumerating the sequence would never end.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.total_count() == Count::Infinite
    }

    /// Returns `true` if the sequence has no elements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count() == Count::Finite(0)
    }

    /// Appends `other` after every element of `self`.
    ///
    /// Neither operand is enumerated. An empty receiver adopts the element
    /// type of `other`.
    ///
    /// # Errors
    /// Returns `RuntimeError::ConcatenationMismatch` if the receiver is
    /// non-empty, both sequences are typed and their element types differ.
    pub fn concatenate(&self, other: &Self, line: usize) -> EvalResult<Self> {
        if self.is_empty() {
            return Ok(Self { kind:         self.kind.clone(),
                             element_type: other.element_type,
                             tail:         Some(Rc::new(other.clone())), });
        }

        if let (Some(receiver), Some(appended)) = (self.element_type, other.element_type)
           && receiver != appended
        {
            return Err(RuntimeError::ConcatenationMismatch { appended: appended.to_string(),
                                                             receiver: receiver.to_string(),
                                                             line });
        }

        let tail = match &self.tail {
            Some(tail) => tail.concatenate(other, line)?,
            None => other.clone(),
        };

        Ok(Self { kind:         self.kind.clone(),
                  element_type: self.element_type.or(other.element_type),
                  tail:         Some(Rc::new(tail)), })
    }

    /// Returns a fresh lazy iterator over every element, tail included.
    ///
    /// Each call starts again from the first element.
    ///
    /// # Example
    /// ```
    /// use geowalle::interpreter::value::{core::Value, sequence::Sequence};
    ///
    /// let naturals = Sequence::infinite(0.0);
    /// let first: Vec<Value> = naturals.iter().take(3).collect();
    /// assert_eq!(first, vec![Value::Number(0.0), Value::Number(1.0), Value::Number(2.0)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Box<dyn Iterator<Item = Value> + '_> {
        let head: Box<dyn Iterator<Item = Value> + '_> = match &self.kind {
            SequenceKind::Finite(items) => Box::new(items.iter().cloned()),
            SequenceKind::Infinite { start } => {
                Box::new(successors(Some(*start), |n| Some(n + 1.0)).map(Value::Number))
            },
            SequenceKind::Range { start, end } => {
                let end = *end;
                Box::new(successors(Some(*start), |n| Some(n + 1.0)).take_while(move |n| *n <= end)
                                                                     .map(Value::Number))
            },
        };

        match &self.tail {
            Some(tail) => Box::new(head.chain(tail.iter())),
            None => head,
        }
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.iter().take(DISPLAY_LIMIT + 1).enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if index == DISPLAY_LIMIT {
                write!(f, "...")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        write!(f, "}}")
    }
}
