//! Call tracing.
//!
//! [`Traced`] wraps any function or closure under a name and reports each
//! invocation to a [`TraceSink`]: one line before the call, one line with the
//! returned value after it. The value itself is handed back untouched.
//!
//! Arguments are passed as a tuple so one wrapper covers every arity:
//!
//! ```
//! use roster_lib::tracer::{Traced, sink::MemorySink};
//!
//! let sink = MemorySink::new();
//! let add = Traced::with_sink("add", |a: i32, b: i32| a + b, &sink);
//! assert_eq!(add.call((2, 3)), 5);
//! assert_eq!(sink.lines(), vec!["[LOG] Calling: add()", "[LOG] add() returned: 5"]);
//! ```

pub mod sink;

use std::fmt;
use tracing::debug;
use self::sink::TraceSink;

/// Uniform entry point over functions of any supported arity.
///
/// Implemented for every `Fn` taking zero to four arguments, with the
/// arguments packed into a tuple.
pub trait Callable<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident: $ty:ident),*) => {
        impl<Func, Out, $($ty),*> Callable<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Out,
        {
            type Output = Out;

            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(a: A);
impl_callable!(a: A, b: B);
impl_callable!(a: A, b: B, c: C);
impl_callable!(a: A, b: B, c: C, d: D);

/// Line emitted before the wrapped operation runs
#[must_use]
pub fn entry_line(name: &str) -> String {
    format!("[LOG] Calling: {name}()")
}

/// Line emitted after the wrapped operation returns
#[must_use]
pub fn exit_line(name: &str, value: &dyn fmt::Display) -> String {
    format!("[LOG] {name}() returned: {value}")
}

/// A named function whose calls are reported to a sink
pub struct Traced<F, S> {
    name: String,
    func: F,
    sink: S,
}

impl<F, S: TraceSink> Traced<F, S> {
    #[must_use]
    pub fn with_sink(name: impl Into<String>, func: F, sink: S) -> Self {
        Traced {
            name: name.into(),
            func,
            sink,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the wrapped function, reporting entry and the returned value
    pub fn call<Args>(&self, args: Args) -> F::Output
    where
        F: Callable<Args>,
        F::Output: fmt::Display,
    {
        self.enter();
        let value = self.func.invoke(args);
        self.leave(&value);
        value
    }

    /// Invoke a fallible wrapped function.
    ///
    /// The exit line is only reported for `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error unchanged.
    pub fn try_call<Args, T, E>(&self, args: Args) -> Result<T, E>
    where
        F: Callable<Args, Output = Result<T, E>>,
        T: fmt::Display,
    {
        self.enter();
        let value = self.func.invoke(args)?;
        self.leave(&value);
        Ok(value)
    }

    /// Unwrap back into the function and its sink
    pub fn into_inner(self) -> (F, S) {
        (self.func, self.sink)
    }

    fn enter(&self) {
        debug!(function = %self.name, "calling");
        self.sink.entered(&self.name);
    }

    fn leave(&self, value: &dyn fmt::Display) {
        debug!(function = %self.name, returned = %value, "returned");
        self.sink.returned(&self.name, value);
    }
}

impl<F, S> fmt::Debug for Traced<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced").field("name", &self.name).finish_non_exhaustive()
    }
}
