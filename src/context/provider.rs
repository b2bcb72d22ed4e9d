use crate::error::HookError;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

// Thread-local stack of provided values, innermost last.
thread_local! {
    static PROVIDER_STACK: RefCell<Vec<Rc<dyn Any>>> = RefCell::new(vec![]);
}

/// Run a function with `value` visible to [`use_context`].
///
/// This pushes the value onto a thread-local stack for the duration of the
/// function. Nested calls shadow outer values of the same type; values of
/// other types stay visible.
///
/// # Examples
///
/// ```
/// use slicestore::context::{provide, use_context};
///
/// let seen = provide(7u32, || use_context::<u32>());
/// assert_eq!(seen.unwrap(), 7);
/// assert!(use_context::<u32>().is_err());
/// ```
pub fn provide<T, F, R>(value: T, f: F) -> R
where
    T: 'static,
    F: FnOnce() -> R,
{
    PROVIDER_STACK.with(|stack| {
        stack.borrow_mut().push(Rc::new(value));
    });

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    PROVIDER_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });

    match result {
        Ok(r) => r,
        Err(e) => std::panic::resume_unwind(e),
    }
}

/// Get the nearest provided value of type `T`.
///
/// Fails with [`HookError::MissingContext`] outside every matching
/// [`provide`] scope.
pub fn use_context<T>() -> Result<T, HookError>
where
    T: Clone + 'static,
{
    PROVIDER_STACK.with(|stack| {
        stack
            .borrow()
            .iter()
            .rev()
            .find_map(|entry| entry.downcast_ref::<T>().cloned())
            .ok_or_else(|| HookError::MissingContext {
                type_name: std::any::type_name::<T>(),
            })
    })
}
