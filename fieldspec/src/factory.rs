use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

/// A wrapped zero-argument callable that produces a fresh default value on
/// demand.
///
/// Factories exist for mutable defaults: a fixed `Vec` default shared across
/// every constructed instance would alias, so the schema layer invokes the
/// factory once per instance instead. The callee is fixed at construction and
/// never reassigned; [`create`](Factory::create) never memoizes.
///
/// Cloning a `Factory` shares the underlying callee.
pub struct Factory<T> {
    callee: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> Factory<T> {
    /// Wraps `callee` in a new `Factory`.
    ///
    /// The "must be invocable with zero arguments" contract is enforced by the
    /// `Fn() -> T` bound, so a misconfigured factory is rejected when the
    /// declaration is compiled rather than when it is first resolved:
    ///
    /// ```compile_fail
    /// let f = fieldspec::Factory::new("not callable");
    /// ```
    ///
    /// Construction never invokes `callee`.
    pub fn new<F>(callee: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            callee: Arc::new(callee),
        }
    }

    /// Invokes the wrapped callee and returns its result, unmodified.
    ///
    /// Every call re-invokes the callee — two successive calls on a factory
    /// wrapping `Vec::new` yield two distinct vectors. If the callee panics,
    /// the panic surfaces to the caller untouched; no translation or wrapping
    /// happens here.
    ///
    /// ```
    /// use fieldspec::Factory;
    ///
    /// let lists = Factory::new(Vec::<u32>::new);
    /// let mut a = lists.create();
    /// let b = lists.create();
    /// a.push(1);
    /// assert!(b.is_empty());
    /// ```
    pub fn create(&self) -> T {
        (self.callee)()
    }
}

impl<T> Clone for Factory<T> {
    fn clone(&self) -> Self {
        Self {
            callee: Arc::clone(&self.callee),
        }
    }
}

impl<T> fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").finish_non_exhaustive()
    }
}

/// Returns true if `value` is a [`Factory<T>`], false for anything else.
///
/// Type-identity discrimination for type-erased schema pipelines; never
/// panics. Note that the check is exact in `T`: a `Factory<u8>` is not a
/// `Factory<Vec<u8>>`.
pub fn is_factory<T: 'static>(value: &dyn Any) -> bool {
    value.is::<Factory<T>>()
}
