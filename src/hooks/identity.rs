use std::rc::Rc;
use std::sync::Arc;

/// Cheap identity comparison used to decide whether a selection changed.
///
/// Scalars and strings compare by value, since they carry no identity of
/// their own. Shared pointers compare by address and never look at what
/// they point to. There is deliberately no implementation for structs,
/// vectors or tuples: a selector that needs a composite value should hand
/// out an `Rc` to it.
pub trait Identical {
    fn identical(&self, other: &Self) -> bool;
}

macro_rules! identical_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identical for $ty {
                #[inline]
                fn identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identical_by_value!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: ?Sized> Identical for Rc<T> {
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for Arc<T> {
    fn identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Identical> Identical for Option<T> {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.identical(b),
            (None, None) => true,
            _ => false,
        }
    }
}
