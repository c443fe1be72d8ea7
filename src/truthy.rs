use std::rc::Rc;
use std::sync::Arc;

/// Decides whether a stored value counts as "found" for [`Collection::get`].
///
/// `get` skips candidate keys whose value is not truthy and falls through to
/// the next candidate (and eventually to the default value). The provided
/// implementations treat `false`, numeric zero, `NaN`, empty strings and
/// sequences, `None` and `()` as falsy.
///
/// Implement it for your own types to opt in to `get`:
///
/// ```
/// use sovran_collection::{Collection, Truthy};
///
/// #[derive(Clone)]
/// struct Score(u32);
///
/// impl Truthy for Score {
///     fn is_truthy(&self) -> bool {
///         self.0 > 0
///     }
/// }
///
/// let mut scores = Collection::new();
/// scores.set("alice", Score(0))?;
/// assert!(scores.get("alice")?.is_none());
/// # Ok::<(), sovran_collection::CollectionError>(())
/// ```
///
/// [`Collection::get`]: crate::Collection::get
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, |value| value.is_truthy())
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
