use crate::error::CollectionError;
use std::fmt;

/// A normalized key of a [`Collection`](crate::Collection).
///
/// Keys are either integers or strings. A string that is the canonical decimal
/// form of an `i64` (for example `"42"` or `"-7"`, but not `"007"` or `"+1"`)
/// becomes an integer key, so `"42"` and `42` address the same binding.
///
/// # Examples
///
/// ```
/// use sovran_collection::Key;
///
/// assert_eq!(Key::from("42"), Key::from(42));
/// assert_eq!(Key::from("007"), Key::Str("007".to_string()));
/// assert!(Key::try_from(1.5f64).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns the integer value if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Returns the string value if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    fn normalize(s: &str) -> Option<i64> {
        let n = s.parse::<i64>().ok()?;
        if n.to_string() == s {
            Some(n)
        } else {
            None
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match Key::normalize(s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match Key::normalize(&s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s),
        }
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::from(s.as_str())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Key::Int(i64::from(n))
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Key {
    type Error = CollectionError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        i64::try_from(n)
            .map(Key::Int)
            .map_err(|_| CollectionError::InvalidKey(format!("{} is out of range", n)))
    }
}

impl TryFrom<usize> for Key {
    type Error = CollectionError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        i64::try_from(n)
            .map(Key::Int)
            .map_err(|_| CollectionError::InvalidKey(format!("{} is out of range", n)))
    }
}

impl TryFrom<f64> for Key {
    type Error = CollectionError;

    /// Only finite, integral floats inside the `i64` range are keys.
    fn try_from(n: f64) -> Result<Self, Self::Error> {
        // 2^63 is the first float past i64::MAX
        if n.is_finite()
            && n.fract() == 0.0
            && n >= i64::MIN as f64
            && n < 9_223_372_036_854_775_808.0
        {
            Ok(Key::Int(n as i64))
        } else {
            Err(CollectionError::InvalidKey(format!("{} is not an integer", n)))
        }
    }
}

/// Anything that can be passed as the key argument of `set`, `get` and `has`.
///
/// A single scalar is a one-element list; arrays, slices and vectors of
/// scalars are lists of candidate keys in the order given.
pub trait IntoKeys {
    fn into_keys(self) -> Vec<Key>;
}

impl IntoKeys for Key {
    fn into_keys(self) -> Vec<Key> {
        vec![self]
    }
}

impl IntoKeys for &Key {
    fn into_keys(self) -> Vec<Key> {
        vec![self.clone()]
    }
}

impl IntoKeys for &str {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

impl IntoKeys for String {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

impl IntoKeys for &String {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

macro_rules! into_keys_int {
    ($($t:ty),*) => {
        $(
            impl IntoKeys for $t {
                fn into_keys(self) -> Vec<Key> {
                    vec![Key::from(self)]
                }
            }
        )*
    };
}

into_keys_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<Key>> IntoKeys for Vec<T> {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Key>, const N: usize> IntoKeys for [T; N] {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<Key>> IntoKeys for &[T] {
    fn into_keys(self) -> Vec<Key> {
        self.iter().cloned().map(Into::into).collect()
    }
}
