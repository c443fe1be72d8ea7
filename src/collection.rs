use crate::clock::{Clock, MonotonicClock};
use crate::error::CollectionError;
use crate::key::{IntoKeys, Key};
use crate::truthy::Truthy;
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Slots<V> {
    values: Vec<V>,
    index: IndexMap<Key, usize>,
}

impl<V> Slots<V> {
    fn new() -> Self {
        Self {
            values: Vec::new(),
            index: IndexMap::new(),
        }
    }

    fn resolve(&self, key: &Key) -> Option<&V> {
        self.index.get(key).and_then(|&i| self.values.get(i))
    }
}

#[derive(Debug, Clone)]
enum State<V> {
    Active(Slots<V>),
    Destroyed,
}

/// An insertion-ordered collection where many keys can point at one value.
///
/// Every call to [`set`](Collection::set) appends a new slot and binds one or
/// more keys to it. Binding a key that already exists moves it to the new
/// slot; the old slot stays in place. Slots are only dropped by
/// [`clear`](Collection::clear).
///
/// After [`destroy`](Collection::destroy) every operation fails with
/// [`CollectionError::Destroyed`].
///
/// # Examples
///
/// ```
/// use sovran_collection::{Collection, CollectionError, Key};
///
/// let mut collection = Collection::new();
/// collection.set("keyA", "value a")?;
/// collection.set(["keyB", "keyB2"], "value b")?;
///
/// assert_eq!(collection.size()?, 2);
/// assert_eq!(collection.get("keyB2")?, Some(&"value b"));
/// assert!(!collection.has("keyX")?);
/// assert_eq!(
///     collection.keys()?,
///     vec![Key::from("keyA"), Key::from("keyB"), Key::from("keyB2")]
/// );
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Debug)]
pub struct Collection<V> {
    state: State<V>,
    default: Option<V>,
    created_at: f64,
    clock: Arc<dyn Clock>,
}

impl<V> Collection<V> {
    /// Creates a new, empty collection without a default value
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a new, empty collection whose lookups fall back to `default`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collection::Collection;
    ///
    /// let collection: Collection<&str> = Collection::with_default("n/a");
    /// assert_eq!(collection.get("missing")?, Some(&"n/a"));
    /// # Ok::<(), sovran_collection::CollectionError>(())
    /// ```
    pub fn with_default(default: V) -> Self {
        Self::build(Some(default))
    }

    fn build(default: Option<V>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(MonotonicClock);
        let created_at = clock.now();
        debug!("Created collection at {:.3}ms", created_at);
        Self {
            state: State::Active(Slots::new()),
            default,
            created_at,
            clock,
        }
    }

    /// Replaces the clock and takes a new timestamp from it
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collection::{Collection, WallClock};
    ///
    /// let collection = Collection::<i32>::new().with_clock(WallClock);
    /// assert!(collection.timestamp()? > 0.0);
    /// # Ok::<(), sovran_collection::CollectionError>(())
    /// ```
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self.created_at = self.clock.now();
        self
    }

    fn slots(&self) -> Result<&Slots<V>, CollectionError> {
        match &self.state {
            State::Active(slots) => Ok(slots),
            State::Destroyed => {
                warn!("Attempted to read a destroyed collection");
                Err(CollectionError::Destroyed)
            }
        }
    }

    fn slots_mut(&mut self) -> Result<&mut Slots<V>, CollectionError> {
        match &mut self.state {
            State::Active(slots) => Ok(slots),
            State::Destroyed => {
                warn!("Attempted to modify a destroyed collection");
                Err(CollectionError::Destroyed)
            }
        }
    }

    /// Returns the number of slots (not keys) in the collection
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn size(&self) -> Result<usize, CollectionError> {
        Ok(self.slots()?.values.len())
    }

    /// Alias for [`size`](Collection::size)
    pub fn len(&self) -> Result<usize, CollectionError> {
        self.size()
    }

    /// Returns true if the collection holds no slots
    pub fn is_empty(&self) -> Result<bool, CollectionError> {
        Ok(self.slots()?.values.is_empty())
    }

    /// Returns when the collection was created or last cleared, in clock milliseconds
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn timestamp(&self) -> Result<f64, CollectionError> {
        self.slots()?;
        Ok(self.created_at)
    }

    /// Returns the value `get` falls back to
    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    /// Removes every slot and key binding and takes a new timestamp.
    ///
    /// The default value is kept.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn clear(&mut self) -> Result<(), CollectionError> {
        let slots = self.slots_mut()?;
        *slots = Slots::new();
        self.created_at = self.clock.now();
        debug!("Cleared collection at {:.3}ms", self.created_at);
        Ok(())
    }

    /// Appends `value` as a new slot and binds every key in `key` to it.
    ///
    /// `key` is a single key or a list of aliases. A key that was already
    /// bound is moved to the new slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.set(["a", "b", "c"], "abc")?;
    /// assert_eq!(collection.get("a")?, Some(&"abc"));
    /// assert_eq!(collection.get("c")?, Some(&"abc"));
    /// assert_eq!(collection.size()?, 1);
    /// # Ok::<(), sovran_collection::CollectionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn set<K: IntoKeys>(&mut self, key: K, value: V) -> Result<(), CollectionError> {
        let slots = self.slots_mut()?;
        slots.values.push(value);
        let index = slots.values.len() - 1;
        for key in key.into_keys() {
            trace!("Binding key {} to slot {}", key, index);
            slots.index.insert(key, index);
        }
        Ok(())
    }

    /// Returns the first truthy value bound to one of the candidate keys.
    ///
    /// Candidates are probed from last to first. A key bound to a falsy value
    /// (see [`Truthy`]) counts as missing. Falls back to the default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_collection::Collection;
    ///
    /// let mut collection = Collection::with_default(-1);
    /// collection.set("zero", 0)?;
    /// collection.set("one", 1)?;
    ///
    /// assert_eq!(collection.get(["one", "zero"])?, Some(&1));
    /// assert_eq!(collection.get("zero")?, Some(&-1));
    /// # Ok::<(), sovran_collection::CollectionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn get<K: IntoKeys>(&self, key: K) -> Result<Option<&V>, CollectionError>
    where
        V: Truthy,
    {
        let slots = self.slots()?;
        let found = key
            .into_keys()
            .iter()
            .rev()
            .filter_map(|key| slots.resolve(key))
            .find(|value| value.is_truthy());
        Ok(found.or(self.default.as_ref()))
    }

    /// Like [`get`](Collection::get), but any bound key counts, whatever its value.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn get_bound<K: IntoKeys>(&self, key: K) -> Result<Option<&V>, CollectionError> {
        let slots = self.slots()?;
        let found = key
            .into_keys()
            .iter()
            .rev()
            .find_map(|key| slots.resolve(key));
        Ok(found.or(self.default.as_ref()))
    }

    /// Returns true if any of the candidate keys is bound
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn has<K: IntoKeys>(&self, key: K) -> Result<bool, CollectionError> {
        let slots = self.slots()?;
        Ok(key
            .into_keys()
            .iter()
            .rev()
            .any(|key| slots.index.contains_key(key)))
    }

    /// Returns the slot a key is bound to
    pub fn index_of<K: Into<Key>>(&self, key: K) -> Result<Option<usize>, CollectionError> {
        Ok(self.slots()?.index.get(&key.into()).copied())
    }

    /// Returns every bound key in the order it was first bound
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn keys(&self) -> Result<Vec<Key>, CollectionError> {
        Ok(self.slots()?.index.keys().cloned().collect())
    }

    /// Returns a copy of every slot's value in insertion order
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn values(&self) -> Result<Vec<V>, CollectionError>
    where
        V: Clone,
    {
        Ok(self.slots()?.values.clone())
    }

    /// Iterates the slot values in insertion order without copying them
    pub fn iter(&self) -> Result<std::slice::Iter<'_, V>, CollectionError> {
        Ok(self.slots()?.values.iter())
    }

    /// Calls `f(value, index, values)` for each slot until it returns false.
    ///
    /// Returns true if `f` returned true for every slot, which is always the
    /// case for an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn every<F>(&self, mut f: F) -> Result<bool, CollectionError>
    where
        F: FnMut(&V, usize, &[V]) -> bool,
    {
        let values = &self.slots()?.values;
        for (i, value) in values.iter().enumerate() {
            if !f(value, i, values) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Calls `f(value, index, values)` for each slot in insertion order
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn for_each<F>(&self, mut f: F) -> Result<(), CollectionError>
    where
        F: FnMut(&V, usize, &[V]),
    {
        let values = &self.slots()?.values;
        for (i, value) in values.iter().enumerate() {
            f(value, i, values);
        }
        Ok(())
    }

    /// Collects `f(value, index, values)` for each slot in insertion order
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if the collection was destroyed.
    pub fn map<F, R>(&self, mut f: F) -> Result<Vec<R>, CollectionError>
    where
        F: FnMut(&V, usize, &[V]) -> R,
    {
        let values = &self.slots()?.values;
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, value)| f(value, i, values))
            .collect())
    }

    /// Replaces the contents of this collection with those of `source`.
    ///
    /// Source slots are replayed in order, each one re-bound to every key
    /// that points at it in `source`. Slots no key points at any more are
    /// replayed without keys. The default value of `self` is kept.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Destroyed` if either collection was
    /// destroyed. Nothing is cleared in that case.
    pub fn copy(&mut self, source: &Collection<V>) -> Result<(), CollectionError>
    where
        V: Clone,
    {
        let from = source.slots()?;
        self.slots()?;

        let mut aliases: Vec<Vec<Key>> = vec![Vec::new(); from.values.len()];
        for (key, &i) in &from.index {
            aliases[i].push(key.clone());
        }

        self.clear()?;
        for (value, keys) in from.values.iter().zip(aliases) {
            self.set(keys, value.clone())?;
        }
        debug!("Copied {} slots into collection", from.values.len());
        Ok(())
    }

    /// Releases all slots and bindings. Further use fails with
    /// `CollectionError::Destroyed`. Destroying twice is a no-op.
    pub fn destroy(&mut self) {
        if let State::Active(_) = self.state {
            debug!("Destroyed collection");
        }
        self.state = State::Destroyed;
    }

    /// Returns true once [`destroy`](Collection::destroy) has been called
    pub fn is_destroyed(&self) -> bool {
        matches!(self.state, State::Destroyed)
    }
}

impl<V: Clone> Clone for Collection<V> {
    /// Copies slots, bindings, default value and clock. The clone gets its own
    /// timestamp.
    fn clone(&self) -> Self {
        let created_at = self.clock.now();
        debug!("Cloned collection at {:.3}ms", created_at);
        Self {
            state: self.state.clone(),
            default: self.default.clone(),
            created_at,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}
