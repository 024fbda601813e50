//! Property values and ordered property maps.
//!
//! Props are opaque data to every host: the library never interprets a
//! style value, it only stores, merges, and forwards them. Insertion order
//! is preserved so that rendered output is deterministic.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

// =============================================================================
// Handler - Opaque event callback
// =============================================================================

/// An opaque event callback carried through node props.
///
/// Using `Rc<dyn Fn>` instead of `Box<dyn Fn>` allows cloning callbacks
/// into recomposed nodes without ownership issues. Equality is pointer
/// identity: two handlers are equal only if they share the same allocation.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    /// Wrap a closure as a prop-carried handler.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self) {
        (self.0)()
    }

    /// Compose two handlers: the result invokes `self` first, then `next`.
    ///
    /// Hosts use this to layer their own callback on top of one the author
    /// already attached, without discarding either.
    pub fn then(&self, next: &Handler) -> Handler {
        let first = self.clone();
        let second = next.clone();
        Handler::new(move || {
            first.call();
            second.call();
        })
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// =============================================================================
// PropValue - One property
// =============================================================================

/// A single property value.
///
/// Values are plain data plus two structured cases: `Style` nests a whole
/// property map (merged key-by-key instead of replaced wholesale), and
/// `Handler` carries an opaque callback.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Style(Props),
    Handler(Handler),
}

impl PropValue {
    /// Get the string value, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the nested style map, if this is a `Style`.
    pub fn as_style(&self) -> Option<&Props> {
        match self {
            Self::Style(p) => Some(p),
            _ => None,
        }
    }

    /// Get the callback, if this is a `Handler`.
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Props> for PropValue {
    fn from(value: Props) -> Self {
        Self::Style(value)
    }
}

impl From<Handler> for PropValue {
    fn from(value: Handler) -> Self {
        Self::Handler(value)
    }
}

// =============================================================================
// Props - Ordered property map
// =============================================================================

/// An insertion-ordered property map.
///
/// Iteration yields keys in the order they were first set, matching what an
/// author wrote. Overwriting a key keeps its original position, so layered
/// merges stay deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: IndexMap<String, PropValue>,
}

impl Props {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a property by key.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set a property, keeping the key's original position if it exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Chainable `set` for building maps inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove a property, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.shift_remove(key)
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge property layers with explicit precedence.
    ///
    /// Earlier layers are defaults, later layers win on key conflict. When
    /// two layers both carry a `Style` under the same key, the nested maps
    /// are merged key-by-key (later layer winning) instead of the whole
    /// style being replaced. Key order follows first insertion across all
    /// layers.
    ///
    /// # Example
    ///
    /// ```
    /// use trellis_ui::node::Props;
    ///
    /// let computed = Props::new().with("color", "blue").with("display", "flex");
    /// let author = Props::new().with("color", "red");
    ///
    /// let merged = Props::layered(&[
    ///     &Props::new().with("style", computed),
    ///     &Props::new().with("style", author),
    /// ]);
    ///
    /// let style = merged.get("style").unwrap().as_style().unwrap();
    /// assert_eq!(style.get("color").unwrap().as_str(), Some("red"));
    /// assert_eq!(style.get("display").unwrap().as_str(), Some("flex"));
    /// ```
    pub fn layered(layers: &[&Props]) -> Props {
        let mut merged = Props::new();
        for layer in layers {
            for (key, value) in layer.iter() {
                let next = match (merged.get(key), value) {
                    (Some(PropValue::Style(base)), PropValue::Style(patch)) => {
                        PropValue::Style(Props::layered(&[base, patch]))
                    }
                    _ => value.clone(),
                };
                merged.set(key, next);
            }
        }
        merged
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (key, value) in iter {
            props.set(key, value);
        }
        props
    }
}

// =============================================================================
// Tests
// =============================================================================
