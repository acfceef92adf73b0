//! Grammar-enforcing tree constructor.
//!
//! The builder tracks a stack of open composites plus one pending map key
//! and only permits the operations that are legal for the current state, so
//! a malformed tree cannot be obtained: every construction sequence either
//! fails at the first illegal call or yields a well-formed [`Node`].
//!
//! Operations consume the builder and hand it back inside `Result`, which
//! makes legal call chains read top-down:
//!
//! ```
//! use ridemap_document::Builder;
//!
//! let tree = Builder::new()
//!     .start_map()?
//!     .key("request_id")?.value(1)?
//!     .key("buses")?
//!     .start_array()?.value("114")?.value("14")?.end_array()?
//!     .end_map()?
//!     .build()?;
//! assert!(tree.as_map().is_some());
//! # Ok::<(), ridemap_document::BuilderError>(())
//! ```

use indexmap::IndexMap;

use crate::node::Node;

// ============================================================================
// Errors
// ============================================================================

/// A builder protocol violation: an operation was called in a state where it
/// is not legal. The construction in progress is lost; no partial tree
/// escapes.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    #[error("builder protocol violation: the root value is already complete")]
    RootComplete,

    #[error("builder protocol violation: key `{0}` staked outside an open map")]
    KeyOutsideMap(String),

    #[error("builder protocol violation: a key is already staked")]
    KeyAlreadyStaked,

    #[error("builder protocol violation: a map value requires a staked key")]
    MissingKey,

    #[error("builder protocol violation: end_array called but no array is open")]
    NotInArray,

    #[error("builder protocol violation: end_map called but no map is open")]
    NotInMap,

    #[error("builder protocol violation: build called with open composites")]
    UnclosedComposite,

    #[error("builder protocol violation: build called before any value was set")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, BuilderError>;

// ============================================================================
// Scalars
// ============================================================================

/// The leaf values accepted by [`Builder::value`]. Composites are built with
/// `start_array`/`start_map`, never passed in whole.
#[derive(Clone, Debug)]
pub struct Scalar(Node);

macro_rules! impl_scalar_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar(Node::from(v))
                }
            }
        )+
    };
}

impl_scalar_from!((), bool, i32, i64, u32, usize, f64, &str, String);

// ============================================================================
// Builder
// ============================================================================

/// An open composite waiting to be closed. `slot` holds the key under which
/// the composite will be attached to a parent map once it closes.
#[derive(Debug)]
enum Open {
    Array {
        items: Vec<Node>,
        slot: Option<String>,
    },
    Map {
        entries: IndexMap<String, Node>,
        pending: Option<String>,
        slot: Option<String>,
    },
}

/// The state the next operation is validated against, derived from the stack
/// and the pending key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Nothing built yet.
    Empty,
    /// Root committed, stack empty; only `build` is legal.
    HasRoot,
    /// Top of stack is an open array.
    InArray,
    /// Top of stack is an open map with no key staked.
    InMapNeedKey,
    /// Top of stack is an open map with a key staked.
    InMapHaveKey,
}

#[derive(Debug, Default)]
pub struct Builder {
    stack: Vec<Open>,
    root: Option<Node>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> State {
        match self.stack.last() {
            Some(Open::Array { .. }) => State::InArray,
            Some(Open::Map { pending, .. }) => {
                if pending.is_some() {
                    State::InMapHaveKey
                } else {
                    State::InMapNeedKey
                }
            }
            None => {
                if self.root.is_some() {
                    State::HasRoot
                } else {
                    State::Empty
                }
            }
        }
    }

    /// Take the staked key when the new child will live inside a map, so the
    /// child can be attached under it at close time.
    fn take_slot(&mut self) -> Option<String> {
        match self.stack.last_mut() {
            Some(Open::Map { pending, .. }) => pending.take(),
            _ => None,
        }
    }

    /// Check that a value or composite may start here, per the state machine.
    fn check_open(&self) -> Result<()> {
        match self.state() {
            State::Empty | State::InArray | State::InMapHaveKey => Ok(()),
            State::HasRoot => Err(BuilderError::RootComplete),
            State::InMapNeedKey => Err(BuilderError::MissingKey),
        }
    }

    /// Attach a finished node to the parent composite, or commit it as root.
    fn attach(&mut self, node: Node, slot: Option<String>) -> Result<()> {
        match self.stack.last_mut() {
            None => {
                self.root = Some(node);
                Ok(())
            }
            Some(Open::Array { items, .. }) => {
                items.push(node);
                Ok(())
            }
            Some(Open::Map { entries, .. }) => {
                let Some(key) = slot else {
                    return Err(BuilderError::MissingKey);
                };
                entries.insert(key, node);
                Ok(())
            }
        }
    }

    /// Open an array as the root, the next array element, or the value for
    /// the staked key.
    pub fn start_array(mut self) -> Result<Self> {
        self.check_open()?;
        let slot = self.take_slot();
        self.stack.push(Open::Array {
            items: Vec::new(),
            slot,
        });
        Ok(self)
    }

    /// Close the innermost composite, which must be an array.
    pub fn end_array(mut self) -> Result<Self> {
        match self.stack.pop() {
            Some(Open::Array { items, slot }) => {
                self.attach(Node::Array(items), slot)?;
                Ok(self)
            }
            Some(Open::Map { .. }) | None => Err(BuilderError::NotInArray),
        }
    }

    /// Open a map as the root, the next array element, or the value for the
    /// staked key.
    pub fn start_map(mut self) -> Result<Self> {
        self.check_open()?;
        let slot = self.take_slot();
        self.stack.push(Open::Map {
            entries: IndexMap::new(),
            pending: None,
            slot,
        });
        Ok(self)
    }

    /// Close the innermost composite, which must be a map.
    pub fn end_map(mut self) -> Result<Self> {
        match self.stack.pop() {
            Some(Open::Map { entries, slot, .. }) => {
                self.attach(Node::Map(entries), slot)?;
                Ok(self)
            }
            Some(Open::Array { .. }) | None => Err(BuilderError::NotInMap),
        }
    }

    /// Stake the key for the next value in the open map.
    pub fn key(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        match self.stack.last_mut() {
            Some(Open::Map { pending, .. }) => {
                if pending.is_some() {
                    return Err(BuilderError::KeyAlreadyStaked);
                }
                *pending = Some(name);
                Ok(self)
            }
            _ => Err(BuilderError::KeyOutsideMap(name)),
        }
    }

    /// Place a scalar: as the root, the next array element, or under the
    /// staked key.
    pub fn value(mut self, scalar: impl Into<Scalar>) -> Result<Self> {
        self.check_open()?;
        let slot = self.take_slot();
        self.attach(scalar.into().0, slot)?;
        Ok(self)
    }

    /// Finish construction. Legal only once the root is committed and every
    /// composite is closed.
    pub fn build(self) -> Result<Node> {
        if !self.stack.is_empty() {
            return Err(BuilderError::UnclosedComposite);
        }
        self.root.ok_or(BuilderError::EmptyDocument)
    }
}
