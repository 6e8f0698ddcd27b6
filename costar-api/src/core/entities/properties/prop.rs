use crate::core::storage::arc_str::ArcStr;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    sync::Arc,
};

/// Empty attribute set for the common case of nodes that carry no metadata.
pub const NO_PROPS: [(&str, Prop); 0] = [];

/// Denotes the types of attribute values allowed to be stored on nodes.
///
/// The graph never interprets these, it only stores them and hands them
/// back on request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum Prop {
    Str(ArcStr),
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Hash for Prop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Prop::Str(s) => s.hash(state),
            Prop::Bool(b) => b.hash(state),
            Prop::I64(i) => i.hash(state),
            Prop::U64(u) => u.hash(state),
            Prop::F64(f) => {
                let bits = f.to_bits();
                bits.hash(state);
            }
        }
    }
}

impl Eq for Prop {}

impl PartialOrd for Prop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Prop::Str(a), Prop::Str(b)) => a.partial_cmp(b),
            (Prop::Bool(a), Prop::Bool(b)) => a.partial_cmp(b),
            (Prop::I64(a), Prop::I64(b)) => a.partial_cmp(b),
            (Prop::U64(a), Prop::U64(b)) => a.partial_cmp(b),
            (Prop::F64(a), Prop::F64(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl Prop {
    pub fn str<S: Into<ArcStr>>(s: S) -> Prop {
        Prop::Str(s.into())
    }

    pub fn into_str(self) -> Option<ArcStr> {
        match self {
            Prop::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_bool(self) -> Option<bool> {
        match self {
            Prop::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_i64(self) -> Option<i64> {
        match self {
            Prop::I64(i) => Some(i),
            _ => None,
        }
    }

    pub fn into_u64(self) -> Option<u64> {
        match self {
            Prop::U64(u) => Some(u),
            _ => None,
        }
    }

    pub fn into_f64(self) -> Option<f64> {
        match self {
            Prop::F64(f) => Some(f),
            _ => None,
        }
    }
}

impl Display for Prop {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Prop::Str(value) => write!(f, "{}", value),
            Prop::Bool(value) => write!(f, "{}", value),
            Prop::I64(value) => write!(f, "{}", value),
            Prop::U64(value) => write!(f, "{}", value),
            Prop::F64(value) => write!(f, "{}", value),
        }
    }
}

impl From<ArcStr> for Prop {
    fn from(value: ArcStr) -> Self {
        Prop::Str(value)
    }
}

impl From<&ArcStr> for Prop {
    fn from(value: &ArcStr) -> Self {
        Prop::Str(value.clone())
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Prop::Str(value.into())
    }
}

impl From<&String> for Prop {
    fn from(s: &String) -> Self {
        Prop::Str(s.as_str().into())
    }
}

impl From<Arc<str>> for Prop {
    fn from(s: Arc<str>) -> Self {
        Prop::Str(s.into())
    }
}

impl From<&str> for Prop {
    fn from(s: &str) -> Self {
        Prop::Str(s.to_owned().into())
    }
}

impl From<bool> for Prop {
    fn from(b: bool) -> Self {
        Prop::Bool(b)
    }
}

impl From<i64> for Prop {
    fn from(i: i64) -> Self {
        Prop::I64(i)
    }
}

impl From<u64> for Prop {
    fn from(u: u64) -> Self {
        Prop::U64(u)
    }
}

impl From<f64> for Prop {
    fn from(f: f64) -> Self {
        Prop::F64(f)
    }
}
