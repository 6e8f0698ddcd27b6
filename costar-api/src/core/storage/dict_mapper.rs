use crate::core::{entities::VID, storage::arc_str::ArcStr};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, hash::Hash};

/// Two-way mapping between external node names and dense internal ids.
///
/// Ids are handed out contiguously in insertion order, so a [`VID`] doubles
/// as an index into any per-node table kept alongside the mapper.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct DictMapper {
    map: FxHashMap<ArcStr, VID>,
    reverse_map: Vec<ArcStr>,
}

/// Result of a name resolution that records whether the name was seen before.
#[derive(Copy, Clone, Debug)]
pub enum MaybeNew<Index> {
    New(Index),
    Existing(Index),
}

impl<Index, T> PartialEq<T> for MaybeNew<Index>
where
    Index: PartialEq<Index>,
    T: Borrow<Index>,
{
    fn eq(&self, other: &T) -> bool {
        other.borrow() == self.as_ref()
    }
}

impl<Index> MaybeNew<Index> {
    #[inline]
    pub fn inner(self) -> Index {
        match self {
            MaybeNew::New(inner) => inner,
            MaybeNew::Existing(inner) => inner,
        }
    }

    pub fn map<R>(self, map_fn: impl FnOnce(Index) -> R) -> MaybeNew<R> {
        match self {
            MaybeNew::New(inner) => MaybeNew::New(map_fn(inner)),
            MaybeNew::Existing(inner) => MaybeNew::Existing(map_fn(inner)),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, MaybeNew::New(_))
    }
}

impl<Index> AsRef<Index> for MaybeNew<Index> {
    fn as_ref(&self) -> &Index {
        match self {
            MaybeNew::New(inner) => inner,
            MaybeNew::Existing(inner) => inner,
        }
    }
}

impl DictMapper {
    pub fn get_or_create_id<Q, T>(&mut self, name: &Q) -> MaybeNew<VID>
    where
        Q: Hash + Eq + ?Sized + ToOwned<Owned = T> + Borrow<str>,
        T: Into<ArcStr>,
    {
        if let Some(existing_id) = self.map.get(name.borrow()) {
            return MaybeNew::Existing(*existing_id);
        }

        let name: ArcStr = name.to_owned().into();
        let new_id = VID(self.reverse_map.len());
        self.reverse_map.push(name.clone());
        self.map.insert(name, new_id);
        MaybeNew::New(new_id)
    }

    pub fn get_id(&self, name: &str) -> Option<VID> {
        self.map.get(name).copied()
    }

    pub fn get_name(&self, id: VID) -> ArcStr {
        self.reverse_map
            .get(id.index())
            .cloned()
            .expect("internal ids should always be mapped to a name")
    }

    pub fn get_keys(&self) -> &[ArcStr] {
        &self.reverse_map
    }

    pub fn len(&self) -> usize {
        self.reverse_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse_map.is_empty()
    }
}
