//! Registry of decorative scene objects.
//!
//! Every decoration (callout sprite, info panel) is registered by the
//! component that created it, and only that component may remove it. The web
//! layer mirrors ids to renderer objects, so no scene-graph type inspection is
//! ever needed to find strays.

use crate::error::CoreError;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecorationId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationOwner {
    CalloutAnimator,
    InfoPanel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    CalloutSprite,
    PanelGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub owner: DecorationOwner,
    pub kind: DecorationKind,
}

#[derive(Clone, Debug, Default)]
pub struct DecorationRegistry {
    entries: FnvHashMap<DecorationId, Decoration>,
    next_id: u32,
}

impl DecorationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, owner: DecorationOwner, kind: DecorationKind) -> DecorationId {
        let id = DecorationId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Decoration { owner, kind });
        id
    }

    pub fn remove(
        &mut self,
        requested_by: DecorationOwner,
        id: DecorationId,
    ) -> Result<Decoration, CoreError> {
        let entry = *self
            .entries
            .get(&id)
            .ok_or(CoreError::UnknownDecoration(id))?;
        if entry.owner != requested_by {
            return Err(CoreError::ForeignDecoration {
                id,
                owner: entry.owner,
                requested_by,
            });
        }
        self.entries.remove(&id);
        Ok(entry)
    }

    pub fn get(&self, id: DecorationId) -> Option<&Decoration> {
        self.entries.get(&id)
    }

    pub fn count(&self, kind: DecorationKind) -> usize {
        self.entries.values().filter(|d| d.kind == kind).count()
    }

    /// Ids owned by `owner`, in creation order.
    pub fn owned_by(&self, owner: DecorationOwner) -> Vec<DecorationId> {
        let mut ids: Vec<DecorationId> = self
            .entries
            .iter()
            .filter(|(_, d)| d.owner == owner)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }
}
