use glam::Vec3;

/// Handle to an entity in a [`Scene`]. Stays valid after despawn; lookups
/// simply return None once the slot is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

#[derive(Debug, Clone)]
struct Entity {
    name: String,
    position: Vec3,
    visible: bool,
}

/// Flat store of named entity positions. No hierarchy, no components beyond
/// a world position and a visibility flag.
#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<Option<Entity>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, name: &str, position: Vec3) -> EntityId {
        self.entities.push(Some(Entity {
            name: name.to_string(),
            position,
            visible: true,
        }));
        EntityId(self.entities.len() - 1)
    }

    /// Spawn an entity that starts hidden (e.g. a marker shown on first use).
    pub fn spawn_hidden(&mut self, name: &str, position: Vec3) -> EntityId {
        let id = self.spawn(name, position);
        self.set_visible(id, false);
        id
    }

    pub fn despawn(&mut self, id: EntityId) {
        if let Some(slot) = self.entities.get_mut(id.0) {
            *slot = None;
        }
    }

    pub fn position(&self, id: EntityId) -> Option<Vec3> {
        self.entity(id).map(|e| e.position)
    }

    pub fn set_position(&mut self, id: EntityId, position: Vec3) {
        if let Some(e) = self.entity_mut(id) {
            e.position = position;
        }
    }

    pub fn is_visible(&self, id: EntityId) -> bool {
        self.entity(id).is_some_and(|e| e.visible)
    }

    pub fn set_visible(&mut self, id: EntityId, visible: bool) {
        if let Some(e) = self.entity_mut(id) {
            e.visible = visible;
        }
    }

    pub fn name(&self, id: EntityId) -> Option<&str> {
        self.entity(id).map(|e| e.name.as_str())
    }

    /// First live entity with the given name.
    pub fn find(&self, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|e| e.name == name))
            .map(EntityId)
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0).and_then(|slot| slot.as_mut())
    }
}
