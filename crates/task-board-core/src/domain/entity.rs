//! Domain Layer - Core Entity Trait
//!
//! Basic contract for records keyed by a server-assigned identifier, plus
//! the list helpers the board uses to keep its cached copy in step.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Replace the entity with the same id, or append it when absent
pub fn upsert<T: Entity>(list: &mut Vec<T>, entity: T) {
    match list.iter_mut().find(|existing| existing.id() == entity.id()) {
        Some(slot) => *slot = entity,
        None => list.push(entity),
    }
}

/// Remove the entity with the given id. Returns whether anything was removed.
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: &T::Id) -> bool {
    let before = list.len();
    list.retain(|entity| entity.id() != id);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32, &'static str);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.0
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut rows = vec![Row(1, "a"), Row(2, "b")];
        upsert(&mut rows, Row(1, "z"));
        assert_eq!(rows, vec![Row(1, "z"), Row(2, "b")]);
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut rows = vec![Row(1, "a")];
        upsert(&mut rows, Row(3, "c"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Row(3, "c"));
    }

    #[test]
    fn test_remove_by_id() {
        let mut rows = vec![Row(1, "a"), Row(2, "b")];
        assert!(remove_by_id(&mut rows, &2));
        assert!(!remove_by_id(&mut rows, &2));
        assert_eq!(rows, vec![Row(1, "a")]);
    }
}
