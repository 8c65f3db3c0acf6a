//! Ordered record collections with prepend/replace/remove semantics.

/// A record addressable by a string id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

/// A partial update for records of type `T`.
pub trait Patch<T> {
    /// Overwrite every field present in the patch.
    fn apply(&self, record: &mut T);
}

/// Most-recent-first list of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Insert at the front.
    pub fn add(&mut self, record: T) -> &T {
        self.items.insert(0, record);
        &self.items[0]
    }

    /// Apply `patch` to the record with `id` in place. Returns `None` when no record matches.
    pub fn update<P: Patch<T>>(&mut self, id: &str, patch: &P) -> Option<&T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let mut updated = self.items[position].clone();
        patch.apply(&mut updated);
        self.items[position] = updated;
        Some(&self.items[position])
    }

    /// Remove the record with `id`. Returns `false` when no record matches.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: String,
        body: String,
    }

    impl Record for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    struct SetBody(&'static str);

    impl Patch<Note> for SetBody {
        fn apply(&self, record: &mut Note) {
            record.body = self.0.to_string();
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    fn sample() -> Collection<Note> {
        Collection::new(vec![note("a", "one"), note("b", "two"), note("c", "three")])
    }

    #[test]
    fn test_add_prepends() {
        let mut notes = sample();
        notes.add(note("d", "four"));
        let ids: Vec<&str> = notes.as_slice().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut notes = sample();
        let updated = notes.update("b", &SetBody("changed")).cloned();
        assert_eq!(updated, Some(note("b", "changed")));
        assert_eq!(
            notes.as_slice(),
            &[note("a", "one"), note("b", "changed"), note("c", "three")]
        );
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut notes = sample();
        assert!(notes.update("zzz", &SetBody("changed")).is_none());
        assert_eq!(notes, sample());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut notes = sample();
        assert!(notes.remove("b"));
        assert_eq!(notes.as_slice(), &[note("a", "one"), note("c", "three")]);
        assert!(!notes.remove("b"));
        assert_eq!(notes.len(), 2);
    }
}
