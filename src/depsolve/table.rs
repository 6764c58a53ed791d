use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// `base_package → ordered candidate list`, plus each key's position in
/// insertion order; the position *is* the "table index" the rest of
/// the resolver threads through the selection vector and the conflict
/// index.
///
/// Backed by [`IndexMap`] rather than a `HashMap` + side `Vec` because
/// that's exactly the data structure: O(1) lookup by key, O(1) lookup
/// by position, stable position across further inserts of existing
/// keys. [`rustc_hash`]'s hasher is used for the same reason cargo's
/// own resolver internals do: this map is on the hot path of both
/// traversals and never sees adversarial input.
#[derive(Debug, Default)]
pub struct CandidateTable<C> {
    entries: IndexMap<String, Vec<C>, FxBuildHasher>,
}

impl<C: Clone> CandidateTable<C> {
    pub fn new() -> Self {
        CandidateTable {
            entries: IndexMap::default(),
        }
    }

    pub fn contains(&self, base: &str) -> bool {
        self.entries.contains_key(base)
    }

    pub fn get(&self, base: &str) -> Option<&[C]> {
        self.entries.get(base).map(Vec::as_slice)
    }

    /// Inserts or overwrites the candidate list for `base`. A `base`
    /// already present keeps its existing table index; only a brand
    /// new key is appended at the end.
    pub fn insert(&mut self, base: String, list: Vec<C>) {
        self.entries.insert(base, list);
    }

    pub fn index_of(&self, base: &str) -> Option<usize> {
        self.entries.get_index_of(base)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(|(k, _)| k.as_str())
    }

    pub fn candidates_at(&self, index: usize) -> &[C] {
        self.entries
            .get_index(index)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn len_at(&self, index: usize) -> usize {
        self.candidates_at(index).len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[C])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
