//! The selector hash: four lookup tables plus a universal bucket, and the
//! merge-walk that turns a node's name/id/classes into an ascending
//! `(specificity, rule_index)` stream of candidate chains.
//!
//! Spec: §3 ("Selector hash") and §4.5 ("obtain four iterators ... merge-
//! walk all iterators simultaneously, always consuming whichever pending
//! head has the lowest (specificity, rule-index) pair"). Grounded on the
//! teacher's `RuleMap` (by_id/by_class/by_tag/universal, built by preferring
//! id > class > tag when indexing a compound) — same bucket-preference
//! policy, generalized from `String` keys to interned [`Symbol`]s and from a
//! single sheet-wide rule list to this crate's [`Rule`] arena.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use style_intern::Symbol;
use style_selectors::{DetailKind, Specificity};

use crate::rule::{Rule, RuleData};

/// A pointer to one selector chain: which rule, and which chain within that
/// rule's selector list (a rule can list several comma-separated chains
/// sharing one bytecode blob).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainRef {
    pub rule_index: usize,
    pub chain_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SortKey {
    specificity: Specificity,
    rule_order: u32,
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.specificity
            .cmp(&other.specificity)
            .then(self.rule_order.cmp(&other.rule_order))
    }
}

#[derive(Clone, Debug, Default)]
struct Bucket {
    entries: Vec<(SortKey, ChainRef)>,
}

impl Bucket {
    fn push(&mut self, key: SortKey, chain_ref: ChainRef) {
        self.entries.push((key, chain_ref));
    }

    fn sort(&mut self) {
        self.entries.sort_by_key(|(key, _)| *key);
    }
}

/// Four lookup tables (by element name, id, class) plus a universal bucket,
/// built once when a sheet is registered.
#[derive(Clone, Debug, Default)]
pub struct SelectorHash {
    by_name: HashMap<Symbol, Bucket>,
    by_id: HashMap<Symbol, Bucket>,
    by_class: HashMap<Symbol, Bucket>,
    universal: Bucket,
}

impl SelectorHash {
    /// Build the index for every selector rule in `rules`, preferring the
    /// most selective bucket present in each chain's rightmost compound (id
    /// over class over element), falling back to universal.
    #[must_use]
    pub fn build(rules: &[Rule]) -> Self {
        let mut hash = Self::default();
        for (rule_index, rule) in rules.iter().enumerate() {
            let RuleData::Selector { chains, .. } = &rule.data else {
                continue;
            };
            for (chain_index, chain) in chains.iter().enumerate() {
                let chain_ref = ChainRef {
                    rule_index,
                    chain_index,
                };
                let key = SortKey {
                    specificity: chain.specificity,
                    rule_order: rule.index,
                };
                hash.insert(chain, key, chain_ref);
            }
        }
        hash.finalize();
        log::debug!(
            "selector hash built: {} by-name, {} by-id, {} by-class, {} universal",
            hash.by_name.len(),
            hash.by_id.len(),
            hash.by_class.len(),
            hash.universal.entries.len()
        );
        hash
    }

    fn insert(&mut self, chain: &style_selectors::SelectorChain, key: SortKey, chain_ref: ChainRef) {
        let rightmost = &chain.rightmost;

        if let Some(id) = first_detail_name(rightmost, DetailKind::Id) {
            self.by_id.entry(id).or_default().push(key, chain_ref);
            return;
        }
        if let Some(class) = first_detail_name(rightmost, DetailKind::Class) {
            self.by_class.entry(class).or_default().push(key, chain_ref);
            return;
        }
        if let Some(name) = first_detail_name(rightmost, DetailKind::Element) {
            self.by_name.entry(name).or_default().push(key, chain_ref);
            return;
        }
        self.universal.push(key, chain_ref);
    }

    fn finalize(&mut self) {
        for bucket in self.by_name.values_mut() {
            bucket.sort();
        }
        for bucket in self.by_id.values_mut() {
            bucket.sort();
        }
        for bucket in self.by_class.values_mut() {
            bucket.sort();
        }
        self.universal.sort();
    }

    /// Merge-walk the name, id, per-class, and universal buckets applicable
    /// to one node, yielding `ChainRef`s in ascending `(specificity,
    /// rule_index)` order (§4.5).
    #[must_use]
    pub fn matching_candidates(
        &self,
        name: Option<Symbol>,
        id: Option<Symbol>,
        classes: &[Symbol],
    ) -> Vec<ChainRef> {
        let mut streams: Vec<&[(SortKey, ChainRef)]> = Vec::new();
        if let Some(name) = name {
            if let Some(bucket) = self.by_name.get(&name) {
                streams.push(&bucket.entries);
            }
        }
        if let Some(id) = id {
            if let Some(bucket) = self.by_id.get(&id) {
                streams.push(&bucket.entries);
            }
        }
        for class in classes {
            if let Some(bucket) = self.by_class.get(class) {
                streams.push(&bucket.entries);
            }
        }
        streams.push(&self.universal.entries);

        merge_streams(streams)
    }
}

fn first_detail_name(
    compound: &style_selectors::CompoundSelector,
    kind: DetailKind,
) -> Option<Symbol> {
    compound
        .details
        .iter()
        .find(|detail| detail.kind == kind)
        .map(|detail| detail.name)
}

/// k-way merge of pre-sorted streams by ascending `SortKey`, implemented
/// with a binary heap of stream cursors (§4.5's "always consuming whichever
/// pending head has the lowest pair").
fn merge_streams(streams: Vec<&[(SortKey, ChainRef)]>) -> Vec<ChainRef> {
    #[derive(PartialEq, Eq)]
    struct HeapEntry<'a> {
        key: SortKey,
        chain_ref: ChainRef,
        stream: &'a [(SortKey, ChainRef)],
        next_index: usize,
    }

    impl Ord for HeapEntry<'_> {
        fn cmp(&self, other: &Self) -> Ordering {
            // Reversed: BinaryHeap is a max-heap: we want the smallest key
            // to pop first.
            other.key.cmp(&self.key)
        }
    }
    impl PartialOrd for HeapEntry<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    let mut heap = BinaryHeap::new();
    for stream in streams {
        if let Some((key, chain_ref)) = stream.first() {
            heap.push(HeapEntry {
                key: *key,
                chain_ref: *chain_ref,
                stream,
                next_index: 1,
            });
        }
    }

    let mut result = Vec::new();
    while let Some(entry) = heap.pop() {
        result.push(entry.chain_ref);
        if let Some((key, chain_ref)) = entry.stream.get(entry.next_index) {
            heap.push(HeapEntry {
                key: *key,
                chain_ref: *chain_ref,
                stream: entry.stream,
                next_index: entry.next_index + 1,
            });
        }
    }
    result
}
