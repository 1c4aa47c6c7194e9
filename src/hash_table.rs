//! The raw separate-chaining table underneath [`HashMap`] and [`HashSet`].
//!
//! [`HashMap`]: crate::HashMap
//! [`HashSet`]: crate::HashSet

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::Error;

/// Number of slots allocated by [`HashTable::new`] and restored by
/// [`HashTable::clear`].
pub const DEFAULT_SLOT_COUNT: usize = 20;

/// Numerator of the growth threshold. The table doubles its slot array when
/// `len >= slot_count * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR`.
pub const LOAD_FACTOR_NUMERATOR: usize = 7;

/// Denominator of the growth threshold.
pub const LOAD_FACTOR_DENOMINATOR: usize = 10;

/// Clears the sign bit of the 32-bit hash domain.
const NON_NEGATIVE_MASK: u32 = 0x7FFF_FFFF;

#[inline(always)]
fn exceeds_load_factor(populated: usize, slot_count: usize) -> bool {
    populated as u128 * LOAD_FACTOR_DENOMINATOR as u128
        >= slot_count as u128 * LOAD_FACTOR_NUMERATOR as u128
}

/// Maps a hash onto a slot. Only the low 32 bits participate, with the sign
/// bit cleared, so the mapping is stable for the 32-bit signed hash domain.
#[inline(always)]
fn slot_index(hash: u64, slot_count: usize) -> usize {
    debug_assert!(slot_count > 0);
    ((hash as u32) & NON_NEGATIVE_MASK) as usize % slot_count
}

#[derive(Clone)]
struct Node<V> {
    value: V,
    hash: u64,
    next: Option<usize>,
}

#[inline(always)]
fn node_ref<V>(nodes: &[Option<Node<V>>], index: usize) -> &Node<V> {
    match &nodes[index] {
        Some(node) => node,
        None => unreachable!("chain link {index} points at a vacated node"),
    }
}

#[inline(always)]
fn node_mut<V>(nodes: &mut [Option<Node<V>>], index: usize) -> &mut Node<V> {
    match &mut nodes[index] {
        Some(node) => node,
        None => unreachable!("chain link {index} points at a vacated node"),
    }
}

/// Debug statistics for hash table analysis.
///
/// Available in unit tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Length of the slot array
    pub slot_count: usize,
    /// Number of slots heading a non-empty chain
    pub occupied_slots: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Arena cells waiting to be reused
    pub vacated_nodes: usize,
    /// Load factor (populated / slot_count)
    pub load_factor: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {} in {} slots ({:.2}% load factor)",
            self.populated,
            self.slot_count,
            self.load_factor * 100.0
        );
        println!(
            "Slot Usage: {}/{} slots head a chain",
            self.occupied_slots, self.slot_count
        );
        println!("Longest chain: {}", self.longest_chain);
        println!("Vacated arena cells: {}", self.vacated_nodes);
    }
}

/// Number of slots per chain length. `counts[n]` is the number of slots whose
/// chain holds exactly `n` entries.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHistogram {
    /// Slot counts indexed by chain length
    pub counts: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ChainHistogram {
    /// Pretty-prints the histogram horizontally using stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("chain histogram ({} slots):", self.counts.iter().sum::<usize>());

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = match units % 8 {
                1 => Some('▏'),
                2 => Some('▎'),
                3 => Some('▍'),
                4 => Some('▌'),
                5 => Some('▋'),
                6 => Some('▊'),
                7 => Some('▉'),
                _ => None,
            };
            if let Some(ch) = partial {
                bar.push(ch);
            }
            bar
        };

        for (len, &count) in self.counts.iter().enumerate() {
            println!("{:>3} | {} ({})", len, make_bar(count), count);
        }
    }
}

/// A hash table using separate chaining.
///
/// `HashTable<V>` stores values of type `V` in singly linked chains hanging
/// off a slot array. Like the other raw tables in this crate, you provide both
/// the hash value and an equality predicate for each operation.
///
/// Entries live in an index-addressed arena: each slot holds the index of the
/// head of its chain and each entry holds the index of its successor. The hash
/// of every entry is cached at insertion and reused when the slot array grows.
///
/// ## Growth
///
/// Before every insertion through [`entry`](HashTable::entry), the table
/// checks `len >= 0.70 * slot_count` and, if so, doubles the slot array and
/// relinks every entry. The table never shrinks.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    slots: Vec<Option<usize>>,
    nodes: Vec<Option<Node<V>>>,
    free: Vec<usize>,
    populated: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field(
                "chains",
                &(0..self.slots.len())
                    .map(|slot| self.chain_len(slot))
                    .collect::<Vec<_>>(),
            )
            .field("populated", &self.populated)
            .field("vacated", &self.free.len())
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with [`DEFAULT_SLOT_COUNT`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// # use chain_hash::hash_table::DEFAULT_SLOT_COUNT;
    /// #
    /// let table: HashTable<u64> = HashTable::new();
    /// assert_eq!(table.slot_count(), DEFAULT_SLOT_COUNT);
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_SLOT_COUNT)
    }

    /// Creates an empty table with exactly `slot_count` slots.
    ///
    /// Returns [`Error::InvalidArgument`] if `slot_count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::Error;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64> = HashTable::with_capacity(1)?;
    /// assert_eq!(table.slot_count(), 1);
    ///
    /// assert!(matches!(
    ///     HashTable::<u64>::with_capacity(0),
    ///     Err(Error::InvalidArgument(_))
    /// ));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_capacity(slot_count: usize) -> Result<Self, Error> {
        if slot_count == 0 {
            return Err(Error::InvalidArgument("slot count must be greater than zero"));
        }
        Ok(Self::with_slots(slot_count))
    }

    /// Creates a table large enough to take `len` insertions without growing.
    pub(crate) fn sized_for(len: usize) -> Self {
        let slot_count = (len.saturating_mul(LOAD_FACTOR_DENOMINATOR) / LOAD_FACTOR_NUMERATOR)
            .saturating_add(1)
            .max(DEFAULT_SLOT_COUNT);
        Self::with_slots(slot_count)
    }

    fn with_slots(slot_count: usize) -> Self {
        debug_assert!(slot_count > 0);
        log::trace!("allocating chained table with {slot_count} slots");
        Self {
            slots: vec![None; slot_count],
            nodes: Vec::new(),
            free: Vec::new(),
            populated: 0,
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of elements in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.len(), 0);
    ///
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns the current length of the slot array.
    ///
    /// The slot array starts at the length given at construction and doubles
    /// every time the load factor threshold is reached.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Removes all elements and replaces the slot array with a fresh one of
    /// [`DEFAULT_SLOT_COUNT`] slots.
    ///
    /// Any slot count passed to [`with_capacity`](HashTable::with_capacity) is
    /// not preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// # use chain_hash::hash_table::DEFAULT_SLOT_COUNT;
    /// #
    /// let mut table = HashTable::with_capacity(4)?;
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// table.entry(2, |&n: &u64| n == 2).or_insert(2);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.slot_count(), DEFAULT_SLOT_COUNT);
    /// # Ok::<(), chain_hash::Error>(())
    /// ```
    pub fn clear(&mut self) {
        log::debug!(
            "clearing chained table: dropping {} entries, resetting to {} slots",
            self.populated,
            DEFAULT_SLOT_COUNT
        );
        *self = Self::with_slots(DEFAULT_SLOT_COUNT);
    }

    /// Returns an iterator over all values in the table.
    ///
    /// Values are yielded slot by slot, walking each chain from its head. The
    /// order is not specified and changes whenever the table grows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// table.entry(2, |&n: &u64| n == 2).or_insert(2);
    ///
    /// let mut values: Vec<u64> = table.iter().copied().collect();
    /// values.sort();
    /// assert_eq!(values, [1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            table: self,
            slot: 0,
            cursor: None,
            remaining: self.populated,
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// The table is empty as soon as `drain` returns; values not consumed by
    /// the caller are dropped with the iterator. Unlike
    /// [`clear`](HashTable::clear), the current slot count is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(7, |&n: &u64| n == 7).or_insert(7);
    ///
    /// let values: Vec<u64> = table.drain().collect();
    /// assert!(table.is_empty());
    /// assert_eq!(values, [7]);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.free.clear();
        self.populated = 0;
        Drain {
            inner: self.nodes.drain(..),
        }
    }

    /// Finds a value in the table by hash and equality predicate.
    ///
    /// Walks the whole chain of the slot `hash` maps to and returns the first
    /// value whose cached hash equals `hash` and for which `eq` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(42, |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(99, |&n| n == 99), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        self.find_index(hash, eq)
            .map(|index| &node_ref(&self.nodes, index).value)
    }

    /// Finds a value in the table by hash and equality predicate, returning a
    /// mutable reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// if let Some(value) = table.find_mut(42, |&n| n == 42) {
    ///     *value = 100;
    /// }
    /// assert_eq!(table.find(42, |&n| n == 100), Some(&100));
    /// ```
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        self.find_index(hash, eq)
            .map(|index| &mut node_mut(&mut self.nodes, index).value)
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// The growth check runs first, before the chain is searched, so calling
    /// `entry` on a table at its load factor threshold grows it even when the
    /// value turns out to be present already.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(5, |s: &String| s == "hello") {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "updated".to_string();
    ///     }
    /// }
    ///
    /// table
    ///     .entry(5, |s: &String| s == "hello")
    ///     .or_insert("ignored".to_string());
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        self.maybe_rehash();
        match self.find_index(hash, eq) {
            Some(index) => Entry::Occupied(OccupiedEntry { table: self, index }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Removes and returns a value from the table.
    ///
    /// The chain is walked with a trailing link so the matching entry can be
    /// spliced out of either the slot head or its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(99, |&n| n == 99), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let slot = slot_index(hash, self.slots.len());
        self.unlink(slot, |_, node| node.hash == hash && eq(&node.value))
    }

    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        if self.populated == 0 {
            return None;
        }

        let mut cursor = self.slots[slot_index(hash, self.slots.len())];
        while let Some(index) = cursor {
            let node = node_ref(&self.nodes, index);
            if node.hash == hash && eq(&node.value) {
                return Some(index);
            }
            cursor = node.next;
        }

        None
    }

    /// Splices the first node of `slot`'s chain accepted by `matches` out of
    /// the chain and returns its value.
    fn unlink(
        &mut self,
        slot: usize,
        matches: impl Fn(usize, &Node<V>) -> bool,
    ) -> Option<V> {
        let mut prev: Option<usize> = None;
        let mut cursor = self.slots[slot];

        while let Some(index) = cursor {
            let node = node_ref(&self.nodes, index);
            if matches(index, node) {
                let next = node.next;
                match prev {
                    None => self.slots[slot] = next,
                    Some(prev) => node_mut(&mut self.nodes, prev).next = next,
                }

                let node = self.nodes[index].take()?;
                self.free.push(index);
                self.populated -= 1;
                return Some(node.value);
            }

            prev = cursor;
            cursor = node.next;
        }

        None
    }

    fn alloc_node(&mut self, node: Node<V>) -> usize {
        match self.free.pop() {
            Some(index) => {
                debug_assert!(self.nodes[index].is_none());
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    #[inline]
    fn maybe_rehash(&mut self) {
        if exceeds_load_factor(self.populated, self.slots.len()) {
            self.rehash();
        }
    }

    /// Doubles the slot array and relinks every entry as the new head of the
    /// slot its cached hash maps to. Chain order is not preserved.
    #[cold]
    #[inline(never)]
    fn rehash(&mut self) {
        let old_count = self.slots.len();
        let new_count = old_count.checked_mul(2).expect("slot count overflow");
        log::debug!(
            "growing chained table from {old_count} to {new_count} slots ({} entries)",
            self.populated
        );

        let old_slots = core::mem::replace(&mut self.slots, vec![None; new_count]);
        for head in old_slots {
            let mut cursor = head;
            while let Some(index) = cursor {
                let node = node_mut(&mut self.nodes, index);
                cursor = node.next;

                let slot = slot_index(node.hash, new_count);
                node.next = self.slots[slot];
                self.slots[slot] = Some(index);
            }
        }
    }

    fn chain_len(&self, slot: usize) -> usize {
        let mut len = 0;
        let mut cursor = self.slots[slot];
        while let Some(index) = cursor {
            len += 1;
            cursor = node_ref(&self.nodes, index).next;
        }
        len
    }

    /// Returns the number of slots per chain length.
    ///
    /// The returned histogram has `longest_chain + 1` bins; bin `0` counts
    /// empty slots.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> ChainHistogram {
        let mut counts = vec![0usize; 1];
        for slot in 0..self.slots.len() {
            let len = self.chain_len(slot);
            if counts.len() <= len {
                counts.resize(len + 1, 0);
            }
            counts[len] += 1;
        }
        ChainHistogram { counts }
    }

    /// Returns utilization statistics for debugging.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let lengths = (0..self.slots.len()).map(|slot| self.chain_len(slot));
        let (occupied_slots, longest_chain) = lengths.fold((0, 0), |(occupied, longest), len| {
            (occupied + usize::from(len > 0), longest.max(len))
        });

        DebugStats {
            populated: self.populated,
            slot_count: self.slots.len(),
            occupied_slots,
            longest_chain,
            vacated_nodes: self.free.len(),
            load_factor: self.populated as f64 / self.slots.len() as f64,
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - no matching value is present in the table
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - a matching value is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// let value = table.entry(3, |&n: &u64| n == 3).or_insert(3);
    /// assert_eq!(*value, 3);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Links `value` as the new head of its slot's chain and returns a mutable
    /// reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// if let Entry::Vacant(entry) = table.entry(9, |&n: &u64| n == 9) {
    ///     assert_eq!(*entry.insert(9), 9);
    /// }
    /// assert_eq!(table.find(9, |&n| n == 9), Some(&9));
    /// ```
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        let slot = slot_index(self.hash, table.slots.len());
        let index = table.alloc_node(Node {
            value,
            hash: self.hash,
            next: table.slots[slot],
        });
        table.slots[slot] = Some(index);
        table.populated += 1;

        &mut node_mut(&mut table.nodes, index).value
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &node_ref(&self.table.nodes, self.index).value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut node_mut(&mut self.table.nodes, self.index).value
    }

    /// Converts the entry into a mutable reference to the value in the entry
    /// with a lifetime bound to the table itself.
    pub fn into_mut(self) -> &'a mut V {
        &mut node_mut(&mut self.table.nodes, self.index).value
    }

    /// Unlinks the entry from its chain and returns the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(4, |&n: &u64| n == 4).or_insert(4);
    ///
    /// if let Entry::Occupied(entry) = table.entry(4, |&n: &u64| n == 4) {
    ///     assert_eq!(entry.remove(), 4);
    /// }
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(self) -> V {
        let target = self.index;
        let hash = node_ref(&self.table.nodes, target).hash;
        let slot = slot_index(hash, self.table.slots.len());
        match self.table.unlink(slot, |index, _| index == target) {
            Some(value) => value,
            None => unreachable!("occupied entry {target} is not linked from its slot"),
        }
    }
}

/// An iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    table: &'a HashTable<V>,
    slot: usize,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(index) = self.cursor {
                let node = node_ref(&self.table.nodes, index);
                self.cursor = node.next;
                self.remaining -= 1;
                return Some(&node.value);
            }

            if self.remaining == 0 || self.slot >= self.table.slots.len() {
                return None;
            }

            self.cursor = self.table.slots[self.slot];
            self.slot += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// A draining iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, V> {
    inner: vec::Drain<'a, Option<Node<V>>>,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|node| node.map(|node| node.value))
    }
}
