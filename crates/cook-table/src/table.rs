//! The probe table.

use cook_core::growth;

use crate::error::TableError;
use crate::probe::{find_bucket, Bucket, Probe};

/// Key value reserved to mark a vacant bucket. Never storable.
pub const EMPTY_KEY: u32 = 0;

/// Numerator of the maximum load factor (3/4).
pub const MAX_LOAD_NUMERATOR: usize = 3;

/// Denominator of the maximum load factor (3/4).
pub const MAX_LOAD_DENOMINATOR: usize = 4;

/// Whether holding `count` entries in `capacity` buckets exceeds the load bound.
fn exceeds_load(count: usize, capacity: usize) -> bool {
    count.saturating_mul(MAX_LOAD_DENOMINATOR) > capacity.saturating_mul(MAX_LOAD_NUMERATOR)
}

/// Open-addressing hash table from non-zero `u32` keys to `u32` values.
///
/// Starts with no buckets. An insert that would take `count` past
/// `0.75 * capacity` first rehashes every live entry into
/// `max(16, 2 * capacity)` buckets. Updating an existing key never
/// rehashes and never changes the count.
///
/// ```
/// use cook_table::{fnv1a_str, ProbeTable};
///
/// let mut table = ProbeTable::new();
/// let key = fnv1a_str("main.rs");
/// assert_eq!(table.set(key, 3).unwrap(), None);
/// assert_eq!(table.set(key, 4).unwrap(), Some(3));
/// assert_eq!(table.get(key).unwrap(), Some(4));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProbeTable {
    buckets: Vec<Bucket>,
    count: usize,
}

impl ProbeTable {
    /// An empty table with no buckets. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buckets: Vec::new(),
            count: 0,
        }
    }

    /// A table pre-sized so that `entries` inserts fit without a rehash.
    ///
    /// The capacity is taken from the usual 16, 32, 64, ... chain.
    pub fn with_capacity(entries: usize) -> Result<Self, TableError> {
        let mut table = Self::new();
        let mut capacity = 0;
        while exceeds_load(entries, capacity) {
            capacity = growth::next_capacity(capacity)?;
        }
        if capacity > 0 {
            table.expand(capacity)?;
        }
        Ok(table)
    }

    /// Insert or update `key`.
    ///
    /// Returns the previous value if the key was already present (the
    /// count is unchanged), or `None` for a new entry. Fails with
    /// [`TableError::InvalidKey`] for key `0`.
    pub fn set(&mut self, key: u32, value: u32) -> Result<Option<u32>, TableError> {
        check_key(key)?;

        if let Probe::Hit(index) = find_bucket(&self.buckets, key) {
            let previous = std::mem::replace(&mut self.buckets[index].value, value);
            return Ok(Some(previous));
        }

        if exceeds_load(self.count + 1, self.capacity()) {
            let new_capacity = growth::next_capacity(self.capacity())?;
            self.expand(new_capacity)?;
        }

        match find_bucket(&self.buckets, key) {
            Probe::Vacant(index) => {
                self.buckets[index] = Bucket { key, value };
                self.count += 1;
                Ok(None)
            }
            Probe::Hit(index) => {
                let previous = std::mem::replace(&mut self.buckets[index].value, value);
                Ok(Some(previous))
            }
            Probe::Exhausted => Err(TableError::ProbeExhausted {
                key,
                capacity: self.capacity(),
            }),
        }
    }

    /// Look up `key`.
    ///
    /// A probe that reaches a vacant bucket, or cycles through the whole
    /// table, is a miss. Fails with [`TableError::InvalidKey`] for key `0`.
    pub fn get(&self, key: u32) -> Result<Option<u32>, TableError> {
        check_key(key)?;
        if self.count == 0 {
            return Ok(None);
        }
        match find_bucket(&self.buckets, key) {
            Probe::Hit(index) => Ok(Some(self.buckets[index].value)),
            Probe::Vacant(_) => Ok(None),
            Probe::Exhausted => {
                tracing::trace!(key, capacity = self.capacity(), "probe exhausted on lookup");
                Ok(None)
            }
        }
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: u32) -> Result<bool, TableError> {
        Ok(self.get(key)?.is_some())
    }

    /// Rehash every live entry into a fresh array of `new_capacity` buckets.
    ///
    /// Each entry is re-probed against the new array, since its slot
    /// depends on the capacity. Fails with [`TableError::InvalidCapacity`]
    /// unless `new_capacity` is strictly larger than the current capacity.
    /// On error the table is unchanged.
    pub fn expand(&mut self, new_capacity: usize) -> Result<(), TableError> {
        let current = self.capacity();
        if new_capacity <= current {
            return Err(TableError::InvalidCapacity {
                requested: new_capacity,
                current,
            });
        }

        let mut fresh = Vec::new();
        growth::reserve_exact(&mut fresh, new_capacity)?;
        fresh.resize(new_capacity, Bucket::VACANT);

        for bucket in self.buckets.iter().filter(|b| b.is_occupied()) {
            match find_bucket(&fresh, bucket.key) {
                Probe::Vacant(index) | Probe::Hit(index) => fresh[index] = *bucket,
                Probe::Exhausted => {
                    return Err(TableError::ProbeExhausted {
                        key: bucket.key,
                        capacity: new_capacity,
                    })
                }
            }
        }

        self.buckets = fresh;
        tracing::debug!(
            from = current,
            to = new_capacity,
            count = self.count,
            "probe table rehashed"
        );
        Ok(())
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Ratio of entries to buckets; `0.0` for a table with no buckets.
    pub fn load_factor(&self) -> f64 {
        if self.buckets.is_empty() {
            0.0
        } else {
            self.count as f64 / self.buckets.len() as f64
        }
    }

    /// Remove every entry, keeping the bucket array.
    pub fn clear(&mut self) {
        self.buckets.fill(Bucket::VACANT);
        self.count = 0;
    }

    /// Remove every entry and release the bucket array.
    pub fn free(&mut self) {
        self.buckets = Vec::new();
        self.count = 0;
    }

    /// Iterate over `(key, value)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.buckets
            .iter()
            .filter(|b| b.is_occupied())
            .map(|b| (b.key, b.value))
    }
}

fn check_key(key: u32) -> Result<(), TableError> {
    if key == EMPTY_KEY {
        Err(TableError::InvalidKey)
    } else {
        Ok(())
    }
}
