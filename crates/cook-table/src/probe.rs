//! Linear-probe bucket search.

use crate::table::EMPTY_KEY;

/// One key/value slot. A bucket whose key is [`EMPTY_KEY`] is vacant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bucket {
    pub(crate) key: u32,
    pub(crate) value: u32,
}

impl Bucket {
    pub(crate) const VACANT: Bucket = Bucket {
        key: EMPTY_KEY,
        value: 0,
    };

    pub(crate) fn is_occupied(&self) -> bool {
        self.key != EMPTY_KEY
    }
}

/// Outcome of probing for a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The key is stored at this index.
    Hit(usize),
    /// The key is absent; this is the first vacant bucket on its chain.
    Vacant(usize),
    /// Every bucket was visited without a hit or a vacancy (or there are
    /// no buckets at all).
    Exhausted,
}

/// Scan forward from `key % capacity`, wrapping, until the key or a
/// vacant bucket is found, or the scan returns to its start.
///
/// `key` must not be [`EMPTY_KEY`]; callers reject it beforehand.
pub(crate) fn find_bucket(buckets: &[Bucket], key: u32) -> Probe {
    let capacity = buckets.len();
    if capacity == 0 {
        return Probe::Exhausted;
    }
    let start = key as usize % capacity;
    let mut index = start;
    loop {
        let bucket = &buckets[index];
        if bucket.key == key {
            return Probe::Hit(index);
        }
        if !bucket.is_occupied() {
            return Probe::Vacant(index);
        }
        index = (index + 1) % capacity;
        if index == start {
            return Probe::Exhausted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(key: u32) -> Bucket {
        Bucket { key, value: key * 10 }
    }

    #[test]
    fn zero_capacity_is_exhausted() {
        assert_eq!(find_bucket(&[], 7), Probe::Exhausted);
    }

    #[test]
    fn empty_home_bucket_is_vacant() {
        let buckets = [Bucket::VACANT; 8];
        assert_eq!(find_bucket(&buckets, 11), Probe::Vacant(3));
    }

    #[test]
    fn collision_walks_forward() {
        let mut buckets = [Bucket::VACANT; 8];
        buckets[3] = occupied(3);
        buckets[4] = occupied(12);
        assert_eq!(find_bucket(&buckets, 11), Probe::Vacant(5));
        assert_eq!(find_bucket(&buckets, 12), Probe::Hit(4));
    }

    #[test]
    fn probe_wraps_past_the_end() {
        let mut buckets = [Bucket::VACANT; 4];
        buckets[3] = occupied(3);
        assert_eq!(find_bucket(&buckets, 7), Probe::Vacant(0));
    }

    #[test]
    fn full_table_without_key_is_exhausted() {
        let buckets = [occupied(1), occupied(2), occupied(3), occupied(4)];
        assert_eq!(find_bucket(&buckets, 9), Probe::Exhausted);
        assert_eq!(find_bucket(&buckets, 4), Probe::Hit(3));
    }
}
