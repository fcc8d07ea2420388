//! Bit-set backed region sets.
//!
//! Iteration always yields elements in ascending order, so converting a
//! [`RegionSet`] to a `Vec` gives the sorted, duplicate-free element array
//! that the rest of the crate hands out.

/// A set of small non-negative integers backed by a vector of u64 words.
///
/// Each bit corresponds to an element. The set grows as needed when
/// inserting elements beyond the current capacity; see [`RegionSet::insert`].
#[derive(Debug, Clone, Default)]
pub struct RegionSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
}

impl RegionSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Gets the word index and bit position for a given element.
    #[inline]
    fn word_and_bit(element: u32) -> (usize, usize) {
        let index = element as usize;
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    #[inline]
    pub fn contains(&self, element: u32) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(element);
        match self.words.get(word_idx) {
            Some(word) => word & (1u64 << bit_idx) != 0,
            None => false,
        }
    }

    /// Adds an element. Returns true if it was not already present.
    ///
    /// Storage grows to `element / 64 + 1` words, so a single large element
    /// costs memory proportional to its value. Only the small region ids of a
    /// [`Universe`][crate::universe::Universe] are meant to be stored here.
    pub fn insert(&mut self, element: u32) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(element);

        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        self.words[word_idx] |= mask;
        was_clear
    }

    /// Removes an element. Returns true if it was present.
    pub fn remove(&mut self, element: u32) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(element);
        match self.words.get_mut(word_idx) {
            Some(word) => {
                let mask = 1u64 << bit_idx;
                let was_set = *word & mask != 0;
                *word &= !mask;
                was_set
            }
            None => false,
        }
    }

    /// Elements present in either set.
    pub fn union(&self, other: &Self) -> Self {
        let (long, short) = if self.words.len() >= other.words.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut words = long.words.clone();
        for (w, s) in words.iter_mut().zip(&short.words) {
            *w |= s;
        }
        Self { words }
    }

    /// Elements present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let words = self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect();
        Self { words }
    }

    /// Elements of `self` absent from `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut words = self.words.clone();
        for (w, o) in words.iter_mut().zip(&other.words) {
            *w &= !o;
        }
        Self { words }
    }

    /// Elements of `universe` absent from `self`.
    pub fn complement(&self, universe: &Self) -> Self {
        universe.difference(self)
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> RegionSetIter<'_> {
        RegionSetIter {
            set: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Sorted, duplicate-free element array.
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

/// Two sets are equal when they hold the same elements, regardless of how
/// many trailing zero words either one carries.
impl PartialEq for RegionSet {
    fn eq(&self, other: &Self) -> bool {
        let n = self.words.len().max(other.words.len());
        (0..n).all(|i| self.words.get(i).copied().unwrap_or(0) == other.words.get(i).copied().unwrap_or(0))
    }
}

impl Eq for RegionSet {}

impl FromIterator<u32> for RegionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<u32> for RegionSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl From<&[u32]> for RegionSet {
    fn from(elements: &[u32]) -> Self {
        elements.iter().copied().collect()
    }
}

/// Iterator over the elements of a [`RegionSet`].
pub struct RegionSetIter<'a> {
    set: &'a RegionSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for RegionSetIter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some((self.word_idx * RegionSet::BITS_PER_WORD + bit_idx) as u32);
            }

            self.word_idx += 1;
            if self.word_idx >= self.set.words.len() {
                return None;
            }
            self.current_word = self.set.words[self.word_idx];
        }
    }
}
