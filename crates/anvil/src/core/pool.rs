use std::ops::{Index, IndexMut};

/// Append-only container with a hard upper bound of `N` slots.
/// The only way to remove items is [`FixedPool::reset`].
#[derive(Debug, Clone)]
pub struct FixedPool<T, const N: usize> {
    items: Vec<T>,
}

impl<T: Default, const N: usize> FixedPool<T, N> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(N),
        }
    }

    /// Claim the next slot, reset to `T::default()`.
    /// Panics when the pool is full.
    pub fn push(&mut self) -> &mut T {
        let len = self.items.len();
        match self.try_push() {
            Some(slot) => slot,
            None => panic!(
                "FixedPool<{}, {N}> overflow: {len} of {N} slots in use",
                std::any::type_name::<T>()
            ),
        }
    }

    /// Claim the next slot, or `None` if full.
    pub fn try_push(&mut self) -> Option<&mut T> {
        if self.items.len() == N {
            return None;
        }
        self.items.push(T::default());
        self.items.last_mut()
    }

    /// Drop every item and zero the count.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

impl<T, const N: usize> FixedPool<T, N> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: Default, const N: usize> Default for FixedPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for FixedPool<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.items.len();
        match self.items.get(index) {
            Some(item) => item,
            None => panic!("FixedPool index {index} out of bounds (count {len})"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedPool<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(item) => item,
            None => panic!("FixedPool index {index} out of bounds (count {len})"),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedPool<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedPool<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
