/// Vec of optional slots. Positions are never reused, so an index handed out once keeps
/// pointing at the same value or at nothing.
#[derive(Debug, Clone)]
pub struct SlotVec<T> {
    inner: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self {
            inner: vec![],
            len: 0,
        }
    }
}

impl<T> SlotVec<T> {
    pub fn push(&mut self, value: T) -> usize {
        let pos = self.inner.len();
        self.inner.push(Some(value));
        self.len += 1;
        pos
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.inner.get(pos).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.inner.get_mut(pos).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, pos: usize) -> Option<T> {
        let value = self.inner.get_mut(pos)?.take();
        if value.is_some() {
            self.len -= 1;
        }
        value
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.inner
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (i, v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.inner
            .iter_mut()
            .enumerate()
            .filter_map(|(i, v)| v.as_mut().map(|v| (i, v)))
    }

    /// Maps every slot, keeping positions aligned with this vec.
    pub fn map_slots<U>(&self, mut f: impl FnMut(&T) -> U) -> Vec<Option<U>> {
        self.inner.iter().map(|v| v.as_ref().map(&mut f)).collect()
    }
}
