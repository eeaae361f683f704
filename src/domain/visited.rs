/// Bitmap of building slots already assigned to a sector.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    inner: Vec<bool>,
}

impl VisitedSet {
    pub fn new(slots: usize) -> Self {
        Self {
            inner: vec![false; slots],
        }
    }

    /// Marks `slot`, returning `true` only on the first call for that slot.
    pub fn mark(&mut self, slot: usize) -> bool {
        if self.inner[slot] {
            return false;
        }
        self.inner[slot] = true;
        true
    }
}
