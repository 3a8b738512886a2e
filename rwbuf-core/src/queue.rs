//! Oldest-first queue of fragments

use crate::error::Result;
use crate::fragment::{Fragment, FragmentId, StagedPayload};
use crate::transfer::Transfer;
use std::collections::VecDeque;

/// FIFO of fragments in enqueue order
///
/// Fragment ids are contiguous from the head to the tail because fragments
/// only ever leave from the front. That makes an id both a stable handle and
/// an O(1) index: `index = id - head_id`.
#[derive(Debug)]
pub struct FragmentQueue {
    fragments: VecDeque<Fragment>,
    /// Id of the oldest live fragment, or `next_id` when empty
    head_id: FragmentId,
    next_id: FragmentId,
    len_bytes: usize,
}

impl FragmentQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            fragments: VecDeque::new(),
            head_id: FragmentId(0),
            next_id: FragmentId(0),
            len_bytes: 0,
        }
    }

    /// Link an already staged payload at the tail
    pub fn push_staged(&mut self, payload: StagedPayload) -> FragmentId {
        let id = self.next_id;
        let fragment = Fragment::from_staged(id, payload);

        self.len_bytes += fragment.len();
        self.fragments.push_back(fragment);
        self.next_id = id.next();
        id
    }

    /// Copy `src` into a new fragment and link it at the tail.
    ///
    /// On error nothing is linked and no id is consumed.
    pub fn try_push<T>(&mut self, src: &[u8], transfer: &mut T) -> Result<FragmentId>
    where
        T: Transfer + ?Sized,
    {
        let payload = StagedPayload::copy_in(src, transfer)?;
        Ok(self.push_staged(payload))
    }

    /// Oldest fragment
    pub fn front(&self) -> Option<&Fragment> {
        self.fragments.front()
    }

    /// Trim `count` bytes from the oldest fragment in place.
    ///
    /// Returns the id of the trimmed fragment. The fragment stays linked even
    /// if it becomes empty; callers retire it with [`pop_front`](Self::pop_front).
    pub fn trim_front(&mut self, count: usize) -> Option<FragmentId> {
        let fragment = self.fragments.front_mut()?;
        let count = count.min(fragment.len());
        fragment.trim_front(count);
        self.len_bytes -= count;
        Some(fragment.id())
    }

    /// Unlink and return the oldest fragment
    pub fn pop_front(&mut self) -> Option<Fragment> {
        let fragment = self.fragments.pop_front()?;
        self.len_bytes -= fragment.len();
        self.head_id = fragment.id().next();
        Some(fragment)
    }

    /// True if `id` names a fragment that is still linked
    pub fn contains(&self, id: FragmentId) -> bool {
        id >= self.head_id && id < self.next_id
    }

    /// Look up a live fragment by id
    pub fn get(&self, id: FragmentId) -> Option<&Fragment> {
        if !self.contains(id) {
            return None;
        }
        self.fragments.get((id.0 - self.head_id.0) as usize)
    }

    /// Id of the oldest fragment
    pub fn first_id(&self) -> Option<FragmentId> {
        self.fragments.front().map(Fragment::id)
    }

    /// Id of the newest fragment
    pub fn last_id(&self) -> Option<FragmentId> {
        self.fragments.back().map(Fragment::id)
    }

    /// Id of the fragment enqueued right after `id`, if it is live
    pub fn id_after(&self, id: FragmentId) -> Option<FragmentId> {
        let next = id.next();
        self.contains(next).then_some(next)
    }

    /// Fragments, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    /// Sum of live bytes over all fragments
    pub fn len_bytes(&self) -> usize {
        self.len_bytes
    }

    /// Number of linked fragments
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// True when no fragment is linked
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Free every fragment. Ids keep counting so stale handles stay stale.
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.head_id = self.next_id;
        self.len_bytes = 0;
    }
}

impl Default for FragmentQueue {
    fn default() -> Self {
        Self::new()
    }
}
