//! The grob collector: an append-only drawable buffer for one render pass.
//!
//! Appends are amortized O(1). The buffer keeps its own capacity and doubles
//! it whenever it runs full, so the growth policy is independent of the
//! allocator. `finalize` moves the items into a freshly allocated,
//! exactly-sized list and releases the growable buffer; the finalized list
//! never carries spare slots.
//!
//! Allocation failures are reported instead of aborting, and leave the
//! collector exactly as it was before the failing call.

use crate::drawable::Drawable;
use crate::error::RenderError;
use log::{debug, trace};
use serde::Serialize;
use std::ops::Index;

pub const DEFAULT_INITIAL_CAPACITY: usize = 5;

/// Collection-kind marker carried by every finalized list.
pub const DRAWABLE_LIST_KIND: &str = "drawable-list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectorState {
    Building,
    Finalized,
}

#[derive(Debug)]
pub struct GrobCollector {
    items: Vec<Drawable>,
    capacity: usize,
    state: CollectorState,
}

fn reserve_exact(items: &mut Vec<Drawable>, total: usize) -> Result<(), RenderError> {
    let additional = total.saturating_sub(items.len());
    items
        .try_reserve_exact(additional)
        .map_err(|_| RenderError::AllocationFailure { requested: total })
}

impl GrobCollector {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, RenderError> {
        let mut items = Vec::new();
        reserve_exact(&mut items, capacity)?;
        Ok(Self {
            items,
            capacity,
            state: CollectorState::Building,
        })
    }

    /// Number of drawables appended so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots currently reserved. Zero once finalized.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_finalized(&self) -> bool {
        self.state == CollectorState::Finalized
    }

    fn ensure_building(&self, operation: &'static str) -> Result<(), RenderError> {
        match self.state {
            CollectorState::Building => Ok(()),
            CollectorState::Finalized => Err(RenderError::UseAfterFinalize { operation }),
        }
    }

    fn grow(&mut self) -> Result<(), RenderError> {
        let new_capacity = self
            .capacity
            .checked_mul(2)
            .ok_or(RenderError::AllocationFailure {
                requested: usize::MAX,
            })?
            .max(1);
        reserve_exact(&mut self.items, new_capacity)?;
        debug!(
            "Growing drawable buffer from {} to {} slots",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    pub fn append(&mut self, drawable: Drawable) -> Result<(), RenderError> {
        self.ensure_building("append")?;
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(drawable);
        Ok(())
    }

    /// Hands the collected drawables over as an exactly-sized list.
    ///
    /// The collector is spent afterwards: any further `append` or `finalize`
    /// fails with `UseAfterFinalize`.
    pub fn finalize(&mut self) -> Result<DrawableList, RenderError> {
        self.ensure_building("finalize")?;

        let mut items = Vec::new();
        reserve_exact(&mut items, self.items.len())?;
        items.append(&mut self.items);

        // Release the growable buffer.
        self.items = Vec::new();
        self.capacity = 0;
        self.state = CollectorState::Finalized;

        trace!("Finalized drawable list with {} items", items.len());
        Ok(DrawableList {
            kind: DRAWABLE_LIST_KIND,
            items: items.into_boxed_slice(),
        })
    }

    /// Consuming form of [`GrobCollector::finalize`].
    pub fn into_drawable_list(mut self) -> Result<DrawableList, RenderError> {
        self.finalize()
    }
}

/// The immutable result of a render pass, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawableList {
    kind: &'static str,
    items: Box<[Drawable]>,
}

impl DrawableList {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Drawable> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Drawable> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Drawable] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Drawable> {
        self.items.into_vec()
    }
}

impl Index<usize> for DrawableList {
    type Output = Drawable;

    fn index(&self, index: usize) -> &Drawable {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a DrawableList {
    type Item = &'a Drawable;
    type IntoIter = std::slice::Iter<'a, Drawable>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for DrawableList {
    type Item = Drawable;
    type IntoIter = std::vec::IntoIter<Drawable>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}
