use super::{DrawCmd, ZIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub cmd: DrawCmd,
}

/// Draw commands kept in paint order (back to front).
///
/// Each push is inserted after every item with a lower or equal layer, so
/// the list never needs a separate sort pass.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let at = self.items.partition_point(|item| item.z <= z);
        self.items.insert(at, DrawItem { z, cmd });
    }

    /// Items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
