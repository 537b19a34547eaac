use super::types::{Item, ItemId, Parent};
use crate::error::{ArrangeError, Result};
use crate::host::{ItemSource, MutationSink};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Container not found: {0}")]
    ContainerNotFound(ItemId),

    #[error("Item {0} is not a container")]
    NotAContainer(ItemId),

    #[error("Item {item} is not a child of {parent}")]
    ItemNotFound { item: ItemId, parent: Parent },
}

/// In-memory page.
///
/// Every collection is kept in layer-list order, front-most first. The end of a
/// parent's paint stack is the front of that list, so `move_to_end` puts the item
/// at index 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub children: Vec<Item>,
}

impl Document {
    pub fn new(children: Vec<Item>) -> Self {
        Self { children }
    }

    /// Validates every item and rejects ids used more than once anywhere in the tree
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&Item> = self.children.iter().collect();
        while let Some(item) = stack.pop() {
            if !seen.insert(&item.id) {
                return Err(ArrangeError::DuplicateId(item.id.clone()));
            }
            stack.extend(item.children.iter());
        }

        self.children.iter().try_for_each(Item::validate)
    }

    /// Looks an item up at any depth
    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        find(&self.children, id)
    }

    pub fn collection(&self, parent: &Parent) -> std::result::Result<&[Item], DocumentError> {
        match parent {
            Parent::Root => Ok(&self.children),
            Parent::Container(id) => {
                let container = self
                    .find(id)
                    .ok_or_else(|| DocumentError::ContainerNotFound(id.clone()))?;
                if !container.is_container() {
                    return Err(DocumentError::NotAContainer(id.clone()));
                }
                Ok(&container.children)
            }
        }
    }

    /// Ids of `parent`'s children in layer-list order
    pub fn order(&self, parent: &Parent) -> std::result::Result<Vec<&ItemId>, DocumentError> {
        Ok(self.collection(parent)?.iter().map(|item| &item.id).collect())
    }

    fn collection_mut(
        &mut self,
        parent: &Parent,
    ) -> std::result::Result<&mut Vec<Item>, DocumentError> {
        match parent {
            Parent::Root => Ok(&mut self.children),
            Parent::Container(id) => {
                let container = find_mut(&mut self.children, id)
                    .ok_or_else(|| DocumentError::ContainerNotFound(id.clone()))?;
                if !container.is_container() {
                    return Err(DocumentError::NotAContainer(id.clone()));
                }
                Ok(&mut container.children)
            }
        }
    }
}

impl ItemSource for Document {
    fn root_items(&self) -> Vec<Item> {
        self.children.clone()
    }
}

impl MutationSink for Document {
    type Error = DocumentError;

    fn move_to_end(
        &mut self,
        item: &ItemId,
        parent: &Parent,
    ) -> std::result::Result<(), DocumentError> {
        let siblings = self.collection_mut(parent)?;
        let index = siblings
            .iter()
            .position(|child| &child.id == item)
            .ok_or_else(|| DocumentError::ItemNotFound {
                item: item.clone(),
                parent: parent.clone(),
            })?;

        let moved = siblings.remove(index);
        siblings.insert(0, moved);
        Ok(())
    }
}

fn find<'a>(items: &'a [Item], id: &ItemId) -> Option<&'a Item> {
    for item in items {
        if &item.id == id {
            return Some(item);
        }
        if let Some(found) = find(&item.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_mut<'a>(items: &'a mut [Item], id: &ItemId) -> Option<&'a mut Item> {
    for item in items.iter_mut() {
        if &item.id == id {
            return Some(item);
        }
        if let Some(found) = find_mut(&mut item.children, id) {
            return Some(found);
        }
    }
    None
}
