use crate::error::{ArrangeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounds in canvas units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Item kind. Only containers own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Plain,
    Container,
}

/// Host-assigned identity, stable across reordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The collection an item belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parent {
    Root,
    Container(ItemId),
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::Root => f.write_str("root"),
            Parent::Container(id) => write!(f, "container {id}"),
        }
    }
}

/// A positioned rectangle on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub bounds: Rect,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
}

impl Item {
    pub fn plain(id: impl Into<ItemId>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            bounds,
            kind: ItemKind::Plain,
            children: Vec::new(),
        }
    }

    pub fn container(id: impl Into<ItemId>, bounds: Rect, children: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            bounds,
            kind: ItemKind::Container,
            children,
        }
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        self.kind == ItemKind::Container
    }

    /// Checks geometry and kind of this item and everything below it.
    /// Zero-sized items are valid.
    pub fn validate(&self) -> Result<()> {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.bounds;

        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(self.invalid("geometry must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(self.invalid(format!(
                "width and height must be non-negative, got {width}x{height}"
            )));
        }
        if self.kind == ItemKind::Plain && !self.children.is_empty() {
            return Err(self.invalid("plain items cannot have children"));
        }

        self.children.iter().try_for_each(Item::validate)
    }

    fn invalid(&self, message: impl Into<String>) -> ArrangeError {
        ArrangeError::InvalidItem {
            id: self.id.clone(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bottom() {
        let r = Rect::new(10.0, 20.0, 30.0, 5.0);
        assert_eq!(r.bottom(), 25.0);
    }

    #[test]
    fn test_zero_sized_item_is_valid() {
        let item = Item::plain("dot", Rect::new(3.0, 4.0, 0.0, 0.0));
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let item = Item::plain("bad", Rect::new(0.0, 0.0, -1.0, 10.0));
        let err = item.validate().unwrap_err();
        assert!(matches!(err, ArrangeError::InvalidItem { ref id, .. } if id.as_str() == "bad"));
    }

    #[test]
    fn test_non_finite_geometry_is_rejected() {
        let item = Item::plain("nan", Rect::new(f64::NAN, 0.0, 1.0, 1.0));
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_plain_item_with_children_is_rejected() {
        let mut item = Item::plain("leaf", Rect::new(0.0, 0.0, 10.0, 10.0));
        item.children.push(Item::plain("child", Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_invalid_grandchild_is_reported() {
        let inner = Item::container(
            "inner",
            Rect::new(0.0, 0.0, 10.0, 10.0),
            vec![Item::plain("broken", Rect::new(0.0, 0.0, 1.0, -2.0))],
        );
        let outer = Item::container("outer", Rect::new(0.0, 0.0, 50.0, 50.0), vec![inner]);

        let err = outer.validate().unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_item_json_is_flat() {
        let json = r#"{"id":"a","x":1,"y":2,"width":3,"height":4}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "a");
        assert_eq!(item.bounds, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(item.kind, ItemKind::Plain);
        assert!(item.children.is_empty());

        let back = serde_json::to_value(&item).unwrap();
        assert!(back.get("children").is_none());
        assert_eq!(back["kind"], "plain");
    }

    #[test]
    fn test_parent_display() {
        assert_eq!(Parent::Root.to_string(), "root");
        assert_eq!(
            Parent::Container(ItemId::new("frame-1")).to_string(),
            "container frame-1"
        );
    }
}
