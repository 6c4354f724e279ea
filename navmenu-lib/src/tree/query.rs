//! Field selectors and ordering for tree queries.

use std::cmp::Ordering;
use std::str::FromStr;

use serde_json::Value;

use crate::error::MenuError;
use crate::item::Item;

/// Item field addressed by a query.
///
/// Dynamic names are parsed with [`FromStr`]:
///
/// | name | field |
/// |------|-------|
/// | `id` | [`Field::Id`] |
/// | `parent` | [`Field::Parent`] |
/// | `title` | [`Field::Title`] |
/// | `nickname` | [`Field::Nickname`] |
/// | `active`, `is_active`, `isactive` | [`Field::Active`] |
/// | `attr:<name>` | [`Field::Attr`] |
/// | `data:<key>` | [`Field::Data`] |
///
/// # Example
///
/// ```
/// use navmenu_lib::Field;
///
/// let field: Field = "attr:class".parse().unwrap();
/// assert_eq!(field, Field::Attr("class".to_string()));
/// assert!("colour".parse::<Field>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Item id (number).
    Id,
    /// Parent id (number, or null for roots).
    Parent,
    /// Current title (string).
    Title,
    /// Frozen nickname (string).
    Nickname,
    /// Activation flag (bool).
    Active,
    /// A render attribute (string, or null when absent).
    Attr(String),
    /// A metadata value (any, or null when absent).
    Data(String),
}

impl Field {
    /// Reads the field of `item` as a JSON value.
    pub fn value_of(&self, item: &Item) -> Value {
        match self {
            Self::Id => Value::from(item.id().get()),
            Self::Parent => item.parent().map(|parent| Value::from(parent.get())).unwrap_or(Value::Null),
            Self::Title => Value::from(item.title()),
            Self::Nickname => Value::from(item.nickname()),
            Self::Active => Value::from(item.is_active()),
            Self::Attr(name) => item.attr(name).map(Value::from).unwrap_or(Value::Null),
            Self::Data(key) => item.data(key).cloned().unwrap_or(Value::Null),
        }
    }

    /// Returns `true` when the field of `item` equals `value`.
    pub fn matches(&self, item: &Item, value: &Value) -> bool {
        loosely_equal(&self.value_of(item), value)
    }
}

impl FromStr for Field {
    type Err = MenuError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some(attr) = name.strip_prefix("attr:") {
            return Ok(Self::Attr(attr.to_string()));
        }
        if let Some(key) = name.strip_prefix("data:") {
            return Ok(Self::Data(key.to_lowercase()));
        }
        match name.to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "parent" => Ok(Self::Parent),
            "title" => Ok(Self::Title),
            "nickname" => Ok(Self::Nickname),
            "active" | "is_active" | "isactive" => Ok(Self::Active),
            _ => Err(MenuError::UnknownAttribute(name.to_string())),
        }
    }
}

/// Sort direction for [`Tree::sort_by`](super::Tree::sort_by).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl FromStr for Direction {
    type Err = MenuError;

    fn from_str(direction: &str) -> Result<Self, Self::Err> {
        match direction.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(MenuError::UnknownAttribute(direction.to_string())),
        }
    }
}

/// Equality with numeric tolerance: `1` equals `1.0` and `"1"`.
pub(crate) fn loosely_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.as_f64() == r.as_f64(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            s.parse::<f64>().ok() == n.as_f64()
        }
        _ => left == right,
    }
}

/// Orders two field values; values of different kinds compare equal.
pub(crate) fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l
            .as_f64()
            .partial_cmp(&r.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(l), Value::String(r)) => l.cmp(r),
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structural_and_prefixed_fields() {
        assert_eq!("id".parse::<Field>().unwrap(), Field::Id);
        assert_eq!("Title".parse::<Field>().unwrap(), Field::Title);
        assert_eq!("isActive".parse::<Field>().unwrap(), Field::Active);
        assert_eq!("data:Icon".parse::<Field>().unwrap(), Field::Data("icon".to_string()));
    }

    #[test]
    fn unknown_field_is_an_error() {
        let err = "colour".parse::<Field>().unwrap_err();
        assert!(matches!(err, MenuError::UnknownAttribute(ref name) if name == "colour"));
    }

    #[test]
    fn numbers_compare_loosely() {
        assert!(loosely_equal(&Value::from(1), &Value::from(1.0)));
        assert!(loosely_equal(&Value::from(2), &Value::from("2")));
        assert!(!loosely_equal(&Value::from(2), &Value::from("two")));
    }

    #[test]
    fn null_sorts_first() {
        assert_eq!(compare_values(&Value::Null, &Value::from("a")), Ordering::Less);
        assert_eq!(compare_values(&Value::from("b"), &Value::from("a")), Ordering::Greater);
    }
}
