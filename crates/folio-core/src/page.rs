//! Paginated list envelope and pagination bookkeeping.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A page of results as returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    /// Zero-based index of this page.
    pub number: u32,
    pub total_elements: u64,
}

impl<T> Default for PageEnvelope<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 1,
            number: 0,
            total_elements: 0,
        }
    }
}

impl PageEnvelope<Value> {
    /// Read an envelope from raw JSON, defaulting every missing field.
    ///
    /// A bare JSON array is accepted as a single page.
    pub fn from_value(value: &Value) -> Self {
        if let Value::Array(items) = value {
            return Self {
                total_elements: items.len() as u64,
                content: items.clone(),
                ..Self::default()
            };
        }

        let content = value
            .get("content")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Self {
            content,
            total_pages: read_u32(value, "totalPages").unwrap_or(1),
            number: read_u32(value, "number").unwrap_or(0),
            total_elements: read_u64(value, "totalElements").unwrap_or(0),
        }
    }
}

fn read_u64(value: &Value, key: &str) -> Option<u64> {
    value.get(key).and_then(Value::as_u64)
}

/// Out-of-range counts clamp to `u32::MAX`.
fn read_u32(value: &Value, key: &str) -> Option<u32> {
    read_u64(value, key).map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

impl<T> PageEnvelope<T> {
    /// Convert every item, keeping the pagination fields.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageEnvelope<U> {
        PageEnvelope {
            content: self.content.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            number: self.number,
            total_elements: self.total_elements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.number.saturating_add(1))
    }

    /// One-based position label, e.g. "Page 2 of 5".
    pub fn label(&self) -> String {
        format!("Page {} of {}", u64::from(self.number) + 1, self.total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let page = PageEnvelope::from_value(&json!({}));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.number, 0);
        assert_eq!(page.total_elements, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_navigation() {
        let page = PageEnvelope::from_value(&json!({
            "content": [{"id": 1}, {"id": 2}],
            "totalPages": 3,
            "number": 1,
            "totalElements": 23
        }));
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.previous_page(), Some(0));
        assert_eq!(page.next_page(), Some(2));
        assert_eq!(page.label(), "Page 2 of 3");
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = PageEnvelope::from_value(&json!({"content": [], "totalPages": 3, "number": 2}));
        assert_eq!(page.next_page(), None);
        assert_eq!(page.previous_page(), Some(1));
    }

    #[test]
    fn test_bare_array() {
        let page = PageEnvelope::from_value(&json!([1, 2, 3]));
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_map_keeps_pagination() {
        let page = PageEnvelope::from_value(&json!({
            "content": [1, 2],
            "totalPages": 4,
            "number": 3,
            "totalElements": 32
        }))
        .map(|v| v.as_i64().unwrap_or_default() * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.number, 3);
    }

    #[test]
    fn test_oversized_counts_clamp_without_overflow() {
        let page = PageEnvelope::from_value(&json!({
            "content": [],
            "totalPages": 4_294_967_296u64,
            "number": 4_294_967_295u64
        }));
        assert_eq!(page.total_pages, u32::MAX);
        assert_eq!(page.number, u32::MAX);
        assert!(!page.has_next());
        assert_eq!(page.next_page(), None);
        assert_eq!(page.label(), "Page 4294967296 of 4294967295");
    }
}
