//! Task Filters
//!
//! The status/priority/category selection narrowing the task list, its query
//! string encoding, and the removable chips shown above the list.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Category, Priority, TaskStatus};

/// RFC 3986 unreserved characters stay literal
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Filter set; every `None` field is omitted from the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub category_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Status,
    Priority,
    Category,
}

/// One active filter rendered as a removable tag
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub kind: FilterKind,
    pub label: String,
}

impl FilterChip {
    pub fn icon_class(&self) -> &'static str {
        match self.kind {
            FilterKind::Status => "fas fa-circle-check",
            FilterKind::Priority => "fas fa-exclamation",
            FilterKind::Category => "fas fa-tag",
        }
    }
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.category_id.is_none()
    }

    /// Same filter with one criterion dropped
    pub fn without(mut self, kind: FilterKind) -> Self {
        match kind {
            FilterKind::Status => self.status = None,
            FilterKind::Priority => self.priority = None,
            FilterKind::Category => self.category_id = None,
        }
        self
    }

    /// `status=..&priority=..&category_id=..&limit=..`, empty when nothing is set
    pub fn query_string(&self, limit: Option<u32>) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if let Some(id) = self.category_id {
            pairs.push(("category_id", id.to_string()));
        }
        if let Some(limit) = limit {
            pairs.push(("limit", limit.to_string()));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Chips for the active criteria, in status/priority/category order
    pub fn chips(&self, categories: &[Category]) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if let Some(status) = self.status {
            chips.push(FilterChip {
                kind: FilterKind::Status,
                label: format!("Status: {}", status.label()),
            });
        }
        if let Some(priority) = self.priority {
            chips.push(FilterChip {
                kind: FilterKind::Priority,
                label: format!("Priority: {}", priority.label()),
            });
        }
        if let Some(id) = self.category_id {
            let name = categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.as_str())
                .unwrap_or("Category");
            chips.push(FilterChip {
                kind: FilterKind::Category,
                label: format!("Category: {}", name),
            });
        }
        chips
    }
}
