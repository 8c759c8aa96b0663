pub mod car;
pub mod customer;
pub mod health;

use serde::Deserialize;

/// Query parameters accepted by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    related: Option<String>,
}

impl ListQuery {
    /// The flag follows querystring truthiness: present with any non-empty
    /// value enables the related join, `?related=` alone does not.
    pub fn include_related(&self) -> bool {
        self.related.as_deref().is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_flag_requires_a_non_empty_value() {
        let absent = ListQuery { related: None };
        let empty = ListQuery {
            related: Some(String::new()),
        };
        let set = ListQuery {
            related: Some("true".to_string()),
        };
        assert!(!absent.include_related());
        assert!(!empty.include_related());
        assert!(set.include_related());
    }
}
