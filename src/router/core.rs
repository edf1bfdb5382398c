use crate::model::UserId;

/// Result of classifying a request path against the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatch {
    /// `/users` with zero or more trailing slashes.
    Collection,
    /// `/users/{id}` with a well-formed id.
    Item(UserId),
    /// Under `/users` but the remainder is not a single decimal id.
    /// Carries the offending remainder for error messages.
    InvalidId(String),
    /// The first segment is not the resource name.
    Foreign,
}

impl PathMatch {
    pub fn is_resource(&self) -> bool {
        !matches!(self, PathMatch::Foreign)
    }
}

/// Classifies paths for a single named resource.
#[derive(Debug, Clone)]
pub struct ResourceRouter {
    resource: String,
}

impl ResourceRouter {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }

    pub fn classify(&self, path: &str) -> PathMatch {
        let path = strip_query(path);
        let Some(rest) = path.strip_prefix('/') else {
            return PathMatch::Foreign;
        };

        let mut segments = rest.split('/');
        if segments.next() != Some(self.resource.as_str()) {
            return PathMatch::Foreign;
        }

        let remainder: Vec<&str> = segments.collect();
        if remainder.iter().all(|s| s.is_empty()) {
            return PathMatch::Collection;
        }

        match remainder.as_slice() {
            [id] if is_decimal(id) => match id.parse::<UserId>() {
                Ok(id) => PathMatch::Item(id),
                Err(_) => PathMatch::InvalidId((*id).to_string()),
            },
            _ => PathMatch::InvalidId(remainder.join("/")),
        }
    }
}

impl Default for ResourceRouter {
    fn default() -> Self {
        Self::new("users")
    }
}

/// Path without its `?query` part.
pub fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(p, _)| p)
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
