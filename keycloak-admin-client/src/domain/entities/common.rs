use serde::{Deserialize, Serialize};

/// Query-string parameters forwarded verbatim to the admin API.
///
/// Order is preserved and no names or values are validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.push((name.into(), value.to_string()));
    }

    /// Append every pair from `other`, keeping its order
    pub fn extend(&mut self, other: &QueryParams) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Options for a `lookup`: a specific resource key, or a filtered collection query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Component id or identity provider alias
    pub id: Option<String>,
    /// Ignored when `id` is set
    pub params: QueryParams,
}

impl FindOptions {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            params: QueryParams::new(),
        }
    }

    pub fn query(params: QueryParams) -> Self {
        Self { id: None, params }
    }
}

/// Result of a `lookup`, shaped by the URL variant that was queried
#[derive(Debug, Clone, PartialEq)]
pub enum Found<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Found<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Found::One(item) => vec![item],
            Found::Many(items) => items,
        }
    }

    pub fn one(self) -> Option<T> {
        match self {
            Found::One(item) => Some(item),
            Found::Many(_) => None,
        }
    }
}

/// Extract the created resource identifier from a `Location` header value.
///
/// The identifier is the final path segment; query and fragment parts are
/// ignored. Returns `None` when no non-empty segment exists.
pub fn resource_id_from_location(location: &str) -> Option<String> {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    let (_, last) = path.rsplit_once('/')?;
    if last.is_empty() {
        None
    } else {
        Some(last.to_string())
    }
}
