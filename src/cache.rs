use indexmap::IndexMap;

/// Header values that depend only on configuration, computed once when a
/// policy is built and never written again.
///
/// Entries keep insertion order and empty values are never stored, so a
/// lookup miss means "omit this header".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecomputedHeaders {
    values: IndexMap<&'static str, String>,
}

impl PrecomputedHeaders {
    pub(crate) fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<String>)>,
    {
        let values = entries
            .into_iter()
            .filter_map(|(name, value)| match value {
                Some(value) if !value.is_empty() => Some((name, value)),
                _ => None,
            })
            .collect();

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;
