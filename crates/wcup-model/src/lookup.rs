//! Case-insensitive column-name lookup.
//!
//! Source headers vary in casing and padding between dataset exports; the
//! normalizers resolve required columns through this set so the frame keeps
//! its verbatim header text.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let key = normalize_key(name);
            map.entry(key).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    /// Returns the stored (verbatim) name matching `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&normalize_key(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&normalize_key(name))
    }
}

/// Uppercase and collapse interior whitespace so "Home  Team Name" and
/// "home team name" resolve to the same column.
fn normalize_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for part in name.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(&part.to_ascii_uppercase());
    }
    key
}
