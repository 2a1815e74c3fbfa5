// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Stores that can carry their own reviews client id.
///
/// Any other store code is served by [`Store::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Store {
    /// The default store, and every store without an override.
    Default,
    /// `GB`
    Gb,
    /// `DE`
    De,
    /// `ES`
    Es,
}

impl Store {
    /// Parse a store code, ignoring case.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(code) if code.eq_ignore_ascii_case("gb") => Store::Gb,
            Some(code) if code.eq_ignore_ascii_case("de") => Store::De,
            Some(code) if code.eq_ignore_ascii_case("es") => Store::Es,
            _ => Store::Default,
        }
    }
}

/// Reviews client ids per store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreClientIds {
    /// Client id used when a store has no override.
    pub default: String,
    /// Override for `GB`.
    pub gb: Option<String>,
    /// Override for `DE`.
    pub de: Option<String>,
    /// Override for `ES`.
    pub es: Option<String>,
}

impl StoreClientIds {
    /// Create client ids with only a default.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            ..Default::default()
        }
    }

    /// Client id for `store`.
    ///
    /// A missing or empty override falls back to the default.
    pub fn get(&self, store: Store) -> &str {
        let id = match store {
            Store::Default => None,
            Store::Gb => self.gb.as_deref(),
            Store::De => self.de.as_deref(),
            Store::Es => self.es.as_deref(),
        };

        id.filter(|v| !v.is_empty()).unwrap_or(&self.default)
    }

    /// Client id for a raw store code.
    pub fn resolve(&self, store_code: Option<&str>) -> &str {
        self.get(Store::from_code(store_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ids() -> StoreClientIds {
        StoreClientIds {
            default: "default-id".to_string(),
            gb: Some("gb-id".to_string()),
            de: Some("de-id".to_string()),
            es: None,
        }
    }

    #[test_case(None, "default-id"; "absent")]
    #[test_case(Some("gb"), "gb-id"; "lowercase")]
    #[test_case(Some("GB"), "gb-id"; "uppercase")]
    #[test_case(Some("De"), "de-id"; "mixed case")]
    #[test_case(Some("ES"), "default-id"; "override not configured")]
    #[test_case(Some("FR"), "default-id"; "unknown store")]
    #[test_case(Some(""), "default-id"; "empty code")]
    fn test_resolve(code: Option<&str>, expected: &str) {
        assert_eq!(ids().resolve(code), expected);
    }

    #[test]
    fn test_empty_override_falls_back() {
        let ids = StoreClientIds {
            gb: Some(String::new()),
            ..StoreClientIds::new("default-id")
        };
        assert_eq!(ids.get(Store::Gb), "default-id");
    }
}
