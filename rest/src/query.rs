use url::form_urlencoded::Serializer;

/// Builds a query string, skipping absent values. Keys appear in the order they are pushed.
pub struct Query {
    serializer: Serializer<'static, String>,
    len: usize,
}

impl Query {
    pub fn new() -> Query {
        Query {
            serializer: Serializer::new(String::new()),
            len: 0,
        }
    }

    pub fn push<V: ToString>(mut self, key: &str, value: Option<V>) -> Query {
        if let Some(value) = value {
            self.serializer.append_pair(key, &value.to_string());
            self.len += 1;
        }

        self
    }

    /// Comma joined, omitted when empty.
    pub fn push_list<V: ToString>(self, key: &str, values: &[V]) -> Query {
        if values.is_empty() {
            return self;
        }

        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.push(key, Some(joined))
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn finish(mut self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.serializer.finish())
        }
    }

    pub fn apply(self, endpoint: String) -> String {
        match self.finish() {
            Some(query) => format!("{}?{}", endpoint, query),
            None => endpoint,
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Snowflake;

    #[test]
    fn test_only_present_values() {
        let query = Query::new()
            .push("before", None::<Snowflake>)
            .push("limit", Some(2))
            .push("with_counts", Some(true))
            .push("after", Some(Snowflake(5)));

        assert_eq!(query.apply("/x".to_owned()), "/x?limit=2&with_counts=true&after=5");
    }

    #[test]
    fn test_empty() {
        let query = Query::new().push("limit", None::<u8>).push_list::<Snowflake>("sku_ids", &[]);
        assert!(query.is_empty());
        assert_eq!(query.apply("/x".to_owned()), "/x");
    }

    #[test]
    fn test_list() {
        let query = Query::new().push_list("sku_ids", &[Snowflake(1), Snowflake(2)]);
        assert_eq!(query.finish().unwrap(), "sku_ids=1%2C2");
    }
}
