use std::fmt::Display;

/// A url path plus an ordered list of query parameters.
///
/// Parameters keep the order they were added in. A parameter whose value
/// is absent is skipped entirely when the url is rendered, so the output
/// never contains empty `key=` pairs. Values are concatenated as-is; callers
/// only pass identifiers and numbers.
#[derive(Debug, Clone)]
pub struct QueryUrl {
    path: String,
    params: Vec<(&'static str, Option<String>)>,
}

impl QueryUrl {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter that is always present.
    pub fn param(self, key: &'static str, value: impl Display) -> Self {
        self.opt_param(key, Some(value))
    }

    /// Add a parameter that is only emitted when `value` is `Some`.
    pub fn opt_param<V: Display>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.params.push((key, value.map(|v| v.to_string())));
        self
    }

    /// Render against `api_base`, e.g. `http://host/api` + `/image` + `?id=..`.
    pub fn render(&self, api_base: &str) -> String {
        let mut url = format!("{}{}", api_base.trim_end_matches('/'), self.path);
        let present = self
            .params
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v)));

        for (i, (key, value)) in present.enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}
