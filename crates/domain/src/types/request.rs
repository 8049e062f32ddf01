//! Outgoing request description
//!
//! An [`ApiRequest`] is a plain value: the transport turns it into a real
//! HTTP call and the request gate may send it several times.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, WowApiError};
use crate::impl_domain_name_conversions;

/// HTTP methods the client knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl_domain_name_conversions!(HttpMethod {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Delete => "DELETE",
});

impl HttpMethod {
    /// Parse a method name, ignoring case.
    ///
    /// # Errors
    /// [`WowApiError::UnsupportedMethod`] listing the supported methods.
    pub fn parse(method: &str) -> Result<Self> {
        Self::from_name(method).ok_or_else(|| WowApiError::UnsupportedMethod {
            method: method.to_string(),
            supported: Self::names(),
        })
    }
}

impl FromStr for HttpMethod {
    type Err = WowApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// HTTP Basic credentials. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One logical HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// `application/x-www-form-urlencoded` body fields; empty means no body.
    pub form: Vec<(String, String)>,
    pub basic_auth: Option<BasicCredentials>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            form: Vec::new(),
            basic_auth: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Append a query parameter, replacing an existing one with the same key.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_basic_auth(mut self, credentials: BasicCredentials) -> Self {
        self.basic_auth = Some(credentials);
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_supported_methods_in_any_case() {
        assert_eq!(HttpMethod::parse("get").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("Post").unwrap(), HttpMethod::Post);
        assert_eq!("PUT".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert_eq!(HttpMethod::parse("delete").unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn parse_rejects_other_methods() {
        let err = HttpMethod::parse("PATCH").unwrap_err();
        assert_eq!(
            err,
            WowApiError::UnsupportedMethod {
                method: "PATCH".into(),
                supported: vec!["GET", "POST", "PUT", "DELETE"],
            }
        );
    }

    #[test]
    fn parse_rejects_padded_method_names() {
        for padded in [" get ", "GET\n", "\tpost"] {
            let err = HttpMethod::parse(padded).unwrap_err();
            assert!(
                matches!(err, WowApiError::UnsupportedMethod { ref method, .. } if method == padded),
                "{padded:?}: {err:?}"
            );
        }
    }

    #[test]
    fn with_query_replaces_existing_keys() {
        let request = ApiRequest::get("https://example.test/a")
            .with_query("locale", "en_US")
            .with_query("namespace", "static-us")
            .with_query("locale", "es_MX");

        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query_value("locale"), Some("es_MX"));
        assert_eq!(request.query_value("namespace"), Some("static-us"));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = BasicCredentials::new("client", "hunter2");
        let printed = format!("{creds:?}");
        assert!(printed.contains("client"));
        assert!(!printed.contains("hunter2"));
        assert_eq!(creds.password(), "hunter2");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let request = ApiRequest::get("u").with_header("Authorization", "Bearer t");
        assert_eq!(request.header_value("authorization"), Some("Bearer t"));
    }
}
