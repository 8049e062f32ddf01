//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use wowapi_domain::WowApiError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub WowApiError);

impl From<InfraError> for WowApiError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WowApiError> for InfraError {
    fn from(value: WowApiError) -> Self {
        InfraError(value)
    }
}

trait IntoWowApiError {
    fn into_wowapi(self) -> WowApiError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → WowApiError */
/* -------------------------------------------------------------------------- */

impl IntoWowApiError for HttpError {
    fn into_wowapi(self) -> WowApiError {
        if self.is_timeout() {
            return WowApiError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return WowApiError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let url = self.url().map(|u| without_query(u.as_str())).unwrap_or_default();
            return WowApiError::Http { status: status.as_u16(), url };
        }

        if self.is_builder() {
            return WowApiError::Internal(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return WowApiError::Network(format!("failed to read HTTP response body: {self}"));
        }

        WowApiError::Network(self.without_url().to_string())
    }
}

/// Query strings may carry an access token.
fn without_query(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_string()
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_wowapi())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_maps_to_http_error_without_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let url = format!("{}/data/wow/token/index?access_token=secret", server.uri());
        let error = client.get(&url).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: WowApiError = InfraError::from(error).into();
        match mapped {
            WowApiError::Http { status, url } => {
                assert_eq!(status, 401);
                assert!(url.ends_with("/data/wow/token/index"));
                assert!(!url.contains("secret"));
            }
            other => panic!("expected http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: WowApiError = InfraError::from(error).into();
        assert!(matches!(mapped, WowApiError::Network(_)), "got {mapped:?}");
        assert!(mapped.is_retryable());
    }

    #[test]
    fn strips_query_strings() {
        assert_eq!(without_query("https://h/p?access_token=t"), "https://h/p");
        assert_eq!(without_query("https://h/p"), "https://h/p");
    }
}
