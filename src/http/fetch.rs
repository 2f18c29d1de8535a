use reqwest::Client;

use crate::constants::HTTP_OK;
use crate::types::FetchResult;

/// GET a page and return its body when the server answers 200.
/// Any other status, transport error or unreadable body yields `Unavailable`.
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(url, error = %err, "fetch failed");
            return FetchResult::Unavailable;
        }
    };

    let status = response.status();
    if status.as_u16() != HTTP_OK {
        tracing::debug!(url, status = status.as_u16(), "skipping non-200 response");
        return FetchResult::Unavailable;
    }

    match response.text().await {
        Ok(body) => FetchResult::Body(body),
        Err(err) => {
            tracing::debug!(url, error = %err, "failed to read response body");
            FetchResult::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Route, closed_port_url, start_server};

    #[tokio::test]
    async fn test_fetch_page_ok() {
        let base = start_server(vec![Route::ok("/", "<input name=\"q\">")]);
        let result = fetch_page(&Client::new(), &base).await;
        assert_eq!(result, FetchResult::Body("<input name=\"q\">".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let base = start_server(vec![]);
        let url = format!("{}missing", base);
        assert_eq!(
            fetch_page(&Client::new(), &url).await,
            FetchResult::Unavailable
        );
    }

    #[tokio::test]
    async fn test_fetch_page_non_200_success_is_unavailable() {
        let base = start_server(vec![Route::new("/created", 201, "<input name=\"x\">")]);
        let url = format!("{}created", base);
        assert_eq!(
            fetch_page(&Client::new(), &url).await,
            FetchResult::Unavailable
        );
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        let url = closed_port_url();
        assert_eq!(
            fetch_page(&Client::new(), &url).await,
            FetchResult::Unavailable
        );
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_url() {
        assert_eq!(
            fetch_page(&Client::new(), "not a url").await,
            FetchResult::Unavailable
        );
    }
}
