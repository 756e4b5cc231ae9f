use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use trivia_core::{CategoryId, FetchError, FetchResult, TriviaSource};
use trivia_protocol::{CategoryDetail, CategorySummary};

pub(crate) const DEFAULT_API_URL: &str = "https://jservice.io/api";

/// [`TriviaSource`] backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if !response.ok() {
            log::warn!("GET {} answered {}", url, response.status());
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        trivia_protocol::decode(&body).map_err(|err| FetchError::Malformed(err.to_string()))
    }
}

impl TriviaSource for HttpSource {
    async fn fetch_categories(&self, count: u32, offset: u32) -> FetchResult<Vec<CategorySummary>> {
        self.get_json(&trivia_protocol::categories_path(count, offset))
            .await
    }

    async fn fetch_category(&self, id: CategoryId) -> FetchResult<CategoryDetail> {
        self.get_json(&trivia_protocol::category_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_endpoint() {
        let source = HttpSource::new("https://trivia.example/api/");
        assert_eq!(
            source.url(&trivia_protocol::category_path(18)),
            "https://trivia.example/api/category?id=18"
        );

        let source = HttpSource::new(DEFAULT_API_URL);
        assert_eq!(
            source.url(&trivia_protocol::categories_path(100, 0)),
            "https://jservice.io/api/categories?count=100&offset=0"
        );
    }
}
