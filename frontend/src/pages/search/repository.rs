use crate::api::{ApiClient, ApiError, Asset};
use std::rc::Rc;

#[derive(Clone)]
pub struct SearchRepository {
    client: Rc<ApiClient>,
}

impl SearchRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn search_assets(&self, term: &str) -> Result<Vec<Asset>, ApiError> {
        self.client.list_assets(Some(term)).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn search_sends_term_and_keeps_office_names() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/assets")
                    .query_param("search", "dell xps");
                then.status(200).json_body(json!([
                    {
                        "id": "a1",
                        "name": "Dell XPS",
                        "serial": "SN-1",
                        "inventory": "INV-1",
                        "status": "Active",
                        "office": { "id": "o1", "name": "Lima" }
                    }
                ]));
            })
            .await;

        let repo = SearchRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let results = repo.search_assets("dell xps").await.unwrap();
        mock.assert_async().await;
        assert_eq!(results[0].office.as_ref().map(|o| o.name.as_str()), Some("Lima"));
        assert_eq!(results[0].owning_office_id(), Some("o1"));
    }
}
