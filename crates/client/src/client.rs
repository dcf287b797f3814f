//! Products HTTP client.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    errors::ClientError,
    forms::ProductForm,
    models::{ErrorBody, Product},
};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// HTTP client for the `/api/products` resource.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    base_url: String,
    http: Client,
}

impl ProductsClient {
    /// Create a client for the API served at `base_url`, e.g.
    /// `"http://localhost:4000"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { base_url, http }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn product_url(&self, id: i64) -> String {
        format!("{}/api/products/{id}", self.base_url)
    }

    /// Create a product from form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid, the request fails, or the
    /// response is not a product.
    pub async fn add_product(&self, form: &ProductForm) -> Result<Product, ClientError> {
        let draft = form.to_draft()?;

        self.send(self.http.post(self.products_url()).json(&draft))
            .await
    }

    /// Fetch every product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a product list.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.send(self.http.get(self.products_url())).await
    }

    /// Fetch product `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a product.
    pub async fn get_product(&self, id: i64) -> Result<Product, ClientError> {
        self.send(self.http.get(self.product_url(id))).await
    }

    /// Replace product `id` with form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid, the request fails, or the
    /// response is not a product.
    pub async fn update_product(
        &self,
        id: i64,
        form: &ProductForm,
    ) -> Result<Product, ClientError> {
        let product = form.to_product(id)?;

        self.send(self.http.put(self.product_url(id)).json(&product))
            .await
    }

    /// Flip the availability of product `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a product.
    pub async fn update_availability(&self, id: i64) -> Result<Product, ClientError> {
        self.send(self.http.patch(self.product_url(id))).await
    }

    /// Delete product `id`, returning the server's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a message.
    pub async fn delete_product(&self, id: i64) -> Result<String, ClientError> {
        self.send(self.http.delete(self.product_url(id))).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;

        debug!(%url, %status, "products api responded");

        if !status.is_success() {
            let error = api_error(status, &body);

            warn!(%url, "products api request failed: {error}");

            return Err(error);
        }

        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(ClientError::InvalidResponse)
}

fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    let messages = serde_json::from_slice::<ErrorBody>(body)
        .unwrap_or_default()
        .into_messages();

    ClientError::Api { status, messages }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_product_envelope_ignoring_extra_fields() -> TestResult {
        let body = json!({
            "data": {
                "id": 1,
                "name": "Mouse",
                "price": 200.0,
                "availability": true,
                "created_at": "2026-01-01T00:00:00Z",
                "updated_at": "2026-01-01T00:00:00Z"
            }
        });

        let product: Product = decode(&serde_json::to_vec(&body)?)?;

        assert_eq!(
            product,
            Product {
                id: 1,
                name: "Mouse".to_string(),
                price: 200.0,
                availability: true,
            }
        );

        Ok(())
    }

    #[test]
    fn decodes_product_list() -> TestResult {
        let body = json!({ "data": [
            { "id": 1, "name": "Mouse", "price": 200, "availability": true },
            { "id": 2, "name": "Monitor", "price": 300, "availability": false }
        ]});

        let products: Vec<Product> = decode(&serde_json::to_vec(&body)?)?;

        assert_eq!(products.len(), 2);

        Ok(())
    }

    #[test]
    fn wrong_shape_is_invalid_response() -> TestResult {
        let body = serde_json::to_vec(&json!({ "data": { "id": "1", "name": "Mouse" } }))?;

        let result = decode::<Product>(&body);

        assert!(
            matches!(result, Err(ClientError::InvalidResponse(_))),
            "expected invalid response, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn api_error_collects_field_messages() -> TestResult {
        let body = serde_json::to_vec(&json!({ "errors": [
            { "type": "field", "msg": "El nombre del producto es obligatorio", "path": "name", "location": "body" },
            { "type": "field", "value": 0, "msg": "El valor de precio es inválido", "path": "price", "location": "body" }
        ]}))?;

        let error = api_error(StatusCode::BAD_REQUEST, &body);

        assert!(
            matches!(
                &error,
                ClientError::Api { status, messages }
                    if *status == StatusCode::BAD_REQUEST
                        && messages == &["El nombre del producto es obligatorio", "El valor de precio es inválido"]
            ),
            "unexpected error: {error:?}"
        );

        Ok(())
    }

    #[test]
    fn api_error_reads_single_message() -> TestResult {
        let body = serde_json::to_vec(
            &json!({ "error": "ID de producto inválido. El producto no existe" }),
        )?;

        let error = api_error(StatusCode::NOT_FOUND, &body);

        assert!(
            matches!(&error, ClientError::Api { messages, .. } if messages.len() == 1),
            "unexpected error: {error:?}"
        );

        Ok(())
    }

    #[test]
    fn api_error_tolerates_non_json_body() {
        let error = api_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");

        assert!(
            matches!(&error, ClientError::Api { messages, .. } if messages.is_empty()),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = ProductsClient::new("http://localhost:4000/");

        assert_eq!(client.product_url(3), "http://localhost:4000/api/products/3");
    }
}
