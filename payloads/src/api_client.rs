use crate::{
    BeerFilter, BeerId, BeerOrderFilter, BeerOrderId, CustomerFilter, CustomerId,
    OrderStatus, PageFilter, requests, responses,
};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.patch(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_patch(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.patch(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Beer endpoints
impl APIClient {
    pub async fn list_beers(
        &self,
        filter: &BeerFilter,
    ) -> Result<responses::Page<responses::Beer>, ClientError> {
        let response = self.get("beers", &filter.query_params()).await?;
        ok_body(response).await
    }

    pub async fn get_beer(
        &self,
        beer_id: BeerId,
    ) -> Result<responses::Beer, ClientError> {
        let response = self.empty_get(&format!("beers/{beer_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_beer(
        &self,
        beer: &requests::NewBeer,
    ) -> Result<responses::Beer, ClientError> {
        let response = self.post("beers", beer).await?;
        ok_body(response).await
    }

    pub async fn update_beer(
        &self,
        beer_id: BeerId,
        beer: &requests::NewBeer,
    ) -> Result<responses::Beer, ClientError> {
        let response = self.put(&format!("beers/{beer_id}"), beer).await?;
        ok_body(response).await
    }

    pub async fn patch_beer(
        &self,
        beer_id: BeerId,
        patch: &requests::BeerPatch,
    ) -> Result<responses::Beer, ClientError> {
        let response = self.patch(&format!("beers/{beer_id}"), patch).await?;
        ok_body(response).await
    }

    pub async fn delete_beer(&self, beer_id: BeerId) -> Result<(), ClientError> {
        let response = self.delete(&format!("beers/{beer_id}")).await?;
        ok_empty(response).await
    }
}

/// Customer endpoints
impl APIClient {
    pub async fn list_customers(
        &self,
        filter: &CustomerFilter,
    ) -> Result<responses::Page<responses::Customer>, ClientError> {
        let response = self.get("customers", &filter.query_params()).await?;
        ok_body(response).await
    }

    pub async fn get_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<responses::Customer, ClientError> {
        let response = self.empty_get(&format!("customers/{customer_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_customer(
        &self,
        customer: &requests::NewCustomer,
    ) -> Result<responses::Customer, ClientError> {
        let response = self.post("customers", customer).await?;
        ok_body(response).await
    }

    pub async fn update_customer(
        &self,
        customer_id: CustomerId,
        customer: &requests::NewCustomer,
    ) -> Result<responses::Customer, ClientError> {
        let response = self
            .put(&format!("customers/{customer_id}"), customer)
            .await?;
        ok_body(response).await
    }

    pub async fn patch_customer(
        &self,
        customer_id: CustomerId,
        patch: &requests::CustomerPatch,
    ) -> Result<responses::Customer, ClientError> {
        let response = self
            .patch(&format!("customers/{customer_id}"), patch)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("customers/{customer_id}")).await?;
        ok_empty(response).await
    }
}

/// Beer order endpoints
impl APIClient {
    pub async fn list_beer_orders(
        &self,
        filter: &BeerOrderFilter,
    ) -> Result<responses::Page<responses::BeerOrder>, ClientError> {
        let response = self.get("beer-orders", &filter.query_params()).await?;
        ok_body(response).await
    }

    pub async fn get_beer_order(
        &self,
        order_id: BeerOrderId,
    ) -> Result<responses::BeerOrder, ClientError> {
        let response = self.empty_get(&format!("beer-orders/{order_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_beer_order(
        &self,
        order: &requests::CreateBeerOrder,
    ) -> Result<responses::BeerOrder, ClientError> {
        let response = self.post("beer-orders", order).await?;
        ok_body(response).await
    }

    pub async fn update_beer_order(
        &self,
        order_id: BeerOrderId,
        update: &requests::BeerOrderUpdate,
    ) -> Result<responses::BeerOrder, ClientError> {
        let response = self
            .put(&format!("beer-orders/{order_id}"), update)
            .await?;
        ok_body(response).await
    }

    /// Request a status transition; the backend decides whether it is legal.
    pub async fn update_beer_order_status(
        &self,
        order_id: BeerOrderId,
        order_status: OrderStatus,
    ) -> Result<responses::BeerOrder, ClientError> {
        let response = self
            .patch(
                &format!("beer-orders/{order_id}/status"),
                &requests::OrderStatusUpdate { order_status },
            )
            .await?;
        ok_body(response).await
    }

    pub async fn cancel_beer_order(
        &self,
        order_id: BeerOrderId,
    ) -> Result<responses::BeerOrder, ClientError> {
        let response = self
            .empty_patch(&format!("beer-orders/{order_id}/cancel"))
            .await?;
        ok_body(response).await
    }

    pub async fn delete_beer_order(
        &self,
        order_id: BeerOrderId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("beer-orders/{order_id}")).await?;
        ok_empty(response).await
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
