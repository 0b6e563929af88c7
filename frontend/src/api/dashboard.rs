use super::{
    client::ApiClient,
    types::{ApiError, DashboardSnapshot, TilesQuery},
};

impl ApiClient {
    /// One outbound call per user-triggered refresh. Carries the full
    /// current filter state; the response replaces the previous snapshot.
    pub async fn get_tiles_data(&self, query: &TilesQuery) -> Result<DashboardSnapshot, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}/dashboard/tiles", base_url);

        let response = self
            .http()
            .get(&url)
            .query(&query.to_params())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse error: {}", e)))?;
            Err(error)
        }
    }
}
