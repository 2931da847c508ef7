use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, RegisterRequest, Session},
};

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let url = self.url("/users/register").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        Self::parse_json(response).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let url = self.url("/users/login").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        Self::parse_json(response).await
    }
}
