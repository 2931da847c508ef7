use crate::api::{ApiClient, ApiError, RegisterRequest, Session};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl Default for RegisterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        self.client.register(request).await
    }
}
