use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::{error::DomainError, post::Post};
use tracing::instrument;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts().await
    }
}
