// ============================================================================
// Shortly Core - Link Service
// File: crates/shortly-core/src/services/link_service.rs
// ============================================================================
//! Link directory: create-if-absent, owner listing, public slug resolution.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shortly_shared::constants::MAX_LINKS_PER_PAGE;

use crate::domain::link::{is_valid_destination, is_valid_slug};
use crate::domain::Link;
use crate::error::DomainError;
use crate::repositories::LinkRepository;

pub struct LinkService<L: LinkRepository> {
    links: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    pub fn new(links: Arc<L>) -> Self {
        Self { links }
    }

    /// Create a slug -> destination mapping owned by `owner`. Duplicate slugs
    /// are rejected by the storage-layer unique constraint; a failed create
    /// leaves no partial state.
    pub async fn create_link(
        &self,
        owner: Uuid,
        slug: &str,
        destination_url: &str,
    ) -> Result<Link, DomainError> {
        if !is_valid_slug(slug) {
            return Err(DomainError::Validation(
                "Slug must be 3-40 characters of letters, digits, '-' or '_'".to_string(),
            ));
        }
        if !is_valid_destination(destination_url) {
            return Err(DomainError::Validation(
                "Destination must be an absolute http(s) URL".to_string(),
            ));
        }

        let link = Link::new(owner, slug.to_string(), destination_url.to_string());
        let created = self.links.create(&link).await?;
        info!("Created link {} -> {}", created.slug, created.destination_url);
        Ok(created)
    }

    /// Links owned by `owner`, newest first, capped at 200. Each call is a
    /// fresh query; there is no cursor to resume from.
    pub async fn list_links(&self, owner: Uuid) -> Result<Vec<Link>, DomainError> {
        self.links.list_by_owner(&owner, MAX_LINKS_PER_PAGE).await
    }

    /// Public, unauthenticated slug lookup. None means "no mapping"; the
    /// caller falls back to the site root rather than erroring.
    pub async fn resolve(&self, slug: &str) -> Result<Option<String>, DomainError> {
        self.links.resolve(slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Links {}

        #[async_trait::async_trait]
        impl LinkRepository for Links {
            async fn create(&self, link: &Link) -> Result<Link, DomainError>;
            async fn list_by_owner(&self, owner: &Uuid, limit: i64) -> Result<Vec<Link>, DomainError>;
            async fn resolve(&self, slug: &str) -> Result<Option<String>, DomainError>;
        }
    }

    fn service(links: MockLinks) -> LinkService<MockLinks> {
        LinkService::new(Arc::new(links))
    }

    #[tokio::test]
    async fn test_two_char_slug_fails_validation() {
        // No expectations: validation failures never reach storage.
        let svc = service(MockLinks::new());
        let err = svc
            .create_link(Uuid::new_v4(), "ab", "https://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_five_char_slug_succeeds() {
        let mut links = MockLinks::new();
        links
            .expect_create()
            .withf(|link| link.slug == "a-b_9")
            .returning(|link| Ok(link.clone()));

        let svc = service(links);
        let link = svc
            .create_link(Uuid::new_v4(), "a-b_9", "https://example.com")
            .await
            .unwrap();
        assert_eq!(link.slug, "a-b_9");
    }

    #[tokio::test]
    async fn test_non_http_destination_fails_validation() {
        let svc = service(MockLinks::new());
        let err = svc
            .create_link(Uuid::new_v4(), "mylink", "ftp://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_slug_surfaces_slug_taken() {
        let mut links = MockLinks::new();
        links
            .expect_create()
            .returning(|link| Err(DomainError::SlugTaken(link.slug.clone())));

        let svc = service(links);
        let err = svc
            .create_link(Uuid::new_v4(), "taken", "https://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlugTaken(_)));
    }

    #[tokio::test]
    async fn test_listing_is_capped_at_200() {
        let owner = Uuid::new_v4();
        let mut links = MockLinks::new();
        links
            .expect_list_by_owner()
            .withf(move |id, limit| *id == owner && *limit == 200)
            .returning(|_, _| Ok(Vec::new()));

        let svc = service(links);
        assert!(svc.list_links(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_slug_resolves_to_none() {
        let mut links = MockLinks::new();
        links.expect_resolve().returning(|_| Ok(None));

        let svc = service(links);
        assert!(svc.resolve("never-created").await.unwrap().is_none());
    }
}
