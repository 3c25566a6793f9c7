use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    BreadcrumbItemDto, CategoryDetailDto, CategoryResponseDto, CategoryTreeDto,
};
use crate::features::categories::models::Category;
use crate::features::categories::stores::{CategoryStore, PgCategoryStore};
use crate::shared::constants::MAX_BREADCRUMB_DEPTH;

/// Service for category operations
///
/// The store is injected so the breadcrumb walk can be exercised against an
/// in-memory fake; production wiring goes through [`CategoryService::new`].
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgCategoryStore::new(pool)))
    }

    pub fn with_store(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List all active categories (flat list)
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_active().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// List all active categories as tree structure
    pub async fn list_tree(&self) -> Result<Vec<CategoryTreeDto>> {
        let categories = self.store.list_active().await?;
        Ok(CategoryTreeDto::build_tree(categories))
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        let category = self.store.find_by_slug(slug).await?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// Resolve the full category detail view: the category itself, its direct
    /// children in display order, and the root-first ancestor breadcrumb.
    ///
    /// Each ancestor level costs one point lookup; depth is small in practice
    /// so the sequential walk is preferred over a recursive join.
    pub async fn resolve(&self, category_id: i32) -> Result<CategoryDetailDto> {
        let category = self
            .store
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with id {} not found", category_id))
            })?;

        let children = self.store.find_children_by_parent_id(category_id).await?;

        let breadcrumb = self.build_breadcrumb(&category).await?;

        Ok(CategoryDetailDto::compose(category, children, breadcrumb))
    }

    /// Walk the parent chain upward, then reverse so the result is root-first
    /// and ends with the starting category.
    ///
    /// A dangling parent reference truncates the walk with a warning instead
    /// of failing the request. The depth guard protects against a cyclic
    /// chain, which the data model forbids but this code does not trust.
    async fn build_breadcrumb(&self, category: &Category) -> Result<Vec<BreadcrumbItemDto>> {
        let mut trail = vec![BreadcrumbItemDto::from(category)];
        let mut current_id = category.id;
        let mut next_parent = category.parent_id;

        while let Some(parent_id) = next_parent {
            if trail.len() >= MAX_BREADCRUMB_DEPTH {
                return Err(AppError::Internal(format!(
                    "Breadcrumb for category {} exceeded {} levels, parent chain may be cyclic",
                    category.id, MAX_BREADCRUMB_DEPTH
                )));
            }

            match self.store.find_by_id(parent_id).await? {
                Some(parent) => {
                    trail.push(BreadcrumbItemDto::from(&parent));
                    current_id = parent.id;
                    next_parent = parent.parent_id;
                }
                None => {
                    tracing::warn!(
                        "Category {} references missing parent {}, breadcrumb truncated",
                        current_id,
                        parent_id
                    );
                    break;
                }
            }
        }

        trail.reverse();
        Ok(trail)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    /// In-memory store fake holding a flat list of categories.
    pub(crate) struct InMemoryCategoryStore {
        categories: Vec<Category>,
    }

    impl InMemoryCategoryStore {
        pub(crate) fn new(categories: Vec<Category>) -> Self {
            Self { categories }
        }
    }

    #[async_trait]
    impl CategoryStore for InMemoryCategoryStore {
        async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
            Ok(self.categories.iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
            Ok(self
                .categories
                .iter()
                .find(|c| c.slug == slug && c.is_active)
                .cloned())
        }

        async fn find_children_by_parent_id(&self, parent_id: i32) -> Result<Vec<Category>> {
            let mut children: Vec<Category> = self
                .categories
                .iter()
                .filter(|c| c.parent_id == Some(parent_id) && c.is_active)
                .cloned()
                .collect();
            children.sort_by_key(|c| c.display_order);
            Ok(children)
        }

        async fn list_active(&self) -> Result<Vec<Category>> {
            let mut active: Vec<Category> = self
                .categories
                .iter()
                .filter(|c| c.is_active)
                .cloned()
                .collect();
            active.sort_by_key(|c| c.display_order);
            Ok(active)
        }
    }

    pub(crate) fn category(
        id: i32,
        parent_id: Option<i32>,
        level: i32,
        display_order: i32,
        name: &str,
    ) -> Category {
        Category {
            id,
            parent_id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            icon: None,
            level,
            display_order,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(categories: Vec<Category>) -> CategoryService {
        CategoryService::with_store(Arc::new(InMemoryCategoryStore::new(categories)))
    }

    #[tokio::test]
    async fn test_resolve_root_breadcrumb_is_single_self_entry() {
        let svc = service(vec![category(1, None, 0, 0, "Food")]);

        let detail = svc.resolve(1).await.unwrap();

        assert_eq!(detail.breadcrumb.len(), 1);
        assert_eq!(
            detail.breadcrumb[0],
            BreadcrumbItemDto {
                id: 1,
                name: "Food".to_string(),
                slug: "food".to_string(),
                level: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_breadcrumb_is_root_first_and_ends_with_requested() {
        // id=10 -> parent 5 -> parent 1 -> root
        let svc = service(vec![
            category(1, None, 0, 0, "Food"),
            category(5, Some(1), 1, 0, "Restaurants"),
            category(10, Some(5), 2, 0, "Pizza"),
        ]);

        let detail = svc.resolve(10).await.unwrap();

        let ids: Vec<i32> = detail.breadcrumb.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 5, 10]);
        assert_eq!(detail.breadcrumb.len(), 3);
        assert_eq!(detail.breadcrumb.last().unwrap().id, 10);
        assert_eq!(detail.breadcrumb[0].level, 0);
    }

    #[tokio::test]
    async fn test_resolve_children_ordered_by_display_order() {
        let svc = service(vec![
            category(1, None, 0, 0, "Food"),
            category(3, Some(1), 1, 2, "Cafes"),
            category(2, Some(1), 1, 1, "Restaurants"),
            category(4, Some(1), 1, 3, "Bars"),
            category(9, None, 0, 9, "Unrelated"),
        ]);

        let detail = svc.resolve(1).await.unwrap();

        let ids: Vec<i32> = detail.children.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert!(detail.children.iter().all(|c| c.parent_id == Some(1)));
        assert_eq!(detail.child_count, detail.children.len() as i64);
    }

    #[tokio::test]
    async fn test_resolve_leaf_has_empty_children() {
        let svc = service(vec![
            category(1, None, 0, 0, "Food"),
            category(30, Some(1), 1, 0, "Pizza"),
        ]);

        let detail = svc.resolve(30).await.unwrap();

        assert!(detail.children.is_empty());
        assert_eq!(detail.child_count, 0);
    }

    #[tokio::test]
    async fn test_resolve_missing_category_is_not_found() {
        let svc = service(vec![category(1, None, 0, 0, "Food")]);

        let err = svc.resolve(404).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_resolve_dangling_parent_truncates_breadcrumb() {
        // id=20 claims parent 99, which does not exist. The call still
        // succeeds, with the breadcrumb cut short at the dangling edge.
        let svc = service(vec![category(20, Some(99), 1, 0, "Orphan")]);

        let detail = svc.resolve(20).await.unwrap();

        assert_eq!(detail.breadcrumb.len(), 1);
        assert_eq!(detail.breadcrumb[0].id, 20);
    }

    #[tokio::test]
    async fn test_resolve_dangling_grandparent_keeps_resolved_prefix() {
        let svc = service(vec![
            category(5, Some(99), 1, 0, "Mid"),
            category(10, Some(5), 2, 0, "Leaf"),
        ]);

        let detail = svc.resolve(10).await.unwrap();

        let ids: Vec<i32> = detail.breadcrumb.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![5, 10]);
    }

    #[tokio::test]
    async fn test_resolve_cyclic_parent_chain_is_internal_error() {
        // 1 -> 2 -> 1 violates the forest invariant; the depth guard must
        // turn this into an error instead of walking forever.
        let svc = service(vec![
            category(1, Some(2), 0, 0, "A"),
            category(2, Some(1), 1, 0, "B"),
        ]);

        let err = svc.resolve(1).await.unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_get_by_slug_missing_is_not_found() {
        let svc = service(vec![category(1, None, 0, 0, "Food")]);

        assert!(svc.get_by_slug("food").await.is_ok());
        let err = svc.get_by_slug("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_tree_groups_children() {
        let svc = service(vec![
            category(1, None, 0, 0, "Food"),
            category(2, Some(1), 1, 1, "Cafes"),
        ]);

        let tree = svc.list_tree().await.unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].id, 2);
    }
}
