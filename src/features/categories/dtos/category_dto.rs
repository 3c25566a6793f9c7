use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub level: i32,
    pub display_order: i32,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            parent_id: c.parent_id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            icon: c.icon,
            level: c.level,
            display_order: c.display_order,
        }
    }
}

/// One ancestor step in a category breadcrumb, root-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbItemDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub level: i32,
}

impl From<&Category> for BreadcrumbItemDto {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
            level: c.level,
        }
    }
}

/// Full category detail view: the category itself, its direct children in
/// display order, and the root-first ancestor breadcrumb.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetailDto {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub level: i32,
    pub display_order: i32,
    pub children: Vec<CategoryResponseDto>,
    pub child_count: i64,
    pub breadcrumb: Vec<BreadcrumbItemDto>,
}

impl CategoryDetailDto {
    pub fn compose(
        category: Category,
        children: Vec<Category>,
        breadcrumb: Vec<BreadcrumbItemDto>,
    ) -> Self {
        let children: Vec<CategoryResponseDto> = children.into_iter().map(|c| c.into()).collect();

        Self {
            id: category.id,
            parent_id: category.parent_id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            icon: category.icon,
            level: category.level,
            display_order: category.display_order,
            child_count: children.len() as i64,
            children,
            breadcrumb,
        }
    }
}

/// Response DTO for category tree (hierarchical structure)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct CategoryTreeDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub level: i32,
    pub display_order: i32,
    pub children: Vec<CategoryTreeDto>,
}

impl CategoryTreeDto {
    /// Build tree from flat list of categories
    pub fn build_tree(categories: Vec<Category>) -> Vec<CategoryTreeDto> {
        // Get root categories (parent_id is None)
        let roots: Vec<&Category> = categories
            .iter()
            .filter(|c| c.parent_id.is_none())
            .collect();

        // Build tree recursively
        roots
            .into_iter()
            .map(|root| Self::build_node(root, &categories))
            .collect()
    }

    fn build_node(category: &Category, all_categories: &[Category]) -> CategoryTreeDto {
        let children: Vec<CategoryTreeDto> = all_categories
            .iter()
            .filter(|c| c.parent_id == Some(category.id))
            .map(|child| Self::build_node(child, all_categories))
            .collect();

        CategoryTreeDto {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            level: category.level,
            display_order: category.display_order,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(id: i32, parent_id: Option<i32>, level: i32, name: &str) -> Category {
        Category {
            id,
            parent_id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            icon: None,
            level,
            display_order: id,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_build_tree_nests_children_under_roots() {
        let flat = vec![
            category(1, None, 0, "Food"),
            category(2, Some(1), 1, "Restaurants"),
            category(3, Some(1), 1, "Cafes"),
            category(4, None, 0, "Services"),
            category(5, Some(2), 2, "Pizza"),
        ];

        let tree = CategoryTreeDto::build_tree(flat);

        assert_eq!(tree.len(), 2);
        let food = &tree[0];
        assert_eq!(food.id, 1);
        assert_eq!(food.children.len(), 2);
        assert_eq!(food.children[0].children[0].id, 5);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_build_tree_orphan_is_dropped() {
        // A child whose parent is missing from the list has no root to hang
        // off, so it does not appear in the tree.
        let flat = vec![category(1, None, 0, "Food"), category(9, Some(42), 1, "Lost")];

        let tree = CategoryTreeDto::build_tree(flat);

        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_detail_compose_counts_children() {
        let parent = category(1, None, 0, "Food");
        let kids = vec![category(2, Some(1), 1, "Cafes"), category(3, Some(1), 1, "Bars")];
        let crumb = vec![BreadcrumbItemDto::from(&parent)];

        let detail = CategoryDetailDto::compose(parent, kids, crumb);

        assert_eq!(detail.child_count, 2);
        assert_eq!(detail.children.len(), 2);
        assert_eq!(detail.breadcrumb.len(), 1);
        assert_eq!(detail.breadcrumb[0].id, detail.id);
    }
}
