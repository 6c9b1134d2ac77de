//! Menu service
//!
//! Categories and menu items. Shape validation (lengths) happens on the
//! request DTOs; this service owns the rules that need the store.

use fausse_core::entities::{NewCategory, NewMenuItem};
use fausse_core::error::DomainError;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dto::requests::trim_optional;
use crate::dto::{
    CategoryItemsResponse, CategoryListResponse, CategoryResponse, CreateCategoryRequest,
    CreateMenuItemRequest, MenuItemListResponse, MenuItemQuery, MenuItemResponse,
    UpdateCategoryRequest, UpdateMenuItemRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Menu service
pub struct MenuService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MenuService<'a> {
    /// Create a new MenuService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // =========================================================================
    // Categories
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<CategoryListResponse> {
        let categories = self
            .ctx
            .category_repo()
            .list()
            .await?
            .into_iter()
            .map(CategoryResponse::from)
            .collect();

        Ok(CategoryListResponse { categories })
    }

    /// A category together with its items
    #[instrument(skip(self))]
    pub async fn category_items(&self, id: i64) -> ServiceResult<CategoryItemsResponse> {
        let category = self
            .ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))?;

        let items = self
            .ctx
            .menu_item_repo()
            .list(Some(id))
            .await?
            .into_iter()
            .map(MenuItemResponse::from)
            .collect();

        Ok(CategoryItemsResponse {
            category: category.into(),
            items,
        })
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let name = non_blank(&request.name, "Category name is required")?;

        if self.ctx.category_repo().find_by_name(&name).await?.is_some() {
            return Err(DomainError::CategoryNameExists.into());
        }

        let category = self
            .ctx
            .category_repo()
            .create(&NewCategory {
                name,
                description: trim_optional(request.description),
                display_order: request.display_order.unwrap_or(0),
            })
            .await?;

        info!(category_id = category.id, "Category created");
        Ok(category.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update_category(
        &self,
        id: i64,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))?;

        if let Some(name) = request.name {
            let name = non_blank(&name, "Category name is required")?;
            if let Some(other) = self.ctx.category_repo().find_by_name(&name).await? {
                if other.id != id {
                    return Err(DomainError::CategoryNameExists.into());
                }
            }
            category.set_name(name);
        }
        if let Some(description) = request.description {
            category.set_description(trim_optional(Some(description)));
        }
        if let Some(display_order) = request.display_order {
            category.set_display_order(display_order);
        }

        let category = self.ctx.category_repo().update(&category).await?;
        info!(category_id = id, "Category updated");
        Ok(category.into())
    }

    /// Delete a category; refused while any item still belongs to it
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i64) -> ServiceResult<()> {
        if self.ctx.category_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Category", id));
        }

        let count = self.ctx.category_repo().item_count(id).await?;
        if count > 0 {
            return Err(DomainError::CategoryHasItems { count }.into());
        }

        self.ctx.category_repo().delete(id).await?;
        info!(category_id = id, "Category deleted");
        Ok(())
    }

    // =========================================================================
    // Items
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn list_items(&self, query: MenuItemQuery) -> ServiceResult<MenuItemListResponse> {
        let items = self
            .ctx
            .menu_item_repo()
            .list(query.category_id)
            .await?
            .into_iter()
            .map(MenuItemResponse::from)
            .collect();

        Ok(MenuItemListResponse { items })
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ServiceResult<MenuItemResponse> {
        self.ctx
            .menu_item_repo()
            .find_by_id(id)
            .await?
            .map(MenuItemResponse::from)
            .ok_or_else(|| ServiceError::not_found("Menu item", id))
    }

    #[instrument(skip(self, request), fields(name = %request.name, category_id = request.category_id))]
    pub async fn create_item(
        &self,
        request: CreateMenuItemRequest,
    ) -> ServiceResult<MenuItemResponse> {
        let name = non_blank(&request.name, "Item name is required")?;
        check_price(request.price)?;
        self.ensure_category(request.category_id).await?;

        let item = self
            .ctx
            .menu_item_repo()
            .create(&NewMenuItem {
                category_id: request.category_id,
                name,
                description: trim_optional(request.description),
                price: request.price,
                image_url: trim_optional(request.image_url),
                is_vegetarian: request.is_vegetarian,
                is_vegan: request.is_vegan,
                is_gluten_free: request.is_gluten_free,
                is_featured: request.is_featured,
                available: request.available.unwrap_or(true),
                display_order: request.display_order.unwrap_or(0),
            })
            .await?;

        info!(item_id = item.id, "Menu item created");
        Ok(item.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update_item(
        &self,
        id: i64,
        request: UpdateMenuItemRequest,
    ) -> ServiceResult<MenuItemResponse> {
        let mut item = self
            .ctx
            .menu_item_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", id))?;

        if let Some(name) = request.name {
            item.name = non_blank(&name, "Item name is required")?;
        }
        if let Some(price) = request.price {
            check_price(price)?;
            item.price = price;
        }
        if let Some(category_id) = request.category_id {
            if category_id != item.category_id {
                self.ensure_category(category_id).await?;
            }
            item.category_id = category_id;
        }
        if let Some(description) = request.description {
            item.description = trim_optional(Some(description));
        }
        if let Some(image_url) = request.image_url {
            item.image_url = trim_optional(Some(image_url));
        }
        item.is_vegetarian = request.is_vegetarian.unwrap_or(item.is_vegetarian);
        item.is_vegan = request.is_vegan.unwrap_or(item.is_vegan);
        item.is_gluten_free = request.is_gluten_free.unwrap_or(item.is_gluten_free);
        item.is_featured = request.is_featured.unwrap_or(item.is_featured);
        item.available = request.available.unwrap_or(item.available);
        item.display_order = request.display_order.unwrap_or(item.display_order);
        item.touch();

        let item = self.ctx.menu_item_repo().update(&item).await?;
        info!(item_id = id, "Menu item updated");
        Ok(item.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ServiceResult<()> {
        if self.ctx.menu_item_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Menu item", id));
        }

        self.ctx.menu_item_repo().delete(id).await?;
        info!(item_id = id, "Menu item deleted");
        Ok(())
    }

    /// Unknown categories are a bad request, not a missing resource
    async fn ensure_category(&self, category_id: i64) -> ServiceResult<()> {
        if self.ctx.category_repo().find_by_id(category_id).await?.is_none() {
            return Err(DomainError::ValidationError(format!(
                "Category with ID {category_id} does not exist"
            ))
            .into());
        }
        Ok(())
    }
}

fn non_blank(value: &str, message: &str) -> ServiceResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::validation(message));
    }
    Ok(value.to_string())
}

fn check_price(price: Decimal) -> ServiceResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::ValidationError("Price cannot be negative".to_string()).into());
    }
    Ok(())
}
