//! Menu handlers
//!
//! Public catalog reads; writes need an authenticated employee.

use axum::extract::State;
use fausse_service::dto::{
    CategoryEnvelope, CategoryItemsResponse, CategoryListResponse, CreateCategoryRequest,
    CreateMenuItemRequest, MenuItemEnvelope, MenuItemListResponse, MenuItemQuery,
    UpdateCategoryRequest, UpdateMenuItemRequest,
};
use fausse_service::MenuService;

use crate::extractors::{AuthEmployee, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, Empty, Success};
use crate::state::AppState;

// ============================================================================
// Categories
// ============================================================================

/// GET /api/menu/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Success<CategoryListResponse>> {
    let service = MenuService::new(state.service_context());
    let categories = service.list_categories().await?;
    Ok(Success::new("Categories retrieved", categories))
}

/// Items belonging to one category
///
/// GET /api/menu/categories/:id/items
pub async fn category_items(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Success<CategoryItemsResponse>> {
    let service = MenuService::new(state.service_context());
    let items = service.category_items(id).await?;
    Ok(Success::new("Menu items retrieved", items))
}

/// POST /api/menu/categories
pub async fn create_category(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Success<CategoryEnvelope>>> {
    let service = MenuService::new(state.service_context());
    let category = service.create_category(request).await?;
    Ok(Created(Success::new(
        "Category added successfully",
        CategoryEnvelope { category },
    )))
}

/// PUT /api/menu/categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Success<CategoryEnvelope>> {
    let service = MenuService::new(state.service_context());
    let category = service.update_category(id, request).await?;
    Ok(Success::new(
        "Category updated successfully",
        CategoryEnvelope { category },
    ))
}

/// Delete an empty category
///
/// DELETE /api/menu/categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<Empty>> {
    let service = MenuService::new(state.service_context());
    service.delete_category(id).await?;
    Ok(Success::message("Category deleted successfully"))
}

// ============================================================================
// Items
// ============================================================================

/// List items, optionally for one category
///
/// GET /api/menu/items?category_id=
pub async fn list_items(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<MenuItemQuery>,
) -> ApiResult<Success<MenuItemListResponse>> {
    let service = MenuService::new(state.service_context());
    let items = service.list_items(query).await?;
    Ok(Success::new("Menu items retrieved", items))
}

/// GET /api/menu/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Success<MenuItemEnvelope>> {
    let service = MenuService::new(state.service_context());
    let item = service.get_item(id).await?;
    Ok(Success::new("Menu item retrieved", MenuItemEnvelope { item }))
}

/// POST /api/menu/items
pub async fn create_item(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    ValidatedJson(request): ValidatedJson<CreateMenuItemRequest>,
) -> ApiResult<Created<Success<MenuItemEnvelope>>> {
    let service = MenuService::new(state.service_context());
    let item = service.create_item(request).await?;
    Ok(Created(Success::new(
        "Menu item added successfully",
        MenuItemEnvelope { item },
    )))
}

/// PUT /api/menu/items/:id
pub async fn update_item(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMenuItemRequest>,
) -> ApiResult<Success<MenuItemEnvelope>> {
    let service = MenuService::new(state.service_context());
    let item = service.update_item(id, request).await?;
    Ok(Success::new(
        "Menu item updated successfully",
        MenuItemEnvelope { item },
    ))
}

/// DELETE /api/menu/items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<Empty>> {
    let service = MenuService::new(state.service_context());
    service.delete_item(id).await?;
    Ok(Success::message("Menu item deleted successfully"))
}
