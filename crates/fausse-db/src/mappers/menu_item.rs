//! Menu item model -> entity mapper

use fausse_core::entities::MenuItem;

use crate::models::MenuItemModel;

impl From<MenuItemModel> for MenuItem {
    fn from(model: MenuItemModel) -> Self {
        MenuItem {
            id: model.id,
            category_id: model.category_id,
            name: model.name,
            description: model.description,
            price: model.price,
            image_url: model.image_url,
            is_vegetarian: model.is_vegetarian,
            is_vegan: model.is_vegan,
            is_gluten_free: model.is_gluten_free,
            is_featured: model.is_featured,
            available: model.available,
            display_order: model.display_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
