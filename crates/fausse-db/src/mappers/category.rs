//! Category model -> entity mapper

use fausse_core::entities::Category;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            display_order: model.display_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
