//! Customer model -> entity mapper

use fausse_core::entities::Customer;

use crate::models::CustomerModel;

impl From<CustomerModel> for Customer {
    fn from(model: CustomerModel) -> Self {
        Customer {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            newsletter_signup: model.newsletter_signup,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
