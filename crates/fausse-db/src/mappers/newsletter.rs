//! Newsletter subscriber model -> entity mapper

use fausse_core::entities::NewsletterSubscriber;

use crate::models::NewsletterSubscriberModel;

impl From<NewsletterSubscriberModel> for NewsletterSubscriber {
    fn from(model: NewsletterSubscriberModel) -> Self {
        NewsletterSubscriber {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
