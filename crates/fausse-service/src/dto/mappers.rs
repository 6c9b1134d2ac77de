//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use fausse_core::entities::{
    Booking, Category, Customer, Employee, MenuItem, NewsletterSubscriber, ReservationDetails,
};
use fausse_core::value_objects::{format_date, format_time};

use super::responses::{
    BookingConfirmation, CategoryResponse, CustomerResponse, EmployeeResponse, MenuItemResponse,
    ReservationResponse, SubscriberResponse, UpcomingReservation,
};

// ============================================================================
// Menu Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            display_order: category.display_order,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            category_id: item.category_id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            is_vegetarian: item.is_vegetarian,
            is_vegan: item.is_vegan,
            is_gluten_free: item.is_gluten_free,
            is_featured: item.is_featured,
            available: item.available,
            display_order: item.display_order,
            dietary_labels: item.dietary_labels(),
        }
    }
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self::from(&item)
    }
}

// ============================================================================
// Reservation Mappers
// ============================================================================

impl From<&ReservationDetails> for ReservationResponse {
    fn from(details: &ReservationDetails) -> Self {
        let r = &details.reservation;
        Self {
            id: r.id,
            reservation_id: r.id,
            customer_id: r.customer_id,
            customer_name: details.customer_name.clone(),
            customer_email: details.customer_email.clone(),
            customer_phone: details.customer_phone.clone(),
            time_slot: r.time_slot,
            date: format_date(r.time_slot),
            time: format_time(r.time_slot),
            guests: r.guests,
            table_number: r.table_number,
            special_requests: r.special_requests.clone(),
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<ReservationDetails> for ReservationResponse {
    fn from(details: ReservationDetails) -> Self {
        Self::from(&details)
    }
}

impl From<&ReservationDetails> for UpcomingReservation {
    fn from(details: &ReservationDetails) -> Self {
        let r = &details.reservation;
        Self {
            id: r.id,
            customer_name: details.display_name().to_string(),
            date: format_date(r.time_slot),
            time: format_time(r.time_slot),
            guests: r.guests,
            table_number: r.table_number,
            status: r.status,
        }
    }
}

impl From<&Booking> for BookingConfirmation {
    fn from(booking: &Booking) -> Self {
        let r = &booking.reservation;
        Self {
            reservation_id: r.id,
            table_number: r.table_number,
            time_slot: r.time_slot,
            name: booking.customer.name.clone(),
            email: booking.customer.email.clone(),
            phone: booking.customer.phone.clone(),
            date: format_date(r.time_slot),
            time: format_time(r.time_slot),
            guests: r.guests,
            special_requests: r.special_requests.clone(),
            status: r.status,
        }
    }
}

// ============================================================================
// Newsletter / Customer Mappers
// ============================================================================

impl From<&NewsletterSubscriber> for SubscriberResponse {
    fn from(subscriber: &NewsletterSubscriber) -> Self {
        Self {
            id: subscriber.id,
            email: subscriber.email.clone(),
            is_active: subscriber.is_active,
            created_at: subscriber.created_at,
            updated_at: subscriber.updated_at,
        }
    }
}

impl From<NewsletterSubscriber> for SubscriberResponse {
    fn from(subscriber: NewsletterSubscriber) -> Self {
        Self::from(&subscriber)
    }
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            newsletter_signup: customer.newsletter_signup,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self::from(&customer)
    }
}

// ============================================================================
// Employee Mappers
// ============================================================================

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            username: employee.username.clone(),
            email: employee.email.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            full_name: employee.full_name(),
            role: employee.role,
            is_active: employee.is_active,
            last_login: employee.last_login,
            created_at: employee.created_at,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self::from(&employee)
    }
}
