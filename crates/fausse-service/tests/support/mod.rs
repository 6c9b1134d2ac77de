//! In-memory repositories for service tests
//!
//! One `MemoryStore` implements every repository trait so that cross-table
//! behavior (newsletter flag mirroring, customer creation during booking)
//! matches the PostgreSQL repositories.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use fausse_common::auth::{hash_password, JwtService};
use fausse_core::entities::{
    Booking, BookingCustomer, Category, Customer, Employee, EmployeeRole, MenuItem, NewBooking,
    NewCategory, NewCustomer, NewEmployee, NewMenuItem, NewsletterSubscriber, Reservation,
    ReservationDetails, ReservationFilter, ReservationStatus,
};
use fausse_core::error::DomainError;
use fausse_core::traits::{
    CategoryRepository, CustomerRepository, EmployeeRepository, MenuItemRepository,
    NewsletterRepository, RepoResult, ReservationRepository,
};
use fausse_core::value_objects::{BookingPolicy, FixedClock, OccupancyWindow};
use fausse_service::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "service-test-secret-that-is-long-enough";

/// 2025-04-05 12:00, the fixed "now" of every service test
pub fn now() -> NaiveDateTime {
    slot("2025-04-05", "12:00")
}

pub fn slot(date: &str, time: &str) -> NaiveDateTime {
    fausse_core::parse_time_slot(date, time).unwrap()
}

#[derive(Default)]
struct State {
    next_id: i64,
    categories: BTreeMap<i64, Category>,
    items: BTreeMap<i64, MenuItem>,
    customers: BTreeMap<i64, Customer>,
    reservations: BTreeMap<i64, Reservation>,
    subscribers: BTreeMap<i64, NewsletterSubscriber>,
    employees: BTreeMap<i64, (Employee, String)>,
}

impl State {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn customer_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers.values().find(|c| c.has_email(email))
    }

    fn sync_customer_flag(&mut self, email: &str, subscribed: bool) {
        for customer in self.customers.values_mut() {
            if customer.has_email(email) {
                customer.newsletter_signup = subscribed;
            }
        }
    }

    fn insert_customer(&mut self, new: &NewCustomer) -> RepoResult<Customer> {
        if self.customer_by_email(&new.email).is_some() {
            return Err(DomainError::CustomerEmailExists);
        }
        let now = Utc::now();
        let customer = Customer {
            id: self.id(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            newsletter_signup: new.newsletter_signup,
            created_at: now,
            updated_at: now,
        };
        self.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn details(&self, reservation: &Reservation) -> ReservationDetails {
        let customer = self.customers.get(&reservation.customer_id);
        ReservationDetails {
            reservation: reservation.clone(),
            customer_name: customer.map(|c| c.name.clone()),
            customer_email: customer.map(|c| c.email.clone()),
            customer_phone: customer.and_then(|c| c.phone.clone()),
        }
    }
}

/// Shared in-memory store
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Insert a reservation directly, bypassing booking rules
    pub fn seed_reservation(
        &self,
        customer_id: i64,
        time_slot: NaiveDateTime,
        table_number: i32,
        status: ReservationStatus,
    ) -> Reservation {
        let mut state = self.lock();
        let now = Utc::now();
        let reservation = Reservation {
            id: state.id(),
            customer_id,
            time_slot,
            guests: 2,
            table_number,
            special_requests: None,
            status,
            created_at: now,
            updated_at: now,
        };
        state.reservations.insert(reservation.id, reservation.clone());
        reservation
    }

    pub fn seed_customer(&self, name: &str, email: &str) -> Customer {
        self.lock()
            .insert_customer(&NewCustomer {
                name: name.to_string(),
                email: email.to_string(),
                phone: None,
                newsletter_signup: false,
            })
            .unwrap()
    }

    pub fn seed_employee(&self, username: &str, role: EmployeeRole, password: &str) -> Employee {
        let hash = hash_password(password).unwrap();
        let mut state = self.lock();
        let now = Utc::now();
        let employee = Employee {
            id: state.id(),
            username: username.to_string(),
            email: format!("{username}@cafefausse.test"),
            first_name: "Test".to_string(),
            last_name: username.to_string(),
            role,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        state.employees.insert(employee.id, (employee.clone(), hash));
        employee
    }

    pub fn customer(&self, id: i64) -> Option<Customer> {
        self.lock().customers.get(&id).cloned()
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.lock().customers.values().cloned().collect()
    }

    pub fn reservation(&self, id: i64) -> Option<Reservation> {
        self.lock().reservations.get(&id).cloned()
    }

    pub fn employee(&self, id: i64) -> Option<Employee> {
        self.lock().employees.get(&id).map(|(e, _)| e.clone())
    }

    pub fn password_hash(&self, id: i64) -> Option<String> {
        self.lock().employees.get(&id).map(|(_, h)| h.clone())
    }

    pub fn subscriber_by_email(&self, email: &str) -> Option<NewsletterSubscriber> {
        self.lock()
            .subscribers
            .values()
            .find(|s| s.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub fn set_employee_active(&self, id: i64, active: bool) {
        if let Some((employee, _)) = self.lock().employees.get_mut(&id) {
            employee.is_active = active;
        }
    }

    /// Delete a customer row without the reservation guard
    pub fn drop_customer(&self, id: i64) {
        self.lock().customers.remove(&id);
    }
}

pub fn context(store: &MemoryStore) -> ServiceContext {
    context_with_policy(store, BookingPolicy::default())
}

pub fn context_with_policy(store: &MemoryStore, policy: BookingPolicy) -> ServiceContext {
    let repo = Arc::new(store.clone());
    ServiceContextBuilder::new()
        .category_repo(repo.clone())
        .menu_item_repo(repo.clone())
        .customer_repo(repo.clone())
        .reservation_repo(repo.clone())
        .newsletter_repo(repo.clone())
        .employee_repo(repo)
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600, 604_800)))
        .clock(Arc::new(FixedClock::new(now())))
        .booking_policy(policy)
        .build()
        .unwrap()
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        Ok(self.lock().categories.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Category>> {
        let mut categories: Vec<Category> = self.lock().categories.values().cloned().collect();
        categories.sort_by(|a, b| (a.display_order, &a.name).cmp(&(b.display_order, &b.name)));
        Ok(categories)
    }

    async fn create(&self, category: &NewCategory) -> RepoResult<Category> {
        let mut state = self.lock();
        if state.categories.values().any(|c| c.name == category.name) {
            return Err(DomainError::CategoryNameExists);
        }
        let now = Utc::now();
        let created = Category {
            id: state.id(),
            name: category.name.clone(),
            description: category.description.clone(),
            display_order: category.display_order,
            created_at: now,
            updated_at: now,
        };
        state.categories.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> RepoResult<Category> {
        let mut state = self.lock();
        match state.categories.get_mut(&category.id) {
            Some(existing) => {
                *existing = category.clone();
                Ok(category.clone())
            }
            None => Err(DomainError::CategoryNotFound(category.id)),
        }
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.lock()
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CategoryNotFound(id))
    }

    async fn item_count(&self, id: i64) -> RepoResult<i64> {
        Ok(self
            .lock()
            .items
            .values()
            .filter(|i| i.category_id == id)
            .count() as i64)
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.lock().categories.len() as i64)
    }
}

#[async_trait]
impl MenuItemRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>> {
        Ok(self.lock().items.get(&id).cloned())
    }

    async fn list(&self, category_id: Option<i64>) -> RepoResult<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self
            .lock()
            .items
            .values()
            .filter(|i| category_id.map_or(true, |c| i.category_id == c))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            (a.category_id, a.display_order, &a.name).cmp(&(b.category_id, b.display_order, &b.name))
        });
        Ok(items)
    }

    async fn create(&self, item: &NewMenuItem) -> RepoResult<MenuItem> {
        let mut state = self.lock();
        let now = Utc::now();
        let created = MenuItem {
            id: state.id(),
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
            created_at: now,
            updated_at: now,
        };
        state.items.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, item: &MenuItem) -> RepoResult<MenuItem> {
        let mut state = self.lock();
        match state.items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(item.clone())
            }
            None => Err(DomainError::MenuItemNotFound(item.id)),
        }
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.lock()
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::MenuItemNotFound(id))
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.lock().items.len() as i64)
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Customer>> {
        Ok(self.lock().customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        Ok(self.lock().customer_by_email(email).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Customer>> {
        let mut customers: Vec<Customer> = self.lock().customers.values().cloned().collect();
        customers.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(customers)
    }

    async fn create(&self, customer: &NewCustomer) -> RepoResult<Customer> {
        self.lock().insert_customer(customer)
    }

    async fn update(&self, customer: &Customer) -> RepoResult<Customer> {
        let mut state = self.lock();
        if state
            .customers
            .values()
            .any(|c| c.id != customer.id && c.has_email(&customer.email))
        {
            return Err(DomainError::CustomerEmailExists);
        }
        match state.customers.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer.clone();
                Ok(customer.clone())
            }
            None => Err(DomainError::CustomerNotFound(customer.id)),
        }
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.lock()
            .customers
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CustomerNotFound(id))
    }

    async fn reservation_count(&self, id: i64) -> RepoResult<i64> {
        Ok(self
            .lock()
            .reservations
            .values()
            .filter(|r| r.customer_id == id)
            .count() as i64)
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.lock().customers.len() as i64)
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>> {
        Ok(self.lock().reservations.get(&id).cloned())
    }

    async fn find_details(&self, id: i64) -> RepoResult<Option<ReservationDetails>> {
        let state = self.lock();
        Ok(state.reservations.get(&id).map(|r| state.details(r)))
    }

    async fn list_details(&self, filter: &ReservationFilter) -> RepoResult<Vec<ReservationDetails>> {
        let state = self.lock();
        let mut matching: Vec<&Reservation> = state
            .reservations
            .values()
            .filter(|r| filter.date.map_or(true, |d| r.time_slot.date() == d))
            .filter(|r| filter.status.map_or(true, |s| r.status == s))
            .collect();
        matching.sort_by_key(|r| (r.time_slot, r.id));
        Ok(matching.into_iter().map(|r| state.details(r)).collect())
    }

    async fn occupied_tables(&self, window: &OccupancyWindow) -> RepoResult<BTreeSet<i32>> {
        let (after, before) = window.overlapping_starts();
        Ok(self
            .lock()
            .reservations
            .values()
            .filter(|r| r.is_active() && r.time_slot > after && r.time_slot < before)
            .map(|r| r.table_number)
            .collect())
    }

    async fn create_booking(&self, booking: &NewBooking) -> RepoResult<Booking> {
        let mut state = self.lock();
        let (customer, customer_created) = match &booking.customer {
            BookingCustomer::Existing(id) => (
                state
                    .customers
                    .get(id)
                    .cloned()
                    .ok_or(DomainError::CustomerNotFound(*id))?,
                false,
            ),
            BookingCustomer::New(new) => (state.insert_customer(new)?, true),
        };
        let now = Utc::now();
        let reservation = Reservation {
            id: state.id(),
            customer_id: customer.id,
            time_slot: booking.time_slot,
            guests: booking.guests,
            table_number: booking.table_number,
            special_requests: booking.special_requests.clone(),
            status: ReservationStatus::Confirmed,
            created_at: now,
            updated_at: now,
        };
        state.reservations.insert(reservation.id, reservation.clone());
        Ok(Booking {
            reservation,
            customer,
            customer_created,
        })
    }

    async fn update(&self, reservation: &Reservation) -> RepoResult<Reservation> {
        let mut state = self.lock();
        match state.reservations.get_mut(&reservation.id) {
            Some(existing) => {
                *existing = reservation.clone();
                Ok(reservation.clone())
            }
            None => Err(DomainError::ReservationNotFound(reservation.id)),
        }
    }

    async fn update_with_customer(
        &self,
        reservation: &Reservation,
        customer: &Customer,
    ) -> RepoResult<(Reservation, Customer)> {
        let customer = CustomerRepository::update(self, customer).await?;
        let reservation = ReservationRepository::update(self, reservation).await?;
        Ok((reservation, customer))
    }

    async fn set_status(&self, id: i64, status: ReservationStatus) -> RepoResult<Reservation> {
        let mut state = self.lock();
        let reservation = state
            .reservations
            .get_mut(&id)
            .ok_or(DomainError::ReservationNotFound(id))?;
        reservation.set_status(status);
        Ok(reservation.clone())
    }

    async fn count_on(&self, date: NaiveDate) -> RepoResult<i64> {
        Ok(self
            .lock()
            .reservations
            .values()
            .filter(|r| r.time_slot.date() == date)
            .count() as i64)
    }

    async fn upcoming(&self, from: NaiveDateTime, limit: i64) -> RepoResult<Vec<ReservationDetails>> {
        let state = self.lock();
        let mut matching: Vec<&Reservation> = state
            .reservations
            .values()
            .filter(|r| r.time_slot >= from)
            .collect();
        matching.sort_by_key(|r| (r.time_slot, r.id));
        Ok(matching
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|r| state.details(r))
            .collect())
    }
}

#[async_trait]
impl NewsletterRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<NewsletterSubscriber>> {
        Ok(self.lock().subscribers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<NewsletterSubscriber>> {
        Ok(self.subscriber_by_email(email))
    }

    async fn list(&self) -> RepoResult<Vec<NewsletterSubscriber>> {
        let mut subscribers: Vec<NewsletterSubscriber> =
            self.lock().subscribers.values().cloned().collect();
        subscribers.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(subscribers)
    }

    async fn create(&self, email: &str) -> RepoResult<NewsletterSubscriber> {
        let mut state = self.lock();
        if state
            .subscribers
            .values()
            .any(|s| s.email.eq_ignore_ascii_case(email))
        {
            return Err(DomainError::AlreadySubscribed);
        }
        let now = Utc::now();
        let subscriber = NewsletterSubscriber {
            id: state.id(),
            email: email.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        state.subscribers.insert(subscriber.id, subscriber.clone());
        state.sync_customer_flag(email, true);
        Ok(subscriber)
    }

    async fn set_active(&self, id: i64, active: bool) -> RepoResult<NewsletterSubscriber> {
        let mut state = self.lock();
        let subscriber = state
            .subscribers
            .get_mut(&id)
            .ok_or(DomainError::SubscriberNotFound(id))?;
        subscriber.is_active = active;
        subscriber.updated_at = Utc::now();
        let subscriber = subscriber.clone();
        state.sync_customer_flag(&subscriber.email, active);
        Ok(subscriber)
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.lock().subscribers.len() as i64)
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        Ok(self.employee(id))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>> {
        Ok(self
            .lock()
            .employees
            .values()
            .find(|(e, _)| e.username.eq_ignore_ascii_case(username))
            .map(|(e, _)| e.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.lock().employees.values().map(|(e, _)| e.clone()).collect())
    }

    async fn username_exists(&self, username: &str, except: Option<i64>) -> RepoResult<bool> {
        Ok(self.lock().employees.values().any(|(e, _)| {
            e.username.eq_ignore_ascii_case(username) && Some(e.id) != except
        }))
    }

    async fn email_exists(&self, email: &str, except: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .lock()
            .employees
            .values()
            .any(|(e, _)| e.email.eq_ignore_ascii_case(email) && Some(e.id) != except))
    }

    async fn has_active_with_role(&self, role: EmployeeRole) -> RepoResult<bool> {
        Ok(self
            .lock()
            .employees
            .values()
            .any(|(e, _)| e.is_active && e.role == role))
    }

    async fn create(&self, employee: &NewEmployee, password_hash: &str) -> RepoResult<Employee> {
        let mut state = self.lock();
        let now = Utc::now();
        let created = Employee {
            id: state.id(),
            username: employee.username.clone(),
            email: employee.email.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role: employee.role,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        state
            .employees
            .insert(created.id, (created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn update(
        &self,
        employee: &Employee,
        new_password_hash: Option<&str>,
    ) -> RepoResult<Employee> {
        let mut state = self.lock();
        match state.employees.get_mut(&employee.id) {
            Some((existing, hash)) => {
                *existing = employee.clone();
                if let Some(new_hash) = new_password_hash {
                    *hash = new_hash.to_string();
                }
                Ok(employee.clone())
            }
            None => Err(DomainError::EmployeeNotFound(employee.id)),
        }
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        Ok(self.password_hash(id))
    }

    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()> {
        let mut state = self.lock();
        let (employee, _) = state
            .employees
            .get_mut(&id)
            .ok_or(DomainError::EmployeeNotFound(id))?;
        employee.last_login = Some(at);
        Ok(())
    }
}
