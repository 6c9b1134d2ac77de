//! Manager dashboard

use chrono::NaiveTime;
use futures::try_join;
use tracing::instrument;

use crate::dto::{DashboardResponse, DashboardStats, UpcomingReservation};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of upcoming reservations shown on the dashboard
pub const UPCOMING_LIMIT: i64 = 10;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Totals plus the next reservations from the start of today
    ///
    /// Recomputed on every call; any store failure fails the whole response.
    #[instrument(skip(self))]
    pub async fn overview(&self) -> ServiceResult<DashboardResponse> {
        let today = self.ctx.clock().today();
        let from = today.and_time(NaiveTime::MIN);

        let (
            menu_items,
            categories,
            customers,
            newsletter_subscribers,
            today_reservations,
            upcoming,
        ) = try_join!(
            self.ctx.menu_item_repo().count(),
            self.ctx.category_repo().count(),
            self.ctx.customer_repo().count(),
            self.ctx.newsletter_repo().count(),
            self.ctx.reservation_repo().count_on(today),
            self.ctx.reservation_repo().upcoming(from, UPCOMING_LIMIT),
        )?;

        Ok(DashboardResponse {
            stats: DashboardStats {
                menu_items,
                categories,
                customers,
                newsletter_subscribers,
                today_reservations,
            },
            upcoming_reservations: upcoming.iter().map(UpcomingReservation::from).collect(),
        })
    }
}
