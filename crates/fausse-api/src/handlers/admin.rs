//! Admin handlers
//!
//! Dashboard, employee management and the staff reservation views.

use axum::extract::State;
use fausse_service::dto::{
    AdminUpdateReservationRequest, CancellationResponse, CreateEmployeeRequest,
    DashboardResponse, EmployeeEnvelope, EmployeeListResponse, ReservationEnvelope,
    ReservationListQuery, ReservationListResponse, UpdateEmployeeRequest,
};
use fausse_service::{DashboardService, EmployeeService, ReservationService};

use crate::extractors::{
    AdminEmployee, AuthEmployee, IdPath, JsonBody, ManagerEmployee, QueryParams,
};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Headline counts and the next reservations
///
/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _manager: ManagerEmployee,
) -> ApiResult<Success<DashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    let overview = service.overview().await?;
    Ok(Success::new("Dashboard retrieved", overview))
}

// ============================================================================
// Employees
// ============================================================================

/// GET /api/admin/employees
pub async fn list_employees(
    State(state): State<AppState>,
    _admin: AdminEmployee,
) -> ApiResult<Success<EmployeeListResponse>> {
    let service = EmployeeService::new(state.service_context());
    let employees = service.list().await?;
    Ok(Success::new("Employees retrieved", employees))
}

/// GET /api/admin/employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    _admin: AdminEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<EmployeeEnvelope>> {
    let service = EmployeeService::new(state.service_context());
    let employee = service.get(id).await?;
    Ok(Success::new("Employee retrieved", EmployeeEnvelope { employee }))
}

/// POST /api/admin/employees
pub async fn create_employee(
    State(state): State<AppState>,
    _admin: AdminEmployee,
    JsonBody(request): JsonBody<CreateEmployeeRequest>,
) -> ApiResult<Created<Success<EmployeeEnvelope>>> {
    let service = EmployeeService::new(state.service_context());
    let employee = service.create(request).await?;
    Ok(Created(Success::new(
        "Employee created successfully",
        EmployeeEnvelope { employee },
    )))
}

/// PUT /api/admin/employees/:id
pub async fn update_employee(
    State(state): State<AppState>,
    AdminEmployee(caller): AdminEmployee,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateEmployeeRequest>,
) -> ApiResult<Success<EmployeeEnvelope>> {
    let service = EmployeeService::new(state.service_context());
    let employee = service.update(&caller, id, request).await?;
    Ok(Success::new(
        "Employee updated successfully",
        EmployeeEnvelope { employee },
    ))
}

/// Deactivate an employee; accounts are never hard-deleted
///
/// DELETE /api/admin/employees/:id
pub async fn deactivate_employee(
    State(state): State<AppState>,
    AdminEmployee(caller): AdminEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<EmployeeEnvelope>> {
    let service = EmployeeService::new(state.service_context());
    let employee = service.deactivate(&caller, id).await?;
    Ok(Success::new(
        "Employee deactivated successfully",
        EmployeeEnvelope { employee },
    ))
}

// ============================================================================
// Reservations
// ============================================================================

/// GET /api/admin/reservations?date=&status=
pub async fn list_reservations(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    QueryParams(query): QueryParams<ReservationListQuery>,
) -> ApiResult<Success<ReservationListResponse>> {
    let service = ReservationService::new(state.service_context());
    let reservations = service.list_filtered(query).await?;
    Ok(Success::new("Reservations retrieved", reservations))
}

/// GET /api/admin/reservations/:id
pub async fn get_reservation(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<ReservationEnvelope>> {
    let service = ReservationService::new(state.service_context());
    let reservation = service.get(id).await?;
    Ok(Success::new(
        "Reservation retrieved",
        ReservationEnvelope { reservation },
    ))
}

/// PUT /api/admin/reservations/:id
pub async fn update_reservation(
    State(state): State<AppState>,
    _auth: AuthEmployee,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<AdminUpdateReservationRequest>,
) -> ApiResult<Success<ReservationEnvelope>> {
    let service = ReservationService::new(state.service_context());
    let reservation = service.admin_update(id, request).await?;
    Ok(Success::new(
        "Reservation updated successfully",
        ReservationEnvelope { reservation },
    ))
}

/// DELETE /api/admin/reservations/:id
pub async fn cancel_reservation(
    State(state): State<AppState>,
    _manager: ManagerEmployee,
    IdPath(id): IdPath,
) -> ApiResult<Success<CancellationResponse>> {
    let service = ReservationService::new(state.service_context());
    let cancellation = service.cancel(id).await?;
    Ok(Success::new("Reservation cancelled successfully", cancellation))
}
