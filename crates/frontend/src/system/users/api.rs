use contracts::shared::api::ApiError;
use contracts::system::users::{CurrentUser, Employee, RegisterEmployeeDto, UpdateProfileDto};

use crate::shared::api_utils::ApiClient;

/// Fetch all employees
pub async fn fetch_employees(client: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    client
        .get("/api/user/get-all-users")
        .await
        .map_err(|e| e.or_message("Failed to fetch employee data"))?
        .field("users")
}

/// Register a new employee account
pub async fn register_employee(
    client: &ApiClient,
    dto: &RegisterEmployeeDto,
) -> Result<(), ApiError> {
    dto.validate()?;
    client
        .post("/api/auth/register", dto)
        .await
        .map_err(|e| e.or_message("Failed to register employee"))?;
    Ok(())
}

/// Delete an employee
pub async fn delete_employee(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .delete(&format!("/api/user/delete-user/{}", id))
        .await
        .map_err(|e| e.or_message("Failed to delete employee"))?;
    Ok(())
}

/// Profile of the signed-in user. Answered without an envelope.
pub async fn fetch_current_user(client: &ApiClient) -> Result<CurrentUser, ApiError> {
    client.get("/api/user/current-user").await?.into_body()
}

/// Update own username, password and shift
pub async fn update_profile(
    client: &ApiClient,
    user_id: &str,
    dto: &UpdateProfileDto,
) -> Result<(), ApiError> {
    dto.validate()?;
    client
        .put(&format!("/api/user/update-user/{}", user_id), dto)
        .await
        .map_err(|e| e.or_message("Failed to update user information"))?;
    Ok(())
}
