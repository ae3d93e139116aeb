use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::user::{self, NewUser, User, UserPatch};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::envelope::{ApiResponse, NoData};
use crate::presentation::extract::{JsonBody, PathId};

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// `null` when the path id was not a number.
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UpdateUserDto> for UserPatch {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            role: dto.role,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All mock users", body = ApiResponse<Vec<UserDto>>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<UserDto>>> {
    let users = state.user_service.list_users();
    Json(ApiResponse::ok(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = crate::presentation::app_error::ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<ApiResponse<UserDto>>> {
    let user = state.user_service.get_user(id)?;
    Ok(Json(ApiResponse::ok(UserDto::from(user))))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created (not persisted)", body = ApiResponse<UserDto>),
        (status = 400, description = "Name or email missing", body = crate::presentation::app_error::ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateUserDto>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    if let Err(err) = dto.validate() {
        debug!(error = %err, "create user rejected");
        return Err(required_fields_missing());
    }
    let CreateUserDto {
        name: Some(name),
        email: Some(email),
        role,
    } = dto
    else {
        return Err(required_fields_missing());
    };

    let req = NewUser::new(name, email, role)?;
    let created = state.user_service.create_user(req);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserDto::from(created)).with_message("用户创建成功")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User id; non-numeric ids echo as null")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated (not persisted)", body = ApiResponse<UserDto>),
        (status = 400, description = "Malformed body", body = crate::presentation::app_error::ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(dto): JsonBody<UpdateUserDto>,
) -> AppResult<Json<ApiResponse<UserDto>>> {
    let updated = state.user_service.update_user(id, dto.into());

    Ok(Json(
        ApiResponse::ok(UserDto::from(updated)).with_message("用户更新成功"),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User id; any value is acknowledged")
    ),
    responses(
        (status = 200, description = "Deletion acknowledged", body = ApiResponse<NoData>)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Json<ApiResponse<NoData>> {
    state.user_service.delete_user(id);
    Json(ApiResponse::message_only(format!("用户 {id} 删除成功")))
}

fn required_fields_missing() -> AppError {
    DomainError::Validation {
        message: user::REQUIRED_FIELDS_MESSAGE,
    }
    .into()
}
