use utoipa::OpenApi;

use crate::presentation::app_error::ErrorBody;
use crate::presentation::envelope::{NoData, PaginationInfo};
use crate::presentation::handlers::data::{
    ActivityEntryDto, CreateDataDto, DataItemDto, DataStatsDto, TypeDistributionDto,
    UpdateDataDto,
};
use crate::presentation::handlers::system::{EndpointsDto, HealthDto, ServiceInfoDto};
use crate::presentation::handlers::users::{CreateUserDto, UpdateUserDto, UserDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::system::service_banner,
        crate::presentation::handlers::system::health,
        crate::presentation::handlers::users::list_users,
        crate::presentation::handlers::users::get_user,
        crate::presentation::handlers::users::create_user,
        crate::presentation::handlers::users::update_user,
        crate::presentation::handlers::users::delete_user,
        crate::presentation::handlers::data::list_items,
        crate::presentation::handlers::data::get_item,
        crate::presentation::handlers::data::create_item,
        crate::presentation::handlers::data::update_item,
        crate::presentation::handlers::data::delete_item,
        crate::presentation::handlers::data::stats_overview
    ),
    components(
        schemas(
            ErrorBody,
            NoData,
            PaginationInfo,
            ServiceInfoDto,
            EndpointsDto,
            HealthDto,
            CreateUserDto,
            UpdateUserDto,
            UserDto,
            CreateDataDto,
            UpdateDataDto,
            DataItemDto,
            DataStatsDto,
            TypeDistributionDto,
            ActivityEntryDto
        )
    ),
    tags(
        (name = "system", description = "Banner and health endpoints"),
        (name = "users", description = "Mock user endpoints, also mounted under /users"),
        (name = "data", description = "Mock data endpoints, also mounted under /data")
    )
)]
pub struct ApiDoc;
