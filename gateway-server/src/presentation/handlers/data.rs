use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::data_service::ListItemsQuery;
use crate::domain::data_item::{self, DataItem, DataItemPatch, NewDataItem};
use crate::domain::error::DomainError;
use crate::domain::id::parse_leading_int;
use crate::domain::pagination::PageRequest;
use crate::domain::stats::{ActivityEntry, DataStats, TypeDistribution};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::envelope::{ApiResponse, NoData, PaginationInfo};
use crate::presentation::extract::{JsonBody, PathId, QueryPairs, first_param};

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateDataDto {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDataDto {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataItemDto {
    /// `null` when the path id was not a number.
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
}

impl From<DataItem> for DataItemDto {
    fn from(item: DataItem) -> Self {
        Self {
            id: item.id.get(),
            title: item.title,
            kind: item.kind,
            content: item.content,
            author: item.author,
            tags: item.tags,
            created_at: item.created_at,
            updated_at: item.updated_at,
            views: item.views,
            likes: item.likes,
        }
    }
}

impl From<UpdateDataDto> for DataItemPatch {
    fn from(dto: UpdateDataDto) -> Self {
        Self {
            title: dto.title,
            kind: dto.kind,
            content: dto.content,
            author: dto.author,
            tags: dto.tags,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataStatsDto {
    pub total_items: u64,
    pub total_views: u64,
    pub total_likes: u64,
    pub type_distribution: TypeDistributionDto,
    pub recent_activity: Vec<ActivityEntryDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TypeDistributionDto {
    pub article: u64,
    pub news: u64,
    pub report: u64,
    pub other: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntryDto {
    pub date: String,
    pub new_items: u64,
    pub views: u64,
}

impl From<DataStats> for DataStatsDto {
    fn from(stats: DataStats) -> Self {
        let TypeDistribution {
            article,
            news,
            report,
            other,
        } = stats.type_distribution;

        Self {
            total_items: stats.total_items,
            total_views: stats.total_views,
            total_likes: stats.total_likes,
            type_distribution: TypeDistributionDto {
                article,
                news,
                report,
                other,
            },
            recent_activity: stats
                .recent_activity
                .into_iter()
                .map(|ActivityEntry { date, new_items, views }| ActivityEntryDto {
                    date,
                    new_items,
                    views,
                })
                .collect(),
        }
    }
}

fn required_fields_missing() -> AppError {
    DomainError::Validation {
        message: data_item::REQUIRED_FIELDS_MESSAGE,
    }
    .into()
}

fn list_query(params: &[(String, String)]) -> ListItemsQuery {
    let page = first_param(params, "page").and_then(parse_leading_int);
    let limit = first_param(params, "limit").and_then(parse_leading_int);

    ListItemsQuery {
        kind: first_param(params, "type").map(str::to_string),
        page: PageRequest::from_raw(page, limit),
    }
}

#[utoipa::path(
    get,
    path = "/api/data",
    tag = "data",
    params(
        ("page" = Option<String>, Query, description = "1-based page, defaults to 1"),
        ("limit" = Option<String>, Query, description = "Items per page, defaults to 10"),
        ("type" = Option<String>, Query, description = "Only items of this type")
    ),
    responses(
        (status = 200, description = "One page of mock items", body = ApiResponse<Vec<DataItemDto>>)
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    QueryPairs(params): QueryPairs,
) -> Json<ApiResponse<Vec<DataItemDto>>> {
    let query = list_query(&params);
    let page = state.data_service.list_items(&query);
    let pagination = PaginationInfo::from(&page);

    Json(
        ApiResponse::ok(page.items.into_iter().map(DataItemDto::from).collect())
            .with_pagination(pagination),
    )
}

#[utoipa::path(
    get,
    path = "/api/data/{id}",
    tag = "data",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = ApiResponse<DataItemDto>),
        (status = 404, description = "Item not found", body = crate::presentation::app_error::ErrorBody)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<ApiResponse<DataItemDto>>> {
    let item = state.data_service.get_item(id)?;
    Ok(Json(ApiResponse::ok(DataItemDto::from(item))))
}

#[utoipa::path(
    post,
    path = "/api/data",
    tag = "data",
    request_body = CreateDataDto,
    responses(
        (status = 201, description = "Item created (not persisted)", body = ApiResponse<DataItemDto>),
        (status = 400, description = "Title or content missing", body = crate::presentation::app_error::ErrorBody)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateDataDto>,
) -> AppResult<(StatusCode, Json<ApiResponse<DataItemDto>>)> {
    if let Err(err) = dto.validate() {
        debug!(error = %err, "create data item rejected");
        return Err(required_fields_missing());
    }
    let CreateDataDto {
        title: Some(title),
        content: Some(content),
        kind,
        author,
        tags,
    } = dto
    else {
        return Err(required_fields_missing());
    };

    let req = NewDataItem::new(title, content, kind, author, tags)?;
    let created = state.data_service.create_item(req);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(DataItemDto::from(created)).with_message("数据项创建成功")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/data/{id}",
    tag = "data",
    params(
        ("id" = String, Path, description = "Item id; non-numeric ids echo as null")
    ),
    request_body = UpdateDataDto,
    responses(
        (status = 200, description = "Item updated (not persisted)", body = ApiResponse<DataItemDto>),
        (status = 400, description = "Malformed body", body = crate::presentation::app_error::ErrorBody)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(dto): JsonBody<UpdateDataDto>,
) -> AppResult<Json<ApiResponse<DataItemDto>>> {
    let updated = state.data_service.update_item(id, dto.into());

    Ok(Json(
        ApiResponse::ok(DataItemDto::from(updated)).with_message("数据项更新成功"),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/data/{id}",
    tag = "data",
    params(
        ("id" = String, Path, description = "Item id; any value is acknowledged")
    ),
    responses(
        (status = 200, description = "Deletion acknowledged", body = ApiResponse<NoData>)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Json<ApiResponse<NoData>> {
    state.data_service.delete_item(id);
    Json(ApiResponse::message_only(format!("数据项 {id} 删除成功")))
}

#[utoipa::path(
    get,
    path = "/api/data/stats/overview",
    tag = "data",
    responses(
        (status = 200, description = "Constant aggregate figures", body = ApiResponse<DataStatsDto>)
    )
)]
pub async fn stats_overview(State(state): State<AppState>) -> Json<ApiResponse<DataStatsDto>> {
    Json(ApiResponse::ok(DataStatsDto::from(state.data_service.stats())))
}
