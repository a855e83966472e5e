use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::application::item::get_home::HOME_WIDGET_LIMIT;
use business::domain::item::model::Item;
use business::domain::item::use_cases::add::{AddItemParams, AddItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_by_barcode::{
    GetItemsByBarcodeParams, GetItemsByBarcodeUseCase,
};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::get_fridge::GetFridgeUseCase;
use business::domain::item::use_cases::get_home::GetHomeItemsUseCase;
use business::domain::item::use_cases::get_top::{GetTopItemsParams, GetTopItemsUseCase};
use business::domain::item::use_cases::increase_quantity::{
    IncreaseQuantityParams, IncreaseQuantityUseCase,
};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{
    AddItemRequest, FridgeEntryResponse, HomeItemsResponse, IncreaseQuantityRequest,
    ItemResponse, ItemsByBarcodeResponse, UpdateItemRequest,
};
use crate::api::tags::ApiTags;

const DEFAULT_SORT: &str = "latest";

pub struct FridgeApi {
    add_use_case: Arc<dyn AddItemUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    get_by_barcode_use_case: Arc<dyn GetItemsByBarcodeUseCase>,
    get_fridge_use_case: Arc<dyn GetFridgeUseCase>,
    get_top_use_case: Arc<dyn GetTopItemsUseCase>,
    get_home_use_case: Arc<dyn GetHomeItemsUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
    increase_quantity_use_case: Arc<dyn IncreaseQuantityUseCase>,
}

impl FridgeApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        add_use_case: Arc<dyn AddItemUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        get_by_barcode_use_case: Arc<dyn GetItemsByBarcodeUseCase>,
        get_fridge_use_case: Arc<dyn GetFridgeUseCase>,
        get_top_use_case: Arc<dyn GetTopItemsUseCase>,
        get_home_use_case: Arc<dyn GetHomeItemsUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
        increase_quantity_use_case: Arc<dyn IncreaseQuantityUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            get_by_id_use_case,
            get_by_barcode_use_case,
            get_fridge_use_case,
            get_top_use_case,
            get_home_use_case,
            update_use_case,
            delete_use_case,
            increase_quantity_use_case,
        }
    }
}

/// Fridge inventory API
///
/// Endpoints for registering items and reading the aggregated fridge.
#[OpenApi]
impl FridgeApi {
    /// List the fridge
    ///
    /// One entry per barcode, soonest expiring first.
    #[oai(path = "/fridge", method = "get", tag = "ApiTags::Fridge")]
    async fn get_fridge(&self) -> FridgeListResponse {
        match self.get_fridge_use_case.execute().await {
            Ok(entries) => FridgeListResponse::Ok(Json(FridgeEntryResponse::list(entries))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FridgeListResponse::BadRequest(json),
                    _ => FridgeListResponse::InternalError(json),
                }
            }
        }
    }

    /// Items of one barcode
    ///
    /// Every stored item sharing the barcode, soonest expiring first.
    #[oai(path = "/fridge/details", method = "get", tag = "ApiTags::Fridge")]
    async fn get_fridge_details(&self, barcode: Query<String>) -> FridgeDetailsResponse {
        match self
            .get_by_barcode_use_case
            .execute(GetItemsByBarcodeParams { barcode: barcode.0 })
            .await
        {
            Ok(result) => FridgeDetailsResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FridgeDetailsResponse::BadRequest(json),
                    _ => FridgeDetailsResponse::InternalError(json),
                }
            }
        }
    }

    /// Home page widgets
    ///
    /// The most recently added and the soonest expiring entries.
    #[oai(path = "/fridge/home-items", method = "get", tag = "ApiTags::Fridge")]
    async fn get_home_items(&self) -> HomeItemsApiResponse {
        match self.get_home_use_case.execute().await {
            Ok(home) => HomeItemsApiResponse::Ok(Json(home.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                HomeItemsApiResponse::InternalError(json)
            }
        }
    }

    /// Top entries
    ///
    /// At most `limit` entries ordered by `sort` (`latest` or `expiring`).
    #[oai(path = "/fridge/top", method = "get", tag = "ApiTags::Fridge")]
    async fn get_top_items(
        &self,
        /// Maximum number of entries (default: 10)
        limit: Query<Option<usize>>,
        /// Ordering, `latest` or `expiring` (default: latest)
        sort: Query<Option<String>>,
    ) -> FridgeListResponse {
        let params = GetTopItemsParams {
            limit: limit.0.unwrap_or(HOME_WIDGET_LIMIT),
            sort: sort.0.unwrap_or_else(|| DEFAULT_SORT.to_string()),
        };

        match self.get_top_use_case.execute(params).await {
            Ok(entries) => FridgeListResponse::Ok(Json(FridgeEntryResponse::list(entries))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FridgeListResponse::BadRequest(json),
                    _ => FridgeListResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item
    ///
    /// Registers one unit. Without a name the product is resolved from the barcode.
    #[oai(path = "/fridge/items", method = "post", tag = "ApiTags::Fridge")]
    async fn add_item(&self, body: Json<AddItemRequest>) -> AddItemResponse {
        let params = AddItemParams {
            barcode: body.0.barcode,
            name: body.0.name,
            brand: body.0.brand,
            expiration_date: body.0.expiration_date,
            addition_date: body.0.addition_date,
            is_manual: body.0.is_manual,
        };

        match self.add_use_case.execute(params).await {
            Ok(item) => AddItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    502 => AddItemResponse::BadGateway(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item by ID
    #[oai(path = "/fridge/items/:id", method = "get", tag = "ApiTags::Fridge")]
    async fn get_item_by_id(&self, id: Path<String>) -> ItemApiResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return ItemApiResponse::BadRequest(ErrorResponse::invalid_id());
        };

        let result = self
            .get_by_id_use_case
            .execute(GetItemByIdParams { id })
            .await;
        ItemApiResponse::from_result(result)
    }

    /// Update an item
    ///
    /// Changes name, brand and expiration. Barcode and addition date are fixed.
    #[oai(path = "/fridge/items/:id", method = "put", tag = "ApiTags::Fridge")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> ItemApiResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return ItemApiResponse::BadRequest(ErrorResponse::invalid_id());
        };

        let params = UpdateItemParams {
            id,
            name: body.0.name,
            brand: body.0.brand,
            expiration_date: body.0.expiration_date,
        };
        ItemApiResponse::from_result(self.update_use_case.execute(params).await)
    }

    /// Increase the quantity of an item
    #[oai(path = "/fridge/items/:id/quantity", method = "post", tag = "ApiTags::Fridge")]
    async fn increase_quantity(
        &self,
        id: Path<String>,
        body: Json<IncreaseQuantityRequest>,
    ) -> ItemApiResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return ItemApiResponse::BadRequest(ErrorResponse::invalid_id());
        };

        let params = IncreaseQuantityParams {
            id,
            delta: body.0.delta,
        };
        ItemApiResponse::from_result(self.increase_quantity_use_case.execute(params).await)
    }

    /// Delete an item
    ///
    /// Deleting an unknown item succeeds.
    #[oai(path = "/fridge/items/:id", method = "delete", tag = "ApiTags::Fridge")]
    async fn delete_item(&self, id: Path<String>) -> DeleteItemResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteItemResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self.delete_use_case.execute(DeleteItemParams { id }).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteItemResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FridgeListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FridgeEntryResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FridgeDetailsResponse {
    #[oai(status = 200)]
    Ok(Json<ItemsByBarcodeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum HomeItemsApiResponse {
    #[oai(status = 200)]
    Ok(Json<HomeItemsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ItemApiResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemApiResponse {
    fn from_result<E: IntoErrorResponse>(result: Result<Item, E>) -> Self {
        match result {
            Ok(item) => ItemApiResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ItemApiResponse::BadRequest(json),
                    404 => ItemApiResponse::NotFound(json),
                    _ => ItemApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
