use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::item::use_cases::resolve::{ResolveProductParams, ResolveProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductInfoResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    resolve_use_case: Arc<dyn ResolveProductUseCase>,
}

impl ProductApi {
    pub fn new(resolve_use_case: Arc<dyn ResolveProductUseCase>) -> Self {
        Self { resolve_use_case }
    }
}

#[OpenApi]
impl ProductApi {
    /// Resolve a barcode
    ///
    /// Uses items already in the fridge when possible, otherwise asks Open Food Facts.
    /// Nothing is stored.
    #[oai(path = "/products/resolve", method = "get", tag = "ApiTags::Products")]
    async fn resolve_product(&self, barcode: Query<String>) -> ResolveProductResponse {
        match self
            .resolve_use_case
            .execute(ResolveProductParams { barcode: barcode.0 })
            .await
        {
            Ok(product) => ResolveProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ResolveProductResponse::BadRequest(json),
                    502 => ResolveProductResponse::BadGateway(json),
                    _ => ResolveProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResolveProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductInfoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
