use std::sync::Arc;

use anyhow::Context;
use sqlx::SqlitePool;

use logger::TracingLogger;
use openfoodfacts::client::FoodApiClient;
use openfoodfacts::product_lookup::ProductLookupOpenFoodFacts;
use persistence::item::repository::ItemRepositorySqlite;

use business::application::item::add::AddItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_by_barcode::GetItemsByBarcodeUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::get_fridge::GetFridgeUseCaseImpl;
use business::application::item::get_home::GetHomeItemsUseCaseImpl;
use business::application::item::get_top::GetTopItemsUseCaseImpl;
use business::application::item::increase_quantity::IncreaseQuantityUseCaseImpl;
use business::application::item::resolve::ResolveProductUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;

use crate::config::food_api_config::FoodApiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub fridge_api: crate::api::item::routes::FridgeApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: SqlitePool, food_api: &FoodApiConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let item_repository = Arc::new(ItemRepositorySqlite::new(pool));
        let food_api_client = FoodApiClient::new(food_api.base_url.clone(), food_api.timeout)
            .context("Failed to build the product lookup HTTP client")?;
        let product_lookup = Arc::new(ProductLookupOpenFoodFacts::new(food_api_client));

        // Item use cases
        let resolve_use_case = Arc::new(ResolveProductUseCaseImpl {
            repository: item_repository.clone(),
            lookup: product_lookup,
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddItemUseCaseImpl {
            repository: item_repository.clone(),
            resolver: resolve_use_case.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_barcode_use_case = Arc::new(GetItemsByBarcodeUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_fridge_use_case = Arc::new(GetFridgeUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_top_use_case = Arc::new(GetTopItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_home_use_case = Arc::new(GetHomeItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let increase_quantity_use_case = Arc::new(IncreaseQuantityUseCaseImpl {
            repository: item_repository,
            logger,
        });

        let fridge_api = crate::api::item::routes::FridgeApi::new(
            add_use_case,
            get_by_id_use_case,
            get_by_barcode_use_case,
            get_fridge_use_case,
            get_top_use_case,
            get_home_use_case,
            update_use_case,
            delete_use_case,
            increase_quantity_use_case,
        );

        let product_api = crate::api::product::routes::ProductApi::new(resolve_use_case);

        Ok(Self {
            health_api,
            fridge_api,
            product_api,
        })
    }
}
