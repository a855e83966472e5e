pub mod application {
    pub mod item {
        pub mod add;
        pub mod delete;
        pub mod get_by_barcode;
        pub mod get_by_id;
        pub mod get_fridge;
        pub mod get_home;
        pub mod get_top;
        pub mod increase_quantity;
        pub mod resolve;
        pub mod update;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod item {
        pub mod aggregation;
        pub mod errors;
        pub mod fridge_entry;
        pub mod model;
        pub mod product_info;
        pub mod repository;
        pub mod services;
        pub mod urgency;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add;
            pub mod delete;
            pub mod get_by_barcode;
            pub mod get_by_id;
            pub mod get_fridge;
            pub mod get_home;
            pub mod get_top;
            pub mod increase_quantity;
            pub mod resolve;
            pub mod update;
        }
    }
}
