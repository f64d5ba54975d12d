// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod document_store_datasource;
        pub(crate) mod firestore_datasource;
        pub(crate) mod import_file_datasource;
        pub(crate) mod memory_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod firestore_document_model;
        pub(crate) mod firestore_value_model;
        pub(crate) mod raw_document_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod companies_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod async_state;
        pub(crate) mod company_document;
        pub(crate) mod form_state;
        pub(crate) mod period_data;
        pub(crate) mod steering_index;
        pub(crate) mod view_mode;
    }
    pub(crate) mod logic {
        pub(crate) mod async_reducer;
        pub(crate) mod companies_store;
        pub(crate) mod import_validator;
        mod safe_access;
        pub(crate) mod selection;
        pub(crate) mod shape_mapper;
    }
    pub(crate) mod repositories {
        pub(crate) mod companies_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod companies_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod chart_series;
    pub(crate) mod dashboard_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::async_state::*;
        pub use crate::domain::entities::company_document::*;
        pub use crate::domain::entities::form_state::*;
        pub use crate::domain::entities::period_data::*;
        pub use crate::domain::entities::steering_index::*;
        pub use crate::domain::entities::view_mode::*;
    }

    pub mod datasources {
        pub use crate::data::datasources::document_store_datasource::DocumentStoreDatasource;
        pub use crate::data::datasources::firestore_datasource::FirestoreDatasource;
        pub use crate::data::datasources::memory_datasource::InMemoryDatasource;
        pub use crate::data::models::raw_document_model::RawDocument;
    }

    pub mod reducer {
        pub use crate::domain::logic::async_reducer::*;
    }

    pub mod shape_mapper {
        pub use crate::domain::logic::shape_mapper::{to_document_payload, to_form_state};
    }

    pub mod charts {
        pub use crate::presentation::chart_series::{
            RadarSeries, ScatterPoint, ScatterSeries, RADAR_ORDER,
        };
    }
}
