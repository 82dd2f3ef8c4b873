// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod costs_csv_datasource;
        pub(crate) mod figures_csv_datasource;
        pub(crate) mod prepayments_csv_datasource;
        pub(crate) mod tenants_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod distribution_method_model;
        pub(crate) mod iso_currency_code_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod settlement_inputs_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod billing_period;
        pub(crate) mod cost_item;
        pub(crate) mod distribution;
        pub(crate) mod prepayment;
        pub(crate) mod settings;
        pub(crate) mod settlement;
        pub(crate) mod tenant_occupancy;
    }
    pub(crate) mod logic {
        pub(crate) mod distribution_strategies;
        pub(crate) mod occupancy;
        pub(crate) mod prepayment_reconciler;
        pub(crate) mod rounding;
        pub(crate) mod settlement_processor;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod settlement_inputs_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod settlement_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod month_label_fmt;
    pub(crate) mod settlement_printer;
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
        pub use crate::domain::entities::billing_period::*;
        pub use crate::domain::entities::cost_item::*;
        pub use crate::domain::entities::distribution::*;
        pub use crate::domain::entities::prepayment::*;
        pub use crate::domain::entities::settings::*;
        pub use crate::domain::entities::settlement::*;
        pub use crate::domain::entities::tenant_occupancy::*;
    }

    pub mod logic {
        pub use crate::domain::logic::distribution_strategies::{
            distribute, distribute_by_area, distribute_by_consumption, distribute_by_invoice,
            distribute_per_tenant, distribute_per_unit,
        };
        pub use crate::domain::logic::occupancy::{
            is_active_in_month, overlap_days, period_days,
        };
        pub use crate::domain::logic::prepayment_reconciler::reconcile_prepayments;
        pub use crate::domain::logic::rounding::round_distribution;
        pub use crate::domain::logic::settlement_processor::SettlementProcessor;
    }

    pub mod formatting {
        pub use crate::presentation::month_label_fmt::{month_label, MonthLabelLocale};
        pub use crate::presentation::utils::format_amount;
    }
}
