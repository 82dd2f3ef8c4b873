use chrono::NaiveDate;
use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    NegativeAmount,
    "Negative amount '{value}' for '{field}'. Costs, areas, readings and prepayments must be non-negative.",
    { value: &str, field: &str }
);

// Occupancy-related.
define_client_error!(
    InvalidOccupancy,
    "Tenant '{tenant_id}' moves out ({move_out}) before moving in ({move_in}).",
    { tenant_id: &str, move_in: &NaiveDate, move_out: &NaiveDate }
);
define_client_error!(
    InvalidBillingPeriod,
    "Billing period ends ({end}) before it starts ({start}).",
    { start: &NaiveDate, end: &NaiveDate }
);

// Cost-related.
define_client_error!(
    MissingDistributionMethod,
    "Cost item '{cost_id}' ('{description}') has no distribution method and is not a standard cost type.",
    { cost_id: &str, description: &str }
);
define_client_error!(
    UnknownCostItem,
    "Figure for tenant '{tenant_id}' references unknown cost item '{cost_id}'.",
    { cost_id: &str, tenant_id: &str }
);
