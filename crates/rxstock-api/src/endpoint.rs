//! The closed catalog of backend operations.
//!
//! Each variant resolves to exactly one path/method pair plus two auth
//! flags. Both flags default to `true`; the allow-list of unauthenticated
//! routes in [`Endpoint::requires_device_token`] and
//! [`Endpoint::requires_session_token`] must match the backend's actual open
//! routes — a mismatch there is a security or availability bug, not a
//! client-side design choice.

use reqwest::Method;

/// One remote operation. Parameterized variants carry the opaque string
/// identifiers their path interpolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // Device and employee auth.
    ActivateDevice,
    PinLogin,
    PinLogout,
    SetupStatus,
    SetupSync,
    InitialSetup,

    // Dashboard.
    DashboardReport,

    // Product catalog.
    ListProducts,
    GetProduct { id: String },
    CreateProduct,
    UpdateProduct { id: String },
    ArchiveProduct { id: String },
    SearchProducts,
    LookupBarcode { code: String },
    ProductBatches { id: String },
    ProductValuation { id: String },
    ProductAging { id: String },
    ProductMovements { id: String },
    ListCategories,
    CreateCategory,

    // Inventory actions.
    ReceiveInventory,
    CreateAdjustment,
    ListAdjustments,
    GetAdjustment { id: String },
    CreateTransfer,
    ListTransfers,
    GetTransfer { id: String },
    ListReceivings,
    GetReceiving { id: String },
    ExpiringProducts,
    StockAlerts,
    LowStock,
    StockOnHand { product_id: String },
    BatchDetail { id: String },

    // Suppliers.
    ListSuppliers,
    GetSupplier { id: String },
    CreateSupplier,
    UpdateSupplier { id: String },
    DeactivateSupplier { id: String },
    SupplierCatalog { id: String },

    // Locations.
    ListLocations,
    GetLocation { id: String },
    LocationStock { id: String },

    // Employees.
    ListEmployees,
    GetEmployee { id: String },
    CreateEmployee,
    UpdateEmployee { id: String },
    DeactivateEmployee { id: String },

    // Sales.
    ListSales,
    CreateSale,
    GetSale { id: String },
    VoidSale { id: String },

    // Expenses.
    ListExpenses,
    CreateExpense,
    GetExpense { id: String },
    DeleteExpense { id: String },

    // Reports.
    CogsReport,
    ValuationReport,
    SalesReport,
    AgingReport,
    ExpenseReport,

    // Shopping lists (server-side counterpart of the local store).
    SubmitShoppingList,
    ReceiveShoppingList { id: String },
}

impl Endpoint {
    /// Path relative to the API base URL. Pure and total for valid
    /// identifiers; identifiers are interpolated verbatim and rely on
    /// standard URL component encoding at request build time.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Endpoint::ActivateDevice => "devices/activate".to_owned(),
            Endpoint::PinLogin => "auth/pin-login".to_owned(),
            Endpoint::PinLogout => "auth/logout".to_owned(),
            Endpoint::SetupStatus => "setup/status".to_owned(),
            Endpoint::SetupSync => "setup/sync".to_owned(),
            Endpoint::InitialSetup => "setup/initial".to_owned(),

            Endpoint::DashboardReport => "reports/dashboard".to_owned(),

            Endpoint::ListProducts | Endpoint::CreateProduct => "products".to_owned(),
            Endpoint::GetProduct { id }
            | Endpoint::UpdateProduct { id }
            | Endpoint::ArchiveProduct { id } => format!("products/{id}"),
            Endpoint::SearchProducts => "products/search".to_owned(),
            Endpoint::LookupBarcode { code } => format!("products/barcode/{code}"),
            Endpoint::ProductBatches { id } => format!("products/{id}/batches"),
            Endpoint::ProductValuation { id } => format!("products/{id}/valuation"),
            Endpoint::ProductAging { id } => format!("products/{id}/aging"),
            Endpoint::ProductMovements { id } => format!("products/{id}/movements"),
            Endpoint::ListCategories | Endpoint::CreateCategory => "categories".to_owned(),

            Endpoint::ReceiveInventory => "inventory/receive".to_owned(),
            Endpoint::CreateAdjustment | Endpoint::ListAdjustments => {
                "inventory/adjustments".to_owned()
            }
            Endpoint::GetAdjustment { id } => format!("inventory/adjustments/{id}"),
            Endpoint::CreateTransfer | Endpoint::ListTransfers => "inventory/transfers".to_owned(),
            Endpoint::GetTransfer { id } => format!("inventory/transfers/{id}"),
            Endpoint::ListReceivings => "inventory/receivings".to_owned(),
            Endpoint::GetReceiving { id } => format!("inventory/receivings/{id}"),
            Endpoint::ExpiringProducts => "inventory/expiring".to_owned(),
            Endpoint::StockAlerts => "inventory/stock-alerts".to_owned(),
            Endpoint::LowStock => "inventory/low-stock".to_owned(),
            Endpoint::StockOnHand { product_id } => format!("inventory/stock/{product_id}"),
            Endpoint::BatchDetail { id } => format!("inventory/batches/{id}"),

            Endpoint::ListSuppliers | Endpoint::CreateSupplier => "suppliers".to_owned(),
            Endpoint::GetSupplier { id }
            | Endpoint::UpdateSupplier { id }
            | Endpoint::DeactivateSupplier { id } => format!("suppliers/{id}"),
            Endpoint::SupplierCatalog { id } => format!("suppliers/{id}/catalog"),

            Endpoint::ListLocations => "locations".to_owned(),
            Endpoint::GetLocation { id } => format!("locations/{id}"),
            Endpoint::LocationStock { id } => format!("locations/{id}/stock"),

            Endpoint::ListEmployees | Endpoint::CreateEmployee => "employees".to_owned(),
            Endpoint::GetEmployee { id }
            | Endpoint::UpdateEmployee { id }
            | Endpoint::DeactivateEmployee { id } => format!("employees/{id}"),

            Endpoint::ListSales | Endpoint::CreateSale => "sales".to_owned(),
            Endpoint::GetSale { id } => format!("sales/{id}"),
            Endpoint::VoidSale { id } => format!("sales/{id}/void"),

            Endpoint::ListExpenses | Endpoint::CreateExpense => "expenses".to_owned(),
            Endpoint::GetExpense { id } | Endpoint::DeleteExpense { id } => {
                format!("expenses/{id}")
            }

            Endpoint::CogsReport => "reports/cogs".to_owned(),
            Endpoint::ValuationReport => "reports/valuation".to_owned(),
            Endpoint::SalesReport => "reports/sales".to_owned(),
            Endpoint::AgingReport => "reports/aging".to_owned(),
            Endpoint::ExpenseReport => "reports/expenses".to_owned(),

            Endpoint::SubmitShoppingList => "shopping-lists/submit".to_owned(),
            Endpoint::ReceiveShoppingList { id } => format!("shopping-lists/{id}/receive"),
        }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ActivateDevice
            | Endpoint::PinLogin
            | Endpoint::PinLogout
            | Endpoint::SetupSync
            | Endpoint::InitialSetup
            | Endpoint::CreateProduct
            | Endpoint::CreateCategory
            | Endpoint::ReceiveInventory
            | Endpoint::CreateAdjustment
            | Endpoint::CreateTransfer
            | Endpoint::CreateSupplier
            | Endpoint::CreateEmployee
            | Endpoint::CreateSale
            | Endpoint::VoidSale { .. }
            | Endpoint::CreateExpense
            | Endpoint::SubmitShoppingList
            | Endpoint::ReceiveShoppingList { .. } => Method::POST,

            Endpoint::UpdateProduct { .. } | Endpoint::UpdateSupplier { .. } => Method::PUT,

            Endpoint::UpdateEmployee { .. } => Method::PATCH,

            Endpoint::ArchiveProduct { .. }
            | Endpoint::DeactivateSupplier { .. }
            | Endpoint::DeactivateEmployee { .. }
            | Endpoint::DeleteExpense { .. } => Method::DELETE,

            _ => Method::GET,
        }
    }

    /// Whether the device-level bearer token must be attached.
    ///
    /// `false` only for routes reachable before the device has been
    /// activated.
    #[must_use]
    pub fn requires_device_token(&self) -> bool {
        !matches!(
            self,
            Endpoint::ActivateDevice | Endpoint::SetupStatus | Endpoint::InitialSetup
        )
    }

    /// Whether the per-employee session token must be attached.
    ///
    /// `false` for the pre-activation routes plus the two device-scoped
    /// setup operations that run before any employee has logged in.
    #[must_use]
    pub fn requires_session_token(&self) -> bool {
        !matches!(
            self,
            Endpoint::ActivateDevice
                | Endpoint::PinLogin
                | Endpoint::SetupStatus
                | Endpoint::SetupSync
                | Endpoint::InitialSetup
        )
    }
}
