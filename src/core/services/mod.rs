pub mod appointment_service;
pub mod catalog_service;
pub mod category_service;
pub mod profile_service;
pub mod summary_service;

pub use appointment_service::{
    AppointmentFilter, AppointmentService, DateFilter, StatusFilter,
};
pub use catalog_service::CatalogService;
pub use category_service::CategoryService;
pub use profile_service::ProfileService;
pub use summary_service::{BusinessOverview, SummaryService};
