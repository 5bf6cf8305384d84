//! Business logic services

pub mod categories;
pub mod computers;
pub mod dashboard;
pub mod lab_utilities;
pub mod rooms;
pub mod smart_boards;
pub mod storage;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub rooms: rooms::RoomsService,
    pub categories: categories::CategoriesService,
    pub computers: computers::ComputersService,
    pub smart_boards: smart_boards::SmartBoardsService,
    pub lab_utilities: lab_utilities::LabUtilitiesService,
    pub users: users::UsersService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository and file storage
    pub fn new(repository: Repository, storage: storage::StorageService) -> Self {
        Self {
            rooms: rooms::RoomsService::new(repository.clone(), storage.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            computers: computers::ComputersService::new(repository.clone()),
            smart_boards: smart_boards::SmartBoardsService::new(repository.clone(), storage),
            lab_utilities: lab_utilities::LabUtilitiesService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}

/// Report the names of required fields that are missing or blank
pub(crate) fn require_fields(missing: Vec<&str>) -> crate::error::AppResult<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(crate::error::AppError::Validation(format!(
            "Required fields missing: {}",
            missing.join(", ")
        )))
    }
}

/// A supplied quantity must be a positive unit count
pub(crate) fn validate_quantity(quantity: i32) -> crate::error::AppResult<()> {
    if quantity < 1 {
        return Err(crate::error::AppError::Validation(
            "quantity must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
