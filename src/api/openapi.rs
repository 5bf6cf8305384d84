//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    categories, computers, dashboard, health, lab_utilities, rooms, smart_boards, users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabTrack API",
        version = "1.0.0",
        description = "Lab & Classroom Inventory Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::room_details,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        rooms::upload_room_image,
        rooms::room_image,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::category_computers,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Computers
        computers::list_computers,
        computers::get_computer,
        computers::create_computer,
        computers::update_computer,
        computers::delete_computer,
        // Smart boards
        smart_boards::list_smart_boards,
        smart_boards::get_smart_board,
        smart_boards::create_smart_board,
        smart_boards::update_smart_board,
        smart_boards::delete_smart_board,
        smart_boards::upload_smart_board_image,
        smart_boards::smart_board_image,
        // Lab utilities
        lab_utilities::list_lab_utilities,
        lab_utilities::get_lab_utility,
        lab_utilities::create_lab_utility,
        lab_utilities::update_lab_utility,
        lab_utilities::delete_lab_utility,
        // Dashboard
        dashboard::summary,
        dashboard::recent,
        // Users
        users::login_validate,
        users::register,
        users::user_info,
        users::update_user,
    ),
    components(
        schemas(
            // Rooms
            crate::models::room::Room,
            crate::models::room::CreateRoom,
            crate::models::room::UpdateRoom,
            crate::models::room::RoomDetails,
            crate::models::room::RoomDependents,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            crate::models::category::UpdateCategory,
            crate::models::category::CategoryComputers,
            // Computers
            crate::models::computer::Computer,
            crate::models::computer::CreateComputer,
            crate::models::computer::UpdateComputer,
            // Smart boards
            crate::models::smart_board::SmartBoard,
            crate::models::smart_board::CreateSmartBoard,
            crate::models::smart_board::UpdateSmartBoard,
            // Lab utilities
            crate::models::lab_utility::LabUtility,
            crate::models::lab_utility::CreateLabUtility,
            crate::models::lab_utility::UpdateLabUtility,
            // Users
            crate::models::user::UserInfo,
            crate::models::user::LoginRequest,
            crate::models::user::RegisterUser,
            crate::models::user::UpdateUser,
            // Dashboard
            dashboard::StatisticsReport,
            dashboard::ComputerStats,
            dashboard::RoomStats,
            dashboard::SmartBoardStats,
            dashboard::LabUtilityStats,
            dashboard::CategoryStats,
            dashboard::TimelineReport,
            dashboard::TimelineEntry,
            dashboard::RoomUtilizationRecord,
            dashboard::RecentItems,
            // Shared responses
            crate::api::MessageResponse,
            crate::api::CreatedResponse,
            crate::api::UploadImageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rooms", description = "Room management"),
        (name = "categories", description = "Computer category management"),
        (name = "computers", description = "Computer inventory"),
        (name = "smart-boards", description = "Smart board inventory"),
        (name = "lab-utilities", description = "Lab utility inventory"),
        (name = "dashboard", description = "Aggregated statistics"),
        (name = "users", description = "User accounts")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
