//! Repository layer for database operations

pub mod categories;
pub mod computers;
pub mod lab_utilities;
pub mod rooms;
pub mod smart_boards;
pub mod update;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub rooms: rooms::RoomsRepository,
    pub categories: categories::CategoriesRepository,
    pub computers: computers::ComputersRepository,
    pub smart_boards: smart_boards::SmartBoardsRepository,
    pub lab_utilities: lab_utilities::LabUtilitiesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            rooms: rooms::RoomsRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            computers: computers::ComputersRepository::new(pool.clone()),
            smart_boards: smart_boards::SmartBoardsRepository::new(pool.clone()),
            lab_utilities: lab_utilities::LabUtilitiesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
