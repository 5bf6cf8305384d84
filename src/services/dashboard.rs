//! Dashboard aggregation service
//!
//! Read-only rollups over every entity table. SQL produces the raw counts;
//! totals, functional counts and percentages are derived here so the
//! empty-room rule (0 of 0 equipment counts as 100% functional) is an
//! explicit branch rather than an artifact of NULL arithmetic.

use sqlx::FromRow;

use crate::{
    api::dashboard::{
        CategoryStats, ComputerStats, LabUtilityStats, RecentItems, RoomStats,
        RoomUtilizationRecord, SmartBoardStats, StatisticsReport, TimelineEntry, TimelineReport,
    },
    error::{AppResult, DbContext},
    repository::Repository,
};

/// How many months the installation timeline covers
const TIMELINE_MONTHS: i64 = 12;

/// How many rows per entity the recent-items feed returns
const RECENT_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

/// Raw per-room sums straight out of SQL
#[derive(FromRow)]
struct UtilizationRow {
    id: i32,
    room_name: String,
    room_type: String,
    computer_count: i64,
    smartboard_count: i64,
    utility_count: i64,
    functional_computers: i64,
    functional_smartboards: i64,
    functional_utilities: i64,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Full statistics report for the dashboard landing page
    pub async fn summary(&self) -> AppResult<StatisticsReport> {
        Ok(StatisticsReport {
            computers: self.computer_stats().await?,
            rooms: self.room_stats().await?,
            smart_boards: self.smart_board_stats().await?,
            lab_utilities: self.lab_utility_stats().await?,
            computer_categories: self.category_stats().await?,
            timeline: TimelineReport {
                computers: self.installation_timeline().await?,
            },
            room_utilization: self.room_utilization().await?,
        })
    }

    async fn computer_stats(&self) -> AppResult<ComputerStats> {
        let stats = sqlx::query_as::<_, ComputerStats>(
            r#"
            SELECT
                COUNT(*) AS total_rows,
                COALESCE(SUM(quantity), 0)::bigint AS total,
                COUNT(DISTINCT belongstocategory) AS unique_categories,
                COALESCE(SUM(quantity) FILTER (WHERE status = 'functional'), 0)::bigint AS functional_count,
                COALESCE(SUM(quantity) FILTER (WHERE status = 'maintenance'), 0)::bigint AS maintenance_count,
                COALESCE(SUM(quantity) FILTER (WHERE status = 'retired'), 0)::bigint AS retired_count,
                MIN(install_date) AS oldest_installation,
                MAX(install_date) AS newest_installation
            FROM computer
            "#,
        )
        .fetch_one(&self.repository.pool)
        .await
        .db_context("dashboard.computer_stats")?;
        Ok(stats)
    }

    async fn room_stats(&self) -> AppResult<RoomStats> {
        #[derive(FromRow)]
        struct Row {
            total: i64,
            unique_types: i64,
            functional_count: i64,
            maintenance_count: i64,
            inactive_count: i64,
        }

        let row = sqlx::query_as::<_, Row>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(DISTINCT room_type) AS unique_types,
                COUNT(*) FILTER (WHERE status = 'active') AS functional_count,
                COUNT(*) FILTER (WHERE status = 'maintenance') AS maintenance_count,
                COUNT(*) FILTER (WHERE status = 'inactive') AS inactive_count
            FROM room
            "#,
        )
        .fetch_one(&self.repository.pool)
        .await
        .db_context("dashboard.room_stats")?;

        let types: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT room_type FROM room ORDER BY room_type")
                .fetch_all(&self.repository.pool)
                .await
                .db_context("dashboard.room_stats")?;

        Ok(RoomStats {
            total: row.total,
            unique_types: row.unique_types,
            types,
            functional_count: row.functional_count,
            maintenance_count: row.maintenance_count,
            inactive_count: row.inactive_count,
        })
    }

    async fn smart_board_stats(&self) -> AppResult<SmartBoardStats> {
        let stats = sqlx::query_as::<_, SmartBoardStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(DISTINCT model_id) AS unique_models,
                COUNT(*) FILTER (WHERE status = 'functional') AS functional_count,
                COUNT(*) FILTER (WHERE status = 'maintenance') AS maintenance_count,
                COUNT(*) FILTER (WHERE status = 'retired') AS retired_count,
                MIN(installed_date) AS oldest_installation,
                MAX(installed_date) AS newest_installation
            FROM smart_board
            "#,
        )
        .fetch_one(&self.repository.pool)
        .await
        .db_context("dashboard.smart_board_stats")?;
        Ok(stats)
    }

    async fn lab_utility_stats(&self) -> AppResult<LabUtilityStats> {
        let stats = sqlx::query_as::<_, LabUtilityStats>(
            r#"
            SELECT
                COUNT(*) AS total_rows,
                COALESCE(SUM(quantity), 0)::bigint AS total,
                COALESCE(SUM(quantity) FILTER (WHERE status = 'functional'), 0)::bigint AS functional_count,
                COALESCE(SUM(quantity) FILTER (WHERE status = 'maintenance'), 0)::bigint AS maintenance_count,
                COALESCE(SUM(quantity) FILTER (WHERE status = 'retired'), 0)::bigint AS retired_count,
                COALESCE(AVG(quantity), 0)::float8 AS average_quantity
            FROM lab_utility
            "#,
        )
        .fetch_one(&self.repository.pool)
        .await
        .db_context("dashboard.lab_utility_stats")?;
        Ok(stats)
    }

    async fn category_stats(&self) -> AppResult<CategoryStats> {
        let stats = sqlx::query_as::<_, CategoryStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(DISTINCT model_release_date) AS unique_release_years,
                MIN(model_release_date) AS oldest_model,
                MAX(model_release_date) AS newest_model
            FROM computer_cat
            "#,
        )
        .fetch_one(&self.repository.pool)
        .await
        .db_context("dashboard.category_stats")?;
        Ok(stats)
    }

    /// Computers grouped by install month (nulls excluded), quantity summed,
    /// newest month first, capped at the most recent twelve months
    pub async fn installation_timeline(&self) -> AppResult<Vec<TimelineEntry>> {
        let entries = sqlx::query_as::<_, TimelineEntry>(
            r#"
            SELECT
                TO_CHAR(install_date, 'YYYY-MM') AS month,
                COALESCE(SUM(quantity), 0)::bigint AS installations
            FROM computer
            WHERE install_date IS NOT NULL
            GROUP BY TO_CHAR(install_date, 'YYYY-MM')
            ORDER BY month DESC
            LIMIT $1
            "#,
        )
        .bind(TIMELINE_MONTHS)
        .fetch_all(&self.repository.pool)
        .await
        .db_context("dashboard.installation_timeline")?;
        Ok(entries)
    }

    /// Per-room equipment rollup for every room, ordered by total equipment
    /// descending. Computers and utilities contribute their quantity; smart
    /// boards contribute one per row.
    pub async fn room_utilization(&self) -> AppResult<Vec<RoomUtilizationRecord>> {
        let rows = sqlx::query_as::<_, UtilizationRow>(
            r#"
            SELECT
                r.id,
                r.label AS room_name,
                r.room_type,
                COALESCE((SELECT SUM(c.quantity) FROM computer c
                          WHERE c.isassignedto = r.id), 0)::bigint AS computer_count,
                (SELECT COUNT(*) FROM smart_board s
                 WHERE s.isassignedto = r.id) AS smartboard_count,
                COALESCE((SELECT SUM(l.quantity) FROM lab_utility l
                          WHERE l.isassignedto = r.id), 0)::bigint AS utility_count,
                COALESCE((SELECT SUM(c.quantity) FROM computer c
                          WHERE c.isassignedto = r.id AND c.status = 'functional'), 0)::bigint AS functional_computers,
                (SELECT COUNT(*) FROM smart_board s
                 WHERE s.isassignedto = r.id AND s.status = 'functional') AS functional_smartboards,
                COALESCE((SELECT SUM(l.quantity) FROM lab_utility l
                          WHERE l.isassignedto = r.id AND l.status = 'functional'), 0)::bigint AS functional_utilities
            FROM room r
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await
        .db_context("dashboard.room_utilization")?;

        let mut records: Vec<RoomUtilizationRecord> = rows
            .into_iter()
            .map(|row| {
                let total = row.computer_count + row.smartboard_count + row.utility_count;
                let functional = row.functional_computers
                    + row.functional_smartboards
                    + row.functional_utilities;
                RoomUtilizationRecord {
                    id: row.id,
                    room_name: row.room_name,
                    room_type: row.room_type,
                    functional_percentage: functional_percentage(functional, total),
                    computer_functional_percentage: functional_percentage(
                        row.functional_computers,
                        row.computer_count,
                    ),
                    smartboard_functional_percentage: functional_percentage(
                        row.functional_smartboards,
                        row.smartboard_count,
                    ),
                    utility_functional_percentage: functional_percentage(
                        row.functional_utilities,
                        row.utility_count,
                    ),
                    computer_count: row.computer_count,
                    smartboard_count: row.smartboard_count,
                    utility_count: row.utility_count,
                    functional_computers: row.functional_computers,
                    functional_smartboards: row.functional_smartboards,
                    functional_utilities: row.functional_utilities,
                    total_equipment: total,
                    functional_equipment: functional,
                }
            })
            .collect();

        // Busiest rooms first; id breaks ties so the order is stable
        records.sort_by(|a, b| {
            b.total_equipment
                .cmp(&a.total_equipment)
                .then(a.id.cmp(&b.id))
        });
        Ok(records)
    }

    /// Most recently created rows per entity, by id descending
    pub async fn recent(&self) -> AppResult<RecentItems> {
        Ok(RecentItems {
            computers: self.repository.computers.recent(RECENT_LIMIT).await?,
            rooms: self.repository.rooms.recent(RECENT_LIMIT).await?,
            smart_boards: self.repository.smart_boards.recent(RECENT_LIMIT).await?,
            lab_utilities: self.repository.lab_utilities.recent(RECENT_LIMIT).await?,
        })
    }
}

/// Share of functional equipment, rounded to one decimal place.
/// A room with no equipment counts as fully functional, not undefined.
fn functional_percentage(functional: i64, total: i64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (functional as f64 / total as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_room_is_fully_functional() {
        assert_eq!(functional_percentage(0, 0), 100.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(functional_percentage(1, 3), 33.3);
        assert_eq!(functional_percentage(2, 3), 66.7);
        assert_eq!(functional_percentage(1, 8), 12.5);
        assert_eq!(functional_percentage(5, 5), 100.0);
        assert_eq!(functional_percentage(0, 7), 0.0);
    }

    #[test]
    fn quantity_weighted_counts_feed_the_percentage() {
        // One computer row with quantity 5, all functional: 5 of 5
        assert_eq!(functional_percentage(5, 5), 100.0);
        // 3 functional of a quantity-weighted total of 9
        assert_eq!(functional_percentage(3, 9), 33.3);
    }
}
