//! Patient visit aggregation report
//!
//! A fixed, parameterless read-only query listing recent high-symptom-count
//! Neurology visits for patients over 50. It shares nothing with the
//! recommendation service and is consumed out of band through the
//! `visit-report` binary; the canonical SQL also ships at
//! `sql/visit_report.sql` for direct use from a database client.

use chrono::NaiveDate;
use deadpool_postgres::Pool;
use thiserror::Error;

/// The report query.
///
/// The left join keeps symptomless visits eligible for grouping; the HAVING
/// filter then drops any group with fewer than 3 recorded symptoms.
pub const VISIT_REPORT_SQL: &str = "\
SELECT p.name,
       p.age,
       v.visit_date,
       COUNT(s.id) AS symptom_count
FROM patients p
JOIN visits v ON v.patient_id = p.id
LEFT JOIN symptoms s ON s.visit_id = v.id
WHERE v.department = 'Neurology'
  AND p.age > 50
GROUP BY p.name, p.age, v.visit_date
HAVING COUNT(s.id) >= 3
ORDER BY v.visit_date DESC
LIMIT 5";

/// One row of the visit report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitReportRow {
    pub name: String,
    pub age: i32,
    pub visit_date: NaiveDate,
    pub symptom_count: i64,
}

/// Report query failure
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Database pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Database error: {0}")]
    Db(#[from] tokio_postgres::Error),
}

/// Run the visit report query
pub async fn fetch_visit_report(pool: &Pool) -> Result<Vec<VisitReportRow>, ReportError> {
    let client = pool.get().await?;
    let rows = client.query(VISIT_REPORT_SQL, &[]).await?;

    Ok(rows
        .iter()
        .map(|row| VisitReportRow {
            name: row.get("name"),
            age: row.get("age"),
            visit_date: row.get("visit_date"),
            symptom_count: row.get("symptom_count"),
        })
        .collect())
}
