/// Product primary keys are PostgreSQL UUIDs (`gen_random_uuid()`).
pub type ProductId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
