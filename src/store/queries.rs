/// Insert or overwrite a record
pub const UPSERT_FURNITURE: &str = r#"
    INSERT INTO furniture (id, record)
    VALUES ($1, $2)
    ON CONFLICT (id) DO UPDATE SET record = EXCLUDED.record
"#;

/// Single record lookup
pub const GET_FURNITURE: &str = "SELECT record FROM furniture WHERE id = $1";

/// Delete and return the removed record
pub const DELETE_FURNITURE: &str = "DELETE FROM furniture WHERE id = $1 RETURNING record";

/// All records, key order
pub const GET_ALL_FURNITURE: &str = "SELECT record FROM furniture ORDER BY id";
