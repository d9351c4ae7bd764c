//! Query building helpers shared by the database modules.

use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

/// Append `(?, ?, ...)` binding every id, for use after `IN`
///
/// Callers must not pass an empty slice; `IN ()` is a syntax error in SQLite.
pub fn push_id_list(builder: &mut QueryBuilder<'_, Sqlite>, ids: &[Uuid]) {
    builder.push("(");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
}

/// Deduplicate ids while keeping first-seen order
pub fn unique_ids(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_id_list_sql() {
        let ids = [Uuid::new_v4(), Uuid::new_v4()];
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT 1 WHERE x IN ");
        push_id_list(&mut builder, &ids);
        assert_eq!(builder.sql(), "SELECT 1 WHERE x IN (?, ?)");
    }

    #[test]
    fn test_unique_ids_keeps_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(unique_ids([a, b, a, b]), vec![a, b]);
    }
}
