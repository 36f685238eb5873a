//! Composable query layer
//!
//! Per-entity query values built from four composable operations:
//! `all`, `active`, `search` and `filtered_search`. A [`Select`] is plain
//! data — building one never touches the store. Evaluation happens only
//! when a caller forces materialization through [`Select::fetch`] or
//! [`Select::page`], which run a single SELECT (results are deduplicated by
//! construction) in the entity's natural order (alphabetical by name).

use serde::de::DeserializeOwned;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::repository::RepoResult;

/// Static query description for one entity type: its table, the flag that
/// marks a record as active, the fixed field set substring search runs
/// over, and the record links each row must carry when materialized.
#[derive(Debug)]
pub struct QuerySpec {
    pub table: &'static str,
    pub active_flag: &'static str,
    pub search_fields: &'static [&'static str],
    pub fetch: &'static [&'static str],
}

/// A lazy, composable SELECT over one entity table.
///
/// Every combinator consumes and returns the value, so composition is
/// side-effect-free; two `Select`s built from the same [`QuerySpec`] never
/// share state.
#[derive(Debug, Clone)]
pub struct Select {
    spec: &'static QuerySpec,
    conditions: Vec<String>,
    bindings: Vec<(String, Value)>,
}

impl Select {
    /// The unfiltered set, natural ordering.
    pub fn all(spec: &'static QuerySpec) -> Self {
        Self {
            spec,
            conditions: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Restrict to records whose active flag is set.
    pub fn active(mut self) -> Self {
        self.conditions
            .push(format!("{} = true", self.spec.active_flag));
        self
    }

    /// Case-insensitive substring match across the entity's search fields,
    /// OR-combined. An empty or whitespace-only term adds no predicate, so
    /// the result is the corresponding unfiltered set.
    pub fn search(mut self, term: &str) -> Self {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self;
        }

        let lookups = self
            .spec
            .search_fields
            .iter()
            .map(|field| format!("string::lowercase({field} ?? '') CONTAINS $search_term"))
            .collect::<Vec<_>>()
            .join(" OR ");

        self.conditions.push(format!("({lookups})"));
        self.bindings
            .push(("search_term".to_string(), Value::String(term)));
        self
    }

    /// Active records matching the term: `active() ∩ search(term)`.
    pub fn filtered_search(spec: &'static QuerySpec, term: &str) -> Self {
        Self::all(spec).active().search(term)
    }

    fn sql(&self, paged: bool) -> String {
        let mut sql = format!("SELECT * FROM {}", self.spec.table);

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }

        sql.push_str(" ORDER BY name");

        if paged {
            sql.push_str(" LIMIT $page_limit START $page_start");
        }

        if !self.spec.fetch.is_empty() {
            sql.push_str(" FETCH ");
            sql.push_str(&self.spec.fetch.join(", "));
        }

        sql
    }

    /// Materialize the full result set.
    pub async fn fetch<T: DeserializeOwned>(&self, db: &Surreal<Db>) -> RepoResult<Vec<T>> {
        let mut query = db.query(self.sql(false));
        for (name, value) in &self.bindings {
            query = query.bind((name.clone(), value.clone()));
        }

        let rows: Vec<T> = query.await?.take(0)?;
        Ok(rows)
    }

    /// Materialize one page: up to `limit` records after skipping `offset`.
    pub async fn page<T: DeserializeOwned>(
        &self,
        db: &Surreal<Db>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<T>> {
        let mut query = db
            .query(self.sql(true))
            .bind(("page_limit", limit))
            .bind(("page_start", offset));
        for (name, value) in &self.bindings {
            query = query.bind((name.clone(), value.clone()));
        }

        let rows: Vec<T> = query.await?.take(0)?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SPEC: QuerySpec = QuerySpec {
        table: "cafe",
        active_flag: "is_active",
        search_fields: &["name", "location"],
        fetch: &[],
    };

    static FETCHING_SPEC: QuerySpec = QuerySpec {
        table: "menu_item",
        active_flag: "is_available",
        search_fields: &["name", "description"],
        fetch: &["cafe"],
    };

    #[test]
    fn all_selects_everything_in_name_order() {
        let q = Select::all(&SPEC);
        assert_eq!(q.sql(false), "SELECT * FROM cafe ORDER BY name");
    }

    #[test]
    fn active_adds_flag_predicate() {
        let q = Select::all(&SPEC).active();
        assert_eq!(
            q.sql(false),
            "SELECT * FROM cafe WHERE is_active = true ORDER BY name"
        );
    }

    #[test]
    fn search_ors_across_field_set() {
        let q = Select::all(&SPEC).search("Bottle");
        assert_eq!(
            q.sql(false),
            "SELECT * FROM cafe WHERE (string::lowercase(name ?? '') CONTAINS $search_term \
             OR string::lowercase(location ?? '') CONTAINS $search_term) ORDER BY name"
        );
        assert_eq!(
            q.bindings,
            vec![("search_term".to_string(), Value::String("bottle".into()))]
        );
    }

    #[test]
    fn search_empty_term_is_a_no_op() {
        let q = Select::all(&SPEC).search("   ");
        assert_eq!(q.sql(false), Select::all(&SPEC).sql(false));
        assert!(q.bindings.is_empty());
    }

    #[test]
    fn filtered_search_is_active_and_search() {
        let composed = Select::all(&SPEC).active().search("ave");
        let shorthand = Select::filtered_search(&SPEC, "ave");
        assert_eq!(composed.sql(false), shorthand.sql(false));
        assert_eq!(composed.bindings, shorthand.bindings);
    }

    #[test]
    fn page_appends_limit_and_start() {
        let q = Select::all(&SPEC);
        assert_eq!(
            q.sql(true),
            "SELECT * FROM cafe ORDER BY name LIMIT $page_limit START $page_start"
        );
    }

    #[test]
    fn fetch_clause_comes_last() {
        let q = Select::all(&FETCHING_SPEC).active();
        assert_eq!(
            q.sql(true),
            "SELECT * FROM menu_item WHERE is_available = true ORDER BY name \
             LIMIT $page_limit START $page_start FETCH cafe"
        );
    }

    #[test]
    fn composition_does_not_share_state() {
        let base = Select::all(&SPEC);
        let active = base.clone().active();
        assert!(base.conditions.is_empty());
        assert_eq!(active.conditions.len(), 1);
    }
}
