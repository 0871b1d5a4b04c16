use serde::Deserialize;

use crate::error::DataError;
use crate::models::{Article, ArticleRecord};
use crate::validate::{SortColumn, SortOrder};

/// A value bound to a `$n` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
}

/// A fluent builder for PostgreSQL SELECT statements.
///
/// Identifiers (table, columns, join conditions, sort keys) are `&'static str`,
/// so only compile-time SQL reaches identifier positions. Client values go
/// through [`SqlParam`] bindings.
///
/// ```ignore
/// let (sql, params) = QueryBuilder::new("articles")
///     .select(&["articles.article_id", "articles.title"])
///     .where_eq("articles.topic", SqlParam::Text("cats".into()))
///     .order_by("articles.created_at", SortOrder::Desc)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: &'static str,
    columns: Vec<&'static str>,
    joins: Vec<(&'static str, &'static str)>,
    conditions: Vec<(&'static str, SqlParam)>,
    group_by: Vec<&'static str>,
    order: Vec<(&'static str, SortOrder)>,
}

impl QueryBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            group_by: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &[&'static str]) -> Self {
        self.columns.extend_from_slice(columns);
        self
    }

    pub fn left_join(mut self, table: &'static str, on: &'static str) -> Self {
        self.joins.push((table, on));
        self
    }

    pub fn where_eq(mut self, column: &'static str, value: SqlParam) -> Self {
        self.conditions.push((column, value));
        self
    }

    pub fn group_by(mut self, column: &'static str) -> Self {
        self.group_by.push(column);
        self
    }

    pub fn order_by(mut self, column: &'static str, order: SortOrder) -> Self {
        self.order.push((column, order));
        self
    }

    /// Build the statement, returning `(sql, bind_values)`.
    pub fn build(&self) -> (String, Vec<SqlParam>) {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("SELECT {columns} FROM {}", self.table);

        for (table, on) in &self.joins {
            sql.push_str(&format!(" LEFT JOIN {table} ON {on}"));
        }

        let mut params = Vec::with_capacity(self.conditions.len());
        if !self.conditions.is_empty() {
            let clauses: Vec<_> = self
                .conditions
                .iter()
                .enumerate()
                .map(|(idx, (column, value))| {
                    params.push(value.clone());
                    format!("{column} = ${}", idx + 1)
                })
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }

        if !self.order.is_empty() {
            let clauses: Vec<_> = self
                .order
                .iter()
                .map(|(column, order)| format!("{column} {}", order.as_sql()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&clauses.join(", "));
        }

        (sql, params)
    }
}

/// Article columns plus the aggregated comment count.
pub const ARTICLE_COLUMNS: [&str; 8] = [
    "articles.article_id",
    "articles.title",
    "articles.topic",
    "articles.author",
    "articles.body",
    "articles.created_at",
    "articles.votes",
    "COUNT(comments.comment_id) AS comment_count",
];

/// Base statement for reading articles with their `comment_count`.
///
/// The left join keeps articles without comments (count 0).
pub fn select_articles() -> QueryBuilder {
    QueryBuilder::new("articles")
        .select(&ARTICLE_COLUMNS)
        .left_join("comments", "comments.article_id = articles.article_id")
        .group_by("articles.article_id")
}

/// Raw `GET /api/articles` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFilter {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// A validated article listing: optional topic restriction, sort column and
/// direction. All three apply together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub topic: Option<String>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        ArticleQuery {
            topic: None,
            sort_by: SortColumn::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ArticleQuery {
    /// Validate raw parameters.
    ///
    /// Empty `sort_by` / `order` count as absent. `sort_by` falls back to
    /// `created_at`; `order` falls back to the column's default direction.
    /// Topic existence is not checked here, it needs the store.
    pub fn from_filter(filter: &ArticleFilter) -> Result<Self, DataError> {
        let sort_by = match non_empty(&filter.sort_by) {
            Some(raw) => raw.parse::<SortColumn>()?,
            None => SortColumn::CreatedAt,
        };
        let order = match non_empty(&filter.order) {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => sort_by.default_order(),
        };
        Ok(ArticleQuery {
            topic: filter.topic.clone(),
            sort_by,
            order,
        })
    }

    /// Render the listing as SQL.
    ///
    /// Ties on the sort column are broken by `article_id` ascending so the
    /// order is total.
    pub fn build(&self) -> (String, Vec<SqlParam>) {
        let mut qb = select_articles();
        if let Some(topic) = &self.topic {
            qb = qb.where_eq("articles.topic", SqlParam::Text(topic.clone()));
        }
        qb = qb.order_by(self.sort_by.column(), self.order);
        if self.sort_by != SortColumn::ArticleId {
            qb = qb.order_by(SortColumn::ArticleId.column(), SortOrder::Asc);
        }
        qb.build()
    }

    /// Whether a stored article passes the topic restriction.
    pub fn matches(&self, record: &ArticleRecord) -> bool {
        self.topic
            .as_deref()
            .map_or(true, |topic| record.topic == topic)
    }

    /// Sort articles in place the same way [`build`](Self::build) orders rows.
    pub fn sort(&self, articles: &mut [Article]) {
        articles.sort_by(|a, b| {
            self.order
                .apply(self.sort_by.compare(a, b))
                .then_with(|| a.article_id.cmp(&b.article_id))
        });
    }
}
