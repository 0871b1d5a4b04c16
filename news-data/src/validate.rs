//! Input validation for values that reach a query.
//!
//! Identifiers (sort columns, directions) cannot be bound as parameters, so
//! they are parsed here into closed enums and rejected outright when they fall
//! outside the whitelist. Path ids are parsed before any query is issued.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{messages, DataError};
use crate::models::Article;

/// Parse an `{article_id}` path segment.
///
/// Anything that is not an integer is bad input. An integer outside the id
/// column's range cannot name an article, so it is not found.
pub fn parse_article_id(raw: &str) -> Result<i32, DataError> {
    raw.parse::<i32>().map_err(|_| {
        if is_integer(raw) {
            DataError::not_found()
        } else {
            DataError::bad_request()
        }
    })
}

fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(|c| c == '-' || c == '+').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Orient an ascending comparison according to this direction.
    pub fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DataError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(DataError::BadInput(messages::INVALID_ORDER.into()))
        }
    }
}

/// The article columns a client may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
    Body,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::ArticleId,
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::Body,
    ];

    /// The name clients use in `?sort_by=`.
    pub fn name(self) -> &'static str {
        match self {
            SortColumn::ArticleId => "article_id",
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::Body => "body",
        }
    }

    /// Qualified column identifier used in SQL.
    pub fn column(self) -> &'static str {
        match self {
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Title => "articles.title",
            SortColumn::Topic => "articles.topic",
            SortColumn::Author => "articles.author",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::Votes => "articles.votes",
            SortColumn::Body => "articles.body",
        }
    }

    /// Direction used when `sort_by` is given without `order`.
    pub fn default_order(self) -> SortOrder {
        match self {
            SortColumn::ArticleId | SortColumn::Title | SortColumn::Topic | SortColumn::Body => {
                SortOrder::Asc
            }
            SortColumn::Author | SortColumn::CreatedAt | SortColumn::Votes => SortOrder::Desc,
        }
    }

    /// Ascending comparison of two articles on this column.
    pub fn compare(self, a: &Article, b: &Article) -> Ordering {
        match self {
            SortColumn::ArticleId => a.article_id.cmp(&b.article_id),
            SortColumn::Title => a.title.cmp(&b.title),
            SortColumn::Topic => a.topic.cmp(&b.topic),
            SortColumn::Author => a.author.cmp(&b.author),
            SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            SortColumn::Votes => a.votes.cmp(&b.votes),
            SortColumn::Body => a.body.cmp(&b.body),
        }
    }
}

impl FromStr for SortColumn {
    type Err = DataError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.name() == raw)
            .ok_or_else(|| DataError::BadInput(messages::INVALID_SORT_BY.into()))
    }
}
