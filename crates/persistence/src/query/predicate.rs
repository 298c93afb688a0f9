//! Filter predicates rendered into parameterized SQL.
//!
//! Every user-supplied value is bound as a parameter. Placeholders are
//! numbered in the order parameters are added, using the syntax of the target
//! [`Dialect`].

use crate::types::SearchFilters;

/// Placeholder syntax of a SQL backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `$1`, `$2`, ...
    Postgres,
    /// `?1`, `?2`, ...
    Sqlite,
}

impl Dialect {
    /// Returns the placeholder for the 1-based parameter `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", index),
            Dialect::Sqlite => format!("?{}", index),
        }
    }
}

/// A bound SQL parameter.
///
/// Integer widths follow the column types: `Integer` for `INTEGER` columns,
/// `BigInt` for `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Text parameter.
    Text(String),
    /// 32-bit integer parameter.
    Integer(i32),
    /// 64-bit integer parameter.
    BigInt(i64),
    /// Floating point parameter.
    Float(f64),
}

impl SqlParam {
    /// Creates a text parameter.
    pub fn text(s: impl Into<String>) -> Self {
        SqlParam::Text(s.into())
    }
}

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    /// The SQL text.
    pub sql: String,
    /// Bound parameter values, in placeholder order.
    pub params: Vec<SqlParam>,
    dialect: Dialect,
}

impl SqlFragment {
    /// Creates an empty fragment for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// The placeholder dialect of this fragment.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Adds a parameter and returns its placeholder.
    pub fn add_param(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        self.dialect.placeholder(self.params.len())
    }

    /// Appends raw SQL text.
    pub fn push_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Appends the predicates joined with `AND`.
    ///
    /// Nothing is appended when `predicates` is empty.
    pub fn push_predicates(&mut self, predicates: &[Predicate]) {
        for (i, predicate) in predicates.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(" AND ");
            }
            let condition = predicate.render(self);
            self.sql.push_str(&condition);
        }
    }

    /// Returns true if no SQL has been written.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// A single filter condition on one column.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `lower(column) = lower(value)`.
    EqualsIgnoreCase {
        /// Column expression.
        column: &'static str,
        /// Value to compare.
        value: String,
    },
    /// `lower(column) LIKE lower('%value%')`, with the value matched literally.
    ContainsIgnoreCase {
        /// Column expression.
        column: &'static str,
        /// Substring to look for.
        value: String,
    },
    /// `column = value`.
    Equals {
        /// Column expression.
        column: &'static str,
        /// Value to compare.
        value: i32,
    },
    /// `column BETWEEN min AND max` on an integer column.
    IntegerBetween {
        /// Column expression.
        column: &'static str,
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },
    /// `column BETWEEN min AND max` on a floating point column.
    FloatBetween {
        /// Column expression.
        column: &'static str,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

impl Predicate {
    /// Renders the condition, binding its values into `fragment`.
    pub fn render(&self, fragment: &mut SqlFragment) -> String {
        match self {
            // Both sides go through the database's lower() so they fold alike
            Predicate::EqualsIgnoreCase { column, value } => {
                let p = fragment.add_param(SqlParam::text(value.as_str()));
                format!("lower({}) = lower({})", column, p)
            }
            Predicate::ContainsIgnoreCase { column, value } => {
                let pattern = format!("%{}%", escape_like(value));
                let p = fragment.add_param(SqlParam::Text(pattern));
                format!("lower({}) LIKE lower({}) ESCAPE '\\'", column, p)
            }
            Predicate::Equals { column, value } => {
                let p = fragment.add_param(SqlParam::Integer(*value));
                format!("{} = {}", column, p)
            }
            Predicate::IntegerBetween { column, min, max } => {
                let lo = fragment.add_param(SqlParam::Integer(*min));
                let hi = fragment.add_param(SqlParam::Integer(*max));
                format!("{} BETWEEN {} AND {}", column, lo, hi)
            }
            Predicate::FloatBetween { column, min, max } => {
                let lo = fragment.add_param(SqlParam::Float(*min));
                let hi = fragment.add_param(SqlParam::Float(*max));
                format!("{} BETWEEN {} AND {}", column, lo, hi)
            }
        }
    }
}

/// Escapes LIKE metacharacters so `value` matches literally with `ESCAPE '\'`.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Translates search filters into predicates, in a fixed order.
///
/// The meter and tempo ranges are always present; every other predicate only
/// when its filter is set.
pub fn predicates_for(filters: &SearchFilters) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    if let Some(ref steps_type) = filters.steps_type {
        predicates.push(Predicate::EqualsIgnoreCase {
            column: "chart.stepstype",
            value: steps_type.clone(),
        });
    }

    predicates.push(Predicate::IntegerBetween {
        column: "chart.meter",
        min: filters.meter_min,
        max: filters.meter_max,
    });

    predicates.push(Predicate::FloatBetween {
        column: "song_bpm.song_bpm",
        min: filters.bpm_min,
        max: filters.bpm_max,
    });

    if let Some(ref pack) = filters.pack {
        predicates.push(Predicate::ContainsIgnoreCase {
            column: "pack.name",
            value: pack.clone(),
        });
    }

    if let Some(numerator) = filters.time_signature_numerator {
        predicates.push(Predicate::Equals {
            column: "song_time_signature.time_signature_numerator",
            value: numerator,
        });
    }

    if let Some(denominator) = filters.time_signature_denominator {
        predicates.push(Predicate::Equals {
            column: "song_time_signature.time_signature_denominator",
            value: denominator,
        });
    }

    if let Some(ref title) = filters.title {
        predicates.push(Predicate::ContainsIgnoreCase {
            column: "song.title",
            value: title.clone(),
        });
    }

    if let Some(ref artist) = filters.artist {
        predicates.push(Predicate::ContainsIgnoreCase {
            column: "song.artist",
            value: artist.clone(),
        });
    }

    if let Some((min, max)) = filters.chart_difficulty_meter {
        predicates.push(Predicate::IntegerBetween {
            column: "chart.meter",
            min,
            max,
        });
    }

    if let Some(ref credit) = filters.chart_credit {
        predicates.push(Predicate::ContainsIgnoreCase {
            column: "chart.credit",
            value: credit.clone(),
        });
    }

    predicates
}
