//! Table query description shared by every backend.
//!
//! A [`Query`] is a list of column filters plus an optional ordering. The REST
//! backend renders it as PostgREST parameters (`date=gte.…&order=date.asc`);
//! the in-memory backend evaluates it directly against JSON rows.

use std::cmp::Ordering;

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Eq,
    Gte,
    Lte,
}

impl Op {
    fn as_str(&self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Gte => "gte",
            Op::Lte => "lte",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub column: String,
    pub op: Op,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    fn filter(mut self, column: &str, op: Op, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn eq(self, column: &str, value: impl Into<String>) -> Self {
        self.filter(column, Op::Eq, value)
    }

    pub fn gte(self, column: &str, value: impl Into<String>) -> Self {
        self.filter(column, Op::Gte, value)
    }

    pub fn lte(self, column: &str, value: impl Into<String>) -> Self {
        self.filter(column, Op::Lte, value)
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }

    /// Short human-readable form used in logs and `NotFound` errors.
    pub fn describe(&self) -> String {
        self.filters
            .iter()
            .map(|f| format!("{}={}.{}", f.column, f.op.as_str(), f.value))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// PostgREST query parameters.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        for f in &self.filters {
            pairs.push((f.column.clone(), format!("{}.{}", f.op.as_str(), f.value)));
        }
        if let Some(order) = &self.order {
            let dir = if order.ascending { "asc" } else { "desc" };
            pairs.push(("order".to_string(), format!("{}.{}", order.column, dir)));
        }
        pairs
    }

    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|f| {
            let Some(cell) = row.get(&f.column) else {
                return false;
            };
            let Some(ord) = compare_cell(cell, &f.value) else {
                return false;
            };
            match f.op {
                Op::Eq => ord == Ordering::Equal,
                Op::Gte => ord != Ordering::Less,
                Op::Lte => ord != Ordering::Greater,
            }
        })
    }

    /// Sort rows in place by the query's order column. Nulls sort last.
    pub fn sort(&self, rows: &mut [Value]) {
        let Some(order) = &self.order else {
            return;
        };
        rows.sort_by(|a, b| {
            let ord = compare_values(
                a.get(&order.column).unwrap_or(&Value::Null),
                b.get(&order.column).unwrap_or(&Value::Null),
            );
            if order.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
}

fn compare_cell(cell: &Value, literal: &str) -> Option<Ordering> {
    match cell {
        Value::String(s) => Some(s.as_str().cmp(literal)),
        Value::Number(n) => {
            let lhs = n.as_f64()?;
            let rhs = literal.parse::<f64>().ok()?;
            lhs.partial_cmp(&rhs)
        }
        Value::Bool(b) => Some(b.to_string().as_str().cmp(literal)),
        _ => None,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_postgrest_pairs() {
        let q = Query::new()
            .gte("date", "2025-05-12T03:00:00.000Z")
            .lte("date", "2025-05-13T02:59:59.999Z")
            .order("date", true);
        let pairs = q.to_pairs();
        assert_eq!(pairs[0], ("select".into(), "*".into()));
        assert_eq!(pairs[1], ("date".into(), "gte.2025-05-12T03:00:00.000Z".into()));
        assert_eq!(pairs[3], ("order".into(), "date.asc".into()));
    }

    #[test]
    fn test_matches_and_sort() {
        let q = Query::new().eq("role", "provider").order("name", true);
        let mut rows = vec![
            json!({ "name": "Zeca", "role": "provider" }),
            json!({ "name": "Ana", "role": "provider" }),
            json!({ "name": "Bia", "role": "client" }),
        ];
        rows.retain(|r| q.matches(r));
        q.sort(&mut rows);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Ana");

        let priced = Query::new().gte("price", "100");
        assert!(priced.matches(&json!({ "price": 150.0 })));
        assert!(!priced.matches(&json!({ "price": 99 })));
        assert!(!priced.matches(&json!({ "name": "no price" })));
    }
}
