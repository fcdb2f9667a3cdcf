//! 测试用内存表存储

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::services::store::{StoreError, TableQuery, TableStore};

/// 内存中的 `TableStore`
///
/// - `tables`：表名 → 行；没有登记的表按空表处理
/// - `failing`：设置后所有查询都以该错误失败
/// - `failing_tables`：只让指定表的查询失败
/// - `insert_error`：设置后插入以该错误失败
/// - `inserts`：成功和失败的插入请求都会记录
///
/// 与 PostgREST 一样，过滤列在表中不存在时以 400 拒绝查询。
#[derive(Default)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<Value>>,
    failing: Option<StoreError>,
    failing_tables: HashMap<String, StoreError>,
    insert_error: Option<StoreError>,
    pub inserts: Mutex<Vec<(String, Value)>>,
    pub selects: Mutex<Vec<TableQuery>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟完全不可达的存储
    pub fn unreachable() -> Self {
        Self {
            failing: Some(StoreError::Network("connection refused".into())),
            ..Self::default()
        }
    }

    pub fn with_table(mut self, table: &str, rows: Vec<Value>) -> Self {
        self.tables.insert(table.to_string(), rows);
        self
    }

    pub fn with_rows<T: serde::Serialize>(self, table: &str, rows: &[T]) -> Self {
        let rows = rows
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        self.with_table(table, rows)
    }

    pub fn failing_table(mut self, table: &str, error: StoreError) -> Self {
        self.failing_tables.insert(table.to_string(), error);
        self
    }

    pub fn rejecting_inserts(mut self, error: StoreError) -> Self {
        self.insert_error = Some(error);
        self
    }

    pub fn inserted(&self) -> Vec<(String, Value)> {
        self.inserts.lock().unwrap().clone()
    }
}

/// 按列取值排序用的键
fn sort_key(row: &Value, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

impl TableStore for MemoryStore {
    async fn select(&self, query: &TableQuery) -> Result<Vec<Value>, StoreError> {
        self.selects.lock().unwrap().push(query.clone());

        if let Some(err) = &self.failing {
            return Err(err.clone());
        }
        if let Some(err) = self.failing_tables.get(&query.table) {
            return Err(err.clone());
        }

        let table = self.tables.get(&query.table).cloned().unwrap_or_default();

        if let Some(f) = &query.filter {
            if table.iter().any(|row| row.get(&f.column).is_none()) {
                return Err(StoreError::Rejected {
                    status: 400,
                    message: format!("column {}.{} does not exist", query.table, f.column),
                });
            }
        }

        let mut rows: Vec<Value> = table
            .into_iter()
            .filter(|row| match &query.filter {
                Some(f) => row.get(&f.column).and_then(|v| v.as_str()) == Some(f.value.as_str()),
                None => true,
            })
            .collect();

        if let Some(column) = &query.order {
            rows.sort_by_key(|row| sort_key(row, column));
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<(), StoreError> {
        self.inserts.lock().unwrap().push((table.to_string(), row));
        match &self.insert_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
