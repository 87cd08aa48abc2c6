//! MySQL connection implementation

use async_trait::async_trait;
use meeple_core::{
    ColumnMeta, Connection, MeepleError, QueryResult, Result, Row, Value,
};
use mysql_async::{
    Conn, Opts, OptsBuilder, Pool, PoolConstraints, PoolOpts, Row as MySqlRow,
    consts::ColumnType, prelude::*,
};

/// MySQL connection wrapper.
///
/// The exporter is a sequential batch tool, so the pool is constrained to a
/// single connection; pooling exists only to get mysql_async's reconnect and
/// cleanup behavior for free.
pub struct MySqlConnection {
    pool: Pool,
}

impl MySqlConnection {
    /// Connect to a MySQL database
    pub async fn connect(
        host: &str,
        port: u16,
        database: &str,
        user: &str,
        password: &str,
    ) -> Result<Self> {
        tracing::info!(host = %host, port = %port, database = %database, "connecting to MySQL database");

        let opts_builder = OptsBuilder::from_opts(Opts::default())
            .ip_or_hostname(host)
            .tcp_port(port)
            .db_name(Some(database))
            .user(Some(user))
            .pass(Some(password));

        let constraints = PoolConstraints::new(1, 1).ok_or_else(|| {
            MeepleError::Connection(
                "Failed to configure MySQL pool constraints (min=1, max=1)".into(),
            )
        })?;

        let pool_opts = PoolOpts::default()
            .with_constraints(constraints)
            .with_reset_connection(false);
        let opts: Opts = opts_builder.pool_opts(pool_opts).into();

        let pool = Pool::new(opts);

        // Verify connectivity by acquiring and releasing a connection
        let _conn = pool
            .get_conn()
            .await
            .map_err(|e| MeepleError::Connection(format!("Failed to connect to MySQL: {}", e)))?;

        tracing::info!(host = %host, port = %port, database = %database, "MySQL connection established");
        Ok(Self { pool })
    }

    async fn get_conn(&self) -> Result<Conn> {
        self.pool
            .get_conn()
            .await
            .map_err(|e| MeepleError::Connection(format!("Failed to get MySQL connection: {}", e)))
    }
}

/// Convert a mysql_async Value to our Value type, using column type metadata
/// to correctly interpret byte strings from the text protocol.
fn mysql_value_to_value(val: mysql_async::Value, col_type: ColumnType) -> Value {
    match val {
        mysql_async::Value::NULL => Value::Null,
        mysql_async::Value::Bytes(bytes) => {
            if let Ok(s) = String::from_utf8(bytes.clone()) {
                match col_type {
                    ColumnType::MYSQL_TYPE_TINY
                    | ColumnType::MYSQL_TYPE_SHORT
                    | ColumnType::MYSQL_TYPE_LONG
                    | ColumnType::MYSQL_TYPE_LONGLONG
                    | ColumnType::MYSQL_TYPE_INT24
                    | ColumnType::MYSQL_TYPE_YEAR => {
                        s.parse::<i64>().map(Value::Int64).unwrap_or(Value::String(s))
                    }
                    ColumnType::MYSQL_TYPE_FLOAT
                    | ColumnType::MYSQL_TYPE_DOUBLE
                    | ColumnType::MYSQL_TYPE_DECIMAL
                    | ColumnType::MYSQL_TYPE_NEWDECIMAL => {
                        s.parse::<f64>().map(Value::Float64).unwrap_or(Value::String(s))
                    }
                    _ => Value::String(s),
                }
            } else {
                Value::Bytes(bytes)
            }
        }
        mysql_async::Value::Int(i) => Value::Int64(i),
        mysql_async::Value::UInt(u) => {
            if u <= i64::MAX as u64 {
                Value::Int64(u as i64)
            } else {
                Value::String(u.to_string())
            }
        }
        mysql_async::Value::Float(f) => Value::Float64(f as f64),
        mysql_async::Value::Double(d) => Value::Float64(d),
        mysql_async::Value::Date(year, month, day, hour, min, sec, micro) => {
            if hour == 0 && min == 0 && sec == 0 && micro == 0 {
                if let Some(date) =
                    chrono::NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
                {
                    Value::Date(date)
                } else {
                    Value::String(format!("{:04}-{:02}-{:02}", year, month, day))
                }
            } else {
                if let Some(dt) =
                    chrono::NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32).and_then(
                        |d| d.and_hms_micro_opt(hour as u32, min as u32, sec as u32, micro),
                    )
                {
                    Value::DateTime(dt)
                } else {
                    Value::String(format!(
                        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                        year, month, day, hour, min, sec
                    ))
                }
            }
        }
        mysql_async::Value::Time(negative, days, hours, mins, secs, micros) => {
            let total_hours = (days as u32) * 24 + (hours as u32);
            let sign = if negative { "-" } else { "" };
            Value::String(format!(
                "{}{:02}:{:02}:{:02}.{:06}",
                sign, total_hours, mins, secs, micros
            ))
        }
    }
}

#[async_trait]
impl Connection for MySqlConnection {
    fn driver_name(&self) -> &str {
        "mysql"
    }

    #[tracing::instrument(skip(self, sql), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    async fn query(&self, sql: &str) -> Result<QueryResult> {
        let start_time = std::time::Instant::now();

        let mut conn = self.get_conn().await?;

        let mysql_rows: Vec<MySqlRow> = conn
            .query(sql)
            .await
            .map_err(|e| MeepleError::Query(format!("Failed to execute query: {}", e)))?;

        let mut columns = Vec::new();
        let mut column_names = Vec::new();
        let mut column_types = Vec::new();

        if let Some(first_row) = mysql_rows.first() {
            for (idx, col) in first_row.columns_ref().iter().enumerate() {
                let name = col.name_str().to_string();
                column_names.push(name.clone());
                column_types.push(col.column_type());

                columns.push(ColumnMeta {
                    name,
                    data_type: format!("{:?}", col.column_type()),
                    ordinal: idx,
                });
            }
        }

        let mut rows = Vec::new();
        for mysql_row in mysql_rows {
            let mut values = Vec::new();
            for idx in 0..columns.len() {
                let mysql_val: mysql_async::Value =
                    mysql_row.get(idx).unwrap_or(mysql_async::Value::NULL);
                let col_type = column_types
                    .get(idx)
                    .copied()
                    .unwrap_or(ColumnType::MYSQL_TYPE_STRING);
                values.push(mysql_value_to_value(mysql_val, col_type));
            }
            rows.push(Row::new(column_names.clone(), values));
        }

        let execution_time_ms = start_time.elapsed().as_millis() as u64;

        tracing::debug!(
            row_count = rows.len(),
            execution_time_ms = execution_time_ms,
            "query executed successfully"
        );

        Ok(QueryResult {
            columns,
            rows,
            execution_time_ms,
        })
    }

    async fn close(&self) -> Result<()> {
        tracing::info!("closing MySQL connection pool");
        self.pool
            .clone()
            .disconnect()
            .await
            .map_err(|e| MeepleError::Connection(format!("Failed to close MySQL connection: {}", e)))
    }
}
