// crates/locode-core/src/warehouse/postgres.rs
use super::{AirportTable, Warehouse, INSERT_CHUNK};
use crate::config::PostgresConfig;
use crate::error::{LocodeError, Result};
use crate::model::AirportRecord;
use tokio::runtime::{Builder, Runtime};
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};
use tracing::{error, info};

/// PostgreSQL warehouse, driven through a private current-thread runtime so
/// callers stay synchronous.
pub struct PostgresWarehouse {
    runtime: Runtime,
    client: Client,
    table: AirportTable,
}

impl PostgresWarehouse {
    pub fn connect(cfg: &PostgresConfig) -> Result<Self> {
        let table = AirportTable::new(&cfg.table)?;
        let runtime = Builder::new_current_thread().enable_all().build()?;

        let client = runtime.block_on(async {
            let (client, connection) =
                tokio_postgres::connect(&cfg.connection_string(), NoTls).await?;
            // Polled whenever the runtime is driven by `block_on`.
            tokio::spawn(async move {
                if let Err(e) = connection.await {
                    error!("PostgreSQL connection error: {}", e);
                }
            });
            Ok::<_, LocodeError>(client)
        })?;

        info!("Connected to PostgreSQL at {}:{}/{}", cfg.host, cfg.port, cfg.dbname);
        Ok(Self {
            runtime,
            client,
            table,
        })
    }

    pub fn table(&self) -> &AirportTable {
        &self.table
    }
}

impl Warehouse for PostgresWarehouse {
    fn replace_airports(&mut self, airports: &[AirportRecord]) -> Result<u64> {
        let table = &self.table;
        let client = &mut self.client;

        let uploaded = self.runtime.block_on(async {
            let tx = client.transaction().await?;
            tx.batch_execute(&table.drop_sql()).await?;
            tx.batch_execute(&table.create_sql()).await?;

            let pre_len: i64 = tx.query_one(table.count_sql().as_str(), &[]).await?.get(0);

            for chunk in airports.chunks(INSERT_CHUNK) {
                let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(chunk.len() * 6);
                for a in chunk {
                    params.push(&a.country_code);
                    params.push(&a.name_local);
                    params.push(&a.name);
                    params.push(&a.iata);
                    params.push(&a.geo_coord);
                    params.push(&a.country);
                }
                tx.execute(table.insert_sql(chunk.len()).as_str(), &params).await?;
            }

            let post_len: i64 = tx.query_one(table.count_sql().as_str(), &[]).await?.get(0);
            tx.commit().await?;
            Ok::<_, LocodeError>((post_len - pre_len).max(0) as u64)
        })?;

        info!("Uploaded {} records", uploaded);
        Ok(uploaded)
    }
}
