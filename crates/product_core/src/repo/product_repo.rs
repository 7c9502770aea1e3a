//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map each contract operation to one parameterized statement against
//!   `products` (and `warehouses` for the joined read).
//! - Map rows back to entities positionally.
//!
//! # Invariants
//! - Column order of every select list matches its row parser exactly.
//! - Identity-scoped mutations never affect more than one row; a larger
//!   count is reported as `RepoError::InvariantViolation`.

use crate::model::product::{Product, ProductId, ProductWithWarehouse};
use crate::repo::error::{map_read_error, map_write_error, RepoError, RepoResult};
use log::{debug, error, warn};
use rusqlite::{params, Connection, Row};

const PRODUCT_COLUMNS: &str =
    "id, name, quantity, code_value, is_published, expiration, price, id_warehouse";

const PRODUCT_WITH_WAREHOUSE_SQL: &str = "SELECT
    p.id,
    p.name,
    p.quantity,
    p.code_value,
    p.is_published,
    p.expiration,
    p.price,
    w.name,
    w.address,
    w.capacity,
    w.telephone
FROM products p
INNER JOIN warehouses w ON p.id_warehouse = w.id
WHERE p.id = ?1;";

/// Persistence contract for products.
pub trait ProductRepository {
    /// Loads one product; `NotFound` when no row has `id`.
    fn find_by_id(&self, id: ProductId) -> RepoResult<Product>;
    /// Inserts `product` and writes the store-assigned id back into it.
    fn save(&self, product: &mut Product) -> RepoResult<()>;
    /// Replaces every mutable column of the row identified by `product.id`.
    ///
    /// Updating an id with no row is not an error; it is logged as a no-op.
    fn update(&self, product: &Product) -> RepoResult<()>;
    /// Physically removes the row identified by `id`.
    fn delete(&self, id: ProductId) -> RepoResult<()>;
    /// Returns every product ordered by id; empty when the table is empty.
    fn get_all(&self) -> RepoResult<Vec<Product>>;
    /// Joins the product with its warehouse. A product without a matching
    /// warehouse is indistinguishable from a missing product.
    fn get_product_with_warehouse(&self, id: ProductId) -> RepoResult<ProductWithWarehouse>;
}

/// SQLite-backed product repository over a caller-provided connection.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn find_by_id(&self, id: ProductId) -> RepoResult<Product> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1;"))?;

        let product = stmt
            .query_row([id], parse_product_row)
            .map_err(|err| log_read_failure("product_find", id, map_read_error(err, id)))?;

        debug!("event=product_find module=repo status=ok id={id}");
        Ok(product)
    }

    fn save(&self, product: &mut Product) -> RepoResult<()> {
        self.conn
            .execute(
                "INSERT INTO products (
                    name,
                    quantity,
                    code_value,
                    is_published,
                    expiration,
                    price,
                    id_warehouse
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    product.name.as_str(),
                    product.quantity,
                    product.code_value.as_str(),
                    product.is_published,
                    product.expiration,
                    product.price,
                    product.warehouse_id,
                ],
            )
            .map_err(|err| log_write_failure("product_save", map_write_error(err)))?;

        product.id = self.conn.last_insert_rowid();
        debug!("event=product_save module=repo status=ok id={}", product.id);
        Ok(())
    }

    fn update(&self, product: &Product) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE products
                 SET
                    name = ?1,
                    quantity = ?2,
                    code_value = ?3,
                    is_published = ?4,
                    expiration = ?5,
                    price = ?6,
                    id_warehouse = ?7
                 WHERE id = ?8;",
                params![
                    product.name.as_str(),
                    product.quantity,
                    product.code_value.as_str(),
                    product.is_published,
                    product.expiration,
                    product.price,
                    product.warehouse_id,
                    product.id,
                ],
            )
            .map_err(|err| log_write_failure("product_update", map_write_error(err)))?;

        match changed {
            0 => {
                warn!(
                    "event=product_update module=repo status=noop id={} rows_affected=0",
                    product.id
                );
                Ok(())
            }
            1 => {
                debug!("event=product_update module=repo status=ok id={}", product.id);
                Ok(())
            }
            _ => Err(too_many_rows("product_update", product.id, changed)),
        }
    }

    fn delete(&self, id: ProductId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1;", [id])?;

        match changed {
            0 => Err(log_read_failure("product_delete", id, RepoError::NotFound(id))),
            1 => {
                debug!("event=product_delete module=repo status=ok id={id}");
                Ok(())
            }
            _ => Err(too_many_rows("product_delete", id, changed)),
        }
    }

    fn get_all(&self) -> RepoResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        debug!(
            "event=product_list module=repo status=ok count={}",
            products.len()
        );
        Ok(products)
    }

    fn get_product_with_warehouse(&self, id: ProductId) -> RepoResult<ProductWithWarehouse> {
        let mut stmt = self.conn.prepare(PRODUCT_WITH_WAREHOUSE_SQL)?;

        let product = stmt
            .query_row([id], parse_product_with_warehouse_row)
            .map_err(|err| {
                log_read_failure("product_with_warehouse", id, map_read_error(err, id))
            })?;

        debug!("event=product_with_warehouse module=repo status=ok id={id}");
        Ok(product)
    }
}

fn parse_product_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        code_value: row.get(3)?,
        is_published: row.get(4)?,
        expiration: row.get(5)?,
        price: row.get(6)?,
        warehouse_id: row.get(7)?,
    })
}

fn parse_product_with_warehouse_row(row: &Row<'_>) -> rusqlite::Result<ProductWithWarehouse> {
    Ok(ProductWithWarehouse {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        code_value: row.get(3)?,
        is_published: row.get(4)?,
        expiration: row.get(5)?,
        price: row.get(6)?,
        warehouse_name: row.get(7)?,
        warehouse_address: row.get(8)?,
        warehouse_capacity: row.get(9)?,
        warehouse_telephone: row.get(10)?,
    })
}

fn log_read_failure(event: &str, id: ProductId, err: RepoError) -> RepoError {
    match &err {
        RepoError::NotFound(_) => {
            warn!("event={event} module=repo status=error id={id} error_code=not_found")
        }
        other => error!("event={event} module=repo status=error id={id} error={other}"),
    }
    err
}

fn log_write_failure(event: &str, err: RepoError) -> RepoError {
    match &err {
        RepoError::AlreadyExists(detail) => warn!(
            "event={event} module=repo status=error error_code=already_exists detail={detail}"
        ),
        other => error!("event={event} module=repo status=error error={other}"),
    }
    err
}

fn too_many_rows(event: &str, id: ProductId, changed: usize) -> RepoError {
    error!(
        "event={event} module=repo status=error id={id} rows_affected={changed} error_code=invariant_violation"
    );
    RepoError::InvariantViolation(format!(
        "{changed} rows affected for product id {id}; expected at most 1"
    ))
}
