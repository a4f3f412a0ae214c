use crate::db::connection::Database;
use crate::domain::Listing;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::params;

/// Upserts listings by id. Returns how many rows were written.
///
/// Re-importing a listing keeps its original position in the catalog.
pub fn save_listings(db: &Database, listings: &[Listing]) -> Result<usize, ServerError> {
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut written = 0;
        for listing in listings {
            written += tx
                .execute(
                    r#"
                    INSERT INTO listings
                        (id, property_type, want_to, price, location, title, address, image_url, imported_at)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                    ON CONFLICT(id) DO UPDATE SET
                        property_type = excluded.property_type,
                        want_to       = excluded.want_to,
                        price         = excluded.price,
                        location      = excluded.location,
                        title         = excluded.title,
                        address       = excluded.address,
                        image_url     = excluded.image_url,
                        imported_at   = excluded.imported_at
                    "#,
                    params![
                        listing.id,
                        listing.property_type,
                        listing.want_to,
                        listing.price,
                        listing.location,
                        listing.title,
                        listing.address,
                        listing.image_url,
                        now,
                    ],
                )
                .map_err(|e| ServerError::DbError(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        Ok(written)
    })
}

/// All listings in catalog order.
pub fn load_listings(db: &Database) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                "SELECT id, property_type, want_to, price, location, title, address, image_url
                 FROM listings ORDER BY seq",
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Listing {
                    id: row.get(0)?,
                    property_type: row.get(1)?,
                    want_to: row.get(2)?,
                    price: row.get(3)?,
                    location: row.get(4)?,
                    title: row.get(5)?,
                    address: row.get(6)?,
                    image_url: row.get(7)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}
