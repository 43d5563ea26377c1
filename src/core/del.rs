use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_farm_event, load_farm_event};
use crate::errors::AppResult;
use crate::models::RowId;
use crate::models::farm_event::FarmEvent;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one farm event, returning what was removed.
    pub fn apply(pool: &mut DbPool, id: RowId) -> AppResult<FarmEvent> {
        let removed = load_farm_event(&pool.conn, id)?;
        delete_farm_event(&pool.conn, id)?;

        audit_or_warn(
            &pool.conn,
            "del",
            &format!("farm_event #{}", id),
            &format!("Deleted farm event for {}", removed.executable),
        );

        Ok(removed)
    }
}
