use crate::db::device::{find_or_add_tool, set_firmware, upsert_tool_slot};
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::device::{FirmwareHardware, PulloutDirection, ToolSlot, tool_names};
use rusqlite::Connection;
use std::str::FromStr;

/// What a seeding run wrote.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub firmware: Option<FirmwareHardware>,
    pub slots: Vec<String>,
}

/// A device profile: default firmware plus the tool slots it ships with.
///
/// Every step is idempotent so a device can be re-seeded safely.
pub trait DeviceSeeder {
    fn profile(&self) -> &'static str;

    fn firmware(&self) -> FirmwareHardware {
        FirmwareHardware::None
    }

    fn tool_slots(&self, _conn: &Connection) -> AppResult<Vec<ToolSlot>> {
        Ok(Vec::new())
    }

    fn perform(&self, conn: &Connection) -> AppResult<SeedReport> {
        let firmware = self.firmware();
        set_firmware(conn, firmware)?;

        let mut report = SeedReport {
            firmware: Some(firmware),
            slots: Vec::new(),
        };
        for slot in self.tool_slots(conn)? {
            upsert_tool_slot(conn, &slot)?;
            report.slots.push(slot.name);
        }
        Ok(report)
    }
}

/// Bare device: records the firmware as unset and adds nothing.
pub struct NoDevice;

impl DeviceSeeder for NoDevice {
    fn profile(&self) -> &'static str {
        "none"
    }
}

/// Genesis v1.5: Farmduino k1.5 firmware and two gantry-mounted seed troughs.
pub struct GenesisOneFive;

impl GenesisOneFive {
    fn seed_trough(conn: &Connection, name: &str, y: f64) -> AppResult<ToolSlot> {
        let tool = find_or_add_tool(conn, name)?;
        Ok(ToolSlot {
            name: name.to_string(),
            x: 0.0,
            y,
            z: 0.0,
            tool_id: Some(tool.id),
            pullout_direction: PulloutDirection::None,
            gantry_mounted: true,
        })
    }
}

impl DeviceSeeder for GenesisOneFive {
    fn profile(&self) -> &'static str {
        "genesis_1.5"
    }

    fn firmware(&self) -> FirmwareHardware {
        FirmwareHardware::FarmduinoK15
    }

    fn tool_slots(&self, conn: &Connection) -> AppResult<Vec<ToolSlot>> {
        Ok(vec![
            Self::seed_trough(conn, tool_names::SEED_TROUGH_1, 25.0)?,
            Self::seed_trough(conn, tool_names::SEED_TROUGH_2, 50.0)?,
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedProfile {
    None,
    GenesisOneFive,
}

impl SeedProfile {
    pub fn seeder(&self) -> Box<dyn DeviceSeeder> {
        match self {
            SeedProfile::None => Box::new(NoDevice),
            SeedProfile::GenesisOneFive => Box::new(GenesisOneFive),
        }
    }
}

impl FromStr for SeedProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SeedProfile::None),
            "genesis_1.5" | "genesis-1.5" | "genesis15" => Ok(SeedProfile::GenesisOneFive),
            other => Err(AppError::Seed(other.to_string())),
        }
    }
}

pub struct SeedLogic;

impl SeedLogic {
    /// Run a profile inside one transaction and audit the result.
    pub fn apply(pool: &mut DbPool, profile: SeedProfile) -> AppResult<SeedReport> {
        let seeder = profile.seeder();

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let report = seeder.perform(&tx)?;
            tx.commit()?;

            audit_or_warn(
                conn,
                "seed",
                seeder.profile(),
                &format!("Seeded {} tool slot(s)", report.slots.len()),
            );
            Ok(report)
        })
    }
}
