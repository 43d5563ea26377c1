use super::RowId;
use serde::Serialize;

/// Firmware flavour the device runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FirmwareHardware {
    None,
    Arduino,
    Farmduino,
    FarmduinoK14,
    FarmduinoK15,
    Express,
}

impl FirmwareHardware {
    pub fn as_str(&self) -> &'static str {
        match self {
            FirmwareHardware::None => "none",
            FirmwareHardware::Arduino => "arduino",
            FirmwareHardware::Farmduino => "farmduino",
            FirmwareHardware::FarmduinoK14 => "farmduino_k14",
            FirmwareHardware::FarmduinoK15 => "farmduino_k15",
            FirmwareHardware::Express => "express_k10",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(FirmwareHardware::None),
            "arduino" => Some(FirmwareHardware::Arduino),
            "farmduino" => Some(FirmwareHardware::Farmduino),
            "farmduino_k14" => Some(FirmwareHardware::FarmduinoK14),
            "farmduino_k15" => Some(FirmwareHardware::FarmduinoK15),
            "express_k10" => Some(FirmwareHardware::Express),
            _ => None,
        }
    }
}

/// Direction a tool is pulled out of its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PulloutDirection {
    None,
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
}

impl PulloutDirection {
    /// Stored as the integer code the device understands.
    pub fn code(&self) -> i64 {
        match self {
            PulloutDirection::None => 0,
            PulloutDirection::PositiveX => 1,
            PulloutDirection::NegativeX => 2,
            PulloutDirection::PositiveY => 3,
            PulloutDirection::NegativeY => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PulloutDirection::None),
            1 => Some(PulloutDirection::PositiveX),
            2 => Some(PulloutDirection::NegativeX),
            3 => Some(PulloutDirection::PositiveY),
            4 => Some(PulloutDirection::NegativeY),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PulloutDirection::None => "none",
            PulloutDirection::PositiveX => "+x",
            PulloutDirection::NegativeX => "-x",
            PulloutDirection::PositiveY => "+y",
            PulloutDirection::NegativeY => "-y",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    pub id: RowId,
    pub name: String,
}

/// A tool slot as seeded for a device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSlot {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub tool_id: Option<RowId>,
    pub pullout_direction: PulloutDirection,
    pub gantry_mounted: bool,
}

/// Tool names shared by the seed profiles.
pub mod tool_names {
    pub const SEED_TROUGH_1: &str = "Seed Trough 1";
    pub const SEED_TROUGH_2: &str = "Seed Trough 2";
}
