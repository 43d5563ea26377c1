use super::RowId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of the polymorphic executable reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutableType {
    Sequence,
    Regimen,
}

impl ExecutableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutableType::Sequence => "Sequence",
            ExecutableType::Regimen => "Regimen",
        }
    }

    /// Exact, case-sensitive parse as stored in the DB and carried by forms.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Sequence" => Some(ExecutableType::Sequence),
            "Regimen" => Some(ExecutableType::Regimen),
            _ => None,
        }
    }

    /// Lenient parse for CLI input ("sequence", "REGIMEN", ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "sequence" | "seq" | "s" => Some(ExecutableType::Sequence),
            "regimen" | "reg" | "r" => Some(ExecutableType::Regimen),
            _ => None,
        }
    }

    /// Table holding the records of this type.
    pub fn table(&self) -> &'static str {
        match self {
            ExecutableType::Sequence => "sequences",
            ExecutableType::Regimen => "regimens",
        }
    }

    pub fn with_id(self, id: RowId) -> ExecutableRef {
        match self {
            ExecutableType::Sequence => ExecutableRef::Sequence(id),
            ExecutableType::Regimen => ExecutableRef::Regimen(id),
        }
    }
}

impl fmt::Display for ExecutableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a farm event runs: a sequence or a regimen, by id.
///
/// Serialized flat as `{"executable_type": "...", "executable_id": N}` so
/// it can sit directly inside a farm event body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "executable_type", content = "executable_id")]
pub enum ExecutableRef {
    Sequence(RowId),
    Regimen(RowId),
}

impl ExecutableRef {
    pub fn kind(&self) -> ExecutableType {
        match self {
            ExecutableRef::Sequence(_) => ExecutableType::Sequence,
            ExecutableRef::Regimen(_) => ExecutableType::Regimen,
        }
    }

    pub fn id(&self) -> RowId {
        match *self {
            ExecutableRef::Sequence(id) | ExecutableRef::Regimen(id) => id,
        }
    }
}

impl fmt::Display for ExecutableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind(), self.id())
    }
}

/// A resolved executable, as a select input would show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutableDescriptor {
    pub label: String,
    pub value: RowId,
    pub executable_type: ExecutableType,
}

impl ExecutableDescriptor {
    pub fn executable(&self) -> ExecutableRef {
        self.executable_type.with_id(self.value)
    }
}
