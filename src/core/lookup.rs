use crate::core::session::ExecutableLookup;
use crate::models::RowId;
use crate::models::executable::{ExecutableDescriptor, ExecutableRef, ExecutableType};
use std::collections::BTreeMap;

/// In-memory snapshot of every known sequence and regimen, loaded once per
/// command so that resolving an executable never touches the database.
#[derive(Debug, Default, Clone)]
pub struct ExecutableIndex {
    sequences: BTreeMap<RowId, String>,
    regimens: BTreeMap<RowId, String>,
}

impl ExecutableIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ExecutableType, id: RowId, name: impl Into<String>) {
        let table = match kind {
            ExecutableType::Sequence => &mut self.sequences,
            ExecutableType::Regimen => &mut self.regimens,
        };
        table.insert(id, name.into());
    }

    pub fn with(mut self, kind: ExecutableType, id: RowId, name: impl Into<String>) -> Self {
        self.insert(kind, id, name);
        self
    }

    pub fn len(&self) -> usize {
        self.sequences.len() + self.regimens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All executables as select options: sequences first, then regimens.
    pub fn options(&self) -> Vec<ExecutableDescriptor> {
        let seqs = self.sequences.iter().map(|(id, name)| (ExecutableType::Sequence, id, name));
        let regs = self.regimens.iter().map(|(id, name)| (ExecutableType::Regimen, id, name));

        seqs.chain(regs)
            .map(|(kind, id, name)| ExecutableDescriptor {
                label: name.clone(),
                value: *id,
                executable_type: kind,
            })
            .collect()
    }
}

impl ExecutableLookup for ExecutableIndex {
    fn find_executable(&self, executable: ExecutableRef) -> Option<ExecutableDescriptor> {
        let (table, id) = match executable {
            ExecutableRef::Sequence(id) => (&self.sequences, id),
            ExecutableRef::Regimen(id) => (&self.regimens, id),
        };

        table.get(&id).map(|name| ExecutableDescriptor {
            label: name.clone(),
            value: id,
            executable_type: executable.kind(),
        })
    }
}
