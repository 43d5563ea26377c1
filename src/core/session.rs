//! Edit session for a single farm event.
//!
//! The session borrows the last-known-good record and keeps the user's
//! edits as per-field overrides on top of its projection. Nothing touches
//! the record itself; `commit` hands a recombined patch to a save callback.

use crate::core::projector::project;
use crate::core::recombine::recombine;
use crate::errors::{AppError, AppResult};
use crate::models::RowId;
use crate::models::executable::{ExecutableDescriptor, ExecutableRef, ExecutableType};
use crate::models::farm_event::FarmEvent;
use crate::models::patch::FarmEventUpdate;
use crate::models::time_unit::TimeUnit;
use crate::models::view_model::{FarmEventViewModel, ViewField};
use std::collections::BTreeMap;

/// Resolves an executable reference to something displayable.
pub trait ExecutableLookup {
    fn find_executable(&self, executable: ExecutableRef) -> Option<ExecutableDescriptor>;
}

impl<F> ExecutableLookup for F
where
    F: Fn(ExecutableRef) -> Option<ExecutableDescriptor>,
{
    fn find_executable(&self, executable: ExecutableRef) -> Option<ExecutableDescriptor> {
        self(executable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No local edits since the session was opened.
    Pristine,
    /// At least one field overridden. Only a new session goes back to pristine.
    Dirty,
}

pub struct EditSession<'a, L: ExecutableLookup + ?Sized> {
    original: &'a FarmEvent,
    timezone: Option<String>,
    lookup: &'a L,
    overrides: BTreeMap<ViewField, String>,
    state: EditState,
}

impl<'a, L: ExecutableLookup + ?Sized> EditSession<'a, L> {
    pub fn new(original: &'a FarmEvent, timezone: Option<&str>, lookup: &'a L) -> Self {
        Self {
            original,
            timezone: timezone.map(str::to_string),
            lookup,
            overrides: BTreeMap::new(),
            state: EditState::Pristine,
        }
    }

    pub fn original(&self) -> &FarmEvent {
        self.original
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditState::Dirty
    }

    pub fn is_overridden(&self, field: ViewField) -> bool {
        self.overrides.contains_key(&field)
    }

    /// Record a local edit for one field.
    pub fn merge_field(&mut self, field: ViewField, value: impl Into<String>) {
        self.overrides.insert(field, value.into());
        self.state = EditState::Dirty;
    }

    /// Projection of the original record with the overrides laid on top.
    pub fn current_view_model(&self) -> FarmEventViewModel {
        let mut vm = project(self.original, self.timezone.as_deref());
        for (field, value) in &self.overrides {
            vm.set(*field, value.as_str());
        }
        vm
    }

    pub fn is_one_time(&self) -> bool {
        let current = self
            .overrides
            .get(&ViewField::TimeUnit)
            .map(String::as_str)
            .unwrap_or(self.original.time_unit.as_str());
        current == TimeUnit::Never.as_str()
    }

    /// Point the event at another executable. Type and id change together.
    pub fn set_executable(&mut self, value: impl Into<String>, executable_type: ExecutableType) {
        self.overrides.insert(ViewField::ExecutableId, value.into());
        self.overrides
            .insert(ViewField::ExecutableType, executable_type.as_str().to_string());
        self.state = EditState::Dirty;
    }

    pub fn set_executable_descriptor(&mut self, descriptor: &ExecutableDescriptor) {
        self.set_executable(descriptor.value.to_string(), descriptor.executable_type);
    }

    /// Resolve the currently selected executable through the lookup.
    pub fn get_executable(&self) -> AppResult<ExecutableDescriptor> {
        let vm = self.current_view_model();
        let unresolved = || AppError::unresolved(vm.executable_type.as_str(), vm.executable_id.as_str());

        let kind = ExecutableType::from_db_str(&vm.executable_type).ok_or_else(unresolved)?;
        let id = vm.executable_id.parse::<RowId>().map_err(|_| unresolved())?;

        self.lookup
            .find_executable(kind.with_id(id))
            .ok_or_else(unresolved)
    }

    /// Recombine the current view model, address it to the original record
    /// and hand it to `save`. The session state is left untouched.
    pub fn commit<S>(&self, save: S) -> AppResult<FarmEventUpdate>
    where
        S: FnOnce(&FarmEventUpdate) -> AppResult<()>,
    {
        let patch = recombine(&self.current_view_model())?;
        let update = FarmEventUpdate {
            id: self.original.id,
            patch,
        };
        save(&update)?;
        Ok(update)
    }
}
