/// Host actions offered on a context-menu request from the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextAction {
	/// Copy the surface's current selection to the clipboard.
	Copy,
}

impl ContextAction {
	/// Menu entry text.
	pub fn label(&self) -> &'static str {
		match self {
			ContextAction::Copy => "Copy",
		}
	}
}

/// Actions attached for the current ready cycle.
///
/// The bridge rebuilds the menu on every surface-ready event so a reloaded
/// document never accumulates duplicate entries.
#[derive(Clone, Debug, Default)]
pub struct ContextMenu {
	actions: Vec<ContextAction>,
}

impl ContextMenu {
	/// Removes every action.
	pub fn clear(&mut self) {
		self.actions.clear();
	}

	/// Appends `action`.
	pub fn add(&mut self, action: ContextAction) {
		self.actions.push(action);
	}

	/// Actions in menu order.
	pub fn actions(&self) -> &[ContextAction] {
		&self.actions
	}

	/// Whether no action is attached.
	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}
}
