use crate::app::state::ItemId;

/// A state transition requested by the key handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenAddDialog,
    CancelAddDialog,
    ConfirmAdd { name: String, quantity: String },
    BeginEdit { id: ItemId },
    CommitEdit { id: ItemId, name: String, amount: String },
    CancelEdit { id: ItemId },
    DeleteItem { id: ItemId },
    Quit,
}
