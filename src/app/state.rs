use crate::app::command::Command;
use crate::app::input::TextInput;
use crate::config::AppConfig;

pub type ItemId = u64;

/// Quantity stored when an edited amount cannot be parsed.
pub const DEFAULT_AMOUNT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub amount: u32,
    pub is_editing: bool,
}

/// Why the add dialog refused its input. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddRejected {
    #[error("item name is empty")]
    EmptyName,
    #[error("quantity is empty")]
    EmptyQuantity,
    #[error("quantity {0:?} contains non-digit characters")]
    NotDigits(String),
    #[error("quantity {0} does not fit in an item amount")]
    TooLarge(String),
}

/// Validate add-dialog input. The quantity must be ASCII digits only.
pub fn validate_new_item(name: &str, quantity: &str) -> Result<u32, AddRejected> {
    if name.is_empty() {
        return Err(AddRejected::EmptyName);
    }
    if quantity.is_empty() {
        return Err(AddRejected::EmptyQuantity);
    }
    if !quantity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddRejected::NotDigits(quantity.to_string()));
    }
    quantity
        .parse::<u32>()
        .map_err(|_| AddRejected::TooLarge(quantity.to_string()))
}

/// Parse an edited amount, falling back to [`DEFAULT_AMOUNT`].
pub fn parse_amount_or_default(text: &str) -> u32 {
    text.parse::<u32>().unwrap_or(DEFAULT_AMOUNT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Name,
    Quantity,
}

impl DraftField {
    pub fn toggle(self) -> Self {
        match self {
            DraftField::Name => DraftField::Quantity,
            DraftField::Quantity => DraftField::Name,
        }
    }
}

/// The shopping list plus the add dialog. All list mutations go through here.
#[derive(Debug, Default)]
pub struct ListState {
    items: Vec<Item>,
    next_id: ItemId,
    dialog_open: bool,
    draft_name: TextInput,
    draft_quantity: TextInput,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// The item currently shown in edit mode, if any.
    pub fn editing(&self) -> Option<&Item> {
        self.items.iter().find(|i| i.is_editing)
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.amount)).sum()
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn draft(&self, field: DraftField) -> &TextInput {
        match field {
            DraftField::Name => &self.draft_name,
            DraftField::Quantity => &self.draft_quantity,
        }
    }

    pub fn draft_mut(&mut self, field: DraftField) -> &mut TextInput {
        match field {
            DraftField::Name => &mut self.draft_name,
            DraftField::Quantity => &mut self.draft_quantity,
        }
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn cancel_add_dialog(&mut self) {
        self.dialog_open = false;
        self.clear_drafts();
    }

    /// Append a new item if the input is valid. On rejection nothing changes
    /// and the dialog stays open.
    pub fn confirm_add(&mut self, name: &str, quantity: &str) -> Result<ItemId, AddRejected> {
        let amount = validate_new_item(name, quantity)?;
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item {
            id,
            name: name.to_string(),
            amount,
            is_editing: false,
        });
        self.dialog_open = false;
        self.clear_drafts();
        Ok(id)
    }

    pub fn begin_edit(&mut self, id: ItemId) {
        for item in &mut self.items {
            item.is_editing = item.id == id;
        }
    }

    /// Leave edit mode and store the edited values. An unparsable amount
    /// becomes [`DEFAULT_AMOUNT`]; an empty name keeps the old one.
    pub fn commit_edit(&mut self, id: ItemId, name: &str, amount: &str) {
        for item in &mut self.items {
            item.is_editing = false;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            if !name.is_empty() {
                item.name = name.to_string();
            }
            item.amount = parse_amount_or_default(amount);
        }
    }

    pub fn cancel_edit(&mut self, id: ItemId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.is_editing = false;
        }
    }

    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.position(id)?;
        Some(self.items.remove(pos))
    }

    fn clear_drafts(&mut self) {
        self.draft_name.clear();
        self.draft_quantity.clear();
    }
}

/// In-progress values of the row being edited inline.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: ItemId,
    pub name: TextInput,
    pub amount: TextInput,
    pub field: DraftField,
}

impl EditDraft {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: TextInput::with_text(item.name.clone()),
            amount: TextInput::with_text(item.amount.to_string()),
            field: DraftField::Name,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.field {
            DraftField::Name => &mut self.name,
            DraftField::Quantity => &mut self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Adding,
    Editing,
}

pub struct AppState {
    pub config: AppConfig,
    pub list: ListState,
    pub selected: usize,
    pub dialog_field: DraftField,
    pub edit: Option<EditDraft>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            list: ListState::new(),
            selected: 0,
            dialog_field: DraftField::Name,
            edit: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.list.dialog_open() {
            Mode::Adding
        } else if self.edit.is_some() {
            Mode::Editing
        } else {
            Mode::Browse
        }
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.list.items().get(self.selected).map(|i| i.id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.list.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::OpenAddDialog => {
                self.list.open_add_dialog();
                self.dialog_field = DraftField::Name;
            }
            Command::CancelAddDialog => {
                self.list.cancel_add_dialog();
                tracing::debug!("add dialog cancelled");
            }
            Command::ConfirmAdd { name, quantity } => {
                match self.list.confirm_add(&name, &quantity) {
                    Ok(id) => {
                        tracing::debug!(id, %name, "item added");
                        if let Some(pos) = self.list.position(id) {
                            self.selected = pos;
                        }
                    }
                    Err(reason) => tracing::debug!(%reason, "add rejected"),
                }
            }
            Command::BeginEdit { id } => {
                self.edit = self.list.get(id).map(EditDraft::from_item);
                self.list.begin_edit(id);
                if let Some(pos) = self.list.position(id) {
                    self.selected = pos;
                }
                tracing::debug!(id, "editing item");
            }
            Command::CommitEdit { id, name, amount } => {
                self.list.commit_edit(id, &name, &amount);
                self.edit = None;
                tracing::debug!(id, %name, %amount, "item edited");
            }
            Command::CancelEdit { id } => {
                self.list.cancel_edit(id);
                if self.edit.as_ref().is_some_and(|d| d.id == id) {
                    self.edit = None;
                }
            }
            Command::DeleteItem { id } => {
                if let Some(item) = self.list.delete_item(id) {
                    tracing::debug!(id, name = %item.name, "item deleted");
                }
                if self.edit.as_ref().is_some_and(|d| d.id == id) {
                    self.edit = None;
                }
                self.clamp_selection();
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
        self.dirty = true;
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(names: &[&str]) -> ListState {
        let mut list = ListState::new();
        for name in names {
            list.open_add_dialog();
            list.confirm_add(name, "1").unwrap();
        }
        list
    }

    fn editing_count(list: &ListState) -> usize {
        list.items().iter().filter(|i| i.is_editing).count()
    }

    #[test]
    fn test_confirm_add() {
        let mut list = ListState::new();
        list.open_add_dialog();
        list.draft_mut(DraftField::Name).insert_char('M');
        list.draft_mut(DraftField::Quantity).insert_char('2');

        let id = list.confirm_add("Milk", "2").unwrap();
        assert_eq!(
            list.items(),
            &[Item { id, name: "Milk".into(), amount: 2, is_editing: false }]
        );
        assert!(!list.dialog_open());
        assert!(list.draft(DraftField::Name).is_empty());
        assert!(list.draft(DraftField::Quantity).is_empty());
    }

    #[test]
    fn test_confirm_add_rejects_bad_input() {
        let mut list = list_with(&["Eggs"]);
        list.open_add_dialog();
        list.draft_mut(DraftField::Name).insert_char('x');

        assert_eq!(
            list.confirm_add("Milk", "abc"),
            Err(AddRejected::NotDigits("abc".into()))
        );
        assert_eq!(list.confirm_add("Milk", ""), Err(AddRejected::EmptyQuantity));
        assert_eq!(list.confirm_add("", "2"), Err(AddRejected::EmptyName));
        assert_eq!(list.confirm_add("Milk", "-2"), Err(AddRejected::NotDigits("-2".into())));
        assert_eq!(list.confirm_add("Milk", " 2"), Err(AddRejected::NotDigits(" 2".into())));
        assert_eq!(
            list.confirm_add("Milk", "99999999999"),
            Err(AddRejected::TooLarge("99999999999".into()))
        );

        assert_eq!(list.len(), 1);
        assert!(list.dialog_open());
        assert_eq!(list.draft(DraftField::Name).as_str(), "x");
    }

    #[test]
    fn test_cancel_add_dialog_clears_drafts() {
        let mut list = ListState::new();
        list.open_add_dialog();
        list.draft_mut(DraftField::Name).insert_char('a');
        list.draft_mut(DraftField::Quantity).insert_char('3');
        list.cancel_add_dialog();

        assert!(!list.dialog_open());
        assert!(list.draft(DraftField::Name).is_empty());
        assert!(list.draft(DraftField::Quantity).is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn test_begin_edit_is_exclusive() {
        let mut list = list_with(&["Milk", "Eggs", "Bread"]);
        let ids: Vec<_> = list.items().iter().map(|i| i.id).collect();

        list.begin_edit(ids[0]);
        list.begin_edit(ids[2]);
        assert_eq!(editing_count(&list), 1);
        assert_eq!(list.editing().map(|i| i.id), Some(ids[2]));
    }

    #[test]
    fn test_commit_edit() {
        let mut list = list_with(&["Milk"]);
        let id = list.items()[0].id;

        list.begin_edit(id);
        list.commit_edit(id, "Oat milk", "7");
        let item = list.get(id).unwrap();
        assert_eq!(item.name, "Oat milk");
        assert_eq!(item.amount, 7);
        assert!(!item.is_editing);

        list.begin_edit(id);
        list.commit_edit(id, "Oat milk", "xyz");
        assert_eq!(list.get(id).unwrap().amount, 1);

        list.commit_edit(id, "Oat milk", "-3");
        assert_eq!(list.get(id).unwrap().amount, 1);
    }

    #[test]
    fn test_commit_edit_keeps_name_when_empty() {
        let mut list = list_with(&["Milk"]);
        let id = list.items()[0].id;
        list.begin_edit(id);
        list.commit_edit(id, "", "4");
        let item = list.get(id).unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.amount, 4);
    }

    #[test]
    fn test_cancel_edit_is_idempotent() {
        let mut list = list_with(&["Milk", "Eggs"]);
        let id = list.items()[1].id;
        list.begin_edit(id);

        list.cancel_edit(id);
        let once = list.items().to_vec();
        list.cancel_edit(id);
        assert_eq!(list.items(), once.as_slice());

        let item = list.get(id).unwrap();
        assert_eq!(item.name, "Eggs");
        assert_eq!(item.amount, 1);
        assert!(!item.is_editing);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = list_with(&["Milk", "Eggs", "Bread"]);
        let eggs = list.items()[1].id;

        let removed = list.delete_item(eggs).unwrap();
        assert_eq!(removed.name, "Eggs");
        let names: Vec<_> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Bread"]);

        assert!(list.delete_item(eggs).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_ids_unique_after_delete() {
        let mut list = list_with(&["Milk", "Eggs", "Bread"]);
        let first = list.items()[0].id;
        list.delete_item(first);
        list.open_add_dialog();
        let new_id = list.confirm_add("Butter", "1").unwrap();

        assert!(list.items()[..2].iter().all(|i| i.id != new_id));
        let mut ids: Vec<_> = list.items().iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_total_quantity() {
        let mut list = ListState::new();
        list.confirm_add("Milk", "2").unwrap();
        list.confirm_add("Eggs", "12").unwrap();
        assert_eq!(list.total_quantity(), 14);
    }

    #[test]
    fn test_apply_edit_flow() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Command::ConfirmAdd { name: "Milk".into(), quantity: "2".into() });
        state.apply(Command::ConfirmAdd { name: "Eggs".into(), quantity: "6".into() });
        assert_eq!(state.selected, 1);
        let milk = state.list.items()[0].id;

        state.apply(Command::BeginEdit { id: milk });
        assert_eq!(state.mode(), Mode::Editing);
        assert_eq!(state.selected, 0);
        let draft = state.edit.as_mut().unwrap();
        assert_eq!(draft.name.as_str(), "Milk");
        assert_eq!(draft.amount.as_str(), "2");
        draft.name.insert_char('!');

        // Cancel never looks at the draft.
        state.apply(Command::CancelEdit { id: milk });
        assert!(state.edit.is_none());
        assert_eq!(state.list.get(milk).unwrap().name, "Milk");
        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn test_apply_delete_clamps_selection() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Command::ConfirmAdd { name: "Milk".into(), quantity: "2".into() });
        state.apply(Command::ConfirmAdd { name: "Eggs".into(), quantity: "6".into() });
        let eggs = state.list.items()[1].id;

        state.apply(Command::BeginEdit { id: eggs });
        state.apply(Command::DeleteItem { id: eggs });
        assert!(state.edit.is_none());
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_id(), Some(state.list.items()[0].id));

        state.apply(Command::DeleteItem { id: state.list.items()[0].id });
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_apply_rejected_add_keeps_dialog() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Command::OpenAddDialog);
        state.apply(Command::ConfirmAdd { name: "Milk".into(), quantity: "abc".into() });
        assert_eq!(state.mode(), Mode::Adding);
        assert!(state.list.is_empty());

        state.apply(Command::CancelAddDialog);
        assert_eq!(state.mode(), Mode::Browse);
    }
}
