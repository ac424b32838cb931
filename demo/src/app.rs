use std::collections::BTreeMap;
use std::sync::Arc;

use patterns_idioms::{Basket, BasketItem, Car};
use patterns_observer::{Observable, ObserverHandle, SubjectConfig};
use tracing::info;

use crate::checkbox::{Checkbox, ControlCheckbox};
use crate::command::{Command, CommandError, HELP};

/// What the caller should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines and keep reading commands
    Continue(Vec<String>),
    Quit,
}

struct Registered {
    checkbox: Arc<Checkbox>,
    handle: ObserverHandle<bool>,
}

/// All of the demo's state. Commands are the external events; checkbox state changes reach
/// the observers only through the control checkbox's subject.
pub struct App {
    control: ControlCheckbox,
    checkboxes: BTreeMap<usize, Registered>,
    next_id: usize,
    basket: Basket,
}

impl App {
    pub fn new(config: SubjectConfig) -> Self {
        Self { control: ControlCheckbox::new(config), checkboxes: BTreeMap::new(), next_id: 0, basket: Basket::new() }
    }

    pub fn control(&self) -> &ControlCheckbox { &self.control }

    pub fn checkbox(&self, id: usize) -> Option<&Checkbox> { self.checkboxes.get(&id).map(|r| r.checkbox.as_ref()) }

    pub fn basket(&self) -> &Basket { &self.basket }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let lines = match command {
            Command::Add => {
                let id = self.next_id;
                self.next_id += 1;
                let checkbox = Arc::new(Checkbox::new(id));
                let handle = ObserverHandle::from_arc(checkbox.clone());
                let observers = self.control.add_observer(handle.clone());
                self.checkboxes.insert(id, Registered { checkbox, handle });
                info!("added checkbox {id}, {observers} observers registered");
                vec![format!("added checkbox {id}")]
            }
            Command::Remove(id) => {
                let registered = self.checkboxes.get(&id).ok_or(CommandError::NoSuchCheckbox(id))?;
                // forget the checkbox only once the subject has let go of it
                self.control.remove_observer(&registered.handle)?;
                self.checkboxes.remove(&id);
                vec![format!("removed checkbox {id}")]
            }
            Command::Toggle => {
                let notified = self.control.toggle();
                vec![self.control_line(notified)]
            }
            Command::Set(checked) => {
                let notified = self.control.set(checked);
                vec![self.control_line(notified)]
            }
            Command::Click(id) => {
                let registered = self.checkboxes.get(&id).ok_or(CommandError::NoSuchCheckbox(id))?;
                let checked = registered.checkbox.click();
                vec![format!("checkbox {id} is now {}", mark(checked))]
            }
            Command::List => {
                let mut lines = vec![format!("control {}", mark(self.control.is_checked()))];
                lines.extend(self.checkboxes.values().map(|r| format!("checkbox {} {}", r.checkbox.id(), mark(r.checkbox.is_checked()))));
                lines
            }
            Command::Car { model, year, price } => vec![Car::from_inputs(&model, &year, &price)?.to_string()],
            Command::BasketAdd { name, price } => {
                self.basket.add_item(BasketItem::new(name, price)?);
                vec![format!("{} items in the basket", self.basket.item_count())]
            }
            Command::BasketCount => vec![format!("{} items in the basket", self.basket.item_count())],
            Command::BasketTotal => vec![format!("basket total {:.2}", self.basket.total())],
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(lines))
    }

    fn control_line(&self, notified: usize) -> String { format!("control {} ({notified} notified)", mark(self.control.is_checked())) }
}

fn mark(checked: bool) -> &'static str { if checked { "[x]" } else { "[ ]" } }
