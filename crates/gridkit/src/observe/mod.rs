pub mod rules;


use std::collections::BTreeMap;

///
/// ChangeEvent
///
/// Notification emitted to subscribers on property mutation and on
/// error-bag changes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChangeEvent {
    /// A property value changed.
    Property(&'static str),
    /// The error list for a field changed (possibly to empty).
    Errors(&'static str),
}

///
/// Issues
///
/// Ordered message sink handed to field validation. Rule functions from
/// [`rules`] feed it through [`Issues::check`].
///

#[derive(Debug, Default)]
pub struct Issues {
    messages: Vec<String>,
}

impl Issues {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Record a rule outcome; `None` means the rule passed.
    pub fn check(&mut self, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.messages.push(message);
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

///
/// FieldRules
///
/// Per-field validation over a form model. `FIELDS` is the ordered field
/// list driving whole-object validation; `validate_field` reports issues
/// for one field and must ignore unknown names.
///

pub trait FieldRules {
    const FIELDS: &'static [&'static str];

    fn validate_field(&self, field: &str, issues: &mut Issues);
}

///
/// FormState
///
/// Observable validation state over one form model: every mutation through
/// [`FormState::update`] revalidates the touched field, and the error bag
/// keeps an ordered message list per field name. Instance-scoped; no
/// global state.
///

pub struct FormState<M: FieldRules> {
    model: M,
    errors: BTreeMap<&'static str, Vec<String>>,
    listeners: Vec<Box<dyn FnMut(&ChangeEvent)>>,
}

impl<M: FieldRules> FormState<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            errors: BTreeMap::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    #[must_use]
    pub fn into_model(self) -> M {
        self.model
    }

    /// Mutate one property, then notify and revalidate that field.
    pub fn update(&mut self, field: &'static str, mutate: impl FnOnce(&mut M)) {
        mutate(&mut self.model);
        self.emit(ChangeEvent::Property(field));
        self.validate_property(field);
    }

    /// Revalidate a single field and refresh its error-bag entry.
    ///
    /// Emits one errors-changed notification whether or not the field has
    /// issues, so bound UI can clear stale messages.
    pub fn validate_property(&mut self, field: &'static str) {
        let mut issues = Issues::new();
        self.model.validate_field(field, &mut issues);

        if issues.is_empty() {
            self.errors.remove(field);
        } else {
            self.errors.insert(field, issues.into_messages());
        }

        self.emit(ChangeEvent::Errors(field));
    }

    /// Revalidate every declared field; returns true when the model passes.
    ///
    /// The error bag is rebuilt from scratch; one errors-changed
    /// notification fires per field left with issues.
    pub fn validate_all(&mut self) -> bool {
        self.errors.clear();

        for &field in M::FIELDS {
            let mut issues = Issues::new();
            self.model.validate_field(field, &mut issues);

            if !issues.is_empty() {
                self.errors.insert(field, issues.into_messages());
            }
        }

        let errored: Vec<&'static str> = self.errors.keys().copied().collect();
        for field in errored {
            self.emit(ChangeEvent::Errors(field));
        }

        !self.has_errors()
    }

    /// Drop every recorded error, notifying once per previously-errored field.
    pub fn clear_errors(&mut self) {
        let errored: Vec<&'static str> = self.errors.keys().copied().collect();
        self.errors.clear();

        for field in errored {
            self.emit(ChangeEvent::Errors(field));
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Ordered error messages for one field; empty when the field is clean.
    #[must_use]
    pub fn errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors(field).first().map(String::as_str)
    }

    /// Every recorded message across all fields, in field order.
    pub fn all_errors(&self) -> impl Iterator<Item = &str> {
        self.errors.values().flatten().map(String::as_str)
    }

    fn emit(&mut self, event: ChangeEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl<M: FieldRules + std::fmt::Debug> std::fmt::Debug for FormState<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("model", &self.model)
            .field("errors", &self.errors)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
