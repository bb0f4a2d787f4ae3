//! Contact form validation and the simulated send. Nothing leaves the page:
//! the "send" is a fixed delay, so the form is not usable in production as is.

pub const INVALID_CLASS: &str = "is-invalid";
pub const SENDING_CLASS: &str = "btn-sending";
pub const SEND_DELAY_MS: u32 = 2_000;
pub const REARM_DELAY_MS: u32 = 3_000;
pub const IDLE_ICON: &str = "fa-paper-plane";
pub const SENT_ICON: &str = "fa-check";

const MESSAGE_FIELD_ID: &str = "message";
const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

impl FieldKind {
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else {
            Self::Text
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub value: String,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            value: value.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.id == MESSAGE_FIELD_ID && trimmed.chars().count() < MESSAGE_MIN_CHARS {
            return false;
        }
        if self.kind == FieldKind::Email && !is_email(&self.value) {
            return false;
        }

        true
    }
}

/// Per-field verdicts, in the order the fields were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub verdicts: Vec<(String, bool)>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|(_, valid)| *valid)
    }

    pub fn invalid_ids(&self) -> impl Iterator<Item = &str> {
        self.verdicts
            .iter()
            .filter(|(_, valid)| !*valid)
            .map(|(id, _)| id.as_str())
    }
}

pub fn validate(fields: &[Field]) -> Validation {
    Validation {
        verdicts: fields
            .iter()
            .map(|field| (field.id.clone(), field.is_valid()))
            .collect(),
    }
}

/// `local@domain.tld`: exactly one `@`, no whitespace, and a dot inside the
/// domain with something on both sides of it.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(offset, c)| c == '.' && offset > 0 && offset + 1 < domain.len())
}

/// Submit button content: a Font Awesome icon followed by the label text.
pub fn button_markup(icon: &str, label: &str) -> String {
    format!("<i class=\"fas {icon} me-2\"></i>{}", escape_html(label))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
}

/// What the page has to do on a submit-flow transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitEffect {
    /// Mark fields, keep the button as is.
    Rejected,
    /// Disable the button, show the loader, wait `SEND_DELAY_MS`.
    StartSending,
    /// Hide the loader, show the success label, reset the form, wait
    /// `REARM_DELAY_MS`.
    Completed,
    /// Re-enable the button with its idle label.
    Rearmed,
    Ignored,
}

#[derive(Clone, Debug)]
pub struct SubmitFlow {
    state: SubmitState,
}

impl Default for SubmitFlow {
    fn default() -> Self {
        Self {
            state: SubmitState::Idle,
        }
    }
}

impl SubmitFlow {
    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn submit(&mut self, validation: &Validation) -> SubmitEffect {
        if self.state != SubmitState::Idle {
            return SubmitEffect::Ignored;
        }
        if !validation.is_valid() {
            return SubmitEffect::Rejected;
        }

        self.state = SubmitState::Sending;
        SubmitEffect::StartSending
    }

    pub fn send_finished(&mut self) -> SubmitEffect {
        if self.state != SubmitState::Sending {
            return SubmitEffect::Ignored;
        }

        self.state = SubmitState::Sent;
        SubmitEffect::Completed
    }

    pub fn rearm(&mut self) -> SubmitEffect {
        if self.state != SubmitState::Sent {
            return SubmitEffect::Ignored;
        }

        self.state = SubmitState::Idle;
        SubmitEffect::Rearmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> Vec<Field> {
        vec![
            Field::new("name", FieldKind::Text, "Ada Lovelace"),
            Field::new("email", FieldKind::Email, "ada@example.com"),
            Field::new("message", FieldKind::Text, "I would like to talk about a project."),
        ]
    }

    #[test]
    fn email_pattern() {
        assert!(is_email("a@b.c"));
        assert!(is_email("first.last@sub.example.org"));
        assert!(is_email("x@a.b.c"));

        assert!(!is_email("plainaddress"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@example"));
        assert!(!is_email("a@.com"));
        assert!(!is_email("a@example."));
        assert!(!is_email("a@@example.com"));
        assert!(!is_email("a@b@example.com"));
        assert!(!is_email("a b@example.com"));
        assert!(!is_email(" a@example.com"));
    }

    #[test]
    fn empty_required_field_is_invalid_and_blocks_submission() {
        let mut fields = valid_fields();
        fields[0].value = "   ".to_string();
        let validation = validate(&fields);
        let mut flow = SubmitFlow::default();

        assert!(!validation.is_valid());
        assert_eq!(validation.invalid_ids().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(flow.submit(&validation), SubmitEffect::Rejected);
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn malformed_email_is_invalid() {
        let mut fields = valid_fields();
        fields[1].value = "ada.example.com".to_string();

        let validation = validate(&fields);

        assert!(!validation.is_valid());
        assert_eq!(validation.invalid_ids().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn short_message_is_invalid() {
        let mut fields = valid_fields();
        fields[2].value = "  hi there ".to_string();

        assert_eq!(validate(&fields).invalid_ids().collect::<Vec<_>>(), vec!["message"]);
    }

    #[test]
    fn valid_submission_completes_and_rearms() {
        let validation = validate(&valid_fields());
        let mut flow = SubmitFlow::default();

        assert!(validation.is_valid());
        assert_eq!(flow.submit(&validation), SubmitEffect::StartSending);
        assert_eq!(flow.submit(&validation), SubmitEffect::Ignored);
        assert_eq!(flow.send_finished(), SubmitEffect::Completed);
        assert_eq!(flow.state(), SubmitState::Sent);
        assert_eq!(flow.submit(&validation), SubmitEffect::Ignored);
        assert_eq!(flow.rearm(), SubmitEffect::Rearmed);
        assert_eq!(flow.state(), SubmitState::Idle);
        assert_eq!(flow.submit(&validation), SubmitEffect::StartSending);
    }

    #[test]
    fn out_of_order_transitions_are_ignored() {
        let mut flow = SubmitFlow::default();

        assert_eq!(flow.send_finished(), SubmitEffect::Ignored);
        assert_eq!(flow.rearm(), SubmitEffect::Ignored);
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn button_markup_escapes_label() {
        assert_eq!(
            button_markup(SENT_ICON, "Đã gửi!"),
            "<i class=\"fas fa-check me-2\"></i>Đã gửi!"
        );
        assert_eq!(
            button_markup(IDLE_ICON, "<Send & go>"),
            "<i class=\"fas fa-paper-plane me-2\"></i>&lt;Send &amp; go&gt;"
        );
    }

    #[test]
    fn input_type_maps_to_kind() {
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type("textarea"), FieldKind::Text);
    }
}
