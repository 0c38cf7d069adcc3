// SPDX-License-Identifier: MPL-2.0
//! Contact page: validated form plus the social links sidebar.
//!
//! The form is a three-phase machine (editing → submitting → submitted).
//! Validation itself lives in `domain::contact`; this module owns the view
//! state and the phase transitions. The submission transport is simulated
//! with a fixed delay and always resolves; the parent application runs the
//! delays as tasks and feeds the results back as messages.

use crate::content;
use crate::domain::contact::{self, ContactForm, ProjectType, ValidationErrors};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, pick_list, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::fmt;
use std::time::Duration;

/// Simulated transport delay before a submission "succeeds".
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long the success panel stays up before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Submission lifecycle. At most one submission is in flight per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// View state of the contact page.
#[derive(Debug, Default)]
pub struct State {
    form: ContactForm,
    errors: ValidationErrors,
    phase: Phase,
}

impl State {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

/// Wrapper giving `ProjectType` a localized `Display` for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTypeOption {
    pub value: ProjectType,
    label: String,
}

impl ProjectTypeOption {
    #[must_use]
    pub fn new(value: ProjectType, i18n: &I18n) -> Self {
        Self {
            label: i18n.tr(value.i18n_key()),
            value,
        }
    }
}

impl fmt::Display for ProjectTypeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Messages emitted by the contact page.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    ProjectTypeSelected(ProjectTypeOption),
    MessageChanged(String),
    SubmitPressed,
    /// The simulated transport finished.
    SubmissionCompleted,
    /// The success panel timed out; return to the empty form.
    ResetRequested,
}

/// Side effects the parent application must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the simulated submission delay.
    StartSubmission,
    /// Start the delay after which the form resets.
    ScheduleReset,
}

/// Process a contact message and return the effect to run.
pub fn update(state: &mut State, message: Message) -> Effect {
    match message {
        Message::NameChanged(value) => {
            if state.phase == Phase::Editing {
                state.errors.name = contact::validate_name(&value);
                state.form.name = value;
            }
            Effect::None
        }
        Message::EmailChanged(value) => {
            if state.phase == Phase::Editing {
                state.errors.email = contact::validate_email(&value);
                state.form.email = value;
            }
            Effect::None
        }
        Message::ProjectTypeSelected(option) => {
            if state.phase == Phase::Editing {
                state.form.project_type = Some(option.value);
                state.errors.project_type = None;
            }
            Effect::None
        }
        Message::MessageChanged(value) => {
            if state.phase == Phase::Editing {
                state.errors.message = contact::validate_message(&value);
                state.form.message = value;
            }
            Effect::None
        }
        Message::SubmitPressed => {
            // One in-flight submission at a time; repeated requests are
            // dropped until the form is editable again.
            if state.phase != Phase::Editing {
                return Effect::None;
            }
            state.errors = contact::validate(&state.form);
            if state.errors.has_errors() {
                return Effect::None;
            }
            state.phase = Phase::Submitting;
            Effect::StartSubmission
        }
        Message::SubmissionCompleted => {
            if state.phase != Phase::Submitting {
                return Effect::None;
            }
            state.phase = Phase::Submitted;
            Effect::ScheduleReset
        }
        Message::ResetRequested => {
            *state = State::default();
            Effect::None
        }
    }
}

/// Contextual data needed to render the contact page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the contact page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("contact-subtitle")).size(typography::BODY_LG));

    let form_panel: Element<'_, Message> = match ctx.state.phase {
        Phase::Submitted => build_success_panel(&ctx),
        _ => build_form(&ctx),
    };

    let body = Row::new()
        .spacing(spacing::LG)
        .push(
            Container::new(form_panel)
                .padding(spacing::LG)
                .width(Length::FillPortion(3))
                .style(styles::container::card),
        )
        .push(
            Container::new(build_social_panel(&ctx))
                .padding(spacing::LG)
                .width(Length::FillPortion(2))
                .style(styles::container::card),
        );

    Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(heading)
        .push(body)
        .into()
}

fn build_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let submitting = ctx.state.phase == Phase::Submitting;
    let form = &ctx.state.form;
    let errors = &ctx.state.errors;

    let name_field = build_field(
        ctx.i18n,
        ctx.i18n.tr("contact-form-name"),
        text_input("John Doe", &form.name)
            .on_input(Message::NameChanged)
            .padding(spacing::XS)
            .size(typography::BODY)
            .into(),
        errors.name,
    );

    let email_field = build_field(
        ctx.i18n,
        ctx.i18n.tr("contact-form-email"),
        text_input("john@example.com", &form.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::XS)
            .size(typography::BODY)
            .into(),
        errors.email,
    );

    let options: Vec<ProjectTypeOption> = ProjectType::ALL
        .iter()
        .map(|value| ProjectTypeOption::new(*value, ctx.i18n))
        .collect();
    let selected = form
        .project_type
        .map(|value| ProjectTypeOption::new(value, ctx.i18n));
    let project_field = build_field(
        ctx.i18n,
        ctx.i18n.tr("contact-form-project"),
        pick_list(options, selected, Message::ProjectTypeSelected)
            .placeholder(ctx.i18n.tr("contact-form-project-placeholder"))
            .padding(spacing::XS)
            .text_size(typography::BODY)
            .width(Length::Fill)
            .into(),
        errors.project_type,
    );

    let message_field = build_field(
        ctx.i18n,
        ctx.i18n.tr("contact-form-message"),
        text_input("Tell us about your project...", &form.message)
            .on_input(Message::MessageChanged)
            .padding(spacing::XS)
            .size(typography::BODY)
            .into(),
        errors.message,
    );

    let submit_label = if submitting {
        ctx.i18n.tr("contact-form-sending")
    } else {
        ctx.i18n.tr("contact-form-submit")
    };
    let mut submit = button(Text::new(submit_label).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::button::primary);
    if !submitting {
        submit = submit.on_press(Message::SubmitPressed);
    }

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(name_field)
        .push(email_field)
        .push(project_field)
        .push(message_field)
        .push(submit)
        .into()
}

/// Build a labeled input with an optional error line underneath.
fn build_field<'a>(
    i18n: &'a I18n,
    label: String,
    input: Element<'a, Message>,
    error: Option<&'static str>,
) -> Element<'a, Message> {
    let mut col = Column::new().spacing(spacing::XXS);

    col = col.push(Text::new(label).size(typography::BODY_SM));
    col = col.push(input);

    if let Some(key) = error {
        col = col.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    col.into()
}

fn build_success_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new("✓")
                .size(typography::DISPLAY)
                .color(palette::SUCCESS_500),
        )
        .push(Text::new(ctx.i18n.tr("contact-form-success")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("contact-form-success-note")).size(typography::BODY))
        .into()
}

fn build_social_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut col = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("contact-social-title")).size(typography::TITLE_SM));

    for social in content::SOCIAL_LINKS {
        col = col.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(social.label).size(typography::BODY_LG))
                .push(
                    Text::new(social.handle)
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_400),
                ),
        );
    }

    col.into()
}
