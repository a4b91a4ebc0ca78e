use leptos::{ev::SubmitEvent, prelude::*};

use super::hero::{SocialLinks, CONTACT_EMAIL, CONTACT_MAILTO};
use super::use_i18n;
use crate::contact::{ContactForm, ContactMessage, SubmissionState};

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    fn get(self, msg: &ContactMessage) -> &str {
        match self {
            Field::Name => &msg.name,
            Field::Email => &msg.email,
            Field::Subject => &msg.subject,
            Field::Message => &msg.message,
        }
    }

    fn get_mut(self, msg: &mut ContactMessage) -> &mut String {
        match self {
            Field::Name => &mut msg.name,
            Field::Email => &mut msg.email,
            Field::Subject => &mut msg.subject,
            Field::Message => &mut msg.message,
        }
    }

    fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Label and placeholder translation keys.
    fn keys(self) -> (&'static str, &'static str) {
        match self {
            Field::Name => ("contact.name", "contact.name_placeholder"),
            Field::Email => ("contact.email_field", "contact.email_placeholder"),
            Field::Subject => ("contact.subject", "contact.subject_placeholder"),
            Field::Message => ("contact.message", "contact.message_placeholder"),
        }
    }
}

#[cfg(feature = "hydrate")]
mod submit {
    use serde::Deserialize;
    use thiserror::Error;

    use crate::contact::ContactMessage;

    #[derive(Error, Debug)]
    pub enum SubmitError {
        #[error("couldn't determine the page origin")]
        Origin,
        #[error(transparent)]
        Http(#[from] reqwest::Error),
        #[error("server answered {status}: {message}")]
        Rejected { status: u16, message: String },
    }

    #[derive(Deserialize)]
    struct ServerMessage {
        #[serde(default)]
        message: String,
    }

    pub async fn post_message(msg: &ContactMessage) -> Result<(), SubmitError> {
        let origin = leptos::prelude::window()
            .location()
            .origin()
            .map_err(|_| SubmitError::Origin)?;
        let res = reqwest::Client::new()
            .post(format!("{origin}/api/send-email"))
            .json(msg)
            .send()
            .await?;
        if res.status().is_success() {
            return Ok(());
        }
        let status = res.status().as_u16();
        let message = res
            .json::<ServerMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        Err(SubmitError::Rejected { status, message })
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let i18n = use_i18n();
    let (label_key, placeholder_key) = field.keys();
    let value = move || form.with(|f| field.get(&f.draft).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| *field.get_mut(&mut f.draft) = event_target_value(&ev))
    };
    let input_class = "w-full px-4 py-3 rounded-lg border bg-background focus:outline-none focus:ring-2 focus:ring-primary";

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium mb-2">
                {i18n.t(label_key)}
            </label>
            {match field {
                Field::Message => {
                    view! {
                        <textarea
                            id=field.id()
                            name=field.id()
                            rows="5"
                            required
                            class=input_class
                            placeholder=i18n.t(placeholder_key)
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    }
                        .into_any()
                }
                _ => {
                    view! {
                        <input
                            id=field.id()
                            name=field.id()
                            type=if matches!(field, Field::Email) { "email" } else { "text" }
                            required
                            class=input_class
                            placeholder=i18n.t(placeholder_key)
                            prop:value=value
                            on:input=on_input
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let i18n = use_i18n();
    let form = RwSignal::new(ContactForm::default());
    let state = move || form.with(ContactForm::state);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(msg) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let delivered = match submit::post_message(&msg).await {
                Ok(()) => true,
                Err(err) => {
                    log::error!("contact submission failed: {err}");
                    false
                }
            };
            let Some(attempt) = form.try_update(|f| f.finish(delivered)) else {
                return;
            };
            set_timeout(
                move || form.update(|f| f.expire(attempt)),
                crate::contact::STATUS_DISPLAY,
            );
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = msg;
    };

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <FormField form=form field=Field::Name />
                <FormField form=form field=Field::Email />
            </div>
            <FormField form=form field=Field::Subject />
            <FormField form=form field=Field::Message />
            <button
                type="submit"
                class="w-full px-6 py-3 rounded-lg bg-primary text-white font-medium hover:bg-primary/80 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || state() == SubmissionState::Sending
            >
                {move || match state() {
                    SubmissionState::Sending => i18n.t("contact.sending")(),
                    _ => i18n.t("contact.send")(),
                }}
            </button>
            {move || match state() {
                SubmissionState::Success => {
                    Some(
                        view! {
                            <p role="status" class="p-4 rounded-lg bg-success/10 text-success">
                                "✅ "
                                {i18n.t("contact.success")}
                            </p>
                        }
                            .into_any(),
                    )
                }
                SubmissionState::Error => {
                    Some(
                        view! {
                            <p role="alert" class="p-4 rounded-lg bg-danger/10 text-danger">
                                "❌ "
                                {i18n.t("contact.error")}
                            </p>
                        }
                            .into_any(),
                    )
                }
                SubmissionState::Idle | SubmissionState::Sending => None,
            }}
        </form>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="contact" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">{i18n.t("contact.title")}</h2>
                    <p class="text-xl max-w-2xl mx-auto text-secondary">
                        {i18n.t("contact.subtitle")}
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <h3 class="text-2xl font-bold">{i18n.t("contact.info_title")}</h3>
                        <div class="space-y-4">
                            <p>
                                <span class="font-semibold">"📧 " {i18n.t("contact.email")} ": "</span>
                                <a href=CONTACT_MAILTO class="text-primary hover:underline">
                                    {CONTACT_EMAIL}
                                </a>
                            </p>
                            <p>
                                <span class="font-semibold">
                                    "📍 " {i18n.t("contact.location")} ": "
                                </span>
                                {i18n.t("contact.location_value")}
                            </p>
                        </div>
                        <SocialLinks />
                        <div class="p-6 rounded-lg bg-surface">
                            <p class="font-semibold text-primary mb-2">{i18n.t("contact.cta")}</p>
                            <h4 class="font-bold mb-1">{i18n.t("contact.available")}</h4>
                            <p class="text-secondary">{i18n.t("contact.available_text")}</p>
                        </div>
                    </div>
                    <div class="p-8 rounded-lg shadow-lg bg-surface">
                        <h3 class="text-2xl font-bold mb-6">{i18n.t("contact.form_title")}</h3>
                        <MessageForm />
                    </div>
                </div>
            </div>
        </section>
    }
}
