use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::web_sys;
use leptos_icons::Icon;

use super::sections::SectionHeader;

/// Values typed into the contact form. Never leaves the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::str::FromStr for ContactField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(()),
        }
    }
}

impl ContactFormState {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Updates the field called `name`. Unknown names are ignored.
    pub fn apply_change(&mut self, name: &str, value: String) -> bool {
        match name.parse() {
            Ok(field) => {
                self.set(field, value);
                true
            }
            Err(()) => false,
        }
    }

    /// Clears the form, returning the acknowledgment for what was sent.
    pub fn submit(&mut self) -> Acknowledgement {
        let submitted = std::mem::take(self);
        Acknowledgement {
            name: submitted.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    pub name: String,
}

impl std::fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vielen Dank für Ihre Nachricht, {}!", self.name)
    }
}

fn info_cards() -> [(icondata::Icon, &'static str, &'static str); 3] {
    [
        (icondata::LuMapPin, "Adresse", "Berlin, Deutschland"),
        (icondata::LuMail, "Email", "davidhoffert@ymail.com"),
        (icondata::LuPhone, "Telefon", "0178 8166644"),
    ]
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let acknowledgement = RwSignal::new(None::<Acknowledgement>);

    // every control carries its field in `name`
    let on_input = move |ev: Event| {
        let Some(name) = event_target::<web_sys::Element>(&ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(&ev);
        form.update(|f| {
            if !f.apply_change(&name, value) {
                log::warn!("contact form input with unknown name {name:?}");
            }
        });
    };
    let value_of = move |field: ContactField| {
        move || {
            form.with(|f| match field {
                ContactField::Name => f.name.clone(),
                ContactField::Email => f.email.clone(),
                ContactField::Message => f.message.clone(),
            })
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let ack = form.try_update(ContactFormState::submit);
        log::debug!("contact form submitted locally");
        acknowledgement.set(ack);
    };

    view! {
        <section id="contact" class="contact-section px-8 py-16">
            <SectionHeader title="Kontakt" lead="Treten Sie mit mir in Verbindung" />
            <div class="mx-auto grid max-w-5xl gap-8 md:grid-cols-2">
                <form class="contact-form flex flex-col gap-4" on:submit=on_submit>
                    <input
                        type="text"
                        name=ContactField::Name.as_str()
                        placeholder="Ihr Name"
                        required
                        prop:value=value_of(ContactField::Name)
                        on:input=on_input
                    />
                    <input
                        type="email"
                        name=ContactField::Email.as_str()
                        placeholder="Ihre E-Mail"
                        required
                        prop:value=value_of(ContactField::Email)
                        on:input=on_input
                    />
                    <textarea
                        name=ContactField::Message.as_str()
                        placeholder="Ihre Nachricht"
                        rows="5"
                        required
                        prop:value=value_of(ContactField::Message)
                        on:input=on_input
                    />
                    <button type="submit" class="submit-button">
                        "Nachricht senden"
                    </button>
                    {move || {
                        acknowledgement
                            .get()
                            .map(|ack| {
                                view! {
                                    <p class="acknowledgement" role="status">
                                        {ack.to_string()}
                                    </p>
                                }
                            })
                    }}
                </form>

                <div class="contact-info flex flex-col gap-4">
                    {info_cards()
                        .into_iter()
                        .map(|(icon, label, value)| {
                            view! {
                                <div class="info-card flex flex-row items-center gap-4">
                                    <Icon icon=icon />
                                    <div>
                                        <h4 class="font-bold">{label}</h4>
                                        <p>{value}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        ContactFormState {
            name: "Anna".to_string(),
            email: "anna@example.org".to_string(),
            message: "Hallo!".to_string(),
        }
    }

    #[test]
    fn submit_acknowledges_name_and_resets_every_field() {
        let mut form = filled();

        let ack = form.submit();

        assert_eq!(ack.name, "Anna");
        assert!(ack.to_string().contains("Anna"));
        assert_eq!(form, ContactFormState::default());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn changing_email_leaves_other_fields_alone() {
        let mut form = filled();

        form.set(ContactField::Email, "neu@example.org".to_string());

        assert_eq!(form.email, "neu@example.org");
        assert_eq!(form.name, "Anna");
        assert_eq!(form.message, "Hallo!");
    }

    #[test]
    fn changes_by_field_name() {
        let mut form = ContactFormState::default();

        assert!(form.apply_change("message", "Text".to_string()));
        assert!(form.apply_change("name", "Ben".to_string()));
        assert!(!form.apply_change("phone", "123".to_string()));

        assert_eq!(
            form,
            ContactFormState {
                name: "Ben".to_string(),
                email: String::new(),
                message: "Text".to_string(),
            }
        );
    }

    #[test]
    fn each_control_name_updates_only_its_field() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled();
            let mut expected = filled();
            expected.set(field, "geändert".to_string());

            assert!(form.apply_change(field.as_str(), "geändert".to_string()));
            assert_eq!(form, expected, "{field:?}");
        }
    }

    #[test]
    fn field_names_round_trip_through_parse() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
        }
    }

    #[test]
    fn submitting_an_empty_form_still_acknowledges() {
        let mut form = ContactFormState::default();
        assert_eq!(
            form.submit().to_string(),
            "Vielen Dank für Ihre Nachricht, !"
        );
    }
}
