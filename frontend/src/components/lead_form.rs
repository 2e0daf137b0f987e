use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::lead::{Lead, LeadField};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Prefix for input ids, the modal and the inline form can be on screen together.
    pub id_prefix: String,
    #[prop_or_default]
    pub with_comment: bool,
    #[prop_or_default]
    pub with_call_button: bool,
    /// Display name of the tariff the form was opened for.
    #[prop_or_default]
    pub tariff: Option<(String, String)>,
    pub on_submitted: Callback<Lead>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let address = use_state(String::new);
    let comment = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let address = address.clone();
        let comment = comment.clone();
        let with_comment = props.with_comment;
        let tariff = props.tariff.as_ref().map(|(id, _)| id.clone());
        let on_submitted = props.on_submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let lead = Lead {
                name: (*name).clone(),
                phone: (*phone).clone(),
                address: (*address).clone(),
                comment: with_comment.then(|| (*comment).clone()),
                tariff: tariff.clone(),
            };
            match lead.submit() {
                Ok(lead) => {
                    name.set(String::new());
                    phone.set(String::new());
                    address.set(String::new());
                    comment.set(String::new());
                    on_submitted.emit(lead);
                }
                Err(e) => warn!("Lead form rejected: {}", e),
            }
        })
    };

    let text_input = |field: LeadField, kind: &'static str, placeholder: &'static str, state: &UseStateHandle<String>| {
        let id = format!("{}-{}", props.id_prefix, field_key(field));
        let oninput = {
            let state = state.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                state.set(input.value());
            })
        };
        html! {
            <div class="form-field">
                <label for={id.clone()}>{field.label()}</label>
                <input
                    id={id}
                    type={kind}
                    required=true
                    placeholder={placeholder}
                    value={(**state).clone()}
                    {oninput}
                />
            </div>
        }
    };

    html! {
        <div class="lead-form">
            {
                if props.with_call_button {
                    html! {
                        <>
                            <a class="outline-button call-button" href={config::phone_link()}>
                                {format!("📞 Позвонить {}", config::CONTACT_PHONE_DISPLAY)}
                            </a>
                            <div class="form-divider"><span>{"Или"}</span></div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some((_, tariff_name)) = &props.tariff {
                    html! { <p class="form-tariff">{format!("Тариф: {}", tariff_name)}</p> }
                } else {
                    html! {}
                }
            }
            <form {onsubmit}>
                { text_input(LeadField::Name, "text", "Иван Иванов", &name) }
                { text_input(LeadField::Phone, "tel", "+7 (999) 123-45-67", &phone) }
                { text_input(LeadField::Address, "text", "г. Москва, ул. Ленина, д. 1, кв. 1", &address) }
                {
                    if props.with_comment {
                        let id = format!("{}-comment", props.id_prefix);
                        let oninput = {
                            let comment = comment.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                comment.set(input.value());
                            })
                        };
                        html! {
                            <div class="form-field">
                                <label for={id.clone()}>{"Комментарий"}</label>
                                <textarea
                                    id={id}
                                    rows="3"
                                    placeholder="Удобное время для звонка, этаж, домофон"
                                    value={(*comment).clone()}
                                    {oninput}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary-button">{"Отправить заявку"}</button>
            </form>
            <style>
                {r#"
                .lead-form form {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                }
                .form-field label {
                    font-size: 14px;
                    font-weight: 500;
                }
                .form-field input,
                .form-field textarea {
                    padding: 10px 12px;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    font: inherit;
                }
                .call-button {
                    display: block;
                    text-align: center;
                }
                .form-divider {
                    position: relative;
                    margin: 16px 0;
                    text-align: center;
                    font-size: 12px;
                    text-transform: uppercase;
                    color: #64748b;
                }
                .form-divider::before {
                    content: "";
                    position: absolute;
                    top: 50%;
                    left: 0;
                    right: 0;
                    border-top: 1px solid #e2e8f0;
                }
                .form-divider span {
                    position: relative;
                    padding: 0 8px;
                    background: #ffffff;
                }
                .form-tariff {
                    font-weight: 600;
                    margin-bottom: 12px;
                }
                "#}
            </style>
        </div>
    }
}

fn field_key(field: LeadField) -> &'static str {
    match field {
        LeadField::Name => "name",
        LeadField::Phone => "phone",
        LeadField::Address => "address",
    }
}
