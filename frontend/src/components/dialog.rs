use yew::prelude::*;

/// The one dialog currently shown over the page, if any.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Order {
        tariff: Option<String>,
    },
    PrivacyPolicy,
    UserAgreement,
    CookiesPolicy,
}

impl Overlay {
    pub fn order() -> Self {
        Overlay::Order { tariff: None }
    }

    pub fn order_for(tariff: &str) -> Self {
        Overlay::Order {
            tariff: Some(tariff.to_string()),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }

    pub fn is_order(&self) -> bool {
        matches!(self, Overlay::Order { .. })
    }

    /// State once a lead was accepted: only an open order dialog may close.
    pub fn after_lead_submitted(&self, close_on_submit: bool) -> Overlay {
        if close_on_submit && self.is_order() {
            Overlay::None
        } else {
            self.clone()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    /// Wide, scrollable layout for long legal text.
    #[prop_or_default]
    pub wide: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class={classes!("modal-content", props.wide.then(|| "modal-wide"))}
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <div class="modal-header">
                    <h2 class="modal-title">{&props.title}</h2>
                    <button class="modal-close" onclick={close} aria-label="Закрыть">{"×"}</button>
                </div>
                {
                    if let Some(description) = &props.description {
                        html! { <p class="modal-description">{description}</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 16px;
                    background: rgba(15, 23, 42, 0.6);
                }
                .modal-content {
                    width: 100%;
                    max-width: 460px;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 24px;
                    border-radius: 16px;
                    background: #ffffff;
                    color: #0f172a;
                }
                .modal-wide {
                    max-width: 720px;
                    max-height: 80vh;
                }
                .modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 16px;
                }
                .modal-title {
                    font-size: 20px;
                    font-weight: 700;
                    margin: 0;
                }
                .modal-close {
                    background: none;
                    border: none;
                    font-size: 24px;
                    cursor: pointer;
                    color: #64748b;
                }
                .modal-description {
                    margin: 8px 0 0;
                    color: #64748b;
                    font-size: 14px;
                }
                .modal-body {
                    margin-top: 16px;
                    font-size: 14px;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_states() {
        assert!(!Overlay::default().is_open());
        assert!(Overlay::order().is_order());
        assert_eq!(
            Overlay::order_for("2"),
            Overlay::Order { tariff: Some("2".to_string()) }
        );
        assert!(Overlay::CookiesPolicy.is_open());
        assert!(!Overlay::PrivacyPolicy.is_order());
    }

    #[test]
    fn test_after_lead_submitted() {
        assert_eq!(Overlay::order_for("3").after_lead_submitted(true), Overlay::None);
        assert_eq!(Overlay::order().after_lead_submitted(false), Overlay::order());
        assert_eq!(Overlay::UserAgreement.after_lead_submitted(true), Overlay::UserAgreement);
        assert_eq!(Overlay::None.after_lead_submitted(true), Overlay::None);
    }
}
