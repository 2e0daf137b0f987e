use std::rc::Rc;

use log::{debug, error, info, warn};
use yew::prelude::*;

use crate::catalog::{filter_tariffs, find_provider, find_tariff, toggle_provider, ServiceTab, Tariff};
use crate::compare::CompareSet;
use crate::components::{
    comparison::Comparison,
    dialog::{Dialog, Overlay},
    footer::Footer,
    header::Header,
    lead_form::LeadForm,
    providers::ProviderStrip,
    tariffs::{ServiceTabs, TariffGrid},
    toast::{Notice, Toast},
};
use crate::config::{PageConfig, PageVariant};
use crate::lead::Lead;
use crate::pages::faq::Faq;
use crate::pages::legal::{CookiesPolicy, PrivacyPolicy, UserAgreement};

/// Page state changes caused by one accepted lead.
#[derive(Debug, PartialEq)]
struct LeadOutcome {
    overlay: Overlay,
    notice: Notice,
}

impl LeadOutcome {
    fn after_submit(overlay: &Overlay, close_on_submit: bool) -> Self {
        Self {
            overlay: overlay.after_lead_submitted(close_on_submit),
            notice: Notice::lead_sent(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: PageVariant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = use_memo(
        |variant: &PageVariant| {
            variant.load().map(Rc::new).map_err(|e| {
                error!("Failed to load {} page config: {}", variant.name(), e);
                e
            })
        },
        props.variant,
    );

    match &*config {
        // Keyed by variant so switching routes starts from fresh page state.
        Ok(config) => html! {
            <LandingPage key={props.variant.name()} variant={props.variant} config={config.clone()} />
        },
        Err(e) => html! {
            <div class="config-error">
                <h1>{"Страница временно недоступна"}</h1>
                <p>{e.to_string()}</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct LandingPageProps {
    variant: PageVariant,
    config: Rc<PageConfig>,
}

#[function_component(LandingPage)]
fn landing_page(props: &LandingPageProps) -> Html {
    let config = &props.config;
    let features = &config.features;

    let selected_provider = use_state(|| None::<String>);
    let tab = use_state(ServiceTab::default);
    let compare = use_state(CompareSet::new);
    let overlay = use_state(Overlay::default);
    let notice = use_state(|| None::<Notice>);

    {
        let variant = props.variant;
        let tariff_count = config.tariffs.len();
        use_effect_with_deps(
            move |_| {
                info!("Rendering {} landing page with {} tariffs", variant.name(), tariff_count);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_select_provider = {
        let selected_provider = selected_provider.clone();
        Callback::from(move |id: String| {
            let next = toggle_provider((*selected_provider).as_deref(), &id);
            info!("Provider filter set to {:?}", next);
            selected_provider.set(next);
        })
    };

    let on_select_tab = {
        let tab = tab.clone();
        Callback::from(move |next: ServiceTab| tab.set(next))
    };

    let on_reset_filters = {
        let selected_provider = selected_provider.clone();
        let tab = tab.clone();
        Callback::from(move |_: ()| {
            selected_provider.set(None);
            tab.set(ServiceTab::All);
        })
    };

    let show_notice = {
        let notice = notice.clone();
        Callback::from(move |next: Notice| notice.set(Some(next.after((*notice).as_ref()))))
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let on_toggle_compare = {
        let compare = compare.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |id: String| {
            let mut next = (*compare).clone();
            match next.toggle(&id) {
                Ok(change) => {
                    debug!("Compare {:?} tariff {}", change, id);
                    compare.set(next);
                }
                Err(e) => {
                    warn!("Compare toggle for tariff {} rejected: {}", id, e);
                    show_notice.emit(Notice::compare_limit());
                }
            }
        })
    };

    let on_clear_compare = {
        let compare = compare.clone();
        Callback::from(move |_: ()| {
            let mut next = (*compare).clone();
            next.clear();
            compare.set(next);
        })
    };

    let open_overlay = {
        let overlay = overlay.clone();
        Callback::from(move |next: Overlay| overlay.set(next))
    };

    let close_overlay = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(Overlay::None))
    };

    let on_order = {
        let overlay = overlay.clone();
        Callback::from(move |id: String| overlay.set(Overlay::order_for(&id)))
    };

    let open_order = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(Overlay::order()))
    };

    let on_lead = {
        let overlay = overlay.clone();
        let show_notice = show_notice.clone();
        let variant = props.variant;
        let close_on_submit = features.close_order_on_submit;
        Callback::from(move |lead: Lead| {
            info!(
                "Lead submitted on {} page (tariff: {:?}, with comment: {})",
                variant.name(),
                lead.tariff,
                lead.comment.is_some()
            );
            let outcome = LeadOutcome::after_submit(&overlay, close_on_submit);
            show_notice.emit(outcome.notice);
            if outcome.overlay != *overlay {
                overlay.set(outcome.overlay);
            }
        })
    };

    let active_tab = if features.service_tabs { *tab } else { ServiceTab::All };
    let visible: Vec<Tariff> = filter_tariffs(
        &config.tariffs,
        (*selected_provider).as_deref(),
        active_tab.category(),
    )
    .into_iter()
    .cloned()
    .collect();

    let provider_chip = (*selected_provider)
        .as_deref()
        .and_then(|id| find_provider(&config.providers, id))
        .map(|provider| {
            let clear = {
                let on_select_provider = on_select_provider.clone();
                let id = provider.id.clone();
                Callback::from(move |_: MouseEvent| on_select_provider.emit(id.clone()))
            };
            html! {
                <div class="filter-chip">
                    {format!("Провайдер: {}", provider.name)}
                    <button onclick={clear} aria-label="Сбросить провайдера">{"×"}</button>
                </div>
            }
        })
        .unwrap_or_else(|| html! {});

    let dialog = match &*overlay {
        Overlay::None => html! {},
        Overlay::Order { tariff } => {
            let tariff = tariff
                .as_deref()
                .and_then(|id| find_tariff(&config.tariffs, id))
                .map(|t| (t.id.clone(), t.name.clone()));
            html! {
                <Dialog
                    title="Оставить заявку"
                    description={Some("Заполните форму или позвоните нам напрямую".to_string())}
                    on_close={close_overlay.clone()}
                >
                    <LeadForm
                        id_prefix="modal"
                        with_comment={features.comment_field}
                        with_call_button=true
                        {tariff}
                        on_submitted={on_lead.clone()}
                    />
                </Dialog>
            }
        }
        Overlay::PrivacyPolicy => html! {
            <Dialog title="Политика конфиденциальности" wide=true on_close={close_overlay.clone()}>
                <PrivacyPolicy />
            </Dialog>
        },
        Overlay::UserAgreement => html! {
            <Dialog title="Пользовательское соглашение" wide=true on_close={close_overlay.clone()}>
                <UserAgreement />
            </Dialog>
        },
        Overlay::CookiesPolicy => html! {
            <Dialog title="Политика использования Cookie" wide=true on_close={close_overlay.clone()}>
                <CookiesPolicy />
            </Dialog>
        },
    };

    html! {
        <div class={classes!("landing-page", overlay.is_open().then(|| "modal-open"))}>
            <Header with_order_link={features.inline_order} />

            <section class="hero">
                <div class="hero-decor" aria-hidden="true">
                    <span class="hero-ring ring-1"></span>
                    <span class="hero-ring ring-2"></span>
                    <span class="hero-ring ring-3"></span>
                    <span class="hero-ring ring-4"></span>
                </div>
                <div class="container hero-content">
                    <h1>{&config.hero.title}</h1>
                    <p class="hero-subtitle">{&config.hero.subtitle}</p>
                    <button class="hero-cta" onclick={open_order}>{format!("{} →", config.hero.cta)}</button>
                </div>
            </section>

            <ProviderStrip
                providers={config.providers.clone()}
                selected={(*selected_provider).clone()}
                on_select={on_select_provider.clone()}
            />

            <section id="tariffs" class="tariffs-section">
                <div class="container">
                    <h2 class="section-title">{"Тарифы"}</h2>
                    {
                        if features.service_tabs {
                            html! { <ServiceTabs active={active_tab} on_select={on_select_tab} /> }
                        } else {
                            html! {}
                        }
                    }
                    { provider_chip }
                    <TariffGrid
                        tariffs={visible}
                        providers={config.providers.clone()}
                        compared={(*compare).clone()}
                        on_toggle_compare={on_toggle_compare.clone()}
                        {on_order}
                        {on_reset_filters}
                    />
                </div>
            </section>

            <Comparison
                compare={(*compare).clone()}
                catalog={config.tariffs.clone()}
                providers={config.providers.clone()}
                on_remove={on_toggle_compare.clone()}
                on_clear={on_clear_compare}
            />

            {
                if features.inline_order {
                    html! {
                        <section id="order" class="order-section">
                            <div class="container narrow">
                                <h2 class="section-title">{"Оставить заявку"}</h2>
                                <p class="section-subtitle">{"Проверим подключение по вашему адресу и перезвоним в течение часа"}</p>
                                <LeadForm
                                    id_prefix="order"
                                    with_comment={features.comment_field}
                                    on_submitted={on_lead.clone()}
                                />
                            </div>
                        </section>
                    }
                } else {
                    html! {}
                }
            }

            <Faq entries={config.faq.clone()} />

            <Footer on_open={open_overlay} />

            { dialog }

            <Toast notice={(*notice).clone()} on_dismiss={dismiss_notice} />

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #0f172a;
                    background: #f8fafc;
                }
                html {
                    scroll-behavior: smooth;
                }
                .landing-page.modal-open {
                    height: 100vh;
                    overflow: hidden;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 16px;
                }
                .container.narrow {
                    max-width: 560px;
                }
                .section-title {
                    font-size: 30px;
                    font-weight: 700;
                    text-align: center;
                    margin: 0 0 48px;
                }
                .section-subtitle {
                    margin: -32px 0 32px;
                    text-align: center;
                    color: #64748b;
                }
                .primary-button,
                .outline-button {
                    padding: 10px 18px;
                    border-radius: 8px;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    text-decoration: none;
                }
                .primary-button {
                    width: 100%;
                    border: none;
                    background: #2563eb;
                    color: #ffffff;
                }
                .primary-button:hover {
                    background: #1d4ed8;
                }
                .outline-button {
                    border: 1px solid #cbd5e1;
                    background: #ffffff;
                    color: #0f172a;
                }
                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 80px 0;
                    color: #ffffff;
                    background: linear-gradient(135deg, #2563eb, #7c3aed, #ff4f12);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 768px;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 36px;
                    margin: 0 0 16px;
                }
                .hero-subtitle {
                    font-size: 18px;
                    margin: 0 0 32px;
                    opacity: 0.9;
                }
                .hero-cta {
                    padding: 14px 32px;
                    border: none;
                    border-radius: 8px;
                    background: #ffffff;
                    color: #0f172a;
                    font-size: 18px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-decor {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                }
                .hero-ring {
                    position: absolute;
                    border: 2px solid #ffffff;
                    border-radius: 50%;
                    animation: heroPulse 2s ease-in-out infinite;
                }
                .ring-1 { top: 40px; left: 40px; width: 128px; height: 128px; }
                .ring-2 { top: 80px; right: 80px; width: 96px; height: 96px; animation-delay: 0.5s; }
                .ring-3 { bottom: 80px; left: 25%; width: 80px; height: 80px; animation-delay: 1s; }
                .ring-4 { top: 50%; right: 33%; width: 64px; height: 64px; animation-delay: 1.5s; }
                @keyframes heroPulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                .tariffs-section {
                    padding: 64px 0;
                    background: #eef2f7;
                }
                .service-tabs {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 8px;
                    margin-bottom: 32px;
                }
                .service-tab {
                    padding: 8px 16px;
                    border: 1px solid #cbd5e1;
                    border-radius: 999px;
                    background: #ffffff;
                    font: inherit;
                    cursor: pointer;
                }
                .service-tab.active {
                    border-color: #2563eb;
                    background: #2563eb;
                    color: #ffffff;
                }
                .filter-chip {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    margin-bottom: 24px;
                    padding: 6px 12px;
                    border-radius: 999px;
                    background: #dbeafe;
                    font-size: 14px;
                }
                .filter-chip button {
                    background: none;
                    border: none;
                    font-size: 16px;
                    cursor: pointer;
                }
                .tariffs-empty {
                    text-align: center;
                    padding: 48px 0;
                    color: #64748b;
                }
                .order-section {
                    padding: 64px 0;
                    background: #ffffff;
                }
                .legal-text h3 {
                    font-size: 16px;
                    margin: 16px 0 8px;
                }
                .legal-text ul {
                    padding-left: 20px;
                }
                .config-error {
                    max-width: 560px;
                    margin: 120px auto;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::NoticeKind;

    #[test]
    fn test_lead_closes_order_dialog_when_variant_says_so() {
        for variant in [PageVariant::Classic, PageVariant::Tabs] {
            let close = variant.load().unwrap().features.close_order_on_submit;
            let outcome = LeadOutcome::after_submit(&Overlay::order_for("1"), close);
            assert_eq!(outcome.overlay, Overlay::None, "{}", variant.name());
        }
    }

    #[test]
    fn test_lead_keeps_extended_order_dialog_open() {
        let close = PageVariant::Extended.load().unwrap().features.close_order_on_submit;
        let outcome = LeadOutcome::after_submit(&Overlay::order(), close);
        assert_eq!(outcome.overlay, Overlay::order());
    }

    #[test]
    fn test_lead_from_inline_form_leaves_other_overlays() {
        for overlay in [Overlay::None, Overlay::PrivacyPolicy] {
            let outcome = LeadOutcome::after_submit(&overlay, true);
            assert_eq!(outcome.overlay, overlay);
        }
    }

    #[test]
    fn test_lead_yields_one_success_notice() {
        let lead = Lead {
            name: "Иван".to_string(),
            phone: "+7 900 000-00-00".to_string(),
            address: "ул. Ленина, 1".to_string(),
            comment: None,
            tariff: Some("1".to_string()),
        };
        assert!(lead.submit().is_ok());

        let outcome = LeadOutcome::after_submit(&Overlay::order_for("1"), true);
        assert_eq!(outcome.notice, Notice::lead_sent());
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
    }
}
