use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::catalog::{find_provider, Provider, ServiceTab, Tariff};
use crate::compare::CompareSet;

#[derive(Properties, PartialEq)]
pub struct ServiceTabsProps {
    pub active: ServiceTab,
    pub on_select: Callback<ServiceTab>,
}

#[function_component(ServiceTabs)]
pub fn service_tabs(props: &ServiceTabsProps) -> Html {
    html! {
        <div class="service-tabs" role="tablist">
            {
                ServiceTab::all().map(|tab| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    let active = props.active == tab;
                    html! {
                        <button
                            role="tab"
                            aria-selected={active.to_string()}
                            class={classes!("service-tab", active.then(|| "active"))}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TariffCardProps {
    pub tariff: Tariff,
    pub provider: Option<Provider>,
    pub compared: bool,
    pub on_toggle_compare: Callback<String>,
    pub on_order: Callback<String>,
}

#[function_component(TariffCard)]
pub fn tariff_card(props: &TariffCardProps) -> Html {
    let tariff = &props.tariff;

    let onchange = {
        let on_toggle_compare = props.on_toggle_compare.clone();
        let id = tariff.id.clone();
        let compared = props.compared;
        Callback::from(move |e: Event| {
            // `checked` mirrors the compare set. Reset the browser's own flip here; an accepted
            // toggle re-renders the card with the new `compared` and Yew patches `checked` again.
            let input: HtmlInputElement = e.target_unchecked_into();
            input.set_checked(compared);
            on_toggle_compare.emit(id.clone());
        })
    };
    let order = {
        let on_order = props.on_order.clone();
        let id = tariff.id.clone();
        Callback::from(move |_: MouseEvent| on_order.emit(id.clone()))
    };

    html! {
        <div class={classes!("tariff-card", tariff.featured.then(|| "featured"))}>
            <div class="tariff-card-top">
                <div class="tariff-badges">
                    {
                        if let Some(provider) = &props.provider {
                            html! { <img class="tariff-logo" src={provider.logo.clone()} alt={provider.name.clone()} /> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if tariff.featured {
                            html! { <span class="badge-hit">{"ХИТ ПРОДАЖ"}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <label class="compare-toggle" title="Добавить к сравнению">
                    <input type="checkbox" checked={props.compared} {onchange} />
                    <span>{"Сравнить"}</span>
                </label>
            </div>
            <h3 class="tariff-name">{&tariff.name}</h3>
            <div class="tariff-price">{tariff.price.to_string()}</div>
            <div class="tariff-specs">
                <div class="tariff-spec">{"⚡ "}{&tariff.speed}</div>
                {
                    if let Some(channels) = tariff.channels {
                        html! { <div class="tariff-spec">{format!("📺 {} каналов", channels)}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <ul class="tariff-features">
                { for tariff.features.iter().map(|feature| html! { <li>{feature}</li> }) }
            </ul>
            <button class="primary-button tariff-order" onclick={order}>{"Подключить"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TariffGridProps {
    pub tariffs: Vec<Tariff>,
    pub providers: Vec<Provider>,
    pub compared: CompareSet,
    pub on_toggle_compare: Callback<String>,
    pub on_order: Callback<String>,
    pub on_reset_filters: Callback<()>,
}

#[function_component(TariffGrid)]
pub fn tariff_grid(props: &TariffGridProps) -> Html {
    if props.tariffs.is_empty() {
        let reset = {
            let on_reset_filters = props.on_reset_filters.clone();
            Callback::from(move |_: MouseEvent| on_reset_filters.emit(()))
        };
        return html! {
            <div class="tariffs-empty">
                <p>{"По выбранным параметрам тарифов нет."}</p>
                <button class="outline-button" onclick={reset}>{"Сбросить фильтры"}</button>
            </div>
        };
    }

    html! {
        <div class="tariff-grid">
            {
                props.tariffs.iter().map(|tariff| {
                    html! {
                        <TariffCard
                            key={tariff.id.clone()}
                            tariff={tariff.clone()}
                            provider={find_provider(&props.providers, &tariff.provider).cloned()}
                            compared={props.compared.contains(&tariff.id)}
                            on_toggle_compare={props.on_toggle_compare.clone()}
                            on_order={props.on_order.clone()}
                        />
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .tariff-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 24px;
                }
                .tariff-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 24px;
                    border-radius: 16px;
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    transition: box-shadow 0.2s ease;
                }
                .tariff-card:hover {
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.1);
                }
                .tariff-card-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 8px;
                }
                .tariff-badges {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                }
                .tariff-logo {
                    width: 64px;
                    height: 64px;
                    object-fit: contain;
                }
                .badge-hit {
                    width: fit-content;
                    padding: 2px 8px;
                    border-radius: 6px;
                    background: #ef4444;
                    color: #ffffff;
                    font-size: 12px;
                    font-weight: 700;
                }
                .compare-toggle {
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    font-size: 12px;
                    color: #64748b;
                    cursor: pointer;
                }
                .tariff-name {
                    font-size: 20px;
                    margin: 8px 0;
                }
                .tariff-price {
                    font-size: 18px;
                    font-weight: 700;
                }
                .tariff-specs {
                    margin: 16px 0;
                    font-size: 14px;
                }
                .tariff-features {
                    flex: 1;
                    margin: 0 0 16px;
                    padding-left: 18px;
                    font-size: 14px;
                }
                .tariff-features li::marker {
                    content: "✓ ";
                    color: #16a34a;
                }
                .tariffs-empty {
                    text-align: center;
                    padding: 48px 0;
                    color: #64748b;
                }
                "#}
            </style>
        </div>
    }
}
