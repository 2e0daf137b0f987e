use yew::prelude::*;

use crate::catalog::{find_provider, Provider, Tariff};
use crate::compare::{CompareSet, COMPARE_LIMIT};

#[derive(Properties, PartialEq)]
pub struct ComparisonProps {
    pub compare: CompareSet,
    /// Full catalog the compared ids are resolved against.
    pub catalog: Vec<Tariff>,
    pub providers: Vec<Provider>,
    pub on_remove: Callback<String>,
    pub on_clear: Callback<()>,
}

fn compare_row(label: &str, tariffs: &[Tariff], cell: impl Fn(&Tariff) -> Html) -> Html {
    html! {
        <tr>
            <th scope="row">{label.to_string()}</th>
            { for tariffs.iter().map(|tariff| html! { <td>{cell(tariff)}</td> }) }
        </tr>
    }
}

#[function_component(Comparison)]
pub fn comparison(props: &ComparisonProps) -> Html {
    if props.compare.is_empty() {
        return html! {};
    }

    let clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let resolved: Vec<Tariff> = props.compare.resolve(&props.catalog).into_iter().cloned().collect();
    let tariffs = resolved.as_slice();

    html! {
        <section id="compare" class="compare-section">
            <div class="container">
                <div class="compare-header">
                    <h2 class="section-title">
                        {format!("Сравнение тарифов ({}/{})", props.compare.len(), COMPARE_LIMIT)}
                    </h2>
                    <button class="outline-button" onclick={clear}>{"Очистить"}</button>
                </div>
                <div class="compare-scroll">
                    <table class="compare-table">
                        <thead>
                            <tr>
                                <th></th>
                                {
                                    tariffs.iter().map(|tariff| {
                                        let remove = {
                                            let on_remove = props.on_remove.clone();
                                            let id = tariff.id.clone();
                                            Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
                                        };
                                        let provider = find_provider(&props.providers, &tariff.provider);
                                        html! {
                                            <th key={tariff.id.clone()} scope="col">
                                                {
                                                    if let Some(provider) = provider {
                                                        html! { <img class="tariff-logo" src={provider.logo.clone()} alt={provider.name.clone()} /> }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                                <div class="compare-name">{&tariff.name}</div>
                                                <button class="compare-remove" onclick={remove} aria-label="Убрать из сравнения">{"×"}</button>
                                            </th>
                                        }
                                    }).collect::<Html>()
                                }
                            </tr>
                        </thead>
                        <tbody>
                            { compare_row("Цена", tariffs, |t| html! { <strong>{t.price.to_string()}</strong> }) }
                            { compare_row("Скорость", tariffs, |t| html! { {t.speed.clone()} }) }
                            { compare_row("Каналов", tariffs, |t| html! { {t.channels.map_or("—".to_string(), |c| c.to_string())} }) }
                            { compare_row("Тип", tariffs, |t| html! { {t.category.label()} }) }
                            { compare_row("Преимущества", tariffs, |t| html! {
                                <ul class="compare-features">
                                    { for t.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                                </ul>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
            <style>
                {r#"
                .compare-section {
                    padding: 64px 0;
                }
                .compare-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 32px;
                }
                .compare-header .section-title {
                    margin: 0;
                    text-align: left;
                }
                .compare-scroll {
                    overflow-x: auto;
                }
                .compare-table {
                    width: 100%;
                    border-collapse: collapse;
                    background: #ffffff;
                    border-radius: 16px;
                }
                .compare-table th,
                .compare-table td {
                    padding: 16px;
                    border-bottom: 1px solid #e2e8f0;
                    text-align: left;
                    vertical-align: top;
                    min-width: 200px;
                }
                .compare-table th[scope="row"] {
                    min-width: 140px;
                    color: #64748b;
                    font-weight: 500;
                    font-size: 14px;
                }
                .compare-table thead th {
                    position: relative;
                }
                .compare-name {
                    font-weight: 700;
                    margin-top: 8px;
                }
                .compare-remove {
                    position: absolute;
                    top: 8px;
                    right: 8px;
                    background: none;
                    border: none;
                    font-size: 18px;
                    color: #94a3b8;
                    cursor: pointer;
                }
                .compare-features {
                    margin: 0;
                    padding-left: 18px;
                    font-size: 14px;
                }
                "#}
            </style>
        </section>
    }
}
