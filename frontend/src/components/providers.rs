use yew::prelude::*;

use crate::catalog::Provider;

/// Copies of the provider list laid end to end so the marquee loops seamlessly.
const MARQUEE_COPIES: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ProviderStripProps {
    pub providers: Vec<Provider>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(ProviderStrip)]
pub fn provider_strip(props: &ProviderStripProps) -> Html {
    let cards = props
        .providers
        .iter()
        .cycle()
        .take(props.providers.len() * MARQUEE_COPIES)
        .enumerate()
        .map(|(index, provider)| {
            let onclick = {
                let on_select = props.on_select.clone();
                let id = provider.id.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
            };
            let is_selected = props.selected.as_deref() == Some(provider.id.as_str());
            html! {
                <div
                    key={format!("{}-{}", provider.id, index)}
                    class={classes!("provider-card", format!("brand-{}", provider.color), is_selected.then(|| "selected"))}
                    {onclick}
                >
                    <div class="provider-logo">
                        <img src={provider.logo.clone()} alt={provider.name.clone()} />
                    </div>
                    <p class="provider-name">{&provider.name}</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="providers" class="providers-section">
            <div class="container">
                <h2 class="section-title">{"Наши провайдеры"}</h2>
                <div class="provider-marquee">
                    <div class="provider-track">
                        { cards }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .providers-section {
                    padding: 64px 0;
                    background: #f1f5f9;
                }
                .provider-marquee {
                    position: relative;
                    overflow: hidden;
                }
                .provider-track {
                    display: flex;
                    width: max-content;
                    animation: providerScroll 30s linear infinite;
                }
                .provider-marquee:hover .provider-track {
                    animation-play-state: paused;
                }
                .provider-card {
                    flex-shrink: 0;
                    margin: 0 32px;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .provider-card:hover {
                    transform: scale(1.1);
                }
                .provider-logo {
                    width: 128px;
                    height: 128px;
                    padding: 16px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 12px;
                    background: #ffffff;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    border: 3px solid transparent;
                }
                .provider-card.selected .provider-logo {
                    border-color: #2563eb;
                    box-shadow: 0 8px 24px rgba(37, 99, 235, 0.3);
                }
                .provider-logo img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .provider-name {
                    margin-top: 12px;
                    text-align: center;
                    font-weight: 600;
                    font-size: 14px;
                }
                @keyframes providerScroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-33.333%); }
                }
                "#}
            </style>
        </section>
    }
}
