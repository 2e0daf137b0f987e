use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

const SCROLLED_THRESHOLD_PX: i32 = 80;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Show the `#order` anchor, only pages with the inline order section have it.
    pub with_order_link: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().and_then(|w| w.document()).map(|document| {
                Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > SCROLLED_THRESHOLD_PX);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors keep their default navigation, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let mut links = vec![("#providers", "Провайдеры"), ("#tariffs", "Тарифы")];
    if props.with_order_link {
        links.push(("#order", "Заявка"));
    }
    links.push(("#faq", "FAQ"));

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-mark">{"🚀"}</span>
                    <span>
                        <span class="nav-logo-name">{config::BRAND_NAME}</span>
                        <span class="nav-logo-tagline">{config::BRAND_TAGLINE}</span>
                    </span>
                </a>

                <a href={config::phone_link()} class="nav-phone">{format!("📞 {}", config::CONTACT_PHONE_DISPLAY)}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Меню">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    {
                        links.into_iter().map(|(href, label)| html! {
                            <a href={href} class="nav-link" onclick={close_menu.clone()}>{label}</a>
                        }).collect::<Html>()
                    }
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    width: 100%;
                    border-bottom: 1px solid #e2e8f0;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.2s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    height: 64px;
                    margin: 0 auto;
                    padding: 0 16px;
                    display: flex;
                    align-items: center;
                    gap: 24px;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    margin-right: auto;
                    color: inherit;
                    text-decoration: none;
                }
                .nav-logo-mark {
                    width: 40px;
                    height: 40px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #7c3aed, #2563eb);
                }
                .nav-logo-name {
                    display: block;
                    font-size: 20px;
                    font-weight: 700;
                }
                .nav-logo-tagline {
                    display: block;
                    font-size: 12px;
                    color: #64748b;
                }
                .nav-phone {
                    font-size: 14px;
                    font-weight: 600;
                    color: inherit;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 24px;
                }
                .nav-link {
                    font-size: 14px;
                    font-weight: 500;
                    color: inherit;
                    text-decoration: none;
                }
                .nav-link:hover,
                .nav-phone:hover {
                    color: #7c3aed;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #0f172a;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-phone {
                        display: none;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 16px;
                        background: #ffffff;
                        border-bottom: 1px solid #e2e8f0;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
