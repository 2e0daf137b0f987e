use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::FaqEntry;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

/// Clicking the open item collapses it, any other item takes its place.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2 class="section-title">{"Часто задаваемые вопросы"}</h2>
                <div class="faq-list">
                    {
                        props.entries.iter().enumerate().map(|(index, entry)| {
                            let on_toggle = {
                                let open = open.clone();
                                Callback::from(move |_: ()| open.set(toggle_open(*open, index)))
                            };
                            html! {
                                <FaqItem
                                    key={index}
                                    question={entry.question.clone()}
                                    answer={entry.answer.clone()}
                                    is_open={*open == Some(index)}
                                    {on_toggle}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 64px 0;
                }
                .faq-list {
                    max-width: 768px;
                    margin: 0 auto;
                }
                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 16px;
                    padding: 16px 0;
                    background: none;
                    border: none;
                    text-align: left;
                    font: inherit;
                    font-weight: 500;
                    cursor: pointer;
                }
                .faq-question:hover .question-text {
                    text-decoration: underline;
                }
                .toggle-icon {
                    font-size: 20px;
                    color: #64748b;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: #475569;
                    font-size: 14px;
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                }
                .faq-answer p {
                    margin: 0 0 16px;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_collapsible_accordion() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        let open = toggle_open(open, 4);
        assert_eq!(open, Some(4));
        assert_eq!(toggle_open(open, 4), None);
    }
}
