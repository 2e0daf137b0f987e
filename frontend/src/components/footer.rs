use chrono::Datelike;
use yew::prelude::*;

use crate::components::dialog::Overlay;
use crate::config;

struct Review {
    author: &'static str,
    gradient: &'static str,
    text: &'static str,
}

const REVIEWS: [Review; 6] = [
    Review {
        author: "Алексей М.",
        gradient: "linear-gradient(135deg, #2563eb, #7c3aed)",
        text: "Отличный сервис! Помогли подобрать идеальный тариф для моей семьи. Интернет работает стабильно, скорость соответствует заявленной. Подключили за 2 дня. Рекомендую!",
    },
    Review {
        author: "Мария К.",
        gradient: "linear-gradient(135deg, #00b956, #2563eb)",
        text: "Очень довольна! Менеджеры вежливые, всё объяснили по полочкам. Цены действительно выгодные, особенно в первые месяцы. ТВ каналы отличные, есть всё что нужно.",
    },
    Review {
        author: "Дмитрий В.",
        gradient: "linear-gradient(135deg, #7c3aed, #ff4f12)",
        text: "Быстрое подключение, отличная скорость интернета для работы из дома. Никаких скрытых платежей, всё прозрачно. Спасибо за качественный сервис!",
    },
    Review {
        author: "Елена С.",
        gradient: "linear-gradient(135deg, #ffc800, #e30611)",
        text: "Сравнивала тарифы на разных сайтах, здесь самое удобное сравнение. Консультант помог выбрать оптимальный вариант. Подключили быстро, всё работает отлично!",
    },
    Review {
        author: "Игорь П.",
        gradient: "linear-gradient(135deg, #2563eb, #00b956)",
        text: "Профессиональный подход! Проверили адрес, предложили несколько вариантов. Выбрал тариф с максимальной скоростью - ни разу не пожалел. Стримы идут без лагов.",
    },
    Review {
        author: "Ольга Т.",
        gradient: "linear-gradient(135deg, #7c3aed, #ffc800)",
        text: "Переехала в новую квартиру, нужен был интернет срочно. Обратилась сюда - подключили через 3 дня! Цена супер, качество связи на высоте. Всем советую!",
    },
];

const STATS: [(&str, &str); 3] = [
    ("15 000+", "Довольных клиентов"),
    ("4.9/5", "Средняя оценка"),
    ("24/7", "Поддержка клиентов"),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_open: Callback<Overlay>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let open = |overlay: Overlay| {
        let on_open = props.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open.emit(overlay.clone());
        })
    };
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <h2 class="section-title">{"Отзывы наших клиентов"}</h2>
                <div class="reviews-grid">
                    {
                        REVIEWS.iter().map(|review| {
                            let initial: String = review.author.chars().take(1).collect();
                            html! {
                                <div class="review-card">
                                    <div class="review-header">
                                        <div class="review-avatar" style={format!("background: {};", review.gradient)}>
                                            {initial}
                                        </div>
                                        <div>
                                            <div class="review-author">{review.author}</div>
                                            <div class="review-stars">{"★★★★★"}</div>
                                        </div>
                                    </div>
                                    <p class="review-text">{review.text}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="stats-grid">
                    {
                        STATS.iter().map(|(value, label)| html! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <p class="stat-label">{*label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-columns">
                    <div>
                        <h3>{config::BRAND_NAME}</h3>
                        <p class="muted">{"Ваш проводник в мир быстрого интернета и качественного телевидения"}</p>
                    </div>
                    <div>
                        <h3>{"Контакты"}</h3>
                        <a class="muted" href={config::phone_link()}>{format!("📞 {}", config::CONTACT_PHONE_DISPLAY)}</a>
                    </div>
                    <div>
                        <h3>{"Социальные сети"}</h3>
                        <div class="social-links">
                            <a class="outline-button" href={config::telegram_link()} target="_blank" rel="noopener noreferrer">{"Telegram"}</a>
                            <a class="outline-button" href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-bottom-row">
                        <p>{format!("© {} {}. Все права защищены.", year, config::BRAND_NAME)}</p>
                        <a href="#faq">{"FAQ"}</a>
                    </div>
                    <p class="consent">
                        {"Продолжая использовать наш сайт, вы даете согласие на обработку файлов "}
                        <button class="link-button" onclick={open(Overlay::CookiesPolicy)}>{"Cookies"}</button>
                        {" и других пользовательских данных, в соответствии с "}
                        <button class="link-button" onclick={open(Overlay::PrivacyPolicy)}>{"Политикой конфиденциальности"}</button>
                        {" и "}
                        <button class="link-button" onclick={open(Overlay::UserAgreement)}>{"Пользовательским соглашением"}</button>
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 48px 0 32px;
                    border-top: 1px solid #e2e8f0;
                    background: #ffffff;
                }
                .reviews-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 24px;
                    margin-bottom: 64px;
                }
                .review-card {
                    padding: 24px;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                }
                .review-header {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    margin-bottom: 12px;
                }
                .review-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 20px;
                }
                .review-author {
                    font-weight: 600;
                }
                .review-stars {
                    color: #facc15;
                }
                .review-text,
                .muted {
                    font-size: 14px;
                    color: #64748b;
                }
                .stats-grid,
                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 32px;
                    padding-top: 48px;
                    margin-bottom: 48px;
                    border-top: 1px solid #e2e8f0;
                }
                .stats-grid {
                    text-align: center;
                }
                .stat-value {
                    font-size: 36px;
                    font-weight: 700;
                    color: #2563eb;
                }
                .social-links {
                    display: flex;
                    gap: 12px;
                }
                .footer-bottom {
                    padding-top: 32px;
                    border-top: 1px solid #e2e8f0;
                    font-size: 14px;
                    color: #64748b;
                }
                .footer-bottom-row {
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 16px;
                }
                .consent {
                    font-size: 12px;
                }
                .link-button {
                    padding: 0;
                    border: none;
                    background: none;
                    color: inherit;
                    font: inherit;
                    text-decoration: underline;
                    cursor: pointer;
                }
                "#}
            </style>
        </footer>
    }
}
