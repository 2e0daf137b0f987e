use yew::prelude::*;

use crate::config::{BRAND_NAME, CONTACT_PHONE_DISPLAY};

const PROVIDER_NAMES: &str = "МТС, Билайн, МегаФон, Ростелеком";

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-text">
            <p>{format!("Настоящая Политика конфиденциальности определяет порядок обработки и защиты информации о физических лицах (далее — Пользователи), использующих сервисы сайта {}.", BRAND_NAME)}</p>

            <h3>{"1. Собираемая информация"}</h3>
            <p>{"Мы собираем информацию, которую вы предоставляете при заполнении форм на сайте: имя, номер телефона, адрес подключения."}</p>

            <h3>{"2. Использование информации"}</h3>
            <p>{"Предоставленная вами информация используется для:"}</p>
            <ul>
                <li>{"Обработки ваших заявок на подключение услуг"}</li>
                <li>{"Связи с вами по вопросам оказания услуг"}</li>
                <li>{"Улучшения качества обслуживания"}</li>
            </ul>

            <h3>{"3. Защита информации"}</h3>
            <p>{"Мы применяем необходимые организационные и технические меры для защиты персональной информации от несанкционированного доступа, изменения, раскрытия или уничтожения."}</p>

            <h3>{"4. Передача третьим лицам"}</h3>
            <p>{format!("Ваши данные могут быть переданы провайдерам услуг ({}) исключительно для обработки вашей заявки на подключение.", PROVIDER_NAMES)}</p>

            <h3>{"5. Контакты"}</h3>
            <p>{format!("По вопросам, связанным с обработкой персональных данных, обращайтесь по телефону: {}", CONTACT_PHONE_DISPLAY)}</p>
        </div>
    }
}

#[function_component(UserAgreement)]
pub fn user_agreement() -> Html {
    html! {
        <div class="legal-text">
            <p>{format!("Настоящее Пользовательское соглашение (далее — Соглашение) регулирует отношения между владельцем сайта {} (далее — Администрация) и пользователями сайта.", BRAND_NAME)}</p>

            <h3>{"1. Общие положения"}</h3>
            <p>{format!("1.1. Используя сайт {}, вы соглашаетесь с условиями настоящего Соглашения.", BRAND_NAME)}</p>
            <p>{"1.2. Если вы не согласны с условиями Соглашения, пожалуйста, прекратите использование сайта."}</p>
            <p>{"1.3. Администрация оставляет за собой право изменять Соглашение без предварительного уведомления."}</p>

            <h3>{"2. Предмет соглашения"}</h3>
            <p>{"2.1. Администрация предоставляет пользователю доступ к информации о тарифах интернет-провайдеров."}</p>
            <p>{"2.2. Администрация выступает в качестве посредника между пользователем и провайдерами услуг."}</p>
            <p>{format!("2.3. Фактическое оказание услуг осуществляется непосредственно провайдерами ({}).", PROVIDER_NAMES)}</p>

            <h3>{"3. Права и обязанности пользователя"}</h3>
            <p>{"3.1. Пользователь обязуется предоставлять достоверную информацию при заполнении форм."}</p>
            <p>{"3.2. Пользователь несет ответственность за сохранность своих персональных данных."}</p>
            <p>{"3.3. Пользователь обязуется не использовать сайт в противоправных целях."}</p>

            <h3>{"4. Ответственность сторон"}</h3>
            <p>{"4.1. Администрация не несет ответственности за качество услуг, предоставляемых провайдерами."}</p>
            <p>{"4.2. Информация на сайте носит справочный характер и может быть изменена провайдерами."}</p>
            <p>{"4.3. Администрация не несет ответственности за технические сбои и временную недоступность сайта."}</p>

            <h3>{"5. Контактная информация"}</h3>
            <p>{format!("По всем вопросам, связанным с настоящим Соглашением, обращайтесь по телефону: {}", CONTACT_PHONE_DISPLAY)}</p>
        </div>
    }
}

#[function_component(CookiesPolicy)]
pub fn cookies_policy() -> Html {
    html! {
        <div class="legal-text">
            <p>{format!("Настоящая Политика использования файлов Cookie объясняет, что такое файлы Cookie и как мы их используем на сайте {}.", BRAND_NAME)}</p>

            <h3>{"1. Что такое Cookie"}</h3>
            <p>{"Cookie — это небольшие текстовые файлы, которые сохраняются на вашем устройстве при посещении сайта. Они помогают сайту запоминать информацию о вашем визите."}</p>

            <h3>{"2. Какие Cookie мы используем"}</h3>
            <p><strong>{"Необходимые Cookie:"}</strong>{" Обеспечивают базовую функциональность сайта (запоминание выбора языка, авторизация)."}</p>
            <p><strong>{"Аналитические Cookie:"}</strong>{" Помогают понять, как пользователи взаимодействуют с сайтом, чтобы улучшить его работу."}</p>
            <p><strong>{"Функциональные Cookie:"}</strong>{" Запоминают ваши предпочтения и выбор (например, выбранный провайдер)."}</p>

            <h3>{"3. Зачем нужны Cookie"}</h3>
            <ul>
                <li>{"Обеспечение корректной работы функций сайта"}</li>
                <li>{"Запоминание выбранных настроек и фильтров"}</li>
                <li>{"Анализ посещаемости для улучшения сервиса"}</li>
                <li>{"Персонализация контента"}</li>
            </ul>

            <h3>{"4. Как управлять Cookie"}</h3>
            <p>{"Вы можете настроить ваш браузер так, чтобы он блокировал все Cookie или уведомлял о их отправке. Однако это может привести к некорректной работе некоторых функций сайта."}</p>
            <p>{"Инструкции по управлению Cookie доступны в настройках вашего браузера:"}</p>
            <ul>
                <li>{"Google Chrome: Настройки → Конфиденциальность и безопасность → Файлы cookie"}</li>
                <li>{"Mozilla Firefox: Настройки → Приватность и защита → Куки и данные сайтов"}</li>
                <li>{"Safari: Настройки → Конфиденциальность → Управление данными сайтов"}</li>
                <li>{"Microsoft Edge: Настройки → Файлы cookie и разрешения сайтов"}</li>
            </ul>

            <h3>{"5. Обновления политики"}</h3>
            <p>{"Мы можем обновлять данную Политику. Рекомендуем периодически проверять эту страницу на наличие изменений."}</p>

            <h3>{"6. Контакты"}</h3>
            <p>{format!("Если у вас есть вопросы о нашей Политике Cookie, свяжитесь с нами по телефону: {}", CONTACT_PHONE_DISPLAY)}</p>
        </div>
    }
}
