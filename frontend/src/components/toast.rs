use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::compare::COMPARE_LIMIT;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Bumped on every new notice so an identical follow-up restarts the timer.
    pub seq: u32,
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            seq: 0,
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Success,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            ..Self::success(title, description)
        }
    }

    pub fn lead_sent() -> Self {
        Self::success("Заявка отправлена!", "Мы свяжемся с вами в ближайшее время")
    }

    pub fn compare_limit() -> Self {
        Self::destructive(
            "Ограничение",
            &format!("Можно сравнить только {} тарифа одновременно", COMPARE_LIMIT),
        )
    }

    /// Places this notice after `previous` in the display sequence.
    pub fn after(self, previous: Option<&Notice>) -> Self {
        Self {
            seq: previous.map_or(1, |p| p.seq.wrapping_add(1)),
            ..self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let seq = props.notice.as_ref().map(|n| n.seq);
        use_effect_with_deps(
            move |seq| {
                let timeout = seq.map(|_| {
                    Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(()))
                });
                move || drop(timeout)
            },
            seq,
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let kind_class = match notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Destructive => "toast-destructive",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <div class="toast-body">
                <div class="toast-title">{&notice.title}</div>
                <div class="toast-description">{&notice.description}</div>
            </div>
            <button class="toast-close" onclick={close} aria-label="Закрыть">{"×"}</button>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    right: 24px;
                    bottom: 24px;
                    z-index: 200;
                    display: flex;
                    gap: 16px;
                    align-items: flex-start;
                    max-width: 380px;
                    padding: 16px 20px;
                    border-radius: 12px;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.18);
                    animation: toastIn 0.25s ease-out;
                }
                .toast-success {
                    background: #ffffff;
                    color: #0f172a;
                    border: 1px solid #e2e8f0;
                }
                .toast-destructive {
                    background: #dc2626;
                    color: #ffffff;
                }
                .toast-title {
                    font-weight: 600;
                    margin-bottom: 4px;
                }
                .toast-description {
                    font-size: 14px;
                    opacity: 0.9;
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 20px;
                    cursor: pointer;
                    line-height: 1;
                }
                @keyframes toastIn {
                    from { transform: translateY(16px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
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
    fn test_sequence_advances() {
        let first = Notice::lead_sent().after(None);
        assert_eq!(first.seq, 1);
        let second = Notice::lead_sent().after(Some(&first));
        assert_eq!(second.seq, 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_compare_limit_notice() {
        let notice = Notice::compare_limit();
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(notice.title, "Ограничение");
        assert_eq!(notice.description, "Можно сравнить только 3 тарифа одновременно");
    }
}
