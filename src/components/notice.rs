use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

/// One transient app-level notification. Validation, request, and transport
/// failures all surface through this; none of them are fatal.
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub type NoticeHandle = UseStateHandle<Option<Notice>>;

/// Shows a notice and schedules its dismissal. The timeout only clears the
/// notice it was armed for, so a newer notice is not cut short.
pub fn show(handle: &NoticeHandle, kind: NoticeKind, message: impl Into<String>) {
    let notice = Notice {
        kind,
        message: message.into(),
    };
    handle.set(Some(notice.clone()));
    let handle = handle.clone();
    Timeout::new(DISMISS_MS, move || {
        if (*handle).as_ref() == Some(&notice) {
            handle.set(None);
        }
    })
    .forget();
}

#[derive(Properties, PartialEq)]
pub struct NoticeViewProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeView)]
pub fn notice_view(props: &NoticeViewProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let (accent, glyph) = match notice.kind {
        NoticeKind::Success => ("border-green-500 text-green-700", "✓"),
        NoticeKind::Error => ("border-red-500 text-red-700", "✕"),
        NoticeKind::Warning => ("border-amber-500 text-amber-700", "!"),
    };

    html! {
        <div class="fixed top-4 right-4 z-50">
            <div class={format!("flex items-center gap-3 bg-white border-l-4 {} rounded-lg shadow-lg px-4 py-3 text-sm", accent)}>
                <span class="font-bold">{ glyph }</span>
                <span>{ notice.message.clone() }</span>
            </div>
        </div>
    }
}
